//! Handler for `depot tree`.

use miette::Result;

use depot_ops::ops_tree::{self, TreeOptions};
use depot_ops::CommandResult;
use depot_util::progress;

pub fn exec(name: Option<String>, inverted: bool, depth: Option<usize>) -> Result<()> {
    let session = super::open_session()?;

    let opts = TreeOptions {
        root: name,
        inverted,
        depth,
    };
    match ops_tree::tree(session.engine(), &opts) {
        CommandResult::Error(e) => Err(e.into()),
        CommandResult::Info(_) => {
            progress::status_info("Info", "no packages installed");
            Ok(())
        }
        CommandResult::Success(text) => {
            print!("{text}");
            Ok(())
        }
    }
}
