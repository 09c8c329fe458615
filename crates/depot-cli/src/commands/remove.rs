//! Handler for `depot remove`.

use miette::Result;

use depot_ops::ops_remove::{self, RemoveOptions};
use depot_ops::CommandResult;

pub fn exec(names: Vec<String>) -> Result<()> {
    let mut session = super::open_session()?;

    match ops_remove::remove(session.engine_mut(), &RemoveOptions { names }) {
        CommandResult::Error(e) => Err(e.into()),
        CommandResult::Success(outcomes) => {
            session.save()?;
            super::report(&outcomes);
            Ok(())
        }
        CommandResult::Info(outcomes) => {
            super::report(&outcomes);
            Ok(())
        }
    }
}
