//! Handler for `depot install`.

use miette::Result;

use depot_ops::ops_install::{self, InstallOptions};
use depot_ops::CommandResult;

pub fn exec(specs: Vec<String>) -> Result<()> {
    let mut session = super::open_session()?;

    match ops_install::install(session.engine_mut(), &InstallOptions { specs }) {
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
