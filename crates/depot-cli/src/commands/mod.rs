//! Command dispatch and handler modules.

mod check;
mod install;
mod list;
mod remove;
mod tree;
mod undo;
mod update;

use miette::Result;

use depot_ops::Session;
use depot_resolver::Outcome;
use depot_util::errors::DepotError;
use depot_util::progress;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    tracing::debug!(command = ?cli.command, "dispatching");
    match cli.command {
        Command::Install { specs } => install::exec(specs),
        Command::Remove { names } => remove::exec(names),
        Command::Update { spec, dry_run } => update::exec(spec, dry_run),
        Command::List => list::exec(),
        Command::Undo => undo::exec(),
        Command::Tree {
            name,
            inverted,
            depth,
        } => tree::exec(name, inverted, depth),
        Command::Check => check::exec(),
    }
}

/// Open the project containing the current directory.
fn open_session() -> Result<Session> {
    let cwd = std::env::current_dir().map_err(DepotError::from)?;
    Session::open(&cwd)
}

/// Print one status line per outcome.
fn report(outcomes: &[Outcome]) {
    for outcome in outcomes {
        let message = outcome.to_string();
        match outcome {
            Outcome::Installed { .. } => progress::status("Installed", &message),
            Outcome::Removed { .. } => progress::status("Removed", &message),
            Outcome::Updated { .. } => progress::status("Updated", &message),
            Outcome::Undone { .. } => progress::status("Undone", &message),
            _ => progress::status_info("Info", &message),
        }
    }
}
