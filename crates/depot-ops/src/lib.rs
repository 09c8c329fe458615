//! Command operations for depot. Each operation binds one CLI command to the
//! engine and returns a [`CommandResult`] the caller can branch on; turning
//! that result into text is left to the CLI.

pub mod ops_check;
pub mod ops_install;
pub mod ops_list;
pub mod ops_remove;
pub mod ops_tree;
pub mod ops_undo;
pub mod ops_update;
pub mod session;

pub use session::Session;

use depot_resolver::Outcome;
use depot_util::errors::DepotError;

/// Structured result of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult<T> {
    /// The command did what was asked.
    Success(T),
    /// Nothing needed doing, or the command only reports.
    Info(T),
    /// The command failed and left the engine as it was.
    Error(DepotError),
}

impl<T> CommandResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandResult::Success(_))
    }

    pub fn is_info(&self) -> bool {
        matches!(self, CommandResult::Info(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CommandResult::Error(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            CommandResult::Success(v) | CommandResult::Info(v) => Some(v),
            CommandResult::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&DepotError> {
        match self {
            CommandResult::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CommandResult<U> {
        match self {
            CommandResult::Success(v) => CommandResult::Success(f(v)),
            CommandResult::Info(v) => CommandResult::Info(f(v)),
            CommandResult::Error(e) => CommandResult::Error(e),
        }
    }

    pub fn into_result(self) -> Result<T, DepotError> {
        match self {
            CommandResult::Success(v) | CommandResult::Info(v) => Ok(v),
            CommandResult::Error(e) => Err(e),
        }
    }
}

impl From<Result<Outcome, DepotError>> for CommandResult<Outcome> {
    fn from(result: Result<Outcome, DepotError>) -> Self {
        match result {
            Ok(outcome) if outcome.is_informational() => CommandResult::Info(outcome),
            Ok(outcome) => CommandResult::Success(outcome),
            Err(e) => CommandResult::Error(e),
        }
    }
}

impl From<Result<Vec<Outcome>, DepotError>> for CommandResult<Vec<Outcome>> {
    /// A batch counts as a success if any of its outcomes changed something.
    fn from(result: Result<Vec<Outcome>, DepotError>) -> Self {
        match result {
            Ok(outcomes) if outcomes.iter().all(Outcome::is_informational) => {
                CommandResult::Info(outcomes)
            }
            Ok(outcomes) => CommandResult::Success(outcomes),
            Err(e) => CommandResult::Error(e),
        }
    }
}
