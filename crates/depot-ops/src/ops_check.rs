//! Operation: verify the installed set against its invariants.

use depot_resolver::report::ConsistencyReport;
use depot_resolver::Engine;

use crate::CommandResult;

/// A clean report is a success; any issue turns it into `Info` for the
/// caller to present.
pub fn check(engine: &Engine) -> CommandResult<ConsistencyReport> {
    let report = engine.check();
    if report.is_empty() {
        CommandResult::Success(report)
    } else {
        CommandResult::Info(report)
    }
}
