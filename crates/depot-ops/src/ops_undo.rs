//! Operation: undo the most recent install, removal or update.

use depot_resolver::{Engine, Outcome};

use crate::CommandResult;

pub fn undo(engine: &mut Engine) -> CommandResult<Outcome> {
    engine.undo_last().into()
}
