//! Operation: remove installed packages or groups.

use depot_resolver::component::Component;
use depot_resolver::{Engine, Outcome};
use depot_util::errors::DepotError;
use tracing::warn;

use crate::CommandResult;

/// Options for `depot remove`.
#[derive(Default)]
pub struct RemoveOptions {
    /// Package names or group references (`@name`).
    pub names: Vec<String>,
}

/// Remove every requested package. Dependencies stay installed. Either all
/// removals succeed or the engine is left exactly as it was.
pub fn remove(engine: &mut Engine, opts: &RemoveOptions) -> CommandResult<Vec<Outcome>> {
    let before = engine.snapshot();
    let result = remove_all(engine, &opts.names);
    if let Err(e) = &result {
        warn!(error = %e, "remove aborted, restoring state");
        engine.restore(before);
    }
    result.into()
}

fn remove_all(engine: &mut Engine, names: &[String]) -> Result<Vec<Outcome>, DepotError> {
    let mut outcomes = Vec::new();
    for reference in names {
        let component = Component::from_catalog(engine.catalog(), reference)?;
        outcomes.extend(component.remove(engine)?);
    }
    Ok(outcomes)
}
