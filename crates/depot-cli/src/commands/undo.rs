//! Handler for `depot undo`.

use miette::Result;

use depot_ops::ops_undo;

pub fn exec() -> Result<()> {
    let mut session = super::open_session()?;

    // A non-reversible entry still leaves history, so any result but an
    // error is saved.
    let outcome = ops_undo::undo(session.engine_mut()).into_result()?;
    session.save()?;
    super::report(std::slice::from_ref(&outcome));
    Ok(())
}
