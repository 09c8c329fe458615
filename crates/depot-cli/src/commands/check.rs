//! Handler for `depot check`.

use miette::Result;

use depot_ops::ops_check;
use depot_util::errors::DepotError;

pub fn exec() -> Result<()> {
    let session = super::open_session()?;
    let result = ops_check::check(session.engine());
    let clean = result.is_success();
    let report = result.into_result()?;

    println!("{report}");
    if !clean {
        return Err(DepotError::Generic {
            message: format!("found {} inconsistencies", report.len()),
        }
        .into());
    }
    Ok(())
}
