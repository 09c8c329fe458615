//! Handler for `depot list`.

use miette::Result;

use depot_ops::ops_list;
use depot_util::progress;

pub fn exec() -> Result<()> {
    let session = super::open_session()?;
    let entries = ops_list::list(session.engine()).into_result()?;

    if entries.is_empty() {
        progress::status_info("Info", "no packages installed");
        return Ok(());
    }

    for entry in entries {
        let mut line = format!("{}=={}", entry.name, entry.version);
        if !entry.dependencies.is_empty() {
            let deps: Vec<String> = entry.dependencies.iter().map(|d| d.to_string()).collect();
            line.push_str(&format!(" -> {}", deps.join(", ")));
        }
        if !entry.dependents.is_empty() {
            line.push_str(&format!(" (required by {})", entry.dependents.join(", ")));
        }
        println!("{line}");
    }
    Ok(())
}
