//! Handler for `depot update`.

use miette::Result;

use depot_ops::ops_update::{self, UpdateOptions, UpdateReport};
use depot_resolver::engine::UpdatePlan;
use depot_util::progress;

pub fn exec(spec: String, dry_run: bool) -> Result<()> {
    let mut session = super::open_session()?;

    let result = ops_update::update(session.engine_mut(), &UpdateOptions { spec, dry_run });
    let changed = result.is_success();
    match result.into_result()? {
        UpdateReport::Applied(outcome) => {
            if changed {
                session.save()?;
            }
            super::report(std::slice::from_ref(&outcome));
        }
        UpdateReport::Planned(plan) => print_plan(&plan),
    }
    Ok(())
}

fn print_plan(plan: &UpdatePlan) {
    if plan.is_up_to_date() {
        progress::status_info(
            "Info",
            &format!("no newer version of {} (installed {})", plan.name, plan.from),
        );
        return;
    }

    println!("{} {} -> {}", plan.name, plan.from, plan.to);
    for member in plan.chain.iter().filter(|m| m.name != plan.name) {
        match &member.from {
            Some(from) => println!("  {} {from} -> {}", member.name, member.to),
            None => println!("  {} (new) {}", member.name, member.to),
        }
    }
    for blocker in &plan.blockers {
        progress::status_warn(
            "Blocked",
            &format!(
                "{} requires {}=={}",
                blocker.dependent, blocker.dependency, blocker.pinned
            ),
        );
    }
}
