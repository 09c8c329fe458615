//! The resolution and consistency engine.
//!
//! The engine exclusively owns the installed set, the reverse-dependency
//! index and the operation history. Every public mutation either applies
//! completely or restores the state it started from, so callers never
//! observe a half-installed graph.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use depot_core::catalog::Catalog;
use depot_core::config::UpgradePolicy;
use depot_core::spec::PackageSpec;
use depot_core::version;
use depot_util::errors::DepotError;
use tracing::{debug, info, warn};

use crate::history::{HistoryEntry, Replaced};
use crate::outcome::Outcome;
use crate::path::ResolutionPath;
use crate::report::{ConsistencyReport, Issue};
use crate::state::EngineState;

/// A package the update chain moves to a new version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainMember {
    pub name: String,
    /// Installed version before the update, `None` if not installed.
    pub from: Option<String>,
    pub to: String,
}

/// A package outside the update chain that pins a chain member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blocker {
    pub dependent: String,
    pub dependency: String,
    pub pinned: String,
}

/// What `update` would do, computed without touching state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlan {
    pub name: String,
    pub from: String,
    pub to: String,
    /// Packages that change together, in breadth-first discovery order
    /// starting at the target package.
    pub chain: Vec<ChainMember>,
    pub blockers: Vec<Blocker>,
}

impl UpdatePlan {
    pub fn is_up_to_date(&self) -> bool {
        version::compare(&self.to, &self.from).is_le()
    }
}

/// Bookkeeping for one resolution pass.
struct Resolution {
    path: ResolutionPath,
    policy: UpgradePolicy,
    added: Vec<String>,
    replaced: Vec<Replaced>,
}

impl Resolution {
    fn new(policy: UpgradePolicy) -> Self {
        Self {
            path: ResolutionPath::new(),
            policy,
            added: Vec::new(),
            replaced: Vec::new(),
        }
    }
}

/// In-memory package manager state bound to a read-only catalog.
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Catalog,
    policy: UpgradePolicy,
    state: EngineState,
}

impl Engine {
    pub fn new(catalog: Catalog) -> Self {
        Self::from_state(catalog, EngineState::default())
    }

    /// Resume from a previously saved state blob.
    pub fn from_state(catalog: Catalog, state: EngineState) -> Self {
        Self {
            catalog,
            policy: UpgradePolicy::default(),
            state,
        }
    }

    pub fn with_policy(mut self, policy: UpgradePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn policy(&self) -> UpgradePolicy {
        self.policy
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn installed(&self) -> &BTreeMap<String, String> {
        &self.state.installed
    }

    pub fn installed_version(&self, name: &str) -> Option<&str> {
        self.state.installed.get(name).map(String::as_str)
    }

    pub fn reverse_deps(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.state.reverse_deps
    }

    pub fn dependents_of(&self, name: &str) -> Vec<String> {
        self.state.dependents_of(name)
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.state.history
    }

    /// A copy of the full state, suitable for persisting.
    pub fn snapshot(&self) -> EngineState {
        self.state.clone()
    }

    /// Replace the full state with a previously taken snapshot.
    pub fn restore(&mut self, state: EngineState) {
        self.state = state;
    }

    /// Install `spec` and any missing dependencies.
    pub fn install(&mut self, spec: &PackageSpec) -> Result<Outcome, DepotError> {
        let (name, version) = self.resolve_request(spec)?;

        let current = self.state.installed.get(&name).cloned();
        if current.as_deref() == Some(version.as_str()) {
            debug!(%name, %version, "already satisfied");
            return Ok(Outcome::AlreadySatisfied { name, version });
        }

        if let Some(current) = &current {
            if let Some((pinned_by, _)) =
                self.pinned_elsewhere(&name, &version, &ResolutionPath::new())
            {
                return Err(DepotError::VersionConflict {
                    name: name.clone(),
                    requested: version,
                    installed: current.clone(),
                    required_by: name,
                    reason: format!("pinned by {pinned_by}"),
                });
            }
        }

        let snapshot = self.state.graph_snapshot();
        let mut resolution = Resolution::new(self.policy);
        if let Err(e) = self.install_resolved(&name, &version, &mut resolution) {
            warn!(%name, %version, error = %e, "install failed, rolling back");
            self.state.rollback(snapshot);
            return Err(e);
        }

        info!(%name, %version, added = resolution.added.len(), "installed");
        self.state.history.push(HistoryEntry::Install {
            name: name.clone(),
            version: version.clone(),
            added: resolution.added.clone(),
            replaced: resolution.replaced.clone(),
        });
        Ok(Outcome::Installed {
            name,
            version,
            added: resolution.added,
            replaced: resolution.replaced,
        })
    }

    /// Remove a package nothing else requires. Dependencies stay installed.
    pub fn remove(&mut self, spec: &PackageSpec) -> Result<Outcome, DepotError> {
        let name = spec.name.clone();
        let Some(version) = self.state.installed.get(&name).cloned() else {
            return Ok(Outcome::NotInstalled { name });
        };

        let dependents = self.state.dependents_of(&name);
        if !dependents.is_empty() {
            return Err(DepotError::DependentsExist { name, dependents });
        }

        self.detach(&name);
        info!(%name, %version, "removed");
        self.state
            .history
            .push(HistoryEntry::Remove { name: name.clone() });
        Ok(Outcome::Removed { name, version })
    }

    /// Move an installed package to a newer version, together with every
    /// package whose required version changes along the way.
    pub fn update(&mut self, spec: &PackageSpec) -> Result<Outcome, DepotError> {
        let plan = self.plan_update(spec)?;
        if plan.is_up_to_date() {
            return Ok(Outcome::UpToDate {
                name: plan.name,
                version: plan.from,
            });
        }
        if let Some(blocker) = plan.blockers.first() {
            return Err(DepotError::UpdateBlocked {
                name: plan.name,
                blocker: blocker.dependent.clone(),
                dependency: blocker.dependency.clone(),
                pinned: blocker.pinned.clone(),
            });
        }

        let snapshot = self.state.graph_snapshot();

        // Discovery order lists dependents before their dependencies.
        let detached: Vec<&ChainMember> =
            plan.chain.iter().filter(|m| m.from.is_some()).collect();
        for member in &detached {
            self.detach(&member.name);
        }

        let mut resolution = Resolution::new(self.policy);
        let result = self
            .install_resolved(&plan.name, &plan.to, &mut resolution)
            .and_then(|()| {
                match detached
                    .iter()
                    .find(|m| !self.state.installed.contains_key(&m.name))
                {
                    Some(missing) => Err(DepotError::Generic {
                        message: format!(
                            "update of {} left {} uninstalled",
                            plan.name, missing.name
                        ),
                    }),
                    None => Ok(()),
                }
            });
        if let Err(e) = result {
            warn!(name = %plan.name, error = %e, "update failed, rolling back");
            self.state.rollback(snapshot);
            return Err(e);
        }

        let chain: Vec<String> = plan.chain.iter().map(|m| m.name.clone()).collect();
        info!(name = %plan.name, from = %plan.from, to = %plan.to, ?chain, "updated");
        self.state.history.push(HistoryEntry::Update {
            name: plan.name.clone(),
            version: plan.to.clone(),
            previous: Some(plan.from.clone()),
        });
        Ok(Outcome::Updated {
            name: plan.name,
            from: plan.from,
            to: plan.to,
            chain,
        })
    }

    /// Compute the update chain and its blockers without mutating anything.
    ///
    /// A pinned `spec` targets that version; otherwise the best available
    /// version is used.
    pub fn plan_update(&self, spec: &PackageSpec) -> Result<UpdatePlan, DepotError> {
        let name = spec.name.clone();
        let from = self
            .state
            .installed
            .get(&name)
            .cloned()
            .ok_or_else(|| DepotError::NotInstalled { name: name.clone() })?;

        let to = match &spec.version {
            Some(v) if self.catalog.contains(&name, v) => v.clone(),
            Some(v) => {
                return Err(DepotError::VersionUnavailable {
                    name,
                    version: v.clone(),
                })
            }
            None => self
                .catalog
                .best_available(&name)
                .map(str::to_string)
                .ok_or_else(|| DepotError::PackageNotFound { name: name.clone() })?,
        };

        if version::compare(&to, &from).is_le() {
            return Ok(UpdatePlan {
                name,
                from,
                to,
                chain: Vec::new(),
                blockers: Vec::new(),
            });
        }

        let chain = self.update_chain(&name, &to);
        let blockers = self.find_blockers(&chain);
        debug!(%name, %from, %to, chain = chain.len(), blockers = blockers.len(), "update planned");
        Ok(UpdatePlan {
            name,
            from,
            to,
            chain,
            blockers,
        })
    }

    /// Reverse the most recent history entry.
    ///
    /// The entry is only popped once the reversal succeeded.
    pub fn undo_last(&mut self) -> Result<Outcome, DepotError> {
        let entry = self
            .state
            .history
            .last()
            .cloned()
            .ok_or(DepotError::NothingToUndo)?;

        let outcome = match &entry {
            HistoryEntry::Install {
                name,
                version,
                added,
                replaced,
            } if self.install_left_nothing(added, replaced) => Outcome::NotReversible {
                description: format!("install of {name}=={version} has nothing left to revert"),
            },
            HistoryEntry::Install {
                name,
                version,
                added,
                replaced,
            } => {
                self.revert_install(added, replaced)?;
                Outcome::Undone {
                    description: format!("install of {name}=={version} reverted"),
                }
            }
            HistoryEntry::Remove { name } => Outcome::NotReversible {
                description: format!("removal of {name} cannot be undone"),
            },
            HistoryEntry::Update {
                name,
                version,
                previous: Some(previous),
            } => {
                self.revert_to(name, previous)?;
                Outcome::Undone {
                    description: format!("{name} reverted from {version} to {previous}"),
                }
            }
            HistoryEntry::Update {
                name,
                previous: None,
                ..
            } => Outcome::NotReversible {
                description: format!("nothing to revert {name} to"),
            },
        };

        self.state.history.pop();
        info!(entry = entry.name(), "undone");
        Ok(outcome)
    }

    /// True if an installed package other than `name` pins `name` at a
    /// version different from `target`.
    pub fn has_conflict(&self, name: &str, target: &str) -> bool {
        self.pinned_elsewhere(name, target, &ResolutionPath::new())
            .is_some()
    }

    /// Verify the installed set against the catalog and the
    /// reverse-dependency index.
    pub fn check(&self) -> ConsistencyReport {
        let mut report = ConsistencyReport::new();
        let mut expected: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

        for (pkg, ver) in &self.state.installed {
            if !self.catalog.contains(pkg, ver) {
                report.add(Issue::UnknownVersion {
                    package: pkg.clone(),
                    version: ver.clone(),
                });
            }
            for dep in self.catalog.dependencies_of(pkg, ver) {
                expected
                    .entry(dep.name.as_str())
                    .or_default()
                    .insert(pkg.as_str());
                match (self.state.installed.get(&dep.name), &dep.version) {
                    (None, _) => report.add(Issue::MissingDependency {
                        package: pkg.clone(),
                        dependency: dep.name.clone(),
                    }),
                    (Some(installed), Some(required)) if installed != required => {
                        report.add(Issue::PinMismatch {
                            package: pkg.clone(),
                            dependency: dep.name.clone(),
                            required: required.clone(),
                            installed: installed.clone(),
                        })
                    }
                    _ => {}
                }
            }
        }

        for (dep, dependents) in &expected {
            let recorded = self.state.reverse_deps.get(*dep);
            for dependent in dependents {
                if !recorded.is_some_and(|r| r.contains(*dependent)) {
                    report.add(Issue::MissingReverseEdge {
                        dependency: dep.to_string(),
                        dependent: dependent.to_string(),
                    });
                }
            }
        }
        for (dep, recorded) in &self.state.reverse_deps {
            let justified = expected.get(dep.as_str());
            for dependent in recorded {
                if !justified.is_some_and(|j| j.contains(dependent.as_str())) {
                    report.add(Issue::StaleReverseEdge {
                        dependency: dep.clone(),
                        dependent: dependent.clone(),
                    });
                }
            }
        }

        report
    }

    fn resolve_request(&self, spec: &PackageSpec) -> Result<(String, String), DepotError> {
        let name = spec.name.clone();
        if !self.catalog.contains_package(&name) {
            return Err(DepotError::PackageNotFound { name });
        }
        let version = match &spec.version {
            Some(v) => v.clone(),
            None => self
                .catalog
                .best_available(&name)
                .map(str::to_string)
                .ok_or_else(|| DepotError::PackageNotFound { name: name.clone() })?,
        };
        if !self.catalog.contains(&name, &version) {
            return Err(DepotError::VersionUnavailable { name, version });
        }
        Ok((name, version))
    }

    /// Install `name==version`, recursing into dependencies in declaration
    /// order. Leaves partial changes behind on error; callers roll back.
    fn install_resolved(
        &mut self,
        name: &str,
        version: &str,
        resolution: &mut Resolution,
    ) -> Result<(), DepotError> {
        if !self.catalog.contains(name, version) {
            return Err(DepotError::VersionUnavailable {
                name: name.to_string(),
                version: version.to_string(),
            });
        }
        if !resolution.path.enter(name, version) {
            return Err(DepotError::CyclicDependency {
                chain: resolution.path.cycle_through(name),
            });
        }

        let previous = self.state.installed.get(name).cloned();
        if let Some(prev) = &previous {
            for dep in self.catalog.dependencies_of(name, prev) {
                self.state.unlink(name, &dep.name);
            }
        }

        let deps = self.catalog.dependencies_of(name, version).to_vec();
        for dep in &deps {
            if resolution.path.contains(&dep.name) {
                return Err(DepotError::CyclicDependency {
                    chain: resolution.path.cycle_through(&dep.name),
                });
            }

            let installed = self.state.installed.get(&dep.name).cloned();
            match (installed, &dep.version) {
                (Some(_), None) => {}
                (Some(current), Some(wanted)) if current == *wanted => {}
                (Some(current), Some(wanted)) => {
                    self.check_upgrade(&dep.name, &current, wanted, name, resolution)?;
                    info!(
                        dependency = %dep.name,
                        from = %current,
                        to = %wanted,
                        required_by = %name,
                        "upgrading shared dependency in place"
                    );
                    self.install_resolved(&dep.name, wanted, resolution)?;
                }
                (None, wanted) => {
                    if !self.catalog.contains_package(&dep.name) {
                        return Err(DepotError::PackageNotFound {
                            name: dep.name.clone(),
                        });
                    }
                    let target = match wanted {
                        Some(v) => v.clone(),
                        None => self
                            .catalog
                            .best_available(&dep.name)
                            .map(str::to_string)
                            .ok_or_else(|| DepotError::PackageNotFound {
                                name: dep.name.clone(),
                            })?,
                    };
                    debug!(dependency = %dep.name, version = %target, required_by = %name, "installing dependency");
                    self.install_resolved(&dep.name, &target, resolution)?;
                }
            }
            self.state.link(name, &dep.name);
        }

        self.state
            .installed
            .insert(name.to_string(), version.to_string());
        match previous {
            Some(previous) => resolution.replaced.push(Replaced {
                name: name.to_string(),
                previous,
            }),
            None => resolution.added.push(name.to_string()),
        }
        resolution.path.leave();
        Ok(())
    }

    /// Decide whether an installed dependency may move to `wanted`.
    fn check_upgrade(
        &self,
        name: &str,
        current: &str,
        wanted: &str,
        required_by: &str,
        resolution: &Resolution,
    ) -> Result<(), DepotError> {
        let conflict = |reason: String| DepotError::VersionConflict {
            name: name.to_string(),
            requested: wanted.to_string(),
            installed: current.to_string(),
            required_by: required_by.to_string(),
            reason,
        };
        if resolution.policy == UpgradePolicy::Strict {
            return Err(conflict("strict upgrade policy".to_string()));
        }
        if let Some((pinned_by, pinned)) = self.pinned_elsewhere(name, wanted, &resolution.path) {
            return Err(conflict(format!("{pinned_by} pins {pinned}")));
        }
        Ok(())
    }

    /// Find a package other than `name` that pins `name` at a fixed version
    /// different from `target`. Packages on `path` are judged by the version
    /// they are being installed at, not the one currently installed.
    fn pinned_elsewhere(
        &self,
        name: &str,
        target: &str,
        path: &ResolutionPath,
    ) -> Option<(String, String)> {
        let mut candidates: BTreeMap<&str, &str> = self
            .state
            .installed
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect();
        for pending in path.names() {
            if let Some(v) = path.pending_version(pending) {
                candidates.insert(pending, v);
            }
        }

        candidates
            .into_iter()
            .filter(|(pkg, _)| *pkg != name)
            .find_map(|(pkg, ver)| {
                self.catalog
                    .dependencies_of(pkg, ver)
                    .iter()
                    .find_map(|dep| match &dep.version {
                        Some(pinned) if dep.name == name && pinned != target => {
                            Some((pkg.to_string(), pinned.clone()))
                        }
                        _ => None,
                    })
            })
    }

    /// Breadth-first closure from `name==target` over packages whose
    /// required version is not the installed one.
    ///
    /// A pinned requirement outranks an unpinned one met earlier in the walk;
    /// when that happens the walk restarts with the pin fixed up front.
    fn update_chain(&self, name: &str, target: &str) -> Vec<ChainMember> {
        let mut pins: HashMap<String, String> = HashMap::new();
        loop {
            match self.walk_chain(name, target, &pins) {
                Ok(chain) => return chain,
                Err((dependency, version)) => {
                    debug!(%dependency, %version, "pinned requirement overrides, rewalking chain");
                    pins.insert(dependency, version);
                }
            }
        }
    }

    /// One breadth-first pass. Fails with the `(name, version)` of a pin that
    /// contradicts an earlier unpinned choice.
    fn walk_chain(
        &self,
        name: &str,
        target: &str,
        pins: &HashMap<String, String>,
    ) -> Result<Vec<ChainMember>, (String, String)> {
        let mut chain = Vec::new();
        // Chosen version per package, and whether a pin chose it.
        let mut seen: HashMap<String, (String, bool)> = HashMap::new();
        let mut queue: VecDeque<(String, String)> = VecDeque::new();
        seen.insert(name.to_string(), (target.to_string(), true));
        queue.push_back((name.to_string(), target.to_string()));

        while let Some((pkg, ver)) = queue.pop_front() {
            let installed = self.state.installed.get(&pkg).cloned();
            if installed.as_deref() == Some(ver.as_str()) {
                continue;
            }

            for dep in self.catalog.dependencies_of(&pkg, &ver) {
                let wanted = match (&dep.version, pins.get(&dep.name)) {
                    (Some(v), _) | (None, Some(v)) => Some((v.clone(), true)),
                    (None, None) => self
                        .state
                        .installed
                        .get(&dep.name)
                        .cloned()
                        .or_else(|| self.catalog.best_available(&dep.name).map(str::to_string))
                        .map(|v| (v, false)),
                };
                let Some((wanted, pinned)) = wanted else {
                    continue;
                };

                match seen.get(&dep.name) {
                    Some((chosen, false)) if pinned && *chosen != wanted => {
                        return Err((dep.name.clone(), wanted));
                    }
                    Some(_) => {}
                    None => {
                        seen.insert(dep.name.clone(), (wanted.clone(), pinned));
                        queue.push_back((dep.name.clone(), wanted));
                    }
                }
            }

            chain.push(ChainMember {
                name: pkg,
                from: installed,
                to: ver,
            });
        }

        Ok(chain)
    }

    /// Installed chain members pinned by a package outside the chain.
    fn find_blockers(&self, chain: &[ChainMember]) -> Vec<Blocker> {
        let members: HashSet<&str> = chain.iter().map(|m| m.name.as_str()).collect();
        let mut blockers = Vec::new();

        for member in chain.iter().filter(|m| m.from.is_some()) {
            for dependent in self.state.dependents_of(&member.name) {
                if members.contains(dependent.as_str()) {
                    continue;
                }
                let Some(dep_version) = self.state.installed.get(&dependent) else {
                    continue;
                };
                for dep in self.catalog.dependencies_of(&dependent, dep_version) {
                    match &dep.version {
                        Some(pinned) if dep.name == member.name && *pinned != member.to => {
                            blockers.push(Blocker {
                                dependent: dependent.clone(),
                                dependency: member.name.clone(),
                                pinned: pinned.clone(),
                            });
                        }
                        _ => {}
                    }
                }
            }
        }

        blockers
    }

    /// Drop `name` from the installed set along with the reverse edges its
    /// current version contributes. Edges pointing at `name` stay.
    fn detach(&mut self, name: &str) {
        if let Some(version) = self.state.installed.remove(name) {
            for dep in self.catalog.dependencies_of(name, &version) {
                self.state.unlink(name, &dep.name);
            }
        }
    }

    /// True once every package an install added is gone and every package
    /// it replaced is back at its previous version.
    fn install_left_nothing(&self, added: &[String], replaced: &[Replaced]) -> bool {
        added
            .iter()
            .all(|pkg| !self.state.installed.contains_key(pkg))
            && replaced
                .iter()
                .all(|r| self.installed_version(&r.name) == Some(r.previous.as_str()))
    }

    fn revert_install(
        &mut self,
        added: &[String],
        replaced: &[Replaced],
    ) -> Result<(), DepotError> {
        let touched: HashSet<&str> = added
            .iter()
            .map(String::as_str)
            .chain(replaced.iter().map(|r| r.name.as_str()))
            .collect();
        for pkg in added {
            let outside: Vec<String> = self
                .state
                .dependents_of(pkg)
                .into_iter()
                .filter(|d| !touched.contains(d.as_str()))
                .collect();
            if !outside.is_empty() {
                return Err(DepotError::DependentsExist {
                    name: pkg.clone(),
                    dependents: outside,
                });
            }
        }

        let snapshot = self.state.graph_snapshot();
        for pkg in added.iter().rev() {
            self.detach(pkg);
        }
        for r in replaced.iter().rev() {
            if self.installed_version(&r.name) == Some(r.previous.as_str()) {
                continue;
            }
            if let Err(e) = self.reinstall(&r.name, &r.previous) {
                warn!(name = %r.name, error = %e, "undo failed, rolling back");
                self.state.rollback(snapshot);
                return Err(e);
            }
        }
        Ok(())
    }

    fn revert_to(&mut self, name: &str, previous: &str) -> Result<(), DepotError> {
        let snapshot = self.state.graph_snapshot();
        if let Err(e) = self.reinstall(name, previous) {
            warn!(%name, error = %e, "undo failed, rolling back");
            self.state.rollback(snapshot);
            return Err(e);
        }
        Ok(())
    }

    /// Put `name` back at `version`, refusing if another package pins a
    /// different version. Shared dependencies follow in place.
    fn reinstall(&mut self, name: &str, version: &str) -> Result<(), DepotError> {
        if let Some((pinned_by, pinned)) =
            self.pinned_elsewhere(name, version, &ResolutionPath::new())
        {
            return Err(DepotError::VersionConflict {
                name: name.to_string(),
                requested: version.to_string(),
                installed: self.installed_version(name).unwrap_or("none").to_string(),
                required_by: "undo".to_string(),
                reason: format!("{pinned_by} pins {pinned}"),
            });
        }
        let mut resolution = Resolution::new(UpgradePolicy::InPlace);
        self.install_resolved(name, version, &mut resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(entries: &[(&str, &str, &[&str])]) -> Catalog {
        let mut c = Catalog::new();
        for (name, version, deps) in entries {
            c.add_version(name, version, *deps).unwrap();
        }
        c
    }

    fn spec(s: &str) -> PackageSpec {
        PackageSpec::parse(s).unwrap()
    }

    #[test]
    fn install_resolves_best_version() {
        let mut engine = Engine::new(catalog(&[("C", "1.0", &[]), ("C", "2.0", &[])]));
        engine.install(&spec("C")).unwrap();
        assert_eq!(engine.installed_version("C"), Some("2.0"));
    }

    #[test]
    fn unpinned_dependency_accepts_installed_version() {
        let mut engine = Engine::new(catalog(&[
            ("C", "1.0", &[]),
            ("C", "2.0", &[]),
            ("B", "1.0", &["C"]),
        ]));
        engine.install(&spec("C==1.0")).unwrap();
        engine.install(&spec("B")).unwrap();
        assert_eq!(engine.installed_version("C"), Some("1.0"));
        assert_eq!(engine.dependents_of("C"), vec!["B".to_string()]);
    }

    #[test]
    fn pinned_elsewhere_sees_pending_versions() {
        let engine = Engine::new(catalog(&[
            ("C", "1.0", &[]),
            ("D", "1.0", &["C==1.0"]),
        ]));
        let mut path = ResolutionPath::new();
        path.enter("D", "1.0");
        assert_eq!(
            engine.pinned_elsewhere("C", "2.0", &path),
            Some(("D".to_string(), "1.0".to_string()))
        );
        assert_eq!(engine.pinned_elsewhere("C", "1.0", &path), None);
    }

    #[test]
    fn update_chain_is_breadth_first() {
        let mut engine = Engine::new(catalog(&[
            ("A", "1.0", &["B==1.0"]),
            ("A", "2.0", &["B==2.0"]),
            ("B", "1.0", &["C==1.0"]),
            ("B", "2.0", &["C==2.0"]),
            ("C", "1.0", &[]),
            ("C", "2.0", &[]),
        ]));
        engine.install(&spec("A==1.0")).unwrap();
        let names: Vec<String> = engine
            .update_chain("A", "2.0")
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
