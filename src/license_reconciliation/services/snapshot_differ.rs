use crate::license_reconciliation::domain::{
    is_baseline_edition, DatabaseRecord, HostSnapshot, LicenseEntry,
};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Change of a license's activation state between two snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseTransition {
    /// Zero or absent before, positive now
    Activated,
    /// Positive before, zero or absent now
    Deactivated,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationEvent {
    pub database_name: String,
    pub license_name: String,
    pub transition: LicenseTransition,
}

/// SnapshotDiff - result of comparing two snapshots of the same host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotDiff {
    /// Databases of the current snapshot absent from the previous one,
    /// in current snapshot order
    pub new_databases: Vec<String>,
    /// One event per license name per database present in both snapshots
    pub activation_events: Vec<ActivationEvent>,
}

impl SnapshotDiff {
    /// Activated optional features per database, baseline editions excluded
    ///
    /// Databases are keyed by name; feature names are sorted.
    pub fn activated_features(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut activated: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

        for event in &self.activation_events {
            if event.transition == LicenseTransition::Activated
                && !is_baseline_edition(&event.license_name)
            {
                activated
                    .entry(event.database_name.as_str())
                    .or_default()
                    .push(event.license_name.as_str());
            }
        }

        activated
    }

    pub fn transitions(&self, transition: LicenseTransition) -> usize {
        self.activation_events
            .iter()
            .filter(|event| event.transition == transition)
            .count()
    }
}

/// SnapshotDiffer computes the changes between two temporally ordered
/// snapshots of one host.
///
/// Databases are correlated by name. When a snapshot lists the same name
/// twice, the later record is used.
pub struct SnapshotDiffer;

impl SnapshotDiffer {
    /// Diffs `current` against `previous`
    ///
    /// # Arguments
    /// * `previous` - Earlier snapshot, `None` on the first ingestion of a host
    /// * `current` - Snapshot being ingested
    pub fn diff(previous: Option<&HostSnapshot>, current: &HostSnapshot) -> SnapshotDiff {
        let previous_dbs: HashMap<&str, &DatabaseRecord> = previous
            .map(HostSnapshot::databases_by_name)
            .unwrap_or_default();
        let current_dbs = current.databases_by_name();

        let mut diff = SnapshotDiff::default();
        let mut seen = BTreeSet::new();

        for database in &current.databases {
            let name = database.name.as_str();
            if !seen.insert(name) {
                continue;
            }

            match previous_dbs.get(name) {
                None => diff.new_databases.push(name.to_string()),
                Some(previous_db) => {
                    let current_db = current_dbs.get(name).copied().unwrap_or(database);
                    for (license_name, transition) in
                        Self::diff_licenses(&previous_db.licenses, &current_db.licenses)
                    {
                        diff.activation_events.push(ActivationEvent {
                            database_name: name.to_string(),
                            license_name,
                            transition,
                        });
                    }
                }
            }
        }

        diff
    }

    /// Classifies every license name found on either side
    ///
    /// A name counts as active when any entry carrying it has a positive
    /// count, so duplicate entries cannot make the result order-dependent.
    pub fn diff_licenses(
        previous: &[LicenseEntry],
        current: &[LicenseEntry],
    ) -> BTreeMap<String, LicenseTransition> {
        let was_active = Self::activity(previous);
        let is_active = Self::activity(current);

        let names: BTreeSet<&str> = was_active.keys().chain(is_active.keys()).copied().collect();

        names
            .into_iter()
            .map(|name| {
                let before = was_active.get(name).copied().unwrap_or(false);
                let after = is_active.get(name).copied().unwrap_or(false);
                let transition = match (before, after) {
                    (false, true) => LicenseTransition::Activated,
                    (true, false) => LicenseTransition::Deactivated,
                    _ => LicenseTransition::Unchanged,
                };
                (name.to_string(), transition)
            })
            .collect()
    }

    fn activity(licenses: &[LicenseEntry]) -> HashMap<&str, bool> {
        let mut activity: HashMap<&str, bool> = HashMap::new();
        for license in licenses {
            *activity.entry(license.name.as_str()).or_insert(false) |= license.is_active();
        }
        activity
    }
}
