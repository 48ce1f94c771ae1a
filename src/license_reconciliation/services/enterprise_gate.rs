use crate::license_reconciliation::domain::HostSnapshot;
use std::collections::HashSet;

/// Reason the Enterprise gate fired
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnterpriseTrigger {
    /// The host gained physical cores
    CoreCountIncrease { previous: u32, current: u32 },
    /// A database went from no Enterprise license to having one
    EnterpriseActivated { dbname: String },
}

/// EnterpriseGate decides whether an ingestion requires a new
/// Enterprise-tier license.
///
/// The gate is evaluated per current database and yields at most one
/// trigger per ingestion. A host without databases never triggers it.
/// Without a previous snapshot the previous core count is taken as zero
/// and every database is compared against an empty license set.
/// A name listed twice is judged on its last record, on both sides.
pub struct EnterpriseGate;

impl EnterpriseGate {
    pub fn evaluate(
        previous: Option<&HostSnapshot>,
        current: &HostSnapshot,
    ) -> Option<EnterpriseTrigger> {
        let previous_cores = previous.map_or(0, |snapshot| snapshot.cpu_cores);
        let previous_dbs = previous
            .map(HostSnapshot::databases_by_name)
            .unwrap_or_default();
        let current_dbs = current.databases_by_name();
        let mut seen = HashSet::new();

        current
            .databases
            .iter()
            .filter(|database| seen.insert(database.name.as_str()))
            .find_map(|first| {
                let database = current_dbs
                    .get(first.name.as_str())
                    .copied()
                    .unwrap_or(first);

                if previous_cores < current.cpu_cores {
                    return Some(EnterpriseTrigger::CoreCountIncrease {
                        previous: previous_cores,
                        current: current.cpu_cores,
                    });
                }

                let had_enterprise = previous_dbs
                    .get(database.name.as_str())
                    .is_some_and(|db| db.has_enterprise_license());

                (!had_enterprise && database.has_enterprise_license()).then(|| {
                    EnterpriseTrigger::EnterpriseActivated {
                        dbname: database.name.clone(),
                    }
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_reconciliation::domain::{DatabaseRecord, DatabaseRole, DatabaseStatus};
    use chrono::{TimeZone, Utc};

    fn host(cores: u32, databases: Vec<DatabaseRecord>) -> HostSnapshot {
        let mut snapshot = HostSnapshot::new(
            "ora-prod-01",
            "PRD",
            Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap(),
            cores,
        );
        snapshot.databases = databases;
        snapshot
    }

    fn db(name: &str) -> DatabaseRecord {
        DatabaseRecord::new(name, 1001, DatabaseStatus::Open, DatabaseRole::Primary)
    }

    #[test]
    fn test_core_increase_triggers() {
        let previous = host(4, vec![db("D1")]);
        let current = host(8, vec![db("D1")]);

        assert_eq!(
            EnterpriseGate::evaluate(Some(&previous), &current),
            Some(EnterpriseTrigger::CoreCountIncrease {
                previous: 4,
                current: 8
            })
        );
    }

    #[test]
    fn test_core_decrease_does_not_trigger() {
        let previous = host(8, vec![db("D1").with_license("Oracle ENT", 8.0)]);
        let current = host(4, vec![db("D1").with_license("Oracle ENT", 4.0)]);

        assert_eq!(EnterpriseGate::evaluate(Some(&previous), &current), None);
    }

    #[test]
    fn test_enterprise_activation_triggers() {
        let previous = host(8, vec![db("D1").with_license("Oracle ENT", 0.0)]);
        let current = host(8, vec![db("D1").with_license("Oracle ENT", 8.0)]);

        assert_eq!(
            EnterpriseGate::evaluate(Some(&previous), &current),
            Some(EnterpriseTrigger::EnterpriseActivated {
                dbname: "D1".to_string()
            })
        );
    }

    #[test]
    fn test_new_database_with_enterprise_triggers() {
        let previous = host(8, vec![db("D1")]);
        let current = host(8, vec![db("D1"), db("D2").with_license("Oracle ENT", 2.0)]);

        assert_eq!(
            EnterpriseGate::evaluate(Some(&previous), &current),
            Some(EnterpriseTrigger::EnterpriseActivated {
                dbname: "D2".to_string()
            })
        );
    }

    #[test]
    fn test_standard_edition_does_not_trigger() {
        let previous = host(8, vec![db("D1")]);
        let current = host(8, vec![db("D1").with_license("Oracle STD", 8.0)]);

        assert_eq!(EnterpriseGate::evaluate(Some(&previous), &current), None);
    }

    #[test]
    fn test_single_trigger_when_both_conditions_hold() {
        let previous = host(4, vec![db("D1"), db("D2")]);
        let current = host(
            8,
            vec![
                db("D1").with_license("Oracle ENT", 8.0),
                db("D2").with_license("Oracle ENT", 8.0),
            ],
        );

        assert!(matches!(
            EnterpriseGate::evaluate(Some(&previous), &current),
            Some(EnterpriseTrigger::CoreCountIncrease { .. })
        ));
    }

    #[test]
    fn test_first_ingestion_compares_against_zero_cores() {
        let current = host(4, vec![db("D1")]);
        assert!(EnterpriseGate::evaluate(None, &current).is_some());
    }

    #[test]
    fn test_host_without_databases_never_triggers() {
        let previous = host(4, vec![]);
        let current = host(16, vec![]);
        assert_eq!(EnterpriseGate::evaluate(Some(&previous), &current), None);
    }

    #[test]
    fn test_duplicate_names_judged_on_last_record() {
        let previous = host(
            8,
            vec![
                db("D1").with_license("Oracle ENT", 0.0),
                db("D1").with_license("Oracle ENT", 4.0),
            ],
        );
        let current = host(8, vec![db("D1").with_license("Oracle ENT", 4.0)]);

        assert_eq!(EnterpriseGate::evaluate(Some(&previous), &current), None);
    }

    #[test]
    fn test_earlier_duplicate_in_current_is_ignored() {
        let previous = host(8, vec![db("D1")]);
        let current = host(
            8,
            vec![db("D1").with_license("Oracle ENT", 4.0), db("D1")],
        );

        assert_eq!(EnterpriseGate::evaluate(Some(&previous), &current), None);
    }
}
