use async_trait::async_trait;
use oracle_license_reconciler::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock PrimaryDatabaseRepository serving a fixed fleet listing
///
/// Clones share the call counter.
#[derive(Clone, Default)]
pub struct MockPrimaryDatabaseRepository {
    pub databases: Vec<DatabaseRecord>,
    pub should_fail: bool,
    calls: Arc<AtomicUsize>,
}

impl MockPrimaryDatabaseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_primary(mut self, database: DatabaseRecord) -> Self {
        self.databases.push(database);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PrimaryDatabaseRepository for MockPrimaryDatabaseRepository {
    async fn fetch_primary_open_databases(&self) -> Result<Vec<DatabaseRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock fleet inventory failure");
        }
        Ok(self.databases.clone())
    }
}
