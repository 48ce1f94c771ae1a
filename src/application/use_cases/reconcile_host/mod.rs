use crate::application::dto::{ReconcileCheck, ReconcileRequest, ReconcileResponse};
use crate::license_reconciliation::domain::{
    Alert, DatabaseRecord, HostSnapshot, LicenseTypeCatalogEntry,
};
use crate::license_reconciliation::policies::{CoreFactorPolicy, LicenseTypeMetrics};
use crate::license_reconciliation::services::{
    EnterpriseGate, EntitlementCalculator, LicenseTypeResolver, PrimaryDatabaseLookup,
    SnapshotDiffer,
};
use crate::ports::outbound::{AlertEmitter, LicenseTypeRepository, PrimaryDatabaseRepository};
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use tracing::Instrument;

/// ReconcileHostUseCase - license reconciliation and change alerting for
/// one host ingestion
///
/// Runs seven checks in a fixed order, each awaited before the next starts:
/// 1. Secondary entitlement from the fleet's primaries
/// 2. License type identifiers from the catalog
/// 3. Diff against the previous snapshot
/// 4. New database alerts
/// 5. Enterprise gate (at most one alert)
/// 6. Activated feature alerts
/// 7. Unlisted running database alerts
///
/// Remote failures are logged and absorbed, so a run always completes.
///
/// # Type Parameters
/// * `PDR` - PrimaryDatabaseRepository implementation
/// * `LTR` - LicenseTypeRepository implementation
/// * `AE` - AlertEmitter implementation
pub struct ReconcileHostUseCase<PDR, LTR, AE> {
    primary_database_repository: PDR,
    license_type_repository: LTR,
    alert_emitter: AE,
    license_type_metrics: LicenseTypeMetrics,
    core_factors: CoreFactorPolicy,
    clock: fn() -> DateTime<Utc>,
}

impl<PDR, LTR, AE> ReconcileHostUseCase<PDR, LTR, AE>
where
    PDR: PrimaryDatabaseRepository,
    LTR: LicenseTypeRepository,
    AE: AlertEmitter,
{
    pub fn new(
        primary_database_repository: PDR,
        license_type_repository: LTR,
        alert_emitter: AE,
        license_type_metrics: LicenseTypeMetrics,
        core_factors: CoreFactorPolicy,
    ) -> Self {
        Self {
            primary_database_repository,
            license_type_repository,
            alert_emitter,
            license_type_metrics,
            core_factors,
            clock: Utc::now,
        }
    }

    /// Replaces the clock used to date alerts
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Reconciles one ingestion
    pub async fn execute(&self, request: ReconcileRequest) -> ReconcileResponse {
        let span = tracing::info_span!("reconcile", hostname = %request.current.hostname);
        self.run(request).instrument(span).await
    }

    /// Reconciles independent ingestions, at most `max_concurrent` at a time
    ///
    /// Responses are returned in request order. `on_progress` is called with
    /// `(completed, total)` after each response.
    pub async fn execute_all<F>(
        &self,
        requests: Vec<ReconcileRequest>,
        max_concurrent: usize,
        on_progress: F,
    ) -> Vec<ReconcileResponse>
    where
        F: Fn(usize, usize),
    {
        let total = requests.len();
        let mut responses = Vec::with_capacity(total);

        let mut pending = std::pin::pin!(stream::iter(requests)
            .map(|request| self.execute(request))
            .buffered(max_concurrent.max(1)));

        while let Some(response) = pending.next().await {
            responses.push(response);
            on_progress(responses.len(), total);
        }

        responses
    }

    async fn run(&self, request: ReconcileRequest) -> ReconcileResponse {
        let ReconcileRequest { current, previous } = request;
        let mut response = ReconcileResponse::new(current);

        // Step 1: Inherit primary licenses onto secondaries
        self.reconcile_secondaries(&mut response).await;

        // Step 2: Resolve catalog license types
        self.resolve_license_types(&mut response).await;

        // Step 3: Diff against the previous snapshot
        let diff = SnapshotDiffer::diff(previous.as_ref(), &response.snapshot);
        let hostname = response.snapshot.hostname.clone();

        // Step 4: Alert on new databases
        for dbname in &diff.new_databases {
            let alert = Alert::new_database(&hostname, dbname, self.now());
            self.emit(alert, &mut response).await;
        }

        // Step 5: Enterprise gate
        if let Some(trigger) = EnterpriseGate::evaluate(previous.as_ref(), &response.snapshot) {
            tracing::info!(check = "enterprise_gate", ?trigger, "Enterprise license required");
            let alert = Alert::new_enterprise_license(&hostname, self.now());
            self.emit(alert, &mut response).await;
        }

        // Step 6: Alert on activated features
        for (dbname, features) in diff.activated_features() {
            let features: Vec<String> = features.into_iter().map(str::to_string).collect();
            let alert = Alert::activated_features(&hostname, dbname, &features, self.now());
            self.emit(alert, &mut response).await;
        }

        // Step 7: Alert on unlisted running databases
        let unlisted: Vec<String> = response
            .snapshot
            .unlisted_running_databases
            .iter()
            .cloned()
            .collect();
        for dbname in &unlisted {
            let alert = Alert::unlisted_running_database(&hostname, dbname, self.now());
            self.emit(alert, &mut response).await;
        }

        tracing::info!(
            alerts = response.alerts.len(),
            submitted = response.alerts_submitted,
            degraded = response.degraded_checks.len(),
            "Reconciliation complete"
        );
        response
    }

    /// Copies the licenses of each secondary's primary onto the secondary
    ///
    /// The fleet listing is fetched once, and only if there is a secondary.
    async fn reconcile_secondaries(&self, response: &mut ReconcileResponse) {
        if !response.snapshot.has_secondary_databases() {
            return;
        }

        let fleet = match self
            .primary_database_repository
            .fetch_primary_open_databases()
            .await
        {
            Ok(fleet) => fleet,
            Err(e) => {
                tracing::error!(
                    check = "secondary_entitlement",
                    error = %format!("{:#}", e),
                    "Can't retrieve primary databases, secondary licenses left unchanged"
                );
                response
                    .degraded_checks
                    .push(ReconcileCheck::SecondaryEntitlement);
                return;
            }
        };

        let missing = Self::apply_inherited_licenses(
            &mut response.snapshot,
            &fleet,
            &self.core_factors,
        );

        let hostname = response.snapshot.hostname.clone();
        for dbname in missing {
            let alert = Alert::missing_primary_database(&hostname, &dbname, self.now());
            self.emit(alert, response).await;
        }
    }

    /// Returns the names of secondaries whose primary is not in `fleet`
    fn apply_inherited_licenses(
        snapshot: &mut HostSnapshot,
        fleet: &[DatabaseRecord],
        core_factors: &CoreFactorPolicy,
    ) -> Vec<String> {
        let core_factor = core_factors.core_factor(&snapshot.hardware_abstraction_technology);
        let cores = snapshot.cpu_cores;
        let mut missing = Vec::new();

        for secondary in snapshot.databases.iter_mut().filter(|db| db.is_secondary()) {
            match PrimaryDatabaseLookup::find_primary(secondary, fleet) {
                Some(primary) => {
                    let inherited = EntitlementCalculator::compute_inherited_licenses(
                        &primary.licenses,
                        cores,
                        core_factor,
                    );
                    tracing::debug!(
                        dbname = %secondary.name,
                        inherited = inherited.len(),
                        core_factor,
                        "Secondary inherits primary licenses"
                    );
                    EntitlementCalculator::apply(secondary, inherited);
                }
                None => {
                    tracing::warn!(dbname = %secondary.name, "Missing primary database");
                    missing.push(secondary.name.clone());
                }
            }
        }

        missing
    }

    /// Annotates every license entry with its catalog identifier
    async fn resolve_license_types(&self, response: &mut ReconcileResponse) {
        let environment = response.snapshot.environment.clone();
        let catalog = self.fetch_catalog(&environment, response).await;
        let ordered =
            LicenseTypeResolver::order_catalog(catalog, &self.license_type_metrics, &environment);

        let resolved: usize = response
            .snapshot
            .databases
            .iter_mut()
            .map(|database| LicenseTypeResolver::assign_type_ids(&ordered, database))
            .sum();
        tracing::debug!(check = "license_type_resolution", resolved, "License types assigned");
    }

    async fn fetch_catalog(
        &self,
        environment: &str,
        response: &mut ReconcileResponse,
    ) -> Vec<LicenseTypeCatalogEntry> {
        match self
            .license_type_repository
            .fetch_license_types(environment)
            .await
        {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(
                    check = "license_type_resolution",
                    error = %format!("{:#}", e),
                    "Can't retrieve license types, continuing with an empty catalog"
                );
                response
                    .degraded_checks
                    .push(ReconcileCheck::LicenseTypeResolution);
                Vec::new()
            }
        }
    }

    async fn emit(&self, alert: Alert, response: &mut ReconcileResponse) {
        match self.alert_emitter.throw_alert(&alert).await {
            Ok(()) => response.alerts_submitted += 1,
            Err(e) => tracing::error!(
                code = %alert.code(),
                error = %format!("{:#}", e),
                "Can't throw new alert"
            ),
        }
        response.alerts.push(alert);
    }

    fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }
}
