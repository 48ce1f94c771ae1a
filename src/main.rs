mod cli;

use cli::{Args, HostInput};
use oracle_license_reconciler::adapters::outbound::console::{
    ConsoleAlertEmitter, StderrProgressReporter,
};
use oracle_license_reconciler::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use oracle_license_reconciler::adapters::outbound::network::{
    AlertServiceClient, FleetDatabaseClient, LicenseTypeClient,
};
use oracle_license_reconciler::application::dto::{ReconcileRequest, ReconcileResponse};
use oracle_license_reconciler::application::use_cases::ReconcileHostUseCase;
use oracle_license_reconciler::config::{
    discover_config, load_config_from_path, ReconcilerSettings,
};
use oracle_license_reconciler::license_reconciliation::domain::HostSnapshot;
use oracle_license_reconciler::ports::outbound::{
    AlertEmitter, OutputPresenter, ProgressReporter, SnapshotReader,
};
use oracle_license_reconciler::shared::error::{ExitCode, ReconcileError};
use oracle_license_reconciler::shared::logging::init_logging;
use oracle_license_reconciler::shared::Result;
use owo_colors::OwoColorize;
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("⚠️  Warning: {}", e);
    }

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

/// Snapshot pairs that do not belong together are an argument error
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<ReconcileError>() {
        Some(ReconcileError::Validation { .. }) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}

async fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    let settings = ReconcilerSettings::from_config(config)?;

    let reader = FileSystemReader::new();
    let requests = args
        .hosts
        .iter()
        .map(|input| build_request(&reader, input))
        .collect::<Result<Vec<_>>>()?;

    // Create adapters (Dependency Injection)
    let fleet_repository =
        FleetDatabaseClient::new(settings.api_service.clone(), settings.http_timeout)?;
    let license_type_repository =
        LicenseTypeClient::new(settings.api_service.clone(), settings.http_timeout)?;
    let alert_emitter: Box<dyn AlertEmitter> = if args.dry_run {
        Box::new(ConsoleAlertEmitter::new())
    } else {
        Box::new(AlertServiceClient::new(
            settings.alert_service.clone(),
            settings.http_timeout,
        )?)
    };

    let use_case = ReconcileHostUseCase::new(
        fleet_repository,
        license_type_repository,
        alert_emitter,
        settings.license_type_metrics,
        settings.core_factors,
    );

    let progress_reporter = StderrProgressReporter::new();
    progress_reporter.report(&format!("🔎 Reconciling {} host(s)...", requests.len()));

    let responses = use_case
        .execute_all(requests, usize::from(args.concurrency), |done, total| {
            progress_reporter.report_progress(done, total, None)
        })
        .await;

    progress_reporter.report_completion("✅ Reconciliation complete");
    print_summary(&responses);

    let snapshots: Vec<&HostSnapshot> = responses.iter().map(|r| &r.snapshot).collect();
    let mut output = serde_json::to_string_pretty(&snapshots)?;
    output.push('\n');

    let presenter: Box<dyn OutputPresenter> = match args.output {
        Some(path) => Box::new(FileSystemWriter::new(path)),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&output)?;

    Ok(())
}

fn build_request(reader: &impl SnapshotReader, input: &HostInput) -> Result<ReconcileRequest> {
    let current = reader.read_snapshot(&input.current)?;
    let previous = input
        .previous
        .as_deref()
        .map(|path| reader.read_snapshot(path))
        .transpose()?;

    ReconcileRequest::new(current, previous)
}

fn print_summary(responses: &[ReconcileResponse]) {
    for response in responses {
        let line = format!(
            "{}: {} alert(s), {} submitted",
            response.snapshot.hostname,
            response.alerts.len(),
            response.alerts_submitted
        );

        if response.alerts_failed() > 0 {
            eprintln!("{}", line.red());
        } else {
            eprintln!("{}", line.green());
        }

        for check in &response.degraded_checks {
            eprintln!("   {}", format!("⚠️  {} skipped", check).yellow());
        }
    }
}
