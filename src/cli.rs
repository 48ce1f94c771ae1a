use clap::Parser;
use std::path::PathBuf;

/// Snapshot files of one host ingestion, given as `CURRENT[,PREVIOUS]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInput {
    pub current: PathBuf,
    pub previous: Option<PathBuf>,
}

impl std::str::FromStr for HostInput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(str::trim);
        let current = parts.next().filter(|p| !p.is_empty());
        let previous = parts.next();

        if parts.next().is_some() {
            return Err(format!(
                "Invalid host input: {}. Expected CURRENT or CURRENT,PREVIOUS",
                s
            ));
        }

        let current = current.ok_or_else(|| {
            format!("Invalid host input: '{}'. The current snapshot path is required", s)
        })?;

        let previous = match previous {
            Some("") => {
                return Err(format!(
                    "Invalid host input: '{}'. The previous snapshot path is empty",
                    s
                ))
            }
            Some(path) => Some(PathBuf::from(path)),
            None => None,
        };

        Ok(HostInput {
            current: PathBuf::from(current),
            previous,
        })
    }
}

/// Reconcile Oracle database licenses of host snapshots and raise change alerts
#[derive(Parser, Debug)]
#[command(name = "oracle-license-reconciler")]
#[command(version)]
#[command(
    about = "Reconcile Oracle database licenses of host snapshots and raise change alerts",
    long_about = None
)]
pub struct Args {
    /// Snapshot files of a host: CURRENT or CURRENT,PREVIOUS
    /// Can be specified multiple times: --host a.json,a-prev.json --host b.json
    #[arg(long = "host", value_name = "CURRENT[,PREVIOUS]", required = true)]
    pub hosts: Vec<HostInput>,

    /// Path to the config file (defaults to ./license-reconciler.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output file for the reconciled snapshots (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print alerts to stderr instead of submitting them to the alert service
    #[arg(long)]
    pub dry_run: bool,

    /// Maximum number of hosts reconciled at the same time
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
