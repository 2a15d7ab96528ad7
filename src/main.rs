//! Disallow-Miner main entry point
//!
//! This is the command-line interface for extracting robots.txt disallow
//! entries from one target or from a list of targets on stdin.

use clap::Parser;
use disallow_miner::archive::WaybackArchive;
use disallow_miner::config::{load_config, validate, Config};
use disallow_miner::crawler::{build_http_client, process_targets, HttpTransport, TargetRunner};
use disallow_miner::output::LineWriter;
use disallow_miner::OutputMode;
use futures::stream::{self, BoxStream, StreamExt};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;
use tracing_subscriber::EnvFilter;

const BANNER: &str = r#"
    ___  _              _  _
   |   \(_)___ __ _ _ _| || |_____ __ __
   | |) | (_-</ _` | '_| || / _ \ V  V /
   |___/|_/__/\__,_|_| |_||_\___/\_/\_/   miner

  > Extract endpoints marked as disallow in robots.txt
"#;

/// Disallow-Miner: robots.txt endpoint extraction
///
/// Reads a target from --url, or one target per line from stdin, fetches
/// its robots.txt and prints every disallowed path, one per line.
#[derive(Parser, Debug)]
#[command(name = "disallow-miner")]
#[command(version = "1.0.0")]
#[command(about = "Extract endpoints marked as disallow in robots.txt", long_about = None)]
struct Cli {
    /// Target host or URL (reads targets from stdin when omitted)
    #[arg(short, long)]
    url: Option<String>,

    /// Output mode: 0 prints full URLs, any other value bare paths for wordlists
    #[arg(short, long)]
    mode: Option<u32>,

    /// Also walk Wayback Machine snapshots of previous years (slow)
    #[arg(long = "wb", visible_alias = "wayback")]
    wayback: bool,

    /// Number of past years to walk in wayback mode
    #[arg(long)]
    years: Option<u32>,

    /// Increase diagnostic verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Do not print the banner
    #[arg(short, long)]
    silent: bool,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Also write endpoints to this file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Number of targets processed at the same time
    #[arg(short = 'j', long)]
    concurrency: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if !cli.silent {
        eprintln!("{}", BANNER);
    }

    let config = load_effective_config(&cli)?;
    let mode = config.output.output_mode();

    let client = build_http_client(&config.http)?;
    let transport = HttpTransport::from_client(client.clone());
    let archive = WaybackArchive::from_config(client, &config.wayback);

    let mut runner = TargetRunner::new(transport, archive, mode);
    if config.wayback.enabled {
        runner = runner.with_wayback(config.wayback.years);
    }

    let mut sink = LineWriter::new(std::io::stdout());
    if let Some(path) = &cli.output {
        sink = sink.with_mirror(path)?;
    }

    let targets: BoxStream<'static, String> = match cli.url.clone() {
        Some(url) => stream::iter(vec![url]).boxed(),
        None => {
            let lines = BufReader::new(tokio::io::stdin()).lines();
            LinesStream::new(lines)
                .filter_map(|line| async move {
                    line.map_err(|e| tracing::error!("Failed to read stdin: {}", e))
                        .ok()
                })
                .boxed()
        }
    };

    let separate_targets =
        cli.url.is_none() && cli.verbose > 0 && mode == OutputMode::FullUrl;
    let stats = process_targets(
        &runner,
        targets,
        config.runner.concurrency,
        &mut sink,
        separate_targets,
    )
    .await?;

    stats.log_summary();
    tracing::info!("Done");

    Ok(())
}

/// Loads the config file (if any) and applies command-line overrides
fn load_effective_config(cli: &Cli) -> disallow_miner::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    if let Some(mode) = cli.mode {
        config.output.mode = mode;
    }
    if cli.wayback {
        config.wayback.enabled = true;
    }
    if let Some(years) = cli.years {
        config.wayback.years = years;
    }
    if let Some(concurrency) = cli.concurrency {
        config.runner.concurrency = concurrency;
    }

    validate(&config)?;
    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Diagnostics go to stderr so stdout carries nothing but endpoints.
/// Without `-v` nothing is logged unless `RUST_LOG` asks for it.
fn setup_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("off"),
        1 => EnvFilter::new("disallow_miner=info"),
        2 => EnvFilter::new("disallow_miner=debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
