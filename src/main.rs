mod codec;
mod engine;
mod ledger;
mod models;
mod roster;
mod service;

use std::fs;
use std::io::stderr;
use std::path::{Path, PathBuf};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::ledger::Ledger;
use crate::service::AuthorizationService;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: payment-authorizer [roster].csv [requests_dir] [log_level:optional]");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let roster_path = &args[1];
    let requests_dir = &args[2];
    let log_level = args.get(3)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let ledger = Arc::new(roster::load(Path::new(roster_path))?);
    info!("Loaded {} customer records from {roster_path}", ledger.len());

    let service = AuthorizationService::new(ledger);

    let timer = Instant::now();
    let processed = run_batch(&service, Path::new(requests_dir))?;
    let duration = timer.elapsed();

    info!("Processed {processed} authorization requests in: {duration:?}");

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Responses go to files next to the requests, so logging stays on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

/// Reads every request file in `dir`, authorizes it, and writes the
/// response to a `<stem>_response.xml` sibling. Unreadable requests are
/// logged and skipped; the batch keeps going.
fn run_batch<L: Ledger>(service: &AuthorizationService<L>, dir: &Path) -> Result<usize> {
    let mut requests: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| is_request(path))
        .collect();

    requests.sort();

    let mut processed = 0;

    for path in &requests {
        let raw_request = match fs::read_to_string(path) {
            Ok(raw_request) => raw_request,
            Err(read_error) => {
                error!("Skipping unreadable request {}: {read_error}", path.display());
                continue;
            }
        };

        let raw_response = service.authorize(&raw_request);

        fs::write(response_path(path), raw_response)?;
        processed += 1;
    }

    Ok(processed)
}

fn is_request(path: &Path) -> bool {
    let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
        return false;
    };

    path.extension().is_some_and(|extension| extension == "xml") && !stem.ends_with("_response")
}

fn response_path(path: &Path) -> PathBuf {
    let stem = path.file_stem().and_then(|stem| stem.to_str()).unwrap_or("request");

    path.with_file_name(format!("{stem}_response.xml"))
}
