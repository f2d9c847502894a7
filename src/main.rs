use std::io::{stderr, stdout};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use sales_analytics::cli::{prompt_filters, Cli};
use sales_analytics::engine::Pipeline;
use sales_analytics::enrichment::{CatalogSource, HttpCatalog, OfflineCatalog};

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            println!("\n❌ An error occurred: {error}");
            println!("Process terminated gracefully.");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let pipeline = Pipeline::new(cli.pipeline_config(), catalog_source(cli));
    let filters = cli.filter_options();

    let timer = Instant::now();
    let summary = pipeline.run(&mut stdout(), |_| {
        if cli.interactive {
            Ok(prompt_filters()?)
        } else {
            Ok(filters)
        }
    })?;
    let duration = timer.elapsed();

    info!("Processed {} of {} lines in: {duration:?}", summary.parsed, summary.lines_read);
    info!(
        "Dropped {} unparseable and {} invalid records; {} enriched from a catalog of {}",
        summary.unparsed,
        summary.filter.invalid,
        summary.enrichment.matched,
        summary.catalog_size
    );

    if !summary.enriched_saved || !summary.report_saved {
        warn!("Run finished but not every output file was written");
    }

    Ok(())
}

fn catalog_source(cli: &Cli) -> Box<dyn CatalogSource> {
    if cli.offline {
        info!("Offline mode, skipping the product catalog");
        return Box::new(OfflineCatalog);
    }

    match HttpCatalog::new(cli.catalog_url.clone(), cli.catalog_timeout()) {
        Ok(catalog) => Box::new(catalog),
        Err(error) => {
            warn!("Could not create the catalog client, continuing without enrichment: {error}");
            Box::new(OfflineCatalog)
        }
    }
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
    //NOTE: stdout carries the operator progress display, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
