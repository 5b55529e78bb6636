//! Page-Trail main entry point
//!
//! This is the command-line interface for the Page-Trail scraper.

use anyhow::Context;
use clap::Parser;
use page_trail::config::{load_config, validate, Config, ReportFormat, DEFAULT_REPORT_PATH};
use page_trail::output::{print_statistics, writer_for, ReportStatistics, ReportWriter};
use page_trail::{validate_seed_url, Crawler};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Page-Trail: a paginated content scraper
///
/// Page-Trail fetches a page, extracts its headings, paragraphs and links,
/// follows its "next" link up to a page limit and writes everything it
/// found to a report.
#[derive(Parser, Debug)]
#[command(name = "page-trail")]
#[command(version = "1.0.0")]
#[command(about = "Scrape headings, paragraphs and links across paginated pages", long_about = None)]
struct Cli {
    /// URL of the first page
    #[arg(value_name = "URL")]
    url: String,

    /// Maximum number of pages to scrape (1-100)
    #[arg(short = 'n', long)]
    max_pages: Option<u32>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Report file path
    #[arg(short, long, value_name = "PATH", conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Print the report to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Pause between page fetches in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Print report statistics after the crawl
    #[arg(long)]
    stats: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load_effective_config(&cli)?;
    let seed_url = validate_seed_url(&cli.url)?;

    let crawler = Crawler::new(&config).context("Failed to build HTTP client")?;

    eprintln!("Scraping in progress...");
    let outcome = crawler
        .crawl(seed_url.as_str(), config.scraper.max_pages)
        .await;

    // Fetch failures have already been logged as warnings; an empty crawl is
    // reported but is not an error
    eprintln!("{}", outcome.summary_message());
    if outcome.is_empty() {
        return Ok(());
    }

    let writer = writer_for(config.output.format);
    if cli.stdout {
        writer.write_to(&outcome.rows, &mut std::io::stdout().lock())?;
    } else {
        let path = report_path(&cli, &config, &*writer);
        writer
            .write_report(&outcome.rows, &path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        eprintln!("✓ Report written to: {}", path.display());
    }

    if cli.stats {
        print_statistics(&ReportStatistics::from_outcome(&outcome));
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("page_trail=info,warn"),
            1 => EnvFilter::new("page_trail=debug,info"),
            2 => EnvFilter::new("page_trail=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file, if any, and applies command-line overrides
fn load_effective_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(max_pages) = cli.max_pages {
        config.scraper.max_pages = max_pages;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.scraper.page_delay_ms = delay_ms;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    validate(&config)?;
    Ok(config)
}

/// Picks the report path: the explicit flag, else the configured path with
/// the default file name adjusted to the chosen format
fn report_path(cli: &Cli, config: &Config, writer: &dyn ReportWriter) -> PathBuf {
    if let Some(path) = &cli.output {
        return path.clone();
    }

    let path = PathBuf::from(&config.output.report_path);
    if config.output.report_path == DEFAULT_REPORT_PATH {
        path.with_extension(writer.extension())
    } else {
        path
    }
}
