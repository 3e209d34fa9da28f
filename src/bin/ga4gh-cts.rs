//! A binary that runs the compliance suite against a GA4GH server.
//!
//! ```shell
//! cargo run --release --bin=ga4gh-cts --features=binaries -- \
//!     --base-url http://localhost:8000/
//! ```
//!
//! Every selected case is run in order and a table of outcomes is printed,
//! followed by the details of each failure. The process exits with a
//! non-zero status if any case failed.

use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use ga4gh_cts::config::Config;
use ga4gh_cts::suite::Category;
use ga4gh_cts::suite::Outcome;
use ga4gh_cts::suite::Report;
use ga4gh_cts::suite::Suite;
use tabled::builder::Builder;
use tabled::settings::Alignment;
use tabled::settings::Style;
use tabled::settings::object::Rows;
use tracing::info;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

/// Checks that a GA4GH server behaves as the API requires.
#[derive(Parser)]
struct Args {
    /// The base URL of the server under test (overrides the configuration
    /// file).
    #[arg(short, long)]
    base_url: Option<String>,

    /// A TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// The per-request timeout, in seconds (overrides the configuration file).
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Only run cases whose name contains this string.
    #[arg(short, long)]
    filter: Option<String>,

    /// Only run cases in this category (`rna_quantification`,
    /// `variant_annotation`, or `variant_annotation_set`).
    #[arg(long)]
    category: Option<Category>,

    /// Lists the selected cases instead of running them.
    #[arg(short, long, default_value_t = false)]
    list: bool,

    /// Prints the effective configuration as TOML instead of running.
    #[arg(long, default_value_t = false)]
    print_config: bool,

    #[command(flatten)]
    verbose: Verbosity,
}

/// Loads the configuration and applies the command line overrides.
fn config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("loading configuration from `{}`", path.display()))?,
        None => Config::default(),
    };

    if let Some(url) = &args.base_url {
        config.set_base_url(url);
    }

    if let Some(secs) = args.timeout {
        config.set_timeout_secs(secs);
    }

    Ok(config)
}

/// Selects the cases to run.
fn suite(args: &Args) -> Result<Suite> {
    let mut suite = Suite::all();

    if let Some(pattern) = &args.filter {
        suite = suite.filter_by_name(pattern);
    }

    if let Some(category) = args.category {
        suite = suite.filter_by_category(category);
    }

    if suite.cases().is_empty() {
        bail!("no cases match the given filters");
    }

    Ok(suite)
}

/// Renders the outcomes as a table.
fn table(report: &Report) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Case", "Category", "Outcome", "Time"]);

    for result in report.results() {
        builder.push_record([
            result.name().to_string(),
            result.category().to_string(),
            result.outcome().to_string(),
            format!("{:.2?}", result.elapsed()),
        ]);
    }

    builder
        .build()
        .with(Style::rounded())
        .modify(Rows::new(1..), Alignment::left())
        .to_string()
}

/// Runs the selected cases and prints the report.
fn run(args: &Args) -> Result<()> {
    if args.print_config {
        print!("{}", config(args)?.to_toml()?);
        return Ok(());
    }

    let suite = suite(args)?;

    if args.list {
        for case in suite.cases() {
            println!("{}\t{}\t{}", case.name(), case.category(), case.description());
        }

        return Ok(());
    }

    let config = config(args)?;
    let client = config
        .client()
        .context("creating the client for the server under test")?;

    info!(
        "running {} case(s) against {}",
        suite.cases().len(),
        client.base_url()
    );

    let report = suite.run(&client, config.fixtures());
    println!("{}", table(&report));

    for result in report.results() {
        if let Outcome::Failed(failure) = result.outcome() {
            println!();
            println!("{}: {failure}", result.name());
        }
    }

    println!();
    println!(
        "{} passed, {} failed in {:.2?}",
        report.passed(),
        report.failed(),
        report.elapsed()
    );

    if !report.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .init(),
    };

    run(&args)
}
