//! Site-Census main entry point
//!
//! This is the command-line interface for the Site-Census crawler.

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use site_census::config::{load_config_with_hash, Config};
use site_census::crawler::crawl;
use site_census::output::{
    generate_markdown_summary, render_report, to_json, ConsoleSink, RunMetadata,
};
use site_census::url::{host_filter_for, parse_seed};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Site-Census: measure what a website is made of
///
/// Site-Census crawls a website from a seed URL, follows links on the same
/// host up to a depth limit, and reports link, image, header and word
/// statistics for every page and for the site as a whole.
#[derive(Parser, Debug)]
#[command(name = "site-census")]
#[command(version)]
#[command(about = "A same-host website content census", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,

    /// Print the report as JSON instead of text tables
    #[arg(long, conflicts_with = "dry_run")]
    json: bool,

    /// Override the seed URL from the config file
    #[arg(long, value_name = "URL")]
    seed_url: Option<String>,

    /// Override the maximum crawl depth from the config file
    #[arg(long, value_name = "DEPTH")]
    max_depth: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (mut config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    apply_overrides(&mut config, &cli)?;

    if cli.dry_run {
        handle_dry_run(&config)?;
    } else {
        handle_crawl(&config, config_hash, cli.json).await?;
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
            0 => EnvFilter::new("site_census=info,warn"),
            1 => EnvFilter::new("site_census=debug,info"),
            2 => EnvFilter::new("site_census=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Applies command-line overrides on top of the loaded config
fn apply_overrides(config: &mut Config, cli: &Cli) -> anyhow::Result<()> {
    if let Some(seed_url) = &cli.seed_url {
        parse_seed(seed_url).with_context(|| format!("Invalid --seed-url '{}'", seed_url))?;
        tracing::info!("Seed URL overridden: {}", seed_url);
        config.crawler.seed_url = seed_url.clone();
    }

    if let Some(max_depth) = cli.max_depth {
        tracing::info!("Max depth overridden: {}", max_depth);
        config.crawler.max_depth = max_depth;
    }

    Ok(())
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    let host_filter = host_filter_for(&config.crawler.seed_url)?;

    println!("=== Site-Census Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Seed URL: {}", config.crawler.seed_url);
    println!("  Host filter: {}", host_filter);
    println!("  Max depth: {}", config.crawler.max_depth);
    println!("  Request timeout: {}s", config.crawler.request_timeout);
    println!("  Connect timeout: {}s", config.crawler.connect_timeout);
    println!(
        "  Excluded extensions: {}",
        config.crawler.excluded_extensions.join(", ")
    );

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nOutput:");
    println!(
        "  Summary: {}",
        config.output.summary_path.as_deref().unwrap_or("(none)")
    );
    println!("  Top words: {}", config.output.top_words);
    println!("  Per-page records: {}", config.output.per_page);

    println!("\n✓ Configuration is valid");

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config, config_hash: String, json: bool) -> anyhow::Result<()> {
    let started_at = Utc::now();

    let report = crawl(config).await.context("Crawl failed to start")?;

    let meta = RunMetadata {
        started_at,
        finished_at: Utc::now(),
        config_hash,
    };

    if json {
        println!("{}", to_json(&report)?);
    } else {
        let stdout = std::io::stdout();
        let mut sink = ConsoleSink::new(stdout.lock());
        render_report(&mut sink, &report, &config.output)?;
    }

    if let Some(summary_path) = &config.output.summary_path {
        tracing::info!("Writing markdown summary to {}", summary_path);
        generate_markdown_summary(&report, &meta, &config.output, Path::new(summary_path))
            .with_context(|| format!("Failed to write summary to {}", summary_path))?;
    }

    tracing::info!(
        "Done: {} pages measured, {} skipped",
        report.pages.len(),
        report.skipped.len()
    );

    Ok(())
}
