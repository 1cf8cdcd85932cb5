use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use camera_price_scraper::config::{self, Config};
use camera_price_scraper::fetcher::HttpFetcher;
use camera_price_scraper::scrape;

/// Fetch current camera prices and update the dashboard snapshot.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Target list to scrape
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Snapshot file to merge into and overwrite
    #[arg(long, default_value = config::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// User-Agent header sent with each request
    #[arg(long, default_value = config::DEFAULT_USER_AGENT)]
    user_agent: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config {
        config_path: args.config,
        output_path: args.output,
        timeout: Duration::from_secs(args.timeout),
        user_agent: args.user_agent,
    };

    let fetcher = HttpFetcher::new(config.timeout, &config.user_agent)?;
    let snapshot = scrape::run(&config, &fetcher)?;

    log::info!(
        "Summary: {}/{} prices available",
        snapshot.prices_found(),
        snapshot.cameras.len()
    );
    Ok(())
}
