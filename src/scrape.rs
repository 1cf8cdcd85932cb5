use anyhow::Result;

use crate::archiver;
use crate::config::{self, Config};
use crate::fetcher::PageFetcher;
use crate::models::{PriceReading, Snapshot, Target};
use crate::parser;

/// Fetches a single target's page and extracts its price. Failures become `None`.
pub fn fetch_price(fetcher: &dyn PageFetcher, target: &Target) -> Option<f64> {
    match fetcher.fetch_html(&target.url) {
        Ok(html) => parser::extract_price(&html, &target.price_selector),
        Err(e) => {
            log::warn!("Error fetching {}: {e}", target.url);
            None
        }
    }
}

/// Reads every enabled target in order. Disabled targets produce no reading.
pub fn scrape_targets(fetcher: &dyn PageFetcher, targets: &[Target]) -> Vec<PriceReading> {
    let mut readings = Vec::new();

    for target in targets {
        if !target.enabled {
            log::debug!("Skipping disabled camera: {}", target.name);
            continue;
        }

        log::info!("Fetching price for: {}", target.name);
        let price = fetch_price(fetcher, target);
        match price {
            Some(p) => log::info!("Found price for {}: ${p:.2}", target.name),
            None => log::warn!("Price not found for {}", target.name),
        }
        readings.push(PriceReading::from_target(target, price));
    }

    readings
}

/// One full batch: load targets, scrape, merge with the previous snapshot, persist.
pub fn run(config: &Config, fetcher: &dyn PageFetcher) -> Result<Snapshot> {
    let targets = config::load_targets(&config.config_path)?;
    log::info!("Found {} cameras configured", targets.len());

    let previous = archiver::load_snapshot(&config.output_path);
    let readings = scrape_targets(fetcher, &targets);
    let snapshot = Snapshot::stamped(archiver::merge_prices(readings, &previous));

    archiver::save_snapshot(&snapshot, &config.output_path)?;
    log::info!(
        "Saved {} cameras to {}",
        snapshot.cameras.len(),
        config.output_path.display()
    );
    Ok(snapshot)
}
