use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{PriceReading, PriorSnapshot, Snapshot};

/// Reads the last written snapshot. Missing or unreadable files count as no prior data.
pub fn load_snapshot(path: &Path) -> PriorSnapshot {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Cannot read previous snapshot {}: {e}", path.display());
            }
            return PriorSnapshot::default();
        }
    };
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        log::warn!("Ignoring corrupt previous snapshot {}: {e}", path.display());
        PriorSnapshot::default()
    })
}

/// Fills missing prices from the previous snapshot by id. Only the price is carried over.
pub fn merge_prices(mut fresh: Vec<PriceReading>, previous: &PriorSnapshot) -> Vec<PriceReading> {
    let known: HashMap<&str, f64> = previous
        .cameras
        .iter()
        .filter_map(|c| c.price.map(|p| (c.id.as_str(), p)))
        .collect();

    for reading in fresh.iter_mut().filter(|r| r.price.is_none()) {
        if let Some(&price) = known.get(reading.id.as_str()) {
            log::info!("Using existing price for {}: ${price:.2}", reading.name);
            reading.price = Some(price);
        }
    }
    fresh
}

/// Writes the snapshot next to its destination first, then renames it into place.
pub fn save_snapshot(snapshot: &Snapshot, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}
