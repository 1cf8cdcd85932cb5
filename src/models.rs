use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Wired,
    Wireless,
    Ptz,
    Bullet,
    Dome,
    Nvr,
}

/// One configured product page.
#[derive(Debug, Clone, Deserialize)]
pub struct Target {
    pub id: String,
    pub name: String,
    pub model: String,
    pub category: Category,
    pub url: String,
    #[serde(default = "default_retailer")]
    pub retailer: String,
    #[serde(default = "default_price_selector")]
    pub price_selector: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub description: String,
}

fn default_retailer() -> String {
    "Unknown".into()
}

fn default_price_selector() -> String {
    ".price".into()
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct TargetList {
    #[serde(default)]
    pub cameras: Vec<Target>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceReading {
    pub id: String,
    pub name: String,
    pub model: String,
    pub category: Category,
    pub price: Option<f64>,
    pub retailer: String,
    pub url: String,
    pub description: String,
}

impl PriceReading {
    pub fn from_target(target: &Target, price: Option<f64>) -> Self {
        PriceReading {
            id: target.id.clone(),
            name: target.name.clone(),
            model: target.model.clone(),
            category: target.category,
            price,
            retailer: target.retailer.clone(),
            url: target.url.clone(),
            description: target.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub last_updated: Option<DateTime<Utc>>,
    pub cameras: Vec<PriceReading>,
}

impl Snapshot {
    pub fn stamped(cameras: Vec<PriceReading>) -> Self {
        Snapshot {
            last_updated: Some(Utc::now()),
            cameras,
        }
    }

    pub fn prices_found(&self) -> usize {
        self.cameras.iter().filter(|c| c.price.is_some()).count()
    }
}

/// What a merge needs from the last written snapshot. Every other field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PriorSnapshot {
    #[serde(default)]
    pub cameras: Vec<PriorReading>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriorReading {
    pub id: String,
    #[serde(default)]
    pub price: Option<f64>,
}

impl From<&Snapshot> for PriorSnapshot {
    fn from(snapshot: &Snapshot) -> Self {
        PriorSnapshot {
            cameras: snapshot
                .cameras
                .iter()
                .map(|c| PriorReading {
                    id: c.id.clone(),
                    price: c.price,
                })
                .collect(),
        }
    }
}
