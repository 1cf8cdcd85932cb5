use std::path::PathBuf;

use thiserror::Error;

/// Failure to load the target list. Fatal for a run.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read target list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid target list {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to fetch one page. Recovered per target.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },
}
