use std::path::PathBuf;
use std::time::Duration;

use crate::config::is_url;
use crate::error::{HotmapError, Result};
use crate::hotspot::HotspotCatalog;

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Where the hotspot collection is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HotspotSource {
    File(PathBuf),
    Url(String),
}

impl HotspotSource {
    /// `http://` and `https://` strings are URLs, anything else is a path.
    pub fn parse(source: &str) -> Self {
        if is_url(source) {
            Self::Url(source.to_string())
        } else {
            Self::File(PathBuf::from(source))
        }
    }

    /// Read and parse the collection. Blocks; call from a worker thread.
    pub fn load(&self) -> Result<HotspotCatalog> {
        let body = match self {
            Self::File(path) => std::fs::read_to_string(path)?,
            Self::Url(url) => fetch(url)?,
        };
        let catalog = HotspotCatalog::from_json(&body)?;
        tracing::info!(source = %self, count = catalog.len(), "hotspot data loaded");
        Ok(catalog)
    }
}

impl std::fmt::Display for HotspotSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

fn fetch(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(HotmapError::HttpStatus {
            status: status.as_u16(),
        });
    }
    Ok(response.text()?)
}
