//! CSV resource retrieval
//!
//! The itinerary is served as a single static text resource, fetched exactly
//! once at startup. The resource can live on the local filesystem or behind
//! an http(s) URL. There is no retry or timeout policy: a failed fetch is
//! surfaced to the caller, whose state stays empty.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::info;

use crate::{Error, Result};

/// Location of the itinerary CSV resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvSource {
    /// A file on the local filesystem
    File(PathBuf),

    /// An http(s) URL
    Url(String),
}

impl FromStr for CsvSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        if value.is_empty() {
            return Err(Error::configuration("CSV source cannot be empty"));
        }

        if value.starts_with("http://") || value.starts_with("https://") {
            Ok(CsvSource::Url(value.to_string()))
        } else {
            Ok(CsvSource::File(PathBuf::from(value)))
        }
    }
}

impl fmt::Display for CsvSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvSource::File(path) => write!(f, "{}", path.display()),
            CsvSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Fetch the full text of the CSV resource.
///
/// One-shot: no retries, no caching. Errors carry the resource location.
pub async fn fetch(source: &CsvSource) -> Result<String> {
    info!("Fetching itinerary CSV from {source}");

    match source {
        CsvSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io(format!("failed to read {}", path.display()), e)),
        CsvSource::Url(url) => {
            let response = reqwest::get(url)
                .await
                .map_err(|e| Error::http(format!("GET {url} failed"), e))?;
            let response = response
                .error_for_status()
                .map_err(|e| Error::http(format!("GET {url} returned an error status"), e))?;
            response
                .text()
                .await
                .map_err(|e| Error::http(format!("reading body of {url} failed"), e))
        }
    }
}
