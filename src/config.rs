//! Runtime configuration resolution and validation

use std::str::FromStr;

use crate::app::adapters::resource::CsvSource;
use crate::app::services::date_codec;
use crate::constants::DEFAULT_CSV_RESOURCE;
use crate::{Error, Result};

/// Resolved runtime configuration for one ingestion run
#[derive(Debug, Clone)]
pub struct Config {
    /// Location of the itinerary CSV resource
    pub source: CsvSource,

    /// Date key overriding the default earliest-day selection
    pub date_override: Option<String>,
}

impl Config {
    /// Resolve configuration from optional CLI inputs.
    ///
    /// An absent source falls back to the default resource name in the
    /// working directory. A date override must decode under the "DD-Mon-YY"
    /// convention; rejecting it here keeps a typo from silently producing an
    /// empty view.
    pub fn resolve(source: Option<&str>, date_override: Option<&str>) -> Result<Self> {
        let source = match source {
            Some(value) => CsvSource::from_str(value)?,
            None => CsvSource::from_str(DEFAULT_CSV_RESOURCE)?,
        };

        if let Some(key) = date_override {
            if date_codec::decode(key).is_none() {
                return Err(Error::configuration(format!(
                    "'{key}' is not a valid DD-Mon-YY date"
                )));
            }
        }

        Ok(Self {
            source,
            date_override: date_override.map(|k| k.to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: CsvSource::File(DEFAULT_CSV_RESOURCE.into()),
            date_override: None,
        }
    }
}
