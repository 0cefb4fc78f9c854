//! Trip Itinerary Library
//!
//! A Rust library for turning a semi-structured travel itinerary CSV export
//! into a normalized, date-filterable trip list.
//!
//! This library provides tools for:
//! - Parsing itinerary CSV exports with multi-row continuation entries
//! - Tolerant "DD-Mon-YY" date decoding under a fixed century rule
//! - Deriving the ordered set of selectable calendar days spanned by all trips
//! - Filtering trips by a selected calendar day
//! - Graceful degradation for malformed rows with structured diagnostics

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod date_codec;
        pub mod date_domain;
        pub mod itinerary;
        pub mod trip_csv_parser;
        pub mod trip_filter;
    }
    pub mod adapters {
        pub mod resource;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::adapters::resource::CsvSource;
pub use app::models::TripRecord;
pub use app::services::itinerary::Itinerary;
pub use config::Config;

/// Result type alias for itinerary processing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for itinerary processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP retrieval of the CSV resource failed
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// The CSV document is structurally unusable
    #[error("CSV format error: {message}")]
    CsvFormat { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an HTTP error with context
    pub fn http(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV format error
    pub fn csv_format(message: impl Into<String>) -> Self {
        Self::CsvFormat {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http {
            message: "CSV resource retrieval failed".to_string(),
            source: error,
        }
    }
}
