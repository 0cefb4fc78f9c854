//! Dates command implementation
//!
//! Loads the itinerary and prints only the selectable date keys, in
//! chronological order.

use tracing::info;

use super::shared::setup_logging;
use crate::cli::args::{DatesArgs, OutputFormat};
use crate::{Config, Error, Itinerary, Result};

/// Dates command runner
pub async fn run_dates(args: DatesArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;

    let config = Config::resolve(args.source.as_deref(), None)?;
    info!("Loading itinerary from {}", config.source);

    let itinerary = Itinerary::load(&config.source).await?;

    match args.format {
        OutputFormat::Human => {
            for key in itinerary.date_domain() {
                println!("{key}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(itinerary.date_domain()).map_err(|e| {
                Error::configuration(format!("Failed to serialize date list: {e}"))
            })?;
            println!("{json}");
        }
    }

    Ok(())
}
