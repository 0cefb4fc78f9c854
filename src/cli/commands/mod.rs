//! Command implementations for the trip itinerary CLI
//!
//! Each command is implemented in its own module; this module dispatches
//! based on the parsed arguments.

pub mod dates;
pub mod shared;
pub mod show;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for the trip itinerary processor
///
/// Dispatches to the appropriate subcommand handler:
/// - `show`: render the trips covering the selected day
/// - `dates`: list the selectable calendar days
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Show(show_args) => show::run_show(show_args).await,
        Commands::Dates(dates_args) => dates::run_dates(dates_args).await,
    }
}
