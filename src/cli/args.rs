//! Command-line argument definitions for the trip itinerary processor
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Parser, Subcommand, ValueEnum};

/// CLI arguments for the trip itinerary processor
///
/// Ingests a travel itinerary CSV export and renders it as a date-grouped,
/// filterable trip view.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "trip-itinerary",
    version,
    about = "Turn a travel itinerary CSV export into a date-grouped, filterable trip view",
    long_about = "Ingests a semi-structured travel itinerary CSV export (multi-row trips, \
                  summary rows, duplicated lines), normalizes it into trip records, derives \
                  the calendar days spanned by all trips, and shows the trips covering a \
                  selected day."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the trip itinerary processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Show the itinerary for a selected day (default: the earliest day)
    Show(ShowArgs),
    /// List the selectable calendar days spanned by the itinerary
    Dates(DatesArgs),
}

/// Arguments for the show command
#[derive(Debug, Clone, Parser)]
pub struct ShowArgs {
    /// Path or http(s) URL of the itinerary CSV export
    ///
    /// Defaults to mytrip.csv in the working directory.
    #[arg(
        short = 's',
        long = "source",
        value_name = "PATH|URL",
        help = "Path or URL of the itinerary CSV export"
    )]
    pub source: Option<String>,

    /// Day to show, as a DD-Mon-YY date key
    ///
    /// Defaults to the earliest selectable day of the itinerary.
    #[arg(
        short = 'd',
        long = "date",
        value_name = "DD-Mon-YY",
        help = "Day to show (defaults to the earliest day)"
    )]
    pub date: Option<String>,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the dates command
#[derive(Debug, Clone, Parser)]
pub struct DatesArgs {
    /// Path or http(s) URL of the itinerary CSV export
    #[arg(
        short = 's',
        long = "source",
        value_name = "PATH|URL",
        help = "Path or URL of the itinerary CSV export"
    )]
    pub source: Option<String>,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ShowArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl DatesArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_log_levels() {
        let mut args = ShowArgs {
            source: None,
            date: None,
            format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        };

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_command_parsing() {
        let args = Args::parse_from(["trip-itinerary", "show", "--date", "05-Jan-25"]);
        match args.get_command() {
            Commands::Show(show) => assert_eq!(show.date.as_deref(), Some("05-Jan-25")),
            other => panic!("unexpected command: {other:?}"),
        }

        let args = Args::parse_from(["trip-itinerary", "dates", "--format", "json"]);
        match args.get_command() {
            Commands::Dates(dates) => assert_eq!(dates.format, OutputFormat::Json),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
