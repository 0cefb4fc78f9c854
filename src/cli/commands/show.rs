//! Show command implementation
//!
//! Loads the itinerary and renders the date selector plus the trip cards for
//! the selected day, in human-readable or JSON form.

use colored::Colorize;
use serde::Serialize;
use tracing::info;

use super::shared::setup_logging;
use crate::app::services::trip_csv_parser::ParseStats;
use crate::cli::args::{OutputFormat, ShowArgs};
use crate::{Config, Error, Itinerary, Result, TripRecord};

/// Show command runner
pub async fn run_show(args: ShowArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;

    let config = Config::resolve(args.source.as_deref(), args.date.as_deref())?;
    info!("Loading itinerary from {}", config.source);

    let mut itinerary = Itinerary::load(&config.source).await?;
    if let Some(key) = &config.date_override {
        itinerary.select(key.clone());
    }

    match args.format {
        OutputFormat::Human => render_human(&itinerary),
        OutputFormat::Json => render_json(&itinerary)?,
    }

    Ok(())
}

/// JSON report shape for the show command
#[derive(Serialize)]
struct ItineraryReport<'a> {
    dates: &'a [String],
    selected: Option<&'a str>,
    trips: Vec<&'a TripRecord>,
    stats: &'a ParseStats,
}

fn render_json(itinerary: &Itinerary) -> Result<()> {
    let report = ItineraryReport {
        dates: itinerary.date_domain(),
        selected: itinerary.selected(),
        trips: itinerary.visible_trips(),
        stats: itinerary.stats(),
    };

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| Error::configuration(format!("Failed to serialize itinerary report: {e}")))?;
    println!("{json}");

    Ok(())
}

fn render_human(itinerary: &Itinerary) {
    println!("{}", "Trip Itinerary".bold());
    println!();

    if itinerary.date_domain().is_empty() {
        println!("{}", "No selectable days - the itinerary is empty.".dimmed());
        render_stats_footer(itinerary.stats());
        return;
    }

    render_date_tabs(itinerary);
    println!();

    let visible = itinerary.visible_trips();
    if visible.is_empty() {
        println!("{}", "No trips cover the selected day.".dimmed());
    }
    for trip in visible {
        render_trip_card(trip);
    }

    render_stats_footer(itinerary.stats());
}

/// One line of selectable date keys with the selected one highlighted
fn render_date_tabs(itinerary: &Itinerary) {
    let tabs: Vec<String> = itinerary
        .date_domain()
        .iter()
        .map(|key| {
            if itinerary.selected() == Some(key.as_str()) {
                format!("[{}]", key.bold())
            } else {
                format!(" {key} ")
            }
        })
        .collect();
    println!("{}", tabs.join(" "));
}

fn render_trip_card(trip: &TripRecord) {
    println!();
    match &trip.status {
        Some(status) => println!("{}  {}", trip.destination.bold(), status_badge(status)),
        None => println!("{}", trip.destination.bold()),
    }
    println!(
        "  From: {}  To: {}  Duration: {} days",
        trip.date_from, trip.date_to, trip.days
    );

    if let Some(travel_time) = &trip.travel_time {
        println!("  Travel time: {travel_time}");
    }
    if let Some(flight) = &trip.flight {
        println!("  Flight: {flight}");
    }
    if let Some(accommodation) = &trip.accommodation {
        println!("  Accommodation: {accommodation}");
    }

    // The original viewer labels comments "Notes" and notes "Additional
    // notes"; keep its card layout
    if let Some(comments) = &trip.comments {
        println!("  Notes:");
        for line in comments.lines() {
            println!("    {line}");
        }
    }
    if let Some(recommendations) = &trip.recommendations {
        println!("  Recommendations:");
        for item in recommendation_items(recommendations) {
            println!("    - {item}");
        }
    }
    if let Some(notes) = &trip.notes {
        println!("  Additional notes: {notes}");
    }
}

/// Colored status badge keyed on the export's free-text status value
fn status_badge(status: &str) -> colored::ColoredString {
    let label = format!("[{status}]");
    match status.to_ascii_lowercase().as_str() {
        "booked" | "confirmed" => label.green(),
        "planned" | "pending" => label.yellow(),
        "cancelled" | "canceled" => label.red(),
        _ => label.cyan(),
    }
}

/// Split accumulated recommendations into display items.
///
/// The export separates recommendations with semicolons inside a field and
/// with newlines across continuation rows; both separate items.
fn recommendation_items(recommendations: &str) -> Vec<&str> {
    recommendations
        .lines()
        .flat_map(|line| line.split(';'))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

fn render_stats_footer(stats: &ParseStats) {
    if !stats.is_clean() {
        println!();
        println!(
            "{}",
            format!(
                "{} record(s) dropped, {} diagnostic(s) - rerun with -vv for details",
                stats.records_dropped,
                stats.diagnostics.len()
            )
            .dimmed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_items_split_on_semicolons_and_lines() {
        let items = recommendation_items("Louvre; Musee d'Orsay\nLe Comptoir;");
        assert_eq!(items, vec!["Louvre", "Musee d'Orsay", "Le Comptoir"]);
    }

    #[test]
    fn test_recommendation_items_empty_segments_are_skipped() {
        assert!(recommendation_items(" ; ;\n;").is_empty());
    }
}
