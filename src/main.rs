use clap::Parser;
use std::process;
use trip_itinerary::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Trip Itinerary - Travel CSV Viewer");
    println!("==================================");
    println!();
    println!("Turn a semi-structured travel itinerary CSV export into a date-grouped,");
    println!("filterable trip view.");
    println!();
    println!("USAGE:");
    println!("    trip-itinerary <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    show        Show the itinerary for a selected day (main command)");
    println!("    dates       List the selectable calendar days");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Show the earliest day of the default export (./mytrip.csv):");
    println!("    trip-itinerary show");
    println!();
    println!("    # Show a specific day from a remote export:");
    println!("    trip-itinerary show --source https://example.net/mytrip.csv --date 05-Jan-25");
    println!();
    println!("    # List the selectable days as JSON:");
    println!("    trip-itinerary dates --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    trip-itinerary <COMMAND> --help");
}
