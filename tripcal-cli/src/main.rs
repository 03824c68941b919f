mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tripcal_core::TripParams;
use tripcal_core::trip::parse_start_date;

#[derive(Parser)]
#[command(name = "tripcal")]
#[command(about = "Plan trips and turn free-text itineraries into calendar files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an itinerary via the configured source, optionally exporting a calendar
    Plan {
        /// Destination city or region (e.g., "Paris, France")
        #[arg(short, long)]
        destination: String,

        /// Trip length in days
        #[arg(short = 'n', long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..=30))]
        days: u32,

        /// Total budget in USD
        #[arg(short, long, default_value_t = 2000, value_parser = clap::value_parser!(u32).range(100..))]
        budget: u32,

        /// Travel preferences (e.g., "museums, food tours, nightlife")
        #[arg(short, long, default_value = "General sightseeing")]
        preferences: String,

        /// Trip start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// Where to save the generated itinerary text
        #[arg(long, default_value = "itinerary.md")]
        itinerary: PathBuf,

        /// Also export the itinerary as a calendar file
        #[arg(long)]
        ics: Option<PathBuf>,

        /// Read itinerary text from a file instead of running the source command
        #[arg(long)]
        from_file: Option<PathBuf>,
    },
    /// Convert saved itinerary text into an .ics calendar file
    Convert {
        /// Itinerary text file ("-" for stdin)
        file: PathBuf,

        /// Trip start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// Output path (defaults to the input name with an .ics extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Start time for activities without one (HH:MM)
        #[arg(long)]
        default_start: Option<String>,

        /// Event length when no end time is parseable (e.g., "45m", "1h30m")
        #[arg(long)]
        default_duration: Option<String>,
    },
    /// Preview the events a conversion would produce
    Events {
        /// Itinerary text file ("-" for stdin)
        file: PathBuf,

        /// Trip start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// Start time for activities without one (HH:MM)
        #[arg(long)]
        default_start: Option<String>,

        /// Event length when no end time is parseable (e.g., "45m", "1h30m")
        #[arg(long)]
        default_duration: Option<String>,
    },
    /// Print the itinerary-generation prompt for a trip
    Prompt {
        /// Destination city or region (e.g., "Paris, France")
        #[arg(short, long)]
        destination: String,

        /// Trip length in days
        #[arg(short = 'n', long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..=30))]
        days: u32,

        /// Total budget in USD
        #[arg(short, long, default_value_t = 2000, value_parser = clap::value_parser!(u32).range(100..))]
        budget: u32,

        /// Travel preferences
        #[arg(short, long, default_value = "General sightseeing")]
        preferences: String,

        /// Trip start date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        start: Option<String>,
    },
    /// Show the config file path, creating a commented template if missing
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            destination,
            days,
            budget,
            preferences,
            start,
            itinerary,
            ics,
            from_file,
        } => {
            let params = TripParams {
                destination,
                num_days: days,
                budget_usd: budget,
                preferences,
                start_date: parse_start_date(&start)?,
            };
            commands::plan::run(params, itinerary, ics, from_file).await
        }
        Commands::Convert {
            file,
            start,
            output,
            default_start,
            default_duration,
        } => commands::convert::run(
            &file,
            &start,
            output,
            default_start.as_deref(),
            default_duration.as_deref(),
        ),
        Commands::Events {
            file,
            start,
            default_start,
            default_duration,
        } => commands::events::run(
            &file,
            &start,
            default_start.as_deref(),
            default_duration.as_deref(),
        ),
        Commands::Prompt {
            destination,
            days,
            budget,
            preferences,
            start,
        } => commands::prompt::run(destination, days, budget, preferences, start.as_deref()),
        Commands::Config => commands::config::run(),
    }
}
