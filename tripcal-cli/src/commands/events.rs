use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use tripcal_core::events_from_text;
use tripcal_core::trip::parse_start_date;

use crate::config::TripcalConfig;

pub fn run(
    file: &Path,
    start: &str,
    default_start: Option<&str>,
    default_duration: Option<&str>,
) -> Result<()> {
    let cfg = TripcalConfig::load()?;
    let trip_start = parse_start_date(start)?;
    let options = cfg.convert_options(default_start, default_duration)?;

    let text = super::read_itinerary(file)?;
    let events = events_from_text(&text, trip_start, &options);

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Group events by day and print
    let mut current_date: Option<NaiveDate> = None;

    for event in &events {
        let date = event.start.date();

        if current_date != Some(date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date.format("%a %b %-d").to_string().bold());
            current_date = Some(date);
        }

        let time = format!("{:>5}", event.start.format("%H:%M"));
        let length = humantime::format_duration(std::time::Duration::from_secs(
            event.duration().num_seconds().max(0) as u64,
        ));
        println!("  {} {} {}", time, event.summary, format!("({})", length).dimmed());
    }

    println!();
    println!("{} events total", events.len());

    Ok(())
}
