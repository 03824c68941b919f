use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tripcal_core::trip::parse_start_date;
use tripcal_core::{events_from_text, events_to_ics};

use crate::config::TripcalConfig;

pub fn run(
    file: &Path,
    start: &str,
    output: Option<PathBuf>,
    default_start: Option<&str>,
    default_duration: Option<&str>,
) -> Result<()> {
    let cfg = TripcalConfig::load()?;
    let trip_start = parse_start_date(start)?;
    let options = cfg.convert_options(default_start, default_duration)?;

    let text = super::read_itinerary(file)?;
    let events = events_from_text(&text, trip_start, &options);
    let ics = events_to_ics(&events, trip_start, "Travel Itinerary");

    let output = output.unwrap_or_else(|| default_output(file));
    std::fs::write(&output, &ics)
        .with_context(|| format!("Could not write {}", output.display()))?;

    if events.is_empty() {
        println!(
            "No activities recognized; wrote an empty calendar to {}",
            output.display()
        );
    } else {
        println!("Wrote {} events to {}", events.len(), output.display());
    }

    Ok(())
}

fn default_output(file: &Path) -> PathBuf {
    if file == Path::new("-") {
        PathBuf::from("itinerary.ics")
    } else {
        file.with_extension("ics")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_swaps_extension() {
        assert_eq!(
            default_output(Path::new("paris/itinerary.md")),
            PathBuf::from("paris/itinerary.ics")
        );
        assert_eq!(default_output(Path::new("-")), PathBuf::from("itinerary.ics"));
    }
}
