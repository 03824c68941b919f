use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tripcal_core::{
    CommandSource, FileSource, ItinerarySource, TripParams, events_from_text, events_to_ics,
};

use crate::config::TripcalConfig;

pub async fn run(
    params: TripParams,
    itinerary_path: PathBuf,
    ics_path: Option<PathBuf>,
    from_file: Option<PathBuf>,
) -> Result<()> {
    let cfg = TripcalConfig::load()?;

    let source: Box<dyn ItinerarySource> = match &from_file {
        Some(path) => Box::new(FileSource::new(path)),
        None => match &cfg.source {
            Some(source_cfg) => Box::new(CommandSource::new(
                &source_cfg.command,
                Duration::from_secs(source_cfg.timeout_secs),
            )?),
            None => anyhow::bail!(
                "No itinerary source configured.\n\
                Add a [source] section to {}:\n\n\
                [source]\n\
                command = [\"my-itinerary-generator\"]\n\n\
                or pass --from-file <path> to use saved itinerary text.",
                TripcalConfig::config_path()?.display()
            ),
        },
    };

    println!(
        "Planning {} days in {}...",
        params.num_days, params.destination
    );

    let text = match source.generate(&params).await {
        Ok(text) => text,
        Err(e) => anyhow::bail!(
            "Itinerary generation failed: {e}\n\
            Please try again, or check the [source] command in your config."
        ),
    };

    std::fs::write(&itinerary_path, &text)
        .with_context(|| format!("Could not write {}", itinerary_path.display()))?;
    println!("Itinerary saved to {}", itinerary_path.display());

    if let Some(ics_path) = ics_path {
        let options = cfg.convert_options(None, None)?;
        let calendar_name = format!("Trip to {}", params.destination);

        let events = events_from_text(&text, params.start_date, &options);
        let ics = events_to_ics(&events, params.start_date, &calendar_name);

        std::fs::write(&ics_path, &ics)
            .with_context(|| format!("Could not write {}", ics_path.display()))?;
        println!("Exported {} events to {}", events.len(), ics_path.display());
    }

    Ok(())
}
