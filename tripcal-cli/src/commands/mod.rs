pub mod config;
pub mod convert;
pub mod events;
pub mod plan;
pub mod prompt;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read itinerary text from a file, or stdin when the path is "-".
pub(crate) fn read_itinerary(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Could not read itinerary text from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("Could not read itinerary file {}", file.display()))
    }
}
