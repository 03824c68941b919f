//! Global tripcal configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tripcal_core::ConvertOptions;

static DEFAULT_EVENT_START: &str = "09:00";
const DEFAULT_DURATION_MINUTES: u32 = 60;
const DEFAULT_SOURCE_TIMEOUT_SECS: u64 = 180;

fn default_event_start() -> String {
    DEFAULT_EVENT_START.to_string()
}

fn default_duration_minutes() -> u32 {
    DEFAULT_DURATION_MINUTES
}

fn default_timeout_secs() -> u64 {
    DEFAULT_SOURCE_TIMEOUT_SECS
}

/// Global configuration at ~/.config/tripcal/config.toml
///
/// Everything is optional: a missing file means defaults, and CLI flags
/// override whatever the file says.
#[derive(Serialize, Deserialize, Clone)]
pub struct TripcalConfig {
    /// Start time for activities without one (HH:MM)
    #[serde(default = "default_event_start")]
    pub default_event_start: String,

    /// Event length in minutes when no end time is parseable
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: u32,

    /// External command that generates itineraries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceConfig>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct SourceConfig {
    /// Command and arguments, e.g. ["my-planner", "--model", "fast"]
    pub command: Vec<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TripcalConfig {
    fn default() -> Self {
        Self {
            default_event_start: default_event_start(),
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
            source: None,
        }
    }
}

impl TripcalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("tripcal");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content).with_context(|| format!("Could not parse {}", path.display()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> Result<()> {
        let contents = format!(
            "\
# tripcal configuration

# Start time for activities without one:
# default_event_start = \"{DEFAULT_EVENT_START}\"

# Event length in minutes when no end time is parseable:
# default_duration_minutes = {DEFAULT_DURATION_MINUTES}

# External command that turns the JSON request on stdin into itinerary
# text on stdout:
# [source]
# command = [\"my-itinerary-generator\"]
# timeout_secs = {DEFAULT_SOURCE_TIMEOUT_SECS}
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }

        std::fs::write(path, contents)
            .with_context(|| format!("Could not write {}", path.display()))?;

        Ok(())
    }

    /// Resolve conversion options: CLI flags beat the config file.
    pub fn convert_options(
        &self,
        start_flag: Option<&str>,
        duration_flag: Option<&str>,
    ) -> Result<ConvertOptions> {
        let start_str = start_flag.unwrap_or(&self.default_event_start);
        let default_start = NaiveTime::parse_from_str(start_str, "%H:%M").map_err(|_| {
            anyhow::anyhow!("Invalid default start time '{start_str}' (expected HH:MM)")
        })?;

        let default_duration = match duration_flag {
            Some(s) => {
                let std_duration = humantime::parse_duration(s)
                    .map_err(|_| anyhow::anyhow!("Invalid duration '{s}' (try \"45m\" or \"1h30m\")"))?;
                chrono::Duration::from_std(std_duration)
                    .map_err(|_| anyhow::anyhow!("Duration '{s}' is too large"))?
            }
            None => chrono::Duration::minutes(i64::from(self.default_duration_minutes)),
        };

        if default_duration <= chrono::Duration::zero() {
            anyhow::bail!("Default duration must be positive");
        }

        Ok(ConvertOptions {
            default_start,
            default_duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let cfg: TripcalConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.default_event_start, "09:00");
        assert_eq!(cfg.default_duration_minutes, 60);
        assert!(cfg.source.is_none());
    }

    #[test]
    fn test_source_section_parses() {
        let cfg: TripcalConfig = toml::from_str(
            "[source]\ncommand = [\"sh\", \"-c\", \"my-planner\"]\n",
        )
        .unwrap();
        let source = cfg.source.unwrap();
        assert_eq!(source.command.len(), 3);
        assert_eq!(source.timeout_secs, 180);
    }

    #[test]
    fn test_flags_override_config() {
        let cfg = TripcalConfig::default();
        let options = cfg.convert_options(Some("08:30"), Some("90m")).unwrap();
        assert_eq!(
            options.default_start,
            NaiveTime::from_hms_opt(8, 30, 0).unwrap()
        );
        assert_eq!(options.default_duration, chrono::Duration::minutes(90));
    }

    #[test]
    fn test_bad_flag_values_are_rejected() {
        let cfg = TripcalConfig::default();
        assert!(cfg.convert_options(Some("late morning"), None).is_err());
        assert!(cfg.convert_options(None, Some("soonish")).is_err());
        assert!(cfg.convert_options(None, Some("0m")).is_err());
    }
}
