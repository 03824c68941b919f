//! Pluggable itinerary sources.
//!
//! A source turns trip parameters into itinerary text. tripcal ships two:
//! a file reader for previously saved itineraries, and an external command
//! runner so any program that reads the JSON request from stdin and prints
//! itinerary text can act as a generation backend. Source failures are
//! recoverable: callers report them and let the user retry.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

use crate::error::{TripCalError, TripCalResult};
use crate::prompt::planning_prompt;
use crate::trip::TripParams;

/// Default time budget for a source command, matching how long a slow
/// generation backend can reasonably take.
pub const DEFAULT_SOURCE_TIMEOUT: Duration = Duration::from_secs(180);

/// Anything that can produce itinerary text for a trip.
#[async_trait]
pub trait ItinerarySource: Send + Sync {
    async fn generate(&self, params: &TripParams) -> TripCalResult<String>;
}

/// Reads itinerary text from a file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ItinerarySource for FileSource {
    async fn generate(&self, _params: &TripParams) -> TripCalResult<String> {
        let text = std::fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Err(TripCalError::Source(format!(
                "{} contains no itinerary text",
                self.path.display()
            )));
        }
        Ok(text)
    }
}

/// Request sent to a command source on stdin, one JSON object per call.
#[derive(Serialize)]
struct SourceRequest<'a> {
    params: &'a TripParams,
    prompt: String,
}

/// Runs a user-configured external command to generate the itinerary.
///
/// The command receives `{ "params": ..., "prompt": ... }` on stdin and
/// must print the itinerary text to stdout. This keeps tripcal independent
/// of any specific provider: a shell script, an API client, anything.
pub struct CommandSource {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandSource {
    pub fn new(command: &[String], timeout: Duration) -> TripCalResult<Self> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| TripCalError::Source("source command is empty".to_string()))?;

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            timeout,
        })
    }
}

#[async_trait]
impl ItinerarySource for CommandSource {
    async fn generate(&self, params: &TripParams) -> TripCalResult<String> {
        let binary_path = which::which(&self.program)
            .map_err(|_| TripCalError::SourceNotFound(self.program.clone()))?;

        let request = SourceRequest {
            params,
            prompt: planning_prompt(params),
        };
        let request_json = serde_json::to_string(&request)
            .map_err(|e| TripCalError::Serialization(e.to_string()))?;

        let mut child = TokioCommand::new(&binary_path)
            .args(&self.args)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::inherit())
            .spawn()
            .map_err(|e| {
                TripCalError::Source(format!("Failed to spawn {}: {}", binary_path.display(), e))
            })?;

        // Write request to stdin (unwrap safe: we piped stdin above)
        let mut stdin = child.stdin.take().unwrap();
        stdin
            .write_all(format!("{request_json}\n").as_bytes())
            .await?;
        drop(stdin);

        let output = timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| TripCalError::SourceTimeout(self.timeout.as_secs()))??;

        if !output.status.success() {
            return Err(TripCalError::Source(format!(
                "Source command exited with status: {}",
                output.status.code().unwrap_or(-1)
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout);
        if text.trim().is_empty() {
            return Err(TripCalError::Source(
                "Source command returned no itinerary text".into(),
            ));
        }

        Ok(text.into_owned())
    }
}
