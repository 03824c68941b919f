//! Core library for the tripcal ecosystem.
//!
//! This crate provides everything needed to turn a free-text travel
//! itinerary into a calendar file:
//! - `itinerary` for line classification and parsing
//! - `event` and `ics` for calendar event construction and .ics output
//! - `source` for pluggable itinerary generation backends
//! - `prompt` for the planning prompt handed to those backends

pub mod error;
pub mod event;
pub mod ics;
pub mod itinerary;
pub mod prompt;
pub mod source;
pub mod trip;

pub use error::{TripCalError, TripCalResult};
pub use event::{CalendarEvent, ConvertOptions, events_from_itinerary, events_from_text};
pub use ics::{events_to_ics, generate_calendar, generate_calendar_with};
pub use itinerary::{Activity, Day, Itinerary, parse_itinerary};
pub use source::{CommandSource, FileSource, ItinerarySource};
pub use trip::TripParams;
