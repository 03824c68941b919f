//! ICS document generation.

use chrono::NaiveDate;
use icalendar::{Calendar, Component, EventLike, Property};

use crate::event::{CalendarEvent, ConvertOptions, events_from_text};

/// Convert itinerary text into an iCalendar document with default options
/// and calendar name.
///
/// Always returns a well-formed document; text with no recognizable
/// activities yields a valid, empty calendar. Conversion is deterministic:
/// identical inputs produce byte-identical output.
pub fn generate_calendar(itinerary_text: &str, trip_start: NaiveDate) -> String {
    generate_calendar_with(
        itinerary_text,
        trip_start,
        &ConvertOptions::default(),
        "Travel Itinerary",
    )
}

/// Convert itinerary text into an iCalendar document.
pub fn generate_calendar_with(
    itinerary_text: &str,
    trip_start: NaiveDate,
    options: &ConvertOptions,
    calendar_name: &str,
) -> String {
    let events = events_from_text(itinerary_text, trip_start, options);
    events_to_ics(&events, trip_start, calendar_name)
}

/// Serialize events into an iCalendar document.
pub fn events_to_ics(events: &[CalendarEvent], trip_start: NaiveDate, calendar_name: &str) -> String {
    let mut cal = Calendar::new();

    // X-WR-CALNAME - human-readable calendar name (de facto standard)
    cal.append_property(Property::new("X-WR-CALNAME", calendar_name));

    // DTSTAMP is required per event by RFC 5545. Deriving it from the trip
    // start (rather than the wall clock) keeps conversion deterministic.
    let dtstamp = trip_start
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .format("%Y%m%dT%H%M%SZ")
        .to_string();

    for event in events {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&event.uid);
        ics_event.summary(&event.summary);
        ics_event.add_property("DTSTAMP", &dtstamp);

        // Floating local date-times: no Z suffix, no TZID
        ics_event.add_property("DTSTART", event.start.format("%Y%m%dT%H%M%S").to_string());
        ics_event.add_property("DTEND", event.end.format("%Y%m%dT%H%M%S").to_string());

        if !event.description.is_empty() {
            ics_event.description(&event.description);
        }

        cal.push(ics_event.done());
    }

    let cal = cal.done();

    normalize_ics(&cal.to_string())
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with TRIPCAL (we post-process the output)
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn normalize_ics(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:TRIPCAL\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
