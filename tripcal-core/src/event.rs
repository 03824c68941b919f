//! Calendar event construction.
//!
//! Events use floating local date-times: a travel day is lived in the
//! destination's clock, so times carry no zone and calendar apps show
//! them as written.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::itinerary::{Itinerary, parse_itinerary};

/// Longest summary emitted before truncation.
const MAX_SUMMARY_CHARS: usize = 60;

/// A single calendar event derived from one activity line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub uid: String,
    pub summary: String,
    /// The original itinerary line, verbatim
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl CalendarEvent {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Fallback timing applied when an activity line carries no usable times.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Start time for activities without one
    pub default_start: NaiveTime,
    /// Event length when no end time is parseable
    pub default_duration: Duration,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            default_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            default_duration: Duration::minutes(60),
        }
    }
}

/// Build events from a parsed itinerary, in encounter order.
///
/// Every activity becomes exactly one event. A parsed end time at or
/// before the start falls back to the default duration so `end > start`
/// holds strictly for every event.
pub fn events_from_itinerary(
    itinerary: &Itinerary,
    trip_start: NaiveDate,
    options: &ConvertOptions,
) -> Vec<CalendarEvent> {
    let mut events = Vec::with_capacity(itinerary.activity_count());
    let mut seq = 0u32;

    for day in &itinerary.days {
        let date = trip_start + Duration::days(i64::from(day.offset));

        for activity in &day.activities {
            seq += 1;

            let start_time = activity.start_time.unwrap_or(options.default_start);
            let start = date.and_time(start_time);

            let end = match activity.end_time {
                Some(end_time) if end_time > start_time => date.and_time(end_time),
                _ => start + options.default_duration,
            };

            events.push(CalendarEvent {
                uid: format!("day{}-{}@tripcal", day.offset + 1, seq),
                summary: summarize(&activity.description),
                description: activity.raw.clone(),
                start,
                end,
            });
        }
    }

    events
}

/// Parse itinerary text and build its events in one step.
pub fn events_from_text(
    text: &str,
    trip_start: NaiveDate,
    options: &ConvertOptions,
) -> Vec<CalendarEvent> {
    events_from_itinerary(&parse_itinerary(text), trip_start, options)
}

fn summarize(description: &str) -> String {
    if description.is_empty() {
        return "(No title)".to_string();
    }
    if description.chars().count() <= MAX_SUMMARY_CHARS {
        return description.to_string();
    }
    let mut truncated: String = description.chars().take(MAX_SUMMARY_CHARS - 1).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_timed_range_becomes_exact_event() {
        let events = events_from_text(
            "Day 1\n9:00 AM - 11:00 AM Visit Louvre\n",
            date(2024, 6, 1),
            &ConvertOptions::default(),
        );

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].start, datetime(2024, 6, 1, 9, 0));
        assert_eq!(events[0].end, datetime(2024, 6, 1, 11, 0));
        assert!(events[0].summary.contains("Visit Louvre"));
        assert_eq!(events[0].description, "9:00 AM - 11:00 AM Visit Louvre");
    }

    #[test]
    fn test_untimed_activity_gets_defaults() {
        let events = events_from_text(
            "Day 2\nVisit a park\n",
            date(2024, 6, 1),
            &ConvertOptions::default(),
        );

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].start, datetime(2024, 6, 2, 9, 0));
        assert_eq!(events[0].end, datetime(2024, 6, 2, 10, 0));
    }

    #[test]
    fn test_start_only_gets_default_duration() {
        let events = events_from_text(
            "Day 1\n14:30 Train to Florence\n",
            date(2024, 6, 1),
            &ConvertOptions::default(),
        );

        assert_eq!(events[0].start, datetime(2024, 6, 1, 14, 30));
        assert_eq!(events[0].end, datetime(2024, 6, 1, 15, 30));
    }

    #[test]
    fn test_end_before_start_falls_back_to_default_duration() {
        // "11:00 PM - 1:00 AM" parses with the end before the start;
        // the event keeps the default duration instead
        let events = events_from_text(
            "Day 1\n11:00 PM - 1:00 AM Night market\n",
            date(2024, 6, 1),
            &ConvertOptions::default(),
        );

        assert_eq!(events[0].start, datetime(2024, 6, 1, 23, 0));
        assert_eq!(events[0].end, datetime(2024, 6, 2, 0, 0));
    }

    #[test]
    fn test_every_event_ends_strictly_after_it_starts() {
        let text = "\
Day 1
9:00 AM - 9:00 AM Zero-length slot
10:00 AM - 9:30 AM Backwards range
- Untimed stroll
";
        let events = events_from_text(text, date(2024, 6, 1), &ConvertOptions::default());

        assert_eq!(events.len(), 3);
        for event in &events {
            assert!(
                event.end > event.start,
                "event '{}' must end after it starts",
                event.summary
            );
        }
    }

    #[test]
    fn test_order_and_offsets_across_days() {
        let text = "\
Day 1
9:00 AM Breakfast
- Old town walk
Day 2
10:00 AM Museum
- Picnic
Day 3
8:00 AM Hike
- Farewell dinner
";
        let events = events_from_text(text, date(2024, 6, 1), &ConvertOptions::default());

        assert_eq!(events.len(), 6);
        let days: Vec<u32> = events.iter().map(|e| e.start.date().day()).collect();
        assert_eq!(days, vec![1, 1, 2, 2, 3, 3]);

        // Encounter order is preserved: starts never go backwards across
        // the day boundary and uids are sequential
        let uids: Vec<&str> = events.iter().map(|e| e.uid.as_str()).collect();
        assert_eq!(
            uids,
            vec![
                "day1-1@tripcal",
                "day1-2@tripcal",
                "day2-3@tripcal",
                "day2-4@tripcal",
                "day3-5@tripcal",
                "day3-6@tripcal"
            ]
        );
    }

    #[test]
    fn test_custom_defaults_are_applied() {
        let options = ConvertOptions {
            default_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            default_duration: Duration::minutes(90),
        };
        let events = events_from_text("Day 1\n- Surf lesson\n", date(2024, 6, 1), &options);

        assert_eq!(events[0].start, datetime(2024, 6, 1, 8, 0));
        assert_eq!(events[0].end, datetime(2024, 6, 1, 9, 30));
    }

    #[test]
    fn test_long_summaries_are_truncated() {
        let long_line = format!("Day 1\n- {}\n", "stroll through the endless gardens ".repeat(5));
        let events = events_from_text(&long_line, date(2024, 6, 1), &ConvertOptions::default());

        assert_eq!(events.len(), 1);
        assert!(events[0].summary.chars().count() <= 60);
        assert!(events[0].summary.ends_with('…'));
        // The description keeps the full line
        assert!(events[0].description.len() > events[0].summary.len());
    }
}
