//! Single-pass itinerary parsing.

use super::classify::{LineKind, classify};
use super::{Activity, Day, Itinerary};

/// Parse free-text itinerary into day sections.
///
/// Never fails: unrecognized lines are skipped, recognized activities are
/// always kept. Day numbers from the text are trusted ("Day 2" as the
/// first heading means the second trip day) but clamped so the offset
/// never decreases, which keeps event order monotonic even when headings
/// are mislabeled.
pub fn parse_itinerary(text: &str) -> Itinerary {
    let mut days: Vec<Day> = Vec::new();

    for line in text.lines() {
        match classify(line) {
            LineKind::DayMarker(n) => {
                let offset = match days.last() {
                    Some(day) => (n - 1).max(day.offset),
                    None => n - 1,
                };
                days.push(Day {
                    offset,
                    activities: Vec::new(),
                });
            }
            LineKind::Timed {
                start,
                end,
                description,
            } => {
                // A timed line before any heading still belongs to the trip;
                // it opens an implicit first day.
                if days.is_empty() {
                    days.push(Day {
                        offset: 0,
                        activities: Vec::new(),
                    });
                }
                let day = days.last_mut().expect("a day section is open");
                day.activities.push(Activity {
                    start_time: Some(start),
                    end_time: end,
                    description,
                    raw: line.trim().to_string(),
                });
            }
            LineKind::Plain { description } => {
                // Untimed lines only count inside a day section; text in
                // the preamble (packing tips, overview) is prose.
                if let Some(day) = days.last_mut() {
                    day.activities.push(Activity {
                        start_time: None,
                        end_time: None,
                        description,
                        raw: line.trim().to_string(),
                    });
                }
            }
            LineKind::Text => {}
        }
    }

    Itinerary { days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_three_days_two_activities_each() {
        let text = "\
Day 1
9:00 AM - 10:00 AM Breakfast
- Walk the old town
Day 2
10:00 AM Museum
- Picnic in the park
Day 3
8:00 AM Hike
- Farewell dinner
";
        let itinerary = parse_itinerary(text);

        assert_eq!(itinerary.days.len(), 3);
        assert_eq!(itinerary.activity_count(), 6);

        let offsets: Vec<u32> = itinerary
            .days
            .iter()
            .flat_map(|d| d.activities.iter().map(move |_| d.offset))
            .collect();
        assert_eq!(offsets, vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_first_marker_number_is_trusted() {
        let itinerary = parse_itinerary("Day 2\nVisit a park\n");
        assert_eq!(itinerary.days.len(), 1);
        assert_eq!(itinerary.days[0].offset, 1);
        assert_eq!(itinerary.days[0].activities.len(), 1);
        assert_eq!(itinerary.days[0].activities[0].description, "Visit a park");
    }

    #[test]
    fn test_regressing_day_numbers_are_clamped() {
        let text = "Day 3\n- Beach\nDay 1\n- Airport\n";
        let itinerary = parse_itinerary(text);
        let offsets: Vec<u32> = itinerary.days.iter().map(|d| d.offset).collect();
        assert_eq!(offsets, vec![2, 2]);
    }

    #[test]
    fn test_headers_under_day_sections_are_not_activities() {
        let text = "Day 1\n### Morning\n9:00 AM Breakfast\n**Afternoon**\n- Museum visit\n";
        let itinerary = parse_itinerary(text);
        assert_eq!(itinerary.activity_count(), 2);
    }

    #[test]
    fn test_preamble_is_skipped_but_timed_preamble_lines_are_kept() {
        let text = "\
Trip Overview
- Bring comfortable shoes
10:00 Arrival at the airport
Day 1
- City walk
";
        let itinerary = parse_itinerary(text);

        // The overview bullet is preamble prose; the timed arrival opens
        // an implicit day 0.
        assert_eq!(itinerary.days.len(), 2);
        assert_eq!(itinerary.days[0].offset, 0);
        assert_eq!(itinerary.days[0].activities.len(), 1);
        assert_eq!(
            itinerary.days[0].activities[0].start_time,
            Some(NaiveTime::from_hms_opt(10, 0, 0).unwrap())
        );
        assert_eq!(itinerary.days[1].activities.len(), 1);
    }

    #[test]
    fn test_empty_and_unstructured_text() {
        assert!(parse_itinerary("").is_empty());
        assert!(parse_itinerary("A lovely trip.\n\nHave fun!").is_empty());
    }
}
