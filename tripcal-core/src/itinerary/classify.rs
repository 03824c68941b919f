//! Line classification heuristics.
//!
//! Itinerary text is best-effort natural language, so classification is
//! fuzzy by nature. It lives here as a pure function over a single line,
//! with no document state, so the heuristics can be tested and tuned
//! without touching parsing or serialization.

use std::ops::Range;
use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

/// What a single line of itinerary text means to the converter.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// A day heading such as "Day 3" or "## Day 3: Montmartre".
    /// Carries the day number as labeled in the text.
    DayMarker(u32),
    /// A line with at least one recognizable time-of-day token.
    Timed {
        start: NaiveTime,
        end: Option<NaiveTime>,
        description: String,
    },
    /// Any other line with schedulable content, bulleted or not.
    /// Only counts as an activity once a day section is open.
    Plain { description: String },
    /// Blank lines, section headers, separators. Never converted.
    Text,
}

/// "Day N", tolerating markdown heading/bold/bullet prefixes.
static DAY_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[\s#*_>•·+-]*day\s*(\d+)\b").expect("valid regex"));

/// A time-of-day token: "9:00", "14:30", "9 AM", "9:00 pm", "10 a.m.".
/// A bare hour with no minutes and no meridiem is rejected in code.
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})(?::([0-5][0-9]))?\s*(a\.?m\b\.?|p\.?m\b\.?)?")
        .expect("valid regex")
});

/// Connector allowed between the two tokens of a time range.
static RANGE_SEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(?:-|–|—|to|until|till)?\s*$").expect("valid regex"));

/// Classify one line of itinerary text.
pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Text;
    }

    if let Some(caps) = DAY_MARKER_RE.captures(trimmed)
        && let Ok(n) = caps[1].parse::<u32>()
        && n >= 1
    {
        return LineKind::DayMarker(n);
    }

    let body = strip_bullet(trimmed).unwrap_or(trimmed);

    let tokens = extract_times(body);
    if let Some(first) = tokens.first() {
        // Two tokens joined by a dash or "to" form a range; otherwise only
        // the first token counts and the rest of the line stays as text.
        let (end, removed) = match tokens.get(1) {
            Some(second) if RANGE_SEP_RE.is_match(&body[first.span.end..second.span.start]) => {
                (Some(second.time), first.span.start..second.span.end)
            }
            _ => (None, first.span.clone()),
        };
        let description = strip_span(body, removed);
        return LineKind::Timed {
            start: first.time,
            end,
            description,
        };
    }

    if is_header(trimmed) || !body.chars().any(char::is_alphanumeric) {
        return LineKind::Text;
    }

    LineKind::Plain {
        description: body.to_string(),
    }
}

/// Untimed section labels: markdown headings, fully-bold lines, and
/// trailing-colon labels like "Morning:".
fn is_header(line: &str) -> bool {
    line.starts_with('#')
        || (line.starts_with("**") && line.ends_with("**"))
        || line.ends_with(':')
}

struct TimeToken {
    time: NaiveTime,
    span: Range<usize>,
}

/// Extract every valid time token with its byte span, left to right.
fn extract_times(line: &str) -> Vec<TimeToken> {
    TIME_RE
        .captures_iter(line)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let hour: u32 = caps[1].parse().ok()?;
            let minute: u32 = match caps.get(2) {
                Some(m) => m.as_str().parse().ok()?,
                None => 0,
            };
            let meridiem = caps.get(3).map(|m| m.as_str().to_ascii_lowercase());

            let time = match meridiem {
                Some(mer) => {
                    if !(1..=12).contains(&hour) {
                        return None;
                    }
                    let h24 = match (hour, mer.starts_with('p')) {
                        (12, false) => 0,
                        (12, true) => 12,
                        (h, false) => h,
                        (h, true) => h + 12,
                    };
                    NaiveTime::from_hms_opt(h24, minute, 0)?
                }
                None => {
                    // Without a meridiem, require explicit minutes ("14:30"),
                    // otherwise any small number would look like a time.
                    caps.get(2)?;
                    if hour > 23 {
                        return None;
                    }
                    NaiveTime::from_hms_opt(hour, minute, 0)?
                }
            };

            Some(TimeToken {
                time,
                span: whole.range(),
            })
        })
        .collect()
}

/// Remove a bullet or numbered-list prefix, if present.
fn strip_bullet(line: &str) -> Option<&str> {
    for prefix in ["- ", "* ", "• ", "· ", "+ "] {
        if let Some(rest) = line.strip_prefix(prefix) {
            return Some(rest.trim_start());
        }
    }

    // Numbered items: "1. " or "12) "
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if (1..=2).contains(&digits) {
        let rest = &line[digits..];
        if let Some(r) = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") ")) {
            return Some(r.trim_start());
        }
    }

    None
}

/// Delete `span` from `line` and tidy what remains into a description.
fn strip_span(line: &str, span: Range<usize>) -> String {
    let mut rest = String::with_capacity(line.len());
    rest.push_str(&line[..span.start]);
    rest.push(' ');
    rest.push_str(&line[span.end..]);
    tidy_description(&rest)
}

/// Collapse whitespace, trim leftover separators, and drop a connective
/// left dangling where a time token was removed ("Dinner at" -> "Dinner").
fn tidy_description(s: &str) -> String {
    const EDGE: &[char] = &['-', '–', '—', ':', ',', ';', '(', ')', '*', ' '];

    let collapsed: String = s.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut out = collapsed.trim_matches(EDGE);

    loop {
        let mut changed = false;
        for connective in ["at", "from", "until", "till", "by"] {
            if let Some(stripped) = out.strip_suffix(connective)
                && stripped.ends_with(' ')
            {
                out = stripped.trim_end_matches(EDGE);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    out.to_string()
}
