//! Departure values and human-friendly rendering.
//!
//! A [`Departure`] pairs the journey planner's expected arrival/departure
//! timestamps with the destination text and the serving [`Route`]. The
//! countdown string is recomputed against the wall clock on every read,
//! never cached, so repeated renders of the same value stay current.

use std::fmt;

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};

use super::route::Route;

/// One predicted vehicle call at a stop.
#[derive(Debug, Clone)]
pub struct Departure {
    arrival_time: DateTime<FixedOffset>,
    departure_time: DateTime<FixedOffset>,
    destination: String,
    route: Route,
}

impl Departure {
    /// Create a departure.
    ///
    /// `arrival_time <= departure_time` is expected from the API but not
    /// enforced here.
    pub fn new(
        arrival_time: DateTime<FixedOffset>,
        departure_time: DateTime<FixedOffset>,
        destination: impl Into<String>,
        route: Route,
    ) -> Self {
        Self {
            arrival_time,
            departure_time,
            destination: destination.into(),
            route,
        }
    }

    /// Expected arrival of the vehicle at the stop.
    pub fn arrival_time(&self) -> DateTime<FixedOffset> {
        self.arrival_time
    }

    /// Expected departure of the vehicle from the stop.
    pub fn departure_time(&self) -> DateTime<FixedOffset> {
        self.departure_time
    }

    /// Front-sign destination text.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// The line serving this call.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Countdown until departure, measured against the wall clock in the
    /// departure time's own timezone. Recomputed on every call.
    pub fn countdown(&self) -> String {
        let now = Utc::now().with_timezone(self.departure_time.offset());
        self.countdown_at(now)
    }

    /// Countdown until departure relative to an explicit `now`.
    ///
    /// Buckets, first match wins (boundaries are exact: 60 seconds left
    /// lands in the minutes-and-seconds bucket, zero or less is gone):
    ///
    /// | time left        | rendered as        |
    /// |------------------|--------------------|
    /// | <= 0             | `too late`         |
    /// | under 1 minute   | `   42 sec`        |
    /// | 1 to 5 minutes   | ` 3m 12s`          |
    /// | 5 minutes to 1 h | `42 min`           |
    /// | 1 to 3 hours     | ` 2h 30min`        |
    /// | 3 hours and up   | ` 4hr`             |
    ///
    /// Fields are right-aligned and space-padded exactly as shown so
    /// columns line up in fixed-width display contexts.
    pub fn countdown_at(&self, now: DateTime<FixedOffset>) -> String {
        let time_left = self.departure_time.signed_duration_since(now);
        if time_left <= TimeDelta::zero() {
            return "too late".to_string();
        }

        let secs = time_left.num_seconds();
        if secs < 60 {
            format!("{secs:>5} sec")
        } else if secs < 5 * 60 {
            format!("{:>2}m {:>2}s", secs / 60, secs % 60)
        } else if secs < 3600 {
            format!("{:>2} min", secs / 60)
        } else if secs < 3 * 3600 {
            format!("{:>2}h {:>2}min", secs / 3600, (secs % 3600) / 60)
        } else {
            format!("{:>2}hr", secs / 3600)
        }
    }

    /// Render this departure through a caller-supplied template.
    ///
    /// The template is scanned once, left to right. At each position the
    /// placeholders `{icon}`, `{time}` (24h `HH:MM`), `{countdown}`
    /// (trimmed), `{line_no}`, `{destination}` and the escapes `\t`/`\n`
    /// are tried in that order; a match emits its value and scanning
    /// resumes after the placeholder. Substituted text is never rescanned,
    /// so a destination containing the literal text `{line_no}` comes out
    /// untouched. Unrecognized placeholders pass through unchanged.
    pub fn render(&self, template: &str) -> String {
        let substitutions: [(&str, String); 7] = [
            ("{icon}", self.route.icon().to_string()),
            ("{time}", self.departure_time.format("%H:%M").to_string()),
            ("{countdown}", self.countdown().trim().to_string()),
            ("{line_no}", self.route.line_number().to_string()),
            ("{destination}", self.destination.clone()),
            ("\\t", "\t".to_string()),
            ("\\n", "\n".to_string()),
        ];

        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        'scan: while !rest.is_empty() {
            for (token, value) in &substitutions {
                if let Some(after) = rest.strip_prefix(token) {
                    out.push_str(value);
                    rest = after;
                    continue 'scan;
                }
            }
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                out.push(c);
            }
            rest = chars.as_str();
        }
        out
    }
}

impl fmt::Display for Departure {
    /// Default one-line rendering:
    /// `<icon>\t<HH:MM> (<countdown, width 8>) <line_no, width 5> <destination>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{} ({:>8}) {:>5} {}",
            self.route.icon(),
            self.departure_time.format("%H:%M"),
            self.countdown().trim(),
            self.route.line_number(),
            self.destination
        )
    }
}
