//! Display formatting for post creation times.

use chrono::{DateTime, Utc};
use serde_json::Number;

use crate::types::Timestamp;

/// Pure `Timestamp -> display string` conversion.
pub trait DateFormatter {
    fn format(&self, timestamp: &Timestamp) -> String;
}

impl<F> DateFormatter for F
where
    F: Fn(&Timestamp) -> String,
{
    fn format(&self, timestamp: &Timestamp) -> String {
        self(timestamp)
    }
}

/// Long English date in UTC, e.g. `March 5, 2024`.
///
/// Values that do not parse are shown as received.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongDate;

impl DateFormatter for LongDate {
    fn format(&self, timestamp: &Timestamp) -> String {
        let parsed = match timestamp {
            Timestamp::Iso(raw) => DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            Timestamp::EpochMillis(ms) => {
                epoch_millis(ms).and_then(DateTime::<Utc>::from_timestamp_millis)
            }
        };

        match (parsed, timestamp) {
            (Some(dt), _) => dt.format("%B %-d, %Y").to_string(),
            (None, Timestamp::Iso(raw)) => raw.clone(),
            (None, Timestamp::EpochMillis(ms)) => ms.to_string(),
        }
    }
}

fn epoch_millis(n: &Number) -> Option<i64> {
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
            .map(|f| f.round() as i64)
    })
}
