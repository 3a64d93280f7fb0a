//! Wall-clock helpers for record timestamps.

use chrono::{DateTime, TimeDelta, Utc};

/// Current time in UTC.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Timestamp for a mutation of a record last touched at `previous`.
///
/// Never returns a value at or before `previous`; a clock that has not
/// advanced (or went backwards) yields `previous + 1ms`.
pub fn next_after(previous: DateTime<Utc>) -> DateTime<Utc> {
    now().max(previous + TimeDelta::milliseconds(1))
}
