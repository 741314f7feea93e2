//! Time related utils.

use chrono::Utc;

/// DateTime is the alias for chrono's UTC datetime.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Seconds since the unix epoch for the given time.
pub fn unix_timestamp(t: DateTime) -> i64 {
    t.timestamp()
}
