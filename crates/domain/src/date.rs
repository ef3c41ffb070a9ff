use crate::interval::IntervalLabel;
use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};

/// Hour of the day (UTC) every planned check is anchored to
pub const ANCHOR_HOUR_UTC: i64 = 19;

/// Midnight UTC of the day `now` falls on, plus `ANCHOR_HOUR_UTC` hours.
///
/// Computed once per planning call so that every interval of a batch
/// shares the same anchor.
pub fn daily_anchor(now: DateTime<Utc>) -> DateTime<Utc> {
    let midnight = Utc.from_utc_datetime(&now.date_naive().and_time(NaiveTime::default()));
    midnight + Duration::hours(ANCHOR_HOUR_UTC)
}

/// Due instant of a check planned from `base` with the given interval label,
/// shifted by `day_offset_days` (may be negative).
/// Offsets reaching past what `DateTime<Utc>` can represent are clamped to
/// its bounds.
pub fn compute_due(base: DateTime<Utc>, interval: &str, day_offset_days: i32) -> DateTime<Utc> {
    let due = shift(base, IntervalLabel::parse(interval).offset());
    if day_offset_days != 0 {
        shift(due, Duration::days(i64::from(day_offset_days)))
    } else {
        due
    }
}

fn shift(at: DateTime<Utc>, delta: Duration) -> DateTime<Utc> {
    match at.checked_add_signed(delta) {
        Some(shifted) => shifted,
        None if delta < Duration::zero() => DateTime::<Utc>::MIN_UTC,
        None => DateTime::<Utc>::MAX_UTC,
    }
}
