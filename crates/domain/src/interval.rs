use chrono::Duration;
use std::fmt::Display;

/// The follow-up horizons every batch is planned with, in planning order
pub const BATCH_INTERVALS: [&str; 4] = ["48h", "7d", "3m", "1y"];

/// Parsed form of an interval label.
///
/// Besides the four fixed horizons a label may be a plain (possibly negative)
/// hour count. Anything else is kept as `Unrecognized` and planned with the
/// 7 day rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalLabel {
    FortyEightHours,
    SevenDays,
    ThreeMonths,
    OneYear,
    Hours(i32),
    Unrecognized,
}

impl IntervalLabel {
    pub fn parse(label: &str) -> Self {
        match label {
            "48h" => Self::FortyEightHours,
            "7d" => Self::SevenDays,
            "3m" => Self::ThreeMonths,
            "1y" => Self::OneYear,
            other => match other.parse::<i32>() {
                Ok(hours) => Self::Hours(hours),
                Err(_) => Self::Unrecognized,
            },
        }
    }

    /// Offset from the planning anchor.
    /// Months and years are fixed day counts, not calendar aware.
    pub fn offset(&self) -> Duration {
        match self {
            Self::FortyEightHours => Duration::hours(48),
            Self::SevenDays | Self::Unrecognized => Duration::days(7),
            Self::ThreeMonths => Duration::days(90),
            Self::OneYear => Duration::days(365),
            Self::Hours(hours) => Duration::hours(i64::from(*hours)),
        }
    }
}

impl Display for IntervalLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FortyEightHours => write!(f, "48h"),
            Self::SevenDays => write!(f, "7d"),
            Self::ThreeMonths => write!(f, "3m"),
            Self::OneYear => write!(f, "1y"),
            Self::Hours(hours) => write!(f, "{}", hours),
            Self::Unrecognized => write!(f, "unrecognized"),
        }
    }
}
