use chrono::{NaiveTime, Timelike};

/// Seconds in one revolution of the hour hand (12 hours)
pub const HALF_DAY_SECONDS: u32 = 43_200;
/// Seconds in one revolution of the minute hand
pub const HOUR_SECONDS: u32 = 3_600;
/// Seconds in one revolution of the second hand
pub const MINUTE_SECONDS: u32 = 60;

/// Time of day on a 12 hour dial, every component pre-scaled to seconds
///
/// `hours_in_seconds` is a multiple of 3600 in `0..=43200` (12 o'clock stays 12,
/// it is not folded to 0), `minutes_in_seconds` a multiple of 60 in `0..=3540`
/// and `seconds` lies in `0..=59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NormalizedTime {
    hours_in_seconds: u32,
    minutes_in_seconds: u32,
    seconds: u32,
}

impl NormalizedTime {
    /// Build from dial hours (0..=12), minutes and seconds
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Option<Self> {
        if hours > 12 || minutes > 59 || seconds > 59 {
            return None;
        }
        Some(Self::scaled(hours, minutes, seconds))
    }

    /// Fold a 24 hour wall time onto the dial
    pub fn from_wall_time(time: NaiveTime) -> Self {
        Self::scaled(to_dial_hours(time.hour()), time.minute(), time.second().min(59))
    }

    pub(crate) fn scaled(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours_in_seconds: hours * HOUR_SECONDS,
            minutes_in_seconds: minutes * MINUTE_SECONDS,
            seconds,
        }
    }

    pub fn hours_in_seconds(&self) -> u32 {
        self.hours_in_seconds
    }

    pub fn minutes_in_seconds(&self) -> u32 {
        self.minutes_in_seconds
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn total_seconds(&self) -> u32 {
        self.hours_in_seconds + self.minutes_in_seconds + self.seconds
    }
}

/// 13..=23 map to 1..=11; 0..=12 are kept as is
pub(crate) fn to_dial_hours(hours: u32) -> u32 {
    if hours > 12 {
        hours - 12
    } else {
        hours
    }
}
