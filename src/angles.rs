use serde::{Deserialize, Serialize};

use crate::time::{NormalizedTime, HALF_DAY_SECONDS, HOUR_SECONDS, MINUTE_SECONDS};

/// Rotation of each hand in whole degrees, clockwise from 12 o'clock, `0..360`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HandAngles {
    pub hour_deg: u16,
    pub minute_deg: u16,
    pub second_deg: u16,
}

impl HandAngles {
    pub fn new(hour_deg: u16, minute_deg: u16, second_deg: u16) -> Self {
        Self {
            hour_deg: hour_deg % 360,
            minute_deg: minute_deg % 360,
            second_deg: second_deg % 360,
        }
    }
}

/// Hand angles for a normalized time
///
/// Each hand covers its own period: 12 hours, 1 hour and 1 minute.
pub fn compute_angles(t: NormalizedTime) -> HandAngles {
    HandAngles {
        hour_deg: degrees(t.total_seconds(), HALF_DAY_SECONDS),
        minute_deg: degrees(t.minutes_in_seconds() + t.seconds(), HOUR_SECONDS),
        second_deg: degrees(t.seconds(), MINUTE_SECONDS),
    }
}

/// Share of a revolution, rounded half up and wrapped into `0..360`
fn degrees(elapsed: u32, period: u32) -> u16 {
    let deg = (f64::from(elapsed) / f64::from(period) * 360.0).round() as u32;
    (deg % 360) as u16
}
