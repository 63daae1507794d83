use std::cell::Cell;

use chrono::{Local, NaiveTime, Timelike};

/// Source of the current local wall-clock time
pub trait WallClock {
    /// Read the time of day once
    fn now(&self) -> NaiveTime;
}

impl<C: WallClock + ?Sized> WallClock for &C {
    fn now(&self) -> NaiveTime {
        (**self).now()
    }
}

/// Host local time via chrono
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl WallClock for LocalClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Manually driven clock for tests and replays
#[derive(Debug, Clone)]
pub struct FixedClock {
    time: Cell<NaiveTime>,
}

impl FixedClock {
    /// Create clock stopped at h:m:s. Out of range values fall back to midnight.
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            time: Cell::new(NaiveTime::from_hms_opt(hour, minute, second).unwrap_or(NaiveTime::MIN)),
        }
    }

    pub fn set(&self, time: NaiveTime) {
        self.time.set(time);
    }

    /// Move forward by whole seconds, wrapping at midnight
    pub fn advance(&self, seconds: i64) {
        let (next, _) = self
            .time
            .get()
            .overflowing_add_signed(chrono::Duration::seconds(seconds));
        self.time.set(next);
    }

    pub fn hms(&self) -> (u32, u32, u32) {
        let t = self.time.get();
        (t.hour(), t.minute(), t.second())
    }
}

impl WallClock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.time.get()
    }
}
