use crate::angles::HandAngles;
use crate::time::{HALF_DAY_SECONDS, HOUR_SECONDS, MINUTE_SECONDS};

/// Longest frame delta counted, in seconds. Anything above is dropped.
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Animated hand position in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

/// Frame driven hand rotation between syncs
///
/// Hour and minute hands sweep linearly, the second hand jumps 6 degrees per
/// elapsed second. Time only advances through frame deltas, so frames that
/// never run (hidden window) are lost and the hands fall behind until the
/// next `sync`.
///
/// Elapsed time wraps every half day, a whole number of turns for every hand,
/// so a clock left running for days keeps its frame resolution.
#[derive(Debug, Clone)]
pub struct HandAnimation {
    base: HandAngles,
    elapsed: f64,
    running: bool,
}

impl HandAnimation {
    pub fn new(base: HandAngles, running: bool) -> Self {
        Self {
            base,
            elapsed: 0.0,
            running,
        }
    }

    /// Accumulate one frame, returns the delta actually counted
    pub fn advance(&mut self, delta: f32) -> f32 {
        if !self.running {
            return 0.0;
        }
        let counted = delta.clamp(0.0, MAX_FRAME_DELTA);
        self.elapsed = (self.elapsed + f64::from(counted)).rem_euclid(f64::from(HALF_DAY_SECONDS));
        counted
    }

    /// Restart from freshly computed angles
    pub fn sync(&mut self, base: HandAngles) {
        self.base = base;
        self.elapsed = 0.0;
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds animated since the last sync, modulo half a day
    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    pub fn current(&self) -> AnimatedAngles {
        let sweep = |period: u32| self.elapsed / f64::from(period) * 360.0;
        let second_steps = self.elapsed.floor() * (360.0 / f64::from(MINUTE_SECONDS));

        AnimatedAngles {
            hour: wrap(f64::from(self.base.hour_deg) + sweep(HALF_DAY_SECONDS)),
            minute: wrap(f64::from(self.base.minute_deg) + sweep(HOUR_SECONDS)),
            second: wrap(f64::from(self.base.second_deg) + second_steps),
        }
    }
}

fn wrap(degrees: f64) -> f32 {
    degrees.rem_euclid(360.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn starts_at_base() {
        let anim = HandAnimation::new(HandAngles::new(42, 143, 270), true);
        let now = anim.current();
        assert!(approx(now.hour, 42.0));
        assert!(approx(now.minute, 143.0));
        assert!(approx(now.second, 270.0));
    }

    #[test]
    fn second_hand_steps_per_whole_second() {
        let mut anim = HandAnimation::new(HandAngles::default(), true);

        anim.advance(0.2);
        anim.advance(0.2);
        assert!(approx(anim.current().second, 0.0));

        for _ in 0..4 {
            anim.advance(0.2);
        }
        // 1.2s elapsed
        assert!(approx(anim.current().second, 6.0));
    }

    #[test]
    fn minute_and_hour_sweep() {
        let mut anim = HandAnimation::new(HandAngles::default(), true);
        for _ in 0..40 {
            anim.advance(0.25);
        }
        // 10 seconds
        assert!(approx(anim.current().minute, 1.0));
        assert!(approx(anim.current().hour, 10.0 / 120.0));
        assert!(approx(anim.current().second, 60.0));
    }

    #[test]
    fn long_frames_are_capped() {
        let mut anim = HandAnimation::new(HandAngles::default(), true);
        let counted = anim.advance(30.0);
        assert_eq!(counted, MAX_FRAME_DELTA);
        assert!(approx(anim.elapsed(), MAX_FRAME_DELTA));
    }

    #[test]
    fn negative_delta_ignored() {
        let mut anim = HandAnimation::new(HandAngles::default(), true);
        assert_eq!(anim.advance(-1.0), 0.0);
        assert_eq!(anim.elapsed(), 0.0);
    }

    #[test]
    fn stopped_animation_holds_position() {
        let mut anim = HandAnimation::new(HandAngles::new(90, 0, 0), false);
        anim.advance(0.1);
        assert_eq!(anim.elapsed(), 0.0);
        assert!(approx(anim.current().hour, 90.0));

        anim.set_running(true);
        anim.advance(0.1);
        assert!(anim.is_running());
        assert!(anim.elapsed() > 0.0);
    }

    #[test]
    fn sync_removes_drift() {
        let mut anim = HandAnimation::new(HandAngles::new(0, 0, 0), true);
        for _ in 0..8 {
            anim.advance(0.25);
        }
        anim.sync(HandAngles::new(10, 20, 30));
        assert_eq!(anim.elapsed(), 0.0);
        assert!(approx(anim.current().second, 30.0));
    }

    #[test]
    fn keeps_time_over_a_day() {
        // 1/64 s frames are exact in binary, so the expected values are too
        let frame = 1.0 / 64.0;
        let mut anim = HandAnimation::new(HandAngles::default(), true);

        for _ in 0..(86_400 * 64) {
            anim.advance(frame);
        }
        // a day is two half days
        assert_eq!(anim.elapsed(), 0.0);

        for _ in 0..(10 * 64 + 32) {
            anim.advance(frame);
        }
        assert!(approx(anim.elapsed(), 10.5));
        assert!(approx(anim.current().second, 60.0));
        assert!(approx(anim.current().minute, 1.05));
    }

    #[test]
    fn hands_keep_moving_past_a_million_seconds() {
        let mut anim = HandAnimation::new(HandAngles::default(), true);
        for _ in 0..4_000_000 {
            anim.advance(0.25);
        }
        // 1e6 s = 23 half days + 6400 s
        assert!(approx(anim.elapsed(), 6400.0));

        let before = anim.current();
        for _ in 0..600 {
            anim.advance(1.0 / 60.0);
        }
        let after = anim.current();
        assert!((after.second - before.second - 60.0).abs() <= 6.0 + 1e-3);
        assert!(after.minute > before.minute);
    }

    #[test]
    fn wraps_past_full_turn() {
        let mut anim = HandAnimation::new(HandAngles::new(0, 0, 354), true);
        for _ in 0..4 {
            anim.advance(0.25);
        }
        assert!(approx(anim.current().second, 0.0));
    }
}
