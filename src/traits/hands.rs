use crate::angles::HandAngles;

/// Rendering collaborator that orients the three hands
pub trait HandRenderer {
    fn set_hour_angle(&mut self, degrees: u16);

    fn set_minute_angle(&mut self, degrees: u16);

    fn set_second_angle(&mut self, degrees: u16);

    /// Apply all three angles at once
    fn apply(&mut self, angles: HandAngles) {
        self.set_hour_angle(angles.hour_deg);
        self.set_minute_angle(angles.minute_deg);
        self.set_second_angle(angles.second_deg);
    }
}

impl<R: HandRenderer + ?Sized> HandRenderer for Box<R> {
    fn set_hour_angle(&mut self, degrees: u16) {
        (**self).set_hour_angle(degrees);
    }

    fn set_minute_angle(&mut self, degrees: u16) {
        (**self).set_minute_angle(degrees);
    }

    fn set_second_angle(&mut self, degrees: u16) {
        (**self).set_second_angle(degrees);
    }
}

/// Renderer that only remembers what it was told, for headless use and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingRenderer {
    pub hour: Option<u16>,
    pub minute: Option<u16>,
    pub second: Option<u16>,
    /// Number of complete hour/minute/second updates
    pub updates: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last applied angles, if all three hands were set
    pub fn angles(&self) -> Option<HandAngles> {
        Some(HandAngles::new(self.hour?, self.minute?, self.second?))
    }
}

impl HandRenderer for RecordingRenderer {
    fn set_hour_angle(&mut self, degrees: u16) {
        self.hour = Some(degrees);
    }

    fn set_minute_angle(&mut self, degrees: u16) {
        self.minute = Some(degrees);
    }

    fn set_second_angle(&mut self, degrees: u16) {
        self.second = Some(degrees);
        self.updates += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_renderer_starts_empty() {
        let renderer = RecordingRenderer::new();
        assert_eq!(renderer.angles(), None);
        assert_eq!(renderer.updates, 0);
    }

    #[test]
    fn apply_sets_every_hand() {
        let mut renderer = RecordingRenderer::new();
        renderer.apply(HandAngles::new(42, 143, 270));

        assert_eq!(renderer.hour, Some(42));
        assert_eq!(renderer.minute, Some(143));
        assert_eq!(renderer.second, Some(270));
        assert_eq!(renderer.updates, 1);
    }

    #[test]
    fn boxed_renderer_forwards() {
        let mut boxed: Box<RecordingRenderer> = Box::new(RecordingRenderer::new());
        boxed.apply(HandAngles::new(1, 2, 3));
        assert_eq!(boxed.angles(), Some(HandAngles::new(1, 2, 3)));
    }
}
