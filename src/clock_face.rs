use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::angles::{compute_angles, HandAngles};
use crate::core::visibility::VisibilityTracker;
use crate::core::wall_clock::WallClock;
use crate::error::ParseError;
use crate::time::TimeParser;
use crate::traits::HandRenderer;

/// Notification sent whenever the time is set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeChanged {
    /// Spec as it was set, `None` for the current time
    pub time: Option<String>,
    pub angles: HandAngles,
}

type Listener = Box<dyn FnMut(&TimeChanged)>;

/// Analog clock state: last time spec, last angles and the hand renderer
///
/// The only state kept between calls is the raw time string. Angles are
/// recomputed from it on every set and on every resync, so a resync depends only
/// on that string and the wall clock.
pub struct ClockFace<R: HandRenderer, C: WallClock> {
    parser: TimeParser<C>,
    renderer: R,
    spec: Option<String>,
    angles: HandAngles,
    visibility: VisibilityTracker,
    listeners: Vec<Listener>,
}

impl<R: HandRenderer, C: WallClock> ClockFace<R, C> {
    /// Create a face showing the current time
    pub fn new(renderer: R, clock: C) -> Self {
        let parser = TimeParser::new(clock);
        let angles = compute_angles(parser.now());

        let mut face = Self {
            parser,
            renderer,
            spec: None,
            angles,
            visibility: VisibilityTracker::default(),
            listeners: Vec::new(),
        };
        face.renderer.apply(angles);
        face
    }

    /// Set the displayed time. `None` or `""` follows the wall clock.
    ///
    /// On error nothing changes: the previous spec and hands are kept.
    pub fn set_time(&mut self, spec: Option<&str>) -> Result<HandAngles, ParseError> {
        let spec = spec.filter(|s| !s.is_empty());

        let angles = match self.parser.parse(spec) {
            Ok(time) => compute_angles(time),
            Err(err) => {
                warn!("rejected time {:?}: {}", spec.unwrap_or_default(), err);
                return Err(err);
            }
        };

        self.spec = spec.map(str::to_owned);
        self.emit(angles);

        let event = TimeChanged {
            time: self.spec.clone(),
            angles,
        };
        for listener in &mut self.listeners {
            listener(&event);
        }

        Ok(angles)
    }

    /// Recompute the hands from the stored spec and the wall clock
    pub fn resync(&mut self) -> Result<HandAngles, ParseError> {
        let time = self.parser.parse(self.spec.as_deref())?;
        let angles = compute_angles(time);
        info!("resync to {:?} ({:?})", angles, self.spec.as_deref().unwrap_or("now"));
        self.emit(angles);
        Ok(angles)
    }

    /// Feed a visibility report; resyncs only on a hidden -> visible transition
    pub fn on_visibility_changed(&mut self, visible: bool) -> Option<HandAngles> {
        if self.visibility.observe(visible) {
            self.on_visibility_restored()
        } else {
            None
        }
    }

    /// The surface was shown again: snap the hands to the true position
    pub fn on_visibility_restored(&mut self) -> Option<HandAngles> {
        self.visibility.observe(true);
        // the stored spec passed validation when it was set
        self.resync().ok()
    }

    /// Register a listener for [`TimeChanged`]
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&TimeChanged) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Spec currently reflected, `None` when following the wall clock
    pub fn time(&self) -> Option<&str> {
        self.spec.as_deref()
    }

    /// Angles last sent to the renderer
    pub fn angles(&self) -> HandAngles {
        self.angles
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// Whether the hands follow the wall clock
    pub fn follows_wall_clock(&self) -> bool {
        self.spec.is_none()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn clock(&self) -> &C {
        self.parser.clock()
    }

    fn emit(&mut self, angles: HandAngles) {
        debug!("hands at {:?}", angles);
        self.angles = angles;
        self.renderer.apply(angles);
    }
}
