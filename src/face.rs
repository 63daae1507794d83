use glam::Vec2;

use crate::angles::HandAngles;
use crate::core::animation::{AnimatedAngles, HandAnimation};
use crate::core::canvas::{Canvas, DrawOp, Rgba};
use crate::traits::HandRenderer;

/// Dial colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Rgba,
    pub dial: Rgba,
    pub border: Rgba,
    pub hour: Rgba,
    pub minute: Rgba,
    pub second: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [24, 24, 24, 255],
            dial: [0, 0, 0, 255],
            border: [255, 255, 255, 255],
            hour: [238, 238, 238, 255],
            minute: [238, 238, 238, 255],
            second: [238, 238, 238, 255],
        }
    }
}

/// Hand length and width as a share of the dial radius
#[derive(Debug, Clone, Copy)]
struct HandShape {
    length: f32,
    width: f32,
}

const HOUR_HAND: HandShape = HandShape { length: 0.44, width: 0.06 };
const MINUTE_HAND: HandShape = HandShape { length: 0.68, width: 0.04 };
const SECOND_HAND: HandShape = HandShape { length: 0.9, width: 0.012 };
const BORDER_WIDTH: f32 = 0.08;
const CENTER_DOT: f32 = 0.06;
const DIAL_MARGIN: f32 = 0.92;

/// Draws the clock into a [`Canvas`]
///
/// Angles arriving through [`HandRenderer`] re-anchor the hand animation, so a
/// resync snaps the hands instead of letting them catch up.
#[derive(Debug, Clone)]
pub struct DialRenderer {
    target: HandAngles,
    animation: HandAnimation,
    palette: Palette,
}

impl DialRenderer {
    pub fn new(animate: bool) -> Self {
        Self {
            target: HandAngles::default(),
            animation: HandAnimation::new(HandAngles::default(), animate),
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Advance the hand animation by one frame
    pub fn advance(&mut self, delta: f32) {
        self.animation.advance(delta);
    }

    /// Angles last received from the clock
    pub fn target(&self) -> HandAngles {
        self.target
    }

    /// Position the hands are drawn at
    pub fn displayed(&self) -> AnimatedAngles {
        self.animation.current()
    }

    pub fn animation(&self) -> &HandAnimation {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut HandAnimation {
        &mut self.animation
    }

    /// Queue the dial and hands onto the canvas
    pub fn paint(&self, canvas: Canvas) -> Canvas {
        let (width, height) = canvas.dimensions();
        let center = Vec2::new(width as f32, height as f32) * 0.5;
        let radius = center.x.min(center.y) * DIAL_MARGIN;
        let hands = self.displayed();
        let p = self.palette;

        let ticks = (0..12).map(|i| {
            let dir = direction(i as f32 * 30.0);
            DrawOp::ThickLine {
                from: center + dir * radius * 0.82,
                to: center + dir * radius * 0.9,
                width: (radius * 0.02).max(1.0),
                color: p.border,
            }
        });

        canvas
            .draw(DrawOp::Clear(p.background))
            .draw(DrawOp::FilledCircle { center, radius, color: p.border })
            .draw(DrawOp::FilledCircle {
                center,
                radius: radius * (1.0 - BORDER_WIDTH),
                color: p.dial,
            })
            .draw_all(ticks)
            .draw(hand(center, radius, hands.hour, HOUR_HAND, p.hour))
            .draw(hand(center, radius, hands.minute, MINUTE_HAND, p.minute))
            .draw(hand(center, radius, hands.second, SECOND_HAND, p.second))
            .draw(DrawOp::FilledCircle {
                center,
                radius: radius * CENTER_DOT,
                color: p.hour,
            })
    }

    fn retarget(&mut self) {
        self.animation.sync(self.target);
    }
}

impl HandRenderer for DialRenderer {
    fn set_hour_angle(&mut self, degrees: u16) {
        self.target.hour_deg = degrees % 360;
        self.retarget();
    }

    fn set_minute_angle(&mut self, degrees: u16) {
        self.target.minute_deg = degrees % 360;
        self.retarget();
    }

    fn set_second_angle(&mut self, degrees: u16) {
        self.target.second_deg = degrees % 360;
        self.retarget();
    }
}

/// Unit vector for a clockwise angle from 12 o'clock, screen y pointing down
pub fn direction(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.sin(), -rad.cos())
}

fn hand(center: Vec2, radius: f32, degrees: f32, shape: HandShape, color: Rgba) -> DrawOp {
    DrawOp::ThickLine {
        from: center,
        to: center + direction(degrees) * radius * shape.length,
        width: (radius * shape.width).max(1.0),
        color,
    }
}
