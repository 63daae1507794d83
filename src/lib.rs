pub mod angles;
pub mod cli;
pub mod clock_face;
pub mod config;
pub mod core;
pub mod error;
pub mod face;
pub mod time;
pub mod traits;

pub use angles::{compute_angles, HandAngles};
pub use clock_face::{ClockFace, TimeChanged};
pub use error::{ClockError, Field, ParseError, ParseErrorKind};
pub use time::{parse_local, parse_spec, NormalizedTime, TimeParser};
pub use traits::HandRenderer;
