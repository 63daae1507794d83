pub mod animation;
pub mod canvas;
pub mod gpu_context;
pub mod surface_renderer;
pub mod visibility;
pub mod wall_clock;

pub use animation::{AnimatedAngles, HandAnimation, MAX_FRAME_DELTA};
pub use canvas::{Canvas, DrawOp, Rgba};
pub use gpu_context::GpuContext;
pub use surface_renderer::SurfaceRenderer;
pub use visibility::{
    HostCapabilities, HostPlatform, VisibilityApi, VisibilityPreference, VisibilitySource,
    VisibilityTracker, WinitVisibility,
};
pub use wall_clock::{FixedClock, LocalClock, WallClock};
