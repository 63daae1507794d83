use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;

use crate::error::ClockError;

/// Tracks visibility and reports hidden -> visible transitions
#[derive(Debug, Clone, Copy)]
pub struct VisibilityTracker {
    visible: bool,
}

impl VisibilityTracker {
    pub fn new(visible: bool) -> Self {
        Self { visible }
    }

    /// Record a visibility report, returns true only when visibility was restored
    pub fn observe(&mut self, visible: bool) -> bool {
        let restored = visible && !self.visible;
        self.visible = visible;
        restored
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Requested visibility signal, `auto` picks the best one the host offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityPreference {
    #[default]
    Auto,
    Occlusion,
    Focus,
    Lifecycle,
}

/// Windowing platform the event loop runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    MacOs,
    Ios,
    Android,
    Windows,
    X11,
    Wayland,
    Other,
}

impl HostPlatform {
    /// Platform backing `event_loop`. On Linux and the BSDs this asks winit
    /// whether it connected to Wayland or X11.
    pub fn detect<T: 'static>(event_loop: &EventLoop<T>) -> Self {
        #[cfg(all(
            unix,
            not(any(target_os = "macos", target_os = "ios", target_os = "android", target_os = "redox"))
        ))]
        {
            use winit::platform::wayland::EventLoopExtWayland;
            if event_loop.is_wayland() {
                HostPlatform::Wayland
            } else {
                HostPlatform::X11
            }
        }

        #[cfg(not(all(
            unix,
            not(any(target_os = "macos", target_os = "ios", target_os = "android", target_os = "redox"))
        )))]
        {
            let _ = event_loop;
            Self::compiled()
        }
    }

    /// Platform known at build time, without a display connection
    pub fn compiled() -> Self {
        if cfg!(target_os = "macos") {
            HostPlatform::MacOs
        } else if cfg!(target_os = "ios") {
            HostPlatform::Ios
        } else if cfg!(target_os = "android") {
            HostPlatform::Android
        } else if cfg!(target_os = "windows") {
            HostPlatform::Windows
        } else {
            HostPlatform::Other
        }
    }
}

/// Which host signals are available on this platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    pub occlusion: bool,
    pub focus: bool,
    pub lifecycle: bool,
}

impl HostCapabilities {
    /// Signals winit delivers on `platform`
    ///
    /// winit only sends `Occluded` on macOS, iOS and X11.
    pub fn for_platform(platform: HostPlatform) -> Self {
        let mobile = matches!(platform, HostPlatform::Ios | HostPlatform::Android);
        Self {
            occlusion: matches!(
                platform,
                HostPlatform::MacOs | HostPlatform::Ios | HostPlatform::X11
            ),
            focus: !mobile,
            lifecycle: mobile,
        }
    }

    /// Capabilities of the platform this binary was built for
    pub fn current() -> Self {
        Self::for_platform(HostPlatform::compiled())
    }
}

/// Host signal that stands for "the clock became visible again"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityApi {
    /// `WindowEvent::Occluded`
    Occlusion,
    /// `WindowEvent::Focused`
    Focus,
    /// Application suspended / resumed
    Lifecycle,
}

impl VisibilityApi {
    /// Pick the signal once at startup. Fails when the host lacks it.
    pub fn select(
        preference: VisibilityPreference,
        caps: HostCapabilities,
    ) -> Result<Self, ClockError> {
        let supported = |api: VisibilityApi| match api {
            VisibilityApi::Occlusion => caps.occlusion,
            VisibilityApi::Focus => caps.focus,
            VisibilityApi::Lifecycle => caps.lifecycle,
        };

        let api = match preference {
            VisibilityPreference::Auto => [
                VisibilityApi::Occlusion,
                VisibilityApi::Focus,
                VisibilityApi::Lifecycle,
            ]
            .into_iter()
            .find(|api| supported(*api))
            .ok_or(ClockError::VisibilityUnsupported { requested: "any" })?,
            VisibilityPreference::Occlusion => VisibilityApi::Occlusion,
            VisibilityPreference::Focus => VisibilityApi::Focus,
            VisibilityPreference::Lifecycle => VisibilityApi::Lifecycle,
        };

        if !supported(api) {
            return Err(ClockError::VisibilityUnsupported { requested: api.name() });
        }

        Ok(api)
    }

    pub fn name(self) -> &'static str {
        match self {
            VisibilityApi::Occlusion => "occlusion",
            VisibilityApi::Focus => "focus",
            VisibilityApi::Lifecycle => "lifecycle",
        }
    }
}

/// Source of visibility reports from the host event loop
pub trait VisibilitySource {
    /// Visibility carried by a window event, if this source listens to it
    fn window_event(&self, event: &WindowEvent) -> Option<bool>;

    /// Visibility implied by the application being resumed or suspended
    fn lifecycle(&self, resumed: bool) -> Option<bool>;
}

/// Adapter that bridges winit events to visibility reports
#[derive(Debug, Clone, Copy)]
pub struct WinitVisibility {
    api: VisibilityApi,
}

impl WinitVisibility {
    pub fn new(api: VisibilityApi) -> Self {
        Self { api }
    }

    pub fn api(&self) -> VisibilityApi {
        self.api
    }
}

impl VisibilitySource for WinitVisibility {
    fn window_event(&self, event: &WindowEvent) -> Option<bool> {
        match (self.api, event) {
            (VisibilityApi::Occlusion, WindowEvent::Occluded(occluded)) => Some(!occluded),
            (VisibilityApi::Focus, WindowEvent::Focused(focused)) => Some(*focused),
            _ => None,
        }
    }

    fn lifecycle(&self, resumed: bool) -> Option<bool> {
        match self.api {
            VisibilityApi::Lifecycle => Some(resumed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: HostCapabilities = HostCapabilities {
        occlusion: true,
        focus: true,
        lifecycle: true,
    };

    const NONE: HostCapabilities = HostCapabilities {
        occlusion: false,
        focus: false,
        lifecycle: false,
    };

    #[test]
    fn tracker_reports_only_restoration() {
        let mut tracker = VisibilityTracker::new(true);

        assert!(!tracker.observe(true)); // already visible
        assert!(!tracker.observe(false));
        assert!(!tracker.is_visible());
        assert!(tracker.observe(true));
        assert!(!tracker.observe(true));
    }

    #[test]
    fn tracker_repeated_hidden_reports() {
        let mut tracker = VisibilityTracker::default();
        assert!(!tracker.observe(false));
        assert!(!tracker.observe(false));
        assert!(tracker.observe(true));
    }

    #[test]
    fn auto_prefers_occlusion() {
        let api = VisibilityApi::select(VisibilityPreference::Auto, ALL).unwrap();
        assert_eq!(api, VisibilityApi::Occlusion);
    }

    #[test]
    fn auto_falls_back_in_order() {
        let caps = HostCapabilities { occlusion: false, ..ALL };
        assert_eq!(
            VisibilityApi::select(VisibilityPreference::Auto, caps).unwrap(),
            VisibilityApi::Focus
        );

        let caps = HostCapabilities { lifecycle: true, ..NONE };
        assert_eq!(
            VisibilityApi::select(VisibilityPreference::Auto, caps).unwrap(),
            VisibilityApi::Lifecycle
        );
    }

    #[test]
    fn missing_capability_is_fatal() {
        let err = VisibilityApi::select(VisibilityPreference::Auto, NONE).unwrap_err();
        assert!(matches!(err, ClockError::VisibilityUnsupported { requested: "any" }));

        let caps = HostCapabilities { occlusion: false, ..ALL };
        let err = VisibilityApi::select(VisibilityPreference::Occlusion, caps).unwrap_err();
        assert!(matches!(err, ClockError::VisibilityUnsupported { requested: "occlusion" }));
    }

    #[test]
    fn occlusion_only_where_winit_sends_it() {
        for platform in [HostPlatform::MacOs, HostPlatform::Ios, HostPlatform::X11] {
            assert!(HostCapabilities::for_platform(platform).occlusion, "{:?}", platform);
        }
        for platform in [
            HostPlatform::Windows,
            HostPlatform::Wayland,
            HostPlatform::Android,
            HostPlatform::Other,
        ] {
            assert!(!HostCapabilities::for_platform(platform).occlusion, "{:?}", platform);
        }
    }

    #[test]
    fn auto_uses_focus_on_windows_and_wayland() {
        for platform in [HostPlatform::Windows, HostPlatform::Wayland] {
            let caps = HostCapabilities::for_platform(platform);
            assert_eq!(
                VisibilityApi::select(VisibilityPreference::Auto, caps).unwrap(),
                VisibilityApi::Focus
            );
            assert!(VisibilityApi::select(VisibilityPreference::Occlusion, caps).is_err());
        }
    }

    #[test]
    fn mobile_platforms() {
        let ios = HostCapabilities::for_platform(HostPlatform::Ios);
        assert_eq!(
            VisibilityApi::select(VisibilityPreference::Auto, ios).unwrap(),
            VisibilityApi::Occlusion
        );

        let android = HostCapabilities::for_platform(HostPlatform::Android);
        assert_eq!(
            VisibilityApi::select(VisibilityPreference::Auto, android).unwrap(),
            VisibilityApi::Lifecycle
        );
    }

    #[test]
    fn current_never_claims_occlusion_without_a_display() {
        // X11 vs Wayland is only known once the event loop exists
        assert_eq!(
            HostCapabilities::current().occlusion,
            cfg!(any(target_os = "macos", target_os = "ios"))
        );
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn windows_build_has_no_occlusion() {
        assert_eq!(HostPlatform::compiled(), HostPlatform::Windows);
        assert!(!HostCapabilities::current().occlusion);
    }

    #[test]
    fn explicit_preference_is_honoured() {
        assert_eq!(
            VisibilityApi::select(VisibilityPreference::Lifecycle, ALL).unwrap(),
            VisibilityApi::Lifecycle
        );
    }

    #[test]
    fn occlusion_adapter_maps_events() {
        let source = WinitVisibility::new(VisibilityApi::Occlusion);
        assert_eq!(source.window_event(&WindowEvent::Occluded(true)), Some(false));
        assert_eq!(source.window_event(&WindowEvent::Occluded(false)), Some(true));
        assert_eq!(source.window_event(&WindowEvent::Focused(true)), None);
        assert_eq!(source.lifecycle(true), None);
    }

    #[test]
    fn focus_adapter_maps_events() {
        let source = WinitVisibility::new(VisibilityApi::Focus);
        assert_eq!(source.window_event(&WindowEvent::Focused(false)), Some(false));
        assert_eq!(source.window_event(&WindowEvent::Focused(true)), Some(true));
        assert_eq!(source.window_event(&WindowEvent::Occluded(false)), None);
    }

    #[test]
    fn lifecycle_adapter_maps_resume() {
        let source = WinitVisibility::new(VisibilityApi::Lifecycle);
        assert_eq!(source.lifecycle(true), Some(true));
        assert_eq!(source.lifecycle(false), Some(false));
        assert_eq!(source.window_event(&WindowEvent::Focused(true)), None);
    }

    #[test]
    fn preference_from_json() {
        let pref: VisibilityPreference = serde_json::from_str("\"focus\"").unwrap();
        assert_eq!(pref, VisibilityPreference::Focus);
    }
}
