//! Viewport width tracking and the responsive layout split

use tracing::{debug, trace};

/// Current viewport width in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ViewportWidth(f64);

impl ViewportWidth {
    /// Negative or NaN widths (detached frames) are clamped to zero
    pub fn new(px: f64) -> Self {
        if px.is_finite() && px > 0.0 {
            Self(px)
        } else {
            Self(0.0)
        }
    }

    pub fn px(self) -> f64 {
        self.0
    }
}

/// How the navigation menu lays out its entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Horizontal bar, every entry visible
    Bar,
    /// Menu icon with a collapsible column of entries
    Dropdown,
}

impl LayoutMode {
    /// Widths at or above `threshold_px` get the bar
    pub fn for_width(width: ViewportWidth, threshold_px: f64) -> Self {
        if width.px() >= threshold_px {
            LayoutMode::Bar
        } else {
            LayoutMode::Dropdown
        }
    }
}

/// Holds the last observed viewport width for one mounted consumer.
///
/// The browser hook drives this: `attach` when the resize listener is
/// registered, `on_resize` for every event, `detach` on cleanup.
#[derive(Debug, Clone)]
pub struct WindowWidthTracker {
    width: ViewportWidth,
    listening: bool,
}

impl WindowWidthTracker {
    pub fn new(initial: ViewportWidth) -> Self {
        Self {
            width: initial,
            listening: false,
        }
    }

    pub fn width(&self) -> ViewportWidth {
        self.width
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Mark the resize listener as registered.
    ///
    /// Returns `false` if it already was, in which case the caller must not
    /// register a second listener.
    pub fn attach(&mut self) -> bool {
        if self.listening {
            debug!("resize listener already attached");
            return false;
        }
        self.listening = true;
        true
    }

    /// Record a resize event. Returns the new width when it changed, so
    /// dependents are only notified on actual changes.
    pub fn on_resize(&mut self, width: ViewportWidth) -> Option<ViewportWidth> {
        if !self.listening {
            trace!("resize after detach ignored");
            return None;
        }
        if width == self.width {
            return None;
        }
        self.width = width;
        Some(width)
    }

    /// Mark the listener as released. Returns `false` if nothing was attached.
    pub fn detach(&mut self) -> bool {
        std::mem::replace(&mut self.listening, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 960.0;

    #[test]
    fn test_layout_mode_split() {
        assert_eq!(
            LayoutMode::for_width(ViewportWidth::new(1920.0), THRESHOLD),
            LayoutMode::Bar
        );
        assert_eq!(
            LayoutMode::for_width(ViewportWidth::new(960.0), THRESHOLD),
            LayoutMode::Bar
        );
        assert_eq!(
            LayoutMode::for_width(ViewportWidth::new(959.5), THRESHOLD),
            LayoutMode::Dropdown
        );
        assert_eq!(
            LayoutMode::for_width(ViewportWidth::new(400.0), THRESHOLD),
            LayoutMode::Dropdown
        );
    }

    #[test]
    fn test_viewport_width_clamps() {
        assert_eq!(ViewportWidth::new(-10.0).px(), 0.0);
        assert_eq!(ViewportWidth::new(f64::NAN).px(), 0.0);
    }

    #[test]
    fn test_tracker_reports_changes_only() {
        let mut tracker = WindowWidthTracker::new(ViewportWidth::new(1920.0));
        assert!(tracker.attach());

        assert_eq!(tracker.on_resize(ViewportWidth::new(1920.0)), None);
        assert_eq!(
            tracker.on_resize(ViewportWidth::new(400.0)),
            Some(ViewportWidth::new(400.0))
        );
        assert_eq!(tracker.width().px(), 400.0);
    }

    #[test]
    fn test_tracker_single_listener() {
        let mut tracker = WindowWidthTracker::new(ViewportWidth::new(800.0));
        assert!(tracker.attach());
        assert!(!tracker.attach());
        assert!(tracker.detach());
        assert!(!tracker.detach());
        assert!(!tracker.is_listening());
    }

    #[test]
    fn test_tracker_ignores_events_after_detach() {
        let mut tracker = WindowWidthTracker::new(ViewportWidth::new(800.0));
        tracker.attach();
        tracker.detach();

        assert_eq!(tracker.on_resize(ViewportWidth::new(300.0)), None);
        assert_eq!(tracker.width().px(), 800.0);
    }
}
