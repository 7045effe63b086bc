//! Scrolling to a section below the fixed header

use crate::anchor::{AnchorRegistry, AnchorSource};
use crate::section::SectionId;
use crate::units::RootFontSize;
use tracing::debug;

/// Height of the fixed header, in rem, subtracted from every scroll target
pub const DEFAULT_SCROLL_OFFSET_REM: f64 = 5.0;

/// Host-side scrolling primitives (the browser window, or a test double)
pub trait ScrollHost {
    fn root_font_size(&self) -> RootFontSize;

    /// Start a smooth scroll to `top` (document pixels). Fire-and-forget.
    fn smooth_scroll_to(&self, top: f64);
}

/// Computes scroll targets and hands them to the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCoordinator {
    offset_rem: f64,
}

impl ScrollCoordinator {
    pub fn new(offset_rem: f64) -> Self {
        Self { offset_rem }
    }

    pub fn offset_rem(&self) -> f64 {
        self.offset_rem
    }

    /// `position - offset` with the offset converted at `root`
    pub fn target_for(&self, position: f64, root: RootFontSize) -> f64 {
        position - root.rem_to_px(self.offset_rem)
    }

    /// Scroll to the anchor of `section`.
    ///
    /// Returns the target handed to the host, or `None` without scrolling if
    /// the section has no mounted anchor.
    pub fn scroll_to_section<H, A>(
        &self,
        host: &H,
        anchors: &AnchorRegistry<A>,
        section: SectionId,
    ) -> Option<f64>
    where
        H: ScrollHost + ?Sized,
        A: AnchorSource,
    {
        let Some(position) = anchors.position(section) else {
            debug!(%section, "anchor not mounted, skipping scroll");
            return None;
        };

        let target = self.target_for(position, host.root_font_size());
        debug!(%section, position, target, "smooth scroll");
        host.smooth_scroll_to(target);
        Some(target)
    }
}

impl Default for ScrollCoordinator {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_OFFSET_REM)
    }
}
