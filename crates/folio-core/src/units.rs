//! CSS length conversion

use serde::{Deserialize, Serialize};

/// Browser default root font size in pixels
pub const DEFAULT_ROOT_FONT_SIZE_PX: f64 = 16.0;

/// Computed font size of the document root, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RootFontSize(f64);

impl RootFontSize {
    /// Falls back to the browser default for zero, negative or NaN input
    /// (e.g. `getComputedStyle` returned something unparseable).
    pub fn new(px: f64) -> Self {
        if px.is_finite() && px > 0.0 {
            Self(px)
        } else {
            Self(DEFAULT_ROOT_FONT_SIZE_PX)
        }
    }

    /// Parse a computed style value such as `"16px"`
    pub fn from_css(value: &str) -> Option<Self> {
        let number = value.trim().strip_suffix("px")?.trim();
        let px = number.parse::<f64>().ok()?;
        (px.is_finite() && px > 0.0).then_some(Self(px))
    }

    pub fn px(self) -> f64 {
        self.0
    }

    pub fn rem_to_px(self, rem: f64) -> f64 {
        rem * self.0
    }
}

impl Default for RootFontSize {
    fn default() -> Self {
        Self(DEFAULT_ROOT_FONT_SIZE_PX)
    }
}

/// Convert `rem` root-font units to pixels
pub fn rem_to_px(rem: f64, root: RootFontSize) -> f64 {
    root.rem_to_px(rem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rem_to_px_at_default_root() {
        let root = RootFontSize::default();
        assert_eq!(rem_to_px(5.0, root), 80.0);
        assert_eq!(rem_to_px(60.0, root), 960.0);
    }

    #[test]
    fn test_rem_to_px_scales_with_root() {
        assert_eq!(rem_to_px(5.0, RootFontSize::new(20.0)), 100.0);
    }

    #[test]
    fn test_invalid_root_falls_back_to_default() {
        assert_eq!(RootFontSize::new(0.0).px(), 16.0);
        assert_eq!(RootFontSize::new(-3.0).px(), 16.0);
        assert_eq!(RootFontSize::new(f64::NAN).px(), 16.0);
    }

    #[test]
    fn test_from_css() {
        assert_eq!(RootFontSize::from_css("18px"), Some(RootFontSize::new(18.0)));
        assert_eq!(RootFontSize::from_css(" 16.5px "), Some(RootFontSize::new(16.5)));
        assert_eq!(RootFontSize::from_css("1em"), None);
        assert_eq!(RootFontSize::from_css("0px"), None);
    }
}
