//! Site configuration
//!
//! Stored as JSON. Every field is optional in the file; missing ones take
//! the defaults below.

use crate::error::{CoreError, Result};
use crate::menu::{NavMenu, DEFAULT_MENU_THRESHOLD_REM};
use crate::motion::{ItemMotion, MotionConfig, Stagger};
use crate::scroll::{ScrollCoordinator, DEFAULT_SCROLL_OFFSET_REM};
use crate::units::{RootFontSize, DEFAULT_ROOT_FONT_SIZE_PX};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Longest accepted motion timing value, in seconds
pub const MAX_MOTION_SECS: f64 = 60.0;

/// Layout and motion settings for the site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Root font size assumed until the browser reports the real one
    pub root_font_size_px: f64,
    /// Viewport width below which the nav collapses, in rem
    pub menu_threshold_rem: f64,
    /// Fixed header height subtracted from scroll targets, in rem
    pub scroll_offset_rem: f64,
    pub motion: MotionConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root_font_size_px: DEFAULT_ROOT_FONT_SIZE_PX,
            menu_threshold_rem: DEFAULT_MENU_THRESHOLD_REM,
            scroll_offset_rem: DEFAULT_SCROLL_OFFSET_REM,
            motion: MotionConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str, origin: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| CoreError::json(origin, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content, &path.display().to_string())?;
        info!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    /// Load `path` if given, falling back to defaults on any error.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "using default site config");
                Self::default()
            }
        }
    }

    /// Reject sizes that would make the layout meaningless
    pub fn validate(&self) -> Result<()> {
        check_positive("root_font_size_px", self.root_font_size_px)?;
        check_positive("menu_threshold_rem", self.menu_threshold_rem)?;
        check_non_negative("scroll_offset_rem", self.scroll_offset_rem)?;

        let m = &self.motion;
        for (name, stagger) in [("header", &m.header), ("bar", &m.bar), ("dropdown", &m.dropdown)] {
            check_stagger(name, stagger)?;
        }
        for (name, item) in [
            ("bar_item", &m.bar_item),
            ("dropdown_item", &m.dropdown_item),
            ("signature", &m.signature),
        ] {
            check_item(name, item)?;
        }
        Ok(())
    }

    pub fn root_font_size(&self) -> RootFontSize {
        RootFontSize::new(self.root_font_size_px)
    }

    /// Menu threshold in pixels at `root`
    pub fn menu_threshold_px(&self, root: RootFontSize) -> f64 {
        root.rem_to_px(self.menu_threshold_rem)
    }

    pub fn scroll_coordinator(&self) -> ScrollCoordinator {
        ScrollCoordinator::new(self.scroll_offset_rem)
    }

    /// Build the navigation menu for the document's actual root font size
    pub fn nav_menu(&self, root: RootFontSize) -> NavMenu {
        NavMenu::new(self.menu_threshold_px(root), self.scroll_coordinator(), self.motion)
    }
}

fn check_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CoreError::invalid_config(format!(
            "{field} must be a positive number, got {value}"
        )))
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::invalid_config(format!(
            "{field} must be zero or positive, got {value}"
        )))
    }
}

fn check_seconds(field: &str, value: f64) -> Result<()> {
    check_non_negative(field, value)?;
    if value <= MAX_MOTION_SECS {
        Ok(())
    } else {
        Err(CoreError::invalid_config(format!(
            "{field} must be at most {MAX_MOTION_SECS} seconds, got {value}"
        )))
    }
}

fn check_stagger(name: &str, stagger: &Stagger) -> Result<()> {
    check_seconds(&format!("motion.{name}.stagger_children"), stagger.stagger_children)
}

fn check_item(name: &str, item: &ItemMotion) -> Result<()> {
    check_seconds(&format!("motion.{name}.delay"), item.delay)?;
    check_seconds(&format!("motion.{name}.duration"), item.duration)?;
    if !item.offset_x_vw.is_finite() {
        return Err(CoreError::invalid_config(format!(
            "motion.{name}.offset_x_vw must be finite"
        )));
    }
    Ok(())
}
