//! folio-core - Core library for folio
//!
//! Host-independent logic behind the portfolio site: the responsive
//! navigation menu, section anchors, scroll targets, motion tables, site
//! configuration and page content. Nothing here touches the DOM.

pub mod anchor;
pub mod config;
pub mod content;
pub mod error;
pub mod menu;
pub mod motion;
pub mod scroll;
pub mod section;
pub mod units;
pub mod viewport;

pub use anchor::{AnchorRegistry, AnchorSource};
pub use config::SiteConfig;
pub use content::Portfolio;
pub use error::CoreError;
pub use menu::{MenuEvent, MenuState, MenuView, NavEntry, NavMenu};
pub use motion::{MotionConfig, MotionPhase, Presence};
pub use scroll::{ScrollCoordinator, ScrollHost};
pub use section::SectionId;
pub use units::{rem_to_px, RootFontSize};
pub use viewport::{LayoutMode, ViewportWidth, WindowWidthTracker};
