//! DOM-backed anchors and smooth scrolling

use crate::hooks::root_font_size;
use folio_core::{AnchorRegistry, AnchorSource, RootFontSize, ScrollHost};
use leptos::html;
use leptos::prelude::*;
use leptos::web_sys::{ScrollBehavior, ScrollToOptions};

/// Handle to a rendered `<section>`.
///
/// Wraps a `NodeRef`, so it never owns the element: once the section
/// unmounts it reports no position.
#[derive(Clone, Copy)]
pub struct SectionAnchor(NodeRef<html::Section>);

impl SectionAnchor {
    pub fn new() -> Self {
        Self(NodeRef::new())
    }

    /// Bind with `node_ref=anchor.node_ref()` on the section element
    pub fn node_ref(&self) -> NodeRef<html::Section> {
        self.0
    }
}

impl Default for SectionAnchor {
    fn default() -> Self {
        Self::new()
    }
}

impl AnchorSource for SectionAnchor {
    fn vertical_position(&self) -> Option<f64> {
        self.0.get_untracked().map(|el| f64::from(el.offset_top()))
    }
}

/// One anchor per navigable section
pub type SectionAnchors = AnchorRegistry<SectionAnchor>;

/// `window.scrollTo` with smooth behavior
pub struct BrowserScroll {
    /// Used when the computed root font size cannot be read
    pub fallback_root: RootFontSize,
}

impl ScrollHost for BrowserScroll {
    fn root_font_size(&self) -> RootFontSize {
        root_font_size(self.fallback_root)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
}
