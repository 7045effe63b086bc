//! Section anchors
//!
//! An anchor is a non-owning handle to where a section sits on the page. The
//! registry never keeps a section alive: when a section is not mounted its
//! anchor simply reports no position.

use crate::section::SectionId;
use std::collections::BTreeMap;

/// Something that can report the vertical document offset of a section
pub trait AnchorSource {
    /// Offset from the top of the document in CSS pixels, or `None` while
    /// the section is not mounted.
    fn vertical_position(&self) -> Option<f64>;
}

impl<A: AnchorSource + ?Sized> AnchorSource for &A {
    fn vertical_position(&self) -> Option<f64> {
        (**self).vertical_position()
    }
}

/// Anchors keyed by section
#[derive(Debug, Clone)]
pub struct AnchorRegistry<A> {
    anchors: BTreeMap<SectionId, A>,
}

impl<A> AnchorRegistry<A> {
    pub fn new() -> Self {
        Self {
            anchors: BTreeMap::new(),
        }
    }

    /// Build a registry with one anchor per navigable section
    pub fn for_sections(mut make: impl FnMut(SectionId) -> A) -> Self {
        let anchors = SectionId::NAV_ORDER
            .into_iter()
            .map(|section| (section, make(section)))
            .collect();
        Self { anchors }
    }

    /// Register (or replace) the anchor for `section`
    pub fn register(&mut self, section: SectionId, anchor: A) -> Option<A> {
        self.anchors.insert(section, anchor)
    }

    pub fn unregister(&mut self, section: SectionId) -> Option<A> {
        self.anchors.remove(&section)
    }

    pub fn get(&self, section: SectionId) -> Option<&A> {
        self.anchors.get(&section)
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.anchors.keys().copied()
    }
}

impl<A: AnchorSource> AnchorRegistry<A> {
    /// Position of `section`, if it is registered and mounted
    pub fn position(&self, section: SectionId) -> Option<f64> {
        self.get(section)?.vertical_position()
    }
}

impl<A> Default for AnchorRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}
