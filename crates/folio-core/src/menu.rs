//! Responsive navigation menu
//!
//! The menu is a two-state machine (`Closed`/`Open`) layered over a
//! width-derived layout. The open state only matters in the dropdown
//! layout; in the bar layout every entry is always shown.
//!
//! # Transitions
//!
//! | state  | event           | next   | effect          |
//! |--------|-----------------|--------|-----------------|
//! | Closed | `IconClicked`   | Open   | none            |
//! | Open   | `IconClicked`   | Closed | none            |
//! | any    | `EntrySelected` | Closed | scroll to entry |
//!
//! Resizing never changes the state: a dropdown left open while the window
//! is wide is still open when it narrows again.

use crate::anchor::{AnchorRegistry, AnchorSource};
use crate::motion::MotionConfig;
use crate::scroll::{ScrollCoordinator, ScrollHost};
use crate::section::SectionId;
use crate::viewport::{LayoutMode, ViewportWidth};
use tracing::debug;

/// Width below which the bar collapses into a dropdown, in rem
pub const DEFAULT_MENU_THRESHOLD_REM: f64 = 60.0;

/// Open/closed state of the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User input the menu reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Click on the menu icon
    IconClicked,
    /// Click on a nav entry
    EntrySelected(SectionId),
}

/// Side effect requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEffect {
    None,
    ScrollTo(SectionId),
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn transition(self, event: MenuEvent) -> (MenuState, MenuEffect) {
        match event {
            MenuEvent::IconClicked => (self.toggled(), MenuEffect::None),
            MenuEvent::EntrySelected(section) => {
                (MenuState::Closed, MenuEffect::ScrollTo(section))
            }
        }
    }
}

/// One rendered nav entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub section: SectionId,
    /// Position within the rendered list, used for stagger delays
    pub index: usize,
}

impl NavEntry {
    pub fn label(&self) -> &'static str {
        self.section.label()
    }
}

/// What the header should render for a given width and state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuView {
    /// Horizontal row of entries, no icon
    Bar { entries: Vec<NavEntry> },
    /// Menu icon plus a column of entries, empty while closed
    Dropdown { open: bool, entries: Vec<NavEntry> },
}

impl MenuView {
    pub fn entries(&self) -> &[NavEntry] {
        match self {
            MenuView::Bar { entries } | MenuView::Dropdown { entries, .. } => entries,
        }
    }

    pub fn shows_icon(&self) -> bool {
        matches!(self, MenuView::Dropdown { .. })
    }

    pub fn layout(&self) -> LayoutMode {
        match self {
            MenuView::Bar { .. } => LayoutMode::Bar,
            MenuView::Dropdown { .. } => LayoutMode::Dropdown,
        }
    }
}

/// Every entry in nav order
pub fn nav_entries() -> Vec<NavEntry> {
    SectionId::NAV_ORDER
        .into_iter()
        .enumerate()
        .map(|(index, section)| NavEntry { section, index })
        .collect()
}

/// Immutable menu settings plus the logic tying state, layout and
/// scrolling together. The state itself lives with the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavMenu {
    threshold_px: f64,
    scroll: ScrollCoordinator,
    motion: MotionConfig,
}

impl NavMenu {
    pub fn new(threshold_px: f64, scroll: ScrollCoordinator, motion: MotionConfig) -> Self {
        Self {
            threshold_px,
            scroll,
            motion,
        }
    }

    pub fn threshold_px(&self) -> f64 {
        self.threshold_px
    }

    pub fn motion(&self) -> &MotionConfig {
        &self.motion
    }

    pub fn scroll(&self) -> &ScrollCoordinator {
        &self.scroll
    }

    pub fn layout(&self, width: ViewportWidth) -> LayoutMode {
        LayoutMode::for_width(width, self.threshold_px)
    }

    pub fn view(&self, width: ViewportWidth, state: MenuState) -> MenuView {
        match self.layout(width) {
            LayoutMode::Bar => MenuView::Bar {
                entries: nav_entries(),
            },
            LayoutMode::Dropdown => MenuView::Dropdown {
                open: state.is_open(),
                entries: if state.is_open() {
                    nav_entries()
                } else {
                    Vec::new()
                },
            },
        }
    }

    /// Apply `event` to `state`, performing any scroll it requests.
    pub fn dispatch<H, A>(
        &self,
        state: MenuState,
        event: MenuEvent,
        host: &H,
        anchors: &AnchorRegistry<A>,
    ) -> MenuState
    where
        H: ScrollHost + ?Sized,
        A: AnchorSource,
    {
        let (next, effect) = state.transition(event);
        debug!(?state, ?event, ?next, "menu transition");

        if let MenuEffect::ScrollTo(section) = effect {
            self.scroll.scroll_to_section(host, anchors, section);
        }
        next
    }
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new(
            crate::units::RootFontSize::default().rem_to_px(DEFAULT_MENU_THRESHOLD_REM),
            ScrollCoordinator::default(),
            MotionConfig::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_toggles() {
        let (open, effect) = MenuState::Closed.transition(MenuEvent::IconClicked);
        assert_eq!(open, MenuState::Open);
        assert_eq!(effect, MenuEffect::None);

        let (closed, _) = open.transition(MenuEvent::IconClicked);
        assert_eq!(closed, MenuState::Closed);
    }

    #[test]
    fn test_selection_always_closes() {
        for state in [MenuState::Open, MenuState::Closed] {
            let (next, effect) = state.transition(MenuEvent::EntrySelected(SectionId::About));
            assert_eq!(next, MenuState::Closed);
            assert_eq!(effect, MenuEffect::ScrollTo(SectionId::About));
        }
    }

    #[test]
    fn test_default_threshold_is_sixty_rem() {
        assert_eq!(NavMenu::default().threshold_px(), 960.0);
    }

    #[test]
    fn test_closed_dropdown_has_no_entries() {
        let view = NavMenu::default().view(ViewportWidth::new(400.0), MenuState::Closed);
        assert_eq!(
            view,
            MenuView::Dropdown {
                open: false,
                entries: Vec::new()
            }
        );
        assert!(view.shows_icon());
    }

    #[test]
    fn test_entry_indices_follow_nav_order() {
        let view = NavMenu::default().view(ViewportWidth::new(1920.0), MenuState::Closed);
        let indices: Vec<_> = view.entries().iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }
}
