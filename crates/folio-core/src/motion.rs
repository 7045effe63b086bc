//! Entrance/exit motion parameters
//!
//! The browser does the animating: components attach the CSS custom
//! properties produced here plus a `data-motion` phase attribute, and the
//! stylesheet keyframes read them. Nothing in here keeps time.

use serde::{Deserialize, Serialize};

/// Named animation state of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionPhase {
    Initial,
    Animate,
    Exit,
}

impl MotionPhase {
    /// Value of the `data-motion` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            MotionPhase::Initial => "initial",
            MotionPhase::Animate => "animate",
            MotionPhase::Exit => "exit",
        }
    }
}

/// Order in which siblings start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaggerDirection {
    /// First child starts first
    Forward,
    /// Last child starts first
    Reverse,
}

/// Stagger applied to the children of one container
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stagger {
    /// Seconds between consecutive children
    pub stagger_children: f64,
    pub direction: StaggerDirection,
    pub exit_direction: StaggerDirection,
}

impl Stagger {
    pub const fn new(stagger_children: f64, direction: StaggerDirection) -> Self {
        Self {
            stagger_children,
            direction,
            exit_direction: direction,
        }
    }

    pub const fn with_exit(mut self, exit_direction: StaggerDirection) -> Self {
        self.exit_direction = exit_direction;
        self
    }

    /// Start offset, in seconds, of child `index` out of `count` for `phase`
    pub fn delay_for(&self, index: usize, count: usize, phase: MotionPhase) -> f64 {
        if count == 0 {
            return 0.0;
        }
        let index = index.min(count - 1);
        let direction = match phase {
            MotionPhase::Initial => return 0.0,
            MotionPhase::Animate => self.direction,
            MotionPhase::Exit => self.exit_direction,
        };
        let slot = match direction {
            StaggerDirection::Forward => index,
            StaggerDirection::Reverse => count - 1 - index,
        };
        slot as f64 * self.stagger_children
    }

    /// Time from the first child starting to the last child starting
    pub fn span(&self, count: usize) -> f64 {
        count.saturating_sub(1) as f64 * self.stagger_children
    }
}

impl Default for Stagger {
    fn default() -> Self {
        Self::new(0.1, StaggerDirection::Forward)
    }
}

/// Slide-and-fade parameters for a single element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemMotion {
    /// Horizontal start (and exit) offset, in viewport-width units
    pub offset_x_vw: f64,
    /// Extra delay before this element starts, in seconds
    pub delay: f64,
    pub duration: f64,
}

impl ItemMotion {
    pub const fn new(offset_x_vw: f64, delay: f64, duration: f64) -> Self {
        Self {
            offset_x_vw,
            delay,
            duration,
        }
    }

    /// Inline style carrying this element's timing, given its stagger delay
    pub fn style(&self, stagger_delay: f64) -> String {
        format!(
            "--motion-x: {}vw; --motion-delay: {}s; --motion-duration: {}s;",
            round_ms(self.offset_x_vw),
            round_ms(self.delay + stagger_delay),
            round_ms(self.duration),
        )
    }
}

impl Default for ItemMotion {
    fn default() -> Self {
        Self::new(-50.0, 0.0, 1.0)
    }
}

fn round_ms(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// All motion tables used by the header, passed in rather than shared.
///
/// A table given only partially in JSON keeps that table's own defaults for
/// the missing fields, so the dropdown exit stays reversed unless overridden.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "MotionOverrides")]
pub struct MotionConfig {
    /// Children of the header (nav block, signature block)
    pub header: Stagger,
    /// Entries of the horizontal bar
    pub bar: Stagger,
    pub bar_item: ItemMotion,
    /// Entries of the dropdown; exit runs in reverse
    pub dropdown: Stagger,
    pub dropdown_item: ItemMotion,
    /// Portrait and name
    pub signature: ItemMotion,
}

impl MotionConfig {
    /// Style for entry `index` of `count` in the horizontal bar
    pub fn bar_item_style(&self, index: usize, count: usize) -> String {
        let delay = self.bar.delay_for(index, count, MotionPhase::Animate);
        self.bar_item.style(delay)
    }

    /// Style for entry `index` of `count` in the dropdown during `phase`
    pub fn dropdown_item_style(&self, index: usize, count: usize, phase: MotionPhase) -> String {
        let delay = self.dropdown.delay_for(index, count, phase);
        self.dropdown_item.style(delay)
    }

    /// Style for header child `index` of `count`, using `item` timing
    pub fn header_child_style(&self, item: &ItemMotion, index: usize, count: usize) -> String {
        let delay = self.header.delay_for(index, count, MotionPhase::Animate);
        item.style(delay)
    }

    /// Seconds until the last of `count` dropdown entries finishes exiting
    pub fn dropdown_exit_duration(&self, count: usize) -> f64 {
        self.dropdown.span(count) + self.dropdown_item.delay + self.dropdown_item.duration
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            header: Stagger::new(0.5, StaggerDirection::Reverse),
            bar: Stagger::new(0.5, StaggerDirection::Reverse),
            bar_item: ItemMotion::new(-50.0, 0.0, 1.0),
            dropdown: Stagger::new(0.1, StaggerDirection::Forward)
                .with_exit(StaggerDirection::Reverse),
            dropdown_item: ItemMotion::new(-10.0, 0.0, 0.5),
            signature: ItemMotion::new(-100.0, 0.0, 1.0),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StaggerOverride {
    stagger_children: Option<f64>,
    direction: Option<StaggerDirection>,
    exit_direction: Option<StaggerDirection>,
}

impl StaggerOverride {
    fn apply(self, base: Stagger) -> Stagger {
        Stagger {
            stagger_children: self.stagger_children.unwrap_or(base.stagger_children),
            direction: self.direction.unwrap_or(base.direction),
            exit_direction: self.exit_direction.unwrap_or(base.exit_direction),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ItemOverride {
    offset_x_vw: Option<f64>,
    delay: Option<f64>,
    duration: Option<f64>,
}

impl ItemOverride {
    fn apply(self, base: ItemMotion) -> ItemMotion {
        ItemMotion {
            offset_x_vw: self.offset_x_vw.unwrap_or(base.offset_x_vw),
            delay: self.delay.unwrap_or(base.delay),
            duration: self.duration.unwrap_or(base.duration),
        }
    }
}

/// Wire form of `MotionConfig`: every table and field optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MotionOverrides {
    header: StaggerOverride,
    bar: StaggerOverride,
    bar_item: ItemOverride,
    dropdown: StaggerOverride,
    dropdown_item: ItemOverride,
    signature: ItemOverride,
}

impl From<MotionOverrides> for MotionConfig {
    fn from(overrides: MotionOverrides) -> Self {
        let base = MotionConfig::default();
        Self {
            header: overrides.header.apply(base.header),
            bar: overrides.bar.apply(base.bar),
            bar_item: overrides.bar_item.apply(base.bar_item),
            dropdown: overrides.dropdown.apply(base.dropdown),
            dropdown_item: overrides.dropdown_item.apply(base.dropdown_item),
            signature: overrides.signature.apply(base.signature),
        }
    }
}

/// Whether an animated list is mounted, and in which phase.
///
/// Closing keeps the list mounted in `Exiting` until the exit animation has
/// had time to run; only then does it become `Hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    #[default]
    Hidden,
    Entering,
    Exiting,
}

impl Presence {
    /// Follow the open/closed state of the owning menu
    pub fn follow(self, open: bool) -> Self {
        match (self, open) {
            (_, true) => Presence::Entering,
            (Presence::Entering, false) => Presence::Exiting,
            (other, false) => other,
        }
    }

    /// The exit animation has run its course
    pub fn exit_finished(self) -> Self {
        match self {
            Presence::Exiting => Presence::Hidden,
            other => other,
        }
    }

    pub fn is_mounted(self) -> bool {
        !matches!(self, Presence::Hidden)
    }

    pub fn phase(self) -> MotionPhase {
        match self {
            Presence::Hidden => MotionPhase::Initial,
            Presence::Entering => MotionPhase::Animate,
            Presence::Exiting => MotionPhase::Exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_stagger() {
        let stagger = Stagger::new(0.1, StaggerDirection::Forward);
        let delays: Vec<_> = (0..4)
            .map(|i| round_ms(stagger.delay_for(i, 4, MotionPhase::Animate)))
            .collect();
        assert_eq!(delays, vec![0.0, 0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_dropdown_exit_runs_in_reverse() {
        let config = MotionConfig::default();
        let enter: Vec<_> = (0..4)
            .map(|i| round_ms(config.dropdown.delay_for(i, 4, MotionPhase::Animate)))
            .collect();
        let exit: Vec<_> = (0..4)
            .map(|i| round_ms(config.dropdown.delay_for(i, 4, MotionPhase::Exit)))
            .collect();

        let mut reversed = enter.clone();
        reversed.reverse();
        assert_eq!(exit, reversed);
    }

    #[test]
    fn test_initial_phase_has_no_delay() {
        let stagger = Stagger::new(0.5, StaggerDirection::Reverse);
        assert_eq!(stagger.delay_for(0, 2, MotionPhase::Initial), 0.0);
        assert_eq!(stagger.delay_for(0, 2, MotionPhase::Animate), 0.5);
    }

    #[test]
    fn test_empty_container() {
        let stagger = Stagger::default();
        assert_eq!(stagger.delay_for(3, 0, MotionPhase::Animate), 0.0);
        assert_eq!(stagger.span(0), 0.0);
    }

    #[test]
    fn test_item_style_rounds_to_milliseconds() {
        let item = ItemMotion::new(-10.0, 0.0, 0.5);
        assert_eq!(
            item.style(0.1 + 0.2),
            "--motion-x: -10vw; --motion-delay: 0.3s; --motion-duration: 0.5s;"
        );
    }

    #[test]
    fn test_dropdown_exit_duration() {
        let config = MotionConfig::default();
        assert_eq!(round_ms(config.dropdown_exit_duration(4)), 0.8);
    }

    #[test]
    fn test_presence_keeps_list_mounted_while_exiting() {
        let presence = Presence::Hidden.follow(true);
        assert_eq!(presence, Presence::Entering);

        let presence = presence.follow(false);
        assert_eq!(presence, Presence::Exiting);
        assert!(presence.is_mounted());
        assert_eq!(presence.phase(), MotionPhase::Exit);

        assert_eq!(presence.exit_finished(), Presence::Hidden);
    }

    #[test]
    fn test_presence_reopen_during_exit() {
        let presence = Presence::Exiting.follow(true);
        assert_eq!(presence, Presence::Entering);
        // A stale exit timer must not hide a reopened list
        assert_eq!(presence.exit_finished(), Presence::Entering);
    }

    #[test]
    fn test_presence_close_when_hidden() {
        assert_eq!(Presence::Hidden.follow(false), Presence::Hidden);
    }

    #[test]
    fn test_partial_table_keeps_its_own_defaults() {
        let json = r#"{ "dropdown": { "stagger_children": 0.2 }, "bar": { "direction": "forward" } }"#;
        let config: MotionConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.dropdown.stagger_children, 0.2);
        assert_eq!(config.dropdown.exit_direction, StaggerDirection::Reverse);
        let exit: Vec<_> = (0..4)
            .map(|i| round_ms(config.dropdown.delay_for(i, 4, MotionPhase::Exit)))
            .collect();
        assert_eq!(exit, vec![0.6, 0.4, 0.2, 0.0]);

        assert_eq!(config.bar.direction, StaggerDirection::Forward);
        assert_eq!(config.bar.stagger_children, 0.5);
        assert_eq!(config.header, MotionConfig::default().header);
    }

    #[test]
    fn test_partial_item_keeps_its_own_defaults() {
        let json = r#"{ "signature": { "duration": 2 } }"#;
        let config: MotionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.signature, ItemMotion::new(-100.0, 0.0, 2.0));
    }
}
