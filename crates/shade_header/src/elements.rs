//! Owned visual state for the header's children
//!
//! The header never reaches into a live view tree. It owns one
//! [`HeaderElements`] store of plain per-element visual state; animator sets
//! write into it through [`PropertySink`] and the compositing layer reads it
//! back each frame. Elements missing from a given product configuration are
//! marked unavailable so the coordinator can skip their tracks instead of
//! animating nothing.

use shade_animation::PropertySink;

/// Every header child the coordinator animates or toggles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderTarget {
    /// Collapsed-strip clock
    Clock,
    /// Combined clock/date label shown only while collapsed
    ClockDateLabel,
    /// Expanded-row date label
    DateLabel,
    /// Container wrapping the expanded date row
    DateContainer,
    /// Container wrapping the privacy indicators
    PrivacyContainer,
    /// Privacy chip (mic/camera/location in use)
    PrivacyChip,
    /// Carrier name group shown in the expanded header
    CarrierGroup,
    /// Status icon container
    StatusIcons,
    /// Battery meter
    Battery,
    /// Quick-settings content container (the translation target)
    QsContainer,
    /// Separator between clock and icons when both share the strip
    ClockIconsSeparator,
    /// Top strip holding date and privacy views
    DatePrivacyStrip,
    /// Strip holding the status icon row
    StatusIconsStrip,
}

impl HeaderTarget {
    pub const COUNT: usize = 13;

    pub const ALL: [HeaderTarget; Self::COUNT] = [
        HeaderTarget::Clock,
        HeaderTarget::ClockDateLabel,
        HeaderTarget::DateLabel,
        HeaderTarget::DateContainer,
        HeaderTarget::PrivacyContainer,
        HeaderTarget::PrivacyChip,
        HeaderTarget::CarrierGroup,
        HeaderTarget::StatusIcons,
        HeaderTarget::Battery,
        HeaderTarget::QsContainer,
        HeaderTarget::ClockIconsSeparator,
        HeaderTarget::DatePrivacyStrip,
        HeaderTarget::StatusIconsStrip,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Properties an animator track can drive
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimatedProperty {
    Alpha,
    TranslationY,
}

/// A typed animation channel: one property on one target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PropertyAddress {
    pub target: HeaderTarget,
    pub property: AnimatedProperty,
}

impl PropertyAddress {
    pub const fn alpha(target: HeaderTarget) -> Self {
        Self {
            target,
            property: AnimatedProperty::Alpha,
        }
    }

    pub const fn translation_y(target: HeaderTarget) -> Self {
        Self {
            target,
            property: AnimatedProperty::TranslationY,
        }
    }
}

/// Element visibility; `Gone` releases the element's layout space
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Visible,
    Gone,
}

/// Visual state of a single element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementState {
    pub alpha: f32,
    pub translation_y: f32,
    pub scroll_y: f32,
    pub visibility: Visibility,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            translation_y: 0.0,
            scroll_y: 0.0,
            visibility: Visibility::Visible,
        }
    }
}

/// The store of element state the coordinator drives
pub struct HeaderElements {
    states: [ElementState; HeaderTarget::COUNT],
    available: [bool; HeaderTarget::COUNT],
    /// While true, the clock/date label must not switch its displayed text
    freeze_switching: bool,
}

impl HeaderElements {
    /// All elements present and at their resting state
    pub fn new() -> Self {
        Self {
            states: [ElementState::default(); HeaderTarget::COUNT],
            available: [true; HeaderTarget::COUNT],
            freeze_switching: false,
        }
    }

    pub fn state(&self, target: HeaderTarget) -> ElementState {
        self.states[target.index()]
    }

    pub fn alpha(&self, target: HeaderTarget) -> f32 {
        self.states[target.index()].alpha
    }

    pub fn set_alpha(&mut self, target: HeaderTarget, alpha: f32) {
        self.states[target.index()].alpha = alpha;
    }

    pub fn translation_y(&self, target: HeaderTarget) -> f32 {
        self.states[target.index()].translation_y
    }

    pub fn set_translation_y(&mut self, target: HeaderTarget, translation: f32) {
        self.states[target.index()].translation_y = translation;
    }

    pub fn scroll_y(&self, target: HeaderTarget) -> f32 {
        self.states[target.index()].scroll_y
    }

    pub fn set_scroll_y(&mut self, target: HeaderTarget, scroll: f32) {
        self.states[target.index()].scroll_y = scroll;
    }

    pub fn visibility(&self, target: HeaderTarget) -> Visibility {
        self.states[target.index()].visibility
    }

    pub fn set_visibility(&mut self, target: HeaderTarget, visibility: Visibility) {
        self.states[target.index()].visibility = visibility;
    }

    /// Whether this configuration includes `target` at all
    pub fn is_available(&self, target: HeaderTarget) -> bool {
        self.available[target.index()]
    }

    pub fn set_available(&mut self, target: HeaderTarget, available: bool) {
        self.available[target.index()] = available;
    }

    pub fn freeze_switching(&self) -> bool {
        self.freeze_switching
    }

    pub fn set_freeze_switching(&mut self, freeze: bool) {
        self.freeze_switching = freeze;
    }
}

impl Default for HeaderElements {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertySink<PropertyAddress> for HeaderElements {
    fn set_float(&mut self, channel: PropertyAddress, value: f32) {
        match channel.property {
            AnimatedProperty::Alpha => self.set_alpha(channel.target, value),
            AnimatedProperty::TranslationY => self.set_translation_y(channel.target, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_resting_state() {
        let elements = HeaderElements::new();
        for target in HeaderTarget::ALL {
            assert_eq!(elements.alpha(target), 1.0);
            assert_eq!(elements.translation_y(target), 0.0);
            assert_eq!(elements.visibility(target), Visibility::Visible);
            assert!(elements.is_available(target));
        }
        assert!(!elements.freeze_switching());
    }

    #[test]
    fn test_sink_routes_by_property() {
        let mut elements = HeaderElements::new();

        elements.set_float(PropertyAddress::alpha(HeaderTarget::DateLabel), 0.3);
        elements.set_float(
            PropertyAddress::translation_y(HeaderTarget::QsContainer),
            42.0,
        );

        assert_eq!(elements.alpha(HeaderTarget::DateLabel), 0.3);
        assert_eq!(elements.translation_y(HeaderTarget::QsContainer), 42.0);
        // Untouched neighbors keep their defaults
        assert_eq!(elements.alpha(HeaderTarget::QsContainer), 1.0);
        assert_eq!(elements.translation_y(HeaderTarget::DateLabel), 0.0);
    }

    #[test]
    fn test_availability_is_per_target() {
        let mut elements = HeaderElements::new();
        elements.set_available(HeaderTarget::CarrierGroup, false);

        assert!(!elements.is_available(HeaderTarget::CarrierGroup));
        assert!(elements.is_available(HeaderTarget::DateLabel));
    }

    #[test]
    fn test_every_target_has_a_distinct_slot() {
        let mut elements = HeaderElements::new();
        for (i, target) in HeaderTarget::ALL.iter().enumerate() {
            elements.set_alpha(*target, i as f32);
        }
        for (i, target) in HeaderTarget::ALL.iter().enumerate() {
            assert_eq!(elements.alpha(*target), i as f32);
        }
    }
}
