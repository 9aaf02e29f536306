//! Expansion state owned by the coordinator
//!
//! One plain struct holds everything the animators and the layout policy are
//! a function of. The coordinator owns the only mutable copy; callers read it
//! back through [`crate::ExpansionCoordinator::state`].

/// Snapshot of the header's expansion inputs
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExpansionState {
    /// Coarse expansion: true once the fraction leaves 0.0
    pub expanded: bool,
    /// Quick settings disabled by policy
    pub qs_disabled: bool,
    /// Fine-grained shade expansion in `[0, 1]`
    pub expansion_fraction: f32,
    /// Lockscreen-to-shade transition fraction in `[0, 1]`
    pub keyguard_expansion_fraction: f32,
    /// Measured height of the top strip, in pixels; the translation span
    pub measured_header_height: f32,
}

/// Disable-policy bit flags delivered by the status bar
///
/// Only the quick settings bit is interpreted here; the rest of the word is
/// carried through untouched so callers can hand over the raw value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisableFlags(pub u32);

impl DisableFlags {
    pub const QUICK_SETTINGS: u32 = 1;

    pub fn quick_settings_disabled(self) -> bool {
        self.0 & Self::QUICK_SETTINGS != 0
    }
}
