//! Expansion coordinator
//!
//! [`ExpansionCoordinator`] owns the header's animator sets and drives them
//! from one scrub fraction. Every input frame maps the fraction onto element
//! alphas and the quick-settings translation; rest-point crossings apply the
//! discrete side effects (label visibility, text-switch freezing, signal-icon
//! suppression) exactly once per crossing.
//!
//! All collaborators arrive through the constructor. The coordinator is
//! single-threaded and never calls back into itself: boundary work happens
//! after an animator returns, on plain owned state.
//!
//! # Example
//!
//! ```
//! use shade_header::{ExpansionCoordinator, HeaderConfig, HeaderTarget, NullPanel};
//!
//! let mut header =
//!     ExpansionCoordinator::new(Box::new(NullPanel), HeaderConfig::default()).unwrap();
//! header.set_measured_height(120.0);
//!
//! header.set_expansion_fraction(0.5);
//! assert_eq!(header.elements().alpha(HeaderTarget::ClockDateLabel), 0.0);
//!
//! header.set_expansion_fraction(1.0);
//! assert_eq!(header.elements().alpha(HeaderTarget::DateLabel), 1.0);
//! assert_eq!(header.elements().translation_y(HeaderTarget::QsContainer), 120.0);
//! ```

use shade_animation::{BoundaryEvent, Easing, ProgressAnimator};
use tracing::{debug, error, warn};

use crate::elements::{HeaderElements, HeaderTarget, PropertyAddress, Visibility};
use crate::error::{HeaderError, Result};
use crate::icons::{IconPolicy, StatusSlot};
use crate::layout::{compute_directives, LayoutDirectives, LayoutMode, Orientation};
use crate::state::{DisableFlags, ExpansionState};
use crate::tuner::{parse_switch, SettingKey, SettingValue, Tunable};

/// Cross-fade tracks for the expand/collapse alpha animator: the expanded
/// date and carriers fade in over the back half while the collapsed
/// clock/date label fades out over the front half
const CROSS_FADE: [(HeaderTarget, &[f32]); 3] = [
    (HeaderTarget::DateLabel, &[0.0, 0.0, 1.0]),
    (HeaderTarget::ClockDateLabel, &[1.0, 0.0, 0.0]),
    (HeaderTarget::CarrierGroup, &[0.0, 1.0]),
];

/// Hooks into the embedded quick-panel controller
pub trait QuickPanelHandle {
    fn set_expanded(&mut self, expanded: bool);
    fn set_disabled_by_policy(&mut self, disabled: bool);
    fn set_listening(&mut self, listening: bool);
}

/// Panel handle that ignores every call, for embedders without a panel
pub struct NullPanel;

impl QuickPanelHandle for NullPanel {
    fn set_expanded(&mut self, _expanded: bool) {}
    fn set_disabled_by_policy(&mut self, _disabled: bool) {}
    fn set_listening(&mut self, _listening: bool) {}
}

/// Construction-time configuration for the coordinator
#[derive(Clone, Debug)]
pub struct HeaderConfig {
    /// Start in combined-header mode (both animator sets disabled)
    pub combined_header: bool,
    /// Slots suppressed while carrier text needs the room
    pub rssi_slots: Vec<StatusSlot>,
    /// Curve for the quick-settings translation
    pub path_curve: Easing,
    /// Show the battery time estimate instead of the plain percentage
    pub show_battery_estimate: bool,
    /// Show the clock/icons separator while collapsed at rest
    pub show_clock_icons_separator: bool,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            combined_header: false,
            rssi_slots: StatusSlot::RSSI.to_vec(),
            path_curve: Easing::decelerate(),
            show_battery_estimate: false,
            show_clock_icons_separator: false,
        }
    }
}

impl HeaderConfig {
    pub fn with_combined_header(mut self, combined: bool) -> Self {
        self.combined_header = combined;
        self
    }

    pub fn with_rssi_slots(mut self, slots: Vec<StatusSlot>) -> Self {
        self.rssi_slots = slots;
        self
    }

    pub fn with_path_curve(mut self, curve: Easing) -> Self {
        self.path_curve = curve;
        self
    }

    pub fn with_battery_estimate(mut self, estimate: bool) -> Self {
        self.show_battery_estimate = estimate;
        self
    }

    pub fn with_clock_icons_separator(mut self, separator: bool) -> Self {
        self.show_clock_icons_separator = separator;
        self
    }
}

/// Drives the header's animator sets from the shade expansion fraction
pub struct ExpansionCoordinator {
    elements: HeaderElements,
    icons: IconPolicy,
    state: ExpansionState,
    layout_mode: LayoutMode,
    directives: LayoutDirectives,
    panel: Box<dyn QuickPanelHandle>,
    config: HeaderConfig,

    /// Cross-fade between collapsed and expanded chrome; `None` in combined
    /// mode or after a build failure
    alpha_animator: Option<ProgressAnimator<PropertyAddress>>,
    /// Quick-settings translation over the measured header height
    translation_animator: Option<ProgressAnimator<PropertyAddress>>,
    /// Icon/battery fade driven by the keyguard fraction while the privacy
    /// chip is visible; built once and kept
    icons_animator: ProgressAnimator<PropertyAddress>,

    chip_visible: bool,
    is_single_carrier: bool,
    show_clock: bool,
    show_date: bool,
    listening: bool,
    /// Guards against re-entrant evaluation from boundary side effects
    evaluating: bool,
}

impl ExpansionCoordinator {
    pub fn new(panel: Box<dyn QuickPanelHandle>, config: HeaderConfig) -> Result<Self> {
        let icons_animator = ProgressAnimator::builder()
            .add_float(PropertyAddress::alpha(HeaderTarget::StatusIcons), &[0.0, 1.0])
            .add_float(PropertyAddress::alpha(HeaderTarget::Battery), &[0.0, 1.0])
            .build()?;

        let layout_mode = LayoutMode {
            orientation: Orientation::Portrait,
            is_large_screen: false,
            combined_header: config.combined_header,
        };

        let mut coordinator = Self {
            elements: HeaderElements::new(),
            icons: IconPolicy::new(),
            state: ExpansionState::default(),
            layout_mode,
            directives: compute_directives(layout_mode, false, config.show_battery_estimate),
            panel,
            config,
            alpha_animator: None,
            translation_animator: None,
            icons_animator,
            chip_visible: false,
            is_single_carrier: false,
            show_clock: true,
            show_date: true,
            listening: false,
            evaluating: false,
        };
        coordinator.update_animators();
        Ok(coordinator)
    }

    // =========================================================================
    // Expansion inputs
    // =========================================================================

    /// Scrub both animator sets to `fraction`, clamped into `[0, 1]`
    ///
    /// The coarse expanded flag flips when the fraction leaves or returns to
    /// zero and is forwarded to the panel once per flip. Fine-grained changes
    /// always re-evaluate the tracks; an unchanged fraction re-applies values
    /// but fires no boundary side effects.
    pub fn set_expansion_fraction(&mut self, fraction: f32) {
        debug_assert!(!self.evaluating, "re-entrant expansion evaluation");
        self.evaluating = true;

        let clamped = fraction.clamp(0.0, 1.0);
        if clamped != fraction {
            debug!(fraction, "expansion fraction out of range, clamping");
        }

        let expanded = clamped > 0.0;
        if expanded != self.state.expanded {
            self.state.expanded = expanded;
            self.panel.set_expanded(expanded);
        }
        self.state.expansion_fraction = clamped;

        self.drive_translation(clamped);
        self.drive_alpha(clamped);

        self.evaluating = false;
    }

    /// Record the lockscreen-to-shade fraction; while the privacy chip is
    /// visible it drives the icon/battery fade
    pub fn set_keyguard_expansion_fraction(&mut self, fraction: f32) {
        let fraction = fraction.clamp(0.0, 1.0);
        self.state.keyguard_expansion_fraction = fraction;
        if self.chip_visible {
            self.icons_animator.set_position(fraction, &mut self.elements);
        }
    }

    /// React to the privacy chip showing or hiding
    ///
    /// While the chip is visible the icon and battery alphas follow the
    /// keyguard fraction; when it hides, both snap back to fully opaque no
    /// matter where the animator last left them.
    pub fn set_chip_visible(&mut self, visible: bool) {
        self.chip_visible = visible;
        self.elements.set_visibility(
            HeaderTarget::PrivacyChip,
            if visible { Visibility::Visible } else { Visibility::Gone },
        );

        if visible {
            let fraction = self.state.keyguard_expansion_fraction;
            self.icons_animator.set_position(fraction, &mut self.elements);
        } else {
            self.elements.set_alpha(HeaderTarget::StatusIcons, 1.0);
            self.elements.set_alpha(HeaderTarget::Battery, 1.0);
        }
    }

    /// New measured height for the top strip; rebuilds the translation span
    /// when it actually changed
    pub fn set_measured_height(&mut self, height: f32) {
        if (height - self.state.measured_header_height).abs() < f32::EPSILON {
            return;
        }
        self.state.measured_header_height = height;
        self.update_animators();
    }

    /// Single-carrier displays never hide signal icons for carrier-text room
    pub fn set_is_single_carrier(&mut self, single: bool) {
        self.is_single_carrier = single;
        if single {
            self.icons.remove_ignored_slots(&self.config.rssi_slots);
        }
        self.update_alpha_animator();
    }

    /// Hand the status rows over to the combined large-screen header (or take
    /// them back); both animator sets are disabled while combined
    pub fn set_combined_header(&mut self, combined: bool) {
        if combined == self.layout_mode.combined_header {
            return;
        }
        self.layout_mode.combined_header = combined;
        self.update_animators();
        self.update_layout();
    }

    /// Swap the translation curve, rebuilding the translation animator
    pub fn set_path_curve(&mut self, curve: Easing) {
        if curve == self.config.path_curve {
            return;
        }
        self.config.path_curve = curve;
        self.update_translation_animator();
    }

    // =========================================================================
    // Policy and configuration inputs
    // =========================================================================

    /// Apply a disable-policy word; only the quick settings bit matters here
    pub fn disable(&mut self, flags: DisableFlags) {
        let disabled = flags.quick_settings_disabled();
        if disabled == self.state.qs_disabled {
            return;
        }
        self.state.qs_disabled = disabled;
        self.panel.set_disabled_by_policy(disabled);
        self.update_layout();
    }

    /// Recompute layout directives for a new display configuration; animator
    /// state is untouched
    pub fn configuration_changed(&mut self, orientation: Orientation, is_large_screen: bool) {
        self.layout_mode.orientation = orientation;
        self.layout_mode.is_large_screen = is_large_screen;
        self.update_layout();
    }

    /// Edge-filtered listening toggle, forwarded to the panel
    pub fn set_listening(&mut self, listening: bool) {
        if listening == self.listening {
            return;
        }
        self.listening = listening;
        self.panel.set_listening(listening);
    }

    /// Scroll both status strips while the shade is fully expanded
    pub fn set_expanded_scroll_amount(&mut self, scroll_y: f32) {
        self.elements
            .set_scroll_y(HeaderTarget::StatusIconsStrip, scroll_y);
        self.elements
            .set_scroll_y(HeaderTarget::DatePrivacyStrip, scroll_y);
    }

    /// Mark `target` absent from this configuration; its tracks are skipped
    /// on the next rebuild, which runs immediately
    pub fn set_target_available(&mut self, target: HeaderTarget, available: bool) {
        if self.elements.is_available(target) == available {
            return;
        }
        self.elements.set_available(target, available);
        self.update_animators();
    }

    // =========================================================================
    // Read-only views
    // =========================================================================

    pub fn elements(&self) -> &HeaderElements {
        &self.elements
    }

    pub fn icons(&self) -> &IconPolicy {
        &self.icons
    }

    pub fn state(&self) -> &ExpansionState {
        &self.state
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    pub fn directives(&self) -> &LayoutDirectives {
        &self.directives
    }

    pub fn is_chip_visible(&self) -> bool {
        self.chip_visible
    }

    pub fn is_single_carrier(&self) -> bool {
        self.is_single_carrier
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Translation span the panel uses to offset its own content
    pub fn offset_translation(&self) -> f32 {
        self.state.measured_header_height
    }

    // =========================================================================
    // Animator plumbing
    // =========================================================================

    fn update_animators(&mut self) {
        self.update_alpha_animator();
        self.update_translation_animator();
    }

    /// Rebuild the cross-fade animator and re-apply the current fraction
    fn update_alpha_animator(&mut self) {
        if self.layout_mode.combined_header {
            if self.alpha_animator.take().is_some() {
                for (target, _) in CROSS_FADE {
                    self.elements.set_alpha(target, 1.0);
                }
            }
            return;
        }

        let mut builder = ProgressAnimator::builder();
        for (target, values) in CROSS_FADE {
            if self.elements.is_available(target) {
                builder = builder.add_float(PropertyAddress::alpha(target), values);
            } else {
                warn!(
                    error = %HeaderError::UnboundTarget(target),
                    "skipping cross-fade track"
                );
            }
        }

        self.alpha_animator = match builder.build() {
            Ok(animator) => Some(animator),
            Err(err) => {
                error!(error = %err, "failed to build cross-fade animator");
                None
            }
        };
        self.drive_alpha(self.state.expansion_fraction);
    }

    /// Rebuild the translation animator over the measured height and
    /// re-apply the current fraction
    fn update_translation_animator(&mut self) {
        if self.layout_mode.combined_header {
            if self.translation_animator.take().is_some() {
                self.elements.set_translation_y(HeaderTarget::QsContainer, 0.0);
            }
            return;
        }

        let offset = self.state.measured_header_height;
        let builder = ProgressAnimator::builder()
            .easing(self.config.path_curve)
            .add_float(
                PropertyAddress::translation_y(HeaderTarget::QsContainer),
                &[0.0, offset],
            );
        self.translation_animator = match builder.build() {
            Ok(animator) => Some(animator),
            Err(err) => {
                error!(error = %err, "failed to build translation animator");
                None
            }
        };
        self.drive_translation(self.state.expansion_fraction);
    }

    fn drive_alpha(&mut self, fraction: f32) {
        let event = match self.alpha_animator.as_mut() {
            Some(animator) => animator.set_position(fraction, &mut self.elements),
            None => None,
        };
        if let Some(event) = event {
            self.handle_boundary(event);
        }
    }

    fn drive_translation(&mut self, fraction: f32) {
        if let Some(animator) = self.translation_animator.as_mut() {
            animator.set_position(fraction, &mut self.elements);
        }
    }

    /// Discrete side effects of crossing a rest point
    fn handle_boundary(&mut self, event: BoundaryEvent) {
        match event {
            BoundaryEvent::Started => {
                if self.show_date {
                    self.elements
                        .set_visibility(HeaderTarget::ClockDateLabel, Visibility::Visible);
                    self.elements.set_freeze_switching(true);
                }
                self.set_separator_visible(false);
                if !self.is_single_carrier {
                    self.icons.add_ignored_slots(&self.config.rssi_slots);
                }
            }
            BoundaryEvent::AtEnd => {
                if !self.is_single_carrier {
                    self.icons.add_ignored_slots(&self.config.rssi_slots);
                }
                // Gone, not faded: the carrier names take the reclaimed space
                self.elements
                    .set_visibility(HeaderTarget::ClockDateLabel, Visibility::Gone);
            }
            BoundaryEvent::AtStart => {
                if self.show_date {
                    self.elements.set_freeze_switching(false);
                    self.elements
                        .set_visibility(HeaderTarget::ClockDateLabel, Visibility::Visible);
                }
                self.set_separator_visible(self.config.show_clock_icons_separator);
                // The collapsed strip never hides its signal icons
                self.icons.remove_ignored_slots(&self.config.rssi_slots);
            }
        }
    }

    fn set_separator_visible(&mut self, visible: bool) {
        self.elements.set_visibility(
            HeaderTarget::ClockIconsSeparator,
            if visible { Visibility::Visible } else { Visibility::Gone },
        );
    }

    fn update_clock_visibility(&mut self) {
        let visible = self.show_clock && !self.icons.is_hidden(StatusSlot::Clock);
        self.elements.set_visibility(
            HeaderTarget::Clock,
            if visible { Visibility::Visible } else { Visibility::Gone },
        );
    }

    fn update_layout(&mut self) {
        self.directives = compute_directives(
            self.layout_mode,
            self.state.qs_disabled,
            self.config.show_battery_estimate,
        );
    }
}

impl Tunable for ExpansionCoordinator {
    fn on_tuning_changed(&mut self, key: SettingKey, value: &SettingValue) {
        match (key, value) {
            (SettingKey::ShowClock, SettingValue::Switch(raw)) => {
                self.show_clock = parse_switch(*raw, true);
                self.update_clock_visibility();
            }
            (SettingKey::ShowDate, SettingValue::Switch(raw)) => {
                self.show_date = parse_switch(*raw, true);
                let visibility = if self.show_date {
                    Visibility::Visible
                } else {
                    Visibility::Gone
                };
                self.elements
                    .set_visibility(HeaderTarget::DateContainer, visibility);
                self.elements
                    .set_visibility(HeaderTarget::ClockDateLabel, visibility);
            }
            (SettingKey::IconHideList, SettingValue::HideList(names)) => {
                let slots = names.iter().filter_map(|name| {
                    let slot = StatusSlot::from_name(name);
                    if slot.is_none() {
                        debug!(name = name.as_str(), "unknown icon slot in hide list");
                    }
                    slot
                });
                self.icons.set_hide_list(slots);
                self.update_clock_visibility();
            }
            (key, value) => {
                warn!(?key, ?value, "mismatched setting delivery");
            }
        }
    }
}
