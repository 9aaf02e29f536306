//! Shade Header
//!
//! The collapsible status strip above the quick-settings panel: a clock and
//! date view that cross-fades into the expanded date/carrier row as the
//! shade is dragged open, with the panel content translating underneath.
//!
//! # Features
//!
//! - **Expansion Coordinator**: One scrub fraction drives every animator set
//! - **Owned Element State**: Animators write into a plain store, never a view tree
//! - **Boundary Side Effects**: Rest-point crossings applied once, idempotently
//! - **Pure Layout Policy**: Orientation and screen-class directives as a function
//! - **Icon Policy**: Ignore/hide suppression for named status icon slots
//! - **Typed Settings**: Clock, date, and hide-list settings without string dispatch
//!
//! The whole crate is single-threaded. Re-entrant evaluation is a contract
//! violation and is checked in debug builds.

pub mod coordinator;
pub mod elements;
pub mod error;
pub mod icons;
pub mod layout;
pub mod state;
pub mod tuner;

pub use coordinator::{ExpansionCoordinator, HeaderConfig, NullPanel, QuickPanelHandle};
pub use elements::{
    AnimatedProperty, ElementState, HeaderElements, HeaderTarget, PropertyAddress, Visibility,
};
pub use error::{HeaderError, Result};
pub use icons::{IconPolicy, StatusSlot};
pub use layout::{
    compute_directives, BatteryMode, HeaderHeight, LayoutDirectives, LayoutMode, Orientation,
    SizeMode,
};
pub use state::{DisableFlags, ExpansionState};
pub use tuner::{parse_switch, SettingKey, SettingValue, Tunable, TunerHub};
