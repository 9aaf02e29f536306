//! Shade Animation System
//!
//! Scrub-driven keyframe animation for chrome that follows a gesture.
//!
//! # Features
//!
//! - **Position Tracks**: Keyframe tracks evaluated at a scrub position, not a clock
//! - **Typed Channels**: Tracks bind to caller-defined channel types, dispatched by match
//! - **Boundary Events**: Rest-point crossings reported as values, never as callbacks
//! - **Easing**: Quadratic curves plus two-control-point cubic beziers
//! - **Fallible Builders**: Malformed keyframe data fails at construction, not mid-scrub
//!
//! Everything in this crate is single-threaded and allocation-light; an
//! animator set is a handful of small tracks scrubbed once per input frame.

pub mod animator;
pub mod easing;
pub mod track;

pub use animator::{BoundaryEvent, ProgressAnimator, ProgressAnimatorBuilder, PropertySink};
pub use easing::Easing;
pub use track::{Keyframe, KeyframeTrack, TrackError};
