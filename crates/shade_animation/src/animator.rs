//! Fraction-driven animator sets
//!
//! A [`ProgressAnimator`] owns a set of keyframe tracks bound to typed
//! property channels and evaluates all of them against one externally
//! supplied scrub position. Nothing here ticks on a clock; the position
//! comes from a gesture or a controller and the animator is a pure
//! position-to-values mapping plus a small amount of boundary bookkeeping.
//!
//! # Boundary events
//!
//! Instead of registering callbacks, [`ProgressAnimator::set_position`]
//! returns the boundary crossing (if any) as a value. The caller applies
//! whatever side effects the crossing implies after the call returns, which
//! keeps re-entrant mutation of the animator impossible by construction.
//!
//! At most one event is reported per call:
//! - arriving at 1.0 from below reports [`BoundaryEvent::AtEnd`]
//! - arriving at 0.0 from above reports [`BoundaryEvent::AtStart`]
//! - leaving a rest point for the interior reports [`BoundaryEvent::Started`]
//!
//! Re-evaluating at an unchanged position reports nothing, so boundary side
//! effects cannot fire on every frame of a held gesture.
//!
//! # Example
//!
//! ```
//! use shade_animation::{BoundaryEvent, ProgressAnimator, PropertySink};
//!
//! struct Stage {
//!     alpha: f32,
//! }
//!
//! impl PropertySink<&'static str> for Stage {
//!     fn set_float(&mut self, _channel: &'static str, value: f32) {
//!         self.alpha = value;
//!     }
//! }
//!
//! let mut animator = ProgressAnimator::builder()
//!     .add_float("alpha", &[0.0, 1.0])
//!     .build()
//!     .unwrap();
//!
//! let mut stage = Stage { alpha: 0.0 };
//! assert_eq!(
//!     animator.set_position(0.4, &mut stage),
//!     Some(BoundaryEvent::Started)
//! );
//! assert!((stage.alpha - 0.4).abs() < 1e-6);
//! ```

use tracing::trace;

use crate::easing::Easing;
use crate::track::{KeyframeTrack, TrackError};

/// Receives evaluated property values for typed channels
///
/// The channel type is chosen by the embedder; the header binds an enum of
/// element/property pairs so that dispatch is a match, not a string lookup.
pub trait PropertySink<C> {
    fn set_float(&mut self, channel: C, value: f32);
}

/// Boundary crossing reported by [`ProgressAnimator::set_position`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryEvent {
    /// The position left a rest point (0.0 or 1.0) for the interior
    Started,
    /// The position arrived at 0.0 from above
    AtStart,
    /// The position arrived at 1.0 from below
    AtEnd,
}

struct TrackBinding<C> {
    channel: C,
    track: KeyframeTrack,
}

/// A set of channel-bound tracks scrubbed by a single position
pub struct ProgressAnimator<C> {
    tracks: Vec<TrackBinding<C>>,
    last_position: Option<f32>,
}

impl<C: Copy> ProgressAnimator<C> {
    pub fn builder() -> ProgressAnimatorBuilder<C> {
        ProgressAnimatorBuilder::new()
    }

    /// Number of bound tracks
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// The most recent clamped position, or `None` before the first scrub
    pub fn last_position(&self) -> Option<f32> {
        self.last_position
    }

    /// Evaluate every track at `position` and write the results into `sink`
    ///
    /// The position is clamped to `[0, 1]`. Values are always written, even
    /// at an unchanged position, so a sink whose state was overridden
    /// elsewhere can be restored by re-scrubbing. The returned event follows
    /// the boundary discipline described at the module level.
    pub fn set_position(
        &mut self,
        position: f32,
        sink: &mut dyn PropertySink<C>,
    ) -> Option<BoundaryEvent> {
        let position = position.clamp(0.0, 1.0);
        let event = self.crossing_event(position);

        for binding in &self.tracks {
            sink.set_float(binding.channel, binding.track.evaluate(position));
        }
        self.last_position = Some(position);

        if let Some(event) = event {
            trace!(?event, position, "animator boundary");
        }
        event
    }

    fn crossing_event(&self, position: f32) -> Option<BoundaryEvent> {
        if self.last_position == Some(position) {
            return None;
        }
        if position == 1.0 {
            Some(BoundaryEvent::AtEnd)
        } else if position == 0.0 {
            Some(BoundaryEvent::AtStart)
        } else if self
            .last_position
            .map_or(true, |last| last == 0.0 || last == 1.0)
        {
            Some(BoundaryEvent::Started)
        } else {
            None
        }
    }
}

/// Fluent builder for [`ProgressAnimator`]
///
/// Track construction errors are latched and surfaced by [`build`], so a
/// chain of `add_float` calls reads cleanly and still fails loudly on
/// malformed keyframe data.
///
/// [`build`]: ProgressAnimatorBuilder::build
pub struct ProgressAnimatorBuilder<C> {
    tracks: Vec<TrackBinding<C>>,
    curve: Easing,
    error: Option<TrackError>,
}

impl<C: Copy> ProgressAnimatorBuilder<C> {
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            curve: Easing::Linear,
            error: None,
        }
    }

    /// Curve applied to tracks added after this call
    pub fn easing(mut self, curve: Easing) -> Self {
        self.curve = curve;
        self
    }

    /// Bind `values` to `channel` as evenly spaced keyframes
    pub fn add_float(mut self, channel: C, values: &[f32]) -> Self {
        match KeyframeTrack::from_values(values) {
            Ok(track) => self.tracks.push(TrackBinding {
                channel,
                track: track.with_curve(self.curve),
            }),
            Err(err) => {
                if self.error.is_none() {
                    self.error = Some(err);
                }
            }
        }
        self
    }

    /// Bind an already validated track to `channel`
    pub fn add_track(mut self, channel: C, track: KeyframeTrack) -> Self {
        self.tracks.push(TrackBinding { channel, track });
        self
    }

    pub fn build(self) -> Result<ProgressAnimator<C>, TrackError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(ProgressAnimator {
            tracks: self.tracks,
            last_position: None,
        })
    }
}

impl<C: Copy> Default for ProgressAnimatorBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Channel {
        Alpha,
        Shift,
    }

    #[derive(Default)]
    struct Recorder {
        alpha: f32,
        shift: f32,
        writes: usize,
    }

    impl PropertySink<Channel> for Recorder {
        fn set_float(&mut self, channel: Channel, value: f32) {
            match channel {
                Channel::Alpha => self.alpha = value,
                Channel::Shift => self.shift = value,
            }
            self.writes += 1;
        }
    }

    fn two_track_animator() -> ProgressAnimator<Channel> {
        ProgressAnimator::builder()
            .add_float(Channel::Alpha, &[0.0, 0.0, 1.0])
            .add_float(Channel::Shift, &[0.0, 100.0])
            .build()
            .unwrap()
    }

    #[test]
    fn test_set_position_writes_every_track() {
        let mut animator = two_track_animator();
        let mut sink = Recorder::default();

        animator.set_position(0.75, &mut sink);
        assert!((sink.alpha - 0.5).abs() < 1e-6);
        assert!((sink.shift - 75.0).abs() < 1e-4);
        assert_eq!(sink.writes, 2);
    }

    #[test]
    fn test_first_interior_scrub_reports_started() {
        let mut animator = two_track_animator();
        let mut sink = Recorder::default();

        assert_eq!(
            animator.set_position(0.4, &mut sink),
            Some(BoundaryEvent::Started)
        );
        // Still mid-flight: no further event
        assert_eq!(animator.set_position(0.6, &mut sink), None);
    }

    #[test]
    fn test_arriving_at_end_reports_at_end() {
        let mut animator = two_track_animator();
        let mut sink = Recorder::default();

        animator.set_position(0.5, &mut sink);
        assert_eq!(
            animator.set_position(1.0, &mut sink),
            Some(BoundaryEvent::AtEnd)
        );
        assert_eq!(sink.alpha, 1.0);
        assert_eq!(sink.shift, 100.0);
    }

    #[test]
    fn test_returning_to_start_reports_at_start() {
        let mut animator = two_track_animator();
        let mut sink = Recorder::default();

        animator.set_position(0.5, &mut sink);
        assert_eq!(
            animator.set_position(0.0, &mut sink),
            Some(BoundaryEvent::AtStart)
        );
        assert_eq!(sink.alpha, 0.0);
        assert_eq!(sink.shift, 0.0);
    }

    #[test]
    fn test_started_fires_once_per_departure() {
        let mut animator = two_track_animator();
        let mut sink = Recorder::default();

        animator.set_position(0.0, &mut sink);
        assert_eq!(
            animator.set_position(0.1, &mut sink),
            Some(BoundaryEvent::Started)
        );
        assert_eq!(animator.set_position(0.2, &mut sink), None);
        assert_eq!(animator.set_position(0.3, &mut sink), None);

        // Rest at the start again, then depart again
        animator.set_position(0.0, &mut sink);
        assert_eq!(
            animator.set_position(0.1, &mut sink),
            Some(BoundaryEvent::Started)
        );
    }

    #[test]
    fn test_leaving_the_end_reports_started() {
        let mut animator = two_track_animator();
        let mut sink = Recorder::default();

        animator.set_position(1.0, &mut sink);
        assert_eq!(
            animator.set_position(0.9, &mut sink),
            Some(BoundaryEvent::Started)
        );
    }

    #[test]
    fn test_unchanged_position_reports_nothing() {
        let mut animator = two_track_animator();
        let mut sink = Recorder::default();

        animator.set_position(0.0, &mut sink);
        assert_eq!(animator.set_position(0.0, &mut sink), None);
        animator.set_position(1.0, &mut sink);
        assert_eq!(animator.set_position(1.0, &mut sink), None);
    }

    #[test]
    fn test_unchanged_position_still_writes_values() {
        let mut animator = two_track_animator();
        let mut sink = Recorder::default();

        animator.set_position(1.0, &mut sink);
        // Something else stomps the sink between scrubs
        sink.alpha = 0.25;
        animator.set_position(1.0, &mut sink);
        assert_eq!(sink.alpha, 1.0);
    }

    #[test]
    fn test_jump_across_reports_only_the_arrival() {
        let mut animator = two_track_animator();
        let mut sink = Recorder::default();

        animator.set_position(0.0, &mut sink);
        assert_eq!(
            animator.set_position(1.0, &mut sink),
            Some(BoundaryEvent::AtEnd)
        );
        assert_eq!(
            animator.set_position(0.0, &mut sink),
            Some(BoundaryEvent::AtStart)
        );
    }

    #[test]
    fn test_out_of_range_position_is_clamped() {
        let mut animator = two_track_animator();
        let mut sink = Recorder::default();

        assert_eq!(
            animator.set_position(3.0, &mut sink),
            Some(BoundaryEvent::AtEnd)
        );
        assert_eq!(animator.last_position(), Some(1.0));
        // Further overshoot is the same clamped position
        assert_eq!(animator.set_position(1.7, &mut sink), None);

        assert_eq!(
            animator.set_position(-0.5, &mut sink),
            Some(BoundaryEvent::AtStart)
        );
        assert_eq!(animator.last_position(), Some(0.0));
    }

    #[test]
    fn test_first_scrub_at_rest_reports_that_rest() {
        let mut animator = two_track_animator();
        let mut sink = Recorder::default();
        assert_eq!(
            animator.set_position(0.0, &mut sink),
            Some(BoundaryEvent::AtStart)
        );

        let mut animator = two_track_animator();
        assert_eq!(
            animator.set_position(1.0, &mut sink),
            Some(BoundaryEvent::AtEnd)
        );
    }

    #[test]
    fn test_builder_latches_track_errors() {
        let result = ProgressAnimator::builder()
            .add_float(Channel::Alpha, &[0.0, 1.0])
            .add_float(Channel::Shift, &[])
            .build();
        assert!(matches!(result, Err(TrackError::InvalidTrack(_))));
    }

    #[test]
    fn test_builder_easing_applies_to_later_tracks() {
        let mut animator = ProgressAnimator::builder()
            .easing(Easing::EaseOut)
            .add_float(Channel::Shift, &[0.0, 100.0])
            .build()
            .unwrap();
        let mut sink = Recorder::default();

        animator.set_position(0.3, &mut sink);
        let expected = Easing::EaseOut.apply(0.3) * 100.0;
        assert!((sink.shift - expected).abs() < 1e-3);
    }

    #[test]
    fn test_empty_animator_is_inert() {
        let mut animator: ProgressAnimator<Channel> =
            ProgressAnimator::builder().build().unwrap();
        let mut sink = Recorder::default();

        assert_eq!(
            animator.set_position(0.5, &mut sink),
            Some(BoundaryEvent::Started)
        );
        assert_eq!(sink.writes, 0);
    }
}
