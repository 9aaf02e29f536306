//! Position-keyed keyframe tracks
//!
//! A [`KeyframeTrack`] maps a scrub position in `[0, 1]` to a property value
//! by interpolating between authored keyframes. Tracks are immutable once
//! built and carry no time base: the caller supplies the position, typically
//! from a gesture.
//!
//! # Example
//!
//! ```
//! use shade_animation::KeyframeTrack;
//!
//! // Hold 0 for the first half, then fade up to 1
//! let track = KeyframeTrack::from_values(&[0.0, 0.0, 1.0]).unwrap();
//! assert_eq!(track.evaluate(0.25), 0.0);
//! assert_eq!(track.evaluate(0.75), 0.5);
//! assert_eq!(track.evaluate(1.0), 1.0);
//! ```

use smallvec::SmallVec;
use thiserror::Error;

use crate::easing::Easing;

/// Errors produced while building a keyframe track
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackError {
    /// The keyframe sequence cannot describe a function of position
    #[error("invalid keyframe track: {0}")]
    InvalidTrack(&'static str),
}

/// A single animation stop: a scrub position and the value there
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub position: f32,
    pub value: f32,
}

impl Keyframe {
    pub const fn new(position: f32, value: f32) -> Self {
        Self { position, value }
    }
}

/// An ordered run of keyframes, evaluable at any position in `[0, 1]`
///
/// Positions must be strictly increasing. Tracks with two or more keyframes
/// must start at 0.0 and end at 1.0 so that every scrub position lands inside
/// a segment; a single keyframe makes a constant track.
#[derive(Clone, Debug)]
pub struct KeyframeTrack {
    frames: SmallVec<[Keyframe; 4]>,
    curve: Easing,
}

impl KeyframeTrack {
    /// Build a track from explicit keyframes, validating the sequence
    pub fn new(frames: impl IntoIterator<Item = Keyframe>) -> Result<Self, TrackError> {
        let frames: SmallVec<[Keyframe; 4]> = frames.into_iter().collect();

        if frames.is_empty() {
            return Err(TrackError::InvalidTrack("no keyframes"));
        }
        for pair in frames.windows(2) {
            if pair[1].position <= pair[0].position {
                return Err(TrackError::InvalidTrack(
                    "keyframe positions must be strictly increasing",
                ));
            }
        }
        if frames.len() >= 2 {
            if frames[0].position != 0.0 {
                return Err(TrackError::InvalidTrack("first keyframe must sit at 0.0"));
            }
            if frames[frames.len() - 1].position != 1.0 {
                return Err(TrackError::InvalidTrack("last keyframe must sit at 1.0"));
            }
        }

        Ok(Self {
            frames,
            curve: Easing::Linear,
        })
    }

    /// Build a track by spacing `values` evenly across `[0, 1]`
    ///
    /// This is the common authoring shape: two values make a plain ramp,
    /// three values hold-then-move (or move-then-hold). One value makes a
    /// constant track.
    pub fn from_values(values: &[f32]) -> Result<Self, TrackError> {
        match values.len() {
            0 => Err(TrackError::InvalidTrack("no keyframes")),
            1 => Self::new([Keyframe::new(0.0, values[0])]),
            n => {
                let last = (n - 1) as f32;
                Self::new(
                    values
                        .iter()
                        .enumerate()
                        .map(|(i, &value)| Keyframe::new(i as f32 / last, value)),
                )
            }
        }
    }

    /// Remap segment-local progress through `curve` before mixing values
    pub fn with_curve(mut self, curve: Easing) -> Self {
        self.curve = curve;
        self
    }

    /// Number of keyframes in the track
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// A constant track has a single keyframe and ignores position
    pub fn is_constant(&self) -> bool {
        self.frames.len() < 2
    }

    /// Evaluate the track at `position`, clamping outside `[0, 1]`
    ///
    /// A position that lands exactly on a keyframe returns that keyframe's
    /// authored value with no interpolation drift.
    pub fn evaluate(&self, position: f32) -> f32 {
        let position = position.clamp(0.0, 1.0);

        if let [only] = self.frames.as_slice() {
            return only.value;
        }

        let mut upper = self.frames.len() - 1;
        for (i, frame) in self.frames.iter().enumerate() {
            if position == frame.position {
                return frame.value;
            }
            if position < frame.position {
                upper = i;
                break;
            }
        }

        let lo = self.frames[upper - 1];
        let hi = self.frames[upper];
        let local = (position - lo.position) / (hi.position - lo.position);
        lo.value + (hi.value - lo.value) * self.curve.apply(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_spaces_evenly() {
        let track = KeyframeTrack::from_values(&[0.0, 0.0, 1.0]).unwrap();
        assert_eq!(track.len(), 3);
        assert_eq!(track.evaluate(0.25), 0.0);
        assert_eq!(track.evaluate(0.5), 0.0);
        assert!((track.evaluate(0.75) - 0.5).abs() < 1e-6);
        assert_eq!(track.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_two_value_ramp() {
        let track = KeyframeTrack::from_values(&[0.0, 1.0]).unwrap();
        assert_eq!(track.evaluate(0.0), 0.0);
        assert!((track.evaluate(0.3) - 0.3).abs() < 1e-6);
        assert_eq!(track.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_descending_ramp() {
        let track = KeyframeTrack::from_values(&[1.0, 0.0, 0.0]).unwrap();
        assert_eq!(track.evaluate(0.0), 1.0);
        assert!((track.evaluate(0.25) - 0.5).abs() < 1e-6);
        assert_eq!(track.evaluate(0.5), 0.0);
        assert_eq!(track.evaluate(0.9), 0.0);
    }

    #[test]
    fn test_evaluate_clamps_out_of_range() {
        let track = KeyframeTrack::from_values(&[0.2, 0.8]).unwrap();
        assert_eq!(track.evaluate(-1.0), 0.2);
        assert_eq!(track.evaluate(2.0), 0.8);
    }

    #[test]
    fn test_exact_keyframe_hit_skips_interpolation() {
        let track = KeyframeTrack::new([
            Keyframe::new(0.0, 0.0),
            Keyframe::new(0.3, 0.7),
            Keyframe::new(1.0, 0.1),
        ])
        .unwrap();
        assert_eq!(track.evaluate(0.3), 0.7);
    }

    #[test]
    fn test_single_value_is_constant() {
        let track = KeyframeTrack::from_values(&[0.4]).unwrap();
        assert!(track.is_constant());
        assert_eq!(track.evaluate(0.0), 0.4);
        assert_eq!(track.evaluate(0.7), 0.4);
        assert_eq!(track.evaluate(1.0), 0.4);
    }

    #[test]
    fn test_empty_track_is_rejected() {
        assert!(matches!(
            KeyframeTrack::from_values(&[]),
            Err(TrackError::InvalidTrack("no keyframes"))
        ));
    }

    #[test]
    fn test_non_increasing_positions_are_rejected() {
        let result = KeyframeTrack::new([
            Keyframe::new(0.0, 0.0),
            Keyframe::new(0.5, 1.0),
            Keyframe::new(0.5, 2.0),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_endpoints_are_rejected() {
        assert!(KeyframeTrack::new([Keyframe::new(0.1, 0.0), Keyframe::new(1.0, 1.0)]).is_err());
        assert!(KeyframeTrack::new([Keyframe::new(0.0, 0.0), Keyframe::new(0.9, 1.0)]).is_err());
    }

    #[test]
    fn test_curve_remaps_segment_progress() {
        let track = KeyframeTrack::from_values(&[0.0, 1.0])
            .unwrap()
            .with_curve(Easing::EaseOut);
        let expected = Easing::EaseOut.apply(0.3);
        assert!((track.evaluate(0.3) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_curve_leaves_exact_hits_alone() {
        let track = KeyframeTrack::from_values(&[0.0, 0.0, 1.0])
            .unwrap()
            .with_curve(Easing::EaseInOut);
        assert_eq!(track.evaluate(0.5), 0.0);
        assert_eq!(track.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_late_segment_interpolates_locally() {
        let track = KeyframeTrack::new([
            Keyframe::new(0.0, 0.0),
            Keyframe::new(0.95, 0.0),
            Keyframe::new(1.0, 1.0),
        ])
        .unwrap();
        assert!((track.evaluate(0.975) - 0.5).abs() < 1e-5);
    }
}
