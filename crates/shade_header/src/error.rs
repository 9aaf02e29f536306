//! Header error types

use shade_animation::TrackError;
use thiserror::Error;

use crate::elements::HeaderTarget;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    /// A track was aimed at an element this configuration does not include
    #[error("animation target {0:?} is not bound")]
    UnboundTarget(HeaderTarget),

    /// Malformed keyframe data reached an animator builder
    #[error(transparent)]
    Track(#[from] TrackError),
}

pub type Result<T> = std::result::Result<T, HeaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_errors_convert() {
        fn build() -> Result<()> {
            Err(TrackError::InvalidTrack("no keyframes"))?;
            Ok(())
        }
        assert!(matches!(build(), Err(HeaderError::Track(_))));
    }

    #[test]
    fn test_unbound_target_names_the_element() {
        let err = HeaderError::UnboundTarget(HeaderTarget::CarrierGroup);
        assert!(err.to_string().contains("CarrierGroup"));
    }
}
