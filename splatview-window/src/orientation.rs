//! Device-orientation lock held for the lifetime of a viewing session.
//!
//! The renderer captures its surface dimensions once per session, so the
//! device must not rotate while a session is live. The lock is modeled as
//! an injectable service rather than ambient global state so lifecycle
//! ordering stays testable.

use tracing::debug;

/// Physical device orientation as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceOrientation {
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    FaceUp,
    FaceDown,
    #[default]
    Unknown,
}

/// Set of orientations the device is allowed to rotate into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationMask {
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    All,
}

impl OrientationMask {
    /// Mask locking to the given orientation. Indeterminate orientations
    /// (face up/down, unknown) lock to portrait.
    pub fn locking(orientation: DeviceOrientation) -> Self {
        match orientation {
            DeviceOrientation::Portrait => Self::Portrait,
            DeviceOrientation::PortraitUpsideDown => Self::PortraitUpsideDown,
            DeviceOrientation::LandscapeLeft => Self::LandscapeLeft,
            DeviceOrientation::LandscapeRight => Self::LandscapeRight,
            DeviceOrientation::FaceUp | DeviceOrientation::FaceDown | DeviceOrientation::Unknown => {
                Self::Portrait
            }
        }
    }
}

/// Process-wide rotation-lock state.
pub trait OrientationService {
    /// Current physical orientation of the device.
    fn device_orientation(&self) -> DeviceOrientation;

    /// Replace the allowed-orientation mask.
    fn apply_mask(&mut self, mask: OrientationMask);
}

/// Stand-in for platforms without rotation hardware: reports a fixed
/// orientation and only logs mask changes.
#[derive(Debug, Default)]
pub struct FixedOrientation {
    orientation: DeviceOrientation,
}

impl FixedOrientation {
    pub fn new(orientation: DeviceOrientation) -> Self {
        Self { orientation }
    }
}

impl OrientationService for FixedOrientation {
    fn device_orientation(&self) -> DeviceOrientation {
        self.orientation
    }

    fn apply_mask(&mut self, mask: OrientationMask) {
        debug!("orientation mask set to {mask:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locking_matches_determinate_orientations() {
        assert_eq!(
            OrientationMask::locking(DeviceOrientation::LandscapeLeft),
            OrientationMask::LandscapeLeft
        );
        assert_eq!(
            OrientationMask::locking(DeviceOrientation::LandscapeRight),
            OrientationMask::LandscapeRight
        );
        assert_eq!(
            OrientationMask::locking(DeviceOrientation::Portrait),
            OrientationMask::Portrait
        );
        assert_eq!(
            OrientationMask::locking(DeviceOrientation::PortraitUpsideDown),
            OrientationMask::PortraitUpsideDown
        );
    }

    #[test]
    fn test_indeterminate_orientations_lock_to_portrait() {
        for orientation in [
            DeviceOrientation::FaceUp,
            DeviceOrientation::FaceDown,
            DeviceOrientation::Unknown,
        ] {
            assert_eq!(
                OrientationMask::locking(orientation),
                OrientationMask::Portrait
            );
        }
    }
}
