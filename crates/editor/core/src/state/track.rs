use std::fmt;

use super::CoordsXYZ;

/// Progress of a car along its current track piece, in track sub-positions.
pub type TrackProgress = u16;

/// A car's position expressed as a point on a track element plus orientation.
///
/// The point is the tile corner of the track piece, not its center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarTrackLocation {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    /// Rotation of the track piece (0..=3).
    pub direction: u8,
    /// Track piece type identifier.
    pub track_type: u16,
}

impl CarTrackLocation {
    pub const fn new(position: CoordsXYZ, direction: u8, track_type: u16) -> Self {
        Self {
            x: position.x,
            y: position.y,
            z: position.z,
            direction,
            track_type,
        }
    }

    pub const fn position(&self) -> CoordsXYZ {
        CoordsXYZ::new(self.x, self.y, self.z)
    }
}

impl fmt::Display for CarTrackLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}) dir {} type {}",
            self.x, self.y, self.z, self.direction, self.track_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_includes_orientation_and_type() {
        let base = CarTrackLocation::new(CoordsXYZ::new(64, 96, 48), 1, 2);

        assert_eq!(base, CarTrackLocation::new(CoordsXYZ::new(64, 96, 48), 1, 2));
        assert_ne!(base, CarTrackLocation::new(CoordsXYZ::new(64, 96, 48), 2, 2));
        assert_ne!(base, CarTrackLocation::new(CoordsXYZ::new(64, 96, 48), 1, 3));
        assert_ne!(base, CarTrackLocation::new(CoordsXYZ::new(64, 96, 56), 1, 2));
    }
}
