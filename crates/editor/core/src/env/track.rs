use crate::state::{CoordsXY, CoordsXYZ};

/// Track iterator lookup.
///
/// A track iterator is a cursor over a track element that yields the precise
/// point a vehicle would occupy on it.
pub trait TrackOracle {
    /// Returns the iterator position for the track element at `index` on the
    /// tile containing `position`, or `None` when the element cannot be
    /// iterated.
    fn track_iterator(&self, position: CoordsXY, index: u32) -> Option<TrackIteratorPosition>;
}

/// Point reported by a track iterator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackIteratorPosition {
    /// Tile-centered point of the segment start.
    pub position: CoordsXYZ,
}

impl TrackIteratorPosition {
    pub const fn new(position: CoordsXYZ) -> Self {
        Self { position }
    }
}
