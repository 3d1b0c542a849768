//! Serializable map snapshot backing the map oracles.
//!
//! Offline tools (the replay CLI) and tests cannot query a live park, so they
//! describe the handful of tile elements they care about up front and hand the
//! snapshot to the resolver as both [`TileOracle`] and [`TrackOracle`].

use super::{TileElement, TileOracle, TrackIteratorPosition, TrackOracle};
use crate::state::{CoordsXY, CoordsXYZ};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One tile element, addressed by its tile corner and stacking index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElementSnapshot {
    pub tile: CoordsXY,
    pub index: u32,
    pub element: TileElement,
    /// Tile-centered iterator point, present only for iterable track.
    #[cfg_attr(feature = "serde", serde(default))]
    pub track_iterator: Option<CoordsXYZ>,
}

/// Sparse snapshot of map tile elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MapSnapshot {
    pub elements: Vec<ElementSnapshot>,
}

impl MapSnapshot {
    pub fn new(elements: Vec<ElementSnapshot>) -> Self {
        Self { elements }
    }

    /// Adds an element at `tile`/`index` (builder pattern).
    #[must_use]
    pub fn with_element(mut self, tile: CoordsXY, index: u32, element: TileElement) -> Self {
        self.elements.push(ElementSnapshot {
            tile: tile.align_with_map(),
            index,
            element,
            track_iterator: None,
        });
        self
    }

    /// Adds an iterable track element at `tile`/`index` (builder pattern).
    #[must_use]
    pub fn with_track(
        mut self,
        tile: CoordsXY,
        index: u32,
        element: TileElement,
        iterator: CoordsXYZ,
    ) -> Self {
        self.elements.push(ElementSnapshot {
            tile: tile.align_with_map(),
            index,
            element,
            track_iterator: Some(iterator),
        });
        self
    }

    fn find(&self, position: CoordsXY, index: u32) -> Option<&ElementSnapshot> {
        let tile = position.align_with_map();
        self.elements
            .iter()
            .find(|entry| entry.tile == tile && entry.index == index)
    }
}

impl TileOracle for MapSnapshot {
    fn tile_element(&self, position: CoordsXY, index: u32) -> Option<TileElement> {
        self.find(position, index).map(|entry| entry.element)
    }
}

impl TrackOracle for MapSnapshot {
    fn track_iterator(&self, position: CoordsXY, index: u32) -> Option<TrackIteratorPosition> {
        self.find(position, index)
            .and_then(|entry| entry.track_iterator)
            .map(TrackIteratorPosition::new)
    }
}
