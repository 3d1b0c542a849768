use crate::state::CoordsXY;

/// Read-only access to the layered tile elements of the map.
pub trait TileOracle {
    /// Returns the element stacked at `index` on the tile containing `position`.
    fn tile_element(&self, position: CoordsXY, index: u32) -> Option<TileElement>;
}

/// A layered object occupying a map grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileElement {
    pub base_z: i32,
    pub clearance_z: i32,
    pub kind: TileElementKind,
}

impl TileElement {
    pub const fn new(base_z: i32, clearance_z: i32, kind: TileElementKind) -> Self {
        Self {
            base_z,
            clearance_z,
            kind,
        }
    }

    /// Height a dropped vehicle rests at before any surface or silhouette
    /// correction.
    ///
    /// Thin elements (paths, banners, walls, track) carry vehicles at their
    /// base; everything else carries them on top.
    pub fn resting_height(&self) -> i32 {
        if self.kind.rests_on_base() {
            self.base_z
        } else {
            self.clearance_z
        }
    }
}

/// Canonical tile element kinds, with the per-kind data placement needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TileElementKind {
    Surface { water_height: i32, slope: u8 },
    Footpath,
    Track { direction: u8, track_type: u16 },
    SmallScenery,
    Wall,
    Entrance,
    LargeScenery,
    Banner,
}

impl TileElementKind {
    pub fn rests_on_base(self) -> bool {
        matches!(
            self,
            TileElementKind::Footpath
                | TileElementKind::Banner
                | TileElementKind::Wall
                | TileElementKind::Track { .. }
        )
    }
}
