use std::fmt;

use crate::config::EditorConfig;

/// Horizontal map coordinate in map units (32 units per tile).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordsXY {
    pub x: i32,
    pub y: i32,
}

impl CoordsXY {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the center of the tile whose corner is at this coordinate.
    pub const fn tile_center(self) -> Self {
        Self {
            x: self.x + EditorConfig::TILE_CENTER_OFFSET,
            y: self.y + EditorConfig::TILE_CENTER_OFFSET,
        }
    }

    /// Snaps both axes down to the corner of the containing tile.
    pub fn align_with_map(self) -> Self {
        Self {
            x: align_with_map(self.x),
            y: align_with_map(self.y),
        }
    }
}

impl fmt::Display for CoordsXY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Integer 3D point in map units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordsXYZ {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CoordsXYZ {
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub const fn xy(self) -> CoordsXY {
        CoordsXY {
            x: self.x,
            y: self.y,
        }
    }
}

impl fmt::Display for CoordsXYZ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Exact component-wise comparison; a point never equals an absent point.
pub fn equal_coords(a: &CoordsXYZ, b: Option<&CoordsXYZ>) -> bool {
    b.is_some_and(|b| a == b)
}

/// Aligns a coordinate with the edge of a map tile.
///
/// Floors towards negative infinity so coordinates left of the origin still
/// land on the tile that contains them.
pub fn align_with_map(coordinate: i32) -> i32 {
    coordinate.div_euclid(EditorConfig::TILE_SIZE) * EditorConfig::TILE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_with_map_floors_to_tile_edge() {
        let aligned: Vec<i32> = [0, 31, 32, 63, 64].into_iter().map(align_with_map).collect();
        assert_eq!(aligned, vec![0, 0, 32, 32, 64]);
    }

    #[test]
    fn align_with_map_handles_negative_coordinates() {
        assert_eq!(align_with_map(-1), -32);
        assert_eq!(align_with_map(-32), -32);
    }

    #[test]
    fn equal_coords_is_exact_and_never_matches_absent() {
        let a = CoordsXYZ::new(1, 2, 3);
        assert!(equal_coords(&a, Some(&CoordsXYZ::new(1, 2, 3))));
        assert!(!equal_coords(&a, Some(&CoordsXYZ::new(1, 2, 4))));
        assert!(!equal_coords(&a, None));
    }

    #[test]
    fn tile_center_adds_half_tile() {
        assert_eq!(CoordsXY::new(200, 200).tile_center(), CoordsXY::new(216, 216));
        assert_eq!(CoordsXY::new(216, 230).align_with_map(), CoordsXY::new(192, 224));
    }
}
