//! Position resolution for dragged vehicles.
//!
//! Maps a tile hit-test from the host's pointer into the 3D point a vehicle
//! would be dropped at, refined to a track location when the pointer hovers
//! iterable track. Resolution is pure: it reads the map through oracles and
//! keeps no state between calls, so it can run on every move event.

use crate::config::EditorConfig;
use crate::env::{TileElementKind, TileOracle, TrackOracle};
use crate::state::{CarTrackLocation, CoordsXY, CoordsXYZ, VehicleType};

/// Tile hit-test reported by the host for a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToolHit {
    /// Corner of the tile under the pointer.
    pub map_coords: Option<CoordsXY>,
    /// Stacking index of the hit element on that tile.
    pub tile_element_index: Option<u32>,
}

impl ToolHit {
    pub const fn new(map_coords: CoordsXY, tile_element_index: u32) -> Self {
        Self {
            map_coords: Some(map_coords),
            tile_element_index: Some(tile_element_index),
        }
    }

    /// A hit over nothing usable (UI, map edge, sky).
    pub const fn empty() -> Self {
        Self {
            map_coords: None,
            tile_element_index: None,
        }
    }
}

/// Candidate placement for a dragged vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragCandidate {
    pub tile_position: CoordsXYZ,
    /// Present only when the pointer is over track with a valid iterator.
    pub track_position: Option<CarTrackLocation>,
}

/// Vertical correction keeping the preview aligned with how the vehicle is
/// drawn rather than with its collision box.
///
/// Fully inverted vehicles (tab height below -10) hang a fixed 29 units lower;
/// partially inverted ones by their negated tab height.
pub fn tab_height_correction(tab_height: i8) -> i32 {
    if tab_height < EditorConfig::INVERTED_TAB_THRESHOLD {
        EditorConfig::INVERTED_HEIGHT_BONUS
    } else if tab_height < 0 {
        -i32::from(tab_height)
    } else {
        0
    }
}

/// Resolves a tool hit into a candidate placement.
///
/// Returns `None` when the hit carries no tile or element index, or when the
/// addressed element does not exist.
pub fn resolve_position<M, T>(
    hit: &ToolHit,
    vehicle_type: Option<&VehicleType>,
    tiles: &M,
    tracks: &T,
) -> Option<DragCandidate>
where
    M: TileOracle + ?Sized,
    T: TrackOracle + ?Sized,
{
    let (Some(map_coords), Some(index)) = (hit.map_coords, hit.tile_element_index) else {
        return None;
    };

    let center = map_coords.tile_center();
    let element = tiles.tile_element(center, index)?;
    let mut z = element.resting_height();
    let mut track_position = None;

    match element.kind {
        TileElementKind::Surface {
            water_height,
            slope,
        } => {
            if water_height > z {
                z = water_height;
            } else if slope != 0 {
                z += EditorConfig::SLOPE_HEIGHT_BONUS;
            }
        }
        TileElementKind::Track {
            direction,
            track_type,
        } => {
            track_position = tracks.track_iterator(center, index).map(|iterator| {
                let point = iterator.position;
                CarTrackLocation {
                    x: point.x - EditorConfig::TILE_CENTER_OFFSET,
                    y: point.y - EditorConfig::TILE_CENTER_OFFSET,
                    z: point.z,
                    direction,
                    track_type,
                }
            });
        }
        _ => {}
    }

    let tab_height = vehicle_type.map_or(0, |vehicle| vehicle.tab_height);
    z += tab_height_correction(tab_height);

    Some(DragCandidate {
        tile_position: CoordsXYZ::new(center.x, center.y, z),
        track_position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MapSnapshot, TileElement};

    const TILE: CoordsXY = CoordsXY::new(200, 200);

    fn resolve(map: &MapSnapshot, hit: ToolHit, vehicle: Option<VehicleType>) -> Option<DragCandidate> {
        resolve_position(&hit, vehicle.as_ref(), map, map)
    }

    #[test]
    fn tab_height_correction_by_inversion() {
        let corrections: Vec<i32> = [-20, -5, 0, 10]
            .into_iter()
            .map(tab_height_correction)
            .collect();
        assert_eq!(corrections, vec![29, 5, 0, 0]);
        assert_eq!(tab_height_correction(-10), 10);
        assert_eq!(tab_height_correction(-11), 29);
    }

    #[test]
    fn missing_hit_data_yields_no_candidate() {
        let map = MapSnapshot::default()
            .with_element(TILE, 0, TileElement::new(48, 64, TileElementKind::Footpath));

        assert_eq!(resolve(&map, ToolHit::empty(), None), None);
        let no_index = ToolHit {
            map_coords: Some(TILE),
            tile_element_index: None,
        };
        assert_eq!(resolve(&map, no_index, None), None);
        let no_coords = ToolHit {
            map_coords: None,
            tile_element_index: Some(0),
        };
        assert_eq!(resolve(&map, no_coords, None), None);
    }

    #[test]
    fn unknown_element_yields_no_candidate() {
        let map = MapSnapshot::default();
        assert_eq!(resolve(&map, ToolHit::new(TILE, 3), None), None);
    }

    #[test]
    fn footpath_uses_base_height_at_tile_center() {
        let map = MapSnapshot::default()
            .with_element(TILE, 0, TileElement::new(48, 64, TileElementKind::Footpath));

        let candidate = resolve(&map, ToolHit::new(TILE, 0), None).unwrap();

        assert_eq!(candidate.tile_position, CoordsXYZ::new(216, 216, 48));
        assert_eq!(candidate.track_position, None);
    }

    #[test]
    fn scenery_uses_clearance_height() {
        let map = MapSnapshot::default()
            .with_element(TILE, 1, TileElement::new(48, 80, TileElementKind::SmallScenery));

        let candidate = resolve(&map, ToolHit::new(TILE, 1), None).unwrap();
        assert_eq!(candidate.tile_position.z, 80);
    }

    #[test]
    fn surface_prefers_water_then_slope() {
        let flooded = TileElementKind::Surface {
            water_height: 96,
            slope: 4,
        };
        let sloped = TileElementKind::Surface {
            water_height: 0,
            slope: 4,
        };
        let flat = TileElementKind::Surface {
            water_height: 0,
            slope: 0,
        };
        let map = MapSnapshot::default()
            .with_element(TILE, 0, TileElement::new(16, 32, flooded))
            .with_element(TILE, 1, TileElement::new(16, 32, sloped))
            .with_element(TILE, 2, TileElement::new(16, 32, flat));

        let z = |index| resolve(&map, ToolHit::new(TILE, index), None).unwrap().tile_position.z;
        assert_eq!(z(0), 96);
        assert_eq!(z(1), 40);
        assert_eq!(z(2), 32);
    }

    #[test]
    fn track_with_iterator_yields_track_location() {
        let kind = TileElementKind::Track {
            direction: 3,
            track_type: 9,
        };
        let map = MapSnapshot::default().with_track(
            TILE,
            2,
            TileElement::new(56, 72, kind),
            CoordsXYZ::new(216, 216, 56),
        );

        let candidate = resolve(&map, ToolHit::new(TILE, 2), None).unwrap();

        assert_eq!(candidate.tile_position, CoordsXYZ::new(216, 216, 56));
        assert_eq!(
            candidate.track_position,
            Some(CarTrackLocation::new(CoordsXYZ::new(200, 200, 56), 3, 9))
        );
    }

    #[test]
    fn track_without_iterator_degrades_to_tile_position() {
        let kind = TileElementKind::Track {
            direction: 0,
            track_type: 1,
        };
        let map = MapSnapshot::default().with_element(TILE, 0, TileElement::new(56, 72, kind));

        let candidate = resolve(&map, ToolHit::new(TILE, 0), None).unwrap();

        assert_eq!(candidate.tile_position, CoordsXYZ::new(216, 216, 56));
        assert_eq!(candidate.track_position, None);
    }

    #[test]
    fn inverted_vehicle_is_raised() {
        let map = MapSnapshot::default()
            .with_element(TILE, 0, TileElement::new(48, 64, TileElementKind::Wall));

        let inverted = resolve(&map, ToolHit::new(TILE, 0), Some(VehicleType::new(-20))).unwrap();
        let hanging = resolve(&map, ToolHit::new(TILE, 0), Some(VehicleType::new(-5))).unwrap();
        let upright = resolve(&map, ToolHit::new(TILE, 0), Some(VehicleType::new(10))).unwrap();

        assert_eq!(inverted.tile_position.z, 77);
        assert_eq!(hanging.tile_position.z, 53);
        assert_eq!(upright.tile_position.z, 48);
    }
}
