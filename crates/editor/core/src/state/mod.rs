//! Value types shared by the resolver, the drag tool and the command handler.
mod coords;
mod park;
mod track;
mod vehicle;

pub use coords::{CoordsXY, CoordsXYZ, align_with_map, equal_coords};
pub use park::{CarState, DISTANCE_PER_PROGRESS, ParkState};
pub use track::{CarTrackLocation, TrackProgress};
pub use vehicle::{CarId, VehicleType};
