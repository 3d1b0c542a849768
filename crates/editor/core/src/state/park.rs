//! In-memory park simulation.
//!
//! A small stand-in for the host simulation: cars ride straight
//! along their assigned track piece, one map unit per unit of track progress.
//! It is enough to replay drag sessions offline and to test the command
//! handler without a running game.

use crate::env::{RideCar, RideSimulation};

use super::{CarId, CarTrackLocation, CoordsXYZ, TrackProgress, VehicleType};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Distance covered by one unit of track progress on a straight piece.
pub const DISTANCE_PER_PROGRESS: i32 = 8_716;

/// State of a single simulated car.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CarState {
    pub id: CarId,
    pub position: CoordsXYZ,
    #[cfg_attr(feature = "serde", serde(default))]
    pub track_location: Option<CarTrackLocation>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub track_progress: TrackProgress,
    #[cfg_attr(feature = "serde", serde(default))]
    pub vehicle_type: Option<VehicleType>,
}

impl CarState {
    pub fn new(id: CarId, position: CoordsXYZ) -> Self {
        Self {
            id,
            position,
            ..Self::default()
        }
    }

    /// Places the car on track (builder pattern).
    #[must_use]
    pub fn on_track(mut self, location: CarTrackLocation, progress: TrackProgress) -> Self {
        self.track_location = Some(location);
        self.track_progress = progress;
        self
    }

    /// Attaches vehicle type metadata (builder pattern).
    #[must_use]
    pub fn with_vehicle_type(mut self, vehicle_type: VehicleType) -> Self {
        self.vehicle_type = Some(vehicle_type);
        self
    }

    /// Recomputes the world position from the track location and progress.
    fn snap_to_track(&mut self) {
        let Some(location) = self.track_location else {
            return;
        };
        let (dx, dy) = direction_delta(location.direction);
        let progress = i32::from(self.track_progress);
        self.position = CoordsXYZ::new(
            location.x + dx * progress,
            location.y + dy * progress,
            location.z,
        );
    }
}

/// Unit step along a track direction (0 = -x, 1 = +y, 2 = +x, 3 = -y).
fn direction_delta(direction: u8) -> (i32, i32) {
    match direction & 3 {
        0 => (-1, 0),
        1 => (0, 1),
        2 => (1, 0),
        _ => (0, -1),
    }
}

impl RideCar for CarState {
    fn set_position(&mut self, position: CoordsXYZ) {
        self.position = position;
    }

    fn set_track_location(&mut self, location: CarTrackLocation) {
        self.track_location = Some(location);
    }

    fn distance_from_progress(&self, progress: TrackProgress) -> i32 {
        (i32::from(progress) - i32::from(self.track_progress)) * DISTANCE_PER_PROGRESS
    }

    fn travel_by(&mut self, distance: i32) {
        let steps = distance / DISTANCE_PER_PROGRESS;
        let progress = (i32::from(self.track_progress) + steps)
            .clamp(0, i32::from(TrackProgress::MAX));
        self.track_progress = TrackProgress::try_from(progress).unwrap_or(TrackProgress::MAX);
        self.snap_to_track();
    }
}

/// All simulated cars of a park.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParkState {
    pub cars: Vec<CarState>,
}

impl ParkState {
    pub fn new(cars: Vec<CarState>) -> Self {
        Self { cars }
    }

    pub fn car(&self, id: CarId) -> Option<&CarState> {
        self.cars.iter().find(|car| car.id == id)
    }

    /// Removes a car, returning its last state.
    pub fn remove_car(&mut self, id: CarId) -> Option<CarState> {
        let index = self.cars.iter().position(|car| car.id == id)?;
        Some(self.cars.remove(index))
    }
}

impl RideSimulation for ParkState {
    fn car_mut(&mut self, id: CarId) -> Option<&mut dyn RideCar> {
        self.cars
            .iter_mut()
            .find(|car| car.id == id)
            .map(|car| car as &mut dyn RideCar)
    }
}
