use crate::state::{CarId, CarTrackLocation, CoordsXYZ, TrackProgress};

/// Authoritative, mutable access to the ride vehicles of the simulation.
///
/// Only the drag command handler mutates cars through this trait, which makes
/// it the single serialization point across every participant of a session.
pub trait RideSimulation {
    /// Resolves a car by id. `None` when the car no longer exists.
    fn car_mut(&mut self, id: CarId) -> Option<&mut dyn RideCar>;
}

/// A single simulated car.
pub trait RideCar {
    /// Moves the car's raw position without touching its track state.
    fn set_position(&mut self, position: CoordsXYZ);

    /// Assigns the track piece the car is riding on.
    ///
    /// This alone does not move the car; follow it with [`RideCar::travel_by`].
    fn set_track_location(&mut self, location: CarTrackLocation);

    /// Distance the car has to travel from its current progress to reach
    /// `progress` on its current track piece.
    fn distance_from_progress(&self, progress: TrackProgress) -> i32;

    /// Physically moves the car along its track, updating position and
    /// orientation.
    fn travel_by(&mut self, distance: i32);
}

/// Observers of simulation changes.
pub trait SimulationEvents {
    /// Signals that the visual state of `car` changed and must be redrawn.
    fn refresh_vehicle(&mut self, car: CarId);
}

impl SimulationEvents for Vec<CarId> {
    fn refresh_vehicle(&mut self, car: CarId) {
        self.push(car);
    }
}
