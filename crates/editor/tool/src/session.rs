//! Per-activation drag state.

use editor_core::{
    CarId, CarState, CarTrackLocation, CoordsXYZ, DragCandidate, DragPosition, DragState,
    DragVehicleArgs, TrackProgress, VehicleType,
};

/// The car a drag session was started for, captured at activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragTarget {
    pub car: CarId,
    pub vehicle_type: Option<VehicleType>,
    pub position: CoordsXYZ,
    pub track_location: Option<CarTrackLocation>,
    pub track_progress: TrackProgress,
}

impl DragTarget {
    pub fn from_car(car: &CarState) -> Self {
        Self {
            car: car.id,
            vehicle_type: car.vehicle_type,
            position: car.position,
            track_location: car.track_location,
            track_progress: car.track_progress,
        }
    }
}

/// Original and last accepted placement of a dragged car.
///
/// # Invariants
///
/// - The original placement is never modified after [`DragSession::begin`].
/// - Once confirmed, [`DragSession::revert`] yields nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSession {
    target: CarId,
    original_position: CoordsXYZ,
    original_track_position: Option<CarTrackLocation>,
    original_track_progress: TrackProgress,
    revert: bool,
    last_position: CoordsXYZ,
    last_track_position: Option<CarTrackLocation>,
}

impl DragSession {
    pub fn begin(target: &DragTarget) -> Self {
        Self {
            target: target.car,
            original_position: target.position,
            original_track_position: target.track_location,
            original_track_progress: target.track_progress,
            revert: true,
            last_position: target.position,
            last_track_position: target.track_location,
        }
    }

    pub fn target(&self) -> CarId {
        self.target
    }

    pub fn is_confirmed(&self) -> bool {
        !self.revert
    }

    pub fn last_position(&self) -> CoordsXYZ {
        self.last_position
    }

    pub fn last_track_position(&self) -> Option<CarTrackLocation> {
        self.last_track_position
    }

    /// Accepts `candidate` if it moves the car, returning the preview position.
    ///
    /// A track candidate is accepted when its track location differs from the
    /// last one. A free candidate is accepted when its tile position differs
    /// from the last tile position.
    pub fn accept(&mut self, candidate: DragCandidate) -> Option<DragPosition> {
        let moved = match candidate.track_position {
            Some(track) => self.last_track_position != Some(track),
            None => self.last_position != candidate.tile_position,
        };
        if !moved {
            return None;
        }

        self.last_position = candidate.tile_position;
        self.last_track_position = candidate.track_position;
        Some(DragPosition::from_parts(
            candidate.tile_position,
            candidate.track_position,
            None,
        ))
    }

    /// Marks the session as confirmed and returns the `Complete` update.
    ///
    /// The update carries no track progress, so a car dropped on track settles
    /// on the holding position of its new piece.
    pub fn confirm(&mut self) -> DragVehicleArgs {
        self.revert = false;
        let position = DragPosition::from_parts(self.last_position, self.last_track_position, None);
        DragVehicleArgs::new(self.target, position, DragState::Complete)
    }

    /// Returns the `Cancel` update restoring the original placement, unless the
    /// session was confirmed.
    pub fn revert(&self) -> Option<DragVehicleArgs> {
        if !self.revert {
            return None;
        }
        let position = DragPosition::from_parts(
            self.original_position,
            self.original_track_position,
            Some(self.original_track_progress),
        );
        Some(DragVehicleArgs::new(self.target, position, DragState::Cancel))
    }
}
