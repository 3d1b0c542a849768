//! Vehicle drag command and its simulation-side handler.

use crate::action::ActionTransition;
use crate::config::EditorConfig;
use crate::env::{RideSimulation, SimulationEvents};
use crate::error::NeverError;
use crate::state::{CarId, CarTrackLocation, CoordsXYZ, TrackProgress};

/// How the drag session that produced an update ended.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DragState {
    /// Live preview while the pointer moves. Never replicated.
    Dragging,
    /// The user confirmed the new placement.
    Complete,
    /// The tool closed without confirmation; the payload restores the car.
    Cancel,
}

/// Where a car ends up relative to the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// Free-floating at the tile position.
    Free,
    /// Snapped onto a track piece.
    Track {
        location: CarTrackLocation,
        /// Progress to travel to on the piece. `None` settles the car on the
        /// holding position of the piece.
        progress: Option<TrackProgress>,
    },
}

/// Candidate or final placement of a dragged car.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragPosition {
    pub tile_position: CoordsXYZ,
    pub placement: Placement,
}

impl DragPosition {
    pub const fn free(tile_position: CoordsXYZ) -> Self {
        Self {
            tile_position,
            placement: Placement::Free,
        }
    }

    pub const fn on_track(
        tile_position: CoordsXYZ,
        location: CarTrackLocation,
        progress: Option<TrackProgress>,
    ) -> Self {
        Self {
            tile_position,
            placement: Placement::Track { location, progress },
        }
    }

    /// Builds a position from its flat parts. Progress is discarded when the
    /// car is not on track.
    pub fn from_parts(
        tile_position: CoordsXYZ,
        track_position: Option<CarTrackLocation>,
        track_progress: Option<TrackProgress>,
    ) -> Self {
        match track_position {
            Some(location) => Self::on_track(tile_position, location, track_progress),
            None => Self::free(tile_position),
        }
    }

    pub fn track_position(&self) -> Option<&CarTrackLocation> {
        match &self.placement {
            Placement::Track { location, .. } => Some(location),
            Placement::Free => None,
        }
    }

    pub fn track_progress(&self) -> Option<TrackProgress> {
        match self.placement {
            Placement::Track { progress, .. } => progress,
            Placement::Free => None,
        }
    }
}

/// Wire payload of the drag command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragVehicleArgs {
    pub target: CarId,
    pub position: DragPosition,
    pub state: DragState,
}

impl DragVehicleArgs {
    pub const fn new(target: CarId, position: DragPosition, state: DragState) -> Self {
        Self {
            target,
            position,
            state,
        }
    }
}

/// Result of applying a drag command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// The car was moved and observers were asked to redraw it.
    Applied(CarId),
    /// The car no longer exists; nothing changed.
    TargetMissing(CarId),
}

/// Applies a committed or cancelled drag to the simulation.
///
/// # Invariants
///
/// - A target that no longer resolves is a silent no-op, not an error: the
///   car may have been removed by another participant while the drag was
///   still running.
/// - Track placements always travel after the location is assigned, even
///   when restoring the original progress. Assigning the location alone does
///   not update position and orientation inside the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragVehicleAction {
    pub args: DragVehicleArgs,
}

impl DragVehicleAction {
    pub const fn new(args: DragVehicleArgs) -> Self {
        Self { args }
    }
}

impl From<DragVehicleArgs> for DragVehicleAction {
    fn from(args: DragVehicleArgs) -> Self {
        Self::new(args)
    }
}

impl ActionTransition for DragVehicleAction {
    type Error = NeverError;
    type Result = DragOutcome;

    const NAME: &'static str = "rve-drag-car";

    fn apply(
        &self,
        simulation: &mut dyn RideSimulation,
        events: &mut dyn SimulationEvents,
    ) -> Result<Self::Result, Self::Error> {
        let target = self.args.target;
        let Some(car) = simulation.car_mut(target) else {
            return Ok(DragOutcome::TargetMissing(target));
        };

        let position = &self.args.position;
        match position.placement {
            Placement::Free => car.set_position(position.tile_position),
            Placement::Track { location, progress } => {
                car.set_track_location(location);
                let progress = progress.unwrap_or(EditorConfig::HOLDING_TRACK_PROGRESS);
                let distance = car.distance_from_progress(progress);
                car.travel_by(distance);
            }
        }

        events.refresh_vehicle(target);
        Ok(DragOutcome::Applied(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CarState, ParkState};

    fn park() -> ParkState {
        let track = CarTrackLocation::new(CoordsXYZ::new(320, 320, 56), 2, 1);
        ParkState::new(vec![
            CarState::new(CarId(1), CoordsXYZ::new(100, 100, 50)),
            CarState::new(CarId(2), CoordsXYZ::new(336, 336, 56)).on_track(track, 6),
        ])
    }

    fn apply(park: &mut ParkState, args: DragVehicleArgs) -> (DragOutcome, Vec<CarId>) {
        let mut refreshed = Vec::new();
        let outcome = DragVehicleAction::new(args)
            .apply(park, &mut refreshed)
            .unwrap();
        (outcome, refreshed)
    }

    #[test]
    fn missing_target_is_a_silent_no_op() {
        let mut park = park();
        let before = park.clone();
        let args = DragVehicleArgs::new(
            CarId(99),
            DragPosition::free(CoordsXYZ::new(1, 2, 3)),
            DragState::Complete,
        );

        let (outcome, refreshed) = apply(&mut park, args);

        assert_eq!(outcome, DragOutcome::TargetMissing(CarId(99)));
        assert!(refreshed.is_empty());
        assert_eq!(park, before);
    }

    #[test]
    fn free_placement_sets_raw_position_and_refreshes() {
        let mut park = park();
        let args = DragVehicleArgs::new(
            CarId(1),
            DragPosition::free(CoordsXYZ::new(216, 216, 48)),
            DragState::Complete,
        );

        let (outcome, refreshed) = apply(&mut park, args);

        assert_eq!(outcome, DragOutcome::Applied(CarId(1)));
        assert_eq!(refreshed, vec![CarId(1)]);
        assert_eq!(park.car(CarId(1)).unwrap().position, CoordsXYZ::new(216, 216, 48));
    }

    #[test]
    fn track_placement_without_progress_settles_on_holding_position() {
        let mut park = park();
        let location = CarTrackLocation::new(CoordsXYZ::new(64, 64, 24), 1, 5);
        let args = DragVehicleArgs::new(
            CarId(2),
            DragPosition::on_track(CoordsXYZ::new(80, 80, 24), location, None),
            DragState::Complete,
        );

        apply(&mut park, args);

        let car = park.car(CarId(2)).unwrap();
        assert_eq!(car.track_location, Some(location));
        assert_eq!(car.track_progress, EditorConfig::HOLDING_TRACK_PROGRESS);
        assert_eq!(car.position, CoordsXYZ::new(64, 65, 24));
    }

    #[test]
    fn track_placement_travels_to_given_progress() {
        let mut park = park();
        let location = CarTrackLocation::new(CoordsXYZ::new(320, 320, 56), 2, 1);
        let args = DragVehicleArgs::new(
            CarId(2),
            DragPosition::on_track(CoordsXYZ::new(336, 336, 56), location, Some(6)),
            DragState::Cancel,
        );

        let (_, refreshed) = apply(&mut park, args);

        let car = park.car(CarId(2)).unwrap();
        assert_eq!(car.track_progress, 6);
        assert_eq!(car.position, CoordsXYZ::new(326, 320, 56));
        assert_eq!(refreshed, vec![CarId(2)]);
    }

    #[test]
    fn progress_is_unrepresentable_without_track() {
        let position = DragPosition::from_parts(CoordsXYZ::new(1, 1, 1), None, Some(40));

        assert_eq!(position.placement, Placement::Free);
        assert_eq!(position.track_progress(), None);
        assert_eq!(position.track_position(), None);
    }

    #[test]
    fn drag_state_names() {
        use strum::IntoEnumIterator;

        let names: Vec<String> = DragState::iter().map(|state| state.to_string()).collect();
        assert_eq!(names, vec!["dragging", "complete", "cancel"]);
    }
}
