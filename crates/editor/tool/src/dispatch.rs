//! Action dispatcher backed by the in-memory park.

use editor_core::{
    ActionTransition, CarId, DragOutcome, DragVehicleAction, DragVehicleArgs, ParkState,
};
use tracing::debug;

use crate::output::ActionDispatcher;

/// Applies drag commands to a [`ParkState`].
///
/// Authoritative commands go to the shared park. Previews go to a local copy
/// that is re-synced from the shared park after every authoritative command.
pub struct ParkDispatcher<'p> {
    park: &'p mut ParkState,
    preview: ParkState,
    executed: Vec<DragVehicleArgs>,
    refreshed: Vec<CarId>,
}

impl<'p> ParkDispatcher<'p> {
    pub fn new(park: &'p mut ParkState) -> Self {
        let preview = park.clone();
        Self {
            park,
            preview,
            executed: Vec::new(),
            refreshed: Vec::new(),
        }
    }

    /// Local preview state as the dragging user currently sees it.
    pub fn preview_park(&self) -> &ParkState {
        &self.preview
    }

    pub fn park(&self) -> &ParkState {
        &*self.park
    }

    /// Authoritative commands applied so far, in submission order.
    pub fn executed(&self) -> &[DragVehicleArgs] {
        &self.executed
    }

    /// Cars observers were asked to redraw by authoritative commands.
    pub fn refreshed(&self) -> &[CarId] {
        &self.refreshed
    }
}

impl ActionDispatcher for ParkDispatcher<'_> {
    fn preview(&mut self, args: &DragVehicleArgs) {
        let mut ignored: Vec<CarId> = Vec::new();
        let Ok(outcome) = DragVehicleAction::new(*args).apply(&mut self.preview, &mut ignored);
        debug!(?outcome, state = %args.state, "preview applied");
    }

    fn execute(&mut self, args: DragVehicleArgs) {
        let Ok(outcome) = DragVehicleAction::new(args).apply(&mut *self.park, &mut self.refreshed);
        if let DragOutcome::TargetMissing(car) = outcome {
            debug!(%car, "drag target no longer exists");
        }
        self.executed.push(args);
        self.preview = self.park.clone();
    }
}
