//! Replicated editor actions.
//!
//! An action is the only way editor state crosses from a local tool session
//! into the shared simulation. The host registers each action under its
//! [`ActionTransition::NAME`], ships the payload to every participant of a
//! multiplayer session, and each participant applies it to its own simulation.

#[cfg(feature = "serde")]
mod codec;
mod drag;

#[cfg(feature = "serde")]
pub use codec::CodecError;
pub use drag::{DragOutcome, DragPosition, DragState, DragVehicleAction, DragVehicleArgs, Placement};

use crate::env::{RideSimulation, SimulationEvents};

/// Defines how a concrete action mutates the simulation.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Name the action is registered under with the host.
    const NAME: &'static str;

    /// Applies the action to the simulation, signalling observers of any
    /// visual change through `events`.
    fn apply(
        &self,
        simulation: &mut dyn RideSimulation,
        events: &mut dyn SimulationEvents,
    ) -> Result<Self::Result, Self::Error>;
}
