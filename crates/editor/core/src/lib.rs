//! Host-agnostic logic of the ride vehicle editor.
//!
//! `editor-core` defines the value types of the vehicle dragger, the oracle
//! traits through which it reads the host game, the pure position resolver,
//! and the replicated drag command. All authoritative car mutation flows
//! through [`action::DragVehicleAction`]; the interactive tool lives in
//! `editor-tool` and only depends on the types re-exported here.
pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod resolver;
pub mod state;

#[cfg(feature = "serde")]
pub use action::CodecError;
pub use action::{
    ActionTransition, DragOutcome, DragPosition, DragState, DragVehicleAction, DragVehicleArgs,
    Placement,
};
pub use config::EditorConfig;
pub use env::{
    ClockOracle, DragEnv, ElementSnapshot, Env, FixedHost, MapSnapshot, NetworkOracle, RideCar,
    RideSimulation, SimulationEvents, TileElement, TileElementKind, TileOracle,
    TrackIteratorPosition, TrackOracle,
};
pub use error::{EditorError, ErrorSeverity, NeverError};
pub use resolver::{DragCandidate, ToolHit, resolve_position, tab_height_correction};
pub use state::{
    CarId, CarState, CarTrackLocation, CoordsXY, CoordsXYZ, ParkState, TrackProgress,
    VehicleType, align_with_map, equal_coords,
};
