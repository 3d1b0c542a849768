//! Traits describing the host game the editor runs inside.
//!
//! Oracles expose map tile elements, track iterators, the simulation clock and
//! the network mode. The [`Env`] aggregate bundles the read-only ones so the
//! resolver and the drag tool can reach everything they need without coupling
//! to a concrete host. Mutable simulation access lives in [`RideSimulation`].
mod host;
mod map;
mod simulation;
mod snapshot;
mod track;

pub use host::{ClockOracle, FixedHost, NetworkOracle};
pub use map::{TileElement, TileElementKind, TileOracle};
pub use simulation::{RideCar, RideSimulation, SimulationEvents};
pub use snapshot::{ElementSnapshot, MapSnapshot};
pub use track::{TrackIteratorPosition, TrackOracle};

/// Aggregates the read-only oracles required by the resolver and drag tool.
pub struct Env<'a, M, T, C, N>
where
    M: TileOracle + ?Sized,
    T: TrackOracle + ?Sized,
    C: ClockOracle + ?Sized,
    N: NetworkOracle + ?Sized,
{
    tiles: &'a M,
    tracks: &'a T,
    clock: &'a C,
    network: &'a N,
}

pub type DragEnv<'a> = Env<
    'a,
    dyn TileOracle + 'a,
    dyn TrackOracle + 'a,
    dyn ClockOracle + 'a,
    dyn NetworkOracle + 'a,
>;

impl<'a, M, T, C, N> Env<'a, M, T, C, N>
where
    M: TileOracle + ?Sized,
    T: TrackOracle + ?Sized,
    C: ClockOracle + ?Sized,
    N: NetworkOracle + ?Sized,
{
    pub fn new(tiles: &'a M, tracks: &'a T, clock: &'a C, network: &'a N) -> Self {
        Self {
            tiles,
            tracks,
            clock,
            network,
        }
    }

    pub fn tiles(&self) -> &'a M {
        self.tiles
    }

    pub fn tracks(&self) -> &'a T {
        self.tracks
    }

    pub fn clock(&self) -> &'a C {
        self.clock
    }

    pub fn network(&self) -> &'a N {
        self.network
    }
}

impl<M, T, C, N> Clone for Env<'_, M, T, C, N>
where
    M: TileOracle + ?Sized,
    T: TrackOracle + ?Sized,
    C: ClockOracle + ?Sized,
    N: NetworkOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, T, C, N> Copy for Env<'_, M, T, C, N>
where
    M: TileOracle + ?Sized,
    T: TrackOracle + ?Sized,
    C: ClockOracle + ?Sized,
    N: NetworkOracle + ?Sized,
{
}

impl<'a, M, T, C, N> Env<'a, M, T, C, N>
where
    M: TileOracle + 'a,
    T: TrackOracle + 'a,
    C: ClockOracle + 'a,
    N: NetworkOracle + 'a,
{
    /// Converts this environment into a trait-object based [`DragEnv`].
    pub fn as_drag_env(&self) -> DragEnv<'a> {
        let tiles: &'a dyn TileOracle = self.tiles;
        let tracks: &'a dyn TrackOracle = self.tracks;
        let clock: &'a dyn ClockOracle = self.clock;
        let network: &'a dyn NetworkOracle = self.network;
        Env::new(tiles, tracks, clock, network)
    }
}
