/// Simulation clock.
pub trait ClockOracle {
    /// Number of simulation ticks elapsed since the park was loaded.
    fn ticks_elapsed(&self) -> u64;
}

/// Network session information.
pub trait NetworkOracle {
    /// Returns true while connected to (or hosting) a multiplayer session.
    fn is_multiplayer(&self) -> bool;
}

/// Clock and network state pinned to fixed values.
///
/// Useful for offline tooling and tests where the host has no real clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedHost {
    pub ticks: u64,
    pub multiplayer: bool,
}

impl FixedHost {
    pub const fn new(ticks: u64, multiplayer: bool) -> Self {
        Self { ticks, multiplayer }
    }
}

impl ClockOracle for FixedHost {
    fn ticks_elapsed(&self) -> u64 {
        self.ticks
    }
}

impl NetworkOracle for FixedHost {
    fn is_multiplayer(&self) -> bool {
        self.multiplayer
    }
}
