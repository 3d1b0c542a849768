use std::fmt;

/// Identifier of a single car (vehicle entity) in the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarId(pub u32);

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display metadata of a ride vehicle type that matters for placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleType {
    /// Vertical offset of the vehicle's tab icon. Negative for vehicles that
    /// hang below the track.
    pub tab_height: i8,
}

impl VehicleType {
    pub const fn new(tab_height: i8) -> Self {
        Self { tab_height }
    }
}
