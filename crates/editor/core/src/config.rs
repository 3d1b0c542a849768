/// Map geometry constants and tunable parameters used by the vehicle dragger.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditorConfig {
    /// Move events are only resolved on ticks divisible by this interval while
    /// a multiplayer session is active.
    pub throttle_interval: u64,
}

impl EditorConfig {
    // ===== map geometry =====
    /// Edge length of a map tile in map units.
    pub const TILE_SIZE: i32 = 32;
    /// Offset from a tile corner to its center.
    pub const TILE_CENTER_OFFSET: i32 = Self::TILE_SIZE / 2;
    /// Height added when a vehicle is dropped on sloped terrain.
    pub const SLOPE_HEIGHT_BONUS: i32 = 8;

    // ===== vehicle silhouette correction =====
    /// Tab heights below this value are treated as fully inverted vehicles.
    pub const INVERTED_TAB_THRESHOLD: i8 = -10;
    /// Height added for fully inverted vehicles.
    pub const INVERTED_HEIGHT_BONUS: i32 = 29;

    // ===== track placement =====
    /// Progress a car is moved to when it is dropped on track without an
    /// explicit progress, settling it on the holding position of the piece.
    pub const HOLDING_TRACK_PROGRESS: u16 = 1;

    // ===== runtime-tunable defaults =====
    /// Every 5th tick ≈ 8 updates per second at the native 40 ticks per second.
    pub const DEFAULT_THROTTLE_INTERVAL: u64 = 5;

    pub fn new() -> Self {
        Self {
            throttle_interval: Self::DEFAULT_THROTTLE_INTERVAL,
        }
    }

    /// Creates a configuration with a custom throttle interval (clamped to at least 1).
    pub fn with_throttle_interval(throttle_interval: u64) -> Self {
        Self {
            throttle_interval: throttle_interval.max(1),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}
