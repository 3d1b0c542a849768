/// Tick gate bounding how often move events are resolved.
///
/// In multiplayer every accepted candidate becomes network traffic, so moves
/// are only resolved on ticks divisible by the interval. Outside multiplayer
/// the gate is always open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveThrottle {
    interval: u64,
    enabled: bool,
}

impl MoveThrottle {
    pub fn new(multiplayer: bool, interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            enabled: multiplayer,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns true if a move arriving on `tick` should be resolved.
    pub fn allows(&self, tick: u64) -> bool {
        !self.enabled || tick % self.interval == 0
    }
}
