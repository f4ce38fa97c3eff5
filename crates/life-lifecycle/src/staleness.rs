//! Stagnation detection from the live cell count.
//!
//! Only the population is tracked, so a constant-population oscillator (a
//! blinker, say) counts as stale just like a still life.

/// Consecutive unchanged generations before a reseed.
pub const DEFAULT_STALE_LIMIT: u32 = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StalenessMonitor {
    limit: u32,
    last_alive: usize,
    stale_iterations: u32,
}

impl Default for StalenessMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_STALE_LIMIT)
    }
}

impl StalenessMonitor {
    #[must_use]
    pub const fn new(limit: u32) -> Self {
        Self {
            limit,
            last_alive: 0,
            stale_iterations: 0,
        }
    }

    /// Record a generation's live count and report whether the field is now stale.
    pub fn observe(&mut self, alive: usize) -> bool {
        if alive == self.last_alive {
            self.stale_iterations += 1;
        } else {
            self.stale_iterations = 0;
        }
        self.last_alive = alive;
        self.check_stale()
    }

    pub const fn check_stale(&self) -> bool {
        self.stale_iterations >= self.limit
    }

    /// Forget all history, as after a reseed.
    pub fn reset(&mut self) {
        self.last_alive = 0;
        self.stale_iterations = 0;
    }

    pub const fn limit(&self) -> u32 {
        self.limit
    }

    pub const fn last_alive(&self) -> usize {
        self.last_alive
    }

    pub const fn stale_iterations(&self) -> u32 {
        self.stale_iterations
    }
}
