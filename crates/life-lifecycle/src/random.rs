use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng as _};

/// Externally seeded coin flips for field initialization.
pub trait RandomSource {
    fn seed(&mut self, seed: u64);

    /// A fair coin flip; `true` means the cell starts alive.
    fn draw_bit(&mut self) -> bool;
}

/// [`RandomSource`] backed by `StdRng`.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RandomSource for SeededRandom {
    fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn draw_bit(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn seed(&mut self, seed: u64) {
        (**self).seed(seed);
    }

    fn draw_bit(&mut self) -> bool {
        (**self).draw_bit()
    }
}
