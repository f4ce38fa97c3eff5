use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Wall time for seeding and blocking pauses between frames.
pub trait Clock {
    /// Seconds since the Unix epoch, used as reseed entropy.
    fn epoch_seconds(&self) -> u64;

    /// Block for `duration`.
    fn pause(&mut self, duration: Duration);
}

/// The host's real clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn epoch_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |since| since.as_secs())
    }

    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}
