/// Requests from the configuration surface, applied between ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replace the frame delay, in milliseconds.
    SetDelay(u64),
    /// Restart the field, seeding first when a seed is given.
    Reseed(Option<u64>),
    /// Run the row/column sweep on the next tick.
    RequestTest,
    /// Run the single-dot sweep on the next tick.
    RunDot,
    /// Restart the whole device.
    HardReset,
    /// Stop the tick loop.
    Shutdown,
}

/// What the caller should do after a command is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Restart,
    Shutdown,
}
