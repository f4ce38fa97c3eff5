//! Life display lifecycle
//!
//! Owns the double-buffered field and drives it one tick at a time:
//!
//! ```text
//! commands ──→ Scheduler ──→ LifeController::tick
//!                               │  render next → current (led-matrix)
//!                               │  StalenessMonitor::observe
//!                               │  advance (life-core)
//!                               ▼
//!                          pause for the frame delay
//! ```
//!
//! # Example
//!
//! ```ignore
//! let config = LifeConfig::load()?;
//! let layout = config.layout()?;
//! let mut life = LifeController::new(&config, FrameBuffer::new(&layout), SeededRandom::default(), SystemClock)?;
//! life.initialize(true)?;
//!
//! let (tx, rx) = crossbeam_channel::unbounded();
//! tx.send(Command::SetDelay(250))?;
//! Scheduler::new(life, rx).run()?;
//! ```

mod clock;
mod command;
mod config;
mod controller;
mod diagnostic;
mod error;
mod random;
mod scheduler;
mod staleness;

pub use clock::{Clock, SystemClock};
pub use command::{Command, Control};
pub use config::{
    CONFIG_PATH_VAR, DELAY_VAR, LifeConfig, SEED_VAR, SELF_TEST_VAR, STALE_LIMIT_VAR,
};
pub use controller::{Frame, LifeController, TickOutcome};
pub use diagnostic::{Diagnostic, run_dot, run_sweep};
pub use error::{ConfigError, LifecycleError, LifecycleResult};
pub use random::{RandomSource, SeededRandom};
pub use scheduler::{RunExit, Scheduler};
pub use staleness::{DEFAULT_STALE_LIMIT, StalenessMonitor};
