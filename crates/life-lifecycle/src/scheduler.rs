//! Tick loop with a minimum inter-tick interval.
//!
//! Commands are drained only between ticks, so every tick sees a consistent
//! delay and diagnostic flag.

use std::time::Instant;

use crossbeam_channel::{Receiver, TryRecvError};
use led_matrix::PixelSink;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::command::{Command, Control};
use crate::controller::{LifeController, TickOutcome};
use crate::error::LifecycleResult;
use crate::random::RandomSource;

/// Why [`Scheduler::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunExit {
    /// A [`Command::Shutdown`] arrived.
    Shutdown,
    /// A [`Command::HardReset`] arrived; the caller should rebuild everything.
    Restart,
    /// The tick budget given to [`Scheduler::run_ticks`] ran out.
    TickLimit,
}

pub struct Scheduler<D, R, C> {
    controller: LifeController<D, R, C>,
    commands: Receiver<Command>,
    connected: bool,
    ticks: u64,
}

impl<D, R, C> Scheduler<D, R, C>
where
    D: PixelSink,
    R: RandomSource,
    C: Clock,
{
    pub fn new(controller: LifeController<D, R, C>, commands: Receiver<Command>) -> Self {
        Self {
            controller,
            commands,
            connected: true,
            ticks: 0,
        }
    }

    /// Tick until shut down or restarted.
    pub fn run(&mut self) -> LifecycleResult<RunExit> {
        self.run_inner(None)
    }

    /// Tick at most `limit` more times.
    pub fn run_ticks(&mut self, limit: u64) -> LifecycleResult<RunExit> {
        self.run_inner(Some(self.ticks + limit))
    }

    fn run_inner(&mut self, until: Option<u64>) -> LifecycleResult<RunExit> {
        loop {
            if let Some(exit) = self.drain_commands()? {
                info!(?exit, "scheduler stopping");
                return Ok(exit);
            }
            if until.is_some_and(|until| self.ticks >= until) {
                return Ok(RunExit::TickLimit);
            }

            let started = Instant::now();
            let outcome = self.controller.tick()?;
            self.ticks += 1;

            if let TickOutcome::Generation(frame) = outcome {
                if frame.reseeded {
                    info!(tick = self.ticks, alive = frame.alive, "reseeded stale field");
                }
                if let Some(remaining) = frame.delay.checked_sub(started.elapsed()) {
                    self.controller.clock_mut().pause(remaining);
                }
            }
        }
    }

    fn drain_commands(&mut self) -> LifecycleResult<Option<RunExit>> {
        while self.connected {
            let command = match self.commands.try_recv() {
                Ok(command) => command,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // No more commands can arrive; keep ticking headless.
                    warn!("command channel closed");
                    self.connected = false;
                    break;
                }
            };

            match self.controller.apply(command)? {
                Control::Continue => debug!(?command, "command applied"),
                Control::Restart => return Ok(Some(RunExit::Restart)),
                Control::Shutdown => return Ok(Some(RunExit::Shutdown)),
            }
        }
        Ok(None)
    }

    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    pub const fn controller(&self) -> &LifeController<D, R, C> {
        &self.controller
    }

    pub fn into_controller(self) -> LifeController<D, R, C> {
        self.controller
    }
}
