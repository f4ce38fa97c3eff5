//! Owner of the double buffer and everything that governs its lifecycle.
//!
//! # Tick
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  diagnostic pending? ── yes ─→ run it, clear it, return  │
//! │  stale?              ── yes ─→ reseed from wall time     │
//! │  commit next → current + display, count live cells       │
//! │  observe live count                                      │
//! │  advance current → next                                  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The controller never sleeps between generations itself; the returned
//! [`Frame::delay`] is the minimum interval the scheduler must keep.

use std::time::Duration;

use led_matrix::{PixelSink, TileLayout};
use life_core::{Grid, advance_into};
use tracing::{debug, info};

use crate::clock::Clock;
use crate::command::{Command, Control};
use crate::config::LifeConfig;
use crate::diagnostic::{self, Diagnostic};
use crate::error::LifecycleResult;
use crate::random::RandomSource;
use crate::staleness::StalenessMonitor;

/// A rendered generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Generations committed since the field was last seeded, this one included.
    pub generation: u64,
    /// Live cells in the committed generation.
    pub alive: usize,
    /// Whether the field was reseeded at the start of this tick.
    pub reseeded: bool,
    /// Whether the live count has now been flat for the stale limit.
    pub stale: bool,
    /// Frame delay in force when the tick finished.
    pub delay: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// A diagnostic ran; simulation state is untouched.
    Diagnostic(Diagnostic),
    Generation(Frame),
}

pub struct LifeController<D, R, C> {
    layout: TileLayout,
    current: Grid,
    next: Grid,
    staleness: StalenessMonitor,
    frame_delay: Duration,
    test_pause: Duration,
    dot_pause: Duration,
    pending: Option<Diagnostic>,
    generation: u64,
    display: D,
    random: R,
    clock: C,
}

impl<D, R, C> LifeController<D, R, C>
where
    D: PixelSink,
    R: RandomSource,
    C: Clock,
{
    /// Build an idle controller; the field stays empty until [`Self::initialize`].
    pub fn new(config: &LifeConfig, display: D, random: R, clock: C) -> LifecycleResult<Self> {
        config.validate()?;
        let layout = config.layout()?;
        let (rows, cols) = (layout.grid_rows(), layout.grid_cols());

        Ok(Self {
            layout,
            current: Grid::new(rows, cols),
            next: Grid::new(rows, cols),
            staleness: StalenessMonitor::new(config.stale_limit),
            frame_delay: config.frame_delay(),
            test_pause: config.test_pause(),
            dot_pause: config.dot_pause(),
            pending: config.self_test_on_start.then_some(Diagnostic::Sweep),
            generation: 0,
            display,
            random,
            clock,
        })
    }

    /// Fill `next` with fair coin flips and show it.
    ///
    /// With `randomize` the source is first seeded from wall time; otherwise
    /// the current random stream is used as-is.
    pub fn initialize(&mut self, randomize: bool) -> LifecycleResult<()> {
        if randomize {
            let seed = self.clock.epoch_seconds();
            self.random.seed(seed);
            debug!(seed, "seeded from wall time");
        }

        for row in 0..self.layout.grid_rows() {
            for col in 0..self.layout.grid_cols() {
                let alive = self.random.draw_bit();
                self.next.set(row, col, alive);
            }
        }
        led_matrix::show(&self.layout, &self.next, &mut self.display)?;

        self.staleness.reset();
        self.generation = 0;
        info!(alive = self.next.count_alive(), "field initialized");
        Ok(())
    }

    /// Seed with `seed` when given, then reinitialize without wall-time entropy.
    pub fn reseed(&mut self, seed: Option<u64>) -> LifecycleResult<()> {
        if let Some(seed) = seed {
            self.random.seed(seed);
        }
        self.initialize(false)
    }

    /// Run one tick.
    pub fn tick(&mut self) -> LifecycleResult<TickOutcome> {
        if let Some(kind) = self.pending.take() {
            self.run_diagnostic(kind)?;
            return Ok(TickOutcome::Diagnostic(kind));
        }

        let reseeded = self.staleness.check_stale();
        if reseeded {
            info!(
                last_alive = self.staleness.last_alive(),
                generation = self.generation,
                "field stale, reseeding"
            );
            self.initialize(true)?;
        }

        let alive =
            led_matrix::commit(&self.layout, &self.next, &mut self.current, &mut self.display)?;
        let stale = self.staleness.observe(alive);
        advance_into(&self.current, &mut self.next);
        self.generation += 1;

        debug!(generation = self.generation, alive, "generation");
        Ok(TickOutcome::Generation(Frame {
            generation: self.generation,
            alive,
            reseeded,
            stale,
            delay: self.frame_delay,
        }))
    }

    /// Apply an external command. Only called between ticks.
    pub fn apply(&mut self, command: Command) -> LifecycleResult<Control> {
        debug!(?command, "applying command");
        match command {
            Command::SetDelay(ms) => {
                self.frame_delay = Duration::from_millis(ms);
                info!(delay_ms = ms, "frame delay changed");
            }
            Command::Reseed(seed) => {
                info!(?seed, "reseed requested");
                self.reseed(seed)?;
            }
            Command::RequestTest => self.pending = Some(Diagnostic::Sweep),
            Command::RunDot => self.pending = Some(Diagnostic::Dot),
            Command::HardReset => return Ok(Control::Restart),
            Command::Shutdown => return Ok(Control::Shutdown),
        }
        Ok(Control::Continue)
    }

    fn run_diagnostic(&mut self, kind: Diagnostic) -> LifecycleResult<()> {
        info!(?kind, "running diagnostic");
        match kind {
            Diagnostic::Sweep => diagnostic::run_sweep(
                &self.layout,
                &mut self.display,
                &mut self.clock,
                self.test_pause,
            )?,
            Diagnostic::Dot => diagnostic::run_dot(
                &self.layout,
                &mut self.display,
                &mut self.clock,
                self.dot_pause,
            )?,
        }
        Ok(())
    }
}

impl<D, R, C> LifeController<D, R, C> {
    pub const fn layout(&self) -> &TileLayout {
        &self.layout
    }

    /// The committed, displayed generation.
    pub const fn current(&self) -> &Grid {
        &self.current
    }

    /// The generation the next tick will display.
    pub const fn upcoming(&self) -> &Grid {
        &self.next
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.current.is_alive(row, col)
    }

    pub const fn staleness(&self) -> &StalenessMonitor {
        &self.staleness
    }

    pub const fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    pub const fn pending_diagnostic(&self) -> Option<Diagnostic> {
        self.pending
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn display(&self) -> &D {
        &self.display
    }

    pub const fn random(&self) -> &R {
        &self.random
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
