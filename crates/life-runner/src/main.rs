//! LED life runner
//!
//! Emulates the tiled LED panel in the terminal and drives it with the
//! lifecycle scheduler. Configuration comes from `LED_LIFE_*` environment
//! variables and an optional JSON file (see `LifeConfig::load`).
//!
//! Commands (one per line on stdin):
//! - `delay <ms>` - Set the frame delay
//! - `seed [n]` - Restart the field
//! - `test` / `dot` - Run a diagnostic sweep
//! - `reset` - Restart the device
//! - `q` or `quit` - Quit
//! - `help` - Show help

mod input;
mod terminal;

use std::io::{self, Write};
use std::thread;

use crossbeam_channel::Receiver;
use life_lifecycle::{
    Command, LifeConfig, LifeController, RunExit, Scheduler, SeededRandom, SystemClock,
};
use tracing::info;

use crate::terminal::TerminalDisplay;

fn main() -> eyre::Result<()> {
    // Logs go to stderr; stdout belongs to the panel.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("life_runner=info".parse()?)
                .add_directive("life_lifecycle=info".parse()?),
        )
        .init();

    let config = LifeConfig::load()?;
    let layout = config.layout()?;
    info!(
        "Starting LED life on a {}x{} grid ({} tiles)",
        layout.grid_rows(),
        layout.grid_cols(),
        layout.tile_count()
    );

    let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded();
    thread::spawn(move || input::input_thread(io::stdin().lock(), cmd_tx));

    let mut display = TerminalDisplay::new(layout, io::stdout())?;
    display.run_restoring(|display| run_until_shutdown(&config, display, &cmd_rx))?;

    info!("Shutting down...");
    Ok(())
}

/// Drive the panel, rebuilding the controller on every hard reset.
fn run_until_shutdown<W: Write>(
    config: &LifeConfig,
    display: &mut TerminalDisplay<W>,
    commands: &Receiver<Command>,
) -> eyre::Result<()> {
    loop {
        let mut life =
            LifeController::new(config, &mut *display, SeededRandom::default(), SystemClock)?;
        match config.seed {
            Some(seed) => life.reseed(Some(seed))?,
            None => life.initialize(true)?,
        }

        match Scheduler::new(life, commands.clone()).run()? {
            RunExit::Restart => info!("Restarting..."),
            RunExit::Shutdown | RunExit::TickLimit => return Ok(()),
        }
    }
}
