//! End-to-end lifecycle scenarios

use std::time::Duration;

use led_matrix::{FrameBuffer, TileLayout};
use life_core::Grid;
use life_lifecycle::{
    Clock, Command, Diagnostic, Frame, LifeConfig, LifeController, RandomSource, TickOutcome,
};
use pretty_assertions::assert_eq;

// ============================================================================
// Test doubles
// ============================================================================

/// Replays a fixed bit pattern, cycling when it runs out.
struct ScriptedRandom {
    script: Vec<bool>,
    pos: usize,
    seeds: Vec<u64>,
}

impl ScriptedRandom {
    fn from_grid(grid: &Grid) -> Self {
        let mut script = Vec::with_capacity(grid.rows() * grid.cols());
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                script.push(grid.is_alive(row, col));
            }
        }
        Self {
            script,
            pos: 0,
            seeds: Vec::new(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn seed(&mut self, seed: u64) {
        self.seeds.push(seed);
        self.pos = 0;
    }

    fn draw_bit(&mut self) -> bool {
        let bit = self.script[self.pos % self.script.len()];
        self.pos += 1;
        bit
    }
}

struct ManualClock {
    epoch: u64,
    pauses: Vec<Duration>,
}

impl Clock for ManualClock {
    fn epoch_seconds(&self) -> u64 {
        self.epoch
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

type Controller = LifeController<FrameBuffer, ScriptedRandom, ManualClock>;

fn controller(config: &LifeConfig, seed_field: &Grid) -> Controller {
    let layout = config.layout().unwrap();
    LifeController::new(
        config,
        FrameBuffer::new(&layout),
        ScriptedRandom::from_grid(seed_field),
        ManualClock {
            epoch: 1_600_000_000,
            pauses: Vec::new(),
        },
    )
    .unwrap()
}

fn generation(outcome: TickOutcome) -> Frame {
    match outcome {
        TickOutcome::Generation(frame) => frame,
        TickOutcome::Diagnostic(kind) => panic!("unexpected diagnostic {kind:?}"),
    }
}

/// Logical cells lit on the device surface.
fn lit_cells(layout: &TileLayout, frame: &FrameBuffer) -> Grid {
    let mut grid = Grid::new(layout.grid_rows(), layout.grid_cols());
    for pos in frame.lit_pixels() {
        let (row, col) = layout.map_to_logical(pos).unwrap();
        grid.set(row, col, true);
    }
    grid
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn glider_translates_diagonally_in_four_ticks() {
    let config = LifeConfig {
        tile_height: 2,
        tile_width: 2,
        tiles_across: 2,
        tiles_down: 2,
        self_test_on_start: false,
        ..LifeConfig::default()
    };
    let glider = Grid::parse(&[".#..", "..#.", "###.", "...."]).unwrap();
    let moved = Grid::parse(&["....", "..#.", "...#", ".###"]).unwrap();

    let mut life = controller(&config, &glider);
    life.apply(Command::Reseed(Some(7))).unwrap();
    assert_eq!(life.upcoming(), &glider);

    for tick in 1..=4 {
        let frame = generation(life.tick().unwrap());
        assert_eq!(frame.alive, 5, "tick {tick}");
        assert_eq!(frame.generation, tick);
        assert!(!frame.reseeded);
    }
    assert_eq!(life.upcoming(), &moved);

    // One more tick puts the translated glider on the panel.
    let frame = generation(life.tick().unwrap());
    assert_eq!(frame.alive, 5);
    assert_eq!(life.current(), &moved);
    assert_eq!(lit_cells(life.layout(), life.display()), moved);
}

#[test]
fn still_life_reseeds_after_stale_limit() {
    let config = LifeConfig {
        self_test_on_start: false,
        ..LifeConfig::default()
    };
    let layout = config.layout().unwrap();
    let mut block = Grid::new(layout.grid_rows(), layout.grid_cols());
    for (row, col) in [(10, 10), (10, 11), (11, 10), (11, 11)] {
        block.set(row, col, true);
    }

    let mut life = controller(&config, &block);
    life.initialize(false).unwrap();

    let mut reseeded_at = Vec::new();
    for tick in 1..=110 {
        let frame = generation(life.tick().unwrap());
        assert_eq!(frame.alive, 4);
        if frame.reseeded {
            reseeded_at.push(tick);
        }
    }

    // First tick moves the reference count off zero, then 50 repeats go stale.
    assert_eq!(reseeded_at, vec![52, 103]);
    assert_eq!(lit_cells(&layout, life.display()), block);
}

#[test]
fn oscillator_with_flat_population_also_reseeds() {
    let config = LifeConfig {
        tile_height: 5,
        tile_width: 5,
        tiles_across: 1,
        tiles_down: 1,
        stale_limit: 4,
        self_test_on_start: false,
        ..LifeConfig::default()
    };
    let blinker = Grid::parse(&[".....", ".....", ".###.", ".....", "....."]).unwrap();

    let mut life = controller(&config, &blinker);
    life.initialize(false).unwrap();

    let frames: Vec<_> = (0..6).map(|_| generation(life.tick().unwrap())).collect();

    assert!(frames.iter().all(|f| f.alive == 3));
    assert!(frames[4].stale);
    assert!(frames[5].reseeded);
}

#[test]
fn startup_sweep_runs_before_first_generation() {
    let config = LifeConfig {
        tile_height: 2,
        tile_width: 2,
        tiles_across: 2,
        tiles_down: 2,
        test_pause_ms: 100,
        ..LifeConfig::default()
    };
    let glider = Grid::parse(&[".#..", "..#.", "###.", "...."]).unwrap();

    let mut life = controller(&config, &glider);
    assert_eq!(life.pending_diagnostic(), Some(Diagnostic::Sweep));
    life.initialize(true).unwrap();

    assert_eq!(
        life.tick().unwrap(),
        TickOutcome::Diagnostic(Diagnostic::Sweep)
    );
    assert_eq!(life.display().lit_count(), 0);
    assert_eq!(life.clock_mut().pauses, vec![Duration::from_millis(100); 8]);

    let frame = generation(life.tick().unwrap());
    assert_eq!(frame.generation, 1);
    assert_eq!(life.current(), &glider);
}

#[test]
fn reseed_without_seed_continues_stream() {
    let config = LifeConfig {
        tile_height: 2,
        tile_width: 2,
        tiles_across: 2,
        tiles_down: 2,
        self_test_on_start: false,
        ..LifeConfig::default()
    };
    let glider = Grid::parse(&[".#..", "..#.", "###.", "...."]).unwrap();

    let mut life = controller(&config, &glider);
    life.initialize(true).unwrap();
    life.apply(Command::Reseed(None)).unwrap();
    life.apply(Command::Reseed(Some(42))).unwrap();

    // Wall-time seed, then the explicit one; the bare reseed seeds nothing.
    assert_eq!(life.random().seeds, vec![1_600_000_000, 42]);
}
