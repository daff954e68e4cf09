use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::average::RunningAverage;
use crate::board::Board;
use crate::error::Error;
use crate::events::InputHandler;
use crate::grid::Grid;
use crate::round_log::{Outcome, RoundLog};

/// Percolation engine phase. Cycles forever:
/// Generate -> Propagate -> (Victory | Failure) -> Generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Generate,
    Propagate,
    Victory,
    Failure,
}

/// Flow-spreading simulation with adaptive density.
///
/// Each round scatters lit cells over the grid at the current threshold
/// density, then floods from the left edge through the unlit cells, one
/// frontier expansion per tick. Reaching the right edge is a victory,
/// stalling is a failure, and either outcome feeds the running average
/// that sets the next round's density. Lit cells and flooded cells share
/// one marking: neither may be entered again.
///
/// Propagation is 4-directional with real walls on every edge; the
/// toroidal seam is never crossed.
#[derive(Debug)]
pub struct PercolationEngine<B: Board> {
    board: B,
    world: Grid,
    frontier: HashSet<(i32, i32)>,
    threshold: RunningAverage,
    rng: StdRng,
    phase: Phase,
    delay_ms: u64,
    round: u64,
    round_ticks: u64,
    round_density: f64,
    log: RoundLog,
}

impl<B: Board> PercolationEngine<B> {
    /// Build an engine over a board with an entropy-seeded generator.
    pub fn new(board: B, threshold: RunningAverage) -> Result<Self, Error> {
        Self::with_rng(board, threshold, StdRng::from_entropy())
    }

    /// Build with a caller-supplied generator; tests seed this.
    pub fn with_rng(mut board: B, threshold: RunningAverage, rng: StdRng) -> Result<Self, Error> {
        let rows = board.rows();
        let cols = board.cols();
        if rows <= 0 || cols <= 0 {
            return Err(Error::ZeroDimension { rows, cols });
        }
        if rows < 3 || cols < 3 {
            return Err(Error::GridTooSmall { rows, cols });
        }
        board.set_all(false);
        Ok(PercolationEngine {
            board,
            world: Grid::new(rows, cols),
            frontier: HashSet::new(),
            threshold,
            rng,
            phase: Phase::Generate,
            delay_ms: 100,
            round: 0,
            round_ticks: 0,
            round_density: 0.0,
            log: RoundLog::new(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn threshold(&self) -> &RunningAverage {
        &self.threshold
    }

    /// Inter-tick delay requested by the last button press.
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Completed rounds so far.
    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn log(&self) -> &RoundLog {
        &self.log
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    /// Whether a cell is marked (scattered wall or already flooded).
    pub fn is_marked(&self, x: i32, y: i32) -> bool {
        self.world.get(x, y) != 0
    }

    /// Advance one tick: generate a round, run one propagation round, or
    /// rest for one tick on an outcome before regenerating.
    pub fn step(&mut self) {
        match self.phase {
            Phase::Generate => {
                self.generate();
                self.phase = Phase::Propagate;
            }
            Phase::Propagate => self.propagate(),
            Phase::Victory | Phase::Failure => {
                self.phase = Phase::Generate;
            }
        }
    }

    /// Scatter marked cells at the current density, then seed and light
    /// the flood at every open cell of column 0.
    fn generate(&mut self) {
        self.board.set_all(false);
        self.world.clear();
        self.round_ticks = 0;
        self.round_density = self.threshold.value();

        for y in 0..self.world.rows {
            for x in 0..self.world.cols {
                if self.rng.gen::<f64>() < self.round_density {
                    self.world.set(x, y, 1);
                    self.board.set_cell(x, y, true);
                }
            }
        }

        self.seed_flood();
    }

    /// Stage a hand-built round instead of sampling one: mark exactly the
    /// given cells, seed the flood, and enter Propagate.
    pub fn load_round(&mut self, walls: &[(i32, i32)]) {
        self.board.set_all(false);
        self.world.clear();
        self.round_ticks = 0;
        self.round_density = self.threshold.value();

        for &(x, y) in walls {
            if self.world.in_bounds(x, y) {
                self.world.set(x, y, 1);
                self.board.set_cell(x, y, true);
            }
        }

        self.seed_flood();
        self.phase = Phase::Propagate;
    }

    /// Mark and light every open cell of column 0 as the initial frontier.
    fn seed_flood(&mut self) {
        self.frontier.clear();
        for y in 0..self.world.rows {
            if self.world.get(0, y) == 0 {
                self.world.set(0, y, 1);
                self.board.set_cell(0, y, true);
                self.frontier.insert((0, y));
            }
        }
    }

    /// One flood round: expand the frontier into open 4-neighbors, mark
    /// and light what it reaches, then settle the outcome if the flood
    /// touched the last column or died out.
    fn propagate(&mut self) {
        self.round_ticks += 1;

        let mut next: HashSet<(i32, i32)> = HashSet::new();
        for &(x, y) in &self.frontier {
            for (nx, ny) in [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)] {
                if self.world.in_bounds(nx, ny) && self.world.get(nx, ny) == 0 {
                    next.insert((nx, ny));
                }
            }
        }

        let mut reached_end = false;
        for &(x, y) in &next {
            self.world.set(x, y, 1);
            self.board.set_cell(x, y, true);
            if x == self.world.cols - 1 {
                reached_end = true;
            }
        }

        if reached_end {
            self.finish_round(Phase::Victory, 1.0);
        } else if next.is_empty() {
            self.finish_round(Phase::Failure, 0.0);
        } else {
            self.frontier = next;
        }
    }

    fn finish_round(&mut self, phase: Phase, outcome: f64) {
        self.phase = phase;
        self.threshold.update(outcome);
        self.round += 1;
        let recorded = if outcome > 0.0 {
            Outcome::Victory
        } else {
            Outcome::Failure
        };
        self.log
            .record(self.round, self.round_density, recorded, self.round_ticks);
        self.frontier.clear();
    }
}

impl<B: Board> InputHandler for PercolationEngine<B> {
    fn on_tick(&mut self) {
        self.step();
    }

    /// A press retunes the display: row picks the brightness, column
    /// picks the inter-tick delay.
    fn on_press(&mut self, x: i32, y: i32) {
        if !self.world.in_bounds(x, y) {
            return;
        }
        let brightness = (16 * y / self.world.rows) as u8;
        self.board.set_brightness(brightness);
        self.delay_ms = 25 * (x as u64 + 1);
    }
}
