use crate::board::Board;
use crate::error::Error;
use crate::events::InputHandler;
use crate::grid::Grid;

/// Life engine phase. Editing accepts cell toggles; pressing the origin
/// cell moves to Running, which only ends when the population dies out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Running,
    Halted,
}

/// Conway's Game of Life on a toroidal grid, rendered as LED changes.
///
/// Double-buffered: two equally sized grids plus an index saying which is
/// current. Each step is computed entirely from the previous generation's
/// buffer, then the index flips; a read never observes a partial write.
#[derive(Debug)]
pub struct LifeEngine<B: Board> {
    board: B,
    worlds: [Grid; 2],
    active: usize,
    phase: Phase,
    generation: u64,
}

impl<B: Board> LifeEngine<B> {
    /// Build an engine over a board, clearing its display.
    /// Fails if the board reports a zero-sized or sub-3x3 grid.
    pub fn new(mut board: B) -> Result<Self, Error> {
        let rows = board.rows();
        let cols = board.cols();
        validate_dimensions(rows, cols)?;
        board.set_all(false);
        Ok(LifeEngine {
            board,
            worlds: [Grid::new(rows, cols), Grid::new(rows, cols)],
            active: 0,
            phase: Phase::Editing,
            generation: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rows(&self) -> i32 {
        self.worlds[0].rows
    }

    pub fn cols(&self) -> i32 {
        self.worlds[0].cols
    }

    /// The current generation's grid.
    pub fn grid(&self) -> &Grid {
        &self.worlds[self.active]
    }

    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.grid().get(x, y) != 0
    }

    pub fn population(&self) -> usize {
        self.grid().live_count()
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    /// Flip one cell while editing. Ignored once running.
    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        if self.phase != Phase::Editing {
            return;
        }
        let alive = self.worlds[self.active].get(x, y) != 0;
        let next = if alive { 0 } else { 1 };
        self.worlds[self.active].set(x, y, next);
        let (wx, wy) = self.worlds[self.active].wrap(x, y);
        self.board.set_cell(wx, wy, next != 0);
    }

    /// Kill every cell and clear the display. Editing only.
    pub fn clear(&mut self) {
        if self.phase != Phase::Editing {
            return;
        }
        self.worlds[self.active].clear();
        self.board.set_all(false);
    }

    /// Leave editing; ticks advance generations from here on.
    pub fn start(&mut self) {
        if self.phase == Phase::Editing {
            self.phase = Phase::Running;
        }
    }

    /// Advance exactly one generation (no-op unless running).
    ///
    /// Full recomputation: every cell's eight toroidal neighbors are
    /// counted in the previous buffer, B3/S23 decides the next state,
    /// and one display update is emitted per cell that changed.
    pub fn step(&mut self) {
        if self.phase != Phase::Running {
            return;
        }

        let scratch = 1 - self.active;
        let (lo, hi) = self.worlds.split_at_mut(1);
        let (cur, next) = if self.active == 0 {
            (&lo[0], &mut hi[0])
        } else {
            (&hi[0], &mut lo[0])
        };

        for y in 0..cur.rows {
            for x in 0..cur.cols {
                let nn = count_neighbors(cur, x, y);
                let live = cur.get(x, y) != 0;
                let survives = matches!((live, nn), (true, 2) | (true, 3) | (false, 3));
                next.set(x, y, if survives { 1 } else { 0 });
            }
        }

        for y in 0..self.worlds[0].rows {
            for x in 0..self.worlds[0].cols {
                let before = self.worlds[self.active].get(x, y) != 0;
                let after = self.worlds[scratch].get(x, y) != 0;
                if before != after {
                    self.board.set_cell(x, y, after);
                }
            }
        }

        self.active = scratch;
        self.generation += 1;

        if self.worlds[self.active].live_count() == 0 {
            self.phase = Phase::Halted;
        }
    }
}

impl<B: Board> InputHandler for LifeEngine<B> {
    fn on_tick(&mut self) {
        self.step();
    }

    /// Origin press starts the simulation; other presses toggle cells
    /// while editing and are ignored afterwards.
    fn on_press(&mut self, x: i32, y: i32) {
        if self.phase != Phase::Editing {
            return;
        }
        if x == 0 && y == 0 {
            self.start();
        } else {
            self.toggle_cell(x, y);
        }
    }
}

/// Live cells among the eight toroidal neighbors of (x, y).
fn count_neighbors(grid: &Grid, x: i32, y: i32) -> u32 {
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            count += grid.get(x + dx, y + dy) as u32;
        }
    }
    count
}

fn validate_dimensions(rows: i32, cols: i32) -> Result<(), Error> {
    if rows <= 0 || cols <= 0 {
        return Err(Error::ZeroDimension { rows, cols });
    }
    if rows < 3 || cols < 3 {
        return Err(Error::GridTooSmall { rows, cols });
    }
    Ok(())
}

/// The incremental-counter Life strategy.
///
/// Instead of recounting neighbors every generation, each cell carries a
/// live-neighbor count that toggles and flips adjust by ±1 across the
/// eight toroidal neighbors. The step rule table is keyed on that count:
/// 3 births a dead cell, 2 changes nothing, every other count kills a
/// live cell. Must stay generation-for-generation identical to
/// [`LifeEngine`]; the integration tests hold it to that.
pub struct IncrementalLife {
    alive: Grid,
    neighbors: Vec<u8>,
    pending: Vec<bool>,
}

impl IncrementalLife {
    pub fn new(rows: i32, cols: i32) -> Result<Self, Error> {
        validate_dimensions(rows, cols)?;
        let size = (rows * cols) as usize;
        Ok(IncrementalLife {
            alive: Grid::new(rows, cols),
            neighbors: vec![0; size],
            pending: vec![false; size],
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.alive
    }

    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.alive.get(x, y) != 0
    }

    /// Flip one cell, keeping all eight neighbor counts consistent.
    pub fn toggle(&mut self, x: i32, y: i32) {
        if self.alive.get(x, y) != 0 {
            self.alive.set(x, y, 0);
            self.adjust_neighbors(x, y, -1);
        } else {
            self.alive.set(x, y, 1);
            self.adjust_neighbors(x, y, 1);
        }
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        // Decide every flip from the pre-step counts before applying any,
        // so the generation is computed from one consistent snapshot.
        for y in 0..self.alive.rows {
            for x in 0..self.alive.cols {
                let id = self.alive.index(x, y);
                let live = self.alive.cells[id] != 0;
                self.pending[id] = match self.neighbors[id] {
                    3 => !live,
                    2 => false,
                    _ => live,
                };
            }
        }

        for y in 0..self.alive.rows {
            for x in 0..self.alive.cols {
                let id = self.alive.index(x, y);
                if self.pending[id] {
                    self.pending[id] = false;
                    self.toggle(x, y);
                }
            }
        }
    }

    fn adjust_neighbors(&mut self, x: i32, y: i32, delta: i8) {
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let id = self.alive.index(x + dx, y + dy);
                self.neighbors[id] = (self.neighbors[id] as i8 + delta) as u8;
            }
        }
    }
}
