#![allow(dead_code)]

use monogrid::{Board, LifeEngine};

/// Display calls a board double has seen, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SetCell { x: i32, y: i32, on: bool },
    SetAll { on: bool },
    SetBrightness { level: u8 },
}

/// Board double that records every display call and tracks the LED
/// state, so tests can assert both what was shown and how often.
#[derive(Debug)]
pub struct RecordingBoard {
    rows: i32,
    cols: i32,
    lit: Vec<bool>,
    brightness: u8,
    pub events: Vec<Event>,
}

impl RecordingBoard {
    pub fn new(rows: i32, cols: i32) -> Self {
        RecordingBoard {
            rows,
            cols,
            lit: vec![false; (rows.max(0) * cols.max(0)) as usize],
            brightness: 15,
            events: Vec::new(),
        }
    }

    pub fn is_lit(&self, x: i32, y: i32) -> bool {
        self.lit[(y * self.cols + x) as usize]
    }

    pub fn lit_count(&self) -> usize {
        self.lit.iter().filter(|&&b| b).count()
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Number of per-cell display updates recorded since the last reset.
    pub fn set_cell_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::SetCell { .. }))
            .count()
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl Board for RecordingBoard {
    fn rows(&self) -> i32 {
        self.rows
    }

    fn cols(&self) -> i32 {
        self.cols
    }

    fn set_cell(&mut self, x: i32, y: i32, on: bool) {
        self.events.push(Event::SetCell { x, y, on });
        if x >= 0 && x < self.cols && y >= 0 && y < self.rows {
            self.lit[(y * self.cols + x) as usize] = on;
        }
    }

    fn set_all(&mut self, on: bool) {
        self.events.push(Event::SetAll { on });
        self.lit.fill(on);
    }

    fn set_brightness(&mut self, level: u8) {
        self.events.push(Event::SetBrightness { level });
        self.brightness = level;
    }
}

/// Build a running Life engine with the given cells alive.
pub fn running_life(rows: i32, cols: i32, live: &[(i32, i32)]) -> LifeEngine<RecordingBoard> {
    let mut engine = editing_life(rows, cols, live);
    engine.start();
    engine
}

/// Build a Life engine still in editing with the given cells alive.
pub fn editing_life(rows: i32, cols: i32, live: &[(i32, i32)]) -> LifeEngine<RecordingBoard> {
    let board = RecordingBoard::new(rows, cols);
    let mut engine = LifeEngine::new(board).expect("valid test dimensions");
    for &(x, y) in live {
        engine.toggle_cell(x, y);
    }
    engine
}

/// The set of live cells in the engine's current generation.
pub fn live_set<B: Board>(engine: &LifeEngine<B>) -> Vec<(i32, i32)> {
    let mut cells = Vec::new();
    for y in 0..engine.rows() {
        for x in 0..engine.cols() {
            if engine.is_alive(x, y) {
                cells.push((x, y));
            }
        }
    }
    cells
}
