use serde::{Deserialize, Serialize};
use std::fs;

use crate::board::Board;
use crate::error::Error;
use crate::life::LifeEngine;

/// A saved Life board: dimensions plus the set of live cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pattern {
    pub rows: i32,
    pub cols: i32,
    pub live_cells: Vec<(i32, i32)>,
}

impl Pattern {
    /// Snapshot the engine's current generation.
    pub fn capture<B: Board>(engine: &LifeEngine<B>) -> Self {
        let mut live_cells = Vec::new();
        for y in 0..engine.rows() {
            for x in 0..engine.cols() {
                if engine.is_alive(x, y) {
                    live_cells.push((x, y));
                }
            }
        }
        Pattern {
            rows: engine.rows(),
            cols: engine.cols(),
            live_cells,
        }
    }

    /// Replace the engine's board with this pattern. Editing only; a
    /// running engine ignores the edits. Dimensions must match the board.
    pub fn apply<B: Board>(&self, engine: &mut LifeEngine<B>) -> Result<(), Error> {
        if self.rows != engine.rows() || self.cols != engine.cols() {
            return Err(Error::DimensionMismatch {
                pattern_rows: self.rows,
                pattern_cols: self.cols,
                board_rows: engine.rows(),
                board_cols: engine.cols(),
            });
        }
        engine.clear();
        for &(x, y) in &self.live_cells {
            if !engine.is_alive(x, y) {
                engine.toggle_cell(x, y);
            }
        }
        Ok(())
    }

    /// Save as pretty-printed JSON.
    pub fn save_to_file(&self, path: &str) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Error> {
        let json = fs::read_to_string(path)?;
        let pattern = serde_json::from_str(&json)?;
        Ok(pattern)
    }

    /// Text rendering of the board, one row per line (■ live, □ dead).
    pub fn to_diagram(&self) -> String {
        let mut result = String::new();
        for y in 0..self.rows {
            for x in 0..self.cols {
                let live = self.live_cells.contains(&(x, y));
                result.push(if live { '■' } else { '□' });
            }
            result.push('\n');
        }
        result
    }
}
