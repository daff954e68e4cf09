/// Toroidal grid for storing cell states.
/// Cell values: 0=dead/open, 1=alive/marked. Dimensions are fixed at
/// construction; logical coordinates wrap once around each axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub rows: i32,
    pub cols: i32,
    pub cells: Vec<u8>,
}

impl Grid {
    /// Create a new grid with all cells set to 0.
    /// Dimensions must be positive; engine constructors validate them
    /// before a Grid is ever built.
    pub fn new(rows: i32, cols: i32) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![0; (rows * cols) as usize],
        }
    }

    /// Normalize a coordinate onto the torus by adding or subtracting
    /// exactly one grid dimension. Callers must stay within one wrap
    /// distance of range (all neighbor offsets are ±1); anything further
    /// out trips a debug assertion and is silently single-wrapped in
    /// release builds.
    pub fn wrap(&self, x: i32, y: i32) -> (i32, i32) {
        debug_assert!(
            x >= -self.cols && x < 2 * self.cols,
            "x more than one wrap out of range: {}",
            x
        );
        debug_assert!(
            y >= -self.rows && y < 2 * self.rows,
            "y more than one wrap out of range: {}",
            y
        );

        let wx = if x < 0 {
            x + self.cols
        } else if x >= self.cols {
            x - self.cols
        } else {
            x
        };
        let wy = if y < 0 {
            y + self.rows
        } else if y >= self.rows {
            y - self.rows
        } else {
            y
        };
        (wx, wy)
    }

    /// Convert a (possibly one-wrap-out) coordinate to a storage index.
    pub fn index(&self, x: i32, y: i32) -> usize {
        let (x, y) = self.wrap(x, y);
        (y * self.cols + x) as usize
    }

    /// Get cell value at (x, y), wrapping around the torus.
    pub fn get(&self, x: i32, y: i32) -> u8 {
        self.cells[self.index(x, y)]
    }

    /// Set cell value at (x, y), wrapping around the torus.
    pub fn set(&mut self, x: i32, y: i32, value: u8) {
        let id = self.index(x, y);
        self.cells[id] = value;
    }

    /// Check whether a coordinate is inside the physical grid, without
    /// wrapping. Used where an axis has real walls instead of a seam.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.cols && y >= 0 && y < self.rows
    }

    /// Reset every cell to 0.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Number of nonzero cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_is_identity_in_range() {
        let grid = Grid::new(8, 16);
        for y in 0..8 {
            for x in 0..16 {
                assert_eq!(grid.wrap(x, y), (x, y));
                // Re-applying to an already-normalized coordinate changes nothing
                let (wx, wy) = grid.wrap(x, y);
                assert_eq!(grid.wrap(wx, wy), (wx, wy));
            }
        }
    }

    #[test]
    fn wrap_crosses_each_edge_once() {
        let grid = Grid::new(8, 16);
        assert_eq!(grid.wrap(-1, 0), (15, 0));
        assert_eq!(grid.wrap(16, 0), (0, 0));
        assert_eq!(grid.wrap(0, -1), (0, 7));
        assert_eq!(grid.wrap(0, 8), (0, 0));
        assert_eq!(grid.wrap(-1, -1), (15, 7));
        assert_eq!(grid.wrap(16, 8), (0, 0));
    }

    #[test]
    fn every_cell_reachable_from_one_wrap_neighborhood() {
        let grid = Grid::new(5, 7);
        let mut hits = vec![0u32; (5 * 7) as usize];
        for y in -1..=5 {
            for x in -1..=7 {
                hits[grid.index(x, y)] += 1;
            }
        }
        // The 9x7 logical window folds onto all 35 physical cells.
        assert!(hits.iter().all(|&h| h > 0));
        let total: u32 = hits.iter().sum();
        assert_eq!(total, 9 * 7);
        // In-range coordinates are their own unique normal form: exactly
        // one normalized (x, y) per physical index.
        for y in 0..5 {
            for x in 0..7 {
                assert_eq!(grid.wrap(x, y), (x, y));
            }
        }
    }

    #[test]
    fn set_through_seam_lands_in_range() {
        let mut grid = Grid::new(4, 4);
        grid.set(-1, -1, 1);
        assert_eq!(grid.get(3, 3), 1);
        assert_eq!(grid.live_count(), 1);
        grid.clear();
        assert_eq!(grid.live_count(), 0);
    }
}
