/// Interface to a monome-style LED grid: fixed dimensions queried once
/// at engine construction, per-cell on/off updates, a bulk clear/set
/// for round boundaries, and a cosmetic global brightness.
/// Implementations must make `set_cell` and `set_all` idempotent.
pub trait Board {
    fn rows(&self) -> i32;
    fn cols(&self) -> i32;

    /// Turn one LED on or off.
    fn set_cell(&mut self, x: i32, y: i32, on: bool);

    /// Turn every LED on or off at once.
    fn set_all(&mut self, on: bool);

    /// Set the global LED intensity, 0..=15.
    fn set_brightness(&mut self, level: u8);
}

/// In-memory LED state, drawn by the front end and inspected by the
/// headless calibration runner.
pub struct FrameBuffer {
    rows: i32,
    cols: i32,
    lit: Vec<bool>,
    brightness: u8,
}

impl FrameBuffer {
    pub fn new(rows: i32, cols: i32) -> Self {
        FrameBuffer {
            rows,
            cols,
            lit: vec![false; (rows.max(0) * cols.max(0)) as usize],
            brightness: 15,
        }
    }

    pub fn is_lit(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.cols || y < 0 || y >= self.rows {
            return false;
        }
        self.lit[(y * self.cols + x) as usize]
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn lit_count(&self) -> usize {
        self.lit.iter().filter(|&&b| b).count()
    }
}

impl Board for FrameBuffer {
    fn rows(&self) -> i32 {
        self.rows
    }

    fn cols(&self) -> i32 {
        self.cols
    }

    fn set_cell(&mut self, x: i32, y: i32, on: bool) {
        if x >= 0 && x < self.cols && y >= 0 && y < self.rows {
            self.lit[(y * self.cols + x) as usize] = on;
        }
    }

    fn set_all(&mut self, on: bool) {
        self.lit.fill(on);
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level.min(15);
    }
}
