pub mod average;
pub mod board;
pub mod config;
pub mod error;
pub mod events;
pub mod grid;
pub mod life;
pub mod pattern;
pub mod percolate;
pub mod round_log;

pub use average::RunningAverage;
pub use board::{Board, FrameBuffer};
pub use error::Error;
pub use events::InputHandler;
pub use grid::Grid;
pub use life::{IncrementalLife, LifeEngine};
pub use pattern::Pattern;
pub use percolate::PercolationEngine;
pub use round_log::{Outcome, RoundLog};
