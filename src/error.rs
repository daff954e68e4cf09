use thiserror::Error;

/// Errors surfaced by engine construction and pattern file handling.
/// Engine stepping itself cannot fail; bad grid dimensions are caught
/// before a simulation ever starts.
#[derive(Debug, Error)]
pub enum Error {
    #[error("board reports a zero-sized grid ({rows}x{cols})")]
    ZeroDimension { rows: i32, cols: i32 },

    #[error("board grid {rows}x{cols} is below the 3x3 toroidal minimum")]
    GridTooSmall { rows: i32, cols: i32 },

    #[error("pattern is {pattern_rows}x{pattern_cols} but the board is {board_rows}x{board_cols}")]
    DimensionMismatch {
        pattern_rows: i32,
        pattern_cols: i32,
        board_rows: i32,
        board_cols: i32,
    },

    #[error("file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
