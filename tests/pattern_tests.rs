mod common;

use common::{editing_life, live_set};
use monogrid::{Error, Pattern};

#[test]
fn capture_and_apply_restore_the_board() {
    let engine = editing_life(5, 5, &[(1, 2), (2, 2), (3, 2)]);
    let pattern = Pattern::capture(&engine);
    assert_eq!(pattern.rows, 5);
    assert_eq!(pattern.cols, 5);
    assert_eq!(pattern.live_cells, vec![(1, 2), (2, 2), (3, 2)]);

    let mut other = editing_life(5, 5, &[(0, 0), (4, 4)]);
    pattern.apply(&mut other).unwrap();
    assert_eq!(live_set(&other), vec![(1, 2), (2, 2), (3, 2)]);
    // Display matches the grid after the apply
    assert!(other.board().is_lit(2, 2));
    assert!(!other.board().is_lit(0, 0));
}

#[test]
fn apply_rejects_mismatched_dimensions() {
    let pattern = Pattern {
        rows: 8,
        cols: 8,
        live_cells: vec![(1, 1)],
    };
    let mut engine = editing_life(5, 5, &[]);
    let err = pattern.apply(&mut engine).unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { .. }));
}

#[test]
fn save_and_load_round_trip() {
    let pattern = Pattern {
        rows: 4,
        cols: 6,
        live_cells: vec![(0, 0), (3, 2), (5, 3)],
    };
    let path = std::env::temp_dir().join("monogrid_pattern_test.json");
    let path = path.to_str().unwrap();

    pattern.save_to_file(path).unwrap();
    let loaded = Pattern::load_from_file(path).unwrap();
    assert_eq!(loaded.rows, 4);
    assert_eq!(loaded.cols, 6);
    assert_eq!(loaded.live_cells, pattern.live_cells);

    std::fs::remove_file(path).ok();
}

#[test]
fn diagram_renders_rows() {
    let pattern = Pattern {
        rows: 2,
        cols: 3,
        live_cells: vec![(1, 0), (2, 1)],
    };
    assert_eq!(pattern.to_diagram(), "□■□\n□□■\n");
}

#[test]
fn load_missing_file_is_an_io_error() {
    let err = Pattern::load_from_file("/nonexistent/monogrid_pattern.json").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
