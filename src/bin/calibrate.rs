/// Headless percolation threshold estimation
///
/// Runs the percolation engine without a window for a fixed number of
/// rounds and prints how the density estimator converges. Useful for
/// checking what density a given grid size settles on.
use std::env;
use std::process;

use monogrid::{FrameBuffer, InputHandler, PercolationEngine, RunningAverage};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} ROUNDS [ROWS] [COLS] [THRESHOLD]", args[0]);
        eprintln!("Runs percolation rounds headless and prints the density estimate");
        process::exit(1);
    }

    let rounds: u64 = parse_arg(&args, 1, "ROUNDS");
    let rows: i32 = if args.len() > 2 { parse_arg(&args, 2, "ROWS") } else { 8 };
    let cols: i32 = if args.len() > 3 { parse_arg(&args, 3, "COLS") } else { 16 };
    let threshold = if args.len() > 4 {
        RunningAverage::with_seed(parse_arg::<f64>(&args, 4, "THRESHOLD"))
    } else {
        RunningAverage::new()
    };

    let board = FrameBuffer::new(rows, cols);
    let mut engine = match PercolationEngine::new(board, threshold) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Cannot start: {}", e);
            process::exit(1);
        }
    };

    println!(
        "Calibrating on a {}x{} grid for {} rounds (seed density {:.4})",
        rows,
        cols,
        rounds,
        engine.threshold().value()
    );

    let mut reported = 0;
    while engine.round() < rounds {
        engine.on_tick();
        if engine.round() > reported && engine.round() % 10 == 0 {
            reported = engine.round();
            println!(
                "round {:5}  density {:.4}",
                engine.round(),
                engine.threshold().value()
            );
        }
    }

    println!("{}", engine.log().summary());
    println!(
        "final estimate after {} rounds: {:.4}",
        engine.round(),
        engine.threshold().value()
    );
}

fn parse_arg<T: std::str::FromStr>(args: &[String], idx: usize, name: &str) -> T {
    match args[idx].parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Invalid {}: {}", name, args[idx]);
            process::exit(1);
        }
    }
}
