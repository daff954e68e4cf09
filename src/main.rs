use std::sync::OnceLock;

use arboard::Clipboard;
use macroquad::prelude::*;

use monogrid::config::Config;
use monogrid::life::Phase as LifePhase;
use monogrid::percolate::Phase as PercPhase;
use monogrid::{
    Board, FrameBuffer, InputHandler, LifeEngine, Pattern, PercolationEngine, RunningAverage,
};

/// Pixel offset of the grid inside the window.
const GRID_MARGIN: f32 = 10.0;

/// The active simulation.
enum Sim {
    Life(LifeEngine<FrameBuffer>),
    Percolate(PercolationEngine<FrameBuffer>),
}

/// Front-end state: one engine over a framebuffer, drawn every frame,
/// ticked on a fixed delay. Mouse clicks stand in for grid button
/// presses.
struct App {
    sim: Sim,
    cell_size: f32,
    background: Color,
    base_delay_ms: u64,
    tick_accum: f32,
    tick: u64,
    pattern_path: String,
}

impl App {
    fn new(config: &Config) -> Result<Self, monogrid::Error> {
        let mut fb = FrameBuffer::new(config.grid.rows, config.grid.cols);
        fb.set_brightness(config.sim.brightness);

        let sim = if config.sim.mode == "percolate" {
            let threshold = match config.percolate.initial_threshold {
                Some(v) => RunningAverage::with_seed(v),
                None => RunningAverage::new(),
            };
            Sim::Percolate(PercolationEngine::new(fb, threshold)?)
        } else {
            Sim::Life(LifeEngine::new(fb)?)
        };

        Ok(App {
            sim,
            cell_size: config.grid.cell_size,
            background: Color::from_rgba(
                config.visual.background_r,
                config.visual.background_g,
                config.visual.background_b,
                255,
            ),
            base_delay_ms: config.sim.delay_ms,
            tick_accum: 0.0,
            tick: 0,
            pattern_path: config.pattern.path.clone(),
        })
    }

    fn framebuffer(&self) -> &FrameBuffer {
        match &self.sim {
            Sim::Life(engine) => engine.board(),
            Sim::Percolate(engine) => engine.board(),
        }
    }

    /// Current inter-tick delay; percolation presses can retune it.
    fn delay_ms(&self) -> u64 {
        match &self.sim {
            Sim::Life(_) => self.base_delay_ms,
            Sim::Percolate(engine) => engine.delay_ms(),
        }
    }

    fn handle_click(&mut self, mouse_x: f32, mouse_y: f32) {
        let grid_x = ((mouse_x - GRID_MARGIN) / self.cell_size) as i32;
        let grid_y = ((mouse_y - GRID_MARGIN) / self.cell_size) as i32;
        let fb = self.framebuffer();
        if grid_x < 0 || grid_x >= fb.cols() || grid_y < 0 || grid_y >= fb.rows() {
            return;
        }

        println!("press at {} {}", grid_x, grid_y);
        match &mut self.sim {
            Sim::Life(engine) => engine.on_press(grid_x, grid_y),
            Sim::Percolate(engine) => engine.on_press(grid_x, grid_y),
        }
    }

    fn advance(&mut self, frame_dt: f32) {
        self.tick_accum += frame_dt;
        let delay_s = self.delay_ms() as f32 / 1000.0;
        if self.tick_accum < delay_s {
            return;
        }
        self.tick_accum = 0.0;
        self.tick += 1;

        match &mut self.sim {
            Sim::Life(engine) => engine.on_tick(),
            Sim::Percolate(engine) => engine.on_tick(),
        }
    }

    fn save_pattern(&self) {
        if let Sim::Life(engine) = &self.sim {
            let pattern = Pattern::capture(engine);
            match pattern.save_to_file(&self.pattern_path) {
                Ok(()) => println!("Saved pattern to {}", self.pattern_path),
                Err(e) => eprintln!("Failed to save pattern: {}", e),
            }
        }
    }

    fn load_pattern(&mut self) {
        if let Sim::Life(engine) = &mut self.sim {
            if engine.phase() != LifePhase::Editing {
                println!("Pattern load ignored: simulation already started");
                return;
            }
            match Pattern::load_from_file(&self.pattern_path) {
                Ok(pattern) => match pattern.apply(engine) {
                    Ok(()) => println!("Loaded pattern from {}", self.pattern_path),
                    Err(e) => eprintln!("Failed to apply pattern: {}", e),
                },
                Err(e) => eprintln!("Failed to load pattern: {}", e),
            }
        }
    }

    fn copy_to_clipboard(&self) {
        let diagram = match &self.sim {
            Sim::Life(engine) => Pattern::capture(engine).to_diagram(),
            Sim::Percolate(engine) => {
                let fb = engine.board();
                let mut result = String::new();
                for y in 0..fb.rows() {
                    for x in 0..fb.cols() {
                        result.push(if fb.is_lit(x, y) { '■' } else { '□' });
                    }
                    result.push('\n');
                }
                result
            }
        };

        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(&diagram) {
                    println!("Failed to copy to clipboard: {}", e);
                } else {
                    println!("Board diagram copied to clipboard!");
                    // Keep the process alive briefly so clipboard managers can capture it
                    std::thread::sleep(std::time::Duration::from_millis(100));
                }
            }
            Err(e) => {
                println!("Failed to access clipboard: {}", e);
            }
        }
    }

    fn status_line(&self) -> String {
        match &self.sim {
            Sim::Life(engine) => {
                let phase = match engine.phase() {
                    LifePhase::Editing => "editing (click cells, origin starts)",
                    LifePhase::Running => "running",
                    LifePhase::Halted => "halted (population extinct)",
                };
                format!(
                    "Life: {}\nGeneration: {}  Population: {}",
                    phase,
                    engine.generation(),
                    engine.population()
                )
            }
            Sim::Percolate(engine) => {
                let phase = match engine.phase() {
                    PercPhase::Generate => "generate",
                    PercPhase::Propagate => "propagate",
                    PercPhase::Victory => "VICTORY",
                    PercPhase::Failure => "failure",
                };
                format!(
                    "Percolation: {}\nRound: {}  Density: {:.4}  Delay: {}ms",
                    phase,
                    engine.round(),
                    engine.threshold().value(),
                    engine.delay_ms()
                )
            }
        }
    }

    fn draw(&self) {
        clear_background(self.background);

        let fb = self.framebuffer();
        // LED color scales with the global brightness setting
        let level = 60 + (195 * fb.brightness() as u32 / 15) as u8;
        let lit = Color::from_rgba(level, level.saturating_sub(20), 30, 255);
        let dark = Color::from_rgba(45, 45, 45, 255);

        for y in 0..fb.rows() {
            for x in 0..fb.cols() {
                let px = GRID_MARGIN + x as f32 * self.cell_size;
                let py = GRID_MARGIN + y as f32 * self.cell_size;
                let color = if fb.is_lit(x, y) { lit } else { dark };
                draw_rectangle(px, py, self.cell_size - 2.0, self.cell_size - 2.0, color);
            }
        }

        let info_y = GRID_MARGIN + fb.rows() as f32 * self.cell_size + 24.0;
        let info = format!(
            "{}\nClick: button press | S: save pattern | L: load pattern | C: copy diagram | Esc: quit",
            self.status_line()
        );
        for (i, line) in info.lines().enumerate() {
            draw_text(line, GRID_MARGIN, info_y + i as f32 * 22.0, 20.0, WHITE);
        }
    }

    /// Clear the display and flush the round log; runs on every exit path.
    fn shutdown(&mut self, config: &Config) {
        match &mut self.sim {
            Sim::Life(engine) => engine.board_mut().set_all(false),
            Sim::Percolate(engine) => {
                engine.board_mut().set_all(false);
                if config.logging.enable_round_log && !engine.log().is_empty() {
                    match engine.log().save_to_file(&config.logging.round_log_path) {
                        Ok(()) => println!(
                            "Round log saved to {} ({})",
                            config.logging.round_log_path,
                            engine.log().summary()
                        ),
                        Err(e) => eprintln!("Failed to save round log: {}", e),
                    }
                }
            }
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Config is needed both for the window setup and in main; load it once.
fn config() -> &'static Config {
    CONFIG.get_or_init(Config::load)
}

/// Window titled from config and sized to the configured grid, with room
/// for the status text underneath.
fn window_conf() -> Conf {
    let config = config();
    let width = 2.0 * GRID_MARGIN + config.grid.cols as f32 * config.grid.cell_size;
    let height = 2.0 * GRID_MARGIN + config.grid.rows as f32 * config.grid.cell_size + 110.0;
    Conf {
        window_title: config.visual.window_title.clone(),
        window_width: width as i32,
        window_height: height as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = config();

    let mut app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Cannot start: {}", e);
            return;
        }
    };

    loop {
        if is_mouse_button_pressed(MouseButton::Left) {
            let (mouse_x, mouse_y) = mouse_position();
            app.handle_click(mouse_x, mouse_y);
        }

        if is_key_pressed(KeyCode::S) {
            app.save_pattern();
        }
        if is_key_pressed(KeyCode::L) {
            app.load_pattern();
        }
        if is_key_pressed(KeyCode::C) {
            app.copy_to_clipboard();
        }
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        app.advance(get_frame_time());
        app.draw();

        next_frame().await
    }

    app.shutdown(config);
}
