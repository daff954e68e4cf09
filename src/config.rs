use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub sim: SimConfig,
    #[serde(default)]
    pub percolate: PercolateConfig,
    #[serde(default)]
    pub pattern: PatternConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub visual: VisualConfig,
}

#[derive(Debug, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_rows")]
    pub rows: i32,
    #[serde(default = "default_cols")]
    pub cols: i32,
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
}

#[derive(Debug, Deserialize)]
pub struct SimConfig {
    /// "life" or "percolate"
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_brightness")]
    pub brightness: u8,
}

#[derive(Debug, Deserialize)]
pub struct PercolateConfig {
    /// Seeds the density estimator (counted as its first observation).
    /// When absent, the estimator starts unseeded at 0.5.
    #[serde(default)]
    pub initial_threshold: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct PatternConfig {
    #[serde(default = "default_pattern_path")]
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_round_log: bool,
    #[serde(default = "default_round_log_path")]
    pub round_log_path: String,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
}

// Default values
fn default_rows() -> i32 { 8 }
fn default_cols() -> i32 { 16 }
fn default_cell_size() -> f32 { 40.0 }
fn default_mode() -> String { "life".to_string() }
fn default_delay_ms() -> u64 { 100 }
fn default_brightness() -> u8 { 8 }
fn default_pattern_path() -> String { "pattern.json".to_string() }
fn default_round_log_path() -> String { "round_log.json".to_string() }
fn default_window_title() -> String { "Monogrid - LED Grid Simulations".to_string() }
fn default_bg_r() -> u8 { 20 }
fn default_bg_g() -> u8 { 20 }
fn default_bg_b() -> u8 { 20 }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            cell_size: default_cell_size(),
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            delay_ms: default_delay_ms(),
            brightness: default_brightness(),
        }
    }
}

impl Default for PercolateConfig {
    fn default() -> Self {
        Self {
            initial_threshold: None,
        }
    }
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            path: default_pattern_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_round_log: false,
            round_log_path: default_round_log_path(),
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            sim: SimConfig::default(),
            percolate: PercolateConfig::default(),
            pattern: PatternConfig::default(),
            logging: LoggingConfig::default(),
            visual: VisualConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    println!("Loaded configuration from config.toml");
                    config
                }
                Err(e) => {
                    eprintln!("Warning: Failed to parse config.toml: {}", e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => {
                println!("No config.toml found, using default configuration");
                Config::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_and_gaps_fall_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [grid]
            rows = 16

            [visual]
            window_title = "Bench Rig"
            "#,
        )
        .unwrap();
        assert_eq!(config.grid.rows, 16);
        assert_eq!(config.grid.cols, default_cols());
        assert_eq!(config.visual.window_title, "Bench Rig");
        assert_eq!(config.visual.background_r, default_bg_r());
        assert_eq!(config.sim.mode, "life");
    }

    #[test]
    fn empty_input_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.visual.window_title, default_window_title());
        assert_eq!(config.sim.delay_ms, default_delay_ms());
        assert_eq!(config.percolate.initial_threshold, None);
        assert!(!config.logging.enable_round_log);
    }
}
