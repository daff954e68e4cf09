use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::Error;

/// How a percolation round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The flood reached the last column.
    Victory,
    /// The frontier emptied out first.
    Failure,
}

/// One completed percolation round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Milliseconds since the session started.
    pub timestamp_ms: u64,
    /// 1-based round number.
    pub round: u64,
    /// Density threshold the round was generated with.
    pub density: f64,
    pub outcome: Outcome,
    /// Propagation ticks the flood ran for.
    pub ticks: u64,
}

/// Session log of percolation rounds, saved as JSON on request.
#[derive(Debug)]
pub struct RoundLog {
    start_time: Instant,
    records: Vec<RoundRecord>,
}

impl RoundLog {
    pub fn new() -> Self {
        RoundLog {
            start_time: Instant::now(),
            records: Vec::new(),
        }
    }

    /// Append a completed round with the current session timestamp.
    pub fn record(&mut self, round: u64, density: f64, outcome: Outcome, ticks: u64) {
        let timestamp_ms = self.start_time.elapsed().as_millis() as u64;
        self.records.push(RoundRecord {
            timestamp_ms,
            round,
            density,
            outcome,
            ticks,
        });
    }

    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Save the log to a pretty-printed JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// One-line session summary.
    pub fn summary(&self) -> String {
        let victories = self
            .records
            .iter()
            .filter(|r| r.outcome == Outcome::Victory)
            .count();
        let failures = self.records.len() - victories;
        let last_density = self.records.last().map(|r| r.density).unwrap_or(0.0);
        format!(
            "{} rounds: {} victories, {} failures, last density {:.4}",
            self.records.len(),
            victories,
            failures,
            last_density
        )
    }
}

impl Default for RoundLog {
    fn default() -> Self {
        Self::new()
    }
}
