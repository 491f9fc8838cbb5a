use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::classifier::Snapshot;
use crate::history::{TrainOutcome, TrainingHistory};

fn log_dir() -> io::Result<()> {
    fs::create_dir_all("logs")
}

fn append_json_line<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    serde_json::to_writer(&mut file, value)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    file.write_all(b"\n")
}

fn timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

#[derive(Debug, Serialize)]
pub struct UpdateLogEntry {
    pub update: usize,
    pub weights: Vec<f64>,
    pub bias: f64,
    pub timestamp_ms: u128,
}

/// Append one recorded update to `logs/updates.jsonl`
pub fn log_update(update: usize, snapshot: &Snapshot) -> io::Result<()> {
    log_dir()?;
    let entry = UpdateLogEntry {
        update,
        weights: snapshot.weights.clone(),
        bias: snapshot.bias,
        timestamp_ms: timestamp_ms(),
    };
    append_json_line("logs/updates.jsonl", &entry)
}

#[derive(Debug, Serialize)]
pub struct RunSummaryEntry {
    pub updates: usize,
    pub converged: bool,
    pub passes: Option<usize>,
    pub max_updates: usize,
    pub final_weights: Vec<f64>,
    pub final_bias: f64,
    pub timestamp_ms: u128,
}

/// Append a whole-run summary to `logs/run.jsonl`
pub fn log_run_summary(history: &TrainingHistory) -> io::Result<()> {
    log_dir()?;
    let (final_weights, final_bias) = history
        .last()
        .map(|snapshot| (snapshot.weights.clone(), snapshot.bias))
        .unwrap_or_default();
    let passes = match history.outcome() {
        TrainOutcome::Converged { passes } => Some(passes),
        TrainOutcome::Capped => None,
    };
    let entry = RunSummaryEntry {
        updates: history.len(),
        converged: history.outcome().is_converged(),
        passes,
        max_updates: history.max_updates(),
        final_weights,
        final_bias,
        timestamp_ms: timestamp_ms(),
    };
    append_json_line("logs/run.jsonl", &entry)
}
