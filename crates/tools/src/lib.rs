//! Offline reporting over recorded per-layer frame intervals.

use std::fmt;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use foundation::time::Nanos;
use runtime::{ActivityThresholds, IntervalSummary, summarize};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Trace {
    pub layers: Vec<LayerTrace>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LayerTrace {
    pub name: String,
    #[serde(default)]
    pub intervals_ns: Vec<Nanos>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerReport {
    pub name: String,
    #[serde(flatten)]
    pub summary: IntervalSummary,
}

#[derive(Debug)]
pub enum TraceError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::Io(err) => write!(f, "I/O error: {err}"),
            TraceError::Parse(err) => write!(f, "trace parse error: {err}"),
        }
    }
}

impl std::error::Error for TraceError {}

impl Trace {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let payload = fs::read_to_string(path).map_err(TraceError::Io)?;
        Self::from_json_str(&payload)
    }

    pub fn from_json_str(payload: &str) -> Result<Self, TraceError> {
        serde_json::from_str(payload).map_err(TraceError::Parse)
    }
}

/// One report row per layer with samples; empty layers are logged and skipped.
pub fn build_report(trace: &Trace, thresholds: &ActivityThresholds) -> Vec<LayerReport> {
    let mut rows = Vec::with_capacity(trace.layers.len());
    for layer in &trace.layers {
        match summarize(&layer.intervals_ns, thresholds) {
            Ok(summary) => rows.push(LayerReport {
                name: layer.name.clone(),
                summary,
            }),
            Err(err) => warn!(layer = %layer.name, "skipping layer: {err}"),
        }
    }
    rows
}

pub fn render_text(rows: &[LayerReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24} {:>6} {:>14} {:>14} {:>14} {:>14} {:>14}  activity",
        "layer", "count", "mean_ns", "median_ns", "mode_ns", "min_ns", "max_ns"
    );
    for row in rows {
        let s = &row.summary;
        let _ = writeln!(
            out,
            "{:<24} {:>6} {:>14} {:>14} {:>14} {:>14} {:>14}  {}",
            row.name, s.count, s.mean_ns, s.median_ns, s.mode_ns, s.min_ns, s.max_ns, s.activity
        );
    }
    out
}

pub fn render_json(rows: &[LayerReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}
