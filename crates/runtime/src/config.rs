use std::env;
use std::fmt;
use std::fs;
use std::path::Path;

use foundation::time::{millis_to_nanos, Nanos, LOW_ACTIVITY_EPSILON_NS, OBSOLETE_TIME_EPSILON_NS};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const OBSOLETE_EPSILON_ENV: &str = "SCHED_OBSOLETE_EPSILON_MS";
pub const LOW_ACTIVITY_EPSILON_ENV: &str = "SCHED_LOW_ACTIVITY_EPSILON_MS";

/// Inter-arrival thresholds used to classify layer activity.
///
/// Defaults are the compositor's fixed epsilons; overrides exist for offline
/// analysis of recorded traces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityThresholds {
    pub obsolete_ns: Nanos,
    pub low_activity_ns: Nanos,
}

impl Default for ActivityThresholds {
    fn default() -> Self {
        Self {
            obsolete_ns: OBSOLETE_TIME_EPSILON_NS,
            low_activity_ns: LOW_ACTIVITY_EPSILON_NS,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    InvalidEnv { var: &'static str, value: String },
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "I/O error: {err}"),
            ConfigError::Parse(err) => write!(f, "thresholds parse error: {err}"),
            ConfigError::InvalidEnv { var, value } => {
                write!(f, "invalid value for {var}: {value:?} (expected milliseconds)")
            }
            ConfigError::Invalid(msg) => write!(f, "invalid thresholds: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ActivityThresholds {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let payload = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json_str(&payload)
    }

    pub fn from_json_str(payload: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(payload).map_err(ConfigError::Parse)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Defaults overlaid with the millisecond overrides from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        if let Some(ns) = parse_ms_var(OBSOLETE_EPSILON_ENV, &lookup)? {
            cfg.obsolete_ns = ns;
        }
        if let Some(ns) = parse_ms_var(LOW_ACTIVITY_EPSILON_ENV, &lookup)? {
            cfg.low_activity_ns = ns;
        }
        cfg.validate()?;
        debug!(
            obsolete_ns = cfg.obsolete_ns,
            low_activity_ns = cfg.low_activity_ns,
            "activity thresholds resolved"
        );
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.low_activity_ns <= 0 || self.obsolete_ns <= 0 {
            return Err(ConfigError::Invalid(format!(
                "thresholds must be positive (low_activity_ns={}, obsolete_ns={})",
                self.low_activity_ns, self.obsolete_ns
            )));
        }
        if self.low_activity_ns >= self.obsolete_ns {
            return Err(ConfigError::Invalid(format!(
                "low_activity_ns ({}) must be below obsolete_ns ({})",
                self.low_activity_ns, self.obsolete_ns
            )));
        }
        Ok(())
    }
}

fn parse_ms_var(
    var: &'static str,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<Option<Nanos>, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let ms: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { var, value: raw.clone() })?;
    Ok(Some(millis_to_nanos(ms)))
}
