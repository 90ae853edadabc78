use std::fmt;

use foundation::time::Nanos;
use serde::Serialize;

use crate::config::ActivityThresholds;

/// How a layer contributes to refresh-rate voting, judged by its frame cadence.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerActivity {
    Frequent,
    /// Frames arrive slowly enough to allow a lower refresh rate.
    LowActivity,
    /// Samples are stale and may be evicted from layer history.
    Obsolete,
}

impl fmt::Display for LayerActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LayerActivity::Frequent => "frequent",
            LayerActivity::LowActivity => "low-activity",
            LayerActivity::Obsolete => "obsolete",
        };
        f.write_str(s)
    }
}

/// Classifies a single inter-arrival gap. Both thresholds are exclusive.
pub fn classify_interval(interval_ns: Nanos, thresholds: &ActivityThresholds) -> LayerActivity {
    if interval_ns > thresholds.obsolete_ns {
        LayerActivity::Obsolete
    } else if interval_ns > thresholds.low_activity_ns {
        LayerActivity::LowActivity
    } else {
        LayerActivity::Frequent
    }
}

/// True once more than the obsolete epsilon has passed since the last frame.
///
/// A `last_present_ns` later than `now_ns` is never obsolete.
pub fn is_obsolete(last_present_ns: Nanos, now_ns: Nanos, thresholds: &ActivityThresholds) -> bool {
    now_ns.saturating_sub(last_present_ns) > thresholds.obsolete_ns
}
