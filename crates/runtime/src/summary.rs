use std::fmt;

use compute::Statistics;
use foundation::time::Nanos;
use serde::Serialize;
use tracing::debug;

use crate::activity::{classify_interval, LayerActivity};
use crate::config::ActivityThresholds;

/// Reduced view of one layer's recent inter-arrival intervals.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct IntervalSummary {
    pub count: usize,
    pub mean_ns: Nanos,
    pub median_ns: Nanos,
    pub mode_ns: Nanos,
    pub min_ns: Nanos,
    pub max_ns: Nanos,
    /// Classified from the median interval.
    pub activity: LayerActivity,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SummaryError {
    Empty,
}

impl fmt::Display for SummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryError::Empty => write!(f, "no interval samples"),
        }
    }
}

impl std::error::Error for SummaryError {}

/// Summarizes `intervals` without reordering them.
pub fn summarize(
    intervals: &[Nanos],
    thresholds: &ActivityThresholds,
) -> Result<IntervalSummary, SummaryError> {
    let (min_ns, max_ns) = Statistics::min_max(intervals).ok_or(SummaryError::Empty)?;
    let mean_ns = Statistics::try_mean(intervals).ok_or(SummaryError::Empty)?;
    let mode_ns = Statistics::mode(intervals);

    let mut scratch = intervals.to_vec();
    let median_ns = Statistics::median(&mut scratch);
    let activity = classify_interval(median_ns, thresholds);

    debug!(
        count = intervals.len(),
        mean_ns, median_ns, mode_ns, %activity, "summarized intervals"
    );

    Ok(IntervalSummary {
        count: intervals.len(),
        mean_ns,
        median_ns,
        mode_ns,
        min_ns,
        max_ns,
        activity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FRAME_60HZ: Nanos = 16_666_666;

    #[test]
    fn summarizes_steady_cadence() {
        let intervals = [FRAME_60HZ, FRAME_60HZ, FRAME_60HZ + 2, FRAME_60HZ - 2];
        let s = summarize(&intervals, &ActivityThresholds::default()).unwrap();
        assert_eq!(
            s,
            IntervalSummary {
                count: 4,
                mean_ns: FRAME_60HZ,
                median_ns: FRAME_60HZ,
                mode_ns: FRAME_60HZ,
                min_ns: FRAME_60HZ - 2,
                max_ns: FRAME_60HZ + 2,
                activity: LayerActivity::Frequent,
            }
        );
    }

    #[test]
    fn slow_layer_is_low_activity() {
        let intervals = [300_000_000, 500_000_000, 16_000_000];
        let s = summarize(&intervals, &ActivityThresholds::default()).unwrap();
        assert_eq!(s.median_ns, 300_000_000);
        assert_eq!(s.activity, LayerActivity::LowActivity);
    }

    #[test]
    fn leaves_caller_order_intact() {
        let intervals = vec![5, 1, 4, 2, 3];
        let before = intervals.clone();
        summarize(&intervals, &ActivityThresholds::default()).unwrap();
        assert_eq!(intervals, before);
    }

    #[test]
    fn empty_is_an_error() {
        assert_eq!(
            summarize(&[], &ActivityThresholds::default()),
            Err(SummaryError::Empty)
        );
    }
}
