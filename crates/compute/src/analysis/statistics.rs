use std::collections::HashMap;

/// Integer reducers over frame-timing samples.
///
/// All inputs are `i64` nanosecond samples. Nothing here allocates floats.
pub struct Statistics;

impl Statistics {
    /// Truncated arithmetic mean. Does not modify `values`.
    ///
    /// The sum is accumulated in `i64`; frame periods over short windows stay
    /// far from overflow.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty. Callers must check, or use [`Statistics::try_mean`].
    pub fn mean(values: &[i64]) -> i64 {
        let sum: i64 = values.iter().sum();
        sum / values.len() as i64
    }

    /// Like [`Statistics::mean`], but `None` for an empty slice.
    pub fn try_mean(values: &[i64]) -> Option<i64> {
        if values.is_empty() {
            return None;
        }
        Some(Self::mean(values))
    }

    /// Median without averaging: the element at index `len / 2` once ordered,
    /// i.e. the upper middle for even lengths. Returns 0 for an empty slice.
    ///
    /// Reorders `values` in place. Copy first if the original order matters.
    pub fn median(values: &mut [i64]) -> i64 {
        if values.is_empty() {
            return 0;
        }
        let mid = values.len() / 2;
        let (_, median, _) = values.select_nth_unstable(mid);
        *median
    }

    /// Most frequent value, or 0 for an empty slice. Does not modify `values`.
    ///
    /// Ties go to the value seen first in a left-to-right walk.
    pub fn mode(values: &[i64]) -> i64 {
        let mut counts: HashMap<i64, usize> = HashMap::with_capacity(values.len());
        for &v in values {
            *counts.entry(v).or_insert(0) += 1;
        }

        let mut best = 0;
        let mut best_count = 0;
        for v in values {
            let count = counts[v];
            if count > best_count {
                best = *v;
                best_count = count;
            }
        }
        best
    }

    pub fn min_max(values: &[i64]) -> Option<(i64, i64)> {
        let first = *values.first()?;
        let mut min = first;
        let mut max = first;
        for &v in values.iter().skip(1) {
            min = min.min(v);
            max = max.max(v);
        }
        Some((min, max))
    }
}
