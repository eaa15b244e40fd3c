//! Axis bounds derived from the plotted series.

use serde::{Deserialize, Serialize};

use crate::core::scale::COLUMN_RESOLUTION;
use crate::error::{ChartError, ChartResult};

/// Caller-fixed row axis range. Live data outside it still widens the axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowRange {
    pub min: f64,
    pub max: f64,
}

impl RowRange {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        Self { min, max }.validate()
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ChartError::InvalidRange(format!(
                "row range must be finite, got min={}, max={}",
                self.min, self.max
            )));
        }
        if self.max < self.min {
            return Err(ChartError::InvalidRange(format!(
                "row range max {} is less than min {}",
                self.max, self.min
            )));
        }
        Ok(self)
    }
}

/// Smallest and largest sample over all series. NaN samples are gaps and are
/// skipped. Without any sample the range is `0..0` (or the fixed range).
#[must_use]
pub fn row_bounds<'a, I>(series: I, fixed: Option<RowRange>) -> (f64, f64)
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for values in series {
        for value in values.iter().copied().filter(|v| !v.is_nan()) {
            min = min.min(value);
            max = max.max(value);
        }
    }

    match (min <= max, fixed) {
        (true, Some(fixed)) => (min.min(fixed.min), max.max(fixed.max)),
        (true, None) => (min, max),
        (false, Some(fixed)) => (fixed.min, fixed.max),
        (false, None) => (0.0, 0.0),
    }
}

/// First and last series position shown on the column axis.
///
/// The axis normally spans every position of the longest series. A rolling
/// axis keeps one sample per sub-pixel column instead and slides forward,
/// dropping the oldest positions once the series outgrows the graph.
#[must_use]
pub fn column_bounds(longest_len: usize, graph_width: i32, rolling: bool) -> (i64, i64) {
    let Ok(len) = i64::try_from(longest_len) else {
        return (0, i64::MAX);
    };
    if len == 0 {
        return (0, 0);
    }
    let max = len - 1;
    if !rolling || graph_width < 1 {
        return (0, max);
    }

    let capacity = i64::from(graph_width) * i64::from(COLUMN_RESOLUTION);
    if len > capacity {
        (len - capacity, max)
    } else {
        (0, max)
    }
}
