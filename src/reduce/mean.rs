//! Weighted running mean reducer
//!
//! Computes `sum(value_i * weight_i) / sum(weight_i)` in a single pass.
//! Pre-aggregated batches fold in at their full weight so the result equals
//! the mean of the original raw points, not the mean of the batch means.

use crate::error::{ReduceError, Result};
use crate::reduce::Reducer;
use crate::types::{OutputPoint, Sample};
use crate::value::SampleValue;

/// Single-pass weighted mean over one output group
///
/// Invariants: `count` equals the sum of all consumed sample weights, and
/// `sum` equals the sum of each sample's `value * weight`.
///
/// # Example
///
/// ```rust
/// use streamfold::{MeanReducer, Reducer, Sample};
///
/// let mut mean = MeanReducer::new();
/// mean.ingest(&Sample::new(0, 2.0));
/// mean.ingest(&Sample::aggregated(1, 4.0, 3)); // three raw points at 4.0
///
/// let points = mean.emit().unwrap();
/// assert_eq!(points[0].value, 3.5); // (2 + 4*3) / 4
/// assert_eq!(points[0].aggregated, 4);
/// ```
#[derive(Debug, Clone)]
pub struct MeanReducer<V> {
    /// Running weighted sum
    sum: V,

    /// Running weighted count of raw points
    count: u32,
}

impl<V: SampleValue> MeanReducer<V> {
    /// Create a new mean reducer
    pub fn new() -> Self {
        Self {
            sum: V::zero(),
            count: 0,
        }
    }
}

impl<V: SampleValue> Default for MeanReducer<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: SampleValue> Reducer<V> for MeanReducer<V> {
    fn ingest(&mut self, sample: &Sample<V>) {
        if sample.aggregated >= 2 {
            self.sum += sample.value * V::from_weight(sample.aggregated);
            self.count += sample.aggregated;
        } else {
            self.sum += sample.value;
            self.count += 1;
        }
    }

    /// Yield exactly one timeless summary point
    ///
    /// Returns [`ReduceError::EmptyReduce`] when no samples were consumed;
    /// the division is never performed with a zero count.
    fn emit(&self) -> Result<Vec<OutputPoint>> {
        if self.count == 0 {
            return Err(ReduceError::EmptyReduce);
        }

        Ok(vec![OutputPoint::summary(
            self.sum.as_f64() / f64::from(self.count),
            self.count,
        )])
    }

    fn name(&self) -> &'static str {
        "Mean"
    }
}
