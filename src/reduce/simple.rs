//! Sum and count companion reducers
//!
//! Scalar companions to the mean reducer, sharing its weighted-fold
//! semantics: a pre-aggregated batch contributes `value * weight` to a sum
//! and `weight` to a count.

use crate::error::{ReduceError, Result};
use crate::reduce::Reducer;
use crate::types::{OutputPoint, Sample};
use crate::value::SampleValue;

/// Weighted sum over one output group
#[derive(Debug, Clone)]
pub struct SumReducer<V> {
    sum: V,
    count: u32,
}

impl<V: SampleValue> SumReducer<V> {
    /// Create a new sum reducer
    pub fn new() -> Self {
        Self {
            sum: V::zero(),
            count: 0,
        }
    }
}

impl<V: SampleValue> Default for SumReducer<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: SampleValue> Reducer<V> for SumReducer<V> {
    fn ingest(&mut self, sample: &Sample<V>) {
        if sample.aggregated >= 2 {
            self.sum += sample.value * V::from_weight(sample.aggregated);
            self.count += sample.aggregated;
        } else {
            self.sum += sample.value;
            self.count += 1;
        }
    }

    fn emit(&self) -> Result<Vec<OutputPoint>> {
        if self.count == 0 {
            return Err(ReduceError::EmptyReduce);
        }

        Ok(vec![OutputPoint::summary(self.sum.as_f64(), self.count)])
    }

    fn name(&self) -> &'static str {
        "Sum"
    }
}

/// Weighted count over one output group
///
/// Counts raw points, not samples: a batch of weight 3 counts as three.
/// Value-representation independent; an empty group legitimately counts to
/// zero, so `emit` never fails.
#[derive(Debug, Clone, Default)]
pub struct CountReducer {
    count: u32,
}

impl CountReducer {
    /// Create a new count reducer
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V: SampleValue> Reducer<V> for CountReducer {
    fn ingest(&mut self, sample: &Sample<V>) {
        self.count += sample.aggregated.max(1);
    }

    fn emit(&self) -> Result<Vec<OutputPoint>> {
        Ok(vec![OutputPoint::summary(
            f64::from(self.count),
            self.count,
        )])
    }

    fn name(&self) -> &'static str {
        "Count"
    }
}
