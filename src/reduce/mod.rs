//! Streaming reducers - single-pass statistical accumulators
//!
//! This module provides the building blocks of the aggregation stage:
//! - Mean reducer for weighted running means
//! - Moving-average reducer with a bounded circular buffer
//! - Sum and count companions sharing the weighted-fold semantics
//!
//! All reducers share one contract: consume one sample at a time in
//! non-decreasing timestamp order, then yield zero or more output points.
//! Each instance serves exactly one output group (one time bucket or one
//! series) and is never reused across groups.

pub mod mean;
pub mod moving_average;
pub mod simple;

// Re-export commonly used types
pub use mean::MeanReducer;
pub use moving_average::MovingAverageReducer;
pub use simple::{CountReducer, SumReducer};

use tracing::debug;

use crate::error::Result;
use crate::types::{OutputPoint, Sample};
use crate::value::SampleValue;

// ============================================================================
// Reducer Contract
// ============================================================================

/// A stateful streaming accumulator over one ordered sample sequence
///
/// The caller guarantees non-decreasing timestamps and feeds each instance
/// from a single sequential consumer; reducers hold no shared state and
/// define no cross-instance synchronization.
pub trait Reducer<V: SampleValue>: std::fmt::Debug {
    /// Consume one sample
    ///
    /// Never fails: arithmetic over the supported representations has no
    /// error conditions beyond standard floating-point semantics.
    fn ingest(&mut self, sample: &Sample<V>);

    /// Yield the accumulated output points
    ///
    /// Scalar reducers return exactly one point and may be queried
    /// repeatedly; windowed reducers return every point produced so far.
    fn emit(&self) -> Result<Vec<OutputPoint>>;

    /// Get reducer name for debugging/profiling
    fn name(&self) -> &'static str;
}

// ============================================================================
// Reducer Factory
// ============================================================================

/// Reduce function selected by the query planner for one output group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceFunction {
    /// Weighted arithmetic mean over the whole group
    Mean,
    /// Trailing moving average over the given window size
    MovingAverage(usize),
    /// Weighted sum over the whole group
    Sum,
    /// Weighted count over the whole group
    Count,
}

/// Build a boxed reducer for the given function
///
/// The numeric representation `V` is resolved by the calling query-execution
/// layer before construction. Fails fast with
/// [`crate::error::ReduceError::InvalidWindow`] for a zero moving-average
/// window.
pub fn build_reducer<V: SampleValue>(function: ReduceFunction) -> Result<Box<dyn Reducer<V>>> {
    let reducer: Box<dyn Reducer<V>> = match function {
        ReduceFunction::Mean => Box::new(MeanReducer::new()),
        ReduceFunction::MovingAverage(window) => Box::new(MovingAverageReducer::new(window)?),
        ReduceFunction::Sum => Box::new(SumReducer::new()),
        ReduceFunction::Count => Box::new(CountReducer::new()),
    };
    debug!("Built {} reducer for {:?}", reducer.name(), function);
    Ok(reducer)
}

// ============================================================================
// Tests
// ============================================================================
