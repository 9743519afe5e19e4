//! streamfold - Streaming statistical reducers for time-series aggregation
//!
//! This library implements the reducer core of a time-series query engine's
//! aggregation stage:
//! - Weighted running mean over pre-aggregated sample batches
//! - Trailing moving average over a bounded circular buffer
//! - Sum and count companions with the same weighted-fold semantics
//! - One generic implementation instantiated per numeric representation
//!   (`f64`, `i64`)
//!
//! The calling query-execution layer owns planning, parsing, storage, and
//! grouping of samples into per-series/per-bucket reducer instances; each
//! reducer is a leaf consumed by a single sequential caller.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod reduce;
pub mod types;
pub mod value;

// Re-export main types
pub use error::{ReduceError, Result};
pub use reduce::{
    build_reducer, CountReducer, MeanReducer, MovingAverageReducer, ReduceFunction, Reducer,
    SumReducer,
};
pub use types::{OutputPoint, Sample, Timestamp};
pub use value::SampleValue;
