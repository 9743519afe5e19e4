//! Core data types consumed and produced by the reducers
//!
//! # Key Types
//!
//! - **`Sample`**: one input unit, possibly a pre-aggregated batch of raw points
//! - **`OutputPoint`**: one result unit emitted by a reducer
//! - **`Timestamp`**: nanoseconds since the Unix epoch
//!
//! # Example
//!
//! ```rust
//! use streamfold::types::{OutputPoint, Sample};
//!
//! // A raw measurement
//! let raw = Sample::new(1_000_000_000, 42.5);
//!
//! // A batch that already folds three raw points with mean value 4.0
//! let batch = Sample::aggregated(2_000_000_000, 4.0, 3);
//! assert_eq!(batch.aggregated, 3);
//!
//! // A scalar summary carries no inherent timestamp
//! let summary = OutputPoint::summary(3.5, 4);
//! assert!(summary.timestamp.is_none());
//! ```

use serde::{Deserialize, Serialize};

/// Unix timestamp in nanoseconds since epoch (1970-01-01 00:00:00 UTC)
pub type Timestamp = i64;

/// A single input unit for a reducer
///
/// Each sample optionally represents a pre-aggregated batch: `aggregated`
/// counts the raw points already folded into `value`. A value of 0 or 1 means
/// the sample is one raw point; 2 or more means `value` is the pre-computed
/// mean of that many raw points.
///
/// The value representation is generic so reducers are written once and
/// instantiated for `f64` and `i64` (see [`crate::value::SampleValue`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample<V> {
    /// Timestamp in nanoseconds; callers feed samples in non-decreasing order
    pub timestamp: Timestamp,

    /// Measurement value, or the pre-computed mean of the folded batch
    pub value: V,

    /// Number of raw points this sample represents (0 and 1 both mean one)
    pub aggregated: u32,
}

impl<V> Sample<V> {
    /// Create a sample representing a single raw point
    pub fn new(timestamp: Timestamp, value: V) -> Self {
        Self {
            timestamp,
            value,
            aggregated: 1,
        }
    }

    /// Create a sample representing a pre-aggregated batch of `aggregated`
    /// raw points whose mean is `value`
    pub fn aggregated(timestamp: Timestamp, value: V, aggregated: u32) -> Self {
        Self {
            timestamp,
            value,
            aggregated,
        }
    }
}

/// A single result unit produced by a reducer
///
/// Output values are always floating-point, even for integer-valued input
/// (the final division is performed in `f64`). `aggregated` records how many
/// raw points were folded into this result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputPoint {
    /// Timestamp of the result, or `None` for scalar summaries with no
    /// inherent time (e.g. the mean over a whole group)
    pub timestamp: Option<Timestamp>,

    /// Computed result value
    pub value: f64,

    /// Number of raw points folded into this result
    pub aggregated: u32,
}

impl OutputPoint {
    /// Create an output point at a concrete timestamp
    pub fn new(timestamp: Timestamp, value: f64, aggregated: u32) -> Self {
        Self {
            timestamp: Some(timestamp),
            value,
            aggregated,
        }
    }

    /// Create a timeless scalar summary
    ///
    /// Used by reducers whose result is a single number describing the whole
    /// input (mean, sum, count); an absent timestamp avoids colliding with a
    /// legitimate timestamp of zero.
    pub fn summary(value: f64, aggregated: u32) -> Self {
        Self {
            timestamp: None,
            value,
            aggregated,
        }
    }
}
