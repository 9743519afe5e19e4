//! Numeric representation abstraction for reducer values
//!
//! The query layer resolves whether a series is floating-point or integer
//! before a reducer is constructed. `SampleValue` is the single seam that
//! lets the weighted-accumulation and circular-buffer algorithms be written
//! once and instantiated per representation, instead of duplicating each
//! reducer for `f64` and `i64`.

use std::fmt::Debug;
use std::ops::Mul;

use num_traits::{NumAssignOps, Zero};

/// A numeric sample representation a reducer can accumulate
///
/// Implemented for `f64` and `i64`. The arithmetic bounds come from
/// `num-traits`; the two conversion methods cover the cases the reducers
/// need beyond plain arithmetic:
///
/// - folding a pre-aggregated batch multiplies a value by its weight
///   ([`SampleValue::from_weight`] is lossless for both instantiations), and
/// - every final division happens in `f64` ([`SampleValue::as_f64`]), so
///   integer reducers still produce floating-point results.
pub trait SampleValue:
    Copy + PartialEq + Debug + Zero + NumAssignOps + Mul<Output = Self> + Send + Sync + 'static
{
    /// Convert an aggregation weight into this representation
    fn from_weight(weight: u32) -> Self;

    /// Convert into `f64` for the final division
    fn as_f64(self) -> f64;
}

impl SampleValue for f64 {
    #[inline]
    fn from_weight(weight: u32) -> Self {
        f64::from(weight)
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

impl SampleValue for i64 {
    #[inline]
    fn from_weight(weight: u32) -> Self {
        i64::from(weight)
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}
