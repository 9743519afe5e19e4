//! Trailing moving-average reducer
//!
//! Maintains a running sum over the last N consumed samples using a
//! fixed-capacity circular buffer, so memory stays bounded at N slots
//! regardless of input length.
//!
//! # Emission policy
//!
//! Emission is incremental: once the window first fills (including the
//! ingestion that fills it), every ingestion appends one output point at the
//! current sample's timestamp, and [`MovingAverageReducer::emit`] returns the
//! whole accumulated series. Consumers that only want the latest window can
//! take the last element. While the buffer is still filling, nothing is
//! emitted.
//!
//! Unlike the mean reducer, sample weight is ignored here: every consumed
//! sample occupies exactly one buffer slot, even if it is itself a
//! pre-aggregated batch, and each output point reports `aggregated = N`.

use crate::error::{ReduceError, Result};
use crate::reduce::Reducer;
use crate::types::{OutputPoint, Sample};
use crate::value::SampleValue;

/// Trailing moving average over the last N samples of one output group
///
/// The buffer starts empty (FILLING) and transitions to FULL exactly when
/// the Nth sample arrives; from then on each ingestion overwrites the oldest
/// slot in place. `sum` always equals the arithmetic sum of the buffer's
/// current contents.
///
/// # Example
///
/// ```rust
/// use streamfold::{MovingAverageReducer, Reducer, Sample};
///
/// let mut ma = MovingAverageReducer::new(3).unwrap();
/// for (i, v) in [1.0, 2.0, 3.0, 4.0, 5.0].into_iter().enumerate() {
///     ma.ingest(&Sample::new(i as i64, v));
/// }
///
/// let points = ma.emit().unwrap();
/// let values: Vec<f64> = points.iter().map(|p| p.value).collect();
/// assert_eq!(values, vec![2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Clone)]
pub struct MovingAverageReducer<V> {
    /// Configured window size N, immutable after construction
    window: usize,

    /// Ring buffer holding at most `window` values; grows by push while
    /// FILLING, then is overwritten in place
    buf: Vec<V>,

    /// Index of the next slot to overwrite once the buffer is full
    pos: usize,

    /// Arithmetic sum of the buffer's current contents
    sum: V,

    /// Accumulated output, one point per ingestion once the window is full
    points: Vec<OutputPoint>,
}

impl<V: SampleValue> MovingAverageReducer<V> {
    /// Create a new moving-average reducer with the given window size
    ///
    /// Fails with [`ReduceError::InvalidWindow`] when `window` is zero; a
    /// circular buffer of zero slots is meaningless and is never clamped.
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(ReduceError::InvalidWindow { size: window });
        }

        Ok(Self {
            window,
            buf: Vec::with_capacity(window),
            pos: 0,
            sum: V::zero(),
            points: Vec::new(),
        })
    }

    /// Configured window size
    pub fn window(&self) -> usize {
        self.window
    }

    /// Whether the buffer has reached capacity
    pub fn is_full(&self) -> bool {
        self.buf.len() == self.window
    }
}

impl<V: SampleValue> Reducer<V> for MovingAverageReducer<V> {
    fn ingest(&mut self, sample: &Sample<V>) {
        if self.buf.len() < self.window {
            self.buf.push(sample.value);
        } else {
            self.sum -= self.buf[self.pos];
            self.buf[self.pos] = sample.value;
        }
        self.sum += sample.value;
        self.pos = (self.pos + 1) % self.window;

        if self.buf.len() == self.window {
            self.points.push(OutputPoint::new(
                sample.timestamp,
                self.sum.as_f64() / self.window as f64,
                self.window as u32,
            ));
        }
    }

    /// Yield the accumulated moving-average series
    ///
    /// Empty while the buffer has never reached capacity. May be called
    /// repeatedly as new output becomes available.
    fn emit(&self) -> Result<Vec<OutputPoint>> {
        Ok(self.points.clone())
    }

    fn name(&self) -> &'static str {
        "MovingAverage"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn feed(ma: &mut MovingAverageReducer<f64>, values: &[f64]) {
        for (i, &v) in values.iter().enumerate() {
            ma.ingest(&Sample::new(i as i64, v));
        }
    }

    #[test]
    fn test_window_three_emits_incrementally() {
        let mut ma = MovingAverageReducer::new(3).unwrap();
        feed(&mut ma, &[1.0, 2.0, 3.0, 4.0, 5.0]);

        let points = ma.emit().unwrap();
        assert_eq!(points.len(), 3);

        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![2.0, 3.0, 4.0]);

        // Output timestamps come from the sample completing each window
        let timestamps: Vec<_> = points.iter().map(|p| p.timestamp).collect();
        assert_eq!(timestamps, vec![Some(2), Some(3), Some(4)]);

        // Weight is always the full window, regardless of sample weight
        assert!(points.iter().all(|p| p.aggregated == 3));
    }

    #[test]
    fn test_underfull_window_emits_nothing() {
        let mut ma = MovingAverageReducer::new(3).unwrap();
        feed(&mut ma, &[1.0, 2.0]);

        assert!(!ma.is_full());
        assert!(ma.emit().unwrap().is_empty());
    }

    #[test]
    fn test_window_of_one_tracks_input() {
        let mut ma = MovingAverageReducer::new(1).unwrap();
        feed(&mut ma, &[7.0, 8.0, 9.0]);

        let values: Vec<f64> = ma.emit().unwrap().iter().map(|p| p.value).collect();
        assert_eq!(values, vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_buffer_stays_bounded() {
        let mut ma = MovingAverageReducer::new(4).unwrap();
        for i in 0..10_000 {
            ma.ingest(&Sample::new(i, i as f64));
        }

        assert_eq!(ma.buf.len(), 4);
        assert_eq!(ma.buf.capacity(), 4);
        // Trailing window over 9996..=9999
        let last = ma.emit().unwrap().pop().unwrap();
        assert!((last.value - 9997.5).abs() < EPSILON);
    }

    #[test]
    fn test_sum_matches_buffer_contents_after_wrap() {
        let mut ma = MovingAverageReducer::new(3).unwrap();
        feed(&mut ma, &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0]);

        let expected: f64 = ma.buf.iter().sum();
        assert!((ma.sum - expected).abs() < EPSILON);
    }

    #[test]
    fn test_sample_weight_is_ignored() {
        let mut weighted = MovingAverageReducer::new(2).unwrap();
        weighted.ingest(&Sample::aggregated(0, 1.0, 10));
        weighted.ingest(&Sample::aggregated(1, 3.0, 10));

        let points = weighted.emit().unwrap();
        assert!((points[0].value - 2.0).abs() < EPSILON);
        assert_eq!(points[0].aggregated, 2);
    }

    #[test]
    fn test_integer_variant_divides_in_float() {
        let mut ma = MovingAverageReducer::new(2).unwrap();
        ma.ingest(&Sample::new(0, 1i64));
        ma.ingest(&Sample::new(1, 2i64));

        let points = ma.emit().unwrap();
        assert!((points[0].value - 1.5).abs() < EPSILON);
    }

    #[test]
    fn test_zero_window_is_rejected() {
        assert_eq!(
            MovingAverageReducer::<f64>::new(0).unwrap_err(),
            ReduceError::InvalidWindow { size: 0 }
        );
    }
}
