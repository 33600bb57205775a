//! Repeated trials reduced to a median.
//!
//! Only the median is kept. A single slow trial caused by scheduling or a
//! cold cache moves the mean but not the median.

use crate::error::{BenchError, BenchResult};

/// Median of `samples`, or `None` when there are none.
///
/// Odd counts give the middle value; even counts give the mean of the two
/// middle values.
pub fn median(mut samples: Vec<f64>) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    samples.sort_by(|a, b| a.total_cmp(b));
    let mid = samples.len() / 2;
    if samples.len() % 2 == 0 {
        Some((samples[mid - 1] + samples[mid]) / 2.0)
    } else {
        Some(samples[mid])
    }
}

/// Run `op` `trials` times in sequence and return the median of the
/// milliseconds it reports.
pub fn median_time<F>(trials: usize, mut op: F) -> BenchResult<f64>
where
    F: FnMut() -> f64,
{
    let mut times = Vec::with_capacity(trials);
    for _ in 0..trials {
        times.push(op());
    }
    median(times).ok_or(BenchError::NoTrials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd() {
        assert_eq!(median(vec![5.0, 1.0, 3.0]), Some(3.0));
        assert_eq!(median(vec![2.5]), Some(2.5));
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(vec![5.0, 1.0, 3.0, 7.0]), Some(4.0));
        assert_eq!(median(vec![1.0, 2.0]), Some(1.5));
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(Vec::new()), None);
    }

    #[test]
    fn test_median_ignores_outlier() {
        assert_eq!(median(vec![1.0, 1.1, 900.0, 0.9, 1.0]), Some(1.0));
    }

    #[test]
    fn test_median_time_calls_op_once_per_trial() {
        let durations = [5.0, 1.0, 3.0, 7.0];
        let mut calls = 0;
        let result = median_time(durations.len(), || {
            let d = durations[calls];
            calls += 1;
            d
        });
        assert_eq!(calls, 4);
        assert_eq!(result, Ok(4.0));
    }

    #[test]
    fn test_median_time_zero_trials() {
        let mut calls = 0;
        let result = median_time(0, || {
            calls += 1;
            1.0
        });
        assert_eq!(calls, 0);
        assert_eq!(result, Err(BenchError::NoTrials));
    }
}
