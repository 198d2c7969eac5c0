//! Stateless statistics primitives used by the interval estimators.
//!
//! These are pure functions over slices of frame values. NaN entries are
//! treated as missing and skipped, so a frame with gaps still produces
//! statistics from whatever values it does have.

/// Two-sided 95% critical value of the standard normal distribution.
pub const Z_95: f64 = 1.96;

/// Counts the non-NaN values in the slice.
pub fn valid_count(values: &[f64]) -> usize {
    values.iter().filter(|v| !v.is_nan()).count()
}

/// Arithmetic mean of the non-NaN values, or `f64::NAN` when there are none.
pub fn mean(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &value in values.iter().filter(|v| !v.is_nan()) {
        sum += value;
        count += 1;
    }

    if count == 0 {
        return f64::NAN;
    }
    sum / count as f64
}

/// Sample standard deviation (divides by N - 1) of the non-NaN values.
///
/// Returns `f64::NAN` when fewer than two values are available, since the
/// estimator is undefined there.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    let n = valid_count(values);
    if n < 2 {
        return f64::NAN;
    }

    let mean = mean(values);
    let sum_squared_diff: f64 = values
        .iter()
        .filter(|v| !v.is_nan())
        .map(|&value| (value - mean).powi(2))
        .sum();

    (sum_squared_diff / (n - 1) as f64).sqrt()
}

/// Standard error of the mean for `count` samples with the given deviation.
pub fn standard_error(std_dev: f64, count: usize) -> f64 {
    if count == 0 {
        return f64::NAN;
    }
    std_dev / (count as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_skips_nan() {
        assert_eq!(mean(&[1.0, f64::NAN, 3.0]), 2.0);
    }

    #[test]
    fn mean_empty_returns_nan() {
        assert!(mean(&[]).is_nan());
        assert!(mean(&[f64::NAN]).is_nan());
    }

    #[test]
    fn sample_std_dev_uses_n_minus_one() {
        // Values 0, 2, 4: squared deviations 4 + 0 + 4 = 8, / 2 = 4
        let result = sample_std_dev(&[0.0, 2.0, 4.0]);
        assert!((result - 2.0).abs() < 1e-12);
    }

    #[test]
    fn sample_std_dev_requires_two_values() {
        assert!(sample_std_dev(&[]).is_nan());
        assert!(sample_std_dev(&[5.0]).is_nan());
        assert!(sample_std_dev(&[5.0, f64::NAN]).is_nan());
    }

    #[test]
    fn sample_std_dev_of_constant_is_zero() {
        assert_eq!(sample_std_dev(&[3.0, 3.0, 3.0, 3.0]), 0.0);
    }

    #[test]
    fn standard_error_scales_with_root_n() {
        assert!((standard_error(2.0, 4) - 1.0).abs() < 1e-12);
        assert!(standard_error(1.0, 0).is_nan());
    }
}
