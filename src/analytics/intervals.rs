use crate::analytics::primitives::{mean, sample_std_dev, standard_error, valid_count, Z_95};

/// Mean and confidence bounds computed over one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSummary {
    pub mean: f64,
    pub lower: f64,
    pub upper: f64,
    /// Number of non-NaN values that contributed
    pub count: usize,
}

impl FrameSummary {
    /// Summary of a frame with no usable values.
    pub fn empty() -> Self {
        FrameSummary {
            mean: f64::NAN,
            lower: f64::NAN,
            upper: f64::NAN,
            count: 0,
        }
    }

    /// Zero-width band around the mean.
    pub fn point(mean: f64, count: usize) -> Self {
        FrameSummary {
            mean,
            lower: mean,
            upper: mean,
            count,
        }
    }
}

/// Stateless estimator for a confidence band around a frame mean.
pub trait IntervalEstimator: Send + Sync {
    fn name(&self) -> &'static str;
    fn summarize(&self, frame: &[f64]) -> FrameSummary;
}

/// Normal-approximation interval: `mean ± z * s / sqrt(n)` with the sample
/// standard deviation `s`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalApproxInterval {
    z: f64,
}

impl NormalApproxInterval {
    pub fn new(z: f64) -> Self {
        NormalApproxInterval { z: z.abs() }
    }

    pub fn z(&self) -> f64 {
        self.z
    }
}

impl Default for NormalApproxInterval {
    fn default() -> Self {
        NormalApproxInterval::new(Z_95)
    }
}

impl IntervalEstimator for NormalApproxInterval {
    fn name(&self) -> &'static str {
        "normal_approx"
    }

    fn summarize(&self, frame: &[f64]) -> FrameSummary {
        let count = valid_count(frame);
        if count == 0 {
            return FrameSummary::empty();
        }

        let center = mean(frame);
        if count < 2 {
            return FrameSummary::point(center, count);
        }

        let margin = self.z * standard_error(sample_std_dev(frame), count);
        FrameSummary {
            mean: center,
            lower: center - margin,
            upper: center + margin,
            count,
        }
    }
}
