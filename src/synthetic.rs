//! Synthetic noisy sine/cosine data.
//!
//! The random source is always passed in by the caller, so a seeded
//! generator reproduces the same series every time.

use crate::error::WindowError;
use crate::observation::Observation;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Group label of the sine series.
pub const SINE_GROUP: &str = "A";
/// Group label of the cosine series.
pub const COSINE_GROUP: &str = "B";
/// Upper bound on `WaveParams::samples`.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Parameters of the generated waves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveParams {
    /// Number of sample times (each yields one sine and one cosine point)
    pub samples: usize,
    /// First sample time
    pub start: f64,
    /// Last sample time (inclusive)
    pub end: f64,
    /// Standard deviation of the additive Gaussian noise
    pub noise: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        WaveParams {
            samples: 100,
            start: 0.0,
            end: 10.0,
            noise: 0.2,
        }
    }
}

impl WaveParams {
    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn validate(&self) -> Result<(), WindowError> {
        if self.samples == 0 {
            return Err(WindowError::invalid("samples must be greater than 0"));
        }
        if self.samples > MAX_SAMPLES {
            return Err(WindowError::invalid(format!(
                "samples must be at most {}, got {}",
                MAX_SAMPLES, self.samples
            )));
        }
        if !self.start.is_finite() || !self.end.is_finite() || self.start > self.end {
            return Err(WindowError::invalid(format!(
                "sample span [{}, {}] must be finite with start <= end",
                self.start, self.end
            )));
        }
        if !self.noise.is_finite() || self.noise < 0.0 {
            return Err(WindowError::invalid(format!(
                "noise must be a finite number >= 0, got {}",
                self.noise
            )));
        }
        Ok(())
    }

    /// Evenly spaced sample times, both ends included.
    pub fn sample_times(&self) -> Vec<f64> {
        if self.samples == 1 {
            return vec![self.start];
        }
        let step = (self.end - self.start) / (self.samples - 1) as f64;
        (0..self.samples)
            .map(|i| self.start + step * i as f64)
            .collect()
    }
}

/// Generates interleaved noisy sine (`"A"`) and cosine (`"B"`) observations.
///
/// For every sample time the sine point comes first, then the cosine point.
pub fn generate_waves<R>(rng: &mut R, params: &WaveParams) -> Result<Vec<Observation>, WindowError>
where
    R: Rng + ?Sized,
{
    params.validate()?;
    let noise = Normal::new(0.0, params.noise)
        .map_err(|e| WindowError::invalid(format!("noise distribution: {}", e)))?;

    let capacity = params
        .samples
        .checked_mul(2)
        .ok_or_else(|| WindowError::invalid("sample count overflows"))?;
    let mut series = Vec::with_capacity(capacity);
    for t in params.sample_times() {
        series.push(Observation::new(t, t.sin() + noise.sample(rng), SINE_GROUP));
        series.push(Observation::new(t, t.cos() + noise.sample(rng), COSINE_GROUP));
    }

    debug!(
        samples = params.samples,
        noise = params.noise,
        "Generated synthetic waves"
    );

    Ok(series)
}
