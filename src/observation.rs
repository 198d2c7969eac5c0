use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// A single data point: a position on the independent axis, a measured value
/// and the name of the series it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Independent ordering key
    pub time: f64,
    /// Measured value
    pub value: f64,
    /// Series label (e.g. "A", "B")
    pub group: String,
}

impl Observation {
    /// Creates a new Observation.
    pub fn new(time: f64, value: f64, group: impl Into<String>) -> Self {
        Observation {
            time,
            value,
            group: group.into(),
        }
    }

    /// Creates an Observation from a wall-clock timestamp.
    ///
    /// The timestamp is placed on the numeric time axis as fractional days
    /// since the Unix epoch, so a window `width` of `1.0` spans one day.
    pub fn from_timestamp(timestamp: DateTime<Utc>, value: f64, group: impl Into<String>) -> Self {
        let seconds =
            timestamp.timestamp() as f64 + f64::from(timestamp.timestamp_subsec_nanos()) * 1e-9;
        Observation::new(seconds / SECONDS_PER_DAY, value, group)
    }
}

/// Rolling statistics for one input observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowResult {
    /// Copied from the source observation
    pub time: f64,
    /// Copied from the source observation
    pub group: String,
    /// Mean of the frame values
    pub rolling_average: f64,
    /// Lower confidence bound of the mean
    pub rolling_lower: f64,
    /// Upper confidence bound of the mean
    pub rolling_upper: f64,
}

impl WindowResult {
    /// Width of the confidence band.
    pub fn band_width(&self) -> f64 {
        self.rolling_upper - self.rolling_lower
    }
}
