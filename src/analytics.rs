//! Analytics building blocks
//!
//! Pure, stateless pieces the rolling window aggregator is assembled from:
//! statistics primitives over frame slices, confidence interval estimators,
//! time-based frame strategies and partitioning by group key.

pub mod intervals;
pub mod partition;
pub mod primitives;
pub mod windows;

pub use intervals::{FrameSummary, IntervalEstimator, NormalApproxInterval};
pub use partition::partition_indices;
pub use primitives::{mean, sample_std_dev, standard_error, Z_95};
pub use windows::{CenteredWindow, FrameStrategy};
