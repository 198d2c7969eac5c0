//! Rolling Window Aggregator
//!
//! Computes, for every observation, the mean and a confidence band over the
//! observations of the same partition whose time lies within `width / 2` of
//! its own. Results come back one per observation, in input order.

use crate::analytics::intervals::{FrameSummary, IntervalEstimator, NormalApproxInterval};
use crate::analytics::partition::partition_indices;
use crate::analytics::windows::{CenteredWindow, FrameStrategy};
use crate::config::WindowConfig;
use crate::error::WindowError;
use crate::observation::{Observation, WindowResult};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, trace};

/// Stateless rolling mean / confidence band calculator.
///
/// Holds only its frame strategy and interval estimator, so one instance can
/// be shared and called concurrently with any series and config.
#[derive(Clone)]
pub struct RollingWindowAggregator {
    strategy: FrameStrategy,
    estimator: Arc<dyn IntervalEstimator>,
}

impl std::fmt::Debug for RollingWindowAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RollingWindowAggregator")
            .field("strategy", &self.strategy)
            .field("estimator", &self.estimator.name())
            .finish()
    }
}

impl Default for RollingWindowAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl RollingWindowAggregator {
    /// Sweep frames with a 95% normal-approximation band.
    pub fn new() -> Self {
        RollingWindowAggregator {
            strategy: FrameStrategy::default(),
            estimator: Arc::new(NormalApproxInterval::default()),
        }
    }

    pub fn with_strategy(mut self, strategy: FrameStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_estimator<E>(mut self, estimator: E) -> Self
    where
        E: IntervalEstimator + 'static,
    {
        self.estimator = Arc::new(estimator);
        self
    }

    pub fn strategy(&self) -> FrameStrategy {
        self.strategy
    }

    pub fn estimator_name(&self) -> &'static str {
        self.estimator.name()
    }

    /// Computes rolling statistics for every observation.
    ///
    /// # Errors
    /// Returns `WindowError::InvalidConfiguration` before doing any work when
    /// the width is not a finite positive number, when `groupby` is present
    /// but empty, or when it names an unknown field.
    ///
    /// # Examples
    /// ```
    /// use rolling_analytics::{Observation, RollingWindowAggregator, WindowConfig};
    ///
    /// let series = vec![
    ///     Observation::new(0.0, 0.0, "A"),
    ///     Observation::new(1.0, 2.0, "A"),
    ///     Observation::new(2.0, 4.0, "A"),
    /// ];
    /// let results = RollingWindowAggregator::new()
    ///     .compute(&series, &WindowConfig::new(2.0))
    ///     .unwrap();
    ///
    /// assert_eq!(results[1].rolling_average, 2.0);
    /// assert!(results[1].rolling_lower <= 2.0 && 2.0 <= results[1].rolling_upper);
    /// ```
    pub fn compute(
        &self,
        series: &[Observation],
        config: &WindowConfig,
    ) -> Result<Vec<WindowResult>, WindowError> {
        let resolved = config.resolve()?;
        let partitions = partition_indices(series, resolved.groupby.as_deref());
        let window = CenteredWindow::new(resolved.half_width, self.strategy);

        debug!(
            observations = series.len(),
            partitions = partitions.len(),
            width = config.width,
            strategy = %self.strategy,
            "Computing rolling window"
        );

        let summaries: Vec<Vec<(usize, FrameSummary)>> = partitions
            .iter()
            .map(|members| self.summarize_partition(series, members, &window))
            .collect();

        Ok(assemble(series, summaries))
    }

    /// Same as [`compute`](Self::compute), with partitions evaluated on the
    /// rayon thread pool. Output is identical to the sequential path.
    pub fn compute_parallel(
        &self,
        series: &[Observation],
        config: &WindowConfig,
    ) -> Result<Vec<WindowResult>, WindowError> {
        let resolved = config.resolve()?;
        let partitions = partition_indices(series, resolved.groupby.as_deref());
        let window = CenteredWindow::new(resolved.half_width, self.strategy);

        debug!(
            observations = series.len(),
            partitions = partitions.len(),
            width = config.width,
            strategy = %self.strategy,
            "Computing rolling window in parallel"
        );

        let summaries: Vec<Vec<(usize, FrameSummary)>> = partitions
            .par_iter()
            .map(|members| self.summarize_partition(series, members, &window))
            .collect();

        Ok(assemble(series, summaries))
    }

    /// Summarizes every member of one partition, tagged with its input index.
    fn summarize_partition(
        &self,
        series: &[Observation],
        members: &[usize],
        window: &CenteredWindow,
    ) -> Vec<(usize, FrameSummary)> {
        // Observations without a usable time never match any frame bound.
        let (mut timed, untimed): (Vec<usize>, Vec<usize>) = members
            .iter()
            .copied()
            .partition(|&index| !series[index].time.is_nan());

        // Stable sort: ties stay in input order, fixing the frame member order.
        timed.sort_by(|&a, &b| series[a].time.total_cmp(&series[b].time));

        let times: Vec<f64> = timed.iter().map(|&index| series[index].time).collect();
        let values: Vec<f64> = timed.iter().map(|&index| series[index].value).collect();
        let frames = window.apply(&times, &values, |frame| self.estimator.summarize(frame));

        trace!(
            members = members.len(),
            untimed = untimed.len(),
            "Summarized partition"
        );

        timed
            .into_iter()
            .zip(frames)
            .chain(untimed.into_iter().map(|index| (index, FrameSummary::empty())))
            .collect()
    }
}

/// Reassembles per-partition summaries into input order.
fn assemble(series: &[Observation], partitions: Vec<Vec<(usize, FrameSummary)>>) -> Vec<WindowResult> {
    let mut slots = vec![FrameSummary::empty(); series.len()];
    for (index, summary) in partitions.into_iter().flatten() {
        slots[index] = summary;
    }

    series
        .iter()
        .zip(slots)
        .map(|(observation, summary)| WindowResult {
            time: observation.time,
            group: observation.group.clone(),
            rolling_average: summary.mean,
            rolling_lower: summary.lower,
            rolling_upper: summary.upper,
        })
        .collect()
}

/// Computes rolling statistics with the default aggregator.
pub fn compute(series: &[Observation], config: &WindowConfig) -> Result<Vec<WindowResult>, WindowError> {
    RollingWindowAggregator::new().compute(series, config)
}
