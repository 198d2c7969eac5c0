//! Windowing strategies that supply frame slices to primitives.
//!
//! A `CenteredWindow` walks a time-sorted partition and hands each
//! observation's frame (every value whose time lies within `± half_width`)
//! to a primitive. Both strategies present frame members in the same order,
//! so any primitive sees identical input either way.

use serde::{Deserialize, Serialize};

/// How frame membership is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameStrategy {
    /// Rescans the whole partition for every observation.
    BruteForce,
    /// Two-pointer sweep; both bounds only ever move forward.
    #[default]
    Sweep,
}

impl std::fmt::Display for FrameStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repr = match self {
            FrameStrategy::BruteForce => "brute_force",
            FrameStrategy::Sweep => "sweep",
        };
        write!(f, "{repr}")
    }
}

/// Symmetric, inclusive, time-based sliding window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenteredWindow {
    half_width: f64,
    strategy: FrameStrategy,
}

impl CenteredWindow {
    pub fn new(half_width: f64, strategy: FrameStrategy) -> Self {
        CenteredWindow {
            half_width,
            strategy,
        }
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Applies `primitive` to the frame of every position.
    ///
    /// `times` must be sorted ascending and free of NaN; `values[i]` belongs
    /// to `times[i]`. Output `i` is the primitive applied to the frame
    /// centered on `times[i]`.
    pub fn apply<T, F>(&self, times: &[f64], values: &[f64], mut primitive: F) -> Vec<T>
    where
        F: FnMut(&[f64]) -> T,
    {
        debug_assert_eq!(times.len(), values.len());
        if times.is_empty() {
            return Vec::new();
        }

        match self.strategy {
            FrameStrategy::BruteForce => {
                let mut frame = Vec::with_capacity(times.len());
                times
                    .iter()
                    .map(|&center| {
                        let (lower, upper) = self.bounds(center);
                        frame.clear();
                        frame.extend(
                            times
                                .iter()
                                .zip(values)
                                .filter(|(t, _)| **t >= lower && **t <= upper)
                                .map(|(_, &v)| v),
                        );
                        primitive(&frame)
                    })
                    .collect()
            }
            FrameStrategy::Sweep => {
                let len = times.len();
                let mut start = 0;
                let mut end = 0;
                let mut result = Vec::with_capacity(len);

                for &center in times {
                    let (lower, upper) = self.bounds(center);
                    while start < len && times[start] < lower {
                        start += 1;
                    }
                    end = end.max(start);
                    while end < len && times[end] <= upper {
                        end += 1;
                    }
                    result.push(primitive(&values[start..end]));
                }

                result
            }
        }
    }

    fn bounds(&self, center: f64) -> (f64, f64) {
        (center - self.half_width, center + self.half_width)
    }
}
