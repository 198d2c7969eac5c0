pub mod error;
pub mod observation;
pub mod config;
pub mod analytics;
pub mod aggregator;
pub mod synthetic;
pub mod server;

pub use error::WindowError;
pub use observation::{Observation, WindowResult};
pub use config::{GroupField, WindowConfig};
pub use analytics::{FrameStrategy, FrameSummary, IntervalEstimator, NormalApproxInterval};
pub use aggregator::{compute, RollingWindowAggregator};
pub use synthetic::{generate_waves, WaveParams, COSINE_GROUP, MAX_SAMPLES, SINE_GROUP};
pub use server::{create_router, run_server, ApiError, AppState, ServerConfig};
