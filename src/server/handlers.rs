//! HTTP request handlers for API endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use super::error::ApiError;
use super::state::AppState;
use crate::config::WindowConfig;
use crate::observation::{Observation, WindowResult};
use crate::synthetic::{generate_waves, WaveParams, MAX_SAMPLES};

/// Health check endpoint
///
/// Returns a simple status response to verify the server is running
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

/// Body of a rolling window request
#[derive(Debug, Deserialize)]
pub struct RollingRequest {
    pub series: Vec<Observation>,
    pub config: WindowConfig,
}

/// Response carrying one result per input observation
#[derive(Debug, Serialize)]
pub struct RollingResponse {
    pub config: WindowConfig,
    pub results: Vec<WindowResult>,
}

/// Response carrying a generated series
#[derive(Debug, Serialize)]
pub struct SeriesResponse {
    pub seed: u64,
    pub params: WaveParams,
    pub series: Vec<Observation>,
}

/// Query parameters for synthetic data
#[derive(Debug, Default, Deserialize)]
pub struct SyntheticQueryParams {
    pub seed: Option<u64>,
    pub samples: Option<usize>,
    pub noise: Option<f64>,
}

impl SyntheticQueryParams {
    fn wave_params(&self) -> Result<WaveParams, ApiError> {
        let defaults = WaveParams::default();
        let samples = self.samples.unwrap_or(defaults.samples);
        if samples > MAX_SAMPLES {
            return Err(ApiError::InvalidParameter(format!(
                "samples must be at most {}, got {}",
                MAX_SAMPLES, samples
            )));
        }

        Ok(WaveParams {
            samples,
            noise: self.noise.unwrap_or(defaults.noise),
            ..defaults
        })
    }
}

/// Query parameters for generate-then-aggregate requests
#[derive(Debug, Deserialize)]
pub struct SyntheticRollingQueryParams {
    pub seed: Option<u64>,
    pub samples: Option<usize>,
    pub noise: Option<f64>,
    pub width: f64,
    /// Partition by group (default: true)
    pub grouped: Option<bool>,
}

/// Runs the aggregator off the async runtime.
async fn aggregate(
    state: &AppState,
    series: Vec<Observation>,
    config: WindowConfig,
) -> Result<RollingResponse, ApiError> {
    config.validate()?;

    let aggregator = state.aggregator.clone();
    let results = tokio::task::spawn_blocking(move || {
        aggregator
            .compute_parallel(&series, &config)
            .map(|results| RollingResponse { config, results })
    })
    .await??;

    Ok(results)
}

fn synthesize(seed: u64, params: &WaveParams) -> Result<Vec<Observation>, ApiError> {
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(generate_waves(&mut rng, params)?)
}

/// POST /rolling - Compute rolling statistics for a caller-supplied series
pub async fn rolling_window(
    State(state): State<Arc<AppState>>,
    request: Result<Json<RollingRequest>, JsonRejection>,
) -> Result<Json<RollingResponse>, ApiError> {
    let Json(request) = request?;
    tracing::debug!(
        observations = request.series.len(),
        width = request.config.width,
        "Rolling window request"
    );

    let response = aggregate(&state, request.series, request.config).await?;
    Ok(Json(response))
}

/// GET /synthetic - Generate noisy sine/cosine series
pub async fn synthetic_series(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SyntheticQueryParams>, QueryRejection>,
) -> Result<Json<SeriesResponse>, ApiError> {
    let Query(query) = query?;
    let seed = query.seed.unwrap_or(state.default_seed);
    let params = query.wave_params()?;
    let series = synthesize(seed, &params)?;

    Ok(Json(SeriesResponse {
        seed,
        params,
        series,
    }))
}

/// GET /synthetic/rolling - Generate a series and aggregate it in one call
pub async fn synthetic_rolling(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SyntheticRollingQueryParams>, QueryRejection>,
) -> Result<Json<RollingResponse>, ApiError> {
    let Query(query) = query?;
    let synthetic = SyntheticQueryParams {
        seed: query.seed,
        samples: query.samples,
        noise: query.noise,
    };
    let seed = synthetic.seed.unwrap_or(state.default_seed);

    let mut config = WindowConfig::new(query.width);
    if query.grouped.unwrap_or(true) {
        config = config.grouped_by(["group"]);
    }
    // Reject a bad slider value before spending time on generation.
    config.validate()?;

    let series = synthesize(seed, &synthetic.wave_params()?)?;
    let response = aggregate(&state, series, config).await?;
    Ok(Json(response))
}
