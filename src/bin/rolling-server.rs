//! Rolling Window API Server Binary
//!
//! Run with: `cargo run --bin rolling-server`

use rolling_analytics::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Note: Tracing is initialized in run_server()
    // Set RUST_LOG environment variable to control log level:
    //   RUST_LOG=debug cargo run --bin rolling-server
    //   RUST_LOG=rolling_analytics::aggregator=trace cargo run --bin rolling-server

    let defaults = ServerConfig::default();
    let host = std::env::var("HOST").unwrap_or(defaults.host);
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(defaults.port);
    let seed = std::env::var("SEED")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(defaults.default_seed);

    let config = ServerConfig::new(host, port, seed);

    println!("Starting Rolling Window API Server...");
    println!("   Host: {}", config.host);
    println!("   Port: {}", config.port);
    println!("   Default seed: {}", config.default_seed);
    println!();
    println!("Server will be available at: http://{}", config.bind_address());
    println!();
    println!("Available endpoints:");
    println!("  GET  /health              - Health check");
    println!("  POST /rolling             - Rolling mean and confidence band");
    println!("  GET  /synthetic           - Noisy sine/cosine series");
    println!("  GET  /synthetic/rolling   - Generate and aggregate in one call");
    println!();

    run_server(config).await?;

    Ok(())
}
