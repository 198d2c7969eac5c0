//! Slider Session Example
//!
//! Replays a presenter dragging the noise and window-width sliders:
//! - Each slider change is an explicit recomputation, nothing is cached
//! - Same seed, same noise: the generated series never changes
//! - Wider windows smooth the curve and widen the band on a clean signal

use rand::rngs::StdRng;
use rand::SeedableRng;
use rolling_analytics::{
    generate_waves, RollingWindowAggregator, WaveParams, WindowConfig, WindowResult, SINE_GROUP,
};

fn mean_band(results: &[WindowResult]) -> f64 {
    results.iter().map(WindowResult::band_width).sum::<f64>() / results.len() as f64
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("📊 Rolling Window Slider Session\n");

    let seed = 42;
    let aggregator = RollingWindowAggregator::new();

    for noise in [0.0, 0.2, 0.5] {
        let params = WaveParams::default().with_noise(noise);
        let series = generate_waves(&mut StdRng::seed_from_u64(seed), &params)?;
        println!(
            "🎚  noise = {:.1}: {} observations (seed {})",
            noise,
            series.len(),
            seed
        );

        for width in [0.5, 1.0, 2.0] {
            let config = WindowConfig::new(width).grouped_by(["group"]);
            let results = aggregator.compute(&series, &config)?;
            let first_sine = results
                .iter()
                .find(|r| r.group == SINE_GROUP)
                .map(|r| r.rolling_average)
                .unwrap_or(f64::NAN);

            println!(
                "   width {:.1}: mean band {:.4}, first sine average {:+.4}",
                width,
                mean_band(&results),
                first_sine
            );
        }
        println!();
    }

    println!("🧾 Transform configuration sent to the chart layer:");
    println!("{}", WindowConfig::new(1.0).grouped_by(["group"]).to_json());

    println!("\n🚫 A slider dragged to zero is rejected, not clamped:");
    let series = generate_waves(&mut StdRng::seed_from_u64(seed), &WaveParams::default())?;
    match aggregator.compute(&series, &WindowConfig::new(0.0)) {
        Ok(_) => println!("   unexpected success"),
        Err(e) => println!("   {}", e),
    }

    Ok(())
}
