use rand::rngs::StdRng;
use rand::SeedableRng;
use rolling_analytics::{
    generate_waves, Observation, RollingWindowAggregator, WaveParams, WindowConfig, WindowError,
};
use chrono::{Duration, TimeZone, Utc};

#[test]
fn run_demo_noise_slider_regenerates_series() {
    let quiet = WaveParams::default().with_noise(0.0);
    let loud = WaveParams::default().with_noise(0.8);

    let quiet_series = generate_waves(&mut StdRng::seed_from_u64(42), &quiet).unwrap();
    let loud_series = generate_waves(&mut StdRng::seed_from_u64(42), &loud).unwrap();

    assert_eq!(quiet_series.len(), loud_series.len());
    assert!(
        quiet_series
            .iter()
            .zip(&loud_series)
            .any(|(a, b)| a.value != b.value),
        "Noise slider should change generated values"
    );

    let config = WindowConfig::new(1.0).grouped_by(["group"]);
    let aggregator = RollingWindowAggregator::new();
    let quiet_band: f64 = aggregator
        .compute(&quiet_series, &config)
        .unwrap()
        .iter()
        .map(|r| r.band_width())
        .sum();
    let loud_band: f64 = aggregator
        .compute(&loud_series, &config)
        .unwrap()
        .iter()
        .map(|r| r.band_width())
        .sum();
    assert!(
        loud_band > quiet_band,
        "Noisier data should produce a wider confidence band"
    );
}

#[test]
fn run_demo_config_text_drives_chart_layers() {
    let config = WindowConfig::from_json(r#"{ "width": 2.0, "groupby": ["group"] }"#).unwrap();
    let series = generate_waves(
        &mut StdRng::seed_from_u64(7),
        &WaveParams::default().with_samples(20),
    )
    .unwrap();

    let results = RollingWindowAggregator::new().compute(&series, &config).unwrap();
    let rows = serde_json::to_value(&results).unwrap();
    let rows = rows.as_array().unwrap();

    assert_eq!(rows.len(), 40);
    for row in rows {
        for field in ["time", "group", "rolling_average", "rolling_lower", "rolling_upper"] {
            assert!(row.get(field).is_some(), "missing field {}", field);
        }
        let lower = row["rolling_lower"].as_f64().unwrap();
        let average = row["rolling_average"].as_f64().unwrap();
        let upper = row["rolling_upper"].as_f64().unwrap();
        assert!(lower <= average && average <= upper);
    }
}

#[test]
fn run_demo_width_slider_at_zero_is_rejected() {
    let err = WindowConfig::from_json(r#"{ "width": 0 }"#).unwrap_err();
    assert!(matches!(err, WindowError::InvalidConfiguration(_)));
}

#[test]
fn run_demo_daily_timestamps_use_day_widths() {
    let base = Utc.with_ymd_and_hms(2024, 1, 2, 16, 0, 0).unwrap();
    let series: Vec<Observation> = (0..5)
        .map(|i| Observation::from_timestamp(base + Duration::days(i), 150.0 + i as f64, "AAPL"))
        .collect();

    // One day either side, with slack for rounding on the day axis
    let results = RollingWindowAggregator::new()
        .compute(&series, &WindowConfig::new(2.5))
        .unwrap();

    assert!((results[0].rolling_average - 150.5).abs() < 1e-9);
    assert!((results[2].rolling_average - 152.0).abs() < 1e-9);
    assert!((results[4].rolling_average - 153.5).abs() < 1e-9);
}
