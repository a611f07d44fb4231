use snowload_core::{
    config::{PressureParams, SimConfig, SnowfallParams},
    error::SimError,
};

#[test]
fn defaults_match_documented_values() {
    let config = SimConfig::default();
    assert_eq!(config.seed, 42);
    assert_eq!(config.num_steps, 1008);
    assert_eq!(config.snowfall.phi, 0.9);
    assert_eq!(config.snowfall.mean_snowfall, 0.1);
    assert_eq!(config.snowfall.std_snowfall, 0.05);
    assert_eq!(config.snowfall.timestep_minutes, 10.0);
    assert_eq!(config.pressure.snow_density, 1.0);
    assert_eq!(config.pressure.drainage_coefficient, 0.01);
    assert_eq!(config.pressure.melt_coefficient, 0.01);
    config.validate().unwrap();
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let json = r#"{ "num_steps": 288, "snowfall": { "phi": 0.5 } }"#;
    let config: SimConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.num_steps, 288);
    assert_eq!(config.snowfall.phi, 0.5);
    assert_eq!(config.snowfall.mean_snowfall, SnowfallParams::default().mean_snowfall);
    assert_eq!(config.pressure, PressureParams::default());
    assert_eq!(config.seed, 42);
}

#[test]
fn load_reads_a_json_file() {
    let path = std::env::temp_dir().join(format!("snowload-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "seed": 7, "pressure": { "drainage_coefficient": 0.02 } }"#).unwrap();

    let config = SimConfig::load(&path).unwrap();
    assert_eq!(config.seed, 7);
    assert_eq!(config.pressure.drainage_coefficient, 0.02);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn load_reports_missing_file() {
    let err = SimConfig::load("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("Cannot read"), "Unexpected error: {err}");
}

#[test]
fn infinite_mean_fails_validation() {
    let config = SimConfig {
        snowfall: SnowfallParams { mean_snowfall: f64::INFINITY, ..Default::default() },
        ..SimConfig::default()
    };
    match config.validate() {
        Err(SimError::NonFiniteParameter { name, .. }) => assert_eq!(name, "mean_snowfall"),
        other => panic!("expected NonFiniteParameter, got {other:?}"),
    }
}
