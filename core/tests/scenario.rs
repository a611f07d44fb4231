use snowload_core::{
    config::{SimConfig, SnowfallParams},
    error::SimError,
    scenario::{Scenario, PRESSURE_CHART_FILE, SNOWFALL_CHART_FILE},
    snowfall::generate_seeded_snowfall,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn run_produces_aligned_non_negative_series() {
    init_logging();
    let run = Scenario::new(SimConfig::default()).unwrap().run().unwrap();

    assert_eq!(run.snowfall.len(), 1008);
    assert_eq!(run.pressure.len(), 1008);
    assert_eq!(run.snowfall.get(0), Some(0.0));
    assert_eq!(run.pressure.get(0), Some(0.0));
    assert!(run.snowfall.iter().all(|v| v >= 0.0));
    assert!(run.pressure.iter().all(|v| v >= 0.0));
    assert_eq!(run.snowfall.duration_minutes(), 10_080.0);
}

#[test]
fn seed_42_run_matches_the_seeded_generator() {
    let run = Scenario::new(SimConfig::default_test()).unwrap().run().unwrap();
    let direct = generate_seeded_snowfall(144, &SnowfallParams::default()).unwrap();
    assert_eq!(run.snowfall, direct);
}

#[test]
fn summaries_cover_both_series() {
    let run = Scenario::new(SimConfig::default_test()).unwrap().run().unwrap();
    let (snow, press) = run.summaries().unwrap();
    assert_eq!(snow.len, 144);
    assert_eq!(press.len, 144);
    assert!(snow.max >= snow.mean && snow.mean >= snow.min);
    assert_eq!(press.final_value, run.pressure.get(143).unwrap());
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let config = SimConfig { num_steps: 0, ..SimConfig::default() };
    assert!(matches!(
        Scenario::new(config),
        Err(SimError::InvalidStepCount { num_steps: 0 })
    ));
}

#[test]
fn render_writes_both_charts() {
    init_logging();
    let dir = std::env::temp_dir().join(format!("snowload-scenario-{}", std::process::id()));
    let scenario = Scenario::new(SimConfig::default_test()).unwrap();
    let run = scenario.run().unwrap();

    let (snowfall_path, pressure_path) = run.render(&dir, &scenario.config.plot).unwrap();
    assert_eq!(snowfall_path, dir.join(SNOWFALL_CHART_FILE));
    assert_eq!(pressure_path, dir.join(PRESSURE_CHART_FILE));
    assert!(snowfall_path.exists());
    assert!(pressure_path.exists());

    std::fs::remove_dir_all(&dir).unwrap();
}
