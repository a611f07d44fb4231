//! snow-runner: headless driver for the snowfall / pressure simulation.
//!
//! Usage:
//!   snow-runner --seed 42 --steps 1008 --out-dir plots
//!   snow-runner --config run.json --json

use anyhow::Result;
use snowload_core::{
    config::SimConfig,
    scenario::Scenario,
    series::SeriesSummary,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config = match find_arg(&args, "--config") {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    config.seed = parse_arg(&args, "--seed", config.seed);
    config.num_steps = parse_arg(&args, "--steps", config.num_steps);
    let out_dir = find_arg(&args, "--out-dir").unwrap_or("plots");
    let json_mode = args.iter().any(|a| a == "--json");

    if !json_mode {
        println!("snow-runner");
        println!("  seed:      {}", config.seed);
        println!("  steps:     {}", config.num_steps);
        println!("  timestep:  {} min", config.snowfall.timestep_minutes);
        println!("  out_dir:   {out_dir}");
        println!();
    }

    log::info!("starting run: seed={} steps={}", config.seed, config.num_steps);
    let scenario = Scenario::new(config)?;
    let run = scenario.run()?;
    let (snowfall_path, pressure_path) = run.render(out_dir, &scenario.config.plot)?;
    let (snowfall, pressure) = run.summaries()?;

    if json_mode {
        let summary = serde_json::json!({
            "seed": scenario.config.seed,
            "duration_minutes": run.snowfall.duration_minutes(),
            "snowfall": snowfall,
            "pressure": pressure,
            "charts": [snowfall_path, pressure_path],
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("=== RUN SUMMARY ===");
        println!("  duration:       {:.0} min", run.snowfall.duration_minutes());
        print_summary("snowfall", &snowfall);
        print_summary("pressure", &pressure);
        println!();
        println!("  charts:         {}", snowfall_path.display());
        println!("                  {}", pressure_path.display());
    }
    Ok(())
}

fn print_summary(label: &str, s: &SeriesSummary) {
    println!(
        "  {label:<15} min {:.4} | max {:.4} (step {}) | mean {:.4} | final {:.4}",
        s.min, s.max, s.peak_step, s.mean, s.final_value
    );
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    find_arg(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
