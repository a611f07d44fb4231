//! The end-to-end run: generate snowfall, simulate pressure, plot both.
//!
//! EXECUTION ORDER (fixed):
//!   1. Snowfall  (drawn from the bank's snowfall stream)
//!   2. Pressure  (derived from the snowfall series only)
//!
//! Both series are recomputed from scratch on every run; a run has no
//! state beyond the two series it returns.

use crate::{
    config::{PlotConfig, SimConfig},
    error::SimResult,
    plot::LineChart,
    pressure::simulate_pressure_series,
    rng::{RngBank, StreamSlot},
    series::{SeriesSummary, TimeSeries},
    snowfall::generate_correlated_snowfall,
};
use std::path::{Path, PathBuf};

pub const SNOWFALL_CHART_FILE: &str = "snowfall.svg";
pub const PRESSURE_CHART_FILE: &str = "pressure.svg";

pub struct Scenario {
    pub config: SimConfig,
    rng_bank:   RngBank,
}

impl Scenario {
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            rng_bank: RngBank::new(config.seed),
            config,
        })
    }

    pub fn run(&self) -> SimResult<ScenarioRun> {
        let mut rng = self.rng_bank.for_stream(StreamSlot::Snowfall);
        let snowfall =
            generate_correlated_snowfall(self.config.num_steps, &self.config.snowfall, &mut rng)?;
        let pressure = simulate_pressure_series(&snowfall, &self.config.pressure)?;
        snowfall.ensure_aligned(&pressure)?;

        let run = ScenarioRun { snowfall, pressure };
        let (snow, press) = run.summaries()?;
        log::info!(
            "run complete: seed={} steps={} snowfall_mean={:.4} pressure_final={:.4}",
            self.rng_bank.master_seed(),
            snow.len,
            snow.mean,
            press.final_value
        );
        Ok(run)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRun {
    pub snowfall: TimeSeries,
    pub pressure: TimeSeries,
}

impl ScenarioRun {
    pub fn summaries(&self) -> SimResult<(SeriesSummary, SeriesSummary)> {
        Ok((self.snowfall.summary()?, self.pressure.summary()?))
    }

    /// Write both charts into `out_dir`, creating it if needed.
    /// Returns the snowfall and pressure chart paths.
    pub fn render(&self, out_dir: impl AsRef<Path>, plot: &PlotConfig) -> SimResult<(PathBuf, PathBuf)> {
        let out_dir = out_dir.as_ref();
        std::fs::create_dir_all(out_dir)?;

        let snowfall_path = out_dir.join(SNOWFALL_CHART_FILE);
        LineChart::new("Simulated Snowfall", "Snowfall", plot.clone())
            .save(&self.snowfall, &snowfall_path)?;

        let pressure_path = out_dir.join(PRESSURE_CHART_FILE);
        LineChart::new("Simulated Surface Pressure", "Pressure", plot.clone())
            .save(&self.pressure, &pressure_path)?;

        log::info!("charts written to {}", out_dir.display());
        Ok((snowfall_path, pressure_path))
    }
}
