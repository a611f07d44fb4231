use crate::{
    error::{ensure_finite, ensure_non_negative, SimError, SimResult},
    types::{Minutes, DEFAULT_NUM_STEPS, DEFAULT_SEED, DEFAULT_TIMESTEP_MINUTES},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// AR(1) snowfall generator parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowfallParams {
    /// Autoregressive coefficient.
    pub phi: f64,
    /// Constant offset added every step.
    pub mean_snowfall: f64,
    /// Standard deviation of the white-noise draw.
    pub std_snowfall: f64,
    /// Metadata only; never enters the recurrence.
    pub timestep_minutes: Minutes,
}

impl Default for SnowfallParams {
    fn default() -> Self {
        Self {
            phi:              0.9,
            mean_snowfall:    0.1,
            std_snowfall:     0.05,
            timestep_minutes: DEFAULT_TIMESTEP_MINUTES,
        }
    }
}

impl SnowfallParams {
    pub fn validate(&self) -> SimResult<()> {
        ensure_finite("phi", self.phi)?;
        ensure_finite("mean_snowfall", self.mean_snowfall)?;
        ensure_non_negative("std_snowfall", self.std_snowfall)?;
        ensure_non_negative("timestep_minutes", self.timestep_minutes)?;
        Ok(())
    }
}

/// Leaky-accumulator pressure parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressureParams {
    pub snow_density: f64,
    /// Fraction of the previous pressure drained each step.
    pub drainage_coefficient: f64,
    /// Accepted and carried, but has no effect: melt physics is not modelled.
    pub melt_coefficient: f64,
}

impl Default for PressureParams {
    fn default() -> Self {
        Self {
            snow_density:         1.0,
            drainage_coefficient: 0.01,
            melt_coefficient:     0.01,
        }
    }
}

impl PressureParams {
    pub fn validate(&self) -> SimResult<()> {
        ensure_finite("snow_density", self.snow_density)?;
        ensure_finite("drainage_coefficient", self.drainage_coefficient)?;
        ensure_finite("melt_coefficient", self.melt_coefficient)?;
        Ok(())
    }
}

/// SVG line-chart layout. The default is a wide 3:1 figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub width:        u32,
    pub height:       u32,
    pub margin:       u32,
    pub stroke:       String,
    pub stroke_width: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width:        1500,
            height:       500,
            margin:       50,
            stroke:       "#1f77b4".into(),
            stroke_width: 1.5,
        }
    }
}

impl PlotConfig {
    pub fn validate(&self) -> SimResult<()> {
        if self.width <= 2 * self.margin || self.height <= 2 * self.margin {
            return Err(SimError::Other(anyhow::anyhow!(
                "plot area {}x{} leaves no room inside a {} margin",
                self.width,
                self.height,
                self.margin
            )));
        }
        ensure_non_negative("stroke_width", self.stroke_width)
    }
}

/// Everything a single run needs. Every field has a default, so a JSON
/// file only has to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub seed:      u64,
    pub num_steps: usize,
    pub snowfall:  SnowfallParams,
    pub pressure:  PressureParams,
    pub plot:      PlotConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:      DEFAULT_SEED,
            num_steps: DEFAULT_NUM_STEPS,
            snowfall:  SnowfallParams::default(),
            pressure:  PressureParams::default(),
            plot:      PlotConfig::default(),
        }
    }
}

impl SimConfig {
    /// Load from a JSON file. Missing fields fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let config: SimConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.num_steps == 0 {
            return Err(SimError::InvalidStepCount { num_steps: self.num_steps });
        }
        self.snowfall.validate()?;
        self.pressure.validate()?;
        self.plot.validate()
    }

    /// Config with hardcoded defaults for use in tests: one day of steps.
    pub fn default_test() -> Self {
        Self {
            num_steps: 144,
            ..Self::default()
        }
    }
}
