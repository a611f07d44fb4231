//! Shared primitive types used across the simulation.

/// Index into a series. One step = one timestep.
pub type Step = usize;

/// Width of a timestep, in minutes.
pub type Minutes = f64;

pub const DEFAULT_TIMESTEP_MINUTES: Minutes = 10.0;

/// One week of 10-minute steps.
pub const DEFAULT_NUM_STEPS: usize = 1008;

pub const DEFAULT_SEED: u64 = 42;
