//! Index-aligned time series with timestep metadata.
//!
//! A series is produced once by a generator or simulator and never mutated
//! afterwards. Step `t` sits at `t * timestep_minutes` from the start.

use crate::{
    error::{SimError, SimResult},
    types::{Minutes, Step},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    values: Vec<f64>,
    timestep_minutes: Minutes,
}

impl TimeSeries {
    pub fn new(values: Vec<f64>, timestep_minutes: Minutes) -> Self {
        Self { values, timestep_minutes }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, step: Step) -> Option<f64> {
        self.values.get(step).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn timestep_minutes(&self) -> Minutes {
        self.timestep_minutes
    }

    pub fn elapsed_minutes(&self, step: Step) -> Minutes {
        step as f64 * self.timestep_minutes
    }

    /// Time covered by the series, start of step 0 to end of the last step.
    pub fn duration_minutes(&self) -> Minutes {
        self.elapsed_minutes(self.len())
    }

    /// Error unless `other` has the same number of steps.
    pub fn ensure_aligned(&self, other: &TimeSeries) -> SimResult<()> {
        if self.len() != other.len() {
            return Err(SimError::LengthMismatch {
                expected: self.len(),
                actual:   other.len(),
            });
        }
        Ok(())
    }

    pub fn summary(&self) -> SimResult<SeriesSummary> {
        let (&first, _) = self.values.split_first().ok_or(SimError::EmptySeries)?;
        let mut min = first;
        let mut max = first;
        let mut peak_step = 0;
        for (step, &v) in self.values.iter().enumerate() {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
                peak_step = step;
            }
        }
        let mean = self.values.iter().sum::<f64>() / self.len() as f64;
        Ok(SeriesSummary {
            len: self.len(),
            min,
            max,
            mean,
            final_value: self.values[self.len() - 1],
            peak_step,
        })
    }
}

/// Descriptive statistics printed at the end of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub len:         usize,
    pub min:         f64,
    pub max:         f64,
    pub mean:        f64,
    pub final_value: f64,
    /// First step holding the maximum.
    pub peak_step:   Step,
}
