//! Surface pressure from accumulated snowfall.
//!
//! Leaky accumulator: each step adds the fresh snow weight and drains a
//! fixed fraction of the previous pressure.
//!
//!   P[0] = 0
//!   P[t] = P[t-1] + S[t] * snow_density - drainage_coefficient * P[t-1]
//!
//! A negative P[t] is clamped to zero immediately, and the clamped value is
//! what the next step sees.

use crate::{
    config::PressureParams,
    error::{SimError, SimResult},
    series::TimeSeries,
};

pub fn simulate_pressure_dynamics(snowfall: &[f64], params: &PressureParams) -> SimResult<Vec<f64>> {
    let mut pressure = vec![0.0; snowfall.len()];
    simulate_pressure_into(snowfall, params, &mut pressure)?;
    Ok(pressure)
}

/// Same as [`simulate_pressure_dynamics`], keeping the snowfall timestep.
pub fn simulate_pressure_series(snowfall: &TimeSeries, params: &PressureParams) -> SimResult<TimeSeries> {
    let pressure = simulate_pressure_dynamics(snowfall.values(), params)?;
    Ok(TimeSeries::new(pressure, snowfall.timestep_minutes()))
}

/// Write the pressure series into a caller-owned buffer of the same length.
pub fn simulate_pressure_into(
    snowfall: &[f64],
    params: &PressureParams,
    out: &mut [f64],
) -> SimResult<()> {
    if out.len() != snowfall.len() {
        return Err(SimError::LengthMismatch {
            expected: snowfall.len(),
            actual:   out.len(),
        });
    }
    params.validate()?;
    if let Some((step, &value)) = snowfall.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(SimError::NonFiniteValue { step, value });
    }
    if params.melt_coefficient != PressureParams::default().melt_coefficient {
        log::warn!(
            "melt_coefficient={} has no effect on the pressure recurrence",
            params.melt_coefficient
        );
    }

    let Some(first) = out.first_mut() else {
        return Ok(());
    };
    *first = 0.0;

    for t in 1..snowfall.len() {
        let prev = out[t - 1];
        let added = snowfall[t] * params.snow_density;
        let next = prev + added - params.drainage_coefficient * prev;
        // NaN and inf would slip past the clamp below.
        if !next.is_finite() {
            return Err(SimError::NonFiniteValue { step: t, value: next });
        }
        out[t] = if next < 0.0 { 0.0 } else { next };
    }

    log::debug!(
        "pressure: steps={} density={} drainage={} final={:.4}",
        snowfall.len(),
        params.snow_density,
        params.drainage_coefficient,
        out.last().copied().unwrap_or(0.0)
    );
    Ok(())
}
