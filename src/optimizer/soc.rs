//! SOC recursion and the residual objective.
//!
//! These are the sign-branched forms the solver's linear transcription must
//! agree with; the trajectory returned to callers is always recomputed here
//! from the optimal dispatch rather than read back from solver variables.

use crate::domain::EssDevice;

/// SOC assumed at the start of the horizon. A fixed design constant, not a
/// caller input.
pub const INITIAL_SOC: f64 = 0.5;

/// Power effectively delivered to (positive) or absorbed from (negative) the
/// load side for a given dispatch value, MW.
///
/// Discharge is derated by the discharge efficiency; charge (negative
/// dispatch) is scaled by the charge efficiency, shrinking its magnitude.
/// The asymmetry is inherited source behavior and is kept as-is.
pub fn effective_power(device: &EssDevice, dispatch: f64) -> f64 {
    if dispatch > 0.0 {
        dispatch * device.discharge_efficiency
    } else {
        dispatch * device.charge_efficiency
    }
}

/// SOC at the start of the next step, given the SOC at the start of this step
/// and the dispatch applied during it.
pub fn soc_step(device: &EssDevice, soc: f64, dispatch: f64) -> f64 {
    let energy_delta = effective_power(device, dispatch) / device.capacity_mwh;
    soc - energy_delta - device.self_discharge * soc
}

/// Start-of-step SOC trajectory implied by a dispatch schedule, same length
/// as the schedule, first entry forced to [`INITIAL_SOC`].
pub fn soc_trajectory(device: &EssDevice, dispatch: &[f64]) -> Vec<f64> {
    let mut soc = Vec::with_capacity(dispatch.len());
    let mut current = INITIAL_SOC;
    for &power in dispatch {
        soc.push(current);
        current = soc_step(device, current, power);
    }
    soc
}

/// Residual grid draw summed over the horizon: for each step, the portion of
/// forecasted net load not covered by the device's effective power, floored
/// at zero (export is not penalized).
pub fn residual_objective(device: &EssDevice, forecast: &[f64], dispatch: &[f64]) -> f64 {
    forecast
        .iter()
        .zip(dispatch)
        .map(|(&load, &power)| (load - effective_power(device, power)).max(0.0))
        .sum()
}
