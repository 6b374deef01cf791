//! Linear-programming transcription of the dispatch problem.
//!
//! The sign-branched objective and SOC recursion are not smooth at zero
//! dispatch, so the horizon is transcribed with split non-negative charge and
//! discharge variables plus per-step residual auxiliaries, and solved as a
//! pure LP. The split is exact here, not a relaxation: effective power and
//! the SOC delta are the *same* linear expression
//! `discharge * eta_d - charge * eta_c`, so any solution with both variables
//! active at a step maps to a single net dispatch with identical effective
//! power, identical SOC evolution and identical residual, and the net value
//! never leaves the power envelope (it is dominated by whichever side is
//! larger). [`net_dispatch`] performs that mapping after the solve.
//!
//! Decision variables per step t:
//!   charge[t]    in [0, max_charge]
//!   discharge[t] in [0, max_discharge]
//!   residual[t]  in [0, inf), objective coefficient 1
//! plus soc[t] for t = 0..=T with soc[0] fixed at the initial condition and
//! all others bounded by the preferred SOC band (terminal state included).

use minilp::{ComparisonOp, OptimizationDirection, Problem};
use tracing::debug;

use crate::domain::EssDevice;
use crate::error::DispatchError;
use crate::optimizer::soc::INITIAL_SOC;

/// Tie-breaking cost per MW of charge/discharge activity. Far below any
/// attainable residual gain, so it only suppresses dispatch that buys
/// nothing, pinning the all-zero schedule when the forecast needs no help.
/// Scaled-down form of the battery wear cost used in cost-based scheduling.
const ACTIVITY_EPS: f64 = 1e-6;

/// Solve the transcribed LP and return the net dispatch vector.
pub(crate) fn solve(device: &EssDevice, forecast: &[f64]) -> Result<Vec<f64>, DispatchError> {
    let horizon = forecast.len();
    let eta_c = device.charge_efficiency;
    let eta_d = device.discharge_efficiency;
    let capacity = device.capacity_mwh;
    let retention = 1.0 - device.self_discharge;

    let mut problem = Problem::new(OptimizationDirection::Minimize);

    let charge: Vec<_> = (0..horizon)
        .map(|_| problem.add_var(ACTIVITY_EPS, (0.0, device.max_charge_mw)))
        .collect();
    let discharge: Vec<_> = (0..horizon)
        .map(|_| problem.add_var(ACTIVITY_EPS, (0.0, device.max_discharge_mw)))
        .collect();
    let residual: Vec<_> = (0..horizon)
        .map(|_| problem.add_var(1.0, (0.0, f64::INFINITY)))
        .collect();

    // soc[0] is pinned to the initial condition; the band is still asserted
    // on it so an initial SOC outside the band is reported as infeasible
    // rather than silently moved.
    let mut soc = Vec::with_capacity(horizon + 1);
    soc.push(problem.add_var(0.0, (0.0, 1.0)));
    for _ in 0..horizon {
        soc.push(problem.add_var(0.0, (device.pref_min_soc, device.pref_max_soc)));
    }
    problem.add_constraint(&[(soc[0], 1.0)], ComparisonOp::Eq, INITIAL_SOC);
    problem.add_constraint(&[(soc[0], 1.0)], ComparisonOp::Ge, device.pref_min_soc);
    problem.add_constraint(&[(soc[0], 1.0)], ComparisonOp::Le, device.pref_max_soc);

    for t in 0..horizon {
        // residual[t] >= forecast[t] - (discharge[t] * eta_d - charge[t] * eta_c)
        problem.add_constraint(
            &[
                (residual[t], 1.0),
                (discharge[t], eta_d),
                (charge[t], -eta_c),
            ],
            ComparisonOp::Ge,
            forecast[t],
        );

        // soc[t+1] = (1 - self_discharge) * soc[t] - energy delta
        problem.add_constraint(
            &[
                (soc[t + 1], 1.0),
                (soc[t], -retention),
                (discharge[t], eta_d / capacity),
                (charge[t], -eta_c / capacity),
            ],
            ComparisonOp::Eq,
            0.0,
        );
    }

    debug!(
        horizon,
        variables = 4 * horizon + 1,
        "solving dispatch LP"
    );

    let solution = problem.solve().map_err(|e| {
        DispatchError::OptimizationFailure(format!(
            "no feasible dispatch schedule over {} steps: {}",
            horizon, e
        ))
    })?;

    Ok((0..horizon)
        .map(|t| net_dispatch(device, solution[charge[t]], solution[discharge[t]]))
        .collect())
}

/// Collapse a (charge, discharge) pair into the equivalent net dispatch
/// value: the one whose sign-branched effective power equals the pair's.
fn net_dispatch(device: &EssDevice, charge: f64, discharge: f64) -> f64 {
    let effective = discharge * device.discharge_efficiency - charge * device.charge_efficiency;
    if effective > 0.0 {
        effective / device.discharge_efficiency
    } else {
        effective / device.charge_efficiency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::soc::effective_power;

    fn test_device() -> EssDevice {
        EssDevice {
            name: "test-battery".to_string(),
            capacity_mwh: 1.0,
            max_charge_mw: 0.5,
            max_discharge_mw: 0.5,
            charge_efficiency: 0.95,
            discharge_efficiency: 0.9,
            self_discharge: 0.0,
            pref_min_soc: 0.1,
            pref_max_soc: 0.9,
        }
    }

    #[test]
    fn test_net_dispatch_preserves_effective_power() {
        let device = test_device();
        for (charge, discharge) in [(0.0, 0.4), (0.3, 0.0), (0.2, 0.2), (0.5, 0.1), (0.0, 0.0)] {
            let expected = discharge * device.discharge_efficiency
                - charge * device.charge_efficiency;
            let net = net_dispatch(&device, charge, discharge);
            assert!((effective_power(&device, net) - expected).abs() < 1e-12);
            assert!(net >= -device.max_charge_mw - 1e-12);
            assert!(net <= device.max_discharge_mw + 1e-12);
        }
    }

    #[test]
    fn test_infeasible_band_reported() {
        let mut device = test_device();
        // Initial SOC of 0.5 sits outside this band; no schedule can fix that.
        device.pref_min_soc = 0.6;
        device.pref_max_soc = 0.8;
        let result = solve(&device, &[0.0, 0.0]);
        assert!(matches!(
            result,
            Err(DispatchError::OptimizationFailure(_))
        ));
    }
}
