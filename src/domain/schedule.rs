use serde::{Deserialize, Serialize};

/// Result of one successful optimization run.
///
/// Both vectors have the same length as the input forecast. Sign convention
/// for dispatch: positive = discharging (device to load), negative = charging.
/// `soc` holds the state of charge at the *start* of each step as a fraction
/// of capacity; `soc[0]` is always the fixed initial condition 0.5.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DispatchSolution {
    /// Dispatch power per step, MW.
    pub dispatch: Vec<f64>,
    /// State of charge at the start of each step, fraction of capacity.
    pub soc: Vec<f64>,
    /// Total residual grid draw over the horizon, MW summed across steps,
    /// recomputed from `dispatch` (not taken from solver internals).
    pub objective_mw: f64,
}

impl DispatchSolution {
    /// Horizon length in steps.
    pub fn horizon(&self) -> usize {
        self.dispatch.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_payload_shape() {
        let solution = DispatchSolution {
            dispatch: vec![0.4, -0.2],
            soc: vec![0.5, 0.12],
            objective_mw: 0.12,
        };
        let json = serde_json::to_value(&solution).unwrap();
        assert_eq!(json["dispatch"], serde_json::json!([0.4, -0.2]));
        assert_eq!(json["soc"][0], 0.5);
        assert_eq!(solution.horizon(), 2);
    }
}
