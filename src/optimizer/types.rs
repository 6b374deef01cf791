use serde::{Deserialize, Serialize};
use strum::Display;

/// Solve method for the dispatch problem.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SolverMethod {
    /// Direct transcription of the horizon as a linear program with split
    /// non-negative charge/discharge variables and residual auxiliaries.
    /// Exact for this problem's feasible region; see `optimizer::lp`.
    #[default]
    SplitLp,
}

/// Solver configuration. All fields have defaults, so `SolverOptions::default()`
/// (or an empty config table) is a valid starting point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SolverOptions {
    /// Iteration budget for iterative methods. The bundled simplex backend
    /// runs to optimality (or proven infeasibility) and treats this as
    /// advisory.
    pub max_iterations: usize,
    pub method: SolverMethod,
    /// Optional starting dispatch vector, one entry per forecast step.
    /// Length is always checked against the horizon; the LP backend needs no
    /// seed and defaults to the all-zero "do nothing" schedule.
    pub initial_guess: Option<Vec<f64>>,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            max_iterations: 4000,
            method: SolverMethod::default(),
            initial_guess: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = SolverOptions::default();
        assert_eq!(options.max_iterations, 4000);
        assert_eq!(options.method, SolverMethod::SplitLp);
        assert!(options.initial_guess.is_none());
    }

    #[test]
    fn test_options_from_partial_config() {
        let options: SolverOptions = serde_json::from_str(r#"{"max_iterations": 200}"#).unwrap();
        assert_eq!(options.max_iterations, 200);
        assert_eq!(options.method, SolverMethod::SplitLp);
    }

    #[test]
    fn test_method_display() {
        assert_eq!(SolverMethod::SplitLp.to_string(), "split_lp");
    }
}
