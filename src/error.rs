use thiserror::Error;

/// Errors surfaced by the dispatch optimizer.
///
/// Input validation errors are detected before any solver invocation and are
/// never retried internally. Non-convergence is reported with the solver's
/// diagnostic; the caller decides whether to retry with a relaxed SOC band or
/// a different iteration budget.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("invalid device parameters: {0}")]
    InvalidDevice(String),

    #[error("forecast is empty")]
    EmptyForecast,

    #[error("initial guess has {actual} entries, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("optimization failed: {0}")]
    OptimizationFailure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DispatchError::DimensionMismatch {
            expected: 48,
            actual: 24,
        };
        assert_eq!(err.to_string(), "initial guess has 24 entries, expected 48");
        assert_eq!(
            DispatchError::EmptyForecast.to_string(),
            "forecast is empty"
        );
    }
}
