//! ESS dispatch optimization.
//!
//! Given a net-load forecast, [`DispatchOptimizer`] computes the dispatch
//! schedule that minimizes residual grid draw over the horizon as a single
//! coupled problem, honoring the device's SOC band and power envelope at
//! every step. One call, one solve; the optimizer holds no state between
//! calls and may run concurrently with other instances.

mod lp;
pub mod soc;
pub mod types;

pub use types::*;

use tracing::{info, instrument, warn};

use crate::domain::{DispatchSolution, EssDevice, NetLoadForecast};
use crate::error::DispatchError;

/// Horizon length above which solve times on small edge hardware become
/// noticeable; matches the sizing guidance for the cost-based scheduler.
const HORIZON_WARN_STEPS: usize = 48;

/// Dispatch optimizer for a single ESS device.
pub struct DispatchOptimizer {
    device: EssDevice,
}

impl DispatchOptimizer {
    /// Create an optimizer for the given device, validating its parameters.
    pub fn new(device: EssDevice) -> Result<Self, DispatchError> {
        device.validate()?;
        Ok(Self { device })
    }

    pub fn device(&self) -> &EssDevice {
        &self.device
    }

    /// Compute the dispatch schedule minimizing residual grid draw over the
    /// forecast horizon.
    ///
    /// Returns the schedule together with the implied start-of-step SOC
    /// trajectory, recomputed from the optimal dispatch with the initial SOC
    /// forced to [`soc::INITIAL_SOC`]. Fails with [`DispatchError::EmptyForecast`]
    /// for a zero-length forecast, [`DispatchError::DimensionMismatch`] if a
    /// supplied initial guess does not match the horizon, and
    /// [`DispatchError::OptimizationFailure`] when no schedule satisfies the
    /// constraints. There is no best-effort partial result.
    #[instrument(skip_all, fields(device = %self.device.name, horizon = forecast.len()))]
    pub fn optimize(
        &self,
        forecast: &NetLoadForecast,
        options: &SolverOptions,
    ) -> Result<DispatchSolution, DispatchError> {
        let horizon = forecast.len();
        if horizon == 0 {
            return Err(DispatchError::EmptyForecast);
        }
        if let Some(guess) = &options.initial_guess {
            if guess.len() != horizon {
                return Err(DispatchError::DimensionMismatch {
                    expected: horizon,
                    actual: guess.len(),
                });
            }
        }
        if horizon > HORIZON_WARN_STEPS {
            warn!(
                horizon,
                "long optimization horizon; solve time grows with step count"
            );
        }

        let dispatch = match options.method {
            SolverMethod::SplitLp => lp::solve(&self.device, forecast.as_slice())?,
        };

        let trajectory = soc::soc_trajectory(&self.device, &dispatch);
        let objective_mw = soc::residual_objective(&self.device, forecast.as_slice(), &dispatch);
        info!(objective_mw, "dispatch schedule found");

        Ok(DispatchSolution {
            dispatch,
            soc: trajectory,
            objective_mw,
        })
    }
}
