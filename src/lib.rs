//! # ess-dispatch
//!
//! Dispatch optimizer for a battery-like Energy Storage System (ESS): given a
//! forecasted net-load time series, compute the power schedule that minimizes
//! residual energy drawn from the grid, subject to the device's state-of-charge
//! band and power limits over the whole horizon.
//!
//! The crate is a pure library. Forecasting, device registry, metering and any
//! presentation layer live outside it and talk to it through the plain typed
//! values in [`domain`]:
//!
//! ```
//! use ess_dispatch::{DispatchOptimizer, EssDevice, NetLoadForecast, SolverOptions};
//!
//! let device = EssDevice {
//!     name: "demo-battery".to_string(),
//!     capacity_mwh: 1.0,
//!     max_charge_mw: 0.5,
//!     max_discharge_mw: 0.5,
//!     charge_efficiency: 0.95,
//!     discharge_efficiency: 0.95,
//!     self_discharge: 0.0,
//!     pref_min_soc: 0.1,
//!     pref_max_soc: 0.9,
//! };
//!
//! let optimizer = DispatchOptimizer::new(device)?;
//! let forecast = NetLoadForecast(vec![0.5, 0.5, -0.5, -0.5]);
//! let solution = optimizer.optimize(&forecast, &SolverOptions::default())?;
//!
//! assert_eq!(solution.soc[0], 0.5);
//! assert!(solution.objective_mw < 1.0);
//! # Ok::<(), ess_dispatch::DispatchError>(())
//! ```

pub mod domain;
pub mod error;
pub mod optimizer;

pub use domain::{DispatchSolution, EssDevice, NetLoadForecast};
pub use error::DispatchError;
pub use optimizer::{DispatchOptimizer, SolverMethod, SolverOptions};
