use serde::{Deserialize, Serialize};

/// Forecasted net load (consumption minus renewable generation) over the
/// optimization horizon, in MW, one value per fixed time step.
///
/// The step duration is an agreement between the forecast provider and the
/// caller (commonly 30 minutes) and is not carried in-band.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct NetLoadForecast(pub Vec<f64>);

impl NetLoadForecast {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for NetLoadForecast {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}
