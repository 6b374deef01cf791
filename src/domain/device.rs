use serde::{Deserialize, Serialize};

use crate::error::DispatchError;

/// Static parameters of one ESS device, as supplied by the external device
/// registry. Read-only for the duration of an optimization call.
///
/// Power fields are in MW, capacity in MWh, efficiencies and SOC bounds are
/// fractions. `self_discharge` is the fractional SOC loss per time step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EssDevice {
    /// Registry identifier, e.g. "future-ucy-battery". Not interpreted here.
    pub name: String,
    pub capacity_mwh: f64,
    pub max_charge_mw: f64,
    pub max_discharge_mw: f64,
    pub charge_efficiency: f64,
    pub discharge_efficiency: f64,
    pub self_discharge: f64,
    pub pref_min_soc: f64,
    pub pref_max_soc: f64,
}

impl EssDevice {
    /// Check the device parameters against their physical domain.
    ///
    /// Capacity, both power limits and both efficiencies must be strictly
    /// positive, efficiencies at most 1, self-discharge in [0, 1), and the
    /// preferred SOC band a non-empty sub-interval of [0, 1].
    pub fn validate(&self) -> Result<(), DispatchError> {
        let invalid = |reason: String| Err(DispatchError::InvalidDevice(reason));

        if !self.capacity_mwh.is_finite() || self.capacity_mwh <= 0.0 {
            return invalid(format!("capacity must be positive, got {}", self.capacity_mwh));
        }
        if !self.max_charge_mw.is_finite() || self.max_charge_mw <= 0.0 {
            return invalid(format!(
                "max charge power must be positive, got {}",
                self.max_charge_mw
            ));
        }
        if !self.max_discharge_mw.is_finite() || self.max_discharge_mw <= 0.0 {
            return invalid(format!(
                "max discharge power must be positive, got {}",
                self.max_discharge_mw
            ));
        }
        for (label, eff) in [
            ("charge efficiency", self.charge_efficiency),
            ("discharge efficiency", self.discharge_efficiency),
        ] {
            if !eff.is_finite() || eff <= 0.0 || eff > 1.0 {
                return invalid(format!("{} must be in (0, 1], got {}", label, eff));
            }
        }
        if !self.self_discharge.is_finite() || self.self_discharge < 0.0 || self.self_discharge >= 1.0
        {
            return invalid(format!(
                "self-discharge must be in [0, 1) per step, got {}",
                self.self_discharge
            ));
        }
        if !self.pref_min_soc.is_finite()
            || !self.pref_max_soc.is_finite()
            || self.pref_min_soc < 0.0
            || self.pref_max_soc > 1.0
            || self.pref_min_soc >= self.pref_max_soc
        {
            return invalid(format!(
                "preferred SOC band [{}, {}] must satisfy 0 <= min < max <= 1",
                self.pref_min_soc, self.pref_max_soc
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn test_device() -> EssDevice {
        EssDevice {
            name: "test-battery".to_string(),
            capacity_mwh: 1.0,
            max_charge_mw: 0.5,
            max_discharge_mw: 0.5,
            charge_efficiency: 0.95,
            discharge_efficiency: 0.95,
            self_discharge: 0.0,
            pref_min_soc: 0.1,
            pref_max_soc: 0.9,
        }
    }

    #[test]
    fn test_valid_device_passes() {
        assert!(test_device().validate().is_ok());
    }

    #[rstest]
    #[case::zero_capacity(|d: &mut EssDevice| d.capacity_mwh = 0.0)]
    #[case::negative_max_charge(|d: &mut EssDevice| d.max_charge_mw = -1.0)]
    #[case::zero_max_discharge(|d: &mut EssDevice| d.max_discharge_mw = 0.0)]
    #[case::zero_charge_efficiency(|d: &mut EssDevice| d.charge_efficiency = 0.0)]
    #[case::efficiency_above_one(|d: &mut EssDevice| d.discharge_efficiency = 1.2)]
    #[case::negative_self_discharge(|d: &mut EssDevice| d.self_discharge = -0.01)]
    #[case::inverted_soc_band(|d: &mut EssDevice| {
        d.pref_min_soc = 0.9;
        d.pref_max_soc = 0.1;
    })]
    #[case::soc_band_above_one(|d: &mut EssDevice| d.pref_max_soc = 1.5)]
    #[case::nan_capacity(|d: &mut EssDevice| d.capacity_mwh = f64::NAN)]
    fn test_invalid_device_rejected(#[case] mutate: fn(&mut EssDevice)) {
        let mut device = test_device();
        mutate(&mut device);
        assert!(matches!(
            device.validate(),
            Err(DispatchError::InvalidDevice(_))
        ));
    }

    #[test]
    fn test_device_serde_roundtrip() {
        let device = test_device();
        let json = serde_json::to_string(&device).unwrap();
        let back: EssDevice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, device);
    }
}
