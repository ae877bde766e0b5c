use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// The four bulk properties estimated by the group-contribution method.
///
/// The same shape is used for a fragment's per-occurrence increments and for
/// the aggregated estimate of a whole structure. Values are kept exactly as
/// computed; rounding is left to whoever presents them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermoProperties {
    pub boiling_point: f64,
    pub melting_point: f64,
    pub critical_temperature: f64,
    pub critical_pressure: f64,
}

impl ThermoProperties {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(
        boiling_point: f64,
        melting_point: f64,
        critical_temperature: f64,
        critical_pressure: f64,
    ) -> Self {
        Self {
            boiling_point,
            melting_point,
            critical_temperature,
            critical_pressure,
        }
    }

    /// Multiplies every property by `factor`.
    #[inline]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            boiling_point: self.boiling_point * factor,
            melting_point: self.melting_point * factor,
            critical_temperature: self.critical_temperature * factor,
            critical_pressure: self.critical_pressure * factor,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.boiling_point.is_finite()
            && self.melting_point.is_finite()
            && self.critical_temperature.is_finite()
            && self.critical_pressure.is_finite()
    }

    /// Rounds every property half away from zero to `decimals` places.
    pub fn rounded(self, decimals: u32) -> Self {
        let factor = 10f64.powi(decimals.min(15) as i32);
        let round = |v: f64| (v * factor).round() / factor;
        Self {
            boiling_point: round(self.boiling_point),
            melting_point: round(self.melting_point),
            critical_temperature: round(self.critical_temperature),
            critical_pressure: round(self.critical_pressure),
        }
    }

    /// Property values paired with their display labels, in canonical order.
    pub fn labelled(&self) -> [(&'static str, f64); 4] {
        [
            ("Boiling point", self.boiling_point),
            ("Melting point", self.melting_point),
            ("Critical temperature", self.critical_temperature),
            ("Critical pressure", self.critical_pressure),
        ]
    }
}

impl Add for ThermoProperties {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            boiling_point: self.boiling_point + rhs.boiling_point,
            melting_point: self.melting_point + rhs.melting_point,
            critical_temperature: self.critical_temperature + rhs.critical_temperature,
            critical_pressure: self.critical_pressure + rhs.critical_pressure,
        }
    }
}

impl AddAssign for ThermoProperties {
    fn add_assign(&mut self, rhs: Self) {
        self.boiling_point += rhs.boiling_point;
        self.melting_point += rhs.melting_point;
        self.critical_temperature += rhs.critical_temperature;
        self.critical_pressure += rhs.critical_pressure;
    }
}

impl Sum for ThermoProperties {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_properties_with_specified_values() {
        let p = ThermoProperties::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(p.boiling_point, 1.0);
        assert_eq!(p.melting_point, 2.0);
        assert_eq!(p.critical_temperature, 3.0);
        assert_eq!(p.critical_pressure, 4.0);
    }

    #[test]
    fn default_is_all_zero() {
        assert_eq!(ThermoProperties::default(), ThermoProperties::ZERO);
    }

    #[test]
    fn add_sums_each_field() {
        let a = ThermoProperties::new(1.0, -2.0, 3.0, 4.0);
        let b = ThermoProperties::new(4.0, 5.0, -6.0, 0.5);
        assert_eq!(a + b, ThermoProperties::new(5.0, 3.0, -3.0, 4.5));
    }

    #[test]
    fn add_assign_accumulates_each_field() {
        let mut a = ThermoProperties::new(1.0, 2.0, 3.0, 4.0);
        a += ThermoProperties::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(a, ThermoProperties::new(2.0, 3.0, 4.0, 5.0));
    }

    #[test]
    fn sum_of_empty_iterator_is_zero() {
        let total: ThermoProperties = std::iter::empty().sum();
        assert_eq!(total, ThermoProperties::ZERO);
    }

    #[test]
    fn scaled_multiplies_every_field() {
        let p = ThermoProperties::new(1.5, -2.0, 3.0, 0.25).scaled(2.0);
        assert_eq!(p, ThermoProperties::new(3.0, -4.0, 6.0, 0.5));
    }

    #[test]
    fn is_finite_detects_nan_and_infinity() {
        assert!(ThermoProperties::new(1.0, 2.0, 3.0, 4.0).is_finite());
        assert!(!ThermoProperties::new(f64::NAN, 2.0, 3.0, 4.0).is_finite());
        assert!(!ThermoProperties::new(1.0, 2.0, 3.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn rounded_rounds_half_away_from_zero() {
        let p = ThermoProperties::new(0.125, -0.125, 139.346, -3.104).rounded(2);
        assert_eq!(p.boiling_point, 0.13);
        assert_eq!(p.melting_point, -0.13);
        assert_eq!(p.critical_temperature, 139.35);
        assert_eq!(p.critical_pressure, -3.1);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(ThermoProperties::new(1.0, 2.0, 3.0, 4.0)).unwrap();
        assert_eq!(json["boilingPoint"], 1.0);
        assert_eq!(json["meltingPoint"], 2.0);
        assert_eq!(json["criticalTemperature"], 3.0);
        assert_eq!(json["criticalPressure"], 4.0);
    }
}
