use crate::core::models::properties::ThermoProperties;
use phf::{Map, phf_map};

// Increments per occurrence: boiling point, melting point, critical temperature, critical pressure.
pub(super) static GROUP_TABLE: Map<&'static str, ThermoProperties> = phf_map! {
    "CH3" => ThermoProperties::new(23.58, -20.71, 68.81, 6.75),
    "CH2" => ThermoProperties::new(22.88, -20.64, 58.41, 5.50),
    "OH" => ThermoProperties::new(92.88, 44.45, 155.90, 23.70),
    "COOH" => ThermoProperties::new(169.09, 79.63, 262.31, 39.89),
    "NH2" => ThermoProperties::new(73.23, 34.12, 125.70, 18.90),
};

// Descending length, then ascending byte order. Must list every key of GROUP_TABLE exactly once.
pub(super) static PRECEDENCE: [&str; 5] = ["COOH", "CH2", "CH3", "NH2", "OH"];
