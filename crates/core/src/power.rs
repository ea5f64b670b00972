//! Electrical and thermal budget for a wall of a given area.

use serde::Serialize;

use crate::format::NumberFormat;
use crate::labeled::LabeledMap;
use crate::types::Environment;

/// Peak draw per square meter for indoor panels (W/m²).
pub const INDOOR_WATTS_PER_M2: f64 = 500.0;
/// Peak draw per square meter for outdoor panels (W/m²).
pub const OUTDOOR_WATTS_PER_M2: f64 = 800.0;
/// Average-to-peak ratio for typical video content.
pub const AVERAGE_DUTY_FACTOR: f64 = 0.34;
/// Default supply voltage.
pub const DEFAULT_VOLTAGE: f64 = 220.0;
/// BTU/hr per watt.
pub const BTU_PER_WATT_HOUR: f64 = 3.412;
/// BTU/hr per ton of air conditioning.
pub const BTU_PER_AC_TON: f64 = 12_000.0;

const PHASES: f64 = 3.0;
const WATTS_PER_KW: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerProfile {
    pub voltage: f64,
    pub max_power_w: f64,
    pub average_power_w: f64,
    pub total_current_a: f64,
    pub current_per_phase_a: f64,
    pub thermal_btu_hr: f64,
    pub hvac_tons: f64,
}

impl PowerProfile {
    pub fn labeled(&self, fmt: &NumberFormat) -> LabeledMap {
        let mut map = LabeledMap::new();
        map.push(
            "Max Power",
            format!("{} kW", fmt.number(self.max_power_w / WATTS_PER_KW, 2)),
        )
        .push(
            "Average Power",
            format!("{} kW", fmt.number(self.average_power_w / WATTS_PER_KW, 2)),
        )
        .push(
            format!("Total Current ({}V)", self.voltage),
            format!("{} A", fmt.number(self.total_current_a, 2)),
        )
        .push(
            "Current per Phase (3-phase)",
            format!("{} A / phase", fmt.number(self.current_per_phase_a, 2)),
        )
        .push(
            "Thermal Load (Max)",
            format!("{} BTU/hr", fmt.number(self.thermal_btu_hr, 2)),
        )
        .push(
            "HVAC Required",
            format!("{} AC tons", fmt.number(self.hvac_tons, 2)),
        );
        map
    }
}

pub fn watts_per_m2(environment: Environment) -> f64 {
    match environment {
        Environment::Indoor => INDOOR_WATTS_PER_M2,
        Environment::Outdoor => OUTDOOR_WATTS_PER_M2,
    }
}

/// Peak and average draw, current and cooling load for `area_m2` of panel.
pub fn budget_power(area_m2: f64, voltage: f64, environment: Environment) -> PowerProfile {
    let max_power_w = area_m2 * watts_per_m2(environment);
    let total_current_a = max_power_w / voltage;
    let thermal_btu_hr = max_power_w * BTU_PER_WATT_HOUR;
    PowerProfile {
        voltage,
        max_power_w,
        average_power_w: max_power_w * AVERAGE_DUTY_FACTOR,
        total_current_a,
        current_per_phase_a: total_current_a / PHASES,
        thermal_btu_hr,
        hvac_tons: thermal_btu_hr / BTU_PER_AC_TON,
    }
}
