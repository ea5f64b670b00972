//! Structural rigging budget: dead load, truss, hang points and motor
//! selection for a flown wall.

use serde::Serialize;

use crate::format::NumberFormat;
use crate::labeled::LabeledMap;

/// Default cabinet weight in kilograms.
pub const DEFAULT_CABINET_WEIGHT_KG: f64 = 11.0;
/// Default design safety factor for motors.
pub const DEFAULT_SAFETY_FACTOR: u32 = 8;
/// Bumper hardware weight per column (kg).
pub const BUMPER_KG_PER_COLUMN: f64 = 3.5;
/// Cabling allowance as a fraction of frame weight.
pub const CABLING_FRACTION: f64 = 0.10;
/// Truss length added beyond the wall width (m).
pub const TRUSS_MARGIN_M: f64 = 1.0;
/// Maximum spacing between hang points (m).
pub const MAX_POINT_SPACING_M: f64 = 3.0;
/// Fewest hang points on any truss.
pub const MIN_HANG_POINTS: u32 = 2;
/// Motor working-load-limit tiers (kg), ascending.
pub const MOTOR_WLL_TIERS_KG: [u32; 4] = [250, 500, 1000, 2000];

/// Chosen motor tier, or the outcome that none is rated high enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MotorSelection {
    Rated { wll_kg: u32 },
    EngineeringReviewRequired,
}

impl MotorSelection {
    /// Smallest tier whose WLL covers `required_kg`.
    pub fn for_required_capacity(required_kg: f64) -> Self {
        MOTOR_WLL_TIERS_KG
            .iter()
            .find(|&&wll| f64::from(wll) >= required_kg)
            .map_or(Self::EngineeringReviewRequired, |&wll_kg| Self::Rated {
                wll_kg,
            })
    }

    pub fn wll_kg(self) -> Option<u32> {
        match self {
            Self::Rated { wll_kg } => Some(wll_kg),
            Self::EngineeringReviewRequired => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiggingProfile {
    pub frame_kg: f64,
    pub bumpers_kg: f64,
    pub cabling_kg: f64,
    pub static_load_kg: f64,
    pub truss_length_m: u32,
    pub hang_points: u32,
    pub load_per_point_kg: f64,
    pub safety_factor: u32,
    pub motor: MotorSelection,
}

impl RiggingProfile {
    pub fn labeled(&self, fmt: &NumberFormat) -> LabeledMap {
        let motor = match self.motor {
            MotorSelection::Rated { wll_kg } => format!(
                "{} kg (WLL) / motor",
                fmt.integer(u64::from(wll_kg))
            ),
            MotorSelection::EngineeringReviewRequired => {
                "Structural engineering review required".to_string()
            }
        };

        let mut map = LabeledMap::new();
        map.push(
            "Total Static Load (Dead Load)",
            format!("{} kg", fmt.number(self.static_load_kg, 2)),
        )
        .push(
            "Suggested Truss (Min)",
            format!("{} m", fmt.number(f64::from(self.truss_length_m), 2)),
        )
        .push(
            "Motor Points",
            format!("{} points (max 3m)", self.hang_points),
        )
        .push(
            format!("Required Motor Capacity (SF {}:1)", self.safety_factor),
            motor,
        );
        map
    }
}

/// Dead load and hoisting requirements for a `columns` x `rows` grid.
pub fn budget_rigging(
    columns: u32,
    rows: u32,
    cabinet_width_mm: f64,
    cabinet_weight_kg: f64,
    safety_factor: u32,
) -> RiggingProfile {
    let frame_kg = cabinet_weight_kg * f64::from(columns) * f64::from(rows);
    let bumpers_kg = BUMPER_KG_PER_COLUMN * f64::from(columns);
    let cabling_kg = frame_kg * CABLING_FRACTION;
    let static_load_kg = frame_kg + bumpers_kg + cabling_kg;

    let truss_length_m =
        (f64::from(columns) * (cabinet_width_mm / 1000.0) + TRUSS_MARGIN_M).ceil() as u32;
    let hang_points =
        ((f64::from(truss_length_m) / MAX_POINT_SPACING_M).ceil() as u32 + 1).max(MIN_HANG_POINTS);
    let load_per_point_kg = static_load_kg / f64::from(hang_points);

    RiggingProfile {
        frame_kg,
        bumpers_kg,
        cabling_kg,
        static_load_kg,
        truss_length_m,
        hang_points,
        load_per_point_kg,
        safety_factor,
        motor: MotorSelection::for_required_capacity(
            load_per_point_kg * f64::from(safety_factor),
        ),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn ten_by_five_reference_grid() {
        let r = budget_rigging(10, 5, 600.0, DEFAULT_CABINET_WEIGHT_KG, DEFAULT_SAFETY_FACTOR);
        assert!((r.frame_kg - 550.0).abs() < 1e-9);
        assert!((r.bumpers_kg - 35.0).abs() < 1e-9);
        assert!((r.cabling_kg - 55.0).abs() < 1e-9);
        assert!((r.static_load_kg - 640.0).abs() < 1e-9);
        assert_eq!(r.truss_length_m, 7);
        assert_eq!(r.hang_points, 4);
        assert!((r.load_per_point_kg - 160.0).abs() < 1e-9);
        assert_eq!(r.motor, MotorSelection::Rated { wll_kg: 2000 });
    }

    #[test]
    fn narrow_wall_keeps_two_points() {
        let r = budget_rigging(1, 1, 500.0, DEFAULT_CABINET_WEIGHT_KG, DEFAULT_SAFETY_FACTOR);
        // ceil(0.5 + 1.0) = 2 m; ceil(2 / 3) + 1 = 2 points
        assert_eq!(r.truss_length_m, 2);
        assert_eq!(r.hang_points, 2);
    }

    #[test]
    fn heavy_load_needs_engineering_review() {
        let r = budget_rigging(20, 20, 600.0, 30.0, DEFAULT_SAFETY_FACTOR);
        assert_matches!(r.motor, MotorSelection::EngineeringReviewRequired);
    }

    #[test]
    fn motor_tiers_pick_smallest_sufficient() {
        assert_eq!(MotorSelection::for_required_capacity(0.0).wll_kg(), Some(250));
        assert_eq!(MotorSelection::for_required_capacity(250.0).wll_kg(), Some(250));
        assert_eq!(MotorSelection::for_required_capacity(250.1).wll_kg(), Some(500));
        assert_eq!(MotorSelection::for_required_capacity(1280.0).wll_kg(), Some(2000));
        assert_eq!(MotorSelection::for_required_capacity(2000.1).wll_kg(), None);
    }

    #[test]
    fn motor_selection_is_monotonic() {
        let rank = |m: MotorSelection| m.wll_kg().unwrap_or(u32::MAX);
        let mut previous = 0;
        let mut required = 0.0;
        while required < 3000.0 {
            let current = rank(MotorSelection::for_required_capacity(required));
            assert!(current >= previous, "tier dropped at {required}");
            previous = current;
            required += 17.5;
        }
    }

    #[test]
    fn labeled_view() {
        let r = budget_rigging(10, 5, 600.0, DEFAULT_CABINET_WEIGHT_KG, DEFAULT_SAFETY_FACTOR);
        let view = r.labeled(&NumberFormat::LATAM);
        let labels: Vec<&str> = view.labels().collect();
        assert_eq!(
            labels,
            vec![
                "Total Static Load (Dead Load)",
                "Suggested Truss (Min)",
                "Motor Points",
                "Required Motor Capacity (SF 8:1)",
            ]
        );
        assert_eq!(
            view.get("Required Motor Capacity (SF 8:1)").and_then(|v| v.as_str()),
            Some("2.000 kg (WLL) / motor")
        );
        assert_eq!(
            view.get("Total Static Load (Dead Load)").and_then(|v| v.as_str()),
            Some("640,00 kg")
        );
    }
}
