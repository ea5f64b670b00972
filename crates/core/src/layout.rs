//! Layout resolver: cabinet model, grid variants and viewing guidance.
//!
//! Given the requested wall size and pitch, derives the cabinet model
//! (exact from a supplied hardware spec, or estimated from pitch) and three
//! candidate grids using nearest, floor and ceiling rounding of the
//! requested size in cabinets.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::format::NumberFormat;
use crate::labeled::LabeledMap;
use crate::types::{Environment, UseCase};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default indoor cabinet size (W, H) in millimeters.
pub const INDOOR_CABINET_MM: (f64, f64) = (600.0, 337.5);
/// Default outdoor cabinet size (W, H) in millimeters.
pub const OUTDOOR_CABINET_MM: (f64, f64) = (960.0, 960.0);
/// Modules assumed per cabinet when no hardware spec is supplied.
pub const ESTIMATED_MODULES_PER_CABINET: u32 = 4;

/// Minimum viewing distance in meters per millimeter of pitch.
pub const VIEWING_MIN_FACTOR: f64 = 1.0;
/// Optimal viewing distance in meters per millimeter of pitch.
pub const VIEWING_OPTIMAL_FACTOR: f64 = 3.0;
/// Retina-acuity distance in feet per millimeter of pitch.
pub const VIEWING_RETINA_FACTOR: f64 = 10.0;

const MM_PER_M: f64 = 1000.0;

// ---------------------------------------------------------------------------
// Hardware specification
// ---------------------------------------------------------------------------

/// Manufacturer data for a specific cabinet/module model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExactHardwareSpec {
    pub module_res_width: u32,
    pub module_res_height: u32,
    pub module_width_mm: f64,
    pub module_height_mm: f64,
    pub cabinet_width_mm: f64,
    pub cabinet_height_mm: f64,
}

/// How the cabinet model is obtained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum HardwareSpec {
    Exact(ExactHardwareSpec),
    EstimatedFromPitch,
}

/// The six optional hardware fields as they arrive from a form or file.
///
/// Converts into [`HardwareSpec`] only when all six or none are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HardwareFields {
    pub module_res_width: Option<u32>,
    pub module_res_height: Option<u32>,
    pub module_width_mm: Option<f64>,
    pub module_height_mm: Option<f64>,
    pub cabinet_width_mm: Option<f64>,
    pub cabinet_height_mm: Option<f64>,
}

impl TryFrom<HardwareFields> for HardwareSpec {
    type Error = CoreError;

    fn try_from(fields: HardwareFields) -> Result<Self, Self::Error> {
        match fields {
            HardwareFields {
                module_res_width: Some(module_res_width),
                module_res_height: Some(module_res_height),
                module_width_mm: Some(module_width_mm),
                module_height_mm: Some(module_height_mm),
                cabinet_width_mm: Some(cabinet_width_mm),
                cabinet_height_mm: Some(cabinet_height_mm),
            } => Ok(Self::Exact(ExactHardwareSpec {
                module_res_width,
                module_res_height,
                module_width_mm,
                module_height_mm,
                cabinet_width_mm,
                cabinet_height_mm,
            })),
            HardwareFields {
                module_res_width: None,
                module_res_height: None,
                module_width_mm: None,
                module_height_mm: None,
                cabinet_width_mm: None,
                cabinet_height_mm: None,
            } => Ok(Self::EstimatedFromPitch),
            partial => {
                let missing: Vec<&str> = [
                    ("module_res_width", partial.module_res_width.is_none()),
                    ("module_res_height", partial.module_res_height.is_none()),
                    ("module_width_mm", partial.module_width_mm.is_none()),
                    ("module_height_mm", partial.module_height_mm.is_none()),
                    ("cabinet_width_mm", partial.cabinet_width_mm.is_none()),
                    ("cabinet_height_mm", partial.cabinet_height_mm.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                Err(CoreError::InvalidSpecification(format!(
                    "hardware fields must be supplied together or not at all; missing: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Project request
// ---------------------------------------------------------------------------

/// Physical request for one video wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRequest {
    pub use_case: UseCase,
    pub environment: Environment,
    pub width_mm: f64,
    pub height_mm: f64,
    pub pitch_mm: f64,
    pub hardware: HardwareSpec,
}

// ---------------------------------------------------------------------------
// Cabinet model
// ---------------------------------------------------------------------------

/// Physical and pixel dimensions of one cabinet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CabinetModel {
    pub width_mm: f64,
    pub height_mm: f64,
    /// Module grid inside the cabinet; unknown for estimated cabinets.
    pub modules_wide: Option<u32>,
    pub modules_high: Option<u32>,
    pub modules_per_cabinet: u32,
    pub res_width: u32,
    pub res_height: u32,
    pub hardware: HardwareSpec,
}

impl CabinetModel {
    pub fn from_request(request: &ProjectRequest) -> Self {
        match &request.hardware {
            HardwareSpec::Exact(spec) => Self::exact(spec),
            HardwareSpec::EstimatedFromPitch => {
                Self::estimated(request.environment, request.pitch_mm)
            }
        }
    }

    /// Module counts are floor divisions; partial modules never fit.
    fn exact(spec: &ExactHardwareSpec) -> Self {
        let modules_wide = (spec.cabinet_width_mm / spec.module_width_mm).floor() as u32;
        let modules_high = (spec.cabinet_height_mm / spec.module_height_mm).floor() as u32;
        Self {
            width_mm: spec.cabinet_width_mm,
            height_mm: spec.cabinet_height_mm,
            modules_wide: Some(modules_wide),
            modules_high: Some(modules_high),
            modules_per_cabinet: modules_wide.saturating_mul(modules_high),
            res_width: spec.module_res_width.saturating_mul(modules_wide),
            res_height: spec.module_res_height.saturating_mul(modules_high),
            hardware: HardwareSpec::Exact(spec.clone()),
        }
    }

    fn estimated(environment: Environment, pitch_mm: f64) -> Self {
        let (width_mm, height_mm) = match environment {
            Environment::Indoor => INDOOR_CABINET_MM,
            Environment::Outdoor => OUTDOOR_CABINET_MM,
        };
        Self {
            width_mm,
            height_mm,
            modules_wide: None,
            modules_high: None,
            modules_per_cabinet: ESTIMATED_MODULES_PER_CABINET,
            res_width: (width_mm / pitch_mm) as u32,
            res_height: (height_mm / pitch_mm) as u32,
            hardware: HardwareSpec::EstimatedFromPitch,
        }
    }
}

// ---------------------------------------------------------------------------
// Rounding
// ---------------------------------------------------------------------------

/// How a fractional cabinet count becomes a whole grid dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round half to even, so 16.5 cabinets become 16 and 17.5 become 18.
    Nearest,
    Floor,
    Ceiling,
}

impl RoundingMode {
    /// Apply the rounding and clamp to at least one cabinet.
    pub fn apply(self, exact: f64) -> u32 {
        let rounded = match self {
            Self::Nearest => exact.round_ties_even(),
            Self::Floor => exact.floor(),
            Self::Ceiling => exact.ceil(),
        };
        (rounded as u32).max(1)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Nearest => "Ideal Fit",
            Self::Floor => "Lower Fit",
            Self::Ceiling => "Upper Fit",
        }
    }
}

// ---------------------------------------------------------------------------
// Layout variant
// ---------------------------------------------------------------------------

/// One candidate cabinet grid and its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutVariant {
    pub rounding: RoundingMode,
    pub columns: u32,
    pub rows: u32,
    pub total_cabinets: u64,
    pub total_modules: u64,
    pub cabinet_width_mm: f64,
    pub cabinet_height_mm: f64,
    pub physical_width_mm: f64,
    pub physical_height_mm: f64,
    pub resolution_width: u64,
    pub resolution_height: u64,
    pub total_pixels: u64,
    pub area_m2: f64,
}

impl LayoutVariant {
    pub fn new(rounding: RoundingMode, columns: u32, rows: u32, cabinet: &CabinetModel) -> Self {
        let total_cabinets = u64::from(columns) * u64::from(rows);
        let physical_width_mm = f64::from(columns) * cabinet.width_mm;
        let physical_height_mm = f64::from(rows) * cabinet.height_mm;
        let resolution_width = u64::from(columns) * u64::from(cabinet.res_width);
        let resolution_height = u64::from(rows) * u64::from(cabinet.res_height);
        Self {
            rounding,
            columns,
            rows,
            total_cabinets,
            total_modules: total_cabinets.saturating_mul(u64::from(cabinet.modules_per_cabinet)),
            cabinet_width_mm: cabinet.width_mm,
            cabinet_height_mm: cabinet.height_mm,
            physical_width_mm,
            physical_height_mm,
            resolution_width,
            resolution_height,
            total_pixels: resolution_width.saturating_mul(resolution_height),
            area_m2: (physical_width_mm / MM_PER_M) * (physical_height_mm / MM_PER_M),
        }
    }

    /// Machine-readable view with unformatted numbers.
    pub fn raw_view(&self) -> LabeledMap {
        let mut map = LabeledMap::new();
        map.push("columns", self.columns)
            .push("rows", self.rows)
            .push("total_cabinets", self.total_cabinets)
            .push("total_modules", self.total_modules)
            .push("cabinet_width_mm", self.cabinet_width_mm)
            .push("cabinet_height_mm", self.cabinet_height_mm)
            .push("physical_width_mm", self.physical_width_mm)
            .push("physical_height_mm", self.physical_height_mm)
            .push("resolution_width", self.resolution_width)
            .push("resolution_height", self.resolution_height)
            .push("total_pixels", self.total_pixels)
            .push("area_m2", self.area_m2);
        map
    }

    /// Human-readable view for reports.
    pub fn formatted_view(&self, cabinet: &CabinetModel, fmt: &NumberFormat) -> LabeledMap {
        let mut map = LabeledMap::new();
        let cabinet_size = format!(
            "{} (W) x {} (H)",
            fmt.number(cabinet.width_mm, 2),
            fmt.number(cabinet.height_mm, 2)
        );

        match &cabinet.hardware {
            HardwareSpec::Exact(spec) => {
                map.push(
                    "Module Resolution (px)",
                    format!(
                        "{} (W) x {} (H)",
                        fmt.integer(u64::from(spec.module_res_width)),
                        fmt.integer(u64::from(spec.module_res_height))
                    ),
                )
                .push(
                    "Module Size (mm)",
                    format!(
                        "{} (W) x {} (H)",
                        fmt.number(spec.module_width_mm, 2),
                        fmt.number(spec.module_height_mm, 2)
                    ),
                )
                .push("Cabinet Size (mm)", cabinet_size)
                .push(
                    "Modules per Cabinet",
                    format!(
                        "{} (W) x {} (H) = {} modules",
                        cabinet.modules_wide.unwrap_or_default(),
                        cabinet.modules_high.unwrap_or_default(),
                        cabinet.modules_per_cabinet
                    ),
                );
            }
            HardwareSpec::EstimatedFromPitch => {
                map.push("Module Resolution (px)", "Auto-calculated from pitch")
                    .push("Module Size (mm)", "Standard")
                    .push("Cabinet Size (mm)", cabinet_size)
                    .push(
                        "Modules per Cabinet",
                        format!("{} modules (standard)", cabinet.modules_per_cabinet),
                    );
            }
        }

        map.push(
            "Cabinets (Columns x Rows)",
            format!("{} x {}", self.columns, self.rows),
        )
        .push(
            "Pieces",
            format!(
                "{} cabinets ({} modules)",
                self.total_cabinets, self.total_modules
            ),
        )
        .push(
            "Total Resolution",
            format!(
                "{} x {} ({} px)",
                fmt.integer(self.resolution_width),
                fmt.integer(self.resolution_height),
                fmt.integer(self.total_pixels)
            ),
        )
        .push(
            "Final Dimensions",
            format!(
                "{} x {} mm",
                fmt.number(self.physical_width_mm, 1),
                fmt.number(self.physical_height_mm, 1)
            ),
        )
        .push("Area (m²)", format!("{} m²", fmt.number(self.area_m2, 2)));
        map
    }
}

// ---------------------------------------------------------------------------
// Viewing guidance
// ---------------------------------------------------------------------------

/// Recommended viewing distances derived from pitch alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewingGuidance {
    pub minimum_m: f64,
    pub optimal_m: f64,
    pub retina_ft: f64,
}

impl ViewingGuidance {
    pub fn from_pitch(pitch_mm: f64) -> Self {
        Self {
            minimum_m: pitch_mm * VIEWING_MIN_FACTOR,
            optimal_m: pitch_mm * VIEWING_OPTIMAL_FACTOR,
            retina_ft: pitch_mm * VIEWING_RETINA_FACTOR,
        }
    }

    pub fn labeled(&self, fmt: &NumberFormat) -> LabeledMap {
        let mut map = LabeledMap::new();
        map.push("Minimum", format!("{} m", fmt.number(self.minimum_m, 2)))
            .push("Optimal", format!("{} m", fmt.number(self.optimal_m, 2)))
            .push(
                "Retina (Acuity)",
                format!("{} ft", fmt.number(self.retina_ft, 2)),
            );
        map
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// The three candidate layouts plus viewing guidance for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutOptions {
    pub cabinet: CabinetModel,
    pub nearest: LayoutVariant,
    pub floor: LayoutVariant,
    pub ceiling: LayoutVariant,
    pub viewing: ViewingGuidance,
}

impl LayoutOptions {
    /// Variants in report order: ideal, lower, upper.
    pub fn variants(&self) -> [&LayoutVariant; 3] {
        [&self.nearest, &self.floor, &self.ceiling]
    }
}

/// Compute the cabinet model, the three grid variants and viewing guidance.
pub fn resolve(request: &ProjectRequest) -> LayoutOptions {
    let cabinet = CabinetModel::from_request(request);
    let exact_columns = request.width_mm / cabinet.width_mm;
    let exact_rows = request.height_mm / cabinet.height_mm;

    let variant = |mode: RoundingMode| {
        LayoutVariant::new(
            mode,
            mode.apply(exact_columns),
            mode.apply(exact_rows),
            &cabinet,
        )
    };
    let nearest = variant(RoundingMode::Nearest);
    let floor = variant(RoundingMode::Floor);
    let ceiling = variant(RoundingMode::Ceiling);

    LayoutOptions {
        nearest,
        floor,
        ceiling,
        viewing: ViewingGuidance::from_pitch(request.pitch_mm),
        cabinet,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn indoor_request(width_mm: f64, height_mm: f64, pitch_mm: f64) -> ProjectRequest {
        ProjectRequest {
            use_case: UseCase::Cinema,
            environment: Environment::Indoor,
            width_mm,
            height_mm,
            pitch_mm,
            hardware: HardwareSpec::EstimatedFromPitch,
        }
    }

    fn exact_fields() -> HardwareFields {
        HardwareFields {
            module_res_width: Some(104),
            module_res_height: Some(104),
            module_width_mm: Some(250.0),
            module_height_mm: Some(250.0),
            cabinet_width_mm: Some(500.0),
            cabinet_height_mm: Some(500.0),
        }
    }

    // -- HardwareSpec construction --

    #[test]
    fn all_fields_build_exact_spec() {
        let spec = HardwareSpec::try_from(exact_fields()).unwrap();
        assert_matches!(spec, HardwareSpec::Exact(ExactHardwareSpec { module_res_width: 104, .. }));
    }

    #[test]
    fn no_fields_build_estimated_spec() {
        let spec = HardwareSpec::try_from(HardwareFields::default()).unwrap();
        assert_eq!(spec, HardwareSpec::EstimatedFromPitch);
    }

    #[test]
    fn partial_fields_rejected() {
        let mut fields = exact_fields();
        fields.cabinet_height_mm = None;
        fields.module_res_width = None;
        let err = HardwareSpec::try_from(fields).unwrap_err();
        assert_matches!(err, CoreError::InvalidSpecification(_));
        let msg = err.to_string();
        assert!(msg.contains("cabinet_height_mm"));
        assert!(msg.contains("module_res_width"));
    }

    #[test]
    fn single_field_rejected() {
        let fields = HardwareFields {
            module_width_mm: Some(250.0),
            ..HardwareFields::default()
        };
        assert_matches!(
            HardwareSpec::try_from(fields),
            Err(CoreError::InvalidSpecification(_))
        );
    }

    // -- Cabinet model --

    #[test]
    fn estimated_indoor_cabinet() {
        let cabinet = CabinetModel::from_request(&indoor_request(10_000.0, 5_000.0, 2.6));
        assert_eq!(cabinet.width_mm, 600.0);
        assert_eq!(cabinet.height_mm, 337.5);
        assert_eq!(cabinet.res_width, 230);
        assert_eq!(cabinet.res_height, 129);
        assert_eq!(cabinet.modules_per_cabinet, ESTIMATED_MODULES_PER_CABINET);
        assert_eq!(cabinet.modules_wide, None);
    }

    #[test]
    fn estimated_outdoor_cabinet() {
        let mut request = indoor_request(10_000.0, 5_000.0, 10.0);
        request.environment = Environment::Outdoor;
        let cabinet = CabinetModel::from_request(&request);
        assert_eq!((cabinet.width_mm, cabinet.height_mm), OUTDOOR_CABINET_MM);
        assert_eq!(cabinet.res_width, 96);
        assert_eq!(cabinet.res_height, 96);
    }

    #[test]
    fn exact_cabinet_floors_module_counts() {
        let mut fields = exact_fields();
        fields.cabinet_width_mm = Some(600.0);
        let mut request = indoor_request(10_000.0, 5_000.0, 2.6);
        request.hardware = HardwareSpec::try_from(fields).unwrap();
        let cabinet = CabinetModel::from_request(&request);
        // 600 / 250 = 2.4 -> 2 modules wide
        assert_eq!(cabinet.modules_wide, Some(2));
        assert_eq!(cabinet.modules_high, Some(2));
        assert_eq!(cabinet.modules_per_cabinet, 4);
        assert_eq!(cabinet.res_width, 208);
        assert_eq!(cabinet.res_height, 208);
    }

    // -- Rounding --

    #[test]
    fn nearest_rounds_half_to_even() {
        assert_eq!(RoundingMode::Nearest.apply(16.5), 16);
        assert_eq!(RoundingMode::Nearest.apply(17.5), 18);
        assert_eq!(RoundingMode::Nearest.apply(16.67), 17);
    }

    #[test]
    fn rounding_clamps_to_one() {
        assert_eq!(RoundingMode::Nearest.apply(0.2), 1);
        assert_eq!(RoundingMode::Floor.apply(0.9), 1);
        assert_eq!(RoundingMode::Ceiling.apply(0.1), 1);
    }

    // -- Resolver --

    #[test]
    fn indoor_reference_request() {
        let options = resolve(&indoor_request(10_000.0, 5_000.0, 2.6));
        assert_eq!(options.nearest.columns, 17);
        assert_eq!(options.nearest.rows, 15);
        assert_eq!(options.floor.columns, 16);
        assert_eq!(options.floor.rows, 14);
        assert_eq!(options.ceiling.columns, 17);
        assert_eq!(options.ceiling.rows, 15);
    }

    #[test]
    fn variant_metrics() {
        let options = resolve(&indoor_request(10_000.0, 5_000.0, 2.6));
        let v = &options.nearest;
        assert_eq!(v.total_cabinets, 255);
        assert_eq!(v.total_modules, 1020);
        assert_eq!(v.resolution_width, 17 * 230);
        assert_eq!(v.resolution_height, 15 * 129);
        assert_eq!(v.total_pixels, 3910 * 1935);
        assert!((v.physical_width_mm - 10_200.0).abs() < 1e-9);
        assert!((v.physical_height_mm - 5_062.5).abs() < 1e-9);
        assert!((v.area_m2 - 10.2 * 5.0625).abs() < 1e-9);
    }

    #[test]
    fn variants_are_ordered_componentwise() {
        for (w, h, pitch) in [
            (10_000.0, 5_000.0, 2.6),
            (300.0, 100.0, 3.9),
            (6_300.0, 3_375.0, 1.9),
            (25_000.0, 7_777.0, 4.8),
        ] {
            let options = resolve(&indoor_request(w, h, pitch));
            assert!(options.floor.columns <= options.nearest.columns);
            assert!(options.nearest.columns <= options.ceiling.columns);
            assert!(options.floor.rows <= options.nearest.rows);
            assert!(options.nearest.rows <= options.ceiling.rows);
            for v in options.variants() {
                assert!(v.columns >= 1 && v.rows >= 1);
            }
        }
    }

    #[test]
    fn tiny_request_still_gets_one_cabinet() {
        let options = resolve(&indoor_request(100.0, 100.0, 2.6));
        for v in options.variants() {
            assert_eq!((v.columns, v.rows), (1, 1));
        }
    }

    #[test]
    fn viewing_guidance_is_linear_in_pitch() {
        for pitch in [0.9, 1.5, 2.6, 3.9, 10.0] {
            let g = ViewingGuidance::from_pitch(pitch);
            assert_eq!(g.minimum_m, pitch);
            assert_eq!(g.optimal_m, pitch * 3.0);
            assert_eq!(g.retina_ft, pitch * 10.0);
        }
    }

    // -- Views --

    #[test]
    fn raw_view_keeps_numbers() {
        let options = resolve(&indoor_request(10_000.0, 5_000.0, 2.6));
        let raw = options.nearest.raw_view();
        assert_eq!(raw.get("columns").and_then(|v| v.as_u64()), Some(17));
        assert_eq!(raw.get("total_pixels").and_then(|v| v.as_u64()), Some(3910 * 1935));
        assert!(raw.get("area_m2").and_then(|v| v.as_f64()).is_some());
    }

    #[test]
    fn formatted_view_labels_in_order() {
        let options = resolve(&indoor_request(10_000.0, 5_000.0, 2.6));
        let view = options
            .nearest
            .formatted_view(&options.cabinet, &NumberFormat::LATAM);
        let labels: Vec<&str> = view.labels().collect();
        assert_eq!(
            labels,
            vec![
                "Module Resolution (px)",
                "Module Size (mm)",
                "Cabinet Size (mm)",
                "Modules per Cabinet",
                "Cabinets (Columns x Rows)",
                "Pieces",
                "Total Resolution",
                "Final Dimensions",
                "Area (m²)",
            ]
        );
        assert_eq!(
            view.get("Total Resolution").and_then(|v| v.as_str()),
            Some("3.910 x 1.935 (7.565.850 px)")
        );
        assert_eq!(
            view.get("Cabinet Size (mm)").and_then(|v| v.as_str()),
            Some("600,00 (W) x 337,50 (H)")
        );
        assert_eq!(
            view.get("Pieces").and_then(|v| v.as_str()),
            Some("255 cabinets (1020 modules)")
        );
    }

    #[test]
    fn formatted_view_for_exact_hardware() {
        let mut request = indoor_request(5_000.0, 3_000.0, 2.6);
        request.hardware = HardwareSpec::try_from(exact_fields()).unwrap();
        let options = resolve(&request);
        let view = options
            .nearest
            .formatted_view(&options.cabinet, &NumberFormat::LATAM);
        assert_eq!(
            view.get("Modules per Cabinet").and_then(|v| v.as_str()),
            Some("2 (W) x 2 (H) = 4 modules")
        );
        assert_eq!(
            view.get("Module Resolution (px)").and_then(|v| v.as_str()),
            Some("104 (W) x 104 (H)")
        );
    }
}
