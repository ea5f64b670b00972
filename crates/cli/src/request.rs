//! Request file format and conversion into engine types.
//!
//! Every field has a default matching the stock indoor cinema setup, so a
//! request file only needs the values that differ.

use ledcalc_core::estimate::SiteParameters;
use ledcalc_core::layout::{HardwareFields, HardwareSpec, ProjectRequest};
use ledcalc_core::power::DEFAULT_VOLTAGE;
use ledcalc_core::rigging::{DEFAULT_CABINET_WEIGHT_KG, DEFAULT_SAFETY_FACTOR};
use ledcalc_core::signal::{VideoSource, DEFAULT_REFRESH_RATE_HZ, DEFAULT_SHUTTER};
use ledcalc_core::types::{ColorDepth, InputResolution, UseCase};
use serde::Deserialize;
use validator::Validate;

use crate::error::CliError;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Pitch and hardware values are not range-checked here: the engine
/// clamps degenerate layouts to a single cabinet instead of failing.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct RequestFile {
    pub use_case: String,
    pub environment: String,
    #[validate(range(min = 100.0))]
    pub width_mm: f64,
    #[validate(range(min = 100.0))]
    pub height_mm: f64,
    pub pitch_mm: f64,
    pub hardware: HardwareInput,
    #[validate(nested)]
    pub video: VideoInput,
    #[validate(nested)]
    pub site: SiteInput,
}

impl Default for RequestFile {
    fn default() -> Self {
        Self {
            use_case: "Cinema".to_string(),
            environment: "Indoor".to_string(),
            width_mm: 10_000.0,
            height_mm: 5_000.0,
            pitch_mm: 2.6,
            hardware: HardwareInput::default(),
            video: VideoInput::default(),
            site: SiteInput::default(),
        }
    }
}

/// Optional manufacturer data; all six fields or none.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HardwareInput {
    pub module_res_width: Option<u32>,
    pub module_res_height: Option<u32>,
    pub module_width_mm: Option<f64>,
    pub module_height_mm: Option<f64>,
    pub cabinet_width_mm: Option<f64>,
    pub cabinet_height_mm: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct VideoInput {
    pub input_resolution: String,
    pub color_depth: String,
    pub port: String,
    #[validate(range(min = 1))]
    pub fps: u32,
    #[validate(range(min = 1.0))]
    pub cable_distance_m: f64,
    #[validate(range(min = 1))]
    pub num_inputs: u32,
    /// Only honoured for broadcast use cases.
    #[validate(range(exclusive_min = 0.0))]
    pub refresh_rate_hz: f64,
    /// Only honoured for broadcast use cases.
    pub shutter: String,
}

impl Default for VideoInput {
    fn default() -> Self {
        Self {
            input_resolution: "4K".to_string(),
            color_depth: "HDR 10-bit".to_string(),
            port: "HDMI 2.0".to_string(),
            fps: 60,
            cable_distance_m: 50.0,
            num_inputs: 1,
            refresh_rate_hz: DEFAULT_REFRESH_RATE_HZ,
            shutter: DEFAULT_SHUTTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInput {
    #[validate(range(exclusive_min = 0.0))]
    pub voltage: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub cabinet_weight_kg: f64,
    #[validate(range(min = 1))]
    pub safety_factor: u32,
}

impl Default for SiteInput {
    fn default() -> Self {
        Self {
            voltage: DEFAULT_VOLTAGE,
            cabinet_weight_kg: DEFAULT_CABINET_WEIGHT_KG,
            safety_factor: DEFAULT_SAFETY_FACTOR,
        }
    }
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Engine inputs built from a validated request.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineInputs {
    pub request: ProjectRequest,
    pub source: VideoSource,
    pub site: SiteParameters,
}

impl From<HardwareInput> for HardwareFields {
    fn from(h: HardwareInput) -> Self {
        Self {
            module_res_width: h.module_res_width,
            module_res_height: h.module_res_height,
            module_width_mm: h.module_width_mm,
            module_height_mm: h.module_height_mm,
            cabinet_width_mm: h.cabinet_width_mm,
            cabinet_height_mm: h.cabinet_height_mm,
        }
    }
}

impl RequestFile {
    pub fn from_json(json: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate field ranges, then build engine types.
    pub fn into_engine_inputs(self) -> Result<EngineInputs, CliError> {
        self.validate()?;

        let use_case: UseCase = self.use_case.parse()?;
        let request = ProjectRequest {
            use_case,
            environment: self.environment.parse()?,
            width_mm: self.width_mm,
            height_mm: self.height_mm,
            pitch_mm: self.pitch_mm,
            hardware: HardwareSpec::try_from(HardwareFields::from(self.hardware))?,
        };

        let video = self.video;
        let (refresh_rate_hz, shutter) = if request.use_case.is_broadcast() {
            (video.refresh_rate_hz, video.shutter)
        } else {
            tracing::info!(
                use_case = request.use_case.label(),
                "Non-broadcast use case, using default refresh rate and shutter",
            );
            (DEFAULT_REFRESH_RATE_HZ, DEFAULT_SHUTTER.to_string())
        };

        let source = VideoSource {
            input_resolution: InputResolution::classify(&video.input_resolution),
            color_depth: ColorDepth::classify(&video.color_depth),
            port: video.port.parse()?,
            fps: video.fps,
            cable_distance_m: video.cable_distance_m,
            refresh_rate_hz,
            shutter,
            num_inputs: video.num_inputs,
        };

        let site = SiteParameters {
            voltage: self.site.voltage,
            cabinet_weight_kg: self.site.cabinet_weight_kg,
            safety_factor: self.site.safety_factor,
        };

        Ok(EngineInputs {
            request,
            source,
            site,
        })
    }
}
