//! End-to-end estimate for one request.
//!
//! Runs the layout resolver, then sizes signal, processor, power and
//! rigging from the ideal (nearest-rounding) variant.

use serde::{Deserialize, Serialize};

use crate::layout::{resolve, LayoutOptions, ProjectRequest};
use crate::power::{budget_power, PowerProfile, DEFAULT_VOLTAGE};
use crate::processor::{size_processor, ProcessorProfile};
use crate::rigging::{
    budget_rigging, RiggingProfile, DEFAULT_CABINET_WEIGHT_KG, DEFAULT_SAFETY_FACTOR,
};
use crate::signal::{size_signal, SignalInput, SignalProfile, VideoSource};

/// Site-level parameters that are not part of the wall itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteParameters {
    pub voltage: f64,
    pub cabinet_weight_kg: f64,
    pub safety_factor: u32,
}

impl Default for SiteParameters {
    fn default() -> Self {
        Self {
            voltage: DEFAULT_VOLTAGE,
            cabinet_weight_kg: DEFAULT_CABINET_WEIGHT_KG,
            safety_factor: DEFAULT_SAFETY_FACTOR,
        }
    }
}

/// Every calculator output for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectEstimate {
    pub request: ProjectRequest,
    pub source: VideoSource,
    pub site: SiteParameters,
    pub layout: LayoutOptions,
    pub signal: SignalProfile,
    pub processor: ProcessorProfile,
    pub power: PowerProfile,
    pub rigging: RiggingProfile,
}

pub fn estimate(
    request: &ProjectRequest,
    source: &VideoSource,
    site: &SiteParameters,
) -> ProjectEstimate {
    let layout = resolve(request);
    let ideal = &layout.nearest;
    tracing::debug!(
        columns = ideal.columns,
        rows = ideal.rows,
        total_pixels = ideal.total_pixels,
        area_m2 = ideal.area_m2,
        "Resolved ideal layout",
    );

    let signal = size_signal(&SignalInput::from(ideal), source);
    let processor = size_processor(&signal, source);
    tracing::debug!(
        required_ports = signal.required_ports,
        cores = processor.cores,
        output_cards = processor.output_cards,
        "Sized signal path",
    );
    if signal.camera_sync.shutter.is_defaulted() {
        tracing::warn!(shutter = %source.shutter, "Unreadable camera shutter, assuming 1/60 s");
    }

    let power = budget_power(ideal.area_m2, site.voltage, request.environment);
    let rigging = budget_rigging(
        ideal.columns,
        ideal.rows,
        ideal.cabinet_width_mm,
        site.cabinet_weight_kg,
        site.safety_factor,
    );
    tracing::debug!(
        max_power_w = power.max_power_w,
        static_load_kg = rigging.static_load_kg,
        hang_points = rigging.hang_points,
        "Budgeted power and rigging",
    );

    ProjectEstimate {
        request: request.clone(),
        source: source.clone(),
        site: *site,
        layout,
        signal,
        processor,
        power,
        rigging,
    }
}
