//! Processor hardware sizing: processing cores, input/output cards and
//! optical interfaces.
//!
//! Consumes the required port count from a [`SignalProfile`] explicitly.

use serde::Serialize;

use crate::format::NumberFormat;
use crate::labeled::LabeledMap;
use crate::signal::{SignalProfile, VideoSource};
use crate::types::InputResolution;

/// Pixels one processing core (4K-class processor) can drive.
pub const CORE_CAPACITY_PX: u64 = 8_800_000;
/// Output ports per modular output card.
pub const PORTS_PER_OUTPUT_CARD: u64 = 16;
/// RJ45 ports aggregated by one 10G optical port.
pub const PORTS_PER_OPTICAL_LINK: u64 = 10;

/// 4K-equivalent inputs per 8K source when quad-linking.
const QUAD_LINK_INPUTS_PER_8K: u32 = 4;
/// 4K-equivalent inputs per 16K source.
const INPUTS_4K_PER_16K: u32 = 16;
/// 8K-capable cards per 16K source.
const NATIVE_CARDS_PER_16K: u32 = 4;
/// Sources per dual-4K input card.
const SOURCES_PER_DUAL_4K_CARD: u32 = 2;
/// Sources per quad-HD input card.
const SOURCES_PER_QUAD_HD_CARD: u32 = 4;

// ---------------------------------------------------------------------------
// Input cards
// ---------------------------------------------------------------------------

/// Input card requirement, per input resolution category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum InputCardPlan {
    /// 8K sources: quad-link 4K inputs, or one HDMI 2.1 card per source.
    Uhd8k {
        sources: u32,
        quad_link_inputs: u32,
        native_cards: u32,
    },
    /// 16K sources: 4K inputs, or 8K-capable HDMI 2.1 cards.
    Uhd16k {
        sources: u32,
        inputs_4k: u32,
        native_cards: u32,
    },
    Uhd4k { sources: u32, dual_4k_cards: u32 },
    Hd { sources: u32, quad_hd_cards: u32 },
}

impl InputCardPlan {
    pub fn for_sources(resolution: InputResolution, sources: u32) -> Self {
        match resolution {
            InputResolution::Uhd8k => Self::Uhd8k {
                sources,
                quad_link_inputs: sources * QUAD_LINK_INPUTS_PER_8K,
                native_cards: sources,
            },
            InputResolution::Uhd16k => Self::Uhd16k {
                sources,
                inputs_4k: sources * INPUTS_4K_PER_16K,
                native_cards: sources * NATIVE_CARDS_PER_16K,
            },
            InputResolution::Uhd4k => Self::Uhd4k {
                sources,
                dual_4k_cards: sources.div_ceil(SOURCES_PER_DUAL_4K_CARD),
            },
            InputResolution::Hd => Self::Hd {
                sources,
                quad_hd_cards: sources.div_ceil(SOURCES_PER_QUAD_HD_CARD),
            },
        }
    }

    pub fn describe(&self) -> String {
        match *self {
            Self::Uhd8k {
                sources,
                quad_link_inputs,
                native_cards,
            } => format!(
                "{sources}x 8K signal(s) -> Req. {quad_link_inputs}x 4K inputs (Quad-Link) or {native_cards}x HDMI 2.1 cards"
            ),
            Self::Uhd16k {
                sources,
                inputs_4k,
                native_cards,
            } => format!(
                "{sources}x 16K signal(s) -> Req. {inputs_4k}x 4K inputs or {native_cards}x HDMI 2.1 cards"
            ),
            Self::Uhd4k {
                sources,
                dual_4k_cards,
            } => format!(
                "{sources}x 4K signal(s) -> Req. {dual_4k_cards}x Dual-4K cards (or similar)"
            ),
            Self::Hd {
                sources,
                quad_hd_cards,
            } => format!("{sources}x HD signal(s) -> Req. {quad_hd_cards}x Quad-HD cards"),
        }
    }
}

// ---------------------------------------------------------------------------
// Optical interfaces
// ---------------------------------------------------------------------------

/// Fiber link requirement for long cable runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "required", rename_all = "snake_case")]
pub enum OpticalRequirement {
    NotRequired,
    /// Each optical port needs one converter at the screen end.
    Required { ports: u64, converters: u64 },
}

impl OpticalRequirement {
    pub fn for_ports(required_ports: u64, requires_fiber: bool) -> Self {
        if !requires_fiber {
            return Self::NotRequired;
        }
        let ports = required_ports.div_ceil(PORTS_PER_OPTICAL_LINK);
        Self::Required {
            ports,
            converters: ports,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::NotRequired => "NO (safe distance < 100m)".to_string(),
            Self::Required { ports, converters } => format!(
                "YES: {ports} OPT 10G ports (requires {converters} CVT10 converters at screen)"
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Processor profile
// ---------------------------------------------------------------------------

/// Processor hardware bill for one layout and source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessorProfile {
    pub format_summary: String,
    pub cores: u64,
    pub installed_capacity_px: u64,
    pub input_cards: InputCardPlan,
    pub output_cards: u64,
    pub optical: OpticalRequirement,
}

impl ProcessorProfile {
    pub fn labeled(&self, fmt: &NumberFormat) -> LabeledMap {
        let mut map = LabeledMap::new();
        map.push("Base Format and Quality", self.format_summary.clone())
            .push(
                "Max Load Capacity (Output)",
                format!(
                    "{} px ({} processing core(s))",
                    fmt.integer(self.installed_capacity_px),
                    self.cores
                ),
            )
            .push("Input Modules Required", self.input_cards.describe())
            .push(
                "Output Modules Required",
                format!(
                    "{} output card(s) (modular 16-port)",
                    self.output_cards
                ),
            )
            .push("Optical Interfaces (OPT)", self.optical.describe());
        map
    }
}

/// Processing cores needed for `total_pixels`, never fewer than one.
pub fn cores_needed(total_pixels: u64) -> u64 {
    total_pixels.div_ceil(CORE_CAPACITY_PX).max(1)
}

/// Size processor hardware from an already computed signal profile.
pub fn size_processor(signal: &SignalProfile, source: &VideoSource) -> ProcessorProfile {
    let cores = cores_needed(signal.total_pixels);
    ProcessorProfile {
        format_summary: format!(
            "{} via {} {} @ {}fps",
            source.input_resolution.label(),
            source.port.label(),
            source.color_depth.label(),
            source.fps
        ),
        cores,
        installed_capacity_px: cores.saturating_mul(CORE_CAPACITY_PX),
        input_cards: InputCardPlan::for_sources(source.input_resolution, source.num_inputs),
        output_cards: signal.required_ports.div_ceil(PORTS_PER_OUTPUT_CARD).max(1),
        optical: OpticalRequirement::for_ports(signal.required_ports, signal.requires_fiber),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::signal::{size_signal, SignalInput, DEFAULT_SHUTTER};
    use crate::types::{ColorDepth, VideoPort};

    fn source(resolution: InputResolution, inputs: u32, distance: f64) -> VideoSource {
        VideoSource {
            input_resolution: resolution,
            color_depth: ColorDepth::Hdr10Bit,
            port: VideoPort::Hdmi20,
            fps: 60,
            cable_distance_m: distance,
            refresh_rate_hz: 3840.0,
            shutter: DEFAULT_SHUTTER.to_string(),
            num_inputs: inputs,
        }
    }

    fn signal_for(total_pixels: u64, src: &VideoSource) -> SignalProfile {
        let input = SignalInput {
            total_pixels,
            total_cabinets: 10,
            resolution_width: 1920,
            resolution_height: 1080,
            physical_width_mm: 6000.0,
            physical_height_mm: 3375.0,
        };
        size_signal(&input, src)
    }

    // -- cores --

    #[test]
    fn cores_floor_at_one() {
        assert_eq!(cores_needed(0), 1);
        assert_eq!(cores_needed(CORE_CAPACITY_PX), 1);
        assert_eq!(cores_needed(CORE_CAPACITY_PX + 1), 2);
    }

    // -- input cards --

    #[test]
    fn eight_k_sources_need_quad_link() {
        let plan = InputCardPlan::for_sources(InputResolution::Uhd8k, 2);
        assert_eq!(
            plan,
            InputCardPlan::Uhd8k {
                sources: 2,
                quad_link_inputs: 8,
                native_cards: 2
            }
        );
    }

    #[test]
    fn sixteen_k_sources() {
        let plan = InputCardPlan::for_sources(InputResolution::Uhd16k, 1);
        assert_eq!(
            plan,
            InputCardPlan::Uhd16k {
                sources: 1,
                inputs_4k: 16,
                native_cards: 4
            }
        );
    }

    #[test]
    fn four_k_cards_pair_sources() {
        assert_matches!(
            InputCardPlan::for_sources(InputResolution::Uhd4k, 3),
            InputCardPlan::Uhd4k { dual_4k_cards: 2, .. }
        );
        assert_matches!(
            InputCardPlan::for_sources(InputResolution::Uhd4k, 1),
            InputCardPlan::Uhd4k { dual_4k_cards: 1, .. }
        );
    }

    #[test]
    fn hd_cards_group_four_sources() {
        assert_matches!(
            InputCardPlan::for_sources(InputResolution::Hd, 4),
            InputCardPlan::Hd { quad_hd_cards: 1, .. }
        );
        assert_matches!(
            InputCardPlan::for_sources(InputResolution::Hd, 5),
            InputCardPlan::Hd { quad_hd_cards: 2, .. }
        );
    }

    #[test]
    fn unrecognised_resolution_label_sizes_as_hd() {
        let resolution = InputResolution::classify("720p");
        assert_matches!(
            InputCardPlan::for_sources(resolution, 1),
            InputCardPlan::Hd { quad_hd_cards: 1, .. }
        );
    }

    // -- outputs and optics --

    #[test]
    fn output_cards_hold_sixteen_ports() {
        let src = source(InputResolution::Uhd4k, 1, 50.0);
        // 16 ports at 325k each
        let profile = size_processor(&signal_for(16 * 325_000, &src), &src);
        assert_eq!(profile.output_cards, 1);
        let profile = size_processor(&signal_for(16 * 325_000 + 1, &src), &src);
        assert_eq!(profile.output_cards, 2);
    }

    #[test]
    fn optical_only_beyond_one_hundred_meters() {
        let near = source(InputResolution::Uhd4k, 1, 100.0);
        let profile = size_processor(&signal_for(7_565_850, &near), &near);
        assert_eq!(profile.optical, OpticalRequirement::NotRequired);

        let far = source(InputResolution::Uhd4k, 1, 100.01);
        let profile = size_processor(&signal_for(7_565_850, &far), &far);
        // 24 ports -> 3 optical links
        assert_eq!(
            profile.optical,
            OpticalRequirement::Required {
                ports: 3,
                converters: 3
            }
        );
    }

    #[test]
    fn reference_processor_profile() {
        let src = source(InputResolution::Uhd4k, 1, 50.0);
        let profile = size_processor(&signal_for(7_565_850, &src), &src);
        assert_eq!(profile.cores, 1);
        assert_eq!(profile.installed_capacity_px, CORE_CAPACITY_PX);
        assert_eq!(profile.output_cards, 2);
        assert_eq!(profile.format_summary, "4K via HDMI 2.0 HDR 10-bit @ 60fps");
    }

    #[test]
    fn labeled_view() {
        let src = source(InputResolution::Uhd8k, 1, 150.0);
        let profile = size_processor(&signal_for(7_565_850, &src), &src);
        let view = profile.labeled(&NumberFormat::LATAM);
        assert_eq!(
            view.get("Max Load Capacity (Output)").and_then(|v| v.as_str()),
            Some("8.800.000 px (1 processing core(s))")
        );
        assert_eq!(
            view.get("Input Modules Required").and_then(|v| v.as_str()),
            Some("1x 8K signal(s) -> Req. 4x 4K inputs (Quad-Link) or 1x HDMI 2.1 cards")
        );
        assert_eq!(
            view.get("Optical Interfaces (OPT)").and_then(|v| v.as_str()),
            Some("YES: 3 OPT 10G ports (requires 3 CVT10 converters at screen)")
        );
    }
}
