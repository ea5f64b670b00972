//! Signal sizing: output ports, cabling topology, aspect ratios and camera
//! sync for one layout.
//!
//! The resulting [`SignalProfile`] carries the required port count that the
//! processor sizing step consumes; nothing is cached between the two.

use serde::{Deserialize, Serialize};

use crate::format::NumberFormat;
use crate::labeled::LabeledMap;
use crate::types::{ColorDepth, InputResolution, VideoPort};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Pixels one output port carries at 8-bit, up to 60 fps.
pub const BASE_PORT_CAPACITY_PX: u64 = 650_000;
/// Frame rate above which port capacity scales down proportionally.
pub const REFERENCE_FPS: u32 = 60;
/// Copper cable runs longer than this (meters) need fiber.
pub const MAX_COPPER_DISTANCE_M: f64 = 100.0;
/// Shutter assumed when the camera shutter string cannot be parsed.
pub const DEFAULT_SHUTTER_SECS: f64 = 1.0 / 60.0;
/// Default LED refresh rate when the use case carries no camera setup.
pub const DEFAULT_REFRESH_RATE_HZ: f64 = 3840.0;
/// Default camera shutter string.
pub const DEFAULT_SHUTTER: &str = "1/60";

/// Refresh cycles per exposure at or above which sync is optimal.
pub const SYNC_OPTIMAL_CYCLES: f64 = 50.0;
/// Refresh cycles per exposure at or above which sync is a warning.
pub const SYNC_WARNING_CYCLES: f64 = 25.0;

/// Placeholder for an aspect ratio with a zero side.
pub const RATIO_NOT_APPLICABLE: &str = "N/A";

// ---------------------------------------------------------------------------
// Video source
// ---------------------------------------------------------------------------

/// Video feed parameters supplied by the operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSource {
    pub input_resolution: InputResolution,
    pub color_depth: ColorDepth,
    pub port: VideoPort,
    pub fps: u32,
    pub cable_distance_m: f64,
    pub refresh_rate_hz: f64,
    pub shutter: String,
    pub num_inputs: u32,
}

impl VideoSource {
    pub fn requires_fiber(&self) -> bool {
        self.cable_distance_m > MAX_COPPER_DISTANCE_M
    }
}

// ---------------------------------------------------------------------------
// Port capacity
// ---------------------------------------------------------------------------

/// Pixels a single output port can drive for the given depth and frame rate.
pub fn port_capacity(color_depth: ColorDepth, fps: u32) -> u64 {
    let mut capacity = BASE_PORT_CAPACITY_PX;
    if color_depth.is_deep_color() {
        capacity /= 2;
    }
    if fps > REFERENCE_FPS {
        capacity = (capacity as f64 * (f64::from(REFERENCE_FPS) / f64::from(fps))) as u64;
    }
    capacity.max(1)
}

/// Ports needed to drive `total_pixels`, never fewer than one.
pub fn required_ports(total_pixels: u64, capacity: u64) -> u64 {
    total_pixels.div_ceil(capacity.max(1)).max(1)
}

// ---------------------------------------------------------------------------
// Aspect ratio
// ---------------------------------------------------------------------------

/// A width:height ratio reduced by its greatest common divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AspectRatio {
    Reduced { width: u64, height: u64 },
    NotApplicable,
}

impl AspectRatio {
    pub fn reduce(width: u64, height: u64) -> Self {
        if width == 0 || height == 0 {
            return Self::NotApplicable;
        }
        let divisor = gcd(width, height);
        Self::Reduced {
            width: width / divisor,
            height: height / divisor,
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reduced { width, height } => write!(f, "{width}:{height}"),
            Self::NotApplicable => f.write_str(RATIO_NOT_APPLICABLE),
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

// ---------------------------------------------------------------------------
// Camera sync
// ---------------------------------------------------------------------------

/// Camera shutter as parsed from operator input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShutterSpeed {
    Parsed { seconds: f64 },
    /// The input could not be read; [`DEFAULT_SHUTTER_SECS`] is used.
    Defaulted { input: String },
}

impl ShutterSpeed {
    /// Parse `"1/60"` style fractions or a plain number of reciprocal
    /// seconds (`"120"` means 1/120 s). Never fails.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let seconds = match trimmed.split_once('/') {
            Some((num, den)) => match (num.trim().parse::<f64>(), den.trim().parse::<f64>()) {
                (Ok(num), Ok(den)) if den != 0.0 => Some(num / den),
                _ => None,
            },
            None => match trimmed.parse::<f64>() {
                Ok(value) if value != 0.0 => Some(1.0 / value),
                _ => None,
            },
        };

        match seconds {
            Some(seconds) if seconds.is_finite() && seconds > 0.0 => Self::Parsed { seconds },
            _ => Self::Defaulted {
                input: input.to_string(),
            },
        }
    }

    pub fn seconds(&self) -> f64 {
        match self {
            Self::Parsed { seconds } => *seconds,
            Self::Defaulted { .. } => DEFAULT_SHUTTER_SECS,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted { .. })
    }
}

/// Quality of LED refresh vs camera exposure alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncVerdict {
    Optimal,
    Warning,
    Critical,
}

impl SyncVerdict {
    pub fn from_cycles(cycles: f64) -> Self {
        if cycles >= SYNC_OPTIMAL_CYCLES {
            Self::Optimal
        } else if cycles >= SYNC_WARNING_CYCLES {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Optimal => "OPTIMAL",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Refresh cycles captured per exposure and the resulting verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraSync {
    pub shutter: ShutterSpeed,
    pub cycles_per_exposure: f64,
    pub verdict: SyncVerdict,
}

impl CameraSync {
    pub fn evaluate(refresh_rate_hz: f64, shutter: &str) -> Self {
        let shutter = ShutterSpeed::parse(shutter);
        let cycles_per_exposure = refresh_rate_hz * shutter.seconds();
        Self {
            verdict: SyncVerdict::from_cycles(cycles_per_exposure),
            shutter,
            cycles_per_exposure,
        }
    }
}

// ---------------------------------------------------------------------------
// Signal profile
// ---------------------------------------------------------------------------

/// Layout metrics the signal sizer needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalInput {
    pub total_pixels: u64,
    pub total_cabinets: u64,
    pub resolution_width: u64,
    pub resolution_height: u64,
    pub physical_width_mm: f64,
    pub physical_height_mm: f64,
}

impl From<&crate::layout::LayoutVariant> for SignalInput {
    fn from(v: &crate::layout::LayoutVariant) -> Self {
        Self {
            total_pixels: v.total_pixels,
            total_cabinets: v.total_cabinets,
            resolution_width: v.resolution_width,
            resolution_height: v.resolution_height,
            physical_width_mm: v.physical_width_mm,
            physical_height_mm: v.physical_height_mm,
        }
    }
}

/// Data-path requirements for one layout and video source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalProfile {
    pub total_pixels: u64,
    pub port_capacity_px: u64,
    pub required_ports: u64,
    /// One receiver card per cabinet.
    pub receiver_cards: u64,
    pub requires_fiber: bool,
    pub logical_ratio: AspectRatio,
    pub physical_ratio: AspectRatio,
    pub refresh_rate_hz: f64,
    pub camera_sync: CameraSync,
}

impl SignalProfile {
    pub fn topology_note(&self) -> String {
        let mut note = format!("{} RJ45 ports (Cat6).", self.required_ports);
        if self.requires_fiber {
            note.push_str(" [!] Critical distance: fiber optic required.");
        }
        note
    }

    pub fn labeled(&self, fmt: &NumberFormat) -> LabeledMap {
        let mut sync = format!(
            "Cycles: {} -> {}",
            fmt.number(self.camera_sync.cycles_per_exposure, 1),
            self.camera_sync.verdict.label()
        );
        if let ShutterSpeed::Defaulted { input } = &self.camera_sync.shutter {
            sync.push_str(&format!(" (shutter '{input}' unreadable, assumed 1/60)"));
        }

        let mut map = LabeledMap::new();
        map.push(
            "Total Pixels",
            format!("{} px", fmt.integer(self.total_pixels)),
        )
        .push(
            "Aspect Ratio",
            format!(
                "{} (mapping) vs {} (physical)",
                self.logical_ratio, self.physical_ratio
            ),
        )
        .push(
            "Refresh Rate",
            format!("{} Hz", fmt.number(self.refresh_rate_hz, 0)),
        )
        .push("Camera Sync", sync)
        .push("Output Ports Required (RJ45)", self.required_ports)
        .push(
            "Receiver Cards (R-Cards)",
            format!("{} cards (1 per cabinet)", self.receiver_cards),
        )
        .push("Network Topology", self.topology_note());
        map
    }
}

/// Size the data path for one layout.
pub fn size_signal(input: &SignalInput, source: &VideoSource) -> SignalProfile {
    let port_capacity_px = port_capacity(source.color_depth, source.fps);
    SignalProfile {
        total_pixels: input.total_pixels,
        port_capacity_px,
        required_ports: required_ports(input.total_pixels, port_capacity_px),
        receiver_cards: input.total_cabinets,
        requires_fiber: source.requires_fiber(),
        logical_ratio: AspectRatio::reduce(input.resolution_width, input.resolution_height),
        physical_ratio: AspectRatio::reduce(
            input.physical_width_mm as u64,
            input.physical_height_mm as u64,
        ),
        refresh_rate_hz: source.refresh_rate_hz,
        camera_sync: CameraSync::evaluate(source.refresh_rate_hz, &source.shutter),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
