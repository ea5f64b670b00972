//! Shared enumerations for project requests and video sources.
//!
//! Closed categories (environment, use case, video port) reject unknown
//! labels with [`CoreError::Validation`]. Open categories (input resolution,
//! color depth) are classified from free-form labels and fall back to the
//! lowest tier instead of failing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Installation environment of the video wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Indoor,
    Outdoor,
}

impl Environment {
    pub fn label(self) -> &'static str {
        match self {
            Self::Indoor => "Indoor",
            Self::Outdoor => "Outdoor",
        }
    }
}

impl FromStr for Environment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indoor" => Ok(Self::Indoor),
            "outdoor" => Ok(Self::Outdoor),
            other => Err(CoreError::Validation(format!(
                "Unknown environment: '{other}'. Valid values: Indoor, Outdoor"
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Use case
// ---------------------------------------------------------------------------

/// What the wall is used for. Broadcast use cases (cinema, TV) carry their
/// own LED refresh rate and camera shutter; advertising uses the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UseCase {
    Cinema,
    Tv,
    Advertising,
}

impl UseCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Cinema => "Cinema",
            Self::Tv => "TV",
            Self::Advertising => "Advertising",
        }
    }

    /// Whether camera-sync inputs (refresh rate, shutter) apply.
    pub fn is_broadcast(self) -> bool {
        matches!(self, Self::Cinema | Self::Tv)
    }
}

impl FromStr for UseCase {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cinema" | "cine" => Ok(Self::Cinema),
            "tv" => Ok(Self::Tv),
            "advertising" | "publicidad" => Ok(Self::Advertising),
            other => Err(CoreError::Validation(format!(
                "Unknown use case: '{other}'. Valid values: Cinema, TV, Advertising"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Input resolution
// ---------------------------------------------------------------------------

/// Resolution category of each video source feeding the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputResolution {
    Hd,
    Uhd4k,
    Uhd8k,
    Uhd16k,
}

impl InputResolution {
    /// Classify a free-form label such as `"HD (1080p)"` or `"8K"`.
    ///
    /// Markers are matched case-sensitively. Anything without a 4K/8K/16K
    /// marker is treated as HD.
    pub fn classify(label: &str) -> Self {
        if label.contains("16K") {
            Self::Uhd16k
        } else if label.contains("8K") {
            Self::Uhd8k
        } else if label.contains("4K") {
            Self::Uhd4k
        } else {
            Self::Hd
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hd => "HD (1080p)",
            Self::Uhd4k => "4K",
            Self::Uhd8k => "8K",
            Self::Uhd16k => "16K",
        }
    }
}

// ---------------------------------------------------------------------------
// Color depth
// ---------------------------------------------------------------------------

/// Color depth / dynamic range of the video signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorDepth {
    Sdr8Bit,
    Hdr10Bit,
    Hdr12Bit,
}

impl ColorDepth {
    /// Classify a free-form label such as `"HDR 10-bit"`.
    ///
    /// Labels mentioning 12-bit map to [`ColorDepth::Hdr12Bit`]; 10-bit or
    /// HDR to [`ColorDepth::Hdr10Bit`]; anything else to 8-bit SDR. Markers
    /// are matched case-sensitively (`12-bit`, `10-bit`, `HDR`).
    pub fn classify(label: &str) -> Self {
        if label.contains("12-bit") {
            Self::Hdr12Bit
        } else if label.contains("10-bit") || label.contains("HDR") {
            Self::Hdr10Bit
        } else {
            Self::Sdr8Bit
        }
    }

    /// Deep color halves the per-port pixel budget.
    pub fn is_deep_color(self) -> bool {
        !matches!(self, Self::Sdr8Bit)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sdr8Bit => "SDR 8-bit",
            Self::Hdr10Bit => "HDR 10-bit",
            Self::Hdr12Bit => "HDR 12-bit",
        }
    }
}

// ---------------------------------------------------------------------------
// Video port
// ---------------------------------------------------------------------------

/// Physical connector carrying the source signal into the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoPort {
    Hdmi14,
    Hdmi20,
    Hdmi21,
    Dp12,
    Dp14,
    Sdi12g,
}

impl VideoPort {
    pub fn label(self) -> &'static str {
        match self {
            Self::Hdmi14 => "HDMI 1.4",
            Self::Hdmi20 => "HDMI 2.0",
            Self::Hdmi21 => "HDMI 2.1",
            Self::Dp12 => "DP 1.2",
            Self::Dp14 => "DP 1.4",
            Self::Sdi12g => "12G-SDI",
        }
    }
}

impl FromStr for VideoPort {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();
        match normalized.as_str() {
            "HDMI1.4" => Ok(Self::Hdmi14),
            "HDMI2.0" => Ok(Self::Hdmi20),
            "HDMI2.1" => Ok(Self::Hdmi21),
            "DP1.2" => Ok(Self::Dp12),
            "DP1.4" => Ok(Self::Dp14),
            "12G-SDI" | "12GSDI" => Ok(Self::Sdi12g),
            _ => Err(CoreError::Validation(format!(
                "Unknown video port: '{s}'. Valid values: HDMI 1.4, HDMI 2.0, HDMI 2.1, DP 1.2, DP 1.4, 12G-SDI"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
