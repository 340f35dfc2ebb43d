//! Overlay-related types and error definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when working with overlays
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("Dimension index {index} out of range for {dimensions} dimensions")]
    IndexOutOfRange { index: usize, dimensions: usize },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    #[error("Missing collaborator: no {0} attached")]
    MissingCollaborator(&'static str),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = OverlayError> = std::result::Result<T, E>;

/// Identifier for one dimension of a calibrated space
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisType {
    X,
    Y,
    Z,
    Time,
    Channel,
    Spectra,
    Lifetime,
    Frequency,
    Phase,
    Polarization,
    Unknown,
    /// Axis defined by the application rather than the built-in catalogue
    Custom(String),
}

impl AxisType {
    /// Display label, also accepted by `FromStr`
    pub fn label(&self) -> &str {
        match self {
            AxisType::X => "X",
            AxisType::Y => "Y",
            AxisType::Z => "Z",
            AxisType::Time => "Time",
            AxisType::Channel => "Channel",
            AxisType::Spectra => "Spectra",
            AxisType::Lifetime => "Lifetime",
            AxisType::Frequency => "Frequency",
            AxisType::Phase => "Phase",
            AxisType::Polarization => "Polarization",
            AxisType::Unknown => "Unknown",
            AxisType::Custom(label) => label,
        }
    }

    /// Whether this is one of the two planar axes
    pub fn is_xy(&self) -> bool {
        matches!(self, AxisType::X | AxisType::Y)
    }

    pub fn custom(label: impl Into<String>) -> Self {
        AxisType::Custom(label.into())
    }
}

impl fmt::Display for AxisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AxisType {
    type Err = std::convert::Infallible;

    /// Labels outside the catalogue become `Custom` axes.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let axis = match s {
            "X" => AxisType::X,
            "Y" => AxisType::Y,
            "Z" => AxisType::Z,
            "Time" => AxisType::Time,
            "Channel" => AxisType::Channel,
            "Spectra" => AxisType::Spectra,
            "Lifetime" => AxisType::Lifetime,
            "Frequency" => AxisType::Frequency,
            "Phase" => AxisType::Phase,
            "Polarization" => AxisType::Polarization,
            "Unknown" => AxisType::Unknown,
            other => AxisType::Custom(other.to_string()),
        };
        Ok(axis)
    }
}

/// Integer pixel coordinates on a display canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntCoords {
    pub x: i32,
    pub y: i32,
}

impl IntCoords {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
