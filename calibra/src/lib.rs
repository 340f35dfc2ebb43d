//! Calibra Library
//!
//! Calibrated spatial annotations for image displays, plus the small display
//! utilities that drive them: menu traversal and keyboard zoom.

pub mod config;
pub mod event;
pub mod menu;
pub mod overlay;
pub mod tool;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use event::{EventSink, OverlayEvent, OverlayEventKind};
pub use overlay::{
    AxisType, CalibratedSpace, DiscreteInterval, Overlay, OverlayError, OverlaySettings,
    RegionOfInterest, Style,
};
