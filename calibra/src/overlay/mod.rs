//! Overlay module
//!
//! Calibrated annotations, their style, and their binary form.

pub mod codec;
pub mod entity;
pub mod roi;
pub mod space;
pub mod style;
pub mod types;

pub use codec::Externalizable;
pub use entity::{DataHeader, DiscreteInterval, LifecycleState, Overlay, OverlayRecord};
pub use roi::RegionOfInterest;
pub use space::CalibratedSpace;
pub use style::{
    ArrowStyle, ColorRGB, LineStyle, OverlaySettings, SettingsProvider, Style, Symbolic,
};
pub use types::{AxisType, IntCoords, OverlayError, Result};
