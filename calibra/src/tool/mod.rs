//! Display tools driven by input events

pub mod zoom;

pub use zoom::{KeyCode, KeyPressed, ZoomCanvas, ZoomHandler};
