//! Configuration
//!
//! Configuration is loaded from environment variables on top of the built-in
//! defaults. Unparseable values are logged and ignored.

use std::env;
use std::str::FromStr;
use tracing::warn;

use crate::overlay::{ArrowStyle, ColorRGB, LineStyle, OverlaySettings};

/// Default log filter when neither `CALIBRA_LOG` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "calibra=info";

/// Main configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing` filter directive
    pub log_filter: String,

    /// Style applied to new overlays
    pub settings: OverlaySettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            settings: OverlaySettings::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup("CALIBRA_LOG").or_else(|| lookup("RUST_LOG"))
            && !filter.is_empty()
        {
            config.log_filter = filter;
        }

        let settings = &mut config.settings;
        if let Some(alpha) = parsed::<i32>(&lookup, "OVERLAY_ALPHA") {
            settings.alpha = alpha;
        }
        if let Some(width) = parsed::<f64>(&lookup, "OVERLAY_LINE_WIDTH") {
            settings.line_width = width;
        }
        if let Some(color) = color(&lookup, "OVERLAY_FILL_COLOR") {
            settings.fill_color = color;
        }
        if let Some(color) = color(&lookup, "OVERLAY_LINE_COLOR") {
            settings.line_color = color;
        }
        if let Some(style) = parsed::<LineStyle>(&lookup, "OVERLAY_LINE_STYLE") {
            settings.line_style = style;
        }
        if let Some(style) = parsed::<ArrowStyle>(&lookup, "OVERLAY_START_ARROW") {
            settings.start_arrow_style = style;
        }
        if let Some(style) = parsed::<ArrowStyle>(&lookup, "OVERLAY_END_ARROW") {
            settings.end_arrow_style = style;
        }

        config
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid {}={:?}", key, raw);
            None
        }
    }
}

fn color(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<ColorRGB> {
    let raw = lookup(key)?;
    match ColorRGB::from_html(raw.trim()) {
        Ok(color) => Some(color),
        Err(e) => {
            warn!("Ignoring {}: {}", key, e);
            None
        }
    }
}
