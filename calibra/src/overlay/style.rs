//! Visual style of an overlay and the settings it is initialised from
//!
//! Line and arrow styles are stored by symbolic name wherever they leave the
//! process (binary codec, JSON, environment). Each enum owns an explicit
//! symbol table; nothing depends on declaration order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::types::OverlayError;

/// Opaque 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorRGB {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ColorRGB {
    pub const BLACK: ColorRGB = ColorRGB::new(0, 0, 0);
    pub const WHITE: ColorRGB = ColorRGB::new(255, 255, 255);
    pub const YELLOW: ColorRGB = ColorRGB::new(255, 255, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse an HTML colour literal of the form `#rrggbb`
    pub fn from_html(html: &str) -> Result<Self, OverlayError> {
        let hex = html
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(|| OverlayError::InvalidFormat(format!("Bad colour literal: {html}")))?;
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| OverlayError::InvalidFormat(format!("Bad colour literal: {html}")))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_html(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for ColorRGB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl TryFrom<String> for ColorRGB {
    type Error = OverlayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_html(&value)
    }
}

impl From<ColorRGB> for String {
    fn from(color: ColorRGB) -> Self {
        color.to_html()
    }
}

/// Stroke pattern of an overlay outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineStyle {
    Solid,
    Dash,
    Dot,
    DotDash,
    None,
}

const LINE_STYLE_SYMBOLS: &[(&str, LineStyle)] = &[
    ("SOLID", LineStyle::Solid),
    ("DASH", LineStyle::Dash),
    ("DOT", LineStyle::Dot),
    ("DOT_DASH", LineStyle::DotDash),
    ("NONE", LineStyle::None),
];

/// Decoration drawn at one end of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArrowStyle {
    None,
    Arrow,
}

const ARROW_STYLE_SYMBOLS: &[(&str, ArrowStyle)] =
    &[("NONE", ArrowStyle::None), ("ARROW", ArrowStyle::Arrow)];

/// Name <-> variant lookup shared by the style enums
pub trait Symbolic: Sized + Copy + PartialEq + 'static {
    const SYMBOLS: &'static [(&'static str, Self)];
    /// Used in error messages
    const KIND: &'static str;

    /// Symbolic name used on the wire
    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::SYMBOLS
            .iter()
            .find(|(symbol, _)| *symbol == name)
            .map(|(_, value)| *value)
    }

    fn parse_name(name: &str) -> Result<Self, OverlayError> {
        Self::from_name(name)
            .ok_or_else(|| OverlayError::InvalidFormat(format!("Unknown {}: {name}", Self::KIND)))
    }
}

impl Symbolic for LineStyle {
    const SYMBOLS: &'static [(&'static str, Self)] = LINE_STYLE_SYMBOLS;
    const KIND: &'static str = "line style";

    fn name(self) -> &'static str {
        match self {
            LineStyle::Solid => "SOLID",
            LineStyle::Dash => "DASH",
            LineStyle::Dot => "DOT",
            LineStyle::DotDash => "DOT_DASH",
            LineStyle::None => "NONE",
        }
    }
}

impl Symbolic for ArrowStyle {
    const SYMBOLS: &'static [(&'static str, Self)] = ARROW_STYLE_SYMBOLS;
    const KIND: &'static str = "arrow style";

    fn name(self) -> &'static str {
        match self {
            ArrowStyle::None => "NONE",
            ArrowStyle::Arrow => "ARROW",
        }
    }
}

impl FromStr for LineStyle {
    type Err = OverlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_name(s)
    }
}

impl FromStr for ArrowStyle {
    type Err = OverlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_name(s)
    }
}

/// Source of the initial style for new overlays. Read once, at construction.
pub trait SettingsProvider {
    fn alpha(&self) -> i32;
    fn fill_color(&self) -> ColorRGB;
    fn line_color(&self) -> ColorRGB;
    fn line_width(&self) -> f64;
    fn line_style(&self) -> LineStyle;
    fn start_arrow_style(&self) -> ArrowStyle;
    fn end_arrow_style(&self) -> ArrowStyle;
}

/// Default overlay settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    pub alpha: i32,
    pub fill_color: ColorRGB,
    pub line_color: ColorRGB,
    pub line_width: f64,
    pub line_style: LineStyle,
    pub start_arrow_style: ArrowStyle,
    pub end_arrow_style: ArrowStyle,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            alpha: 0,
            fill_color: ColorRGB::YELLOW,
            line_color: ColorRGB::YELLOW,
            line_width: 1.0,
            line_style: LineStyle::Solid,
            start_arrow_style: ArrowStyle::None,
            end_arrow_style: ArrowStyle::None,
        }
    }
}

impl SettingsProvider for OverlaySettings {
    fn alpha(&self) -> i32 {
        self.alpha
    }

    fn fill_color(&self) -> ColorRGB {
        self.fill_color
    }

    fn line_color(&self) -> ColorRGB {
        self.line_color
    }

    fn line_width(&self) -> f64 {
        self.line_width
    }

    fn line_style(&self) -> LineStyle {
        self.line_style
    }

    fn start_arrow_style(&self) -> ArrowStyle {
        self.start_arrow_style
    }

    fn end_arrow_style(&self) -> ArrowStyle {
        self.end_arrow_style
    }
}

/// Visual attributes of an overlay.
///
/// Plain storage: no field is validated, so a negative line width or an
/// out-of-range alpha is kept as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub alpha: i32,
    pub fill_color: ColorRGB,
    pub line_color: ColorRGB,
    pub line_width: f64,
    pub line_style: LineStyle,
    pub start_arrow_style: ArrowStyle,
    pub end_arrow_style: ArrowStyle,
}

impl Style {
    pub fn from_settings(settings: &dyn SettingsProvider) -> Self {
        Self {
            alpha: settings.alpha(),
            fill_color: settings.fill_color(),
            line_color: settings.line_color(),
            line_width: settings.line_width(),
            line_style: settings.line_style(),
            start_arrow_style: settings.start_arrow_style(),
            end_arrow_style: settings.end_arrow_style(),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::from_settings(&OverlaySettings::default())
    }
}
