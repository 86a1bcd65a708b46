//! Style records for the header and the content area.
//!
//! Styles are plain values. A renderer maps them onto whatever its toolkit
//! uses for fills and strokes; applying a new style always replaces the
//! previous one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::StyleColor;
use crate::error::{PaneError, PaneResult};

/// Border line style for the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    /// No border is drawn regardless of width.
    #[default]
    None,
    Solid,
    Dashed,
    Dotted,
}

impl BorderStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderStyle::None => "none",
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BorderStyle {
    type Err = PaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(BorderStyle::None),
            "solid" => Ok(BorderStyle::Solid),
            "dashed" => Ok(BorderStyle::Dashed),
            "dotted" => Ok(BorderStyle::Dotted),
            _ => Err(PaneError::InvalidBorderStyle(s.to_string())),
        }
    }
}

/// Visual style of the toggle header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderStyle {
    pub background: StyleColor,
    pub foreground: StyleColor,
    /// Inner padding around the title, in points.
    pub padding: f32,
    pub bold: bool,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            background: StyleColor::rgb(0x44, 0x44, 0x44),
            foreground: StyleColor::rgb(0xEE, 0xEE, 0xEE),
            padding: 6.0,
            bold: true,
        }
    }
}

impl HeaderStyle {
    /// Header style with the given colors and default padding.
    pub fn new(background: StyleColor, foreground: StyleColor) -> Self {
        Self {
            background,
            foreground,
            ..Default::default()
        }
    }
}

/// Visual style of the content area surrounding the viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentAreaStyle {
    pub background: StyleColor,
    pub border_color: StyleColor,
    pub border_width: f32,
    pub border_style: BorderStyle,
    pub corner_radius: u8,
}

impl Default for ContentAreaStyle {
    fn default() -> Self {
        Self {
            background: StyleColor::transparent(),
            border_color: StyleColor::transparent(),
            border_width: 0.0,
            border_style: BorderStyle::None,
            corner_radius: 0,
        }
    }
}

impl ContentAreaStyle {
    /// The boxed look hosts usually ask for: white, light gray solid border.
    pub fn boxed() -> Self {
        Self {
            background: StyleColor::white(),
            border_color: StyleColor::rgb(0xCC, 0xCC, 0xCC),
            border_width: 1.0,
            border_style: BorderStyle::Solid,
            corner_radius: 4,
        }
    }

    /// Width of the visible border, zero when no border is drawn.
    pub fn effective_border_width(&self) -> f32 {
        if self.border_style == BorderStyle::None || self.border_color.is_transparent() {
            0.0
        } else {
            self.border_width
        }
    }
}

/// Build a header style from hex background and foreground colors.
pub fn header_style(background: &str, foreground: &str) -> PaneResult<HeaderStyle> {
    Ok(HeaderStyle::new(
        StyleColor::parse_hex(background)?,
        StyleColor::parse_hex(foreground)?,
    ))
}

/// Build a content area style from hex colors and border parameters.
pub fn content_area_style(
    background: &str,
    border_color: &str,
    border_width: f32,
    border_style: BorderStyle,
) -> PaneResult<ContentAreaStyle> {
    if !border_width.is_finite() || border_width < 0.0 {
        return Err(PaneError::InvalidBorderWidth(border_width));
    }

    Ok(ContentAreaStyle {
        background: StyleColor::parse_hex(background)?,
        border_color: StyleColor::parse_hex(border_color)?,
        border_width,
        border_style,
        corner_radius: ContentAreaStyle::boxed().corner_radius,
    })
}
