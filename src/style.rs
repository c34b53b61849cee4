//! Colors and drawing-tool descriptions (pens, brushes, fonts).
//!
//! These are plain values: selecting a new pen or brush on a canvas replaces
//! (and drops) the previous one, so no handle ever outlives its selection.

use crate::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};

/// 24-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB`
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` or `rrggbb` (case-insensitive).
    pub fn from_hex(s: &str) -> ChartResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ChartError::InvalidColor(s.to_string()))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Microsoft Office (2013+) chart series palette.
/// Order: Blue, Orange, Gray, Gold, Light Blue, Green, Dark Blue, Dark Orange, Dark Gray, Brownish Gold.
pub const OFFICE10: [Color; 10] = [
    Color::rgb(68, 114, 196),  // blue      (#4472C4)
    Color::rgb(237, 125, 49),  // orange    (#ED7D31)
    Color::rgb(165, 165, 165), // gray      (#A5A5A5)
    Color::rgb(255, 192, 0),   // gold      (#FFC000)
    Color::rgb(91, 155, 213),  // light blue(#5B9BD5)
    Color::rgb(112, 173, 71),  // green     (#70AD47)
    Color::rgb(38, 68, 120),   // dark blue (#264478)
    Color::rgb(158, 72, 14),   // dark org. (#9E480E)
    Color::rgb(99, 99, 99),    // dark gray (#636363)
    Color::rgb(153, 115, 0),   // brownish  (#997300)
];

/// Default per-bar palette for charts.
pub fn office_palette() -> Vec<Color> {
    OFFICE10.to_vec()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PenStyle {
    /// Stroke centered on the geometry.
    Solid,
    /// Stroke kept inside the bounding rectangle of closed shapes.
    InsideFrame,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pen {
    pub style: PenStyle,
    pub width: u32,
    pub color: Color,
}

impl Pen {
    pub fn solid(color: Color) -> Self {
        Self {
            style: PenStyle::Solid,
            width: 1,
            color,
        }
    }

    pub fn inside_frame(color: Color) -> Self {
        Self {
            style: PenStyle::InsideFrame,
            width: 1,
            color,
        }
    }
}

impl Default for Pen {
    fn default() -> Self {
        Pen::solid(Color::BLACK)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hatch {
    /// `/` lines, bottom-left to top-right.
    BackDiagonal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Brush {
    /// Background shows through.
    Hollow,
    Solid(Color),
    Hatched { hatch: Hatch, color: Color },
}

impl Default for Brush {
    fn default() -> Self {
        Brush::Solid(Color::WHITE)
    }
}

/// Font used for every text element of a chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size_px: u32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size_px: u32) -> Self {
        Self {
            family: family.into(),
            size_px,
        }
    }
}

/// How bars are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BarStyle {
    /// Framed rectangle filled with a back-diagonal hatch.
    #[default]
    Hatched,
    /// Open outline: left, top and right edges only.
    Outline,
}

/// Per-render drawing style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub axis_color: Color,
    pub bar_style: BarStyle,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            axis_color: Color::BLACK,
            bar_style: BarStyle::Hatched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_accepts_both_forms() {
        assert_eq!(Color::from_hex("#FF0000").unwrap(), Color::RED);
        assert_eq!(Color::from_hex("00ff00").unwrap(), Color::GREEN);
        assert_eq!(Color::BLUE.to_hex(), "#0000FF");
    }

    #[test]
    fn hex_parsing_rejects_garbage() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("zzzzzz").is_err());
        assert!(Color::from_hex("#ÄÄÄ").is_err());
    }

    #[test]
    fn palette_starts_with_office_blue() {
        assert_eq!(office_palette()[0].to_hex(), "#4472C4");
        assert_eq!(office_palette().len(), 10);
    }
}
