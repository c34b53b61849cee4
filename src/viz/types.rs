//! Public types and constants for the visualization module.

use crate::models::{Point, Rect};
use crate::style::ChartStyle;
use serde::{Deserialize, Serialize};

use super::util::DluScale;

/// Horizontal text alignment inside a text rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment inside a text rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Single-line text placement; text is clipped to its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFormat {
    pub h: HAlign,
    pub v: VAlign,
}

impl TextFormat {
    pub const fn new(h: HAlign, v: VAlign) -> Self {
        Self { h, v }
    }

    /// Anchor point inside `rect` that matches this alignment.
    pub fn anchor(&self, rect: Rect) -> Point {
        let x = match self.h {
            HAlign::Left => rect.left,
            HAlign::Center => rect.center().x,
            HAlign::Right => rect.right,
        };
        let y = match self.v {
            VAlign::Top => rect.top,
            VAlign::Center => rect.center().y,
            VAlign::Bottom => rect.bottom,
        };
        Point::new(x, y)
    }
}

/// Default canvas size for file output.
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Chart start point (dialog units) used by the sample window.
pub const DEFAULT_START: Point = Point::new(30, 250);

/// Font size used when the chart has no font of its own.
pub const DEFAULT_FONT_PX: u32 = 14;

/// Everything a render needs besides the chart itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Axis origin in dialog units.
    pub start: Point,
    pub scale: DluScale,
    pub style: ChartStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            start: DEFAULT_START,
            scale: DluScale::default(),
            style: ChartStyle::default(),
        }
    }
}
