//! Utility functions for visualization: dialog-unit conversion and hatch geometry.

use crate::models::{Point, Rect};

/// Spacing of hatch lines in device pixels.
pub const HATCH_SPACING: i32 = 8;

/// `number * numerator / denominator` with a 64-bit intermediate, rounded to
/// nearest (halves away from zero). Returns `-1` when `denominator` is zero or
/// the result does not fit in `i32`.
pub fn mul_div(number: i32, numerator: i32, denominator: i32) -> i32 {
    if denominator == 0 {
        return -1;
    }
    let product = number as i64 * numerator as i64;
    let d = (denominator as i64).abs();
    let magnitude = (product.abs() + d / 2) / d;
    let negative = (product < 0) != (denominator < 0);
    let result = if negative { -magnitude } else { magnitude };
    i32::try_from(result).unwrap_or(-1)
}

/// Dialog base units: average character width and height of the system font.
///
/// One horizontal dialog unit is `base_x / 4` pixels, one vertical dialog
/// unit is `base_y / 8` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DluScale {
    pub base_x: i32,
    pub base_y: i32,
}

impl Default for DluScale {
    fn default() -> Self {
        Self {
            base_x: 8,
            base_y: 16,
        }
    }
}

impl DluScale {
    pub const fn new(base_x: i32, base_y: i32) -> Self {
        Self { base_x, base_y }
    }

    /// Split the packed system metric: low word is X, high word is Y.
    pub fn from_packed(units: u32) -> Self {
        Self {
            base_x: (units & 0xFFFF) as i32,
            base_y: (units >> 16) as i32,
        }
    }

    /// Base units from font metrics: the average width of the 52 Latin
    /// letters and the line height, both in pixels. Rounded, at least 1.
    pub fn from_font_metrics(avg_char_width: f32, char_height: f32) -> Self {
        let round = |v: f32| {
            if v.is_finite() {
                (v.round() as i32).max(1)
            } else {
                1
            }
        };
        Self {
            base_x: round(avg_char_width),
            base_y: round(char_height),
        }
    }

    pub fn to_px_x(&self, dlu: i32) -> i32 {
        mul_div(dlu, self.base_x, 4)
    }

    pub fn to_px_y(&self, dlu: i32) -> i32 {
        mul_div(dlu, self.base_y, 8)
    }

    pub fn to_px(&self, p: Point) -> Point {
        Point::new(self.to_px_x(p.x), self.to_px_y(p.y))
    }
}

/// Back-diagonal (`/`) hatch lines covering the interior of `rect`
/// (right and bottom edges excluded), one every `spacing` pixels on the
/// `x + y` diagonal.
pub fn hatch_segments(rect: Rect, spacing: i32) -> Vec<(Point, Point)> {
    let (l, r) = (rect.left.min(rect.right), rect.left.max(rect.right) - 1);
    let (t, b) = (rect.top.min(rect.bottom), rect.top.max(rect.bottom) - 1);
    if r < l || b < t || spacing <= 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    let first = (l + t).div_euclid(spacing) * spacing;
    let mut c = if first < l + t { first + spacing } else { first };
    while c <= r + b {
        let x0 = l.max(c - b);
        let x1 = r.min(c - t);
        if x0 <= x1 {
            out.push((Point::new(x0, c - x0), Point::new(x1, c - x1)));
        }
        c += spacing;
    }
    out
}
