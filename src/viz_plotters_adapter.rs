//! Canvas backed by a Plotters drawing area (SVG or bitmap).
//!
//! Usage example:
//! ```ignore
//!     use plotters::prelude::*;
//!     use barchart_rs::viz::{self, RenderOptions};
//!     use barchart_rs::viz_plotters_adapter::{PlottersCanvas, TextMode};
//!
//!     let root = SVGBackend::new("chart.svg", (800, 600)).into_drawing_area();
//!     root.fill(&WHITE)?;
//!     let mut canvas = PlottersCanvas::new(&root, TextMode::Named);
//!     viz::draw_bar_chart(&mut canvas, start, &chart, &style, scale)?;
//!     root.present()?;
//! ```

use plotters::coord::Shift;
use plotters::prelude::{
    DrawingArea, DrawingBackend, PathElement, RGBColor, Rectangle, ShapeStyle, Text,
};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color as _, FontFamily, TextStyle};

use crate::error::{ChartError, ChartResult};
use crate::models::{Point, Rect};
use crate::style::{Brush, Color, FontSpec, Pen};
use crate::viz::canvas::{Canvas, DeviceState};
use crate::viz::text::clip_to_width;
use crate::viz::types::{DEFAULT_FONT_PX, HAlign, TextFormat, VAlign};
use crate::viz::util::{HATCH_SPACING, hatch_segments};

/// Text is always drawn in black.
const TEXT_COLOR: Color = Color::BLACK;

/// How text elements are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    /// Keep the selected font family name (SVG viewers resolve it).
    Named,
    /// Use the registered "sans-serif" font (bitmap output).
    SansSerif,
    /// Draw no text (bitmap output without any usable font).
    Skip,
}

pub fn rgb_color(color: Color) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

/// Stroke style for a pen.
pub fn pen_style(pen: &Pen) -> ShapeStyle {
    rgb_color(pen.color).stroke_width(pen.width)
}

/// Filled style for solid brushes.
pub fn fill_style(color: Color) -> ShapeStyle {
    rgb_color(color).filled()
}

fn render_err<E: std::fmt::Debug>(e: E) -> ChartError {
    ChartError::Render(format!("{e:?}"))
}

fn to_coord(p: Point) -> (i32, i32) {
    (p.x, p.y)
}

pub struct PlottersCanvas<'a, DB: DrawingBackend> {
    area: &'a DrawingArea<DB, Shift>,
    state: DeviceState,
    text_mode: TextMode,
}

impl<'a, DB: DrawingBackend> PlottersCanvas<'a, DB> {
    pub fn new(area: &'a DrawingArea<DB, Shift>, text_mode: TextMode) -> Self {
        Self {
            area,
            state: DeviceState::default(),
            text_mode,
        }
    }

    fn font_px(&self) -> u32 {
        self.state
            .font
            .as_ref()
            .map(|f| f.size_px)
            .unwrap_or(DEFAULT_FONT_PX)
    }
}

impl<DB: DrawingBackend> Canvas for PlottersCanvas<'_, DB> {
    type Error = ChartError;

    fn move_to(&mut self, p: Point) {
        self.state.position = p;
    }

    fn line_to(&mut self, p: Point) -> ChartResult<()> {
        let from = self.state.advance(p);
        self.area
            .draw(&PathElement::new(
                vec![to_coord(from), to_coord(p)],
                pen_style(&self.state.pen),
            ))
            .map_err(render_err)
    }

    fn select_pen(&mut self, pen: Pen) -> Pen {
        std::mem::replace(&mut self.state.pen, pen)
    }

    fn select_brush(&mut self, brush: Brush) -> Brush {
        std::mem::replace(&mut self.state.brush, brush)
    }

    fn select_font(&mut self, font: &FontSpec) {
        self.state.font = Some(font.clone());
    }

    fn rectangle(&mut self, rect: Rect) -> ChartResult<()> {
        let (l, r) = (rect.left.min(rect.right), rect.left.max(rect.right) - 1);
        let (t, b) = (rect.top.min(rect.bottom), rect.top.max(rect.bottom) - 1);
        if r < l || b < t {
            return Ok(());
        }

        match self.state.brush {
            Brush::Hollow => {}
            Brush::Solid(color) => {
                self.area
                    .draw(&Rectangle::new([(l, t), (r, b)], fill_style(color)))
                    .map_err(render_err)?;
            }
            Brush::Hatched { color, .. } => {
                let stroke = rgb_color(color).stroke_width(1);
                for (from, to) in hatch_segments(rect, HATCH_SPACING) {
                    self.area
                        .draw(&PathElement::new(vec![to_coord(from), to_coord(to)], stroke))
                        .map_err(render_err)?;
                }
            }
        }

        self.area
            .draw(&Rectangle::new([(l, t), (r, b)], pen_style(&self.state.pen)))
            .map_err(render_err)
    }

    fn polyline(&mut self, points: &[Point]) -> ChartResult<()> {
        if points.len() < 2 {
            return Ok(());
        }
        self.area
            .draw(&PathElement::new(
                points.iter().copied().map(to_coord).collect::<Vec<_>>(),
                pen_style(&self.state.pen),
            ))
            .map_err(render_err)
    }

    fn draw_text(&mut self, text: &str, rect: Rect, format: TextFormat) -> ChartResult<()> {
        if self.text_mode == TextMode::Skip {
            return Ok(());
        }
        let font_px = self.font_px();
        let clipped = clip_to_width(text, font_px, rect.width().max(0) as u32);
        if clipped.is_empty() {
            return Ok(());
        }

        let family = match (self.text_mode, self.state.font.as_ref()) {
            (TextMode::Named, Some(font)) => FontFamily::Name(font.family.as_str()),
            _ => FontFamily::SansSerif,
        };
        let h = match format.h {
            HAlign::Left => HPos::Left,
            HAlign::Center => HPos::Center,
            HAlign::Right => HPos::Right,
        };
        let v = match format.v {
            VAlign::Top => VPos::Top,
            VAlign::Center => VPos::Center,
            VAlign::Bottom => VPos::Bottom,
        };
        let color = rgb_color(TEXT_COLOR);
        let style = TextStyle::from((family, f64::from(font_px)))
            .color(&color)
            .pos(Pos::new(h, v));
        let anchor = format.anchor(rect);
        self.area
            .draw(&Text::new(clipped, to_coord(anchor), style))
            .map_err(render_err)
    }
}
