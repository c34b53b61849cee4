//! Visualization: lay out a [`ChartData`] and draw it onto a [`Canvas`],
//! or render it to **SVG** / **PNG** through Plotters.
//!
//! - All geometry is computed in dialog units and converted to pixels with a [`DluScale`]
//! - Bars are hatched rectangles or open outlines ([`BarStyle`](crate::style::BarStyle))
//! - Value labels above bars, unit labels below the X axis, optional legend

pub mod canvas;
pub mod legend;
pub mod text;
pub mod types;
pub mod util;

pub use canvas::{Canvas, DeviceState, DrawCommand, RecordingCanvas};
pub use types::{HAlign, RenderOptions, TextFormat, VAlign};
pub use util::{DluScale, mul_div};

use crate::chart::ChartData;
use crate::models::{Point, Rect};
use crate::style::{BarStyle, Brush, ChartStyle, Hatch, Pen};
use crate::viz_plotters_adapter::{PlottersCanvas, TextMode};
use anyhow::{Context, Result, anyhow};
use log::{debug, warn};

use plotters::coord::Shift;
use plotters::prelude::{DrawingArea, DrawingBackend, IntoDrawingArea, WHITE};
use plotters::style::FontStyle;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::OnceLock;

/// Axis-name boxes extend this far from the axis end, pixels.
const AXIS_NAME_EXTENT_PX: i32 = 100;
/// Labels under the X axis start this far below it, pixels.
const BELOW_AXIS_TOP_PX: i32 = 5;
const BELOW_AXIS_BOTTOM_PX: i32 = 30;
/// Height of the value label box above a bar, pixels.
const VALUE_LABEL_HEIGHT_PX: i32 = 20;

/// Pixel geometry of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarGeometry {
    pub rect: Rect,
    pub value: i32,
    pub index: usize,
}

/// Chart-space left edge of bar `index` in a group of `count` bars centered
/// on `center`: `center + bar_width * (index - count / 2)`, truncated toward
/// zero.
pub fn bar_offset_x(center: i32, bar_width: i32, index: usize, count: usize) -> i32 {
    let j = index as f64 - count as f64 / 2.0;
    (center as f64 + bar_width as f64 * j) as i32
}

/// Pixel rectangles of every bar of unit `unit_index`.
pub fn unit_bar_geometry(
    chart: &ChartData,
    unit_index: usize,
    start_px: Point,
    scale: DluScale,
) -> Vec<BarGeometry> {
    let unit = chart.unit(unit_index);
    let values = unit.bar_values();
    let center = unit.x_position() / chart.x_unit();
    let bar_px = scale.to_px_x(chart.bar_width());

    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let x = bar_offset_x(center, chart.bar_width(), index, values.len());
            let left = start_px.x.saturating_add(scale.to_px_x(x));
            let top = start_px.y.saturating_sub(scale.to_px_y(value / chart.y_unit()));
            BarGeometry {
                rect: Rect::new(left, top, left.saturating_add(bar_px), start_px.y),
                value,
                index,
            }
        })
        .collect()
}

/// Draw `chart` with its axis origin at `start` (dialog units).
///
/// Emits, in order: both axes, the axis names, every unit's bars with their
/// value labels and the unit label, then the legend when enabled.
pub fn draw_bar_chart<C: Canvas>(
    canvas: &mut C,
    start: Point,
    chart: &ChartData,
    style: &ChartStyle,
    scale: DluScale,
) -> Result<(), C::Error> {
    let s = scale.to_px(start);
    let x_end = s.x.saturating_add(scale.to_px_x(chart.x_axis_length()));
    let y_end = s.y.saturating_sub(scale.to_px_y(chart.y_axis_length()));

    canvas.move_to(s);
    canvas.select_pen(Pen::solid(style.axis_color));
    canvas.line_to(Point::new(x_end, s.y))?;
    canvas.move_to(s);
    canvas.line_to(Point::new(s.x, y_end))?;

    if let Some(font) = chart.axis_font() {
        canvas.select_font(font);
    }

    canvas.draw_text(
        chart.x_axis_name(),
        Rect::new(
            x_end.saturating_sub(AXIS_NAME_EXTENT_PX),
            s.y.saturating_add(BELOW_AXIS_TOP_PX),
            x_end,
            s.y.saturating_add(BELOW_AXIS_BOTTOM_PX),
        ),
        TextFormat::new(HAlign::Right, VAlign::Top),
    )?;
    canvas.draw_text(
        chart.y_axis_name(),
        Rect::new(
            s.x.saturating_sub(AXIS_NAME_EXTENT_PX),
            y_end,
            s.x.saturating_sub(5),
            y_end.saturating_add(20),
        ),
        TextFormat::new(HAlign::Right, VAlign::Center),
    )?;

    let centered = TextFormat::new(HAlign::Center, VAlign::Center);
    for unit_index in 0..chart.unit_count() {
        let unit = chart.unit(unit_index);
        for bar in unit_bar_geometry(chart, unit_index, s, scale) {
            let color = chart.resolve_bar_color(unit, bar.index);
            canvas.select_pen(Pen::inside_frame(color));
            match style.bar_style {
                BarStyle::Hatched => {
                    canvas.select_brush(Brush::Hatched {
                        hatch: Hatch::BackDiagonal,
                        color,
                    });
                    canvas.rectangle(bar.rect)?;
                }
                BarStyle::Outline => {
                    let r = bar.rect;
                    canvas.polyline(&[
                        Point::new(r.left, r.bottom),
                        Point::new(r.left, r.top),
                        Point::new(r.right, r.top),
                        Point::new(r.right, r.bottom),
                    ])?;
                }
            }

            canvas.draw_text(
                &bar.value.to_string(),
                Rect::new(
                    bar.rect.left.saturating_add(1),
                    bar.rect.top.saturating_sub(VALUE_LABEL_HEIGHT_PX),
                    bar.rect.right,
                    bar.rect.top,
                ),
                centered,
            )?;
        }

        let center = unit.x_position() / chart.x_unit();
        canvas.draw_text(
            unit.label(),
            Rect::new(
                s.x.saturating_add(scale.to_px_x(center.saturating_sub(chart.bar_width()))),
                s.y.saturating_add(BELOW_AXIS_TOP_PX),
                s.x.saturating_add(scale.to_px_x(center.saturating_add(chart.bar_width()))),
                s.y.saturating_add(BELOW_AXIS_BOTTOM_PX),
            ),
            centered,
        )?;
    }

    if chart.is_legend_enabled() {
        legend::draw_legend(canvas, chart, s, scale)?;
    }
    Ok(())
}

/// Draw `chart` into a display list.
pub fn record_chart(chart: &ChartData, options: &RenderOptions) -> RecordingCanvas {
    let mut canvas = RecordingCanvas::new();
    let Ok(()) = draw_bar_chart(&mut canvas, options.start, chart, &options.style, options.scale);
    canvas
}

static SANS_SERIF: OnceLock<bool> = OnceLock::new();

/// Candidate system fonts for bitmap text when no font file is given.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Register a TrueType font as "sans-serif" for bitmap output.
///
/// Required because `ab_glyph` doesn't discover OS fonts. The first call
/// decides (later calls return the cached outcome); returns whether a font
/// is available.
pub fn register_sans_serif(font_file: Option<&Path>) -> bool {
    *SANS_SERIF.get_or_init(|| {
        let candidates: Vec<&Path> = match font_file {
            Some(p) => vec![p],
            None => SYSTEM_FONT_CANDIDATES.iter().map(Path::new).collect(),
        };
        for path in candidates {
            let Ok(bytes) = std::fs::read(path) else {
                continue;
            };
            // Plotters keeps registered fonts for the life of the process.
            let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
            if plotters::style::register_font("sans-serif", FontStyle::Normal, bytes).is_ok() {
                debug!("registered sans-serif font from {}", path.display());
                return true;
            }
        }
        false
    })
}

/// Render `chart` to an SVG or PNG file (chosen by extension; anything but
/// `.svg` is written as a bitmap).
pub fn render_to_file<P: AsRef<Path>>(
    chart: &ChartData,
    out_path: P,
    options: &RenderOptions,
) -> Result<()> {
    let out_path = out_path.as_ref();
    if options.width == 0 || options.height == 0 {
        return Err(anyhow!(
            "invalid canvas size {}x{}",
            options.width,
            options.height
        ));
    }
    let display_list = record_chart(chart, options);
    let path_string = out_path.to_string_lossy().into_owned();
    let size = (options.width, options.height);

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), size).into_drawing_area();
        paint(&root, &display_list, TextMode::Named)?;
    } else {
        let text_mode = if register_sans_serif(None) {
            TextMode::SansSerif
        } else {
            warn!("no font available for bitmap output; chart text is skipped");
            TextMode::Skip
        };
        let root = BitMapBackend::new(path_string.as_str(), size).into_drawing_area();
        paint(&root, &display_list, text_mode)?;
    }
    debug!("wrote chart to {}", out_path.display());
    Ok(())
}

fn paint<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    display_list: &RecordingCanvas,
    text_mode: TextMode,
) -> Result<()> {
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;
    let mut canvas = PlottersCanvas::new(root, text_mode);
    display_list
        .replay(&mut canvas)
        .context("drawing chart")?;
    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
