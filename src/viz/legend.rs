//! Legend layout and drawing: one swatch + label per legend entry, stacked
//! downwards from the legend origin.

use crate::chart::ChartData;
use crate::models::{LegendEntry, Point, Rect};
use crate::style::{Brush, Hatch, Pen};

use super::canvas::Canvas;
use super::types::{HAlign, TextFormat, VAlign};
use super::util::DluScale;

/// Gap between swatch and label, pixels.
const LABEL_GAP_PX: i32 = 20;
/// Right edge of the label box, measured from the swatch's right edge.
const LABEL_EXTENT_PX: i32 = 128;
const LABEL_HEIGHT_PX: i32 = 20;

const LABEL_FORMAT: TextFormat = TextFormat::new(HAlign::Left, VAlign::Center);

/// Pixel position of the legend origin for a chart drawn at `start_px`.
pub fn legend_origin_px(chart: &ChartData, start_px: Point, scale: DluScale) -> Point {
    let origin = chart.legend_origin();
    Point::new(
        start_px.x.saturating_add(scale.to_px_x(origin.x)),
        start_px.y.saturating_sub(scale.to_px_y(origin.y)),
    )
}

/// Swatch and label rectangles of legend row `row`.
pub fn legend_row_rects(
    origin_px: Point,
    bar_width: i32,
    row: usize,
    scale: DluScale,
) -> (Rect, Rect) {
    let sample = bar_width / 2;
    let row = i32::try_from(row).unwrap_or(i32::MAX);
    let top = origin_px
        .y
        .saturating_add(row.saturating_mul(scale.to_px_y(sample * 2)));
    let swatch = Rect::new(
        origin_px.x,
        top,
        origin_px.x.saturating_add(scale.to_px_x(sample)),
        top.saturating_add(scale.to_px_y(sample)),
    );
    let label = Rect::new(
        swatch.right.saturating_add(LABEL_GAP_PX),
        swatch.top,
        swatch.right.saturating_add(LABEL_EXTENT_PX),
        swatch.top.saturating_add(LABEL_HEIGHT_PX),
    );
    (swatch, label)
}

/// Draw the legend entries of `chart`. Callers check `is_legend_enabled`.
pub fn draw_legend<C: Canvas>(
    canvas: &mut C,
    chart: &ChartData,
    start_px: Point,
    scale: DluScale,
) -> Result<(), C::Error> {
    let origin = legend_origin_px(chart, start_px, scale);
    for (row, LegendEntry { color, label }) in chart.legend_entries().into_iter().enumerate() {
        canvas.select_pen(Pen::inside_frame(color));
        canvas.select_brush(Brush::Hatched {
            hatch: Hatch::BackDiagonal,
            color,
        });

        let (swatch, label_rect) = legend_row_rects(origin, chart.bar_width(), row, scale);
        canvas.rectangle(swatch)?;
        canvas.draw_text(&label, label_rect, LABEL_FORMAT)?;
    }
    Ok(())
}
