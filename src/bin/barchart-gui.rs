/*!
 * GUI application for barchart-rs - draws the sample bar chart in a window
 *
 * The chart is rebuilt and redrawn from scratch on every repaint, through a
 * canvas that forwards the drawing calls to the egui painter of the central
 * panel.
 *
 * Platform support: Windows, macOS, Linux
 */

use std::convert::Infallible;

use barchart_rs::sample::{SampleSettings, sample_chart};
use barchart_rs::style::{Brush, FontSpec, Pen};
use barchart_rs::viz::text::clip_to_width;
use barchart_rs::viz::types::DEFAULT_FONT_PX;
use barchart_rs::viz::util::{HATCH_SPACING, hatch_segments};
use barchart_rs::viz::{self, Canvas, DeviceState, DluScale, HAlign, TextFormat, VAlign};
use barchart_rs::{BarStyle, ChartData, ChartStyle, Color, Point, Rect};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    // Enable logging for better debugging
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Bar Chart - barchart-rs"),
        ..Default::default()
    };

    eframe::run_native(
        "Bar Chart",
        options,
        Box::new(|_cc| Ok(Box::new(ChartApp::default()))),
    )
}

/// Main application state
struct ChartApp {
    legend_enabled: bool,
    outline_bars: bool,
    start: Point,
    /// Take the dialog base units from the UI font instead of `base_units`.
    font_base_units: bool,
    base_units: DluScale,
    error_message: String,
}

impl Default for ChartApp {
    fn default() -> Self {
        Self {
            legend_enabled: true,
            outline_bars: false,
            start: viz::types::DEFAULT_START,
            font_base_units: true,
            base_units: DluScale::default(),
            error_message: String::new(),
        }
    }
}

const LATIN_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Dialog base units of the proportional UI font.
fn font_dlu_scale(ctx: &egui::Context) -> DluScale {
    let font = egui::FontId::proportional(DEFAULT_FONT_PX as f32);
    let (total_width, row_height) = ctx.fonts(|fonts| {
        let width: f32 = LATIN_LETTERS
            .chars()
            .map(|c| fonts.glyph_width(&font, c))
            .sum();
        (width, fonts.row_height(&font))
    });
    DluScale::from_font_metrics(total_width / LATIN_LETTERS.len() as f32, row_height)
}

fn color32(c: Color) -> egui::Color32 {
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

/// Canvas over an egui painter; device coordinates are offsets from `origin`.
struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    state: DeviceState,
}

impl<'a> EguiCanvas<'a> {
    fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self {
            painter,
            origin,
            state: DeviceState::default(),
        }
    }

    fn pos(&self, p: Point) -> egui::Pos2 {
        self.origin + egui::vec2(p.x as f32, p.y as f32)
    }

    fn rect(&self, r: Rect) -> egui::Rect {
        egui::Rect::from_two_pos(
            self.pos(Point::new(r.left, r.top)),
            self.pos(Point::new(r.right, r.bottom)),
        )
    }

    fn stroke(&self) -> egui::Stroke {
        egui::Stroke::new(self.state.pen.width as f32, color32(self.state.pen.color))
    }
}

impl Canvas for EguiCanvas<'_> {
    type Error = Infallible;

    fn move_to(&mut self, p: Point) {
        self.state.position = p;
    }

    fn line_to(&mut self, p: Point) -> Result<(), Infallible> {
        let from = self.state.advance(p);
        self.painter.line_segment([self.pos(from), self.pos(p)], self.stroke());
        Ok(())
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

    fn rectangle(&mut self, rect: Rect) -> Result<(), Infallible> {
        let area = self.rect(rect);
        match self.state.brush {
            Brush::Hollow => {}
            Brush::Solid(color) => {
                self.painter.rect_filled(area, 0.0, color32(color));
            }
            Brush::Hatched { color, .. } => {
                let stroke = egui::Stroke::new(1.0, color32(color));
                for (from, to) in hatch_segments(rect, HATCH_SPACING) {
                    self.painter.line_segment([self.pos(from), self.pos(to)], stroke);
                }
            }
        }
        // Inside-frame: keep the 1px stroke within the rectangle.
        self.painter.rect_stroke(area.shrink(0.5), 0.0, self.stroke());
        Ok(())
    }

    fn polyline(&mut self, points: &[Point]) -> Result<(), Infallible> {
        let points: Vec<egui::Pos2> = points.iter().map(|p| self.pos(*p)).collect();
        self.painter.add(egui::Shape::line(points, self.stroke()));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, rect: Rect, format: TextFormat) -> Result<(), Infallible> {
        let font_px = self
            .state
            .font
            .as_ref()
            .map(|f| f.size_px)
            .unwrap_or(DEFAULT_FONT_PX);
        let clipped = clip_to_width(text, font_px, rect.width().max(0) as u32);
        let align = egui::Align2([
            match format.h {
                HAlign::Left => egui::Align::Min,
                HAlign::Center => egui::Align::Center,
                HAlign::Right => egui::Align::Max,
            },
            match format.v {
                VAlign::Top => egui::Align::Min,
                VAlign::Center => egui::Align::Center,
                VAlign::Bottom => egui::Align::Max,
            },
        ]);
        self.painter.with_clip_rect(self.rect(rect)).text(
            self.pos(format.anchor(rect)),
            align,
            clipped,
            egui::FontId::proportional(font_px as f32),
            egui::Color32::BLACK,
        );
        Ok(())
    }
}

impl ChartApp {
    /// Rebuild the sample chart; a failure is kept for the side panel until
    /// the next successful build.
    fn build_chart(&mut self) -> Option<ChartData> {
        let settings = SampleSettings {
            legend_enabled: self.legend_enabled,
            ..SampleSettings::default()
        };
        match sample_chart(settings) {
            Ok(chart) => {
                self.error_message.clear();
                Some(chart)
            }
            Err(err) => {
                self.error_message = format!("Chart error: {err}");
                None
            }
        }
    }

    fn chart_style(&self) -> ChartStyle {
        ChartStyle {
            bar_style: if self.outline_bars {
                BarStyle::Outline
            } else {
                BarStyle::Hatched
            },
            ..ChartStyle::default()
        }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.font_base_units {
            self.base_units = font_dlu_scale(ctx);
        }

        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Chart");
            ui.add_space(10.0);
            ui.checkbox(&mut self.legend_enabled, "Show legend");
            ui.checkbox(&mut self.outline_bars, "Outline bars");
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.label("Origin (DLU):");
                ui.add(egui::DragValue::new(&mut self.start.x).range(0..=400));
                ui.add(egui::DragValue::new(&mut self.start.y).range(0..=400));
            });
            ui.checkbox(&mut self.font_base_units, "Base units from UI font");
            ui.horizontal(|ui| {
                ui.label("Base units:");
                ui.add_enabled(
                    !self.font_base_units,
                    egui::DragValue::new(&mut self.base_units.base_x).range(1..=64),
                );
                ui.add_enabled(
                    !self.font_base_units,
                    egui::DragValue::new(&mut self.base_units.base_y).range(1..=64),
                );
            });
            if !self.error_message.is_empty() {
                ui.add_space(10.0);
                ui.colored_label(egui::Color32::RED, &self.error_message);
            }
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                let Some(chart) = self.build_chart() else {
                    return;
                };
                let style = self.chart_style();

                let painter = ui.painter();
                let mut canvas = EguiCanvas::new(painter, ui.max_rect().min);
                let Ok(()) = viz::draw_bar_chart(
                    &mut canvas,
                    self.start,
                    &chart,
                    &style,
                    self.base_units,
                );
            });
    }
}
