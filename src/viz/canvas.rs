//! Device-context style drawing surface.
//!
//! A [`Canvas`] keeps a current position, pen, brush and font, like a GDI
//! device context. [`RecordingCanvas`] captures the calls as a display list
//! that can be inspected, serialized, or replayed onto another canvas.

use std::convert::Infallible;

use serde::Serialize;

use crate::models::{Point, Rect};
use crate::style::{Brush, FontSpec, Pen};

use super::types::TextFormat;

pub trait Canvas {
    type Error;

    /// Move the current position without drawing.
    fn move_to(&mut self, p: Point);

    /// Draw with the current pen from the current position to `p`, which
    /// becomes the new current position.
    fn line_to(&mut self, p: Point) -> Result<(), Self::Error>;

    /// Select a pen; the previous one is returned to the caller.
    fn select_pen(&mut self, pen: Pen) -> Pen;

    /// Select a brush; the previous one is returned to the caller.
    fn select_brush(&mut self, brush: Brush) -> Brush;

    fn select_font(&mut self, font: &FontSpec);

    /// Outline with the current pen, fill with the current brush. The right
    /// and bottom edges are exclusive.
    fn rectangle(&mut self, rect: Rect) -> Result<(), Self::Error>;

    /// Connected line segments with the current pen.
    fn polyline(&mut self, points: &[Point]) -> Result<(), Self::Error>;

    /// Single-line text aligned and clipped inside `rect`.
    fn draw_text(&mut self, text: &str, rect: Rect, format: TextFormat) -> Result<(), Self::Error>;
}

/// Current selections of a canvas backend.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeviceState {
    pub position: Point,
    pub pen: Pen,
    pub brush: Brush,
    pub font: Option<FontSpec>,
}

impl DeviceState {
    /// Record a line end and return the segment start.
    pub fn advance(&mut self, to: Point) -> Point {
        std::mem::replace(&mut self.position, to)
    }
}

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    MoveTo { to: Point },
    LineTo { to: Point },
    SelectPen { pen: Pen },
    SelectBrush { brush: Brush },
    SelectFont { font: FontSpec },
    Rectangle { rect: Rect },
    Polyline { points: Vec<Point> },
    Text {
        text: String,
        rect: Rect,
        format: TextFormat,
    },
}

/// Canvas that records every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    state: DeviceState,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// All text drawn, in order.
    pub fn texts(&self) -> Vec<(&str, Rect)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, rect, .. } => Some((text.as_str(), *rect)),
                _ => None,
            })
            .collect()
    }

    /// All rectangles drawn, in order.
    pub fn rectangles(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rectangle { rect } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Replay the recorded calls onto another canvas.
    pub fn replay<C: Canvas>(&self, target: &mut C) -> Result<(), C::Error> {
        for command in &self.commands {
            match command {
                DrawCommand::MoveTo { to } => target.move_to(*to),
                DrawCommand::LineTo { to } => target.line_to(*to)?,
                DrawCommand::SelectPen { pen } => {
                    target.select_pen(*pen);
                }
                DrawCommand::SelectBrush { brush } => {
                    target.select_brush(*brush);
                }
                DrawCommand::SelectFont { font } => target.select_font(font),
                DrawCommand::Rectangle { rect } => target.rectangle(*rect)?,
                DrawCommand::Polyline { points } => target.polyline(points)?,
                DrawCommand::Text { text, rect, format } => target.draw_text(text, *rect, *format)?,
            }
        }
        Ok(())
    }
}

impl Canvas for RecordingCanvas {
    type Error = Infallible;

    fn move_to(&mut self, p: Point) {
        self.state.position = p;
        self.commands.push(DrawCommand::MoveTo { to: p });
    }

    fn line_to(&mut self, p: Point) -> Result<(), Infallible> {
        self.state.advance(p);
        self.commands.push(DrawCommand::LineTo { to: p });
        Ok(())
    }

    fn select_pen(&mut self, pen: Pen) -> Pen {
        self.commands.push(DrawCommand::SelectPen { pen });
        std::mem::replace(&mut self.state.pen, pen)
    }

    fn select_brush(&mut self, brush: Brush) -> Brush {
        self.commands.push(DrawCommand::SelectBrush { brush });
        std::mem::replace(&mut self.state.brush, brush)
    }

    fn select_font(&mut self, font: &FontSpec) {
        self.state.font = Some(font.clone());
        self.commands.push(DrawCommand::SelectFont { font: font.clone() });
    }

    fn rectangle(&mut self, rect: Rect) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Rectangle { rect });
        Ok(())
    }

    fn polyline(&mut self, points: &[Point]) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
        });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, rect: Rect, format: TextFormat) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            rect,
            format,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use crate::viz::types::{HAlign, VAlign};

    #[test]
    fn select_returns_previous_pen() {
        let mut canvas = RecordingCanvas::new();
        let first = canvas.select_pen(Pen::solid(Color::RED));
        assert_eq!(first, Pen::default());
        let second = canvas.select_pen(Pen::solid(Color::BLUE));
        assert_eq!(second, Pen::solid(Color::RED));
    }

    #[test]
    fn replay_reproduces_the_display_list() {
        let mut source = RecordingCanvas::new();
        source.move_to(Point::new(1, 2));
        source.line_to(Point::new(3, 4)).unwrap();
        source.select_brush(Brush::Hollow);
        source
            .draw_text("hi", Rect::new(0, 0, 10, 10), TextFormat::new(HAlign::Left, VAlign::Top))
            .unwrap();

        let mut copy = RecordingCanvas::new();
        source.replay(&mut copy).unwrap();
        assert_eq!(source.commands(), copy.commands());
        assert_eq!(copy.texts(), vec![("hi", Rect::new(0, 0, 10, 10))]);
    }

    #[test]
    fn commands_serialize_with_op_tag() {
        let json = serde_json::to_value(DrawCommand::LineTo {
            to: Point::new(5, 6),
        })
        .unwrap();
        assert_eq!(json["op"], "line_to");
        assert_eq!(json["to"]["x"], 5);
    }
}
