use crate::error::{ChartError, ChartResult};
use crate::style::Color;
use serde::{Deserialize, Serialize};

/// Integer point (chart space, dialog units, or pixels depending on context).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Integer rectangle; `top < bottom` in device space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.left + self.width() / 2,
            self.top + self.height() / 2,
        )
    }
}

/// One labeled group of bars anchored at a single X position.
///
/// The value, label and color sequences are index-aligned but may differ in
/// length; reads past the end of the label/color sequences fall back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitData {
    x_position: i32,
    label: String,
    bar_values: Vec<i32>,
    bar_labels: Vec<Option<String>>,
    bar_colors: Vec<Option<Color>>,
}

impl Default for UnitData {
    fn default() -> Self {
        Self {
            x_position: -1,
            label: String::new(),
            bar_values: Vec::new(),
            bar_labels: Vec::new(),
            bar_colors: Vec::new(),
        }
    }
}

impl UnitData {
    /// Empty unit at X = -1 (not insertable until positioned).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(x: i32, label: impl Into<String>) -> Self {
        Self {
            x_position: x,
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn set_x_position(&mut self, x: i32) {
        self.x_position = x;
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Insert a bar before `pos`, or append when `pos` is `None`.
    ///
    /// An explicit `pos` must satisfy `pos < bar_count()`; appending always
    /// goes through `None`. On failure nothing changes.
    pub fn insert_bar(
        &mut self,
        value: i32,
        label: Option<String>,
        color: Option<Color>,
        pos: Option<usize>,
    ) -> ChartResult<()> {
        match pos {
            None => {
                self.bar_values.push(value);
                self.bar_labels.push(label);
                self.bar_colors.push(color);
                Ok(())
            }
            Some(pos) if pos < self.bar_values.len() => {
                self.bar_values.insert(pos, value);
                self.bar_labels.insert(pos.min(self.bar_labels.len()), label);
                self.bar_colors.insert(pos.min(self.bar_colors.len()), color);
                Ok(())
            }
            Some(pos) => Err(ChartError::BarIndexOutOfRange {
                pos,
                len: self.bar_values.len(),
            }),
        }
    }

    /// Append a labeled, colored bar.
    pub fn push_bar(&mut self, value: i32, label: impl Into<String>, color: Color) {
        self.bar_values.push(value);
        self.bar_labels.push(Some(label.into()));
        self.bar_colors.push(Some(color));
    }

    /// Replace the label of the bar at `pos`.
    pub fn set_bar_label(&mut self, pos: usize, label: impl Into<String>) -> ChartResult<()> {
        let len = self.bar_labels.len();
        let slot = self
            .bar_labels
            .get_mut(pos)
            .ok_or(ChartError::BarIndexOutOfRange { pos, len })?;
        *slot = Some(label.into());
        Ok(())
    }

    /// Replace the color of the bar at `pos`.
    pub fn set_bar_color(&mut self, pos: usize, color: Color) -> ChartResult<()> {
        let len = self.bar_colors.len();
        let slot = self
            .bar_colors
            .get_mut(pos)
            .ok_or(ChartError::BarIndexOutOfRange { pos, len })?;
        *slot = Some(color);
        Ok(())
    }

    /// Reset to a fresh unit: no bars, X = -1, empty label.
    pub fn clear(&mut self) {
        self.bar_values.clear();
        self.bar_labels.clear();
        self.bar_colors.clear();
        self.x_position = -1;
        self.label.clear();
    }

    pub fn x_position(&self) -> i32 {
        self.x_position
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn bar_count(&self) -> usize {
        self.bar_values.len()
    }

    pub fn bar_values(&self) -> Vec<i32> {
        self.bar_values.clone()
    }

    pub fn bar_labels(&self) -> Vec<Option<String>> {
        self.bar_labels.clone()
    }

    pub fn bar_colors(&self) -> Vec<Option<Color>> {
        self.bar_colors.clone()
    }

    /// Value of bar `i`, if any.
    pub fn bar_value(&self, i: usize) -> Option<i32> {
        self.bar_values.get(i).copied()
    }

    /// Label of bar `i`; the bar's value text when no label was given.
    pub fn bar_label(&self, i: usize) -> String {
        match self.bar_labels.get(i) {
            Some(Some(label)) => label.clone(),
            _ => self.bar_value(i).map(|v| v.to_string()).unwrap_or_default(),
        }
    }

    /// Explicit color of bar `i`, if one was given.
    pub fn bar_color(&self, i: usize) -> Option<Color> {
        self.bar_colors.get(i).copied().flatten()
    }
}

/// Legend swatch: one color per distinct bar label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub color: Color,
    pub label: String,
}

/// Where the legend is anchored, relative to the chart start point in
/// chart-space units (`left` to the right, `top` upwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LegendPlacement {
    /// Derived from the axis lengths on every recompute.
    #[default]
    Auto,
    At { left: i32, top: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_bars() -> UnitData {
        let mut unit = UnitData::with_position(100, "Item1");
        unit.push_bar(200, "Name1", Color::RED);
        unit.push_bar(100, "Name2", Color::GREEN);
        unit.push_bar(50, "Name3", Color::BLUE);
        unit
    }

    #[test]
    fn explicit_position_inserts_before() {
        let mut unit = three_bars();
        unit.insert_bar(7, Some("X".into()), None, Some(1)).unwrap();
        assert_eq!(unit.bar_values(), vec![200, 7, 100, 50]);
        assert_eq!(unit.bar_label(1), "X");
        assert_eq!(unit.bar_color(1), None);
        assert_eq!(unit.bar_color(2), Some(Color::GREEN));
    }

    #[test]
    fn out_of_range_position_is_rejected() {
        let mut unit = three_bars();
        let err = unit.insert_bar(1, None, None, Some(3)).unwrap_err();
        assert!(matches!(
            err,
            ChartError::BarIndexOutOfRange { pos: 3, len: 3 }
        ));
        assert!(unit.insert_bar(1, None, None, Some(99)).is_err());
        assert_eq!(unit.bar_values(), vec![200, 100, 50]);
        assert_eq!(unit.bar_labels().len(), 3);
    }

    #[test]
    fn explicit_position_on_empty_unit_fails() {
        let mut unit = UnitData::new();
        assert!(unit.insert_bar(1, None, None, Some(0)).is_err());
        assert!(unit.insert_bar(1, None, None, None).is_ok());
        assert_eq!(unit.bar_count(), 1);
    }

    #[test]
    fn missing_label_falls_back_to_value() {
        let mut unit = UnitData::new();
        unit.insert_bar(42, None, None, None).unwrap();
        assert_eq!(unit.bar_label(0), "42");
        assert_eq!(unit.bar_label(5), "");
        assert_eq!(unit.bar_color(5), None);
    }

    #[test]
    fn bar_label_and_color_are_replaced_in_place() {
        let mut unit = three_bars();
        unit.set_bar_label(2, "Last").unwrap();
        unit.set_bar_color(0, Color::BLACK).unwrap();
        assert_eq!(unit.bar_label(2), "Last");
        assert_eq!(unit.bar_color(0), Some(Color::BLACK));
        assert!(unit.set_bar_label(3, "nope").is_err());
        assert!(unit.set_bar_color(3, Color::WHITE).is_err());
        assert_eq!(unit.bar_count(), 3);
    }

    #[test]
    fn accessors_return_copies() {
        let unit = three_bars();
        let mut values = unit.bar_values();
        values.push(1);
        assert_eq!(unit.bar_count(), 3);
    }

    #[test]
    fn clear_resets_everything() {
        let mut unit = three_bars();
        unit.clear();
        assert!(unit.bar_values().is_empty());
        assert!(unit.bar_labels().is_empty());
        assert!(unit.bar_colors().is_empty());
        assert_eq!(unit.x_position(), -1);
        assert_eq!(unit.label(), "");
    }

    #[test]
    fn rect_geometry() {
        let r = Rect::new(10, 20, 30, 60);
        assert_eq!(r.width(), 20);
        assert_eq!(r.height(), 40);
        assert_eq!(r.center(), Point::new(20, 40));
    }
}
