//! Chart container: ordered units plus global configuration, with the axis
//! lengths, legend origin and legend entries derived on every insertion.
//!
//! ### Example
//! ```
//! use barchart_rs::{ChartConfig, ChartData, Color, UnitData};
//!
//! let mut chart = ChartData::new(ChartConfig {
//!     bar_width: 20,
//!     ..ChartConfig::default()
//! })?;
//! let mut unit = UnitData::with_position(100, "Item1");
//! unit.push_bar(200, "Name1", Color::RED);
//! chart.insert_unit(unit)?;
//! assert_eq!(chart.y_axis_length(), 230);
//! # Ok::<(), barchart_rs::ChartError>(())
//! ```

use crate::error::{ChartError, ChartResult};
use crate::models::{LegendEntry, LegendPlacement, Point, UnitData};
use crate::style::{Color, FontSpec, office_palette};
use log::{debug, warn};

/// Padding added above the tallest bar, divided by the Y unit.
const Y_AXIS_PADDING: i32 = 30;
/// Auto legend: distance left of the X axis end, divided by the X unit.
const LEGEND_INSET_X: i32 = 50;
/// Auto legend: distance above the Y axis end, divided by the Y unit.
const LEGEND_RAISE_Y: i32 = 10;

/// Static configuration consumed once by [`ChartData::new`].
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Units to seed the chart with.
    pub units: Vec<UnitData>,
    pub x_unit: i32,
    pub y_unit: i32,
    pub x_axis_name: String,
    pub y_axis_name: String,
    pub bar_width: i32,
    /// Fallback bar colors, looked up by bar index.
    pub palette: Vec<Color>,
    pub font: Option<FontSpec>,
    pub legend_enabled: bool,
    pub legend_placement: LegendPlacement,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            units: Vec::new(),
            x_unit: 1,
            y_unit: 1,
            x_axis_name: String::new(),
            y_axis_name: String::new(),
            bar_width: 10,
            palette: office_palette(),
            font: None,
            legend_enabled: true,
            legend_placement: LegendPlacement::Auto,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartData {
    units: Vec<UnitData>,
    x_unit: i32,
    y_unit: i32,
    x_axis_length: i32,
    y_axis_length: i32,
    x_axis_name: String,
    y_axis_name: String,
    bar_width: i32,
    palette: Vec<Color>,
    axis_font: Option<FontSpec>,
    legend_enabled: bool,
    legend_placement: LegendPlacement,
    legend_origin: Point,
    legend_entries: Vec<LegendEntry>,
}

impl ChartData {
    /// Build a chart from its one-time configuration.
    ///
    /// Seeded units with a negative X position are dropped.
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        check_unit(config.x_unit)?;
        check_unit(config.y_unit)?;

        let units: Vec<UnitData> = config
            .units
            .into_iter()
            .filter(|u| {
                let keep = u.x_position() >= 0;
                if !keep {
                    warn!(
                        "dropping seeded unit {:?} at negative X {}",
                        u.label(),
                        u.x_position()
                    );
                }
                keep
            })
            .collect();

        let mut chart = Self {
            units,
            x_unit: config.x_unit,
            y_unit: config.y_unit,
            x_axis_length: 0,
            y_axis_length: 0,
            x_axis_name: config.x_axis_name,
            y_axis_name: config.y_axis_name,
            bar_width: config.bar_width,
            palette: config.palette,
            axis_font: config.font,
            legend_enabled: config.legend_enabled,
            legend_placement: config.legend_placement,
            legend_origin: Point::default(),
            legend_entries: Vec::new(),
        };
        chart.recompute_derived();
        Ok(chart)
    }

    /// Move `unit` into the chart and recompute derived state.
    pub fn insert_unit(&mut self, unit: UnitData) -> ChartResult<()> {
        if unit.x_position() < 0 {
            warn!(
                "rejecting unit {:?} at negative X {}",
                unit.label(),
                unit.x_position()
            );
            return Err(ChartError::NegativeXPosition(unit.x_position()));
        }
        self.units.push(unit);
        self.recompute_derived();
        Ok(())
    }

    pub fn set_x_unit(&mut self, unit: i32) -> ChartResult<()> {
        check_unit(unit)?;
        self.x_unit = unit;
        Ok(())
    }

    pub fn set_y_unit(&mut self, unit: i32) -> ChartResult<()> {
        check_unit(unit)?;
        self.y_unit = unit;
        Ok(())
    }

    pub fn set_legend_enabled(&mut self, enabled: bool) {
        self.legend_enabled = enabled;
    }

    /// Takes effect immediately for `At`; `Auto` is re-derived on the next insertion.
    pub fn set_legend_placement(&mut self, placement: LegendPlacement) {
        self.legend_placement = placement;
        if let LegendPlacement::At { left, top } = placement {
            self.legend_origin = Point::new(left, top);
        }
    }

    fn recompute_derived(&mut self) {
        // Only the rightmost unit's bar count widens the X axis.
        let mut last_x = 0;
        let mut last_count = 0usize;
        for unit in &self.units {
            if unit.x_position() > last_x {
                last_x = unit.x_position();
                last_count = unit.bar_count();
            }
        }
        // Derived lengths saturate at the i32 range instead of wrapping.
        let last_count = i32::try_from(last_count).unwrap_or(i32::MAX);
        let group_width = 3i32
            .saturating_mul(self.bar_width)
            .saturating_mul(self.x_unit)
            .saturating_mul(last_count);
        self.x_axis_length = last_x.saturating_add(group_width);

        let max_value = self
            .units
            .iter()
            .flat_map(|u| u.bar_values())
            .fold(0, i32::max);
        self.y_axis_length = max_value.saturating_add(Y_AXIS_PADDING / self.y_unit);

        self.legend_origin = match self.legend_placement {
            LegendPlacement::Auto => Point::new(
                self.x_axis_length.saturating_sub(LEGEND_INSET_X / self.x_unit),
                self.y_axis_length.saturating_add(LEGEND_RAISE_Y / self.y_unit),
            ),
            LegendPlacement::At { left, top } => Point::new(left, top),
        };

        for unit in &self.units {
            for i in 0..unit.bar_count() {
                let label = unit.bar_label(i);
                if self.legend_entries.iter().any(|e| e.label == label) {
                    continue;
                }
                let color = resolve_color(&self.palette, unit, i);
                self.legend_entries.push(LegendEntry { color, label });
            }
        }

        debug!(
            "recomputed chart: {} units, x axis {}, y axis {}, {} legend entries",
            self.units.len(),
            self.x_axis_length,
            self.y_axis_length,
            self.legend_entries.len()
        );
    }

    pub fn x_axis_length(&self) -> i32 {
        self.x_axis_length
    }

    pub fn y_axis_length(&self) -> i32 {
        self.y_axis_length
    }

    pub fn x_unit(&self) -> i32 {
        self.x_unit
    }

    pub fn y_unit(&self) -> i32 {
        self.y_unit
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Unit at `i`. The caller guarantees `i < unit_count()`; panics otherwise.
    pub fn unit(&self, i: usize) -> &UnitData {
        &self.units[i]
    }

    pub fn get_unit(&self, i: usize) -> Option<&UnitData> {
        self.units.get(i)
    }

    pub fn units(&self) -> &[UnitData] {
        &self.units
    }

    pub fn x_axis_name(&self) -> &str {
        &self.x_axis_name
    }

    pub fn y_axis_name(&self) -> &str {
        &self.y_axis_name
    }

    pub fn bar_width(&self) -> i32 {
        self.bar_width
    }

    pub fn axis_font(&self) -> Option<&FontSpec> {
        self.axis_font.as_ref()
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Legend anchor relative to the chart start point, chart-space units.
    pub fn legend_origin(&self) -> Point {
        self.legend_origin
    }

    pub fn legend_placement(&self) -> LegendPlacement {
        self.legend_placement
    }

    pub fn is_legend_enabled(&self) -> bool {
        self.legend_enabled
    }

    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        self.legend_entries.clone()
    }

    /// Color of bar `i` of `unit`: its own, else the palette, else black.
    pub fn resolve_bar_color(&self, unit: &UnitData, i: usize) -> Color {
        resolve_color(&self.palette, unit, i)
    }
}

fn resolve_color(palette: &[Color], unit: &UnitData, i: usize) -> Color {
    unit.bar_color(i)
        .or_else(|| palette.get(i).copied())
        .unwrap_or(Color::BLACK)
}

fn check_unit(unit: i32) -> ChartResult<()> {
    if unit <= 0 {
        return Err(ChartError::InvalidUnit(unit));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(x: i32, label: &str, bars: &[(i32, &str, Color)]) -> UnitData {
        let mut u = UnitData::with_position(x, label);
        for (v, name, color) in bars {
            u.push_bar(*v, *name, *color);
        }
        u
    }

    fn chart(bar_width: i32) -> ChartData {
        ChartData::new(ChartConfig {
            bar_width,
            ..ChartConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn x_axis_uses_rightmost_unit_bar_count() {
        let mut c = chart(20);
        c.insert_unit(unit(200, "B", &[(1, "a", Color::RED); 2])).unwrap();
        c.insert_unit(unit(100, "A", &[(1, "a", Color::RED); 5])).unwrap();
        assert_eq!(c.x_axis_length(), 200 + 3 * 20 * 2);
    }

    #[test]
    fn ties_on_x_keep_first_unit() {
        let mut c = chart(10);
        c.insert_unit(unit(50, "A", &[(1, "a", Color::RED); 1])).unwrap();
        c.insert_unit(unit(50, "B", &[(1, "a", Color::RED); 4])).unwrap();
        assert_eq!(c.x_axis_length(), 50 + 30);
    }

    #[test]
    fn y_axis_padding_is_divided_by_unit() {
        let mut c = ChartData::new(ChartConfig {
            y_unit: 4,
            ..ChartConfig::default()
        })
        .unwrap();
        c.insert_unit(unit(10, "A", &[(90, "a", Color::RED)])).unwrap();
        assert_eq!(c.y_axis_length(), 90 + 7);
    }

    #[test]
    fn auto_legend_follows_axes() {
        let mut c = chart(20);
        c.insert_unit(unit(100, "A", &[(200, "a", Color::RED)])).unwrap();
        assert_eq!(c.x_axis_length(), 160);
        assert_eq!(c.y_axis_length(), 230);
        assert_eq!(c.legend_origin(), Point::new(110, 240));
    }

    #[test]
    fn explicit_legend_is_kept() {
        let mut c = chart(20);
        c.set_legend_placement(LegendPlacement::At { left: 200, top: 200 });
        c.insert_unit(unit(100, "A", &[(200, "a", Color::RED)])).unwrap();
        assert_eq!(c.legend_origin(), Point::new(200, 200));
    }

    #[test]
    fn palette_then_black_for_uncolored_bars() {
        let mut c = ChartData::new(ChartConfig {
            palette: vec![Color::GREEN],
            ..ChartConfig::default()
        })
        .unwrap();
        let mut u = UnitData::with_position(10, "A");
        u.insert_bar(5, Some("p".into()), None, None).unwrap();
        u.insert_bar(6, Some("q".into()), None, None).unwrap();
        c.insert_unit(u).unwrap();
        let entries = c.legend_entries();
        assert_eq!(entries[0].color, Color::GREEN);
        assert_eq!(entries[1].color, Color::BLACK);
    }

    #[test]
    fn zero_units_are_rejected() {
        let err = ChartData::new(ChartConfig {
            x_unit: 0,
            ..ChartConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, ChartError::InvalidUnit(0)));
        let mut c = chart(10);
        assert!(c.set_y_unit(-2).is_err());
        assert_eq!(c.y_unit(), 1);
        c.set_x_unit(3).unwrap();
        assert_eq!(c.x_unit(), 3);
    }

    #[test]
    fn seeded_units_are_counted() {
        let c = ChartData::new(ChartConfig {
            units: vec![
                unit(100, "A", &[(10, "a", Color::RED)]),
                unit(-5, "bad", &[(10, "a", Color::RED)]),
            ],
            bar_width: 20,
            ..ChartConfig::default()
        })
        .unwrap();
        assert_eq!(c.unit_count(), 1);
        assert_eq!(c.x_axis_length(), 160);
        assert_eq!(c.legend_entries().len(), 1);
    }

    #[test]
    fn group_width_saturates() {
        let mut c = ChartData::new(ChartConfig {
            bar_width: i32::MAX / 2,
            x_unit: 2,
            ..ChartConfig::default()
        })
        .unwrap();
        c.insert_unit(unit(1, "A", &[(1, "a", Color::RED); 3])).unwrap();
        assert_eq!(c.x_axis_length(), i32::MAX);
        assert_eq!(c.legend_origin().x, i32::MAX - 25);
    }

    #[test]
    fn empty_chart_has_padding_only() {
        let c = chart(20);
        assert_eq!(c.x_axis_length(), 0);
        assert_eq!(c.y_axis_length(), 30);
        assert!(c.get_unit(0).is_none());
    }
}
