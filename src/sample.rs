//! Built-in demo chart: two units of three bars each.

use crate::chart::{ChartConfig, ChartData};
use crate::error::ChartResult;
use crate::models::{LegendPlacement, UnitData};
use crate::style::{Color, FontSpec};

/// Chart-level settings of the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSettings {
    pub legend_enabled: bool,
    pub legend_placement: LegendPlacement,
}

impl Default for SampleSettings {
    fn default() -> Self {
        Self {
            legend_enabled: true,
            legend_placement: LegendPlacement::Auto,
        }
    }
}

/// Build the demo chart the way a repaint handler would: configure, fill a
/// unit, insert it, clear and refill the same unit, insert again.
pub fn sample_chart(settings: SampleSettings) -> ChartResult<ChartData> {
    let mut chart = ChartData::new(ChartConfig {
        x_unit: 1,
        y_unit: 1,
        x_axis_name: "项目".into(),
        y_axis_name: "分数".into(),
        bar_width: 20,
        font: Some(FontSpec::new("Microsoft YaHei", 16)),
        legend_enabled: settings.legend_enabled,
        legend_placement: settings.legend_placement,
        ..ChartConfig::default()
    })?;

    let mut unit = UnitData::new();
    unit.push_bar(200, "Name1", Color::RED);
    unit.push_bar(100, "Name2", Color::GREEN);
    unit.push_bar(50, "Name3", Color::BLUE);
    unit.set_x_position(100);
    unit.set_label("Item1");
    chart.insert_unit(unit.clone())?;

    unit.clear();
    unit.push_bar(100, "Name1", Color::RED);
    unit.push_bar(50, "Name2", Color::GREEN);
    unit.push_bar(60, "Name3", Color::BLUE);
    unit.set_x_position(200);
    unit.set_label("Item2");
    chart.insert_unit(unit)?;

    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_matches_demo_values() {
        let chart = sample_chart(SampleSettings::default()).unwrap();
        assert_eq!(chart.unit_count(), 2);
        assert_eq!(chart.x_axis_length(), 380);
        assert_eq!(chart.y_axis_length(), 230);
        assert_eq!(chart.legend_entries().len(), 3);
        assert_eq!(chart.unit(1).label(), "Item2");
    }
}
