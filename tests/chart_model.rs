use barchart_rs::{ChartConfig, ChartData, ChartError, Color, LegendPlacement, Point, UnitData};

/// Helper to build a unit with labeled, colored bars
fn unit(x: i32, label: &str, bars: &[(i32, &str, Color)]) -> UnitData {
    let mut u = UnitData::new();
    for (value, name, color) in bars {
        u.insert_bar(*value, Some(name.to_string()), Some(*color), None)
            .unwrap();
    }
    u.set_x_position(x);
    u.set_label(label);
    u
}

fn chart_with_bar_width(bar_width: i32) -> ChartData {
    ChartData::new(ChartConfig {
        x_axis_name: "项目".into(),
        y_axis_name: "分数".into(),
        bar_width,
        ..ChartConfig::default()
    })
    .unwrap()
}

#[test]
fn out_of_range_bar_position_leaves_bars_unchanged() {
    let mut u = unit(
        100,
        "Item1",
        &[(200, "Name1", Color::RED), (100, "Name2", Color::GREEN)],
    );
    let before = (u.bar_values(), u.bar_labels(), u.bar_colors());

    for pos in [2usize, 3, usize::MAX] {
        let res = u.insert_bar(5, Some("late".into()), Some(Color::BLUE), Some(pos));
        assert!(matches!(res, Err(ChartError::BarIndexOutOfRange { .. })));
    }
    assert_eq!((u.bar_values(), u.bar_labels(), u.bar_colors()), before);
}

#[test]
fn negative_x_unit_is_rejected() {
    let mut chart = chart_with_bar_width(20);
    chart
        .insert_unit(unit(100, "Item1", &[(10, "Name1", Color::RED)]))
        .unwrap();
    let x_len = chart.x_axis_length();

    let res = chart.insert_unit(unit(-1, "bad", &[(999, "Other", Color::BLUE)]));
    assert!(matches!(res, Err(ChartError::NegativeXPosition(-1))));
    assert_eq!(chart.unit_count(), 1);
    assert_eq!(chart.x_axis_length(), x_len);
    assert_eq!(chart.legend_entries().len(), 1);
}

#[test]
fn fresh_unit_is_not_insertable_until_positioned() {
    let mut chart = chart_with_bar_width(20);
    let mut u = UnitData::new();
    u.insert_bar(1, None, None, None).unwrap();
    assert!(chart.insert_unit(u).is_err());
    assert_eq!(chart.unit_count(), 0);
}

#[test]
fn x_axis_length_from_rightmost_unit() {
    let mut chart = chart_with_bar_width(20);
    let bars = [
        (1, "Name1", Color::RED),
        (1, "Name2", Color::GREEN),
        (1, "Name3", Color::BLUE),
    ];
    chart.insert_unit(unit(100, "Item1", &bars)).unwrap();
    chart.insert_unit(unit(200, "Item2", &bars)).unwrap();
    // 200 + 3 * bar width 20 * x unit 1 * 3 bars
    assert_eq!(chart.x_axis_length(), 380);
}

#[test]
fn y_axis_length_is_max_plus_padding() {
    let mut chart = chart_with_bar_width(20);
    chart
        .insert_unit(unit(
            100,
            "Item1",
            &[
                (200, "Name1", Color::RED),
                (100, "Name2", Color::GREEN),
                (50, "Name3", Color::BLUE),
            ],
        ))
        .unwrap();
    chart
        .insert_unit(unit(
            200,
            "Item2",
            &[
                (100, "Name1", Color::RED),
                (50, "Name2", Color::GREEN),
                (60, "Name3", Color::BLUE),
            ],
        ))
        .unwrap();
    // 200 + 30 / y unit 1
    assert_eq!(chart.y_axis_length(), 230);
}

#[test]
fn legend_is_deduplicated_by_label_first_color_wins() {
    let mut chart = chart_with_bar_width(20);
    chart
        .insert_unit(unit(
            100,
            "Item1",
            &[(10, "Same", Color::RED), (20, "Other", Color::GREEN)],
        ))
        .unwrap();
    chart
        .insert_unit(unit(200, "Item2", &[(30, "Same", Color::BLUE)]))
        .unwrap();

    let entries = chart.legend_entries();
    let same: Vec<_> = entries.iter().filter(|e| e.label == "Same").collect();
    assert_eq!(same.len(), 1);
    assert_eq!(same[0].color, Color::RED);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].label, "Other");
}

#[test]
fn duplicate_labels_within_one_unit_collapse() {
    let mut chart = chart_with_bar_width(20);
    chart
        .insert_unit(unit(
            100,
            "Item1",
            &[(10, "Dup", Color::GREEN), (20, "Dup", Color::BLUE)],
        ))
        .unwrap();
    let entries = chart.legend_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].color, Color::GREEN);
}

#[test]
fn unlabeled_bars_use_value_text_in_legend() {
    let mut chart = chart_with_bar_width(20);
    let mut u = UnitData::with_position(50, "Item");
    u.insert_bar(75, None, Some(Color::RED), None).unwrap();
    chart.insert_unit(u).unwrap();
    assert_eq!(chart.legend_entries()[0].label, "75");
}

#[test]
fn clear_resets_values_position_and_label() {
    let mut u = unit(100, "Item1", &[(200, "Name1", Color::RED)]);
    u.clear();
    assert!(u.bar_values().is_empty());
    assert_eq!(u.x_position(), -1);
    assert_eq!(u.label(), "");

    // A cleared unit is reusable once positioned again.
    let mut chart = chart_with_bar_width(20);
    assert!(chart.insert_unit(u.clone()).is_err());
    u.set_x_position(200);
    u.push_bar(1, "Name1", Color::RED);
    chart.insert_unit(u).unwrap();
    assert_eq!(chart.unit(0).x_position(), 200);
}

#[test]
fn legend_origin_auto_then_explicit() {
    let mut chart = chart_with_bar_width(20);
    chart
        .insert_unit(unit(100, "Item1", &[(200, "Name1", Color::RED); 3]))
        .unwrap();
    chart
        .insert_unit(unit(200, "Item2", &[(100, "Name1", Color::RED); 3]))
        .unwrap();
    assert_eq!(chart.legend_placement(), LegendPlacement::Auto);
    assert_eq!(chart.legend_origin(), Point::new(380 - 50, 230 + 10));

    chart.set_legend_placement(LegendPlacement::At { left: 200, top: 200 });
    assert_eq!(chart.legend_origin(), Point::new(200, 200));
}

#[test]
fn unit_accessors() {
    let mut chart = chart_with_bar_width(20);
    chart
        .insert_unit(unit(100, "Item1", &[(1, "a", Color::RED)]))
        .unwrap();
    assert_eq!(chart.unit(0).label(), "Item1");
    assert!(chart.get_unit(1).is_none());
    assert_eq!(chart.units().len(), 1);
    assert_eq!(chart.x_axis_name(), "项目");
    assert_eq!(chart.y_axis_name(), "分数");
    assert_eq!(chart.bar_width(), 20);
    assert!(chart.axis_font().is_none());
    assert!(chart.is_legend_enabled());
}

#[test]
#[should_panic]
fn unchecked_unit_accessor_panics_out_of_range() {
    let chart = chart_with_bar_width(20);
    let _ = chart.unit(0);
}

#[test]
fn tallest_bar_at_i32_max_saturates_y_axis() {
    let mut chart = ChartData::new(ChartConfig::default()).unwrap();
    chart
        .insert_unit(unit(100, "Item1", &[(i32::MAX, "Name1", Color::RED)]))
        .unwrap();
    assert_eq!(chart.y_axis_length(), i32::MAX);
    assert_eq!(chart.legend_origin().y, i32::MAX);
    assert_eq!(chart.unit_count(), 1);
}

#[test]
fn unit_near_i32_max_saturates_x_axis() {
    let mut chart = chart_with_bar_width(20);
    chart
        .insert_unit(unit(i32::MAX - 10, "Far", &[(5, "Name1", Color::RED)]))
        .unwrap();
    assert_eq!(chart.x_axis_length(), i32::MAX);
    assert_eq!(chart.legend_origin().x, i32::MAX - 50);
    assert_eq!(chart.y_axis_length(), 35);
}
