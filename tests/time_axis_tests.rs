use chrono::{TimeZone, Utc};
use gridline_rs::api::{AxisKind, AxisOptions, ChartDocument, prepare_axis_frame};
use gridline_rs::core::{ChartBounds, DomainValue};
use gridline_rs::measure::HeuristicTextMeasurer;
use gridline_rs::render::TickLabelBlock;

fn millis(year: i32, month: u32, day: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .unwrap()
        .timestamp_millis()
}

fn datetime_x(start_ms: i64, end_ms: i64) -> AxisOptions {
    AxisOptions::x(AxisKind::DateTime {
        data_min_ms: start_ms,
        data_max_ms: end_ms,
        distinct_timestamps: None,
    })
}

fn label_texts(frame: &gridline_rs::render::AxisRenderFrame) -> Vec<String> {
    frame
        .x_axis
        .rows
        .last()
        .expect("at least one row")
        .ticks
        .iter()
        .filter_map(|tick| tick.label.as_ref())
        .map(TickLabelBlock::display_text)
        .collect()
}

#[test]
fn three_year_span_ticks_yearly_at_boundaries() {
    let start = millis(2020, 1, 1);
    let end = millis(2023, 1, 1);
    let document = ChartDocument::new(ChartBounds::new(500.0, 300.0), datetime_x(start, end));
    let frame = prepare_axis_frame(&document, &HeuristicTextMeasurer).expect("layout");

    let row = frame.x_axis.rows.last().expect("one row");
    assert_eq!(row.ticks.len(), 4);
    assert_eq!(
        row.ticks[0].value,
        DomainValue::TimestampMillis(start)
    );
    assert_eq!(
        row.ticks[3].value,
        DomainValue::TimestampMillis(end)
    );

    let labels = label_texts(&frame);
    assert_eq!(labels, vec!["2020", "2021", "2022", "2023"]);
}

#[test]
fn intraday_span_uses_time_of_day_labels() {
    let start = Utc
        .with_ymd_and_hms(2024, 4, 2, 9, 0, 0)
        .unwrap()
        .timestamp_millis();
    let end = Utc
        .with_ymd_and_hms(2024, 4, 2, 17, 0, 0)
        .unwrap()
        .timestamp_millis();
    let document = ChartDocument::new(ChartBounds::new(800.0, 300.0), datetime_x(start, end));
    let frame = prepare_axis_frame(&document, &HeuristicTextMeasurer).expect("layout");

    let labels = label_texts(&frame);
    assert!(!labels.is_empty());
    for label in &labels {
        assert!(label.contains(':'), "expected HH:MM labels, got {label}");
    }
}

#[test]
fn distinct_timestamp_cap_limits_tick_count() {
    let start = millis(2024, 1, 1);
    let end = millis(2024, 1, 31);
    let mut axis = datetime_x(start, end);
    axis.kind = AxisKind::DateTime {
        data_min_ms: start,
        data_max_ms: end,
        distinct_timestamps: Some(3),
    };
    let document = ChartDocument::new(ChartBounds::new(1_200.0, 300.0), axis);
    let frame = prepare_axis_frame(&document, &HeuristicTextMeasurer).expect("layout");

    let row = frame.x_axis.rows.last().expect("one row");
    assert!(row.ticks.len() <= 3);
    assert!(!row.ticks.is_empty());
}

#[test]
fn explicit_date_format_applies_to_every_tick() {
    let start = millis(2020, 1, 1);
    let end = millis(2023, 1, 1);
    let mut axis = datetime_x(start, end);
    axis.labels.date_format = Some("'%y".to_owned());
    let document = ChartDocument::new(ChartBounds::new(500.0, 300.0), axis);
    let frame = prepare_axis_frame(&document, &HeuristicTextMeasurer).expect("layout");

    let labels = label_texts(&frame);
    assert_eq!(labels, vec!["'20", "'21", "'22", "'23"]);
}
