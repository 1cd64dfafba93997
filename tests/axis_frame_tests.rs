use gridline_rs::api::{
    AxisKind, AxisOptions, ChartDocument, SplitOptions, TitleOptions, prepare_axis_frame,
};
use gridline_rs::core::{ChartBounds, ReservedSpace};
use gridline_rs::measure::HeuristicTextMeasurer;
use gridline_rs::render::{AxisEdge, TickLabelBlock};

fn linear_x() -> AxisOptions {
    AxisOptions::x(AxisKind::Linear {
        data_min: 0.0,
        data_max: 100.0,
    })
}

fn linear_y() -> AxisOptions {
    AxisOptions::y(AxisKind::Linear {
        data_min: 0.0,
        data_max: 1.0,
    })
}

#[test]
fn frame_reserves_width_for_the_y_axis() {
    let document =
        ChartDocument::new(ChartBounds::new(800.0, 600.0), linear_x()).with_y_axis(linear_y());
    let frame = prepare_axis_frame(&document, &HeuristicTextMeasurer).expect("layout");

    let y_axis = &frame.y_axes[0];
    assert!(y_axis.reserved_extent_px > 0.0);
    assert!((frame.plot_area.left - y_axis.reserved_extent_px).abs() <= 1e-9);
    assert!(frame.plot_area.width < 800.0);
}

#[test]
fn x_ticks_respect_label_line_height_spacing() {
    let mut x = linear_x();
    x.labels.line_height_px = Some(20.0);
    let document = ChartDocument::new(ChartBounds::new(500.0, 300.0), x);
    let frame = prepare_axis_frame(&document, &HeuristicTextMeasurer).expect("layout");

    let ticks = &frame.x_axis.rows[0].ticks;
    assert!(ticks.len() > 1);
    for pair in ticks.windows(2) {
        assert!((pair[1].position - pair[0].position).abs() >= 20.0);
    }
}

#[test]
fn only_the_bottom_plot_row_carries_labels() {
    let document = ChartDocument::new(ChartBounds::new(800.0, 600.0), linear_x()).with_split(
        SplitOptions {
            plot_count: 2,
            gap_px: 12.0,
        },
    );
    let frame = prepare_axis_frame(&document, &HeuristicTextMeasurer).expect("layout");

    assert_eq!(frame.x_axis.rows.len(), 2);
    assert!(frame.x_axis.rows[0]
        .ticks
        .iter()
        .all(|tick| tick.label.is_none()));
    assert!(frame.x_axis.rows[1]
        .ticks
        .iter()
        .any(|tick| tick.label.is_some()));
}

#[test]
fn split_regions_are_disjoint_and_within_bounds() {
    let document = ChartDocument::new(ChartBounds::new(800.0, 600.0), linear_x()).with_split(
        SplitOptions {
            plot_count: 3,
            gap_px: 10.0,
        },
    );
    let frame = prepare_axis_frame(&document, &HeuristicTextMeasurer).expect("layout");

    assert_eq!(frame.regions.len(), 3);
    for pair in frame.regions.windows(2) {
        assert!(pair[1].top >= pair[0].top + pair[0].height);
    }
    let last = frame.regions.last().expect("three regions");
    assert!(last.top + last.height <= 600.0 + 1e-9);
}

#[test]
fn x_grid_line_at_the_y_domain_is_suppressed() {
    let document =
        ChartDocument::new(ChartBounds::new(800.0, 600.0), linear_x()).with_y_axis(linear_y());
    let frame = prepare_axis_frame(&document, &HeuristicTextMeasurer).expect("layout");

    let plot_left = frame.plot_area.left;
    let row = &frame.x_axis.rows[0];
    let edge_tick = row
        .ticks
        .iter()
        .find(|tick| (tick.position - plot_left).abs() <= 0.5)
        .expect("tick at the plot edge");
    assert!(edge_tick.grid_line.is_none());
    assert!(row
        .ticks
        .iter()
        .any(|tick| tick.grid_line.is_some()));
}

#[test]
fn y_grid_line_at_the_x_domain_is_suppressed() {
    let document =
        ChartDocument::new(ChartBounds::new(800.0, 600.0), linear_x()).with_y_axis(linear_y());
    let frame = prepare_axis_frame(&document, &HeuristicTextMeasurer).expect("layout");

    let row = &frame.y_axes[0].rows[0];
    let region = frame.regions[0];
    let bottom = region.top + region.height;
    let bottom_tick = row
        .ticks
        .iter()
        .find(|tick| (tick.position - bottom).abs() <= 0.5)
        .expect("tick at the region bottom");
    assert!(bottom_tick.grid_line.is_none());
}

#[test]
fn reserved_space_shrinks_the_plot_area() {
    let reserved = ReservedSpace {
        top: 40.0,
        right: 0.0,
        bottom: 0.0,
        left: 25.0,
    };
    let document =
        ChartDocument::new(ChartBounds::new(800.0, 600.0), linear_x()).with_reserved(reserved);
    let frame = prepare_axis_frame(&document, &HeuristicTextMeasurer).expect("layout");

    assert!(frame.plot_area.left >= 25.0);
    assert_eq!(frame.plot_area.top, 40.0);
}

#[test]
fn reserved_space_consuming_the_bounds_yields_an_empty_frame() {
    let reserved = ReservedSpace {
        top: 600.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };
    let document =
        ChartDocument::new(ChartBounds::new(800.0, 600.0), linear_x()).with_reserved(reserved);
    let frame = prepare_axis_frame(&document, &HeuristicTextMeasurer).expect("degenerate layout");

    assert!(frame.is_empty());
    assert!(frame.regions.is_empty());
}

#[test]
fn invisible_x_axis_produces_no_rows() {
    let mut x = linear_x();
    x.visible = false;
    let document = ChartDocument::new(ChartBounds::new(800.0, 600.0), x);
    let frame = prepare_axis_frame(&document, &HeuristicTextMeasurer).expect("layout");

    assert!(frame.x_axis.rows.is_empty());
    assert_eq!(frame.x_axis.reserved_extent_px, 0.0);
}

#[test]
fn x_title_adds_to_the_reserved_height() {
    let bare = ChartDocument::new(ChartBounds::new(800.0, 600.0), linear_x());
    let bare_frame = prepare_axis_frame(&bare, &HeuristicTextMeasurer).expect("layout");

    let mut titled_x = linear_x();
    titled_x.title = Some(TitleOptions::new("Elapsed time"));
    let titled = ChartDocument::new(ChartBounds::new(800.0, 600.0), titled_x);
    let titled_frame = prepare_axis_frame(&titled, &HeuristicTextMeasurer).expect("layout");

    assert!(
        titled_frame.x_axis.reserved_extent_px > bare_frame.x_axis.reserved_extent_px
    );
    let title = titled_frame.x_axis.title.as_ref().expect("title block");
    assert_eq!(title.rows.len(), 1);
    assert_eq!(title.rotation_deg, 0.0);
}

#[test]
fn left_y_title_is_rotated_counter_clockwise() {
    let mut y = linear_y();
    y.title = Some(TitleOptions::new("Utilization"));
    let document =
        ChartDocument::new(ChartBounds::new(800.0, 600.0), linear_x()).with_y_axis(y);
    let frame = prepare_axis_frame(&document, &HeuristicTextMeasurer).expect("layout");

    let title = frame.y_axes[0].title.as_ref().expect("title block");
    assert_eq!(title.rotation_deg, -90.0);
}

#[test]
fn right_y_axis_labels_sit_right_of_the_domain_line() {
    let right = AxisOptions::with_position(
        AxisKind::Linear {
            data_min: 0.0,
            data_max: 10.0,
        },
        AxisEdge::Right,
    );
    let document =
        ChartDocument::new(ChartBounds::new(800.0, 600.0), linear_x()).with_y_axis(right);
    let frame = prepare_axis_frame(&document, &HeuristicTextMeasurer).expect("layout");

    let plot_right = frame.plot_area.left + frame.plot_area.width;
    for tick in &frame.y_axes[0].rows[0].ticks {
        if let Some(TickLabelBlock::Svg(block)) = &tick.label {
            assert!(block.x > plot_right);
        }
    }
}

#[test]
fn category_axis_emits_html_blocks_when_requested() {
    let mut x = AxisOptions::x(AxisKind::Category {
        categories: vec!["alpha".to_owned(), "beta".to_owned(), "gamma".to_owned()],
    });
    x.labels.html = true;
    let document = ChartDocument::new(ChartBounds::new(600.0, 300.0), x);
    let frame = prepare_axis_frame(&document, &HeuristicTextMeasurer).expect("layout");

    let row = frame.x_axis.rows.last().expect("one row");
    assert_eq!(row.ticks.len(), 3);
    for tick in &row.ticks {
        match tick.label.as_ref().expect("label") {
            TickLabelBlock::Html(block) => {
                assert!(block.width > 0.0 && block.height > 0.0);
            }
            TickLabelBlock::Svg(_) => panic!("expected html label blocks"),
        }
    }
}
