use gridline_rs::api::{AxisKind, AxisOptions, ChartDocument, SplitOptions, validate_document};
use gridline_rs::core::ChartBounds;
use gridline_rs::error::ChartError;
use gridline_rs::render::AxisEdge;

fn linear_x() -> AxisOptions {
    AxisOptions::x(AxisKind::Linear {
        data_min: 0.0,
        data_max: 100.0,
    })
}

fn document_with(x: AxisOptions) -> ChartDocument {
    ChartDocument::new(ChartBounds::new(800.0, 600.0), x)
}

#[test]
fn duplicate_category_values_raise_invalid_data() {
    let x = AxisOptions::x(AxisKind::Category {
        categories: vec!["a".to_owned(), "b".to_owned(), "a".to_owned()],
    });
    let error = validate_document(&document_with(x)).expect_err("duplicate categories");
    assert!(matches!(error, ChartError::InvalidData(_)));
    assert!(error.to_string().contains("duplicate category value `a`"));
}

#[test]
fn two_y_axes_on_the_same_side_raise_invalid_data() {
    let y = AxisOptions::y(AxisKind::Linear {
        data_min: 0.0,
        data_max: 1.0,
    });
    let document = document_with(linear_x())
        .with_y_axis(y.clone())
        .with_y_axis(y);
    let error = validate_document(&document).expect_err("conflicting y axes");
    assert!(matches!(error, ChartError::InvalidData(_)));
}

#[test]
fn html_labels_on_a_datetime_axis_raise_invalid_data() {
    let mut x = AxisOptions::x(AxisKind::DateTime {
        data_min_ms: 0,
        data_max_ms: 1_000_000,
        distinct_timestamps: None,
    });
    x.labels.html = true;
    assert!(validate_document(&document_with(x)).is_err());
}

#[test]
fn y_axis_plot_index_must_exist_in_the_split() {
    let mut y = AxisOptions::y(AxisKind::Linear {
        data_min: 0.0,
        data_max: 1.0,
    });
    y.plot_index = 2;
    let document = document_with(linear_x()).with_y_axis(y);
    assert!(validate_document(&document).is_err());

    let mut y = AxisOptions::y(AxisKind::Linear {
        data_min: 0.0,
        data_max: 1.0,
    });
    y.plot_index = 2;
    let document = document_with(linear_x())
        .with_split(SplitOptions {
            plot_count: 3,
            gap_px: 10.0,
        })
        .with_y_axis(y);
    assert!(validate_document(&document).is_ok());
}

#[test]
fn x_axis_cannot_sit_on_a_vertical_edge() {
    let x = AxisOptions::with_position(
        AxisKind::Linear {
            data_min: 0.0,
            data_max: 1.0,
        },
        AxisEdge::Left,
    );
    assert!(validate_document(&document_with(x)).is_err());
}

#[test]
fn non_positive_log_data_raises_invalid_data() {
    let x = AxisOptions::x(AxisKind::Logarithmic {
        data_min: 0.0,
        data_max: 100.0,
        base: 10.0,
    });
    assert!(validate_document(&document_with(x)).is_err());
}

#[test]
fn invalid_bounds_raise_before_layout() {
    let document = ChartDocument::new(ChartBounds::new(0.0, 600.0), linear_x());
    let error = validate_document(&document).expect_err("zero-width bounds");
    assert!(matches!(error, ChartError::InvalidBounds { .. }));
}

#[test]
fn reversed_plot_band_raises_invalid_data() {
    let mut x = linear_x();
    x.plot_bands
        .push(gridline_rs::api::PlotBandOptions::new(10.0, 5.0));
    assert!(validate_document(&document_with(x)).is_err());
}

#[test]
fn excessive_label_precision_raises_invalid_data() {
    let mut x = linear_x();
    x.labels.number_format.precision = Some(13);
    assert!(validate_document(&document_with(x)).is_err());
}
