use criterion::{Criterion, criterion_group, criterion_main};
use gridline_rs::api::{AxisKind, AxisOptions, ChartDocument, SplitOptions, prepare_axis_frame};
use gridline_rs::core::{ChartBounds, LinearScale};
use gridline_rs::measure::HeuristicTextMeasurer;
use std::hint::black_box;

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 10_000.0), (0.0, 1_920.0)).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.position(black_box(4_321.123));
            let _ = black_box(scale.invert(px));
        })
    });
}

fn bench_prepare_single_plot_frame(c: &mut Criterion) {
    let x = AxisOptions::x(AxisKind::Linear {
        data_min: 0.0,
        data_max: 10_000.0,
    });
    let y = AxisOptions::y(AxisKind::Linear {
        data_min: 0.0,
        data_max: 2_500.0,
    });
    let document = ChartDocument::new(ChartBounds::new(1_920.0, 1_080.0), x).with_y_axis(y);
    let measurer = HeuristicTextMeasurer;

    c.bench_function("prepare_single_plot_frame", |b| {
        b.iter(|| prepare_axis_frame(black_box(&document), &measurer).expect("layout"))
    });
}

fn bench_prepare_split_category_frame(c: &mut Criterion) {
    let categories: Vec<String> = (0..120).map(|i| format!("category {i}")).collect();
    let x = AxisOptions::x(AxisKind::Category { categories });
    let y = AxisOptions::y(AxisKind::Linear {
        data_min: 0.0,
        data_max: 1.0,
    });
    let document = ChartDocument::new(ChartBounds::new(1_600.0, 900.0), x)
        .with_split(SplitOptions {
            plot_count: 3,
            gap_px: 12.0,
        })
        .with_y_axis(y);
    let measurer = HeuristicTextMeasurer;

    c.bench_function("prepare_split_category_frame", |b| {
        b.iter(|| prepare_axis_frame(black_box(&document), &measurer).expect("layout"))
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_prepare_single_plot_frame,
    bench_prepare_split_category_frame
);
criterion_main!(benches);
