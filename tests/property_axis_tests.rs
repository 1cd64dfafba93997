use gridline_rs::api::{AxisKind, AxisOptions, ChartDocument, prepare_axis_frame};
use gridline_rs::core::{ChartBounds, DomainValue, LinearScale};
use gridline_rs::measure::{HeuristicTextMeasurer, TextSize, rotated_size};
use proptest::prelude::*;

proptest! {
    #[test]
    fn adjacent_x_ticks_keep_line_height_spacing_or_collapse(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        width in 40.0f64..2_000.0,
        line_height in 8.0f64..48.0
    ) {
        let mut x = AxisOptions::x(AxisKind::Linear {
            data_min: domain_start,
            data_max: domain_start + domain_span,
        });
        x.labels.line_height_px = Some(line_height);

        let document = ChartDocument::new(ChartBounds::new(width, 300.0), x);
        let frame = prepare_axis_frame(&document, &HeuristicTextMeasurer).expect("layout");
        let ticks = &frame.x_axis.rows[0].ticks;

        if ticks.len() > 1 {
            for pair in ticks.windows(2) {
                prop_assert!((pair[1].position - pair[0].position).abs() >= line_height);
            }
        }
    }

    #[test]
    fn band_ticks_are_an_evenly_strided_subsequence(
        category_count in 1usize..60,
        width in 60.0f64..1_200.0
    ) {
        let categories: Vec<String> = (0..category_count).map(|i| format!("c{i}")).collect();
        let x = AxisOptions::x(AxisKind::Category { categories });
        let document = ChartDocument::new(ChartBounds::new(width, 300.0), x);
        let frame = prepare_axis_frame(&document, &HeuristicTextMeasurer).expect("layout");

        let indices: Vec<usize> = frame.x_axis.rows[0]
            .ticks
            .iter()
            .map(|tick| match tick.value {
                DomainValue::Category(index) => index,
                other => panic!("unexpected domain value {other:?}"),
            })
            .collect();

        prop_assert!(!indices.is_empty());
        prop_assert_eq!(indices[0], 0);
        prop_assert!(indices.iter().all(|index| *index < category_count));
        if indices.len() > 2 {
            let stride = indices[1] - indices[0];
            for pair in indices.windows(2) {
                prop_assert_eq!(pair[1] - pair[0], stride);
            }
        }
    }

    #[test]
    fn rotation_projection_preserves_and_swaps_extents(
        width in 1.0f64..500.0,
        height in 1.0f64..100.0
    ) {
        let size = TextSize { width, height };

        let unrotated = rotated_size(size, 0.0);
        prop_assert_eq!(unrotated.width, width);
        prop_assert_eq!(unrotated.height, height);

        for angle in [90.0, -90.0] {
            let swapped = rotated_size(size, angle);
            prop_assert!((swapped.width - height).abs() <= 1e-9 * height.max(1.0));
            prop_assert!((swapped.height - width).abs() <= 1e-9 * width.max(1.0));
        }
    }

    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0,
        range_end in 1.0f64..4_000.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new((domain_start, domain_end), (0.0, range_end))
            .expect("valid scale");
        let px = scale.position(value);
        let recovered = scale.invert(px);

        prop_assert!((recovered - value).abs() <= 1e-6 * domain_span.max(1.0));
    }
}
