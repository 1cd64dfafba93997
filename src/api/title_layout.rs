use smallvec::SmallVec;

use crate::measure::{TextMeasurer, TextStyle};

use super::label_layout::{ellipsize_to_width, wrap_text_rows};

/// Wraps a title into at most `max_rows` rows of `max_width_px`.
///
/// When wrapping produces more rows than allowed, the overflow rows' text
/// is merged into the last allowed row, which is then ellipsized to fit.
pub(super) fn layout_title_rows(
    text: &str,
    max_width_px: f64,
    max_rows: usize,
    style: TextStyle,
    measurer: &dyn TextMeasurer,
) -> SmallVec<[String; 2]> {
    let max_rows = max_rows.max(1);
    let mut rows = wrap_text_rows(text, max_width_px, style, measurer);
    if rows.len() <= max_rows {
        return rows;
    }

    let merged = rows[max_rows - 1..].join(" ");
    rows.truncate(max_rows - 1);
    let last = ellipsize_to_width(&merged, max_width_px, style, measurer);
    rows.push(last.display);
    rows
}

#[cfg(test)]
mod tests {
    use crate::measure::{HeuristicTextMeasurer, TextMeasurer, TextStyle};

    use super::layout_title_rows;

    const STYLE: TextStyle = TextStyle {
        font_size_px: 12.0,
        bold: false,
    };

    #[test]
    fn short_titles_stay_on_one_row() {
        let measurer = HeuristicTextMeasurer;
        let rows = layout_title_rows("Revenue", 400.0, 2, STYLE, &measurer);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], "Revenue");
    }

    #[test]
    fn overflow_rows_merge_into_the_last_allowed_row() {
        let measurer = HeuristicTextMeasurer;
        let title = "Quarterly revenue by geographic region and product line";
        // Narrow enough to wrap into 4+ rows before capping.
        let uncapped = layout_title_rows(title, 90.0, 10, STYLE, &measurer);
        assert!(uncapped.len() >= 4);

        let rows = layout_title_rows(title, 90.0, 2, STYLE, &measurer);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], uncapped[0]);
        assert!(rows[1].ends_with('…'));
        assert!(measurer.measure(&rows[1], STYLE).width <= 90.0);
    }

    #[test]
    fn row_cap_of_zero_is_treated_as_one() {
        let measurer = HeuristicTextMeasurer;
        let rows = layout_title_rows("alpha beta gamma delta epsilon", 60.0, 0, STYLE, &measurer);
        assert_eq!(rows.len(), 1);
    }
}
