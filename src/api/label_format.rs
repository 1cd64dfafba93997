use crate::core::primitives::{snap_to_decimal_places, unix_millis_to_datetime};

use super::axis_config::{LabelOptions, MagnitudeUnit, NumberFormatOptions};

const SECOND_MS: f64 = 1_000.0;
const MINUTE_MS: f64 = 60_000.0;
const DAY_MS: f64 = 86_400_000.0;
const MONTH_MS: f64 = 2_629_800_000.0;
const YEAR_MS: f64 = 31_557_600_000.0;

/// Default chrono pattern for a given spacing between adjacent ticks.
///
/// Coarser spacing yields coarser formats, down to millisecond precision
/// for sub-second spacing.
pub(super) fn default_date_pattern(spacing_ms: f64) -> &'static str {
    if spacing_ms >= YEAR_MS {
        "%Y"
    } else if spacing_ms >= MONTH_MS {
        "%b %Y"
    } else if spacing_ms >= DAY_MS {
        "%b %d"
    } else if spacing_ms >= MINUTE_MS {
        "%H:%M"
    } else if spacing_ms >= SECOND_MS {
        "%H:%M:%S"
    } else {
        "%H:%M:%S%.3f"
    }
}

pub(super) fn format_datetime_label(
    millis: i64,
    options: &LabelOptions,
    spacing_ms: f64,
) -> String {
    let Some(dt) = unix_millis_to_datetime(millis) else {
        return millis.to_string();
    };
    let pattern = options
        .date_format
        .as_deref()
        .unwrap_or_else(|| default_date_pattern(spacing_ms));
    dt.format(pattern).to_string()
}

/// Formats a linear/logarithmic tick value.
///
/// Pure function of (options, value, step): no locale state is consulted.
/// When no unit is configured and the step is known, a magnitude unit is
/// auto-selected so labels like `2000000` render as `2m`.
pub(super) fn format_number_label(
    value: f64,
    format: NumberFormatOptions,
    step_abs: f64,
) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    let unit = format.unit.or_else(|| auto_magnitude_unit(step_abs));
    let divisor = unit.map_or(1.0, MagnitudeUnit::divisor);
    let scaled = value / divisor;
    let scaled_step = step_abs / divisor;

    let precision = format
        .precision
        .unwrap_or_else(|| precision_from_step(scaled_step));
    let snapped = snap_to_decimal_places(scaled, precision);
    let mut text = format!("{snapped:.prec$}", prec = precision as usize);

    if let Some(separator) = format.thousands_separator {
        text = insert_thousands_separator(&text, separator);
    }
    if let Some(unit) = unit {
        text.push_str(unit.suffix());
    }
    text
}

fn auto_magnitude_unit(step_abs: f64) -> Option<MagnitudeUnit> {
    if !step_abs.is_finite() || step_abs <= 0.0 {
        return None;
    }
    if step_abs >= 1e12 {
        Some(MagnitudeUnit::Trillion)
    } else if step_abs >= 1e9 {
        Some(MagnitudeUnit::Billion)
    } else if step_abs >= 1e6 {
        Some(MagnitudeUnit::Million)
    } else if step_abs >= 1e3 {
        Some(MagnitudeUnit::Thousand)
    } else {
        None
    }
}

/// Decimal places needed to distinguish values one step apart.
fn precision_from_step(step: f64) -> u32 {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let text = format!("{:.12}", step.abs());
    let Some((_, fraction)) = text.split_once('.') else {
        return 0;
    };
    (fraction.trim_end_matches('0').len() as u32).min(12)
}

fn insert_thousands_separator(text: &str, separator: char) -> String {
    let (integer_part, fraction_part) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_ref(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(text.len() + digits.len() / 3);
    grouped.push_str(sign);
    let offset = digits.len() % 3;
    for (index, ch) in digits.char_indices() {
        if index > 0 && index % 3 == offset {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction_part {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::super::axis_config::{LabelOptions, MagnitudeUnit, NumberFormatOptions};
    use super::{default_date_pattern, format_datetime_label, format_number_label};

    #[test]
    fn coarser_spacing_selects_coarser_date_patterns() {
        assert_eq!(default_date_pattern(40e9), "%Y");
        assert_eq!(default_date_pattern(3e9), "%b %Y");
        assert_eq!(default_date_pattern(2.0 * 86_400_000.0), "%b %d");
        assert_eq!(default_date_pattern(120_000.0), "%H:%M");
        assert_eq!(default_date_pattern(5_000.0), "%H:%M:%S");
        assert_eq!(default_date_pattern(250.0), "%H:%M:%S%.3f");
    }

    #[test]
    fn explicit_date_format_overrides_spacing_default() {
        let mut options = LabelOptions::default();
        options.date_format = Some("%Y/%m".to_owned());
        // 2021-03-01T00:00:00Z
        let text = format_datetime_label(1_614_556_800_000, &options, 40e9);
        assert_eq!(text, "2021/03");
    }

    #[test]
    fn magnitude_unit_is_auto_selected_from_step() {
        let format = NumberFormatOptions::default();
        assert_eq!(format_number_label(2_000_000.0, format, 1_000_000.0), "2m");
        assert_eq!(format_number_label(1_500.0, format, 500.0), "1.5k");
        assert_eq!(format_number_label(12.0, format, 1.0), "12");
    }

    #[test]
    fn explicit_unit_and_precision_are_respected() {
        let format = NumberFormatOptions {
            precision: Some(1),
            unit: Some(MagnitudeUnit::Thousand),
            thousands_separator: None,
        };
        assert_eq!(format_number_label(2_500.0, format, 500.0), "2.5k");
    }

    #[test]
    fn fractional_steps_keep_enough_decimals() {
        let format = NumberFormatOptions::default();
        assert_eq!(format_number_label(0.30, format, 0.05), "0.30");
        assert_eq!(format_number_label(0.25, format, 0.05), "0.25");
    }

    #[test]
    fn thousands_separator_groups_integer_digits() {
        let format = NumberFormatOptions {
            precision: Some(2),
            unit: None,
            thousands_separator: Some(','),
        };
        assert_eq!(format_number_label(1_234_567.5, format, 0.01), "1,234,567.50");
        assert_eq!(format_number_label(-1_234.0, format, 0.01), "-1,234.00");
    }
}
