use chrono::{DateTime, Datelike, Duration, Months, TimeZone, Timelike, Utc};

use crate::core::primitives::unix_millis_to_datetime;

/// Calendar interval granularities, finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum TimeInterval {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeInterval {
    /// Iteration order used when planning: coarsest interval wins ties.
    pub(super) const COARSEST_FIRST: [Self; 8] = [
        Self::Year,
        Self::Month,
        Self::Week,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::Millisecond,
    ];

    /// Mean duration used for tick-count estimation only; actual tick
    /// instants come from calendar arithmetic.
    pub(super) fn approx_duration_ms(self) -> f64 {
        match self {
            Self::Millisecond => 1.0,
            Self::Second => 1_000.0,
            Self::Minute => 60_000.0,
            Self::Hour => 3_600_000.0,
            Self::Day => 86_400_000.0,
            Self::Week => 604_800_000.0,
            Self::Month => 2_629_800_000.0,
            Self::Year => 31_557_600_000.0,
        }
    }

    /// Step multiples that read naturally for this interval.
    pub(super) fn nice_steps(self) -> &'static [u32] {
        match self {
            Self::Millisecond => &[1, 2, 5, 10, 20, 25, 50, 100, 200, 500],
            Self::Second | Self::Minute => &[1, 2, 5, 10, 15, 20, 30],
            Self::Hour => &[1, 2, 3, 4, 6, 8, 12],
            Self::Day | Self::Week => &[1, 2],
            Self::Month => &[1, 2, 3, 4, 6],
            Self::Year => &[1, 2, 5, 10, 20, 25, 50, 100, 200, 500],
        }
    }
}

/// A chosen interval/step pair for one datetime axis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct TimeTickPlan {
    pub interval: TimeInterval,
    pub step: u32,
}

impl TimeTickPlan {
    pub(super) const FALLBACK: Self = Self {
        interval: TimeInterval::Millisecond,
        step: 1,
    };

    /// Approximate spacing between adjacent ticks, for label formatting.
    pub(super) fn spacing_ms(self) -> f64 {
        self.interval.approx_duration_ms() * f64::from(self.step)
    }
}

/// Upper bound on datetime tick count for the available width.
///
/// Derived from the label pixel width plus padding, capped by the number
/// of distinct data timestamps when known.
pub(super) fn max_time_ticks(
    extent_px: f64,
    label_width_px: f64,
    padding_px: f64,
    distinct_timestamps: Option<usize>,
) -> usize {
    if !extent_px.is_finite() || extent_px <= 0.0 {
        return 0;
    }
    let slot = (label_width_px + padding_px).max(1.0);
    let raw = (extent_px / slot).floor() as usize + 1;
    let capped = match distinct_timestamps {
        Some(count) => raw.min(count.max(1)),
        None => raw,
    };
    capped.min(50)
}

/// Picks the coarsest interval, then the smallest nice step within it,
/// whose estimated tick count for the span lands in `[2, max_ticks]`.
///
/// Returns the millisecond fallback when no combination qualifies.
pub(super) fn plan_time_ticks(span_ms: f64, max_ticks: usize) -> TimeTickPlan {
    if !span_ms.is_finite() || span_ms <= 0.0 || max_ticks < 2 {
        return TimeTickPlan::FALLBACK;
    }

    for interval in TimeInterval::COARSEST_FIRST {
        for &step in interval.nice_steps() {
            let duration = interval.approx_duration_ms() * f64::from(step);
            let estimated = (span_ms / duration).floor() as usize + 1;
            if (2..=max_ticks).contains(&estimated) {
                return TimeTickPlan { interval, step };
            }
        }
    }

    tracing::debug!(span_ms, max_ticks, "no calendar interval fits; using millisecond ticks");
    TimeTickPlan::FALLBACK
}

const MAX_GENERATED_TIME_TICKS: usize = 1_000;

/// Generates tick instants snapped to calendar boundaries, clipped to
/// `[start_ms, end_ms]`.
pub(super) fn generate_time_ticks(start_ms: i64, end_ms: i64, plan: TimeTickPlan) -> Vec<i64> {
    if end_ms < start_ms || plan.step == 0 {
        return Vec::new();
    }
    let Some(start_dt) = unix_millis_to_datetime(start_ms) else {
        return Vec::new();
    };
    let Some(mut cursor) = floor_to_plan(start_dt, plan) else {
        return Vec::new();
    };

    let mut ticks = Vec::new();
    for _ in 0..MAX_GENERATED_TIME_TICKS {
        let millis = cursor.timestamp_millis();
        if millis > end_ms {
            break;
        }
        if millis >= start_ms {
            ticks.push(millis);
        }
        let Some(next) = advance(cursor, plan) else {
            break;
        };
        if next <= cursor {
            break;
        }
        cursor = next;
    }
    ticks
}

fn floor_to_plan(dt: DateTime<Utc>, plan: TimeTickPlan) -> Option<DateTime<Utc>> {
    let step = i64::from(plan.step);
    match plan.interval {
        TimeInterval::Year => {
            let year = i64::from(dt.year());
            let aligned = year - year.rem_euclid(step);
            Utc.with_ymd_and_hms(i32::try_from(aligned).ok()?, 1, 1, 0, 0, 0)
                .single()
        }
        TimeInterval::Month => {
            let month0 = i64::from(dt.month0());
            let aligned = month0 - month0.rem_euclid(step);
            Utc.with_ymd_and_hms(dt.year(), u32::try_from(aligned).ok()? + 1, 1, 0, 0, 0)
                .single()
        }
        TimeInterval::Week => {
            let midnight = Utc
                .with_ymd_and_hms(dt.year(), dt.month(), dt.day(), 0, 0, 0)
                .single()?;
            let days_back = i64::from(dt.weekday().num_days_from_monday());
            midnight.checked_sub_signed(Duration::days(days_back))
        }
        TimeInterval::Day => Utc
            .with_ymd_and_hms(dt.year(), dt.month(), dt.day(), 0, 0, 0)
            .single(),
        TimeInterval::Hour => {
            let hour = i64::from(dt.hour());
            let aligned = hour - hour.rem_euclid(step);
            Utc.with_ymd_and_hms(
                dt.year(),
                dt.month(),
                dt.day(),
                u32::try_from(aligned).ok()?,
                0,
                0,
            )
            .single()
        }
        TimeInterval::Minute => {
            let minute = i64::from(dt.minute());
            let aligned = minute - minute.rem_euclid(step);
            Utc.with_ymd_and_hms(
                dt.year(),
                dt.month(),
                dt.day(),
                dt.hour(),
                u32::try_from(aligned).ok()?,
                0,
            )
            .single()
        }
        TimeInterval::Second => {
            let second = i64::from(dt.second());
            let aligned = second - second.rem_euclid(step);
            Utc.with_ymd_and_hms(
                dt.year(),
                dt.month(),
                dt.day(),
                dt.hour(),
                dt.minute(),
                u32::try_from(aligned).ok()?,
            )
            .single()
        }
        TimeInterval::Millisecond => {
            let millis = dt.timestamp_millis();
            unix_millis_to_datetime(millis - millis.rem_euclid(step))
        }
    }
}

fn advance(dt: DateTime<Utc>, plan: TimeTickPlan) -> Option<DateTime<Utc>> {
    let step = i64::from(plan.step);
    match plan.interval {
        TimeInterval::Year => dt.with_year(dt.year().checked_add(i32::try_from(step).ok()?)?),
        TimeInterval::Month => dt.checked_add_months(Months::new(plan.step)),
        TimeInterval::Week => dt.checked_add_signed(Duration::weeks(step)),
        TimeInterval::Day => dt.checked_add_signed(Duration::days(step)),
        TimeInterval::Hour => dt.checked_add_signed(Duration::hours(step)),
        TimeInterval::Minute => dt.checked_add_signed(Duration::minutes(step)),
        TimeInterval::Second => dt.checked_add_signed(Duration::seconds(step)),
        TimeInterval::Millisecond => dt.checked_add_signed(Duration::milliseconds(step)),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{
        TimeInterval, TimeTickPlan, generate_time_ticks, max_time_ticks, plan_time_ticks,
    };

    fn ms(year: i32, month: u32, day: u32) -> i64 {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn three_year_span_plans_yearly_ticks() {
        let start = ms(2020, 1, 1);
        let end = ms(2023, 1, 1);
        let plan = plan_time_ticks((end - start) as f64, 6);
        assert_eq!(plan.interval, TimeInterval::Year);
        assert_eq!(plan.step, 1);

        let ticks = generate_time_ticks(start, end, plan);
        assert_eq!(ticks.len(), 4);
        assert_eq!(ticks[0], start);
        assert_eq!(ticks[3], end);
    }

    #[test]
    fn five_minute_span_plans_minute_ticks() {
        let plan = plan_time_ticks(300_000.0, 6);
        assert_eq!(plan.interval, TimeInterval::Minute);
        assert_eq!(plan.step, 1);
    }

    #[test]
    fn coarser_interval_wins_over_finer_steps() {
        // 60 minutes fits two hourly ticks, which beats minute-level steps.
        let plan = plan_time_ticks(3_600_000.0, 5);
        assert_eq!(plan.interval, TimeInterval::Hour);
        assert_eq!(plan.step, 1);
    }

    #[test]
    fn tight_budget_prefers_larger_steps() {
        // 50 minutes with room for at most 4 ticks: 15-minute steps fit.
        let plan = plan_time_ticks(3_000_000.0, 4);
        assert_eq!(plan.interval, TimeInterval::Minute);
        assert_eq!(plan.step, 15);
    }

    #[test]
    fn unplannable_span_falls_back_to_milliseconds() {
        assert_eq!(plan_time_ticks(0.5, 6), TimeTickPlan::FALLBACK);
        assert_eq!(plan_time_ticks(-1.0, 6), TimeTickPlan::FALLBACK);
    }

    #[test]
    fn ticks_snap_to_month_starts() {
        let start = Utc
            .with_ymd_and_hms(2024, 1, 17, 9, 30, 0)
            .unwrap()
            .timestamp_millis();
        let end = ms(2024, 6, 1);
        let plan = TimeTickPlan {
            interval: TimeInterval::Month,
            step: 1,
        };
        let ticks = generate_time_ticks(start, end, plan);
        assert_eq!(ticks.first().copied(), Some(ms(2024, 2, 1)));
        assert_eq!(ticks.last().copied(), Some(ms(2024, 6, 1)));
    }

    #[test]
    fn hour_steps_align_to_step_multiples() {
        let start = Utc
            .with_ymd_and_hms(2024, 3, 5, 7, 12, 0)
            .unwrap()
            .timestamp_millis();
        let end = Utc
            .with_ymd_and_hms(2024, 3, 5, 23, 0, 0)
            .unwrap()
            .timestamp_millis();
        let plan = TimeTickPlan {
            interval: TimeInterval::Hour,
            step: 6,
        };
        let ticks = generate_time_ticks(start, end, plan);
        let expected: Vec<i64> = [12, 18]
            .iter()
            .map(|h| {
                Utc.with_ymd_and_hms(2024, 3, 5, *h, 0, 0)
                    .unwrap()
                    .timestamp_millis()
            })
            .collect();
        assert_eq!(ticks, expected);
    }

    #[test]
    fn width_budget_caps_tick_count() {
        assert_eq!(max_time_ticks(0.0, 60.0, 4.0, None), 0);
        assert_eq!(max_time_ticks(640.0, 60.0, 4.0, None), 11);
        assert_eq!(max_time_ticks(640.0, 60.0, 4.0, Some(3)), 3);
    }
}
