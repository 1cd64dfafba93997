use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}

#[must_use]
pub fn unix_millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis)
}

/// Rounds `value` to `decimal_places` using decimal arithmetic.
///
/// Formatting tick labels straight from binary floats can expose artifacts
/// like `0.30000000000000004`; snapping through `Decimal` keeps the chosen
/// precision exact. Non-representable inputs fall back to the raw value.
#[must_use]
pub fn snap_to_decimal_places(value: f64, decimal_places: u32) -> f64 {
    let Some(decimal) = Decimal::from_f64(value) else {
        return value;
    };
    decimal
        .round_dp(decimal_places.min(28))
        .to_f64()
        .unwrap_or(value)
}
