/// Number of fractional digits kept when a non-whole number is displayed.
pub const DISPLAY_DECIMALS: usize = 2;

/// Widens an `i64` to `f64`.
///
/// Used when integer arithmetic overflows and the computation is redone in
/// floating point. Values beyond `2^53` lose precision, which is accepted.
///
/// ## Example
/// ```
/// use blossy::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// ## Errors
/// Returns `Err(error)` if the value is not finite or falls outside the `i64`
/// range after truncation.
///
/// ## Example
/// ```
/// use blossy::util::num::f64_trunc_to_i64;
///
/// assert_eq!(f64_trunc_to_i64(90.9, "bad"), Ok(90));
/// assert_eq!(f64_trunc_to_i64(-90.9, "bad"), Ok(-90));
/// assert_eq!(f64_trunc_to_i64(f64::NAN, "bad"), Err("bad"));
/// assert_eq!(f64_trunc_to_i64(1e300, "bad"), Err("bad"));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_trunc_to_i64<E>(value: f64, error: E) -> Result<i64, E> {
    if !value.is_finite() {
        return Err(error);
    }
    let truncated = value.trunc();
    // `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(error);
    }
    Ok(truncated as i64)
}

/// Converts an `i64` exponent to `u32` for `checked_pow`.
///
/// Returns `None` when the exponent is negative or too large, in which case
/// the caller falls back to floating-point exponentiation.
///
/// ## Example
/// ```
/// use blossy::util::num::i64_to_u32;
///
/// assert_eq!(i64_to_u32(10), Some(10));
/// assert_eq!(i64_to_u32(-1), None);
/// assert_eq!(i64_to_u32(i64::MAX), None);
/// ```
#[must_use]
pub fn i64_to_u32(value: i64) -> Option<u32> {
    u32::try_from(value).ok()
}

/// Returns `true` if the float has no fractional part.
///
/// Non-finite values are never whole.
#[must_use]
pub fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Writes a whole float with every digit of its exact value.
///
/// Unlike `{}`, which stops at the shortest text that reads back as the same
/// float, this never pads with zeros that are not part of the value. Negative
/// zero is written as `0`.
///
/// ## Example
/// ```
/// use blossy::util::num::format_whole;
///
/// assert_eq!(format_whole(2f64.powi(64)), "18446744073709551616");
/// assert_eq!(format_whole(-0.0), "0");
/// ```
#[must_use]
pub fn format_whole(value: f64) -> String {
    format!("{:.0}", value + 0.0)
}

/// Formats a float the way results are shown to the user.
///
/// Whole values are written without a decimal point. Anything else is rounded
/// to [`DISPLAY_DECIMALS`] fractional digits (to nearest, on the exact binary
/// value) and trailing zeros are dropped down to a single one, so `2.999`
/// reads `3.0` and stays recognizably fractional.
///
/// ## Example
/// ```
/// use blossy::util::num::format_for_display;
///
/// assert_eq!(format_for_display(4.0), "4");
/// assert_eq!(format_for_display(0.1 + 0.2), "0.3");
/// assert_eq!(format_for_display(10.0 / 3.0), "3.33");
/// assert_eq!(format_for_display(2.999), "3.0");
/// assert_eq!(format_for_display(0.125), "0.12");
/// ```
#[must_use]
pub fn format_for_display(value: f64) -> String {
    if is_whole(value) {
        return format_whole(value);
    }
    let fixed = format!("{value:.prec$}", prec = DISPLAY_DECIMALS);
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') { format!("{trimmed}0") } else { trimmed.to_string() }
}
