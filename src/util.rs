/// Numeric conversion helpers.
///
/// This module provides the conversions between `i64` and `f64` used by the
/// value domain: widening integers that overflowed, truncating float seconds
/// back to whole seconds without silent wrap-around, and the rounding used
/// when numbers are displayed.
///
/// Fallible conversions take the error to return as a parameter, so callers
/// decide how a failure is reported.
pub mod num;
