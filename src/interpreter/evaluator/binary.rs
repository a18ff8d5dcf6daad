/// Dispatch of binary operations on operand types.
pub mod core;

/// Arithmetic on plain numbers.
///
/// Integers stay exact while they can; an overflowing integer result widens
/// to a float. Division always produces a float.
pub mod number;

/// Arithmetic involving durations.
///
/// Durations add to and subtract from durations, and are scaled or divided by
/// numbers. Results are truncated toward zero to whole seconds.
pub mod duration;
