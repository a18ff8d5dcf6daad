/// Binary operator evaluation logic.
///
/// Dispatches on operand types and implements number and duration
/// arithmetic, including the overflow and division rules.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements prefix `+` (identity) and `-` (negation).
pub mod unary;

/// Core evaluation logic.
///
/// Contains the `DirectEvaluator` reduction strategy, the evaluator's result
/// type, and the token-level `evaluate` entry point.
pub mod core;
