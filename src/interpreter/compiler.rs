/// The postfix compiler and its token-level `compile` entry point.
pub mod core;

/// Items of a postfix sequence.
///
/// Defines `PostfixItem` and the closed set of operator markers the stepper
/// dispatches on.
pub mod postfix;
