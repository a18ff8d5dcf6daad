//! # blossy
//!
//! blossy is a small toolbox of command-line utilities built around an
//! expression engine for numbers and clock-style durations.
//!
//! The engine evaluates one arithmetic expression at a time, either directly
//! or by compiling it to postfix form and replaying it step by step on a
//! stack, which is what `calc -v` shows.
//!
//! ```
//! assert_eq!(blossy::evaluate_number_expression("(2 + 3) * 4").unwrap(), "20");
//! assert_eq!(blossy::evaluate_time_expression("1:00:00 + 30:00").unwrap(), "1:30:00");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EngineResult,
    interpreter::{
        compiler::core::compile, domain::Domain, evaluator::core::evaluate, lexer::tokenize_all,
        stepper::Stepper,
    },
};

/// Provides unified error types for the engine and the utilities.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, evaluating or stepping through an expression, and while running
/// the file and number utilities.
///
/// # Responsibilities
/// - Defines one error enum per failure family.
/// - Attaches source positions to engine errors where they are known.
/// - Implements `Display` with the exact messages shown to users.
pub mod error;
/// The expression engine.
///
/// This module ties together lexing, parsing, evaluation, compilation and
/// stepping.
pub mod interpreter;
/// Operators shared by the grammar, the evaluator and the stepper.
pub mod operator;
/// The file, percentage and random-number utilities.
///
/// These are thin wrappers over the file system and `rand`, exposed as
/// functions so the binary only parses arguments and prints.
pub mod tools;
/// General utilities for safe numeric conversion and display.
///
/// # Responsibilities
/// - Convert between `i64` and `f64` without silent data loss.
/// - Round floats for display.
pub mod util;

/// Evaluates `text` and formats the result for display.
///
/// Numbers are shown without a decimal point when whole and rounded to two
/// fractional digits otherwise; durations are shown as `H:MM:SS`.
///
/// # Errors
/// Returns the first lexical, syntax, type or arithmetic error, or
/// `EngineError::ResultTypeMismatch` if the result is outside `domain`.
///
/// # Examples
/// ```
/// use blossy::{evaluate_expression, interpreter::domain::Domain};
///
/// assert_eq!(evaluate_expression("7 / 2", Domain::Mixed).unwrap(), "3.5");
/// assert_eq!(evaluate_expression("-1:30", Domain::Mixed).unwrap(), "-0:01:30");
///
/// let error = evaluate_expression("1:00 * 1:00", Domain::Mixed).unwrap_err();
/// assert_eq!(error.to_string(), "Time being multiplied by time near index 5");
/// ```
pub fn evaluate_expression(text: &str, domain: Domain) -> EngineResult<String> {
    tracing::debug!(text, ?domain, "evaluating expression");
    let tokens = tokenize_all(text)?;
    let value = evaluate(&tokens, domain)?;
    Ok(value.to_string())
}

/// Evaluates an expression whose result must be a number.
///
/// # Errors
/// As [`evaluate_expression`]; a duration result is rejected.
///
/// # Examples
/// ```
/// use blossy::evaluate_number_expression;
///
/// assert_eq!(evaluate_number_expression("2 + 3 * 4").unwrap(), "14");
/// assert!(evaluate_number_expression("1:30").is_err());
/// ```
pub fn evaluate_number_expression(text: &str) -> EngineResult<String> {
    evaluate_expression(text, Domain::Number)
}

/// Evaluates an expression whose result must be a duration.
///
/// # Errors
/// As [`evaluate_expression`]; a number result is rejected.
pub fn evaluate_time_expression(text: &str) -> EngineResult<String> {
    evaluate_expression(text, Domain::Time)
}

/// Compiles `text` to postfix form and returns a stepper over it.
///
/// Syntax and type errors, and a result type outside `domain`, are reported
/// here, before any step is taken. Arithmetic errors are reported by the
/// stepper at the step that causes them.
///
/// # Errors
/// Returns the first lexical, syntax or type error, or
/// `EngineError::ResultTypeMismatch`.
pub fn compile_and_trace_in(text: &str, domain: Domain) -> EngineResult<Stepper> {
    tracing::debug!(text, ?domain, "compiling expression");
    let tokens = tokenize_all(text)?;
    let postfix = compile(&tokens, domain)?;
    Ok(Stepper::new(postfix))
}

/// Compiles `text` in number mode, or time mode when `time_mode` is set, and
/// returns a stepper over it.
///
/// # Errors
/// As [`compile_and_trace_in`].
///
/// # Examples
/// ```
/// use blossy::compile_and_trace;
///
/// let last = compile_and_trace("2 * (1 + 2)", false).unwrap().last().unwrap().unwrap();
/// assert_eq!(last.operation.as_deref(), Some("The result is 6"));
/// ```
pub fn compile_and_trace(text: &str, time_mode: bool) -> EngineResult<Stepper> {
    compile_and_trace_in(text, Domain::from_time_mode(time_mode))
}
