/// Lexical errors.
///
/// Raised by the tokenizer when a character matches none of the token
/// patterns.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while an expression is being
/// parsed. This covers grammar violations (an operator in the wrong place,
/// premature end of input) as well as type-rule violations such as adding a
/// number to a duration. Both are reported through this one channel, so the
/// caller does not need to tell syntactic failures from semantic ones.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while arithmetic is actually carried out, either
/// by the direct evaluator or by the stack-machine stepper: division by zero,
/// overflow of a duration, and results that are not finite numbers.
pub mod runtime_error;
/// The umbrella error returned by the public entry points.
pub mod engine_error;
/// Errors of the small file and number utilities.
pub mod tool_error;

pub use engine_error::{EngineError, EngineResult};
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use tool_error::ToolError;
