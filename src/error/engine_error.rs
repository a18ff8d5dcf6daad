use crate::{
    error::{LexError, ParseError, RuntimeError},
    interpreter::value::kind::ValueKind,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure of one evaluation, compilation or trace.
///
/// Every error is terminal for the expression at hand; the engine never
/// returns a partial result.
pub enum EngineError {
    /// The tokenizer met an unrecognized character.
    Lex(LexError),
    /// The grammar or a type rule was violated.
    Parse(ParseError),
    /// Arithmetic failed while the value was being computed.
    Runtime(RuntimeError),
    /// The expression is well formed, but its result has the wrong type for
    /// the entry point that was used.
    ResultTypeMismatch {
        /// The type the entry point accepts.
        expected: ValueKind,
        /// The type the expression produced.
        found:    ValueKind,
    },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::ResultTypeMismatch { expected: ValueKind::Duration,
                                       .. } => write!(f, "Result is not time (use 'calc' instead)"),
            Self::ResultTypeMismatch { expected: ValueKind::Number,
                                       .. } => write!(f, "Result is time (use 'calct' instead)"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::ResultTypeMismatch { .. } => None,
        }
    }
}

impl From<LexError> for EngineError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for EngineError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for EngineError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

/// Result type of the public entry points, the grammar, and the stepper.
pub type EngineResult<T> = Result<T, EngineError>;
