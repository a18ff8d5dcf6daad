use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::core::EvalResult,
        lexer::{Token, TokenKind},
        value::{duration::Duration, kind::ValueKind, number::Number},
    },
};

/// Represents a fully computed value.
///
/// A value is either a plain number or a duration. It is never partially
/// constructed: every reduction either yields a complete `Value` or an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An integer or floating-point number.
    Number(Number),
    /// A clock-style duration.
    Duration(Duration),
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Self::Duration(d)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(Number::Integer(n))
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Self::Number(Number::Real(r))
    }
}

impl Value {
    /// Returns the type of the value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Number(_) => ValueKind::Number,
            Self::Duration(_) => ValueKind::Duration,
        }
    }

    /// Builds the value of a literal token.
    ///
    /// # Errors
    /// - `ParseError::LiteralTooLarge` if the literal does not fit: an integer
    ///   beyond `i64`, a float that is not finite, or a duration whose total
    ///   seconds overflow.
    /// - `ParseError::UnexpectedToken` if the token is not a literal.
    ///
    /// # Example
    /// ```
    /// use blossy::interpreter::{lexer::tokenize, value::core::Value};
    ///
    /// let token = tokenize("1:00:30").next().unwrap().unwrap();
    /// let value = Value::from_literal(&token).unwrap();
    ///
    /// assert_eq!(value.to_string(), "1:00:30");
    /// ```
    pub fn from_literal(token: &Token) -> Result<Self, ParseError> {
        let too_large = || ParseError::LiteralTooLarge { literal:  token.lexeme.clone(),
                                                         position: token.position, };
        match token.kind {
            TokenKind::IntConst => token.lexeme
                                        .parse::<i64>()
                                        .map(Self::from)
                                        .map_err(|_| too_large()),
            TokenKind::FloatConst => match token.lexeme.parse::<f64>() {
                Ok(r) if r.is_finite() => Ok(Self::from(r)),
                _ => Err(too_large()),
            },
            TokenKind::TimeConst => Duration::parse(&token.lexeme).map(Self::from)
                                                                  .ok_or_else(too_large),
            _ => Err(ParseError::UnexpectedToken { token:    token.lexeme.clone(),
                                                   position: token.position, }),
        }
    }

    /// Reads a value back from the text the stepper keeps on its stack.
    ///
    /// Text containing `:` is a duration, anything else a number.
    ///
    /// # Errors
    /// Returns `RuntimeError::MalformedOperand` if the text is neither.
    ///
    /// # Example
    /// ```
    /// use blossy::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::parse_raw("-0:01:30").unwrap().to_string(), "-0:01:30");
    /// assert_eq!(Value::parse_raw("2.5").unwrap(), Value::from(2.5));
    /// assert!(Value::parse_raw("$").is_err());
    /// ```
    pub fn parse_raw(raw: &str) -> EvalResult<Self> {
        let parsed = if raw.contains(':') {
            Duration::parse(raw).map(Self::from)
        } else {
            Number::parse(raw).map(Self::from)
        };
        parsed.ok_or_else(|| RuntimeError::MalformedOperand { operand: raw.to_string() })
    }

    /// Renders the value for the stepper's stack.
    ///
    /// Numbers keep full precision (see [`Number::to_raw`]); durations are
    /// always written as `H:MM:SS`.
    #[must_use]
    pub fn to_raw(&self, trim: bool) -> String {
        match self {
            Self::Number(n) => n.to_raw(trim),
            Self::Duration(d) => d.to_string(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Duration(d) => write!(f, "{d}"),
        }
    }
}
