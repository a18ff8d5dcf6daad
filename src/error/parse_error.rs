use crate::{interpreter::value::kind::ValueKind, operator::BinaryOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing an expression.
pub enum ParseError {
    /// Found a token the grammar does not allow at this point.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// Reached the end of input while the grammar still expected a token.
    UnexpectedEndOfInput,
    /// The operand types are not legal for the operator.
    IncompatibleOperands {
        /// The operator being applied.
        operator: BinaryOperator,
        /// Type of the left operand.
        left:     ValueKind,
        /// Type of the right operand.
        right:    ValueKind,
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// Parentheses or prefix operators were nested deeper than the parser
    /// allows.
    NestingTooDeep {
        /// Byte offset of the token at which the limit was reached.
        position: usize,
    },
    /// A literal value was too large to be represented.
    LiteralTooLarge {
        /// The literal as written in the source.
        literal:  String,
        /// Byte offset of the literal in the source.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};
        use ValueKind::{Duration, Number};

        match self {
            Self::UnexpectedToken { position, .. } => {
                write!(f, "Operation absent or used incorrectly near index {position}")
            },

            Self::UnexpectedEndOfInput => {
                write!(f, "Operation absent or used incorrectly near the end of input")
            },

            Self::IncompatibleOperands { operator,
                                         left,
                                         right,
                                         position, } => match (operator, left, right) {
                (Add, Duration, Number) => {
                    write!(f, "Number being added to time near index {position}")
                },
                (Add, Number, Duration) => {
                    write!(f, "Time being added to number near index {position}")
                },
                (Sub, Duration, Number) => {
                    write!(f, "Number being subtracted from time near index {position}")
                },
                (Sub, Number, Duration) => {
                    write!(f, "Time being subtracted from number near index {position}")
                },
                (Mul, Duration, Duration) => {
                    write!(f, "Time being multiplied by time near index {position}")
                },
                (Div, _, Duration) => write!(f, "Time used as divisor near index {position}"),
                (Pow, ..) => write!(f, "Operation ^ used with time near index {position}"),
                _ => write!(f,
                            "Operation {operator} cannot combine {left} and {right} near index {position}"),
            },

            Self::NestingTooDeep { position } => {
                write!(f, "Expression nested too deeply near index {position}")
            },

            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Literal {literal} is too large near index {position}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
