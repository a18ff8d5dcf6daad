use crate::{
    error::ParseError,
    operator::{BinaryOperator, UnaryOperator},
};

/// The type of a value, independent of its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// An integer or floating-point number.
    Number,
    /// A clock-style duration.
    Duration,
}

impl ValueKind {
    /// Looks up the result type of a binary operation in the legality table.
    ///
    /// | Operator | N ⊕ N | D ⊕ D | N ⊕ D | D ⊕ N |
    /// |----------|-------|-------|-------|-------|
    /// | `+` `-`  | N     | D     | –     | –     |
    /// | `*`      | N     | –     | D     | D     |
    /// | `/`      | N     | –     | –     | D     |
    /// | `^`      | N     | –     | –     | –     |
    ///
    /// Returns `None` for illegal combinations.
    ///
    /// # Example
    /// ```
    /// use blossy::{interpreter::value::kind::ValueKind, operator::BinaryOperator};
    ///
    /// use ValueKind::{Duration, Number};
    ///
    /// assert_eq!(ValueKind::binary_result(BinaryOperator::Mul, Number, Duration),
    ///            Some(Duration));
    /// assert_eq!(ValueKind::binary_result(BinaryOperator::Div, Number, Duration),
    ///            None);
    /// ```
    #[must_use]
    pub const fn binary_result(operator: BinaryOperator,
                               left: Self,
                               right: Self)
                               -> Option<Self> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use ValueKind::{Duration, Number};

        match (operator, left, right) {
            (_, Number, Number) => Some(Number),
            (Add | Sub, Duration, Duration)
            | (Mul, Duration, Number)
            | (Mul, Number, Duration)
            | (Div, Duration, Number) => Some(Duration),
            _ => None,
        }
    }

    /// Checks a binary operation against the legality table.
    ///
    /// # Errors
    /// Returns [`ParseError::IncompatibleOperands`] positioned at the operator
    /// when the combination is illegal.
    pub fn check_binary(operator: BinaryOperator,
                        left: Self,
                        right: Self,
                        position: usize)
                        -> Result<Self, ParseError> {
        match Self::binary_result(operator, left, right) {
            Some(kind) => Ok(kind),
            None => Err(ParseError::IncompatibleOperands { operator,
                                                           left,
                                                           right,
                                                           position }),
        }
    }

    /// Result type of a unary operation. Both unary operators preserve the
    /// type of their operand.
    ///
    /// # Example
    /// ```
    /// use blossy::{interpreter::value::kind::ValueKind, operator::UnaryOperator};
    ///
    /// assert_eq!(ValueKind::Duration.unary_result(UnaryOperator::Negate),
    ///            ValueKind::Duration);
    /// assert_eq!(ValueKind::Number.unary_result(UnaryOperator::Plus),
    ///            ValueKind::Number);
    /// ```
    #[must_use]
    pub const fn unary_result(self, operator: UnaryOperator) -> Self {
        match operator {
            UnaryOperator::Plus | UnaryOperator::Negate => self,
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Duration => write!(f, "time"),
        }
    }
}
