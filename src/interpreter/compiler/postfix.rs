use crate::operator::{BinaryOperator, UnaryOperator};

/// An operator as it appears in a postfix sequence.
///
/// Prefix and infix `+`/`-` are different markers, because a postfix
/// sequence no longer shows how many operands an operator takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Prefix `+`, written `+₁`.
    UnaryPlus,
    /// Prefix `-`, written `-₁`.
    UnaryMinus,
    /// Infix `+`, written `+₂`.
    BinaryPlus,
    /// Infix `-`, written `-₂`.
    BinaryMinus,
    /// `*`
    Times,
    /// `/`
    Divide,
    /// `^`
    Exponent,
}

/// A marker resolved to the operator it applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Takes one operand from the stack.
    Unary(UnaryOperator),
    /// Takes two operands from the stack; the deeper one is the left operand.
    Binary(BinaryOperator),
}

impl Marker {
    /// Resolves the marker to its operator.
    ///
    /// # Example
    /// ```
    /// use blossy::{
    ///     interpreter::compiler::postfix::{Arity, Marker},
    ///     operator::{BinaryOperator, UnaryOperator},
    /// };
    ///
    /// assert_eq!(Marker::UnaryMinus.arity(), Arity::Unary(UnaryOperator::Negate));
    /// assert_eq!(Marker::BinaryMinus.arity(), Arity::Binary(BinaryOperator::Sub));
    /// ```
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::UnaryPlus => Arity::Unary(UnaryOperator::Plus),
            Self::UnaryMinus => Arity::Unary(UnaryOperator::Negate),
            Self::BinaryPlus => Arity::Binary(BinaryOperator::Add),
            Self::BinaryMinus => Arity::Binary(BinaryOperator::Sub),
            Self::Times => Arity::Binary(BinaryOperator::Mul),
            Self::Divide => Arity::Binary(BinaryOperator::Div),
            Self::Exponent => Arity::Binary(BinaryOperator::Pow),
        }
    }
}

impl From<UnaryOperator> for Marker {
    fn from(op: UnaryOperator) -> Self {
        match op {
            UnaryOperator::Plus => Self::UnaryPlus,
            UnaryOperator::Negate => Self::UnaryMinus,
        }
    }
}

impl From<BinaryOperator> for Marker {
    fn from(op: BinaryOperator) -> Self {
        match op {
            BinaryOperator::Add => Self::BinaryPlus,
            BinaryOperator::Sub => Self::BinaryMinus,
            BinaryOperator::Mul => Self::Times,
            BinaryOperator::Div => Self::Divide,
            BinaryOperator::Pow => Self::Exponent,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = match self {
            Self::UnaryPlus => "+₁",
            Self::UnaryMinus => "-₁",
            Self::BinaryPlus => "+₂",
            Self::BinaryMinus => "-₂",
            Self::Times => "*",
            Self::Divide => "/",
            Self::Exponent => "^",
        };
        write!(f, "{marker}")
    }
}

/// One entry of a postfix sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostfixItem {
    /// A literal, kept exactly as written in the source.
    Operand(String),
    /// An operator marker.
    Operator(Marker),
}

impl std::fmt::Display for PostfixItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operand(raw) => write!(f, "{raw}"),
            Self::Operator(marker) => write!(f, "{marker}"),
        }
    }
}
