use std::iter::Peekable;

use crate::{
    error::{EngineResult, ParseError},
    interpreter::{lexer::Token, parser::binary::parse_additive},
    operator::{BinaryOperator, UnaryOperator},
};

/// What the grammar produces at each reduction.
///
/// The parser calls these hooks bottom-up, in exactly the order a shift-reduce
/// parser would reduce: operands before the operator that combines them. An
/// implementation either computes immediately (the direct evaluator) or
/// records what it saw (the postfix compiler). Returning an error stops the
/// parse at once; no partial result is surfaced.
pub trait Reduce {
    /// The result of one reduction.
    type Output;

    /// Reduces a literal token.
    fn literal(&self, token: &Token) -> EngineResult<Self::Output>;

    /// Reduces a prefix operator applied to an already reduced operand.
    /// `position` is the byte offset of the operator.
    fn unary(&self,
             operator: UnaryOperator,
             operand: Self::Output,
             position: usize)
             -> EngineResult<Self::Output>;

    /// Reduces a binary operator applied to two already reduced operands.
    /// `position` is the byte offset of the operator.
    fn binary(&self,
              operator: BinaryOperator,
              left: Self::Output,
              right: Self::Output,
              position: usize)
              -> EngineResult<Self::Output>;
}

/// How deeply parentheses, prefix operators and exponents may nest.
///
/// Every level costs a few stack frames of the recursive descent; past this
/// limit the parser reports `ParseError::NestingTooDeep` instead.
pub const MAX_NESTING: usize = 128;

/// Parses a full expression.
///
/// This is the recursive entry point used by grouping; it begins at the
/// lowest-precedence tier and descends through the hierarchy. `depth` is the
/// number of enclosing groups, prefix operators and exponents.
///
/// Grammar:
/// ```text
///     expression     := additive
///     additive       := multiplicative (("+" | "-") multiplicative)*
///     multiplicative := unary (("*" | "/") unary)*
///     unary          := ("+" | "-") unary | exponent
///     exponent       := primary ("^" unary)?
///     primary        := INT | FLOAT | TIME | "(" expression ")"
/// ```
pub fn parse_expression<'a, I, R>(tokens: &mut Peekable<I>,
                                  reducer: &R,
                                  depth: usize)
                                  -> EngineResult<R::Output>
    where I: Iterator<Item = &'a Token>,
          R: Reduce
{
    parse_additive(tokens, reducer, depth)
}

/// Parses a token sequence that must form exactly one expression.
///
/// # Errors
/// - `ParseError::UnexpectedEndOfInput` for empty or truncated input.
/// - `ParseError::UnexpectedToken` for a token the grammar does not allow,
///   including anything left over after a complete expression.
/// - `ParseError::NestingTooDeep` past [`MAX_NESTING`] levels of nesting.
/// - Whatever the reducer reports.
///
/// # Example
/// ```
/// use blossy::interpreter::{
///     evaluator::core::DirectEvaluator, lexer::tokenize_all, parser::core::parse,
///     value::core::Value,
/// };
///
/// let tokens = tokenize_all("2 + 3 * 4").unwrap();
/// assert_eq!(parse(&tokens, &DirectEvaluator).unwrap(), Value::from(14));
///
/// let tokens = tokenize_all("2 3").unwrap();
/// assert!(parse(&tokens, &DirectEvaluator).is_err());
/// ```
pub fn parse<'a, T, R>(tokens: T, reducer: &R) -> EngineResult<R::Output>
    where T: IntoIterator<Item = &'a Token>,
          R: Reduce
{
    let mut tokens = tokens.into_iter().peekable();
    let output = parse_expression(&mut tokens, reducer, 0)?;

    match tokens.next() {
        Some(token) => Err(unexpected(token).into()),
        None => Ok(output),
    }
}

/// Builds the error for a token the grammar does not allow here.
pub(in crate::interpreter::parser) fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken { token:    token.lexeme.clone(),
                                  position: token.position, }
}
