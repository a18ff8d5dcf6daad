use std::iter::Peekable;

use crate::{
    error::EngineResult,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::Reduce, unary::parse_primary, unary::parse_unary},
    },
    operator::BinaryOperator,
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I, R>(tokens: &mut Peekable<I>,
                          reducer: &R,
                          depth: usize)
                          -> EngineResult<R::Output>
    where I: Iterator<Item = &'a Token>,
          R: Reduce
{
    let mut left = parse_multiplicative(tokens, reducer, depth)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token.kind)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let position = token.position;
            tokens.next();
            let right = parse_multiplicative(tokens, reducer, depth)?;
            left = reducer.binary(op, left, right, position)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`. Their operands are unary
/// expressions, so `2 * -3` is accepted.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I, R>(tokens: &mut Peekable<I>,
                                      reducer: &R,
                                      depth: usize)
                                      -> EngineResult<R::Output>
    where I: Iterator<Item = &'a Token>,
          R: Reduce
{
    let mut left = parse_unary(tokens, reducer, depth)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token.kind)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let position = token.position;
            tokens.next();
            let right = parse_unary(tokens, reducer, depth)?;
            left = reducer.binary(op, left, right, position)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// `^` shares the highest precedence tier with the prefix operators and
/// groups to the right: `2 ^ 3 ^ 2` parses as `2 ^ (3 ^ 2)`, `-2 ^ 2` as
/// `-(2 ^ 2)`, and `2 ^ -1` is accepted.
///
/// The rule is: `exponent := primary ("^" unary)?`
pub fn parse_exponent<'a, I, R>(tokens: &mut Peekable<I>,
                          reducer: &R,
                          depth: usize)
                          -> EngineResult<R::Output>
    where I: Iterator<Item = &'a Token>,
          R: Reduce
{
    let base = parse_primary(tokens, reducer, depth)?;
    if let Some(token) = tokens.peek()
       && token.kind == TokenKind::Exponent
    {
        let position = token.position;
        tokens.next();
        let exponent = parse_unary(tokens, reducer, depth + 1)?;
        return reducer.binary(BinaryOperator::Pow, base, exponent, position);
    }
    Ok(base)
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators. `+` and `-` map
/// to their binary meaning; whether they are used as prefix operators is
/// decided by the grammar, not by the token.
///
/// # Example
/// ```
/// use blossy::{
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
///     operator::BinaryOperator,
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Times => Some(BinaryOperator::Mul),
        TokenKind::Divide => Some(BinaryOperator::Div),
        TokenKind::Exponent => Some(BinaryOperator::Pow),
        _ => None,
    }
}
