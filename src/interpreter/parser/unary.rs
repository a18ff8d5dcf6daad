use std::iter::Peekable;

use crate::{
    error::{EngineResult, ParseError},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_exponent,
            core::{MAX_NESTING, Reduce, parse_expression, unexpected},
        },
    },
    operator::UnaryOperator,
};

/// Parses a unary expression.
///
/// Supports the prefix operators `+` (identity) and `-` (negation). Unary
/// operators are right-associative, so `-+x` is parsed as `-(+x)`.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | exponent
/// ```
pub(crate) fn parse_unary<'a, I, R>(tokens: &mut Peekable<I>,
                                    reducer: &R,
                                    depth: usize)
                                    -> EngineResult<R::Output>
    where I: Iterator<Item = &'a Token>,
          R: Reduce
{
    if depth > MAX_NESTING {
        return Err(match tokens.peek() {
                       Some(token) => ParseError::NestingTooDeep { position: token.position },
                       None => ParseError::UnexpectedEndOfInput,
                   }.into());
    }

    let operator = match tokens.peek() {
        Some(Token { kind: TokenKind::Plus,
                     position,
                     .. }) => Some((UnaryOperator::Plus, *position)),
        Some(Token { kind: TokenKind::Minus,
                     position,
                     .. }) => Some((UnaryOperator::Negate, *position)),
        _ => None,
    };

    match operator {
        Some((op, position)) => {
            tokens.next();
            let operand = parse_unary(tokens, reducer, depth + 1)?;
            reducer.unary(op, operand, position)
        },
        None => parse_exponent(tokens, reducer, depth),
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions are literals and parenthesized groups.
///
/// Grammar:
/// ```text
///     primary := INT | FLOAT | TIME
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - `ParseError::UnexpectedEndOfInput` if no token is left.
/// - `ParseError::UnexpectedToken` for an operator or `)` in operand position.
pub(crate) fn parse_primary<'a, I, R>(tokens: &mut Peekable<I>,
                                      reducer: &R,
                                      depth: usize)
                                      -> EngineResult<R::Output>
    where I: Iterator<Item = &'a Token>,
          R: Reduce
{
    let token = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;

    if token.is_literal() {
        return reducer.literal(token);
    }

    match token.kind {
        TokenKind::LParen => parse_grouping(tokens, reducer, depth + 1),
        _ => Err(unexpected(token).into()),
    }
}

/// Parses the rest of a parenthesized expression.
///
/// The opening parenthesis has already been consumed. The enclosed
/// expression is returned as-is; grouping only overrides precedence.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I, R>(tokens: &mut Peekable<I>,
                            reducer: &R,
                            depth: usize)
                            -> EngineResult<R::Output>
    where I: Iterator<Item = &'a Token>,
          R: Reduce
{
    let inner = parse_expression(tokens, reducer, depth)?;
    match tokens.next() {
        Some(Token { kind: TokenKind::RParen,
                     .. }) => Ok(inner),
        Some(token) => Err(unexpected(token).into()),
        None => Err(ParseError::UnexpectedEndOfInput.into()),
    }
}
