use crate::{
    error::{EngineResult, RuntimeError},
    interpreter::{
        domain::Domain,
        lexer::Token,
        parser::core::{Reduce, parse},
        value::{core::Value, kind::ValueKind},
    },
    operator::{BinaryOperator, UnaryOperator},
};

/// Result type used by the evaluator.
///
/// All arithmetic functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Computes values while the grammar is being recognized.
///
/// Every reduction produces a finished [`Value`]. Type legality is checked
/// against [`ValueKind::binary_result`] before any arithmetic runs, so type
/// errors surface as parse errors at the operator, in the same order a single
/// left-to-right parse meets them.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectEvaluator;

impl Reduce for DirectEvaluator {
    type Output = Value;

    fn literal(&self, token: &Token) -> EngineResult<Value> {
        Ok(Value::from_literal(token)?)
    }

    fn unary(&self, operator: UnaryOperator, operand: Value, position: usize) -> EngineResult<Value> {
        Ok(Self::eval_unary(operator, operand, Some(position))?)
    }

    fn binary(&self,
              operator: BinaryOperator,
              left: Value,
              right: Value,
              position: usize)
              -> EngineResult<Value> {
        ValueKind::check_binary(operator, left.kind(), right.kind(), position)?;
        Ok(Self::eval_binary(operator, &left, &right, Some(position))?)
    }
}

/// Evaluates a token sequence directly to a value.
///
/// # Parameters
/// - `tokens`: The complete token sequence of one expression.
/// - `domain`: Which result types are accepted.
///
/// # Errors
/// Returns the first parse, type or arithmetic error met, or
/// `EngineError::ResultTypeMismatch` if the result is outside `domain`.
///
/// # Example
/// ```
/// use blossy::interpreter::{
///     domain::Domain, evaluator::core::evaluate, lexer::tokenize_all,
/// };
///
/// let tokens = tokenize_all("1:30 * 2").unwrap();
/// let value = evaluate(&tokens, Domain::Time).unwrap();
/// assert_eq!(value.to_string(), "0:03:00");
///
/// assert!(evaluate(&tokens, Domain::Number).is_err());
/// ```
pub fn evaluate(tokens: &[Token], domain: Domain) -> EngineResult<Value> {
    let value = parse(tokens, &DirectEvaluator)?;
    domain.check(value.kind())?;
    Ok(value)
}
