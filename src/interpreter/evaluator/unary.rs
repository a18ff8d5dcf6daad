use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{DirectEvaluator, EvalResult},
        value::{core::Value, number::Number},
    },
    operator::UnaryOperator,
    util::num::i64_to_f64,
};

impl DirectEvaluator {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: returns the operand unchanged.
    /// - `Negate`: negates numbers and durations. Negating `i64::MIN` widens
    ///   to a float; negating the most negative duration is an overflow.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `position`: Byte offset of the operator, if known.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use blossy::{
    ///     interpreter::{evaluator::core::DirectEvaluator, value::core::Value},
    ///     operator::UnaryOperator,
    /// };
    ///
    /// let result = DirectEvaluator::eval_unary(UnaryOperator::Negate, Value::from(4), None);
    /// assert_eq!(result.unwrap(), Value::from(-4));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Value, position: Option<usize>) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Plus, value) => Ok(value),
            (UnaryOperator::Negate, Value::Number(Number::Integer(n))) => {
                Ok(n.checked_neg()
                    .map_or_else(|| Value::from(-i64_to_f64(n)), Value::from))
            },
            // Written as a subtraction so that negating 0.0 stays 0.0.
            (UnaryOperator::Negate, Value::Number(Number::Real(r))) => Ok(Value::from(0.0 - r)),
            (UnaryOperator::Negate, Value::Duration(d)) => d.checked_neg()
                                                            .map(Value::from)
                                                            .ok_or(RuntimeError::Overflow { position }),
        }
    }
}
