use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{DirectEvaluator, EvalResult},
        value::core::Value,
    },
    operator::BinaryOperator,
};

impl DirectEvaluator {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operand types. Number pairs go to `eval_number_op`; any pair
    /// involving a duration goes to `eval_duration_op`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Byte offset of the operator, if known.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnsupportedOperation` for operand types the
    /// operator does not accept, and whatever the specialized handler reports.
    ///
    /// # Example
    /// ```
    /// use blossy::{
    ///     interpreter::{evaluator::core::DirectEvaluator, value::core::Value},
    ///     operator::BinaryOperator,
    /// };
    ///
    /// let left = Value::from(3);
    /// let right = Value::from(4);
    ///
    /// let result = DirectEvaluator::eval_binary(BinaryOperator::Add, &left, &right, None);
    /// assert_eq!(result.unwrap(), Value::from(7));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: Option<usize>)
                       -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => {
                Self::eval_number_op(op, *a, *b, position).map(Value::from)
            },
            _ => Self::eval_duration_op(op, left, right, position)?.ok_or_else(|| {
                     RuntimeError::UnsupportedOperation { operation: format!("{left} {op} {right}") }
                 }),
        }
    }
}
