use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{DirectEvaluator, EvalResult},
        value::number::Number,
    },
    operator::BinaryOperator,
    util::num::{i64_to_f64, i64_to_u32},
};

impl DirectEvaluator {
    /// Evaluates an arithmetic operation on two numbers.
    ///
    /// Integer `+`, `-`, `*` and `^` (with a non-negative exponent) stay exact;
    /// on overflow the operation is redone in floating point. `/` is true
    /// division and always yields a float, so `6 / 3` is `2.0`. Any mix of an
    /// integer and a float is computed in floating point.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Byte offset of the operator, if known.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` if `op` is `/` and `right` is zero.
    /// - `RuntimeError::UndefinedResult` if the result is infinite or NaN,
    ///   such as `0 ^ -1` or `(-8) ^ 0.5`.
    ///
    /// # Example
    /// ```
    /// use blossy::{
    ///     interpreter::{evaluator::core::DirectEvaluator, value::number::Number},
    ///     operator::BinaryOperator,
    /// };
    ///
    /// let pow = DirectEvaluator::eval_number_op(BinaryOperator::Pow,
    ///                                           Number::Integer(2),
    ///                                           Number::Integer(10),
    ///                                           None);
    /// assert_eq!(pow.unwrap(), Number::Integer(1024));
    ///
    /// let div = DirectEvaluator::eval_number_op(BinaryOperator::Div,
    ///                                           Number::Integer(7),
    ///                                           Number::Integer(2),
    ///                                           None);
    /// assert_eq!(div.unwrap(), Number::Real(3.5));
    /// ```
    pub fn eval_number_op(op: BinaryOperator,
                          left: Number,
                          right: Number,
                          position: Option<usize>)
                          -> EvalResult<Number> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};
        use Number::{Integer, Real};

        match (op, left, right) {
            (Div, _, divisor) if divisor.is_zero() => Err(RuntimeError::DivisionByZero { position }),
            (Div, ..) => finite(left.as_f64() / right.as_f64(), position),

            (Add, Integer(a), Integer(b)) => {
                a.checked_add(b)
                 .map_or_else(|| finite(i64_to_f64(a) + i64_to_f64(b), position), |n| Ok(Integer(n)))
            },
            (Sub, Integer(a), Integer(b)) => {
                a.checked_sub(b)
                 .map_or_else(|| finite(i64_to_f64(a) - i64_to_f64(b), position), |n| Ok(Integer(n)))
            },
            (Mul, Integer(a), Integer(b)) => {
                a.checked_mul(b)
                 .map_or_else(|| finite(i64_to_f64(a) * i64_to_f64(b), position), |n| Ok(Integer(n)))
            },
            (Pow, Integer(base), Integer(exponent)) => {
                match i64_to_u32(exponent).and_then(|e| base.checked_pow(e)) {
                    Some(n) => Ok(Integer(n)),
                    None => finite(i64_to_f64(base).powf(i64_to_f64(exponent)), position),
                }
            },

            (Add, ..) => finite(left.as_f64() + right.as_f64(), position),
            (Sub, ..) => finite(left.as_f64() - right.as_f64(), position),
            (Mul, ..) => finite(left.as_f64() * right.as_f64(), position),
            (Pow, ..) => finite(left.as_f64().powf(right.as_f64()), position),
        }
    }
}

/// Wraps a floating-point result, rejecting infinities and NaN.
fn finite(value: f64, position: Option<usize>) -> EvalResult<Number> {
    if value.is_finite() {
        Ok(Number::Real(value))
    } else {
        Err(RuntimeError::UndefinedResult { position })
    }
}
