use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{DirectEvaluator, EvalResult},
        value::{core::Value, duration::Duration, number::Number},
    },
    operator::BinaryOperator,
    util::num::{f64_trunc_to_i64, i64_to_f64},
};

impl DirectEvaluator {
    /// Evaluates an operation where at least one operand is a duration.
    ///
    /// Supported combinations:
    /// - `D + D`, `D - D`: exact, checked.
    /// - `D * N`, `N * D`: scaling. An integer factor is exact; a float factor
    ///   is applied in floating point and truncated toward zero.
    /// - `D / N`: an integer divisor truncates toward zero (`-0:00:07 / 2` is
    ///   `-0:00:03`); a float divisor is applied in floating point and
    ///   truncated.
    ///
    /// Returns `Ok(None)` for any other combination.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` for `D / 0`.
    /// - `RuntimeError::Overflow` if the result leaves the range of `i64`
    ///   seconds.
    ///
    /// # Example
    /// ```
    /// use blossy::{
    ///     interpreter::{evaluator::core::DirectEvaluator, value::core::Value},
    ///     operator::BinaryOperator,
    /// };
    ///
    /// let span = Value::parse_raw("1:30").unwrap();
    /// let half = DirectEvaluator::eval_duration_op(BinaryOperator::Mul,
    ///                                              &span,
    ///                                              &Value::from(0.5),
    ///                                              None).unwrap();
    /// assert_eq!(half.unwrap().to_string(), "0:00:45");
    /// ```
    pub fn eval_duration_op(op: BinaryOperator,
                            left: &Value,
                            right: &Value,
                            position: Option<usize>)
                            -> EvalResult<Option<Value>> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Duration as D, Number as N};

        let overflow = RuntimeError::Overflow { position };
        let result = match (op, *left, *right) {
            (Add, D(a), D(b)) => a.checked_add(b).ok_or(overflow)?,
            (Sub, D(a), D(b)) => a.checked_sub(b).ok_or(overflow)?,
            (Mul, D(d), N(n)) | (Mul, N(n), D(d)) => scale(d, n, position)?,
            (Div, D(d), N(n)) => divide(d, n, position)?,
            _ => return Ok(None),
        };

        Ok(Some(Value::from(result)))
    }
}

/// Multiplies a duration by a number.
fn scale(duration: Duration, factor: Number, position: Option<usize>) -> EvalResult<Duration> {
    let overflow = RuntimeError::Overflow { position };
    let seconds = match factor {
        Number::Integer(k) => duration.total_seconds().checked_mul(k).ok_or(overflow)?,
        Number::Real(r) => f64_trunc_to_i64(i64_to_f64(duration.total_seconds()) * r, overflow)?,
    };
    Ok(Duration::from_seconds(seconds))
}

/// Divides a duration by a number.
fn divide(duration: Duration, divisor: Number, position: Option<usize>) -> EvalResult<Duration> {
    if divisor.is_zero() {
        return Err(RuntimeError::DivisionByZero { position });
    }

    let overflow = RuntimeError::Overflow { position };
    let seconds = match divisor {
        Number::Integer(k) => duration.total_seconds().checked_div(k).ok_or(overflow)?,
        Number::Real(r) => f64_trunc_to_i64(i64_to_f64(duration.total_seconds()) / r, overflow)?,
    };
    Ok(Duration::from_seconds(seconds))
}
