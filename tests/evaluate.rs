use blossy::{
    error::{EngineError, ParseError, RuntimeError},
    compile_and_trace, compile_and_trace_in, evaluate_expression, evaluate_number_expression, evaluate_time_expression,
    interpreter::{
        domain::Domain,
        evaluator::core::evaluate,
        lexer::{TokenKind, tokenize, tokenize_all},
        parser::core::MAX_NESTING,
        value::{core::Value, kind::ValueKind},
    },
};

fn assert_number(src: &str, expected: &str) {
    match evaluate_number_expression(src) {
        Ok(value) => assert_eq!(value, expected, "`{src}`"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_time(src: &str, expected: &str) {
    match evaluate_time_expression(src) {
        Ok(value) => assert_eq!(value, expected, "`{src}`"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str, message: &str) {
    match evaluate_expression(src, Domain::Mixed) {
        Ok(value) => panic!("`{src}` succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e.to_string(), message, "`{src}`"),
    }
}

#[test]
fn tokenizer_prefers_the_longest_literal() {
    let kinds: Vec<_> = tokenize("12:34:56 12:34 12.34 12").map(|t| t.unwrap().kind)
                                                             .collect();
    assert_eq!(kinds,
               [TokenKind::TimeConst,
                TokenKind::TimeConst,
                TokenKind::FloatConst,
                TokenKind::IntConst]);
}

#[test]
fn tokenizer_records_byte_offsets() {
    let tokens = tokenize_all("(1 +  2)").unwrap();
    let positions: Vec<_> = tokens.iter().map(|t| t.position).collect();
    assert_eq!(positions, [0, 1, 3, 6, 7]);
    assert_eq!(tokens[3].lexeme, "2");
}

#[test]
fn tokenizer_never_yields_space_tokens() {
    let tokens = tokenize_all("  1   +  2 ").unwrap();
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Ignored));
    assert_eq!(tokens.len(), 3);
}

#[test]
fn tokenizer_rejects_unknown_characters() {
    assert_failure("2 % 3", "Unrecognized character '%' near index 2");
    assert_failure("2\t+ 3", "Unrecognized character '\t' near index 1");
}

#[test]
fn precedence_and_grouping() {
    assert_number("2 + 3 * 4", "14");
    assert_number("(2 + 3) * 4", "20");
    assert_number("10 - 4 - 3", "3");
    assert_number("2 * 3 ^ 2", "18");
    assert_number("((7))", "7");
}

#[test]
fn exponent_is_right_associative_and_binds_with_unary() {
    assert_number("2 ^ 3 ^ 2", "512");
    assert_number("-2 ^ 2", "-4");
    assert_number("(0 - 2) ^ 2", "4");
    assert_number("2 ^ -1", "0.5");
    assert_number("2 ^ -1 ^ 2", "0.5");
}

#[test]
fn unary_operators() {
    assert_number("-3", "-3");
    assert_number("--3", "3");
    assert_number("-+3", "-3");
    assert_number("2 * -3", "-6");
    assert_number("4 - -2", "6");
}

#[test]
fn division_is_true_division() {
    assert_number("7 / 2", "3.5");
    assert_number("4 / 2", "2");
    assert_number("10 / 3", "3.33");
    assert_number("1 / 3", "0.33");
}

#[test]
fn floats_are_rounded_for_display() {
    assert_number("0.1 + 0.2", "0.3");
    assert_number("1.5 + 1.5", "3");
    assert_number("1 / 4", "0.25");
}

#[test]
fn rounding_happens_after_the_whole_check() {
    assert_number("2.999", "3.0");
    assert_number("0.999", "1.0");
    assert_number("0 - 2.999", "-3.0");
}

#[test]
fn rounding_uses_the_exact_binary_value() {
    assert_number("0.125", "0.12");
    assert_number("0.375", "0.38");
    assert_number("1.005", "1.0");
}

#[test]
fn integer_overflow_widens_to_float() {
    assert_number("9223372036854775807 + 1", "9223372036854775808");
    assert_number("2 ^ 64", "18446744073709551616");
    assert_number("0 - 9223372036854775807 - 2", "-9223372036854775808");
}

#[test]
fn already_reduced_literal_is_unchanged() {
    assert_number("7", "7");
    assert_number("2.5", "2.5");
    assert_time("1:02:03", "1:02:03");
}

#[test]
fn time_arithmetic() {
    assert_time("1:00:00 + 30:00", "1:30:00");
    assert_time("-1:30", "-0:01:30");
    assert_time("90:75", "1:31:15");
    assert_time("1:30 * 2", "0:03:00");
    assert_time("2 * 1:30", "0:03:00");
    assert_time("1:30 * 0.5", "0:00:45");
    assert_time("1:30 / 4", "0:00:22");
    assert_time("1:30 / 0.5", "0:03:00");
    assert_time("(0:00 - 0:07) / 2", "-0:00:03");
    assert_time("1:00 - 2:00", "-0:01:00");
    assert_time("100:00:00", "100:00:00");
}

#[test]
fn time_minus_itself_is_zero() {
    assert_time("1:02:03 - 1:02:03", "0:00:00");
    assert_time("25:61 - 25:61", "0:00:00");
}

#[test]
fn scaling_round_trips_when_exact() {
    assert_time("(1:30 * 4) / 4", "0:01:30");
    assert_time("(2:03:04 * 3) / 3", "2:03:04");
}

#[test]
fn mixing_time_and_numbers_is_rejected() {
    assert_failure("1:30 + 1", "Number being added to time near index 5");
    assert_failure("1 + 1:30", "Time being added to number near index 2");
    assert_failure("1:30 - 1", "Number being subtracted from time near index 5");
    assert_failure("1 - 1:30", "Time being subtracted from number near index 2");
    assert_failure("1:00 * 1:00", "Time being multiplied by time near index 5");
    assert_failure("1 / 1:00", "Time used as divisor near index 2");
    assert_failure("1:00 / 1:00", "Time used as divisor near index 5");
    assert_failure("1:00 ^ 2", "Operation ^ used with time near index 5");
    assert_failure("2 ^ 1:00", "Operation ^ used with time near index 2");
}

#[test]
fn first_type_error_wins() {
    assert_failure("1:00 * 1:00 + 1 / 1:00",
                   "Time being multiplied by time near index 5");
}

#[test]
fn syntax_errors() {
    assert_failure("", "Operation absent or used incorrectly near the end of input");
    assert_failure("2 +", "Operation absent or used incorrectly near the end of input");
    assert_failure("(2", "Operation absent or used incorrectly near the end of input");
    assert_failure("2 3", "Operation absent or used incorrectly near index 2");
    assert_failure("2)", "Operation absent or used incorrectly near index 1");
    assert_failure("* 2", "Operation absent or used incorrectly near index 0");
    assert_failure("()", "Operation absent or used incorrectly near index 1");
}

#[test]
fn arithmetic_errors() {
    assert_failure("5 / 0", "Division by zero near index 2");
    assert_failure("5 / (1 - 1.0)", "Division by zero near index 2");
    assert_failure("1:30 / 0", "Division by zero near index 5");
    assert_failure("0 ^ -1", "Result is not a finite number near index 2");
    assert_failure("(0 - 8) ^ 0.5", "Result is not a finite number near index 8");
}

#[test]
fn literals_that_do_not_fit_are_rejected() {
    let error = evaluate_expression("99999999999999999999 + 1", Domain::Mixed).unwrap_err();
    assert!(matches!(error,
                     EngineError::Parse(ParseError::LiteralTooLarge { position: 0, .. })));
}

#[test]
fn result_type_must_match_the_entry_point() {
    assert_eq!(evaluate_number_expression("1:30").unwrap_err().to_string(),
               "Result is time (use 'calct' instead)");
    assert_eq!(evaluate_time_expression("3").unwrap_err().to_string(),
               "Result is not time (use 'calc' instead)");
    assert_eq!(evaluate_expression("1:30", Domain::Mixed).unwrap(), "0:01:30");
    assert_eq!(evaluate_expression("3", Domain::Mixed).unwrap(), "3");
}

#[test]
fn evaluate_returns_typed_values() {
    let tokens = tokenize_all("3 * 1:00").unwrap();
    let value = evaluate(&tokens, Domain::Time).unwrap();
    assert_eq!(value.kind(), ValueKind::Duration);

    let tokens = tokenize_all("6 / 3").unwrap();
    assert_eq!(evaluate(&tokens, Domain::Number).unwrap(), Value::from(2.0));

    let error = evaluate(&tokens, Domain::Time).unwrap_err();
    assert_eq!(error,
               EngineError::ResultTypeMismatch { expected: ValueKind::Duration,
                                                 found:    ValueKind::Number, });
}

#[test]
fn runtime_errors_are_reported_as_such() {
    let error = evaluate_expression("1 / 0", Domain::Number).unwrap_err();
    assert_eq!(error,
               EngineError::Runtime(RuntimeError::DivisionByZero { position: Some(2) }));
}

#[test]
fn deep_nesting_is_rejected_without_exhausting_the_stack() {
    for src in ["(".repeat(100_000), format!("{}1", "-".repeat(100_000)), "(-".repeat(50_000)] {
        let error = evaluate_expression(&src, Domain::Mixed).unwrap_err();
        assert!(matches!(error, EngineError::Parse(ParseError::NestingTooDeep { .. })),
                "{error}");
        assert!(compile_and_trace(&src, false).is_err());
    }

    let error = evaluate_expression(&format!("{}1", "+".repeat(MAX_NESTING + 1)), Domain::Mixed);
    assert_eq!(error.unwrap_err().to_string(),
               format!("Expression nested too deeply near index {}", MAX_NESTING + 1));
}

#[test]
fn nesting_within_the_limit_evaluates() {
    let depth = MAX_NESTING / 2;
    assert_number(&format!("{}1{}", "(".repeat(depth), ")".repeat(depth)), "1");
    assert_number(&format!("{}1", "-".repeat(MAX_NESTING)), "1");
    assert_number(&format!("{}1{}", "(-".repeat(depth / 2), ")".repeat(depth / 2)), "1");
}

#[test]
fn unary_operators_preserve_the_operand_kind() {
    assert!(compile_and_trace_in("-(1:30) + 2:00", Domain::Time).is_ok());
    assert!(compile_and_trace_in("+-1:30 * 2", Domain::Time).is_ok());
    assert!(matches!(compile_and_trace_in("-1:30 * 1:00", Domain::Mixed),
                     Err(EngineError::Parse(ParseError::IncompatibleOperands { .. }))));
    assert!(matches!(compile_and_trace_in("-(2) * 1:00", Domain::Number),
                     Err(EngineError::ResultTypeMismatch { .. })));
    assert_time("-(1:30) + 2:00", "0:00:30");
}
