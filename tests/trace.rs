use blossy::{
    compile_and_trace, compile_and_trace_in,
    error::{EngineError, RuntimeError},
    evaluate_number_expression,
    interpreter::{
        compiler::{
            core::compile,
            postfix::{Marker, PostfixItem},
        },
        domain::Domain,
        lexer::tokenize_all,
        stepper::{Stepper, TraceRecord},
    },
};

fn record(operation: Option<&str>, stack: &str, input: &str) -> TraceRecord {
    TraceRecord { operation: operation.map(str::to_string),
                  stack:     Some(stack.to_string()),
                  input:     Some(input.to_string()), }
}

fn result(value: &str) -> TraceRecord {
    TraceRecord { operation: Some(format!("The result is {value}")),
                  stack:     None,
                  input:     None, }
}

fn trace(src: &str, time_mode: bool) -> Vec<TraceRecord> {
    compile_and_trace(src, time_mode).unwrap_or_else(|e| panic!("`{src}` failed: {e}"))
                                     .map(|r| r.unwrap_or_else(|e| panic!("`{src}` failed: {e}")))
                                     .collect()
}

fn final_operation(src: &str) -> String {
    trace(src, false).pop()
                     .and_then(|r| r.operation)
                     .unwrap_or_else(|| panic!("`{src}` produced no records"))
}

fn postfix(src: &str) -> Vec<String> {
    let tokens = tokenize_all(src).unwrap();
    compile(&tokens, Domain::Mixed).unwrap()
                                   .iter()
                                   .map(ToString::to_string)
                                   .collect()
}

#[test]
fn addition_trace() {
    assert_eq!(trace("3 + 4", false),
               [record(None, "$", "3 4 +₂ $"),
                record(Some("Stack 3"), "$ 3", "4 +₂ $"),
                record(Some("Stack 4"), "$ 3 4", "+₂ $"),
                record(Some("3 + 4 = 7"), "$ 7", "$"),
                result("7")]);
}

#[test]
fn unary_and_exponent_trace() {
    assert_eq!(trace("-2 ^ 2", false),
               [record(None, "$", "2 2 ^ -₁ $"),
                record(Some("Stack 2"), "$ 2", "2 ^ -₁ $"),
                record(Some("Stack 2"), "$ 2 2", "^ -₁ $"),
                record(Some("2^2 = 4"), "$ 4", "-₁ $"),
                record(Some("-4 = -4"), "$ -4", "$"),
                result("-4")]);
}

#[test]
fn postfix_distinguishes_unary_and_binary_signs() {
    assert_eq!(postfix("1 - -2"), ["1", "2", "-₁", "-₂"]);
    assert_eq!(postfix("+1 + 2"), ["1", "+₁", "2", "+₂"]);
    assert_eq!(postfix("(1 + 2) * 3 / 4"), ["1", "2", "+₂", "3", "*", "4", "/"]);
    assert_eq!(postfix("2 ^ 3 ^ 2"), ["2", "3", "2", "^", "^"]);
    assert_eq!(postfix("1:30 * 2.50"), ["1:30", "2.50", "*"]);
}

#[test]
fn markers_resolve_to_their_arity() {
    let items = compile(&tokenize_all("-1 - 1").unwrap(), Domain::Number).unwrap();
    assert_eq!(items,
               [PostfixItem::Operand("1".to_string()),
                PostfixItem::Operator(Marker::UnaryMinus),
                PostfixItem::Operand("1".to_string()),
                PostfixItem::Operator(Marker::BinaryMinus)]);
}

#[test]
fn whole_floats_are_trimmed_only_after_multiplicative_operators() {
    let records = trace("1.5 + 1.5", false);
    assert_eq!(records[3].operation.as_deref(), Some("1.5 + 1.5 = 3.0"));
    assert_eq!(records[3].stack.as_deref(), Some("$ 3.0"));
    assert_eq!(records[4], result("3"));

    let records = trace("6 / 3", false);
    assert_eq!(records[3].operation.as_deref(), Some("6 / 3 = 2"));
    assert_eq!(records[4], result("2"));

    let records = trace("6 / 4", false);
    assert_eq!(records[3].operation.as_deref(), Some("6 / 4 = 1.5"));
}

#[test]
fn intermediate_values_are_not_rounded() {
    let records = trace("10 / 3 * 3", false);
    assert_eq!(records[3].operation.as_deref(), Some("10 / 3 = 3.3333333333333335"));
    assert_eq!(records.last(), Some(&result("10")));
}

#[test]
fn time_trace() {
    assert_eq!(trace("-1:30", true),
               [record(None, "$", "1:30 -₁ $"),
                record(Some("Stack 1:30"), "$ 1:30", "-₁ $"),
                record(Some("-1:30 = -0:01:30"), "$ -0:01:30", "$"),
                result("-0:01:30")]);

    let records = trace("(0:00 - 1:30) * 2", true);
    assert_eq!(records[3].operation.as_deref(), Some("0:00 - 1:30 = -0:01:30"));
    assert_eq!(records[5].operation.as_deref(), Some("-0:01:30 * 2 = -0:03:00"));
    assert_eq!(records[6], result("-0:03:00"));
}

#[test]
fn final_result_agrees_with_direct_evaluation() {
    for src in ["2 + 3 * 4",
                "(2 + 3) * 4",
                "7 / 2",
                "10 / 3",
                "2 ^ 3 ^ 2",
                "-2 ^ 2",
                "2 ^ -1",
                "0.1 + 0.2",
                "1.5 * 4 - 2",
                "9223372036854775807 + 1",
                "(6 / 2) ^ 39",
                "2.999",
                "7"]
    {
        let direct = evaluate_number_expression(src).unwrap();
        assert_eq!(final_operation(src), format!("The result is {direct}"), "`{src}`");
    }
}

#[test]
fn compile_rejects_what_the_evaluator_rejects() {
    let error = compile_and_trace("1:00 * 1:00", true).unwrap_err();
    assert_eq!(error.to_string(), "Time being multiplied by time near index 5");

    let error = compile_and_trace("2 +", false).unwrap_err();
    assert_eq!(error.to_string(),
               "Operation absent or used incorrectly near the end of input");

    let error = compile_and_trace("1:30", false).unwrap_err();
    assert_eq!(error.to_string(), "Result is time (use 'calct' instead)");

    assert!(compile_and_trace_in("1:30", Domain::Mixed).is_ok());
}

#[test]
fn arithmetic_errors_stop_the_trace() {
    let mut stepper = compile_and_trace("5 / 0 + 1", false).unwrap();
    for _ in 0..3 {
        assert!(stepper.next().unwrap().is_ok());
    }
    assert_eq!(stepper.next().unwrap().unwrap_err(),
               EngineError::Runtime(RuntimeError::DivisionByZero { position: None }));
    assert!(stepper.next().is_none());
    assert!(stepper.next().is_none());
}

#[test]
fn stepper_reports_malformed_sequences() {
    let mut stepper = Stepper::new([PostfixItem::Operator(Marker::BinaryPlus)]);
    assert!(stepper.next().unwrap().is_ok());
    assert_eq!(stepper.next().unwrap().unwrap_err().to_string(),
               "Operation +₂ is missing an operand");
    assert!(stepper.next().is_none());

    let stepper = Stepper::new([PostfixItem::Operand("1".to_string()),
                                PostfixItem::Operand("2".to_string())]);
    let last = stepper.last().unwrap();
    assert_eq!(last.unwrap_err(),
               EngineError::Runtime(RuntimeError::UnbalancedStack { remaining: 2 }));

    let mut stepper = Stepper::new([PostfixItem::Operand("abc".to_string())]);
    stepper.next();
    assert_eq!(stepper.next().unwrap().unwrap_err(),
               EngineError::Runtime(RuntimeError::MalformedOperand { operand: "abc".to_string() }));
}

#[test]
fn abandoning_a_trace_is_harmless() {
    let mut stepper = compile_and_trace("1 + 2 + 3", false).unwrap();
    assert!(stepper.next().is_some());
    drop(stepper);

    assert_eq!(trace("1 + 2 + 3", false).len(), 7);
}
