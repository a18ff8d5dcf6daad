use std::{collections::VecDeque, iter::FusedIterator};

use crate::{
    error::{EngineResult, RuntimeError},
    interpreter::{
        compiler::postfix::{Arity, Marker, PostfixItem},
        evaluator::core::{DirectEvaluator, EvalResult},
        value::core::Value,
    },
    operator::BinaryOperator,
};

/// Marks the bottom of the stack and the end of the input in snapshots.
const SENTINEL: &str = "$";

/// One step of a stack-machine trace.
///
/// The first record has no operation and shows the initial state. The last
/// record carries only the operation, `The result is <value>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TraceRecord {
    /// What was done in this step, e.g. `Stack 3` or `3 + 4 = 7`.
    pub operation: Option<String>,
    /// The stack after the step, bottom first, e.g. `$ 3 4`.
    pub stack:     Option<String>,
    /// The input still to be read, e.g. `+₂ $`.
    pub input:     Option<String>,
}

/// A stack entry: the text shown in snapshots and the value it stands for.
#[derive(Debug, Clone)]
struct Slot {
    raw:   String,
    value: Value,
}

impl Slot {
    fn computed(value: Value, trim: bool) -> Self {
        Self { raw: value.to_raw(trim),
               value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Running,
    Finished,
}

/// Replays a postfix sequence on an explicit operand stack.
///
/// The stepper is a lazy iterator: each call to `next` performs one step and
/// returns its record, and nothing happens between calls. After the final
/// record or the first error it yields nothing more. Abandoning it early needs
/// no cleanup.
///
/// Literals are read from their raw text as they are pushed. Results are
/// pushed as the text the stack shows: `+` and `-` keep a trailing `.0` on
/// whole floats, `*`, `/` and `^` drop it, and durations are written as
/// `H:MM:SS`. The final record is formatted the way the direct evaluator
/// formats its result.
///
/// # Example
/// ```
/// use blossy::interpreter::{
///     compiler::core::compile, domain::Domain, lexer::tokenize_all, stepper::Stepper,
/// };
///
/// let tokens = tokenize_all("3 + 4").unwrap();
/// let records: Vec<_> = Stepper::new(compile(&tokens, Domain::Number).unwrap())
///                           .map(|r| r.unwrap().operation)
///                           .collect();
///
/// assert_eq!(records,
///            [None,
///             Some("Stack 3".to_string()),
///             Some("Stack 4".to_string()),
///             Some("3 + 4 = 7".to_string()),
///             Some("The result is 7".to_string())]);
/// ```
#[derive(Debug, Clone)]
pub struct Stepper {
    stack: Vec<Slot>,
    input: VecDeque<PostfixItem>,
    phase: Phase,
}

impl Stepper {
    /// Creates a stepper positioned before the first item of `postfix`.
    #[must_use]
    pub fn new<I>(postfix: I) -> Self
        where I: IntoIterator<Item = PostfixItem>
    {
        Self { stack: Vec::new(),
               input: postfix.into_iter().collect(),
               phase: Phase::Start, }
    }

    fn stack_snapshot(&self) -> String {
        std::iter::once(SENTINEL).chain(self.stack.iter().map(|slot| slot.raw.as_str()))
                                 .collect::<Vec<_>>()
                                 .join(" ")
    }

    fn input_snapshot(&self) -> String {
        self.input
            .iter()
            .map(ToString::to_string)
            .chain(std::iter::once(SENTINEL.to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn snapshot(&self, operation: Option<String>) -> TraceRecord {
        TraceRecord { operation,
                      stack: Some(self.stack_snapshot()),
                      input: Some(self.input_snapshot()) }
    }

    fn pop(&mut self, marker: Marker) -> EvalResult<Slot> {
        self.stack
            .pop()
            .ok_or_else(|| RuntimeError::StackUnderflow { operator: marker.to_string() })
    }

    /// Applies one postfix item and returns the text of the operation.
    fn step(&mut self, item: PostfixItem) -> EvalResult<String> {
        let marker = match item {
            PostfixItem::Operand(raw) => {
                let value = Value::parse_raw(&raw)?;
                let operation = format!("Stack {raw}");
                self.stack.push(Slot { raw, value });
                return Ok(operation);
            },
            PostfixItem::Operator(marker) => marker,
        };

        let (operation, result) = match marker.arity() {
            Arity::Unary(op) => {
                let operand = self.pop(marker)?;
                let result = Slot::computed(DirectEvaluator::eval_unary(op, operand.value, None)?,
                                            false);
                (format!("{op}{} = {}", operand.raw, result.raw), result)
            },
            Arity::Binary(op) => {
                let right = self.pop(marker)?;
                let left = self.pop(marker)?;
                let value = DirectEvaluator::eval_binary(op, &left.value, &right.value, None)?;
                let trim = matches!(op,
                                    BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Pow);
                let result = Slot::computed(value, trim);
                let operation = match op {
                    BinaryOperator::Pow => format!("{}^{} = {}", left.raw, right.raw, result.raw),
                    _ => format!("{} {op} {} = {}", left.raw, right.raw, result.raw),
                };
                (operation, result)
            },
        };

        self.stack.push(result);
        Ok(operation)
    }

    /// Pops the last value and returns the text of the final record.
    fn finish(&mut self) -> EvalResult<String> {
        let last = self.stack
                       .pop()
                       .ok_or_else(|| RuntimeError::StackUnderflow { operator: SENTINEL.to_string() })?;
        if !self.stack.is_empty() {
            return Err(RuntimeError::UnbalancedStack { remaining: self.stack.len() + 1 });
        }
        Ok(format!("The result is {}", last.value))
    }
}

impl Iterator for Stepper {
    type Item = EngineResult<TraceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.phase {
            Phase::Finished => return None,
            Phase::Start => {
                self.phase = Phase::Running;
                Ok(self.snapshot(None))
            },
            Phase::Running => match self.input.pop_front() {
                Some(item) => self.step(item).map(|operation| self.snapshot(Some(operation))),
                None => {
                    self.phase = Phase::Finished;
                    self.finish().map(|operation| TraceRecord { operation: Some(operation),
                                                                ..TraceRecord::default() })
                },
            },
        };

        match &record {
            Ok(record) => tracing::trace!(operation = ?record.operation,
                                          stack = ?record.stack,
                                          input = ?record.input,
                                          "trace step"),
            Err(error) => {
                tracing::debug!(%error, "trace stopped");
                self.phase = Phase::Finished;
            },
        }

        Some(record.map_err(Into::into))
    }
}

impl FusedIterator for Stepper {}
