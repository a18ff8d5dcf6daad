use crate::{
    error::EngineResult,
    interpreter::{
        compiler::postfix::{Marker, PostfixItem},
        domain::Domain,
        lexer::Token,
        parser::core::{Reduce, parse},
        value::{core::Value, kind::ValueKind},
    },
    operator::{BinaryOperator, UnaryOperator},
};

/// A partial postfix sequence together with the type it evaluates to.
///
/// Only lives while an expression is being compiled; the type is dropped once
/// the whole sequence has been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Typed {
    /// Items in postfix order.
    pub items: Vec<PostfixItem>,
    /// The type the items evaluate to.
    pub kind:  ValueKind,
}

/// Compiles expressions to postfix sequences instead of computing them.
///
/// Type legality is checked with the same table and at the same operators as
/// in [`DirectEvaluator`](crate::interpreter::evaluator::core::DirectEvaluator),
/// so an expression is rejected by the compiler exactly when the evaluator
/// would reject it for its syntax or types. Arithmetic errors such as a zero
/// divisor only show up once the sequence is stepped through.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostfixCompiler;

impl Reduce for PostfixCompiler {
    type Output = Typed;

    fn literal(&self, token: &Token) -> EngineResult<Typed> {
        let kind = Value::from_literal(token)?.kind();
        Ok(Typed { items: vec![PostfixItem::Operand(token.lexeme.clone())],
                   kind })
    }

    fn unary(&self, operator: UnaryOperator, operand: Typed, _position: usize) -> EngineResult<Typed> {
        let Typed { mut items, kind } = operand;
        items.push(PostfixItem::Operator(operator.into()));
        Ok(Typed { items,
                   kind: kind.unary_result(operator) })
    }

    fn binary(&self,
              operator: BinaryOperator,
              left: Typed,
              right: Typed,
              position: usize)
              -> EngineResult<Typed> {
        let kind = ValueKind::check_binary(operator, left.kind, right.kind, position)?;

        let mut items = left.items;
        items.extend(right.items);
        items.push(PostfixItem::Operator(Marker::from(operator)));
        Ok(Typed { items, kind })
    }
}

/// Compiles a token sequence to a postfix sequence.
///
/// # Errors
/// Returns the first parse or type error met, or
/// `EngineError::ResultTypeMismatch` if the result type is outside `domain`.
///
/// # Example
/// ```
/// use blossy::interpreter::{
///     compiler::core::compile, domain::Domain, lexer::tokenize_all,
/// };
///
/// let tokens = tokenize_all("-2 ^ 2 + 3").unwrap();
/// let postfix = compile(&tokens, Domain::Number).unwrap();
/// let text: Vec<_> = postfix.iter().map(ToString::to_string).collect();
///
/// assert_eq!(text, ["2", "2", "^", "-₁", "3", "+₂"]);
/// ```
pub fn compile(tokens: &[Token], domain: Domain) -> EngineResult<Vec<PostfixItem>> {
    let Typed { items, kind } = parse(tokens, &PostfixCompiler)?;
    domain.check(kind)?;
    Ok(items)
}
