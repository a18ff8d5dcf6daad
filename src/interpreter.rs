/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer reads the raw text and produces a sequence of tokens, each a
/// literal (integer, float or duration), an operator, or a parenthesis, with
/// the byte offset it starts at. Spaces are skipped. This is the first stage
/// of interpretation.
pub mod lexer;
/// The parser module recognizes the expression grammar.
///
/// The grammar is written once and is generic over a reduction strategy, so
/// the same precedence rules drive both direct evaluation and compilation to
/// postfix form.
///
/// # Responsibilities
/// - Validates the grammar, reporting errors with the offending position.
/// - Calls the reduction strategy bottom-up for every literal and operator.
pub mod parser;
/// The value module defines the data types expressions compute.
///
/// # Responsibilities
/// - Defines the `Value` enum and its number and duration variants.
/// - Defines the type legality table shared by both evaluation paths.
/// - Renders values for display and for the stepper's stack.
pub mod value;
/// The evaluator module computes values directly while parsing.
///
/// Also owns all arithmetic on values; the stepper reuses it.
pub mod evaluator;
/// The compiler module turns expressions into typed postfix sequences.
pub mod compiler;
/// The stepper module replays postfix sequences one step at a time.
///
/// Produces a lazy sequence of trace records suitable for an interactive,
/// step-by-step visualization. Pacing belongs to the consumer.
pub mod stepper;
/// The domain module decides which result types an entry point accepts.
pub mod domain;
