/// Plain numbers.
///
/// Defines the `Number` type, an integer or a double-precision float, with
/// parsing from literal and stack text and the two rendering styles used by
/// the direct evaluator (rounded) and the stepper (raw).
pub mod number;
/// Clock-style durations.
///
/// Defines the `Duration` type, a signed span of whole seconds written as
/// `M:SS` or `H:MM:SS` and always displayed as `H:MM:SS`.
pub mod duration;
/// Value types and the type legality table.
///
/// `ValueKind` names the two value domains and decides, per operator, which
/// combinations of operand types are legal and what type they produce. Both
/// the direct evaluator and the postfix compiler consult this table.
pub mod kind;

pub mod core;
