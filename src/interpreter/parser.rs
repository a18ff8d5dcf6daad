/// The grammar entry points and the `Reduce` strategy trait.
///
/// The grammar is written once. What a production turns into (a value, or a
/// typed postfix sequence) is decided by the `Reduce` implementation it is
/// driven with.
pub mod core;

/// Binary operator productions.
///
/// Implements the additive, multiplicative and exponent precedence tiers.
pub mod binary;

/// Unary and primary productions.
///
/// Handles prefix `+`/`-`, literals and parenthesized groups.
pub mod unary;
