/// Character and line counting.
pub mod count;
/// Solving `part = whole * ratio` for the missing quantity.
pub mod percentage;
/// Random integers in an inclusive range.
pub mod random;
/// Batch renaming of the files in a directory to `{prefix}-{id}`.
pub mod standardize;
