use crate::error::ToolError;

/// The quantity a percentage problem was solved for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Percentage {
    /// `part / whole`
    Ratio(f64),
    /// `whole * ratio`
    Part(f64),
    /// `part / ratio`
    Whole(f64),
}

impl Percentage {
    /// Returns the solved quantity without its label.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Ratio(v) | Self::Part(v) | Self::Whole(v) => v,
        }
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ratio(v) => write!(f, "Ratio: {v:?}"),
            Self::Part(v) => write!(f, "Part: {v:?}"),
            Self::Whole(v) => write!(f, "Whole: {v:?}"),
        }
    }
}

/// Given two of `whole`, `part` and `ratio`, computes the third.
///
/// When all three are given, `ratio` is recomputed from `whole` and `part`.
///
/// # Errors
/// - `ToolError::ResultDoesNotExist` if the computation would divide by zero.
/// - `ToolError::NotEnoughParameters` if fewer than two are given.
///
/// # Example
/// ```
/// use blossy::tools::percentage::{Percentage, solve_percentage};
///
/// assert_eq!(solve_percentage(Some(100.0), Some(25.0), None).unwrap(),
///            Percentage::Ratio(0.25));
/// assert_eq!(solve_percentage(None, Some(25.0), Some(0.5)).unwrap().to_string(),
///            "Whole: 50.0");
/// assert!(solve_percentage(Some(0.0), Some(3.0), None).is_err());
/// ```
pub fn solve_percentage(whole: Option<f64>,
                        part: Option<f64>,
                        ratio: Option<f64>)
                        -> Result<Percentage, ToolError> {
    match (whole, part, ratio) {
        (Some(whole), Some(part), _) => {
            if whole == 0.0 {
                return Err(ToolError::ResultDoesNotExist);
            }
            Ok(Percentage::Ratio(part / whole))
        },
        (Some(whole), None, Some(ratio)) => Ok(Percentage::Part(whole * ratio)),
        (None, Some(part), Some(ratio)) => {
            if ratio == 0.0 {
                return Err(ToolError::ResultDoesNotExist);
            }
            Ok(Percentage::Whole(part / ratio))
        },
        _ => Err(ToolError::NotEnoughParameters),
    }
}
