use rand::Rng;

use crate::error::ToolError;

/// Draws `quantity` integers uniformly from `lower..=upper`.
///
/// # Errors
/// Returns `ToolError::InvalidRange` if `lower > upper`.
///
/// # Example
/// ```
/// use blossy::tools::random::random_numbers;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let numbers = random_numbers(1, 6, 10, &mut rng).unwrap();
///
/// assert_eq!(numbers.len(), 10);
/// assert!(numbers.iter().all(|n| (1..=6).contains(n)));
/// ```
pub fn random_numbers<R>(lower: i64,
                         upper: i64,
                         quantity: usize,
                         rng: &mut R)
                         -> Result<Vec<i64>, ToolError>
    where R: Rng
{
    if lower > upper {
        return Err(ToolError::InvalidRange { lower, upper });
    }
    Ok((0..quantity).map(|_| rng.gen_range(lower..=upper)).collect())
}
