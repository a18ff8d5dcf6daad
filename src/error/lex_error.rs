/// A character in the input matched none of the token patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// The offending slice of the source.
    pub fragment: String,
    /// Byte offset of the fragment in the source.
    pub position: usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Unrecognized character '{}' near index {}",
               self.fragment, self.position)
    }
}

impl std::error::Error for LexError {}
