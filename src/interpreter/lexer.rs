use logos::Logos;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// Patterns are tried longest-match first, so `1:30` lexes as one
/// [`TokenKind::TimeConst`] rather than an integer followed by garbage, and
/// `2.5` as one [`TokenKind::FloatConst`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// Duration literal tokens, `minutes:seconds` or
    /// `hours:minutes:seconds`, such as `43:21` or `65:43:21`.
    #[regex(r"([0-9]+:)?[0-9]+:[0-9]+")]
    TimeConst,
    /// Floating-point literal tokens, such as `12.34`.
    #[regex(r"[0-9]+\.[0-9]+")]
    FloatConst,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    IntConst,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Times,
    /// `/`
    #[token("/")]
    Divide,
    /// `^`
    #[token("^")]
    Exponent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces. Only the ASCII space is insignificant.
    ///
    /// Runs of spaces are skipped by the lexer, so no token of this kind is
    /// ever produced. The variant exists only to carry the skip pattern.
    #[doc(hidden)]
    #[regex(r" +", logos::skip)]
    Ignored,
}

/// A token together with its source text and position.
///
/// Tokens are immutable once produced. The end of input is not a token; it is
/// the end of the token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// The exact slice of source the token was read from.
    pub lexeme:   String,
    /// Byte offset of the first character of the token.
    pub position: usize,
}

impl Token {
    /// Returns `true` if the token is a numeric or duration literal.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self.kind,
                 TokenKind::TimeConst | TokenKind::FloatConst | TokenKind::IntConst)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

/// Lazily splits `source` into tokens.
///
/// The sequence is finite and yields one `Err` for the first character that
/// matches no pattern. Consumers are expected to stop there; the sequence is
/// not resumable, so tokenizing again means calling this function again.
///
/// # Example
/// ```
/// use blossy::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("1:30 * 2.5").map(|t| t.unwrap().kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::TimeConst, TokenKind::Times, TokenKind::FloatConst]);
///
/// let error = tokenize("2 % 3").find_map(Result::err).unwrap();
/// assert_eq!(error.position, 2);
/// ```
pub fn tokenize(source: &str) -> impl Iterator<Item = Result<Token, LexError>> + '_ {
    TokenKind::lexer(source).spanned().map(move |(kind, span)| {
                                          let lexeme = source[span.clone()].to_string();
                                          match kind {
                                              Ok(kind) => Ok(Token { kind,
                                                                     lexeme,
                                                                     position: span.start }),
                                              Err(()) => Err(LexError { fragment: lexeme,
                                                                        position: span.start, }),
                                          }
                                      })
}

/// Tokenizes all of `source`, stopping at the first lexical error.
///
/// # Errors
/// Returns the [`LexError`] of the first unrecognized character.
pub fn tokenize_all(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize(source).collect()
}
