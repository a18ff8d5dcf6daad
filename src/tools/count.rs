use std::{fs, path::Path};

use crate::error::ToolError;

/// Which characters [`count_chars`] leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharCountOptions {
    /// Leave out whitespace at the start and end of the text, and whitespace
    /// that directly follows other whitespace.
    pub ignore_unnecessary: bool,
    /// Leave out all whitespace. Takes precedence over `ignore_unnecessary`.
    pub ignore_whitespace:  bool,
}

/// Reads a UTF-8 text file.
fn read_text(path: &Path) -> Result<String, ToolError> {
    if path.is_dir() {
        return Err(ToolError::NotAFile { path: path.to_path_buf() });
    }
    fs::read_to_string(path).map_err(|e| ToolError::from_io(path.to_path_buf(), e))
}

/// Counts the characters of `text`.
///
/// # Example
/// ```
/// use blossy::tools::count::{CharCountOptions, count_chars_in};
///
/// let text = "  a  b \n";
/// assert_eq!(count_chars_in(text, CharCountOptions::default()), 8);
///
/// let unnecessary = CharCountOptions { ignore_unnecessary: true,
///                                      ..CharCountOptions::default() };
/// assert_eq!(count_chars_in(text, unnecessary), 3);
///
/// let whitespace = CharCountOptions { ignore_whitespace: true,
///                                     ..CharCountOptions::default() };
/// assert_eq!(count_chars_in(text, whitespace), 2);
/// ```
#[must_use]
pub fn count_chars_in(text: &str, options: CharCountOptions) -> usize {
    if options.ignore_whitespace {
        return text.chars().filter(|c| !c.is_whitespace()).count();
    }
    if !options.ignore_unnecessary {
        return text.chars().count();
    }

    let mut previous_was_space = false;
    text.trim()
        .chars()
        .filter(|c| {
            let is_space = c.is_whitespace();
            let counted = !(is_space && previous_was_space);
            previous_was_space = is_space;
            counted
        })
        .count()
}

/// Counts the characters of the file at `path`.
///
/// # Errors
/// - `ToolError::FileNotFound` if `path` does not exist.
/// - `ToolError::NotAFile` if `path` is a directory.
/// - `ToolError::Io` if the file cannot be read as UTF-8 text.
pub fn count_chars(path: &Path, options: CharCountOptions) -> Result<usize, ToolError> {
    let text = read_text(path)?;
    let count = count_chars_in(&text, options);
    tracing::debug!(path = %path.display(), ?options, count, "counted characters");
    Ok(count)
}

/// Counts the lines of `text`, optionally skipping lines that hold nothing
/// but whitespace.
///
/// # Example
/// ```
/// use blossy::tools::count::count_lines_in;
///
/// let text = "fn main() {\n\n    \n}\n";
/// assert_eq!(count_lines_in(text, false), 4);
/// assert_eq!(count_lines_in(text, true), 2);
/// ```
#[must_use]
pub fn count_lines_in(text: &str, ignore_blank: bool) -> usize {
    text.lines()
        .filter(|line| !ignore_blank || !line.trim().is_empty())
        .count()
}

/// Counts the lines of the file at `path`.
///
/// # Errors
/// As [`count_chars`].
pub fn count_lines(path: &Path, ignore_blank: bool) -> Result<usize, ToolError> {
    let text = read_text(path)?;
    let count = count_lines_in(&text, ignore_blank);
    tracing::debug!(path = %path.display(), ignore_blank, count, "counted lines");
    Ok(count)
}
