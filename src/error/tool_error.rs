use std::path::PathBuf;

#[derive(Debug)]
/// Represents all errors raised by the file and number utilities.
pub enum ToolError {
    /// The given path does not exist.
    FileNotFound {
        /// The path as resolved against the working directory.
        path: PathBuf,
    },
    /// The given path exists but is not a regular file.
    NotAFile {
        /// The offending path.
        path: PathBuf,
    },
    /// The given path exists but is not a directory.
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },
    /// The lower bound of a range is above its upper bound.
    InvalidRange {
        /// Lower bound (inclusive).
        lower: i64,
        /// Upper bound (inclusive).
        upper: i64,
    },
    /// A percentage could not be solved because it would divide by zero.
    ResultDoesNotExist,
    /// Fewer than two of the three percentage quantities were supplied.
    NotEnoughParameters,
    /// A renaming sequence was asked to start below zero.
    NegativeStart {
        /// The requested starting id.
        start: i64,
    },
    /// Any other I/O failure.
    Io {
        /// The path being accessed.
        path:   PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileNotFound { path } => write!(f, "'{}' does not exist.", path.display()),
            Self::NotAFile { path } => write!(f, "'{}' is not a file.", path.display()),
            Self::NotADirectory { path } => write!(f, "'{}' is not a directory.", path.display()),
            Self::InvalidRange { .. } => write!(f, "Invalid range."),
            Self::ResultDoesNotExist => write!(f, "Result does not exist."),
            Self::NotEnoughParameters => write!(f, "Less than two parameters passed."),
            Self::NegativeStart { .. } => write!(f, "Negative starting number."),
            Self::Io { path, source } => {
                write!(f, "Failed to access '{}': {source}", path.display())
            },
        }
    }
}

impl std::error::Error for ToolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl ToolError {
    /// Classifies an I/O failure on `path`, mapping "not found" to
    /// [`ToolError::FileNotFound`] and keeping everything else as
    /// [`ToolError::Io`].
    #[must_use]
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound { path },
            std::io::ErrorKind::IsADirectory => Self::NotAFile { path },
            std::io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            _ => Self::Io { path, source },
        }
    }
}
