#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while arithmetic is carried out.
///
/// Positions are byte offsets of the operator in the source. The stepper works
/// on postfix sequences that no longer carry source offsets, so its errors
/// leave the position empty.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the `/` operator, if known.
        position: Option<usize>,
    },
    /// A duration left the range of representable seconds.
    Overflow {
        /// Byte offset of the operator, if known.
        position: Option<usize>,
    },
    /// The numeric result is not a finite real number (e.g. `0 ^ -1`).
    UndefinedResult {
        /// Byte offset of the operator, if known.
        position: Option<usize>,
    },
    /// A stack entry could not be read back as a number or duration.
    MalformedOperand {
        /// The raw entry.
        operand: String,
    },
    /// The operand types are not legal for the operator. The grammar rejects
    /// these before any arithmetic runs; this is what arithmetic reports when
    /// it is driven directly.
    UnsupportedOperation {
        /// The operation as written, e.g. `1:00 ^ 2`.
        operation: String,
    },
    /// An operator found fewer operands on the stack than it needs.
    StackUnderflow {
        /// The operator marker that was being applied.
        operator: String,
    },
    /// The input ran out while the stack held more than one value.
    UnbalancedStack {
        /// How many values were left on the stack.
        remaining: usize,
    },
}

/// Renders the optional " near index i" suffix shared by the messages.
fn near(position: Option<usize>) -> String {
    position.map_or_else(String::new, |p| format!(" near index {p}"))
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => write!(f, "Division by zero{}", near(*position)),
            Self::Overflow { position } => {
                write!(f, "Time value out of range{}", near(*position))
            },
            Self::UndefinedResult { position } => {
                write!(f, "Result is not a finite number{}", near(*position))
            },
            Self::MalformedOperand { operand } => {
                write!(f, "Stack entry '{operand}' is neither a number nor a time")
            },
            Self::UnsupportedOperation { operation } => {
                write!(f, "Operation {operation} is not supported")
            },
            Self::StackUnderflow { operator } => {
                write!(f, "Operation {operator} is missing an operand")
            },
            Self::UnbalancedStack { remaining } => {
                write!(f, "Input ended with {remaining} values on the stack")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
