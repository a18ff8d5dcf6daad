use crate::{error::EngineError, interpreter::value::kind::ValueKind};

/// Which result types an entry point accepts.
///
/// `calc` wants a number and `calct` wants a time. The library default accepts
/// either and leaves the decision to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Domain {
    /// The result must be a number.
    Number,
    /// The result must be a duration.
    Time,
    /// Any result type is accepted.
    #[default]
    Mixed,
}

impl Domain {
    /// Maps the boolean mode flag of `compile_and_trace` to a domain.
    #[must_use]
    pub const fn from_time_mode(time_mode: bool) -> Self {
        if time_mode { Self::Time } else { Self::Number }
    }

    /// The single type this domain accepts, or `None` for [`Domain::Mixed`].
    #[must_use]
    pub const fn expected(self) -> Option<ValueKind> {
        match self {
            Self::Number => Some(ValueKind::Number),
            Self::Time => Some(ValueKind::Duration),
            Self::Mixed => None,
        }
    }

    /// Checks the type of a finished result against the domain.
    ///
    /// # Errors
    /// Returns [`EngineError::ResultTypeMismatch`] if `found` is not accepted.
    ///
    /// # Example
    /// ```
    /// use blossy::interpreter::{domain::Domain, value::kind::ValueKind};
    ///
    /// assert!(Domain::Time.check(ValueKind::Duration).is_ok());
    /// assert!(Domain::Mixed.check(ValueKind::Number).is_ok());
    ///
    /// let error = Domain::Number.check(ValueKind::Duration).unwrap_err();
    /// assert_eq!(error.to_string(), "Result is time (use 'calct' instead)");
    /// ```
    pub fn check(self, found: ValueKind) -> Result<(), EngineError> {
        match self.expected() {
            Some(expected) if expected != found => {
                Err(EngineError::ResultTypeMismatch { expected, found })
            },
            _ => Ok(()),
        }
    }
}
