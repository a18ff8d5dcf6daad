use crate::util::num::{format_for_display, format_whole, i64_to_f64, is_whole};

/// A plain number: an exact integer or a double-precision float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double-precision float.
    Real(f64),
}

impl Number {
    /// Returns the number as an `f64`, widening integers.
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Real(r) => r,
        }
    }

    /// Returns `true` if the number equals zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Reads a number back from its raw text form.
    ///
    /// Text with a decimal point is a float. Text without one is an integer
    /// when it fits in `i64`, and a float otherwise (long digit strings are
    /// how the stepper writes large whole floats).
    ///
    /// # Example
    /// ```
    /// use blossy::interpreter::value::number::Number;
    ///
    /// assert_eq!(Number::parse("-12"), Some(Number::Integer(-12)));
    /// assert_eq!(Number::parse("3.0"), Some(Number::Real(3.0)));
    /// assert_eq!(Number::parse("100000000000000000000"), Some(Number::Real(1e20)));
    /// assert_eq!(Number::parse("abc"), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.contains('.') {
            return raw.parse().ok().map(Self::Real);
        }
        raw.parse()
           .map(Self::Integer)
           .or_else(|_| raw.parse().map(Self::Real))
           .ok()
    }

    /// Renders the number for the stepper's stack.
    ///
    /// Floats keep every digit. When `trim` is `false` a whole float keeps a
    /// trailing `.0` so it reads back as a float; when `trim` is `true` it is
    /// written like an integer.
    ///
    /// # Example
    /// ```
    /// use blossy::interpreter::value::number::Number;
    ///
    /// assert_eq!(Number::Real(3.0).to_raw(false), "3.0");
    /// assert_eq!(Number::Real(3.0).to_raw(true), "3");
    /// assert_eq!(Number::Real(0.125).to_raw(true), "0.125");
    /// assert_eq!(Number::Real(2f64.powi(64)).to_raw(true), "18446744073709551616");
    /// ```
    #[must_use]
    pub fn to_raw(self, trim: bool) -> String {
        match self {
            Self::Integer(n) => n.to_string(),
            Self::Real(r) if is_whole(r) && !trim => format!("{r:.1}"),
            Self::Real(r) if is_whole(r) => format_whole(r),
            Self::Real(r) => r.to_string(),
        }
    }
}

impl std::fmt::Display for Number {
    /// Whole numbers are shown without a decimal point, everything else is
    /// rounded to two fractional digits and keeps at least one.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{}", format_for_display(*r)),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for Number {
    fn from(r: f64) -> Self {
        Self::Real(r)
    }
}
