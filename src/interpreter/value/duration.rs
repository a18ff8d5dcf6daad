/// A signed span of time stored as whole seconds.
///
/// Durations are written in expressions as `M:SS` or `H:MM:SS`, where each
/// component may have any number of digits (`90:75` is 1 hour, 31 minutes and
/// 15 seconds). They always display as `H:MM:SS`: hours unpadded, minutes and
/// seconds padded to two digits, and a leading `-` when negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration {
    total_seconds: i64,
}

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;

impl Duration {
    /// The empty duration, `0:00:00`.
    pub const ZERO: Self = Self { total_seconds: 0 };

    /// Creates a duration from a signed number of seconds.
    #[must_use]
    pub const fn from_seconds(total_seconds: i64) -> Self {
        Self { total_seconds }
    }

    /// Creates a duration from hours, minutes and seconds.
    ///
    /// Components are not required to be normalized. Returns `None` if the
    /// total does not fit in `i64` seconds.
    ///
    /// # Example
    /// ```
    /// use blossy::interpreter::value::duration::Duration;
    ///
    /// assert_eq!(Duration::from_hms(1, 30, 0).unwrap().total_seconds(), 5400);
    /// assert_eq!(Duration::from_hms(0, 90, 75).unwrap().to_string(), "1:31:15");
    /// ```
    #[must_use]
    pub fn from_hms(hours: i64, minutes: i64, seconds: i64) -> Option<Self> {
        let total = hours.checked_mul(SECONDS_PER_HOUR)?
                         .checked_add(minutes.checked_mul(SECONDS_PER_MINUTE)?)?
                         .checked_add(seconds)?;
        Some(Self::from_seconds(total))
    }

    /// Returns the total number of seconds.
    #[must_use]
    pub const fn total_seconds(self) -> i64 {
        self.total_seconds
    }

    /// Returns `true` if the duration is shorter than zero.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.total_seconds < 0
    }

    /// Reads a duration from `M:SS` or `H:MM:SS` text, with an optional
    /// leading `-`.
    ///
    /// The literal grammar never produces the sign; it appears on stack
    /// entries the stepper wrote for negative results.
    ///
    /// # Example
    /// ```
    /// use blossy::interpreter::value::duration::Duration;
    ///
    /// assert_eq!(Duration::parse("1:30").unwrap().total_seconds(), 90);
    /// assert_eq!(Duration::parse("2:00:05").unwrap().total_seconds(), 7205);
    /// assert_eq!(Duration::parse("-0:01:30").unwrap().total_seconds(), -90);
    /// assert!(Duration::parse("1:2:3:4").is_none());
    /// assert!(Duration::parse("1:x").is_none());
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let (negative, body) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        let mut parts = Vec::with_capacity(3);
        for part in body.split(':') {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            parts.push(part.parse::<i64>().ok()?);
        }

        let duration = match parts.as_slice() {
            [minutes, seconds] => Self::from_hms(0, *minutes, *seconds)?,
            [hours, minutes, seconds] => Self::from_hms(*hours, *minutes, *seconds)?,
            _ => return None,
        };

        if negative { duration.checked_neg() } else { Some(duration) }
    }

    /// Adds two durations, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.total_seconds.checked_add(other.total_seconds) {
            Some(total) => Some(Self::from_seconds(total)),
            None => None,
        }
    }

    /// Subtracts two durations, returning `None` on overflow.
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.total_seconds.checked_sub(other.total_seconds) {
            Some(total) => Some(Self::from_seconds(total)),
            None => None,
        }
    }

    /// Negates the duration, returning `None` on overflow.
    #[must_use]
    pub const fn checked_neg(self) -> Option<Self> {
        match self.total_seconds.checked_neg() {
            Some(total) => Some(Self::from_seconds(total)),
            None => None,
        }
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let magnitude = self.total_seconds.unsigned_abs();
        let hours = magnitude / SECONDS_PER_HOUR.unsigned_abs();
        let minutes = magnitude % SECONDS_PER_HOUR.unsigned_abs() / SECONDS_PER_MINUTE.unsigned_abs();
        let seconds = magnitude % SECONDS_PER_MINUTE.unsigned_abs();
        let sign = if self.is_negative() { "-" } else { "" };

        write!(f, "{sign}{hours}:{minutes:02}:{seconds:02}")
    }
}
