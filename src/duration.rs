//! This module implements `SignedDuration`, the exact time amount produced
//! by the unit-based duration parser.

use core::{cmp::Ordering, str::FromStr};

use crate::{
    error::ErrorMessage, parsers, AmountError, AmountResult, Sign, NS_PER_HOUR, NS_PER_MINUTE,
    NS_PER_SECOND,
};

const NS_PER_SECOND_128BIT: i128 = NS_PER_SECOND as i128;

// ==== SignedDuration ====
//
// Invariants:
//
// nanos.abs() < NS_PER_SECOND
// secs and nanos never have opposite signs

/// An exact, signed amount of time with nanosecond precision.
///
/// The range is that of an `i64` count of seconds, which is wide enough that
/// parsing only fails on genuinely absurd input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SignedDuration {
    secs: i64,
    nanos: i32,
}

impl SignedDuration {
    /// The zero duration.
    pub const ZERO: Self = Self { secs: 0, nanos: 0 };

    /// The largest representable duration.
    pub const MAX: Self = Self {
        secs: i64::MAX,
        nanos: NS_PER_SECOND as i32 - 1,
    };

    /// The smallest representable duration.
    pub const MIN: Self = Self {
        secs: i64::MIN,
        nanos: -(NS_PER_SECOND as i32 - 1),
    };

    /// Creates a new `SignedDuration` from seconds and nanoseconds,
    /// carrying whole seconds out of `nanos`.
    ///
    /// # Panics
    ///
    /// Panics when the carried seconds overflow `i64`.
    #[inline]
    #[must_use]
    pub const fn new(secs: i64, nanos: i32) -> Self {
        let carry = (nanos / NS_PER_SECOND as i32) as i64;
        let mut secs = match secs.checked_add(carry) {
            Some(secs) => secs,
            None => panic!("seconds overflowed while carrying nanoseconds"),
        };
        let mut nanos = nanos % NS_PER_SECOND as i32;
        if secs > 0 && nanos < 0 {
            secs -= 1;
            nanos += NS_PER_SECOND as i32;
        } else if secs < 0 && nanos > 0 {
            secs += 1;
            nanos -= NS_PER_SECOND as i32;
        }
        Self { secs, nanos }
    }

    /// Creates a `SignedDuration` from whole hours.
    ///
    /// # Panics
    ///
    /// Panics when the hours do not fit in an `i64` count of seconds.
    #[inline]
    #[must_use]
    pub const fn from_hours(hours: i64) -> Self {
        match hours.checked_mul((NS_PER_HOUR / NS_PER_SECOND) as i64) {
            Some(secs) => Self::from_secs(secs),
            None => panic!("hours overflowed the seconds range"),
        }
    }

    /// Creates a `SignedDuration` from whole minutes.
    ///
    /// # Panics
    ///
    /// Panics when the minutes do not fit in an `i64` count of seconds.
    #[inline]
    #[must_use]
    pub const fn from_mins(minutes: i64) -> Self {
        match minutes.checked_mul((NS_PER_MINUTE / NS_PER_SECOND) as i64) {
            Some(secs) => Self::from_secs(secs),
            None => panic!("minutes overflowed the seconds range"),
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self { secs, nanos: 0 }
    }

    #[inline]
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self {
            secs: millis / 1_000,
            nanos: ((millis % 1_000) * 1_000_000) as i32,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_micros(micros: i64) -> Self {
        Self {
            secs: micros / 1_000_000,
            nanos: ((micros % 1_000_000) * 1_000) as i32,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self {
            secs: nanos / NS_PER_SECOND as i64,
            nanos: (nanos % NS_PER_SECOND as i64) as i32,
        }
    }

    /// Creates a `SignedDuration` from a total nanosecond count, failing
    /// when the seconds do not fit in an `i64`.
    pub fn try_from_nanos_i128(nanos: i128) -> AmountResult<Self> {
        let secs = i64::try_from(nanos / NS_PER_SECOND_128BIT)
            .map_err(|_| AmountError::range().with_enum(ErrorMessage::NumberOutOfRange))?;
        // NOTE: the remainder is always within (-1e9, 1e9).
        let subsec = (nanos % NS_PER_SECOND_128BIT) as i32;
        Ok(Self {
            secs,
            nanos: subsec,
        })
    }

    /// Returns the total nanoseconds of this duration.
    #[inline]
    #[must_use]
    pub const fn as_nanos(&self) -> i128 {
        self.secs as i128 * NS_PER_SECOND_128BIT + self.nanos as i128
    }

    /// Returns the whole hours of this duration, truncated toward zero.
    #[inline]
    #[must_use]
    pub const fn as_hours(&self) -> i64 {
        self.secs / (NS_PER_HOUR / NS_PER_SECOND) as i64
    }

    /// Returns the whole minutes of this duration, truncated toward zero.
    #[inline]
    #[must_use]
    pub const fn as_mins(&self) -> i64 {
        self.secs / (NS_PER_MINUTE / NS_PER_SECOND) as i64
    }

    /// Returns the whole seconds of this duration.
    #[inline]
    #[must_use]
    pub const fn as_secs(&self) -> i64 {
        self.secs
    }

    /// Returns the fractional part of this duration in whole milliseconds.
    #[inline]
    #[must_use]
    pub const fn subsec_millis(&self) -> i32 {
        self.nanos / 1_000_000
    }

    /// Returns the fractional part of this duration in nanoseconds.
    #[inline]
    #[must_use]
    pub const fn subsec_nanos(&self) -> i32 {
        self.nanos
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.secs == 0 && self.nanos == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.secs < 0 || self.nanos < 0
    }

    #[inline]
    #[must_use]
    pub fn sign(&self) -> Sign {
        match self.secs.cmp(&0).then(self.nanos.cmp(&0)) {
            Ordering::Greater => Sign::Positive,
            Ordering::Equal => Sign::Zero,
            Ordering::Less => Sign::Negative,
        }
    }

    /// Returns the absolute value of this duration.
    pub fn abs(&self) -> AmountResult<Self> {
        if self.is_negative() {
            return self.checked_neg();
        }
        Ok(*self)
    }

    /// Negates this duration.
    pub fn checked_neg(&self) -> AmountResult<Self> {
        let secs = self
            .secs
            .checked_neg()
            .ok_or(AmountError::range().with_enum(ErrorMessage::NumberOutOfRange))?;
        Ok(Self {
            secs,
            nanos: -self.nanos,
        })
    }

    /// Adds two durations, failing on overflow.
    pub fn checked_add(&self, other: &Self) -> AmountResult<Self> {
        let result = self
            .as_nanos()
            .checked_add(other.as_nanos())
            .ok_or(AmountError::range().with_enum(ErrorMessage::NumberOutOfRange))?;
        Self::try_from_nanos_i128(result)
    }

    /// Multiplies this duration by a scalar, failing on overflow.
    pub fn checked_mul(&self, rhs: i64) -> AmountResult<Self> {
        let result = self
            .as_nanos()
            .checked_mul(i128::from(rhs))
            .ok_or(AmountError::range().with_enum(ErrorMessage::NumberOutOfRange))?;
        Self::try_from_nanos_i128(result)
    }

    /// Divides this duration by a scalar, truncating toward zero at
    /// nanosecond precision.
    pub fn checked_div(&self, rhs: i64) -> AmountResult<Self> {
        if rhs == 0 {
            return Err(AmountError::range().with_message("Cannot divide a duration by zero."));
        }
        let result = self
            .as_nanos()
            .checked_div(i128::from(rhs))
            .ok_or(AmountError::range().with_enum(ErrorMessage::NumberOutOfRange))?;
        Self::try_from_nanos_i128(result)
    }
}

impl FromStr for SignedDuration {
    type Err = AmountError;

    /// Parses a unit-based duration such as `"2h45m"`.
    ///
    /// See [`parse_unit_based_duration`][crate::parsers::parse_unit_based_duration].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::parse_unit_based_duration(s)
    }
}

impl From<core::time::Duration> for SignedDuration {
    /// Converts an unsigned `core` duration, saturating at [`SignedDuration::MAX`].
    fn from(value: core::time::Duration) -> Self {
        let Ok(secs) = i64::try_from(value.as_secs()) else {
            return Self::MAX;
        };
        Self {
            secs,
            nanos: value.subsec_nanos() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SignedDuration;
    use crate::Sign;

    #[test]
    fn new_carries_and_balances_signs() {
        let d = SignedDuration::new(1, 1_500_000_000);
        assert_eq!(d.as_secs(), 2);
        assert_eq!(d.subsec_nanos(), 500_000_000);

        let d = SignedDuration::new(1, -500_000_000);
        assert_eq!(d.as_secs(), 0);
        assert_eq!(d.subsec_nanos(), 500_000_000);

        let d = SignedDuration::new(-1, 500_000_000);
        assert_eq!(d.as_secs(), 0);
        assert_eq!(d.subsec_nanos(), -500_000_000);
    }

    #[test]
    fn unit_constructors() {
        assert_eq!(SignedDuration::from_hours(2).as_secs(), 7200);
        assert_eq!(SignedDuration::from_mins(-3).as_secs(), -180);
        assert_eq!(SignedDuration::from_millis(1_500).subsec_millis(), 500);
        assert_eq!(SignedDuration::from_micros(-1_500).as_nanos(), -1_500_000);
        assert_eq!(SignedDuration::from_nanos(1_000_000_001).as_secs(), 1);
    }

    #[test]
    fn checked_arithmetic() {
        let hour = SignedDuration::from_hours(1);
        let minutes = SignedDuration::from_mins(30);
        assert_eq!(
            hour.checked_add(&minutes).unwrap(),
            SignedDuration::from_mins(90)
        );
        assert_eq!(
            hour.checked_div(2).unwrap(),
            SignedDuration::from_mins(30)
        );
        assert_eq!(
            SignedDuration::from_nanos(7).checked_div(2).unwrap(),
            SignedDuration::from_nanos(3)
        );
        assert_eq!(
            SignedDuration::from_nanos(-7).checked_div(2).unwrap(),
            SignedDuration::from_nanos(-3)
        );
        assert!(SignedDuration::MAX.checked_add(&hour).is_err());
        assert!(SignedDuration::MAX.checked_mul(2).is_err());
        assert!(SignedDuration::MIN.checked_neg().is_err());
        assert!(hour.checked_div(0).is_err());
    }

    #[test]
    fn unit_constructors_at_the_range_limit() {
        let max_hours = i64::MAX / 3_600;
        assert_eq!(SignedDuration::from_hours(max_hours).as_hours(), max_hours);
        assert_eq!(SignedDuration::from_mins(i64::MIN / 60).as_mins(), i64::MIN / 60);
    }

    #[test]
    #[should_panic(expected = "hours overflowed")]
    fn from_hours_overflow_panics() {
        let _ = SignedDuration::from_hours(i64::MAX / 3_600 + 1);
    }

    #[test]
    #[should_panic(expected = "minutes overflowed")]
    fn from_mins_overflow_panics() {
        let _ = SignedDuration::from_mins(i64::MIN / 60 - 1);
    }

    #[test]
    fn sign_and_components() {
        let d = SignedDuration::new(-3_725, -250_000_000);
        assert_eq!(d.sign(), Sign::Negative);
        assert!(d.is_negative());
        assert_eq!(d.as_hours(), -1);
        assert_eq!(d.as_mins(), -62);
        assert_eq!(d.subsec_millis(), -250);
        assert_eq!(d.abs().unwrap(), SignedDuration::new(3_725, 250_000_000));
        assert_eq!(SignedDuration::ZERO.sign(), Sign::Zero);
        assert_eq!(SignedDuration::from_nanos(1).sign(), Sign::Positive);
    }
}
