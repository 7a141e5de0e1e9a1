//! This module implements `Period`, a date-based amount of years, months,
//! and days.

use crate::{error::ErrorMessage, AmountError, AmountResult};

/// A date-based amount of time, such as "1 year, 2 months and 3 days".
///
/// The fields are independent: a `Period` is never balanced implicitly, so
/// `Period::new(0, 14, 0)` stays fourteen months until
/// [`normalized`][Period::normalized] is called. Days are never folded
/// into months.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Period {
    years: i32,
    months: i32,
    days: i32,
}

impl Period {
    /// A period of zero length.
    pub const ZERO: Self = Self::new(0, 0, 0);

    #[inline]
    #[must_use]
    pub const fn new(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_years(years: i32) -> Self {
        Self::new(years, 0, 0)
    }

    #[inline]
    #[must_use]
    pub const fn from_months(months: i32) -> Self {
        Self::new(0, months, 0)
    }

    /// Creates a period of `weeks` seven-day weeks.
    ///
    /// # Panics
    ///
    /// Panics when the day count does not fit in an `i32`.
    #[inline]
    #[must_use]
    pub const fn from_weeks(weeks: i32) -> Self {
        match weeks.checked_mul(7) {
            Some(days) => Self::from_days(days),
            None => panic!("weeks overflowed the day range"),
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_days(days: i32) -> Self {
        Self::new(0, 0, days)
    }

    #[inline]
    #[must_use]
    pub const fn years(&self) -> i32 {
        self.years
    }

    #[inline]
    #[must_use]
    pub const fn months(&self) -> i32 {
        self.months
    }

    #[inline]
    #[must_use]
    pub const fn days(&self) -> i32 {
        self.days
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Returns whether any field is negative.
    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }

    /// Returns the years and months of this period as a month count.
    #[inline]
    #[must_use]
    pub const fn total_months(&self) -> i64 {
        self.years as i64 * 12 + self.months as i64
    }

    /// Returns a copy of this period with the months balanced into years,
    /// so that the month field is within `-11..=11` and has the same sign
    /// as the year field. Days are unchanged.
    ///
    /// ```rust
    /// use temporal_amount::Period;
    ///
    /// assert_eq!(Period::new(1, 15, 3).normalized().unwrap(), Period::new(2, 3, 3));
    /// assert_eq!(Period::new(1, -1, 0).normalized().unwrap(), Period::new(0, 11, 0));
    /// ```
    pub fn normalized(&self) -> AmountResult<Self> {
        let total = self.total_months();
        let years = i32::try_from(total / 12)
            .map_err(|_| AmountError::range().with_enum(ErrorMessage::NumberOutOfRange))?;
        // NOTE: the remainder is always within -11..=11.
        let months = (total % 12) as i32;
        Ok(Self::new(years, months, self.days))
    }

    /// Negates every field of this period.
    pub fn checked_neg(&self) -> AmountResult<Self> {
        match (
            self.years.checked_neg(),
            self.months.checked_neg(),
            self.days.checked_neg(),
        ) {
            (Some(years), Some(months), Some(days)) => Ok(Self::new(years, months, days)),
            _ => Err(AmountError::range().with_enum(ErrorMessage::NumberOutOfRange)),
        }
    }

    /// Adds two periods field by field.
    pub fn checked_add(&self, other: &Self) -> AmountResult<Self> {
        match (
            self.years.checked_add(other.years),
            self.months.checked_add(other.months),
            self.days.checked_add(other.days),
        ) {
            (Some(years), Some(months), Some(days)) => Ok(Self::new(years, months, days)),
            _ => Err(AmountError::range().with_enum(ErrorMessage::NumberOutOfRange)),
        }
    }
}
