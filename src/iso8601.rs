//! ISO-8601 formatting of amounts: `P1Y2M3D`, `PT8H6M12.345S`, and the
//! combined `P1DT5H` form.

use alloc::string::String;
use core::fmt;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{Period, SignedDuration};

// ==== Period ====

/// An ISO-8601 period, `P[nY][nM][nD]`.
#[derive(Debug, Clone, Copy)]
pub struct FormattablePeriod {
    years: i32,
    months: i32,
    days: i32,
}

impl FormattablePeriod {
    fn write_components<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        checked_write_i32_with_suffix(self.years, 'Y', sink)?;
        checked_write_i32_with_suffix(self.months, 'M', sink)?;
        checked_write_i32_with_suffix(self.days, 'D', sink)
    }
}

impl Writeable for FormattablePeriod {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_char('P')?;
        if self.years == 0 && self.months == 0 && self.days == 0 {
            return sink.write_str("0D");
        }
        self.write_components(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        // "P" plus at most three signed 32-bit components and their suffixes.
        LengthHint::between(3, 1 + 3 * 12)
    }
}

fn checked_write_i32_with_suffix<W: fmt::Write + ?Sized>(
    val: i32,
    suffix: char,
    sink: &mut W,
) -> fmt::Result {
    if val == 0 {
        return Ok(());
    }
    val.write_to(sink)?;
    sink.write_char(suffix)
}

// ==== Duration ====

/// An ISO-8601 time-based duration, `PT[nH][nM][n[.f]S]`.
///
/// Each component carries its own sign. Seconds are written as a decimal
/// with trailing zeros removed, so a negative sub-second duration is
/// written as `PT-0.5S`.
#[derive(Debug, Clone, Copy)]
pub struct FormattableDuration {
    hours: i64,
    minutes: i64,
    seconds: i64,
    nanoseconds: i32,
}

impl FormattableDuration {
    fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0 && self.nanoseconds == 0
    }

    /// Writes the duration without its leading `P`.
    fn write_time<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_char('T')?;
        if self.is_zero() {
            return sink.write_str("0S");
        }
        checked_write_i64_with_suffix(self.hours, 'H', sink)?;
        checked_write_i64_with_suffix(self.minutes, 'M', sink)?;
        if self.seconds == 0 && self.nanoseconds == 0 {
            return Ok(());
        }
        if self.seconds < 0 || self.nanoseconds < 0 {
            sink.write_char('-')?;
        }
        self.seconds.unsigned_abs().write_to(sink)?;
        if self.nanoseconds != 0 {
            sink.write_char('.')?;
            let (digits, precision) = u32_to_digits(self.nanoseconds.unsigned_abs());
            write_digit_slice_to_precision(digits, precision, sink)?;
        }
        sink.write_char('S')
    }
}

impl Writeable for FormattableDuration {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_char('P')?;
        self.write_time(sink)
    }
}

fn checked_write_i64_with_suffix<W: fmt::Write + ?Sized>(
    val: i64,
    suffix: char,
    sink: &mut W,
) -> fmt::Result {
    if val == 0 {
        return Ok(());
    }
    val.write_to(sink)?;
    sink.write_char(suffix)
}

/// Splits a nanosecond value into its nine decimal digits, returning the
/// digits and the index after the last non-zero digit.
fn u32_to_digits(mut value: u32) -> ([u8; 9], usize) {
    let mut output = [0; 9];
    let mut precision = 0;
    let mut i = 9;
    while i != 0 {
        let v = (value % 10) as u8;
        value /= 10;
        if precision == 0 && v != 0 {
            precision = i;
        }
        output[i - 1] = v;
        i -= 1;
    }
    (output, precision)
}

fn write_digit_slice_to_precision<W: fmt::Write + ?Sized>(
    digits: [u8; 9],
    precision: usize,
    sink: &mut W,
) -> fmt::Result {
    for digit in digits.iter().take(precision) {
        digit.write_to(sink)?;
    }
    Ok(())
}

// ==== Combined ====

/// A period followed by a time-based duration, such as `P1DT5H`.
#[derive(Debug, Clone, Copy)]
pub struct FormattablePeriodDuration {
    period: FormattablePeriod,
    duration: FormattableDuration,
}

impl Writeable for FormattablePeriodDuration {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        let period_is_zero =
            self.period.years == 0 && self.period.months == 0 && self.period.days == 0;
        if period_is_zero {
            return self.duration.write_to(sink);
        }
        self.period.write_to(sink)?;
        if self.duration.is_zero() {
            return Ok(());
        }
        self.duration.write_time(sink)
    }
}

impl_display_with_writeable!(FormattablePeriod);
impl_display_with_writeable!(FormattableDuration);
impl_display_with_writeable!(FormattablePeriodDuration);

impl From<&Period> for FormattablePeriod {
    fn from(period: &Period) -> Self {
        Self {
            years: period.years(),
            months: period.months(),
            days: period.days(),
        }
    }
}

impl From<&SignedDuration> for FormattableDuration {
    fn from(duration: &SignedDuration) -> Self {
        Self {
            hours: duration.as_hours(),
            minutes: duration.as_mins() % 60,
            seconds: duration.as_secs() % 60,
            nanoseconds: duration.subsec_nanos(),
        }
    }
}

impl Period {
    /// Returns this period as an ISO-8601 string, e.g. `P1Y2M3D`.
    ///
    /// ```rust
    /// use temporal_amount::Period;
    ///
    /// assert_eq!(Period::new(1, 2, 3).to_iso8601(), "P1Y2M3D");
    /// assert_eq!(Period::ZERO.to_iso8601(), "P0D");
    /// ```
    pub fn to_iso8601(&self) -> String {
        FormattablePeriod::from(self).write_to_string().into_owned()
    }
}

impl SignedDuration {
    /// Returns this duration as an ISO-8601 string, e.g. `PT8H6M12.345S`.
    ///
    /// ```rust
    /// use temporal_amount::SignedDuration;
    ///
    /// assert_eq!(SignedDuration::new(29_172, 345_000_000).to_iso8601(), "PT8H6M12.345S");
    /// assert_eq!(SignedDuration::from_millis(-500).to_iso8601(), "PT-0.5S");
    /// ```
    pub fn to_iso8601(&self) -> String {
        FormattableDuration::from(self).write_to_string().into_owned()
    }
}

/// Formats a period and a duration as a single ISO-8601 amount.
///
/// A zero part is omitted unless both are zero, in which case `PT0S` is
/// returned.
///
/// ```rust
/// use temporal_amount::{iso8601::format_period_duration, Period, SignedDuration};
///
/// let amount = format_period_duration(&Period::from_days(1), &SignedDuration::from_hours(5));
/// assert_eq!(amount, "P1DT5H");
/// ```
pub fn format_period_duration(period: &Period, duration: &SignedDuration) -> String {
    FormattablePeriodDuration {
        period: period.into(),
        duration: duration.into(),
    }
    .write_to_string()
    .into_owned()
}
