//! Word-based rendering of amounts, such as "1 year, 2 months and 3 days".

use alloc::{string::String, vec::Vec};
use core::fmt;

use icu_locale::Locale;
use writeable::{impl_display_with_writeable, Writeable};

use crate::{
    plural::UnitFormat,
    provider::{
        ResourceBundle, WordBasedProvider, WordBasedUnit, LAST_SEPARATOR_KEY, SEPARATOR_KEY,
        SPACE_KEY,
    },
    AmountError, AmountResult, Period, SignedDuration,
};


// ==== WordBased ====

/// A renderer for a fixed, ordered set of `N` units.
///
/// Values are always supplied as an array of exactly `N` entries, largest
/// unit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBased<const N: usize> {
    units: [UnitFormat; N],
    separator: String,
    last_separator: String,
}

impl<const N: usize> WordBased<N> {
    /// Creates a renderer from its unit formats and separators.
    pub fn new(
        units: [UnitFormat; N],
        separator: impl Into<String>,
        last_separator: impl Into<String>,
    ) -> Self {
        Self {
            units,
            separator: separator.into(),
            last_separator: last_separator.into(),
        }
    }

    /// Loads a renderer for `units` from a resolved resource bundle.
    pub fn try_new_with_bundle<P: WordBasedProvider + ?Sized>(
        bundle: &ResourceBundle<'_, P>,
        units: [WordBasedUnit; N],
    ) -> AmountResult<Self> {
        let formats = units
            .iter()
            .map(|unit| bundle.unit_format(*unit))
            .collect::<AmountResult<Vec<_>>>()?;
        let units = <[UnitFormat; N]>::try_from(formats)
            .map_err(|_| AmountError::assert().with_message("unit count mismatch"))?;
        Ok(Self::new(
            units,
            bundle.separator(SEPARATOR_KEY)?,
            bundle.separator(LAST_SEPARATOR_KEY)?,
        ))
    }

    /// Formats `values` against this renderer's units.
    ///
    /// Zero values are skipped, except that the last unit is always written
    /// when every value is zero.
    ///
    /// ```rust
    /// use temporal_amount::{plural::UnitFormat, wordbased::WordBased};
    /// use writeable::assert_writeable_eq;
    ///
    /// let renderer = WordBased::new(
    ///     [
    ///         UnitFormat::single_plural(" year", " years"),
    ///         UnitFormat::single_plural(" month", " months"),
    ///         UnitFormat::single_plural(" day", " days"),
    ///     ],
    ///     ", ",
    ///     " and ",
    /// );
    /// assert_writeable_eq!(renderer.format(&[1, 0, 3]), "1 year and 3 days");
    /// assert_writeable_eq!(renderer.format(&[0, 0, 0]), "0 days");
    /// ```
    pub fn format<'a>(&'a self, values: &'a [i64; N]) -> FormattedAmount<'a> {
        FormattedAmount {
            units: &self.units,
            separator: &self.separator,
            last_separator: &self.last_separator,
            values,
        }
    }
}

// ==== FormattedAmount ====

/// A word-based amount ready to be written.
#[derive(Debug, Clone, Copy)]
pub struct FormattedAmount<'a> {
    units: &'a [UnitFormat],
    separator: &'a str,
    last_separator: &'a str,
    values: &'a [i64],
}

impl Writeable for FormattedAmount<'_> {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        let non_zero = self.values.iter().filter(|v| **v != 0).count();
        let last = self.values.len().saturating_sub(1);
        let mut written = 0;
        for (i, (unit, value)) in self.units.iter().zip(self.values).enumerate() {
            if *value == 0 && !(i == last && written == 0) {
                continue;
            }
            unit.format_to(*value, sink)?;
            if written + 2 < non_zero {
                sink.write_str(self.separator)?;
            } else if written + 2 == non_zero {
                sink.write_str(self.last_separator)?;
            }
            written += 1;
        }
        Ok(())
    }
}

impl_display_with_writeable!(FormattedAmount<'_>);

// ==== WordBasedFormatter ====

/// Formats periods and durations as words for one locale.
///
/// Periods are written in years, months, weeks, and days; durations in
/// hours, minutes, seconds, and milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBasedFormatter {
    period: WordBased<4>,
    duration: WordBased<4>,
    space: String,
}

impl WordBasedFormatter {
    /// Creates a formatter for `locale` with the resource data of `provider`.
    ///
    /// Every resource the formatter needs is loaded here, so invalid
    /// resource data is reported now rather than while formatting.
    pub fn try_new_with_provider<P: WordBasedProvider + ?Sized>(
        locale: &Locale,
        provider: &P,
    ) -> AmountResult<Self> {
        let bundle = ResourceBundle::new(provider, locale);
        Ok(Self {
            period: WordBased::try_new_with_bundle(&bundle, WordBasedUnit::PERIOD)?,
            duration: WordBased::try_new_with_bundle(&bundle, WordBasedUnit::DURATION)?,
            space: String::from(bundle.separator(SPACE_KEY)?),
        })
    }

    /// Formats a period.
    ///
    /// Years and months of opposite signs are balanced first. Days that are
    /// a whole number of weeks are written as weeks.
    pub fn format_period(&self, period: &Period) -> String {
        let mut out = String::new();
        // NOTE: Writing to a `String` is infallible.
        let _ = self.write_period(period, &mut out);
        out
    }

    /// Formats a duration as hours, minutes, seconds, and milliseconds.
    pub fn format_duration(&self, duration: &SignedDuration) -> String {
        let mut out = String::new();
        let _ = self.write_duration(duration, &mut out);
        out
    }

    /// Formats a period followed by a duration.
    ///
    /// A zero part is omitted unless both are zero, in which case the
    /// duration alone is written.
    pub fn format(&self, period: &Period, duration: &SignedDuration) -> String {
        let mut out = String::new();
        let _ = self.write_period_duration(period, duration, &mut out);
        out
    }

    fn write_period<W: fmt::Write + ?Sized>(&self, period: &Period, sink: &mut W) -> fmt::Result {
        let (mut years, mut months) = (i64::from(period.years()), i64::from(period.months()));
        if years.signum() * months.signum() < 0 {
            let total = period.total_months();
            years = total / 12;
            months = total % 12;
        }
        let days = i64::from(period.days());
        let values = if days % 7 == 0 {
            [years, months, days / 7, 0]
        } else {
            [years, months, 0, days]
        };
        self.period.format(&values).write_to(sink)
    }

    fn write_duration<W: fmt::Write + ?Sized>(
        &self,
        duration: &SignedDuration,
        sink: &mut W,
    ) -> fmt::Result {
        let values = [
            duration.as_hours(),
            duration.as_mins() % 60,
            duration.as_secs() % 60,
            i64::from(duration.subsec_millis()),
        ];
        self.duration.format(&values).write_to(sink)
    }

    fn write_period_duration<W: fmt::Write + ?Sized>(
        &self,
        period: &Period,
        duration: &SignedDuration,
        sink: &mut W,
    ) -> fmt::Result {
        if period.is_zero() {
            return self.write_duration(duration, sink);
        }
        self.write_period(period, sink)?;
        if duration.is_zero() {
            return Ok(());
        }
        sink.write_str(&self.space)?;
        self.write_duration(duration, sink)
    }
}
