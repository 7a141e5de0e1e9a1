//! Constructors backed by the bundled resource data.

use icu_locale::Locale;

use crate::{data::CompiledData, wordbased::WordBasedFormatter, AmountResult};

impl WordBasedFormatter {
    /// Creates a formatter for `locale` with the bundled resource data.
    ///
    /// ```rust
    /// use icu_locale::locale;
    /// use temporal_amount::{Period, WordBasedFormatter};
    ///
    /// let formatter = WordBasedFormatter::try_new(&locale!("de")).unwrap();
    /// assert_eq!(
    ///     formatter.format_period(&Period::new(1, 2, 3)),
    ///     "1 Jahr, 2 Monate und 3 Tage"
    /// );
    /// ```
    pub fn try_new(locale: &Locale) -> AmountResult<Self> {
        Self::try_new_with_provider(locale, &CompiledData)
    }
}

#[cfg(test)]
mod tests {
    use icu_locale::locale;

    use crate::{Period, SignedDuration, WordBasedFormatter};

    #[test]
    fn every_compiled_locale_loads() {
        for bundle in crate::data::CompiledData::bundles() {
            let locale = icu_locale::Locale::try_from_str(bundle).unwrap();
            assert!(WordBasedFormatter::try_new(&locale).is_ok(), "{bundle}");
        }
    }

    #[test]
    fn english() {
        let formatter = WordBasedFormatter::try_new(&locale!("en")).unwrap();
        assert_eq!(
            formatter.format(&Period::new(1, 0, 21), &SignedDuration::from_secs(3_601)),
            "1 year and 3 weeks 1 hour and 1 second"
        );
    }

    #[test]
    fn regional_and_unknown_locales_fall_back() {
        let expected = "2 years and 1 month";
        let period = Period::new(2, 1, 0);
        for locale in [locale!("en-GB"), locale!("und"), locale!("tlh"), locale!("und-DE")] {
            let formatter = WordBasedFormatter::try_new(&locale).unwrap();
            assert_eq!(formatter.format_period(&period), expected, "{locale}");
        }

        let formatter = WordBasedFormatter::try_new(&locale!("fr-CA")).unwrap();
        assert_eq!(formatter.format_period(&period), "2 ans et 1 mois");
    }

    #[test]
    fn polish_plural_classes() {
        let formatter = WordBasedFormatter::try_new(&locale!("pl")).unwrap();
        let years = |n| formatter.format_period(&Period::from_years(n));
        assert_eq!(years(1), "1 rok");
        assert_eq!(years(2), "2 lata");
        assert_eq!(years(5), "5 lat");
        assert_eq!(years(12), "12 lat");
        assert_eq!(years(21), "21 lat");
        assert_eq!(years(22), "22 lata");
        assert_eq!(years(-3), "-3 lata");

        // Days only distinguish one from many.
        assert_eq!(formatter.format_period(&Period::from_days(1)), "1 dzień");
        assert_eq!(formatter.format_period(&Period::from_days(22)), "22 dni");

        assert_eq!(
            formatter.format_duration(&SignedDuration::new(3_724, 0)),
            "1 godzina, 2 minuty i 4 sekundy"
        );
    }

    #[test]
    fn russian_plural_classes() {
        let formatter = WordBasedFormatter::try_new(&locale!("ru")).unwrap();
        let days = |n| formatter.format_period(&Period::from_days(n));
        assert_eq!(days(1), "1 день");
        assert_eq!(days(2), "2 дня");
        assert_eq!(days(5), "5 дней");
        assert_eq!(days(11), "11 дней");
        assert_eq!(days(13), "13 дней");
        assert_eq!(days(22), "22 дня");
        assert_eq!(days(101), "101 день");
        assert_eq!(days(111), "111 дней");
        assert_eq!(
            formatter.format_period(&Period::new(21, 1, 0)),
            "21 год и 1 месяц"
        );
    }

    #[test]
    fn ukrainian_plural_classes() {
        let formatter = WordBasedFormatter::try_new(&locale!("uk")).unwrap();
        let hours = |n| formatter.format_duration(&SignedDuration::from_hours(n));
        assert_eq!(hours(1), "1 година");
        assert_eq!(hours(3), "3 години");
        assert_eq!(hours(14), "14 годин");
        assert_eq!(hours(31), "31 година");
    }

    #[test]
    fn japanese_has_no_separators() {
        let formatter = WordBasedFormatter::try_new(&locale!("ja-JP")).unwrap();
        assert_eq!(
            formatter.format(&Period::new(1, 2, 3), &SignedDuration::from_hours(4)),
            "1年2か月3日4時間"
        );
    }
}
