//! Plural form selection for word-based amounts.
//!
//! A unit's text is chosen either from a singular/plural pair or from an
//! ordered list of named predicates with a trailing fallback. The set of
//! predicates is closed: resource data can only refer to them by name.

use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};

use writeable::Writeable;

use crate::{error::ErrorMessage, AmountError, AmountResult};

/// The separator between entries of a resource predicate or text list.
pub const LIST_SEPARATOR: &str = "|||";

// ==== PluralPredicate ====

/// A named rule that decides whether a magnitude takes a given plural form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralPredicate {
    /// Matches exactly one, or minus one.
    One,
    /// Matches magnitudes ending in 1, except those ending in 11.
    End1Not11,
    /// Matches magnitudes ending in 2, 3, or 4, except those ending in
    /// 12, 13, or 14.
    End234NotTeens,
}

impl PluralPredicate {
    /// Returns whether `value` matches this predicate.
    ///
    /// Only the magnitude of `value` is considered.
    #[must_use]
    pub fn matches(self, value: i64) -> bool {
        let abs = value.unsigned_abs();
        let last = abs % 10;
        let second_last = (abs % 100) / 10;
        match self {
            Self::One => abs == 1,
            Self::End1Not11 => last == 1 && second_last != 1,
            Self::End234NotTeens => (2..=4).contains(&last) && second_last != 1,
        }
    }

    /// Returns the resource name of this predicate.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::One => "One",
            Self::End1Not11 => "End1Not11",
            Self::End234NotTeens => "End234NotTeens",
        }
    }
}

/// A parsing error for `PluralPredicate`
#[derive(Debug, Clone, Copy)]
pub struct ParsePluralPredicateError;

impl fmt::Display for ParsePluralPredicateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid PluralPredicate")
    }
}

impl From<ParsePluralPredicateError> for AmountError {
    fn from(_: ParsePluralPredicateError) -> Self {
        AmountError::config().with_enum(ErrorMessage::UnknownPredicate)
    }
}

impl FromStr for PluralPredicate {
    type Err = ParsePluralPredicateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "One" => Ok(Self::One),
            "End1Not11" => Ok(Self::End1Not11),
            "End234NotTeens" => Ok(Self::End234NotTeens),
            _ => Err(ParsePluralPredicateError),
        }
    }
}

impl fmt::Display for PluralPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

// ==== UnitFormat ====

/// The texts used to render one unit of a word-based amount.
///
/// The texts are appended directly after the number, so they carry any
/// leading space themselves, e.g. `" year"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitFormat {
    /// A singular text for a magnitude of one, and a plural text otherwise.
    SinglePlural { singular: String, plural: String },
    /// An ordered predicate list with one text per predicate plus a
    /// trailing fallback text.
    PredicateList {
        predicates: Vec<PluralPredicate>,
        texts: Vec<String>,
    },
}

impl UnitFormat {
    /// Creates a `UnitFormat` from a singular and a plural text.
    pub fn single_plural(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self::SinglePlural {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    /// Creates a `UnitFormat` from an ordered predicate list and its texts.
    ///
    /// `texts` must be exactly one longer than `predicates`: the last text
    /// is the fallback used when no predicate matches.
    pub fn try_from_predicates(
        predicates: Vec<PluralPredicate>,
        texts: Vec<String>,
    ) -> AmountResult<Self> {
        if texts.len() != predicates.len() + 1 {
            return Err(AmountError::config().with_enum(ErrorMessage::PredicateTextMismatch));
        }
        Ok(Self::PredicateList { predicates, texts })
    }

    /// Creates a `UnitFormat` from `|||` separated predicate names and texts,
    /// as stored in word-based resource data.
    ///
    /// ```rust
    /// use temporal_amount::plural::UnitFormat;
    ///
    /// let format = UnitFormat::try_from_lists(
    ///     "One|||End234NotTeens",
    ///     " rok||| lata||| lat",
    /// ).unwrap();
    /// assert_eq!(format.select(1), " rok");
    /// assert_eq!(format.select(22), " lata");
    /// assert_eq!(format.select(12), " lat");
    /// ```
    pub fn try_from_lists(predicates: &str, texts: &str) -> AmountResult<Self> {
        let predicates = predicates
            .split(LIST_SEPARATOR)
            .map(|name| name.parse::<PluralPredicate>().map_err(AmountError::from))
            .collect::<AmountResult<Vec<_>>>()?;
        let texts = texts.split(LIST_SEPARATOR).map(String::from).collect();
        Self::try_from_predicates(predicates, texts)
    }

    /// Selects the text for `value`.
    #[must_use]
    pub fn select(&self, value: i64) -> &str {
        match self {
            Self::SinglePlural { singular, plural } => {
                if PluralPredicate::One.matches(value) {
                    singular
                } else {
                    plural
                }
            }
            Self::PredicateList { predicates, texts } => predicates
                .iter()
                .zip(texts)
                .find_map(|(predicate, text)| predicate.matches(value).then_some(text))
                .or_else(|| texts.last())
                .map_or("", String::as_str),
        }
    }

    /// Writes `value` followed by its selected text.
    pub fn format_to<W: fmt::Write + ?Sized>(&self, value: i64, sink: &mut W) -> fmt::Result {
        value.write_to(sink)?;
        sink.write_str(self.select(value))
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec};

    use super::{PluralPredicate, UnitFormat};
    use crate::error::{ErrorKind, ErrorMessage};

    #[test]
    fn one_matches_only_unit_magnitudes() {
        assert!(PluralPredicate::One.matches(1));
        assert!(PluralPredicate::One.matches(-1));
        for value in [0, 2, -2, 11, 21, 101, i64::MAX, i64::MIN] {
            assert!(!PluralPredicate::One.matches(value), "{value}");
        }
    }

    #[test]
    fn end1_not11() {
        for value in [1, 21, 31, 101, 121, 1001, -21, -1] {
            assert!(PluralPredicate::End1Not11.matches(value), "{value}");
        }
        for value in [0, 2, 11, 111, 211, -11, 10, 12] {
            assert!(!PluralPredicate::End1Not11.matches(value), "{value}");
        }
    }

    #[test]
    fn end234_not_teens() {
        for value in [2, 3, 4, 22, 23, 24, 102, 1004, -3, -42] {
            assert!(PluralPredicate::End234NotTeens.matches(value), "{value}");
        }
        for value in [0, 1, 5, 12, 13, 14, 112, 113, 114, 25, -12, 20] {
            assert!(!PluralPredicate::End234NotTeens.matches(value), "{value}");
        }
    }

    #[test]
    fn extreme_magnitudes_do_not_overflow() {
        // i64::MIN = -9223372036854775808
        assert!(!PluralPredicate::End1Not11.matches(i64::MIN));
        assert!(!PluralPredicate::End234NotTeens.matches(i64::MIN));
        // i64::MAX = 9223372036854775807
        assert!(!PluralPredicate::End234NotTeens.matches(i64::MAX));
    }

    #[test]
    fn predicate_names_round_trip() {
        for predicate in [
            PluralPredicate::One,
            PluralPredicate::End1Not11,
            PluralPredicate::End234NotTeens,
        ] {
            assert_eq!(predicate.as_str().parse::<PluralPredicate>().unwrap(), predicate);
        }
        assert!("one".parse::<PluralPredicate>().is_err());
        assert!("Few".parse::<PluralPredicate>().is_err());
    }

    #[test]
    fn single_plural_selection() {
        let format = UnitFormat::single_plural(" year", " years");
        assert_eq!(format.select(1), " year");
        assert_eq!(format.select(-1), " year");
        assert_eq!(format.select(0), " years");
        assert_eq!(format.select(2), " years");
        assert_eq!(format.select(21), " years");

        let mut out = String::new();
        format.format_to(-1, &mut out).unwrap();
        assert_eq!(out, "-1 year");
    }

    #[test]
    fn predicate_list_uses_first_match_then_fallback() {
        // Russian style: 1 год, 2 года, 5 лет, 21 год.
        let format = UnitFormat::try_from_lists(
            "End1Not11|||End234NotTeens",
            " \u{433}\u{43e}\u{434}||| \u{433}\u{43e}\u{434}\u{430}||| \u{43b}\u{435}\u{442}",
        )
        .unwrap();
        assert_eq!(format.select(1), " \u{433}\u{43e}\u{434}");
        assert_eq!(format.select(21), " \u{433}\u{43e}\u{434}");
        assert_eq!(format.select(3), " \u{433}\u{43e}\u{434}\u{430}");
        assert_eq!(format.select(11), " \u{43b}\u{435}\u{442}");
        assert_eq!(format.select(0), " \u{43b}\u{435}\u{442}");

        // Predicates are evaluated in the given order.
        let format = UnitFormat::try_from_predicates(
            vec![PluralPredicate::End1Not11, PluralPredicate::One],
            vec!["a".into(), "b".into(), "c".into()],
        )
        .unwrap();
        assert_eq!(format.select(1), "a");
        assert_eq!(format.select(2), "c");
    }

    #[test]
    fn empty_predicate_list_always_falls_back() {
        let format = UnitFormat::try_from_predicates(vec![], vec!["x".into()]).unwrap();
        assert_eq!(format.select(1), "x");
    }

    #[test]
    fn malformed_lists_are_configuration_errors() {
        let err = UnitFormat::try_from_lists("One", " day").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert_eq!(
            err.into_message(),
            ErrorMessage::PredicateTextMismatch.to_string()
        );

        let err = UnitFormat::try_from_lists("One|||Two", " a||| b||| c").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert_eq!(err.into_message(), ErrorMessage::UnknownPredicate.to_string());

        assert!(UnitFormat::try_from_lists("One", " a||| b||| c").is_err());
    }
}
