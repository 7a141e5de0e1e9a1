//! The `WordBasedProvider` trait and locale resolution for word-based
//! resource data.
//!
//! Resource data is a flat key-value lookup per bundle locale. A unit is
//! described either by a singular/plural pair:
//!
//! ```text
//! day=" day"
//! days=" days"
//! ```
//!
//! or by a predicate list and an aligned text list that is one entry
//! longer, with entries separated by `|||`:
//!
//! ```text
//! days.predicates="End1Not11|||End234NotTeens"
//! days.list=" день||| дня||| дней"
//! ```
//!
//! Three separators complete a bundle: `list.separator` between
//! components, `list.last_separator` before the final component, and
//! `list.space` between a period and a duration.

use alloc::{format, string::String, vec::Vec};

use icu_locale::Locale;

use crate::{error::ErrorMessage, plural::UnitFormat, AmountError, AmountResult};

#[cfg(feature = "std")]
use rustc_hash::FxHashMap;

/// The bundle identifier of the root bundle, consulted last.
pub const ROOT_BUNDLE: &str = "und";

/// The key of the separator placed between components.
pub const SEPARATOR_KEY: &str = "list.separator";
/// The key of the separator placed before the final component.
pub const LAST_SEPARATOR_KEY: &str = "list.last_separator";
/// The key of the separator placed between a period and a duration.
pub const SPACE_KEY: &str = "list.space";

/// The `WordBasedProvider` trait provides the resource lookup required to
/// build word-based formatters.
///
/// `locale` is a bundle identifier such as `"en-GB"`, `"pl"`, or
/// [`ROOT_BUNDLE`]. Locale fallback is handled by [`ResourceBundle`], so an
/// implementation only answers for the exact bundle it is asked about.
pub trait WordBasedProvider {
    /// Returns the value stored under `key` in exactly the bundle `locale`.
    fn get(&self, locale: &str, key: &str) -> Option<&str>;
}

impl<P: WordBasedProvider + ?Sized> WordBasedProvider for &P {
    fn get(&self, locale: &str, key: &str) -> Option<&str> {
        (**self).get(locale, key)
    }
}

/// A provider with no data.
pub struct NeverProvider;

impl WordBasedProvider for NeverProvider {
    fn get(&self, _: &str, _: &str) -> Option<&str> {
        None
    }
}

// ==== WordBasedUnit ====

/// The units that can be rendered in a word-based amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WordBasedUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl WordBasedUnit {
    /// The units of a period, largest first.
    pub const PERIOD: [Self; 4] = [Self::Year, Self::Month, Self::Week, Self::Day];
    /// The units of a duration, largest first.
    pub const DURATION: [Self; 4] = [Self::Hour, Self::Minute, Self::Second, Self::Millisecond];

    /// Returns the resource key of the singular text for this unit.
    #[must_use]
    pub const fn singular_key(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Millisecond => "millisecond",
        }
    }

    /// Returns the resource key of the plural text for this unit.
    #[must_use]
    pub const fn plural_key(self) -> &'static str {
        match self {
            Self::Year => "years",
            Self::Month => "months",
            Self::Week => "weeks",
            Self::Day => "days",
            Self::Hour => "hours",
            Self::Minute => "minutes",
            Self::Second => "seconds",
            Self::Millisecond => "milliseconds",
        }
    }

    /// Returns the resource key of the predicate list for this unit.
    #[must_use]
    pub fn predicates_key(self) -> String {
        format!("{}.predicates", self.plural_key())
    }

    /// Returns the resource key of the text list for this unit.
    #[must_use]
    pub fn list_key(self) -> String {
        format!("{}.list", self.plural_key())
    }
}

// ==== ResourceBundle ====

/// A view of a provider's data for one locale, with fallback.
///
/// Keys are looked up in the bundle for the locale's language and region,
/// then its language alone, then [`ROOT_BUNDLE`].
#[derive(Debug)]
pub struct ResourceBundle<'a, P: ?Sized> {
    provider: &'a P,
    chain: Vec<String>,
}

impl<'a, P: WordBasedProvider + ?Sized> ResourceBundle<'a, P> {
    /// Resolves the bundle chain for `locale`.
    pub fn new(provider: &'a P, locale: &Locale) -> Self {
        let language = locale.id.language.as_str();
        let mut chain = Vec::with_capacity(3);
        if language != ROOT_BUNDLE {
            if let Some(region) = locale.id.region {
                chain.push(format!("{language}-{}", region.as_str()));
            }
            chain.push(String::from(language));
        }
        chain.push(String::from(ROOT_BUNDLE));

        #[cfg(feature = "log")]
        log::debug!("Resolved word-based bundle chain {chain:?} for {locale}");

        Self { provider, chain }
    }

    /// Returns the bundle identifiers consulted, most specific first.
    #[must_use]
    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    /// Looks up `key`, falling back along the bundle chain.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.chain
            .iter()
            .find_map(|locale| self.provider.get(locale, key))
    }

    /// Loads the `UnitFormat` for `unit`.
    ///
    /// A predicate list takes precedence over a singular/plural pair.
    pub fn unit_format(&self, unit: WordBasedUnit) -> AmountResult<UnitFormat> {
        let result = match self.get(&unit.predicates_key()) {
            Some(predicates) => self
                .get(&unit.list_key())
                .ok_or(AmountError::config().with_enum(ErrorMessage::MissingUnitResource))
                .and_then(|texts| UnitFormat::try_from_lists(predicates, texts)),
            None => match (
                self.get(unit.singular_key()),
                self.get(unit.plural_key()),
            ) {
                (Some(singular), Some(plural)) => Ok(UnitFormat::single_plural(singular, plural)),
                _ => Err(AmountError::config().with_enum(ErrorMessage::MissingUnitResource)),
            },
        };

        #[cfg(feature = "log")]
        if let Err(err) = &result {
            log::error!("Unable to load {unit:?} from bundles {:?}: {err}", self.chain);
        }

        result
    }

    /// Loads the separator stored under `key`.
    pub fn separator(&self, key: &str) -> AmountResult<&'a str> {
        let separator = self.get(key);

        #[cfg(feature = "log")]
        if separator.is_none() {
            log::error!("Missing separator {key} in bundles {:?}", self.chain);
        }

        separator.ok_or(AmountError::config().with_enum(ErrorMessage::MissingSeparatorResource))
    }
}

// ==== MapProvider ====

/// A `WordBasedProvider` backed by an in-memory map, for resource data
/// assembled at runtime.
///
/// ```rust
/// use temporal_amount::provider::{MapProvider, WordBasedProvider};
///
/// let mut provider = MapProvider::default();
/// provider.insert("en", "year", " year");
/// assert_eq!(provider.get("en", "year"), Some(" year"));
/// assert_eq!(provider.get("en-GB", "year"), None);
/// ```
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone)]
pub struct MapProvider {
    bundles: FxHashMap<String, FxHashMap<String, String>>,
}

#[cfg(feature = "std")]
impl MapProvider {
    /// Inserts `value` under `key` in the bundle for `locale`, returning the
    /// previous value.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.bundles
            .entry(locale.into())
            .or_default()
            .insert(key.into(), value.into())
    }

    /// Inserts every `(key, value)` pair into the bundle for `locale`.
    pub fn extend<K, V>(&mut self, locale: impl Into<String>, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.bundles
            .entry(locale.into())
            .or_default()
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

#[cfg(feature = "std")]
impl WordBasedProvider for MapProvider {
    fn get(&self, locale: &str, key: &str) -> Option<&str> {
        self.bundles
            .get(locale)
            .and_then(|bundle| bundle.get(key))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use icu_locale::locale;

    use super::{NeverProvider, ResourceBundle, WordBasedProvider, WordBasedUnit};
    use crate::{error::ErrorKind, plural::UnitFormat};

    struct TableProvider(&'static [(&'static str, &'static str, &'static str)]);

    impl WordBasedProvider for TableProvider {
        fn get(&self, locale: &str, key: &str) -> Option<&str> {
            self.0
                .iter()
                .find(|(l, k, _)| *l == locale && *k == key)
                .map(|(_, _, v)| *v)
        }
    }

    const TABLE: TableProvider = TableProvider(&[
        ("und", "day", " day"),
        ("und", "days", " days"),
        ("und", "list.separator", ", "),
        ("en", "days", " dayz"),
        ("en-GB", "day", " jour"),
        ("xx", "days.predicates", "One|||Nope"),
        ("xx", "days.list", " a||| b||| c"),
        ("yy", "days.predicates", "One"),
        ("zz", "weeks", " weeks"),
    ]);

    #[test]
    fn chain_resolution() {
        let bundle = ResourceBundle::new(&TABLE, &locale!("en-GB"));
        assert_eq!(bundle.chain(), ["en-GB", "en", "und"].map(String::from));

        let bundle = ResourceBundle::new(&TABLE, &locale!("pl"));
        assert_eq!(bundle.chain(), ["pl", "und"].map(String::from));

        let bundle = ResourceBundle::new(&TABLE, &locale!("und"));
        assert_eq!(bundle.chain(), [String::from("und")]);
    }

    #[test]
    fn keys_fall_back_independently() {
        let bundle = ResourceBundle::new(&TABLE, &locale!("en-GB"));
        assert_eq!(bundle.get("day"), Some(" jour"));
        assert_eq!(bundle.get("days"), Some(" dayz"));
        assert_eq!(bundle.get("list.separator"), Some(", "));
        assert_eq!(bundle.get("hours"), None);

        let format = bundle.unit_format(WordBasedUnit::Day).unwrap();
        assert_eq!(format, UnitFormat::single_plural(" jour", " dayz"));

        let bundle = ResourceBundle::new(&TABLE, &locale!("en-US"));
        assert_eq!(bundle.get("day"), Some(" day"));
    }

    #[test]
    fn invalid_resources_fail_at_load() {
        let bundle = ResourceBundle::new(&TABLE, &locale!("xx"));
        let err = bundle.unit_format(WordBasedUnit::Day).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);

        // A predicate list without its text list.
        let bundle = ResourceBundle::new(&TABLE, &locale!("yy"));
        let err = bundle.unit_format(WordBasedUnit::Day).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);

        // A plural without its singular.
        let bundle = ResourceBundle::new(&TABLE, &locale!("zz"));
        let err = bundle.unit_format(WordBasedUnit::Week).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);

        let bundle = ResourceBundle::new(&NeverProvider, &locale!("en"));
        assert!(bundle.unit_format(WordBasedUnit::Year).is_err());
        assert_eq!(
            bundle.separator(super::SEPARATOR_KEY).unwrap_err().kind(),
            ErrorKind::Config
        );
    }

    #[test]
    fn unit_keys() {
        assert_eq!(WordBasedUnit::Millisecond.singular_key(), "millisecond");
        assert_eq!(WordBasedUnit::Week.plural_key(), "weeks");
        assert_eq!(WordBasedUnit::Year.predicates_key(), "years.predicates");
        assert_eq!(WordBasedUnit::Hour.list_key(), "hours.list");
    }

    #[cfg(feature = "std")]
    #[test]
    fn map_provider_round_trip() {
        let mut provider = super::MapProvider::default();
        provider.extend("fr", [("day", " jour"), ("days", " jours")]);
        assert_eq!(provider.insert("fr", "day", " journée"), Some(String::from(" jour")));

        let bundle = ResourceBundle::new(&provider, &locale!("fr-CA"));
        let format = bundle.unit_format(WordBasedUnit::Day).unwrap();
        assert_eq!(format.select(1), " journée");
        assert_eq!(format.select(3), " jours");
    }
}
