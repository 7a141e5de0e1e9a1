//! The table of unit suffixes recognized by the unit-based duration parser.

use crate::{NS_PER_HOUR, NS_PER_MINUTE, NS_PER_SECOND};

/// A recognized duration unit suffix and the length of one such unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationUnit {
    suffix: &'static str,
    nanoseconds: i128,
}

/// The recognized unit suffixes in match-priority order.
///
/// Matching is a literal, case-sensitive prefix comparison that stops at the
/// first hit, so an entry must come before any later entry that is a prefix
/// of it: every two-character suffix ending in `s` precedes `s`, and `ms`
/// precedes `m`.
///
/// Both U+00B5 (MICRO SIGN) and U+03BC (GREEK SMALL LETTER MU) are accepted
/// for microseconds, as is the ASCII spelling `us`.
pub static DURATION_UNITS: [DurationUnit; 8] = [
    DurationUnit::new("ns", 1),
    DurationUnit::new("\u{b5}s", 1_000),
    DurationUnit::new("\u{3bc}s", 1_000),
    DurationUnit::new("us", 1_000),
    DurationUnit::new("ms", 1_000_000),
    DurationUnit::new("s", NS_PER_SECOND as i128),
    DurationUnit::new("m", NS_PER_MINUTE as i128),
    DurationUnit::new("h", NS_PER_HOUR as i128),
];

impl DurationUnit {
    const fn new(suffix: &'static str, nanoseconds: i128) -> Self {
        Self {
            suffix,
            nanoseconds,
        }
    }

    /// Returns the suffix text of this unit.
    #[inline]
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        self.suffix
    }

    /// Returns the length of one unit in nanoseconds.
    #[inline]
    #[must_use]
    pub const fn nanoseconds(&self) -> i128 {
        self.nanoseconds
    }

    /// Finds the unit whose suffix is a prefix of `text`.
    ///
    /// The number of bytes consumed is the length of the returned unit's
    /// [`suffix`][Self::suffix].
    #[must_use]
    pub fn match_prefix(text: &str) -> Option<&'static DurationUnit> {
        DURATION_UNITS
            .iter()
            .find(|unit| text.starts_with(unit.suffix))
    }
}
