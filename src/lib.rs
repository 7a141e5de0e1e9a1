//! The `temporal_amount` crate parses and formats amounts of time.
//!
//! It provides two engines:
//!
//! - a locale independent parser for unit-based duration strings such as
//!   `"2h45m"`, `"-1.5h"`, or `"300ms"`, producing a [`SignedDuration`];
//! - a locale aware renderer that writes periods and durations as words,
//!   such as "1 year, 2 months and 3 days", including languages with more
//!   than two plural forms.
//!
//! ```rust
//! use icu_locale::locale;
//! use temporal_amount::{Period, SignedDuration, WordBasedFormatter};
//!
//! let duration: SignedDuration = "2h45m".parse().unwrap();
//! assert_eq!(duration, SignedDuration::from_mins(165));
//!
//! let formatter = WordBasedFormatter::try_new(&locale!("en")).unwrap();
//! assert_eq!(formatter.format_duration(&duration), "2 hours and 45 minutes");
//!
//! let formatter = WordBasedFormatter::try_new(&locale!("ru")).unwrap();
//! assert_eq!(formatter.format_period(&Period::from_years(22)), "22 года");
//! ```
//!
//! Word-based resource data is supplied through the
//! [`WordBasedProvider`][provider::WordBasedProvider] trait. With the
//! default `compiled_data` feature a small set of bundled locales is
//! available through [`WordBasedFormatter::try_new`].
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,

    // Nanosecond arithmetic moves between widths after range checks.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,

    // Add temporarily - Needs addressing
    clippy::missing_panics_doc,
)]

extern crate alloc;
extern crate core;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod error;
pub mod iso8601;
pub mod parsers;
pub mod plural;
pub mod provider;
pub mod wordbased;

mod duration;
mod period;

#[cfg(feature = "compiled_data")]
pub mod data;

#[cfg(feature = "compiled_data")]
mod compiled;

use core::cmp::Ordering;

#[doc(inline)]
pub use error::AmountError;

/// The `temporal_amount` result type
pub type AmountResult<T> = Result<T, AmountError>;

pub use crate::{
    duration::SignedDuration, period::Period, plural::PluralPredicate,
    wordbased::WordBasedFormatter,
};

/// A general Sign type.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    #[default]
    Positive = 1,
    Zero = 0,
    Negative = -1,
}

impl From<i8> for Sign {
    fn from(value: i8) -> Self {
        match value.cmp(&0) {
            Ordering::Greater => Self::Positive,
            Ordering::Equal => Self::Zero,
            Ordering::Less => Self::Negative,
        }
    }
}

// Relevant numeric constants
/// Nanoseconds per second constant: 1e+9
pub const NS_PER_SECOND: u64 = 1_000_000_000;
/// Nanoseconds per minute constant: 6e+10
pub const NS_PER_MINUTE: u64 = NS_PER_SECOND * 60;
/// Nanoseconds per hour constant: 3.6e+12
pub const NS_PER_HOUR: u64 = NS_PER_MINUTE * 60;
