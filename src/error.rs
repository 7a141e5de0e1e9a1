//! This module implements `AmountError`.

use core::fmt;

/// `AmountError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// RangeError
    Range,
    /// SyntaxError
    Syntax,
    /// Invalid or incomplete locale resource data.
    Config,
    /// Assert
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::Range => "RangeError",
            Self::Syntax => "SyntaxError",
            Self::Config => "ConfigurationError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `temporal_amount`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountError {
    kind: ErrorKind,
    msg: ErrorMessage,
    offset: Option<usize>,
}

impl AmountError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: ErrorMessage::None,
            offset: None,
        }
    }

    /// Create a generic error
    #[inline]
    #[must_use]
    pub fn general(msg: &'static str) -> Self {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create a syntax error.
    #[inline]
    #[must_use]
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Create a configuration error.
    #[inline]
    #[must_use]
    pub const fn config() -> Self {
        Self::new(ErrorKind::Config)
    }

    /// Creates an assertion error
    #[inline]
    #[must_use]
    #[cfg_attr(debug_assertions, track_caller)]
    pub(crate) const fn assert() -> Self {
        #[cfg(not(debug_assertions))]
        {
            Self::new(ErrorKind::Assert)
        }
        #[cfg(debug_assertions)]
        Self {
            kind: ErrorKind::Assert,
            msg: ErrorMessage::String(core::panic::Location::caller().file()),
            offset: None,
        }
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = ErrorMessage::String(msg);
        self
    }

    /// Add a message enum to the error.
    #[inline]
    #[must_use]
    pub(crate) fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = msg;
        self
    }

    /// Attach the character offset into the source text where the error
    /// was detected.
    #[inline]
    #[must_use]
    pub(crate) fn at(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the character offset into the parsed text, if this error
    /// was raised while parsing.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> &'static str {
        self.msg.to_string()
    }
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.to_string();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        if let Some(offset) = self.offset {
            write!(f, " (at offset {offset})")?;
        }

        Ok(())
    }
}

impl core::error::Error for AmountError {}

/// The error message
#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) enum ErrorMessage {
    // Parsing
    NotNumeric,
    MissingLeadingInteger,
    MissingFractionDigits,
    InvalidDurationUnit,
    IntegerOutOfRange,
    DurationOutOfRange,

    // Numerical errors
    NumberOutOfRange,

    // Resource data
    UnknownPredicate,
    PredicateTextMismatch,
    MissingUnitResource,
    MissingSeparatorResource,

    // Typed
    None,
    String(&'static str),
}

impl ErrorMessage {
    pub fn to_string(self) -> &'static str {
        match self {
            Self::NotNumeric => "Not a numeric value",
            Self::MissingLeadingInteger => "Missing leading integer",
            Self::MissingFractionDigits => "Missing digits after decimal point",
            Self::InvalidDurationUnit => "Invalid duration unit",
            Self::IntegerOutOfRange => "Integer value exceeds valid numeric range",
            Self::DurationOutOfRange => "Duration string exceeds valid numeric range",
            Self::NumberOutOfRange => "number exceeded a valid range.",
            Self::UnknownPredicate => "Invalid word-based resource: unknown plural predicate",
            Self::PredicateTextMismatch => {
                "Invalid word-based resource: text list must be one longer than predicate list"
            }
            Self::MissingUnitResource => "Invalid word-based resource: missing unit text",
            Self::MissingSeparatorResource => "Invalid word-based resource: missing separator",
            Self::None => "",
            Self::String(s) => s,
        }
    }
}
