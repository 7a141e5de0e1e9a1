//! This module implements the unit-based duration parser.
//!
//! A unit-based duration is a run of `<number>[.<fraction>]<unit>` groups
//! with an optional leading sign, for example `"2h45m"`, `"-1.5h"`, or
//! `"300ms"`. The grammar is locale independent:
//!
//! ```text
//! Duration  := Sign? ( "0" | UnitGroup+ )
//! Sign      := "-" | "+"
//! UnitGroup := Digit+ ( "." Digit+ )? Unit
//! Unit      := "ns" | "µs" | "μs" | "us" | "ms" | "s" | "m" | "h"
//! ```
//!
//! Error offsets are character offsets into the original text.

use num_traits::{CheckedAdd, CheckedMul, FromPrimitive};

use crate::{error::ErrorMessage, AmountError, AmountResult, Sign, SignedDuration};

mod units;

pub use units::{DurationUnit, DURATION_UNITS};


/// Parses a unit-based duration string such as `"2h45m"` into a
/// [`SignedDuration`].
///
/// ```rust
/// use temporal_amount::{parsers::parse_unit_based_duration, SignedDuration};
///
/// let duration = parse_unit_based_duration("2h45m").unwrap();
/// assert_eq!(duration, SignedDuration::from_mins(165));
///
/// let duration = parse_unit_based_duration("-1.5h").unwrap();
/// assert_eq!(duration, SignedDuration::from_mins(-90));
/// ```
pub fn parse_unit_based_duration(source: &str) -> AmountResult<SignedDuration> {
    let mut cursor = Cursor::new(source);

    let sign = if cursor.check_or('-') {
        Sign::Negative
    } else {
        cursor.check_or('+');
        Sign::Positive
    };

    if cursor.remaining() == "0" {
        return Ok(SignedDuration::ZERO);
    }

    if cursor.is_empty() {
        return Err(malformed(ErrorMessage::NotNumeric, 0));
    }

    let mut total = SignedDuration::ZERO;
    while !cursor.is_empty() {
        let group = parse_unit_group(&mut cursor)?;
        total = total
            .checked_add(&group.value)
            .map_err(|_| malformed(ErrorMessage::DurationOutOfRange, group.offset))?;
    }

    if sign == Sign::Negative {
        // NOTE: `total` is never negative here, so negation cannot overflow.
        return total.checked_neg();
    }
    Ok(total)
}

/// One parsed `<number>[.<fraction>]<unit>` group.
struct UnitGroup {
    value: SignedDuration,
    offset: usize,
}

fn parse_unit_group(cursor: &mut Cursor<'_>) -> AmountResult<UnitGroup> {
    let offset = cursor.offset();

    let integer = parse_integer(cursor)?;

    let fraction = if cursor.check_or('.') {
        Some(parse_fraction(cursor)?)
    } else {
        None
    };

    let Some(unit) = DurationUnit::match_prefix(cursor.remaining()) else {
        return Err(malformed(ErrorMessage::InvalidDurationUnit, cursor.offset()));
    };
    cursor.advance_bytes(unit.suffix().len());

    let mut value = integer.apply_to(unit);
    if let Some(fraction) = fraction {
        value = value.and_then(|v| v.checked_add(fraction.apply_to(unit)?));
    }
    let value = value
        .and_then(|nanos| SignedDuration::try_from_nanos_i128(nanos).ok())
        .ok_or_else(|| malformed(ErrorMessage::DurationOutOfRange, offset))?;

    Ok(UnitGroup { value, offset })
}

fn parse_integer(cursor: &mut Cursor<'_>) -> AmountResult<ParsedScalar> {
    if !cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
        return Err(malformed(
            ErrorMessage::MissingLeadingInteger,
            cursor.offset(),
        ));
    }

    let mut value = 0i64;
    while let Some(digit) = cursor.peek_digit() {
        value = push_digit(value, digit)
            .ok_or_else(|| malformed(ErrorMessage::IntegerOutOfRange, cursor.offset()))?;
        cursor.advance_bytes(1);
    }
    Ok(ParsedScalar::Integer(value))
}

fn parse_fraction(cursor: &mut Cursor<'_>) -> AmountResult<ParsedScalar> {
    if !cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
        return Err(malformed(
            ErrorMessage::MissingFractionDigits,
            cursor.offset(),
        ));
    }

    let mut value = 0i64;
    let mut scale = 1i64;
    let mut truncated = false;
    while let Some(digit) = cursor.peek_digit() {
        cursor.advance_bytes(1);
        if truncated {
            continue;
        }
        // Digits beyond the precision of the scale are dropped.
        match (push_digit(value, digit), push_digit(scale, 0)) {
            (Some(v), Some(s)) => {
                value = v;
                scale = s;
            }
            _ => truncated = true,
        }
    }
    Ok(ParsedScalar::Fraction { value, scale })
}

/// Appends a decimal digit to `value`, returning `None` on overflow.
#[inline]
fn push_digit<T: CheckedMul + CheckedAdd + FromPrimitive>(value: T, digit: u8) -> Option<T> {
    value
        .checked_mul(&T::from_u8(10)?)?
        .checked_add(&T::from_u8(digit)?)
}

#[inline]
fn malformed(msg: ErrorMessage, offset: usize) -> AmountError {
    AmountError::syntax().with_enum(msg).at(offset)
}

// ==== ParsedScalar ====

/// The numeric part of one unit group, before it is scaled by its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParsedScalar {
    /// The whole-number part of the group.
    Integer(i64),
    /// The digits after the decimal point, as `value / scale`.
    Fraction { value: i64, scale: i64 },
}

impl ParsedScalar {
    /// Returns the nanoseconds this scalar represents in `unit`, truncating
    /// any sub-nanosecond remainder toward zero.
    fn apply_to(self, unit: &DurationUnit) -> Option<i128> {
        match self {
            Self::Integer(value) => i128::from(value).checked_mul(unit.nanoseconds()),
            Self::Fraction { value, scale } => i128::from(value)
                .checked_mul(unit.nanoseconds())
                .map(|nanos| nanos / i128::from(scale)),
        }
    }
}

// ==== Cursor ====

/// A forward-only cursor over the source text.
#[derive(Debug)]
struct Cursor<'a> {
    source: &'a str,
    pos: usize,
    chars: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            chars: 0,
        }
    }

    /// Returns the unconsumed text.
    fn remaining(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_digit(&self) -> Option<u8> {
        match self.remaining().as_bytes().first() {
            Some(b) if b.is_ascii_digit() => Some(b - b'0'),
            _ => None,
        }
    }

    /// Consumes `ch` if it is the next character.
    fn check_or(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.advance_bytes(ch.len_utf8());
            return true;
        }
        false
    }

    /// Advances by `len` bytes. Callers only advance over text they have
    /// already matched, so `pos` stays on a char boundary.
    fn advance_bytes(&mut self, len: usize) {
        let end = (self.pos + len).min(self.source.len());
        self.chars += self.source[self.pos..end].chars().count();
        self.pos = end;
    }

    /// The current position as a character offset.
    fn offset(&self) -> usize {
        self.chars
    }
}
