//! Numeric parsing over any [`TextCursor`].
//!
//! Both parsers read a leading number and ignore whatever follows it. Neither
//! reports failure: text without digits parses as zero. Nothing allocates;
//! the float lexeme is assembled in a fixed stack buffer and handed to
//! `core`'s float parser.

use core::fmt::{self, Write as _};

use crate::{
    algorithms::find_end_of_whitespace,
    classes::{CharClass, Unicode},
    cursor::TextCursor,
};

/// Mantissa digits kept for the float parser. Later integer digits only
/// scale the exponent and later fraction digits are dropped.
pub const MAX_MANTISSA_DIGITS: usize = 40;

/// Exponents are clamped to this magnitude; anything larger already
/// saturates to zero or infinity.
const MAX_EXPONENT: i64 = 100_000;

/// Integer types [`parse_int`] can produce.
pub trait Integer: Copy + Default {
    /// `self * 10 + digit`, wrapping on overflow.
    #[must_use]
    fn mul_add_digit(self, digit: u8) -> Self;

    /// Two's complement negation, wrapping on overflow.
    #[must_use]
    fn wrapping_negate(self) -> Self;
}

macro_rules! impl_integer {
    ($($ty:ty),*) => {$(
        impl Integer for $ty {
            #[inline]
            fn mul_add_digit(self, digit: u8) -> Self {
                self.wrapping_mul(10).wrapping_add(<$ty>::from(digit))
            }

            #[inline]
            fn wrapping_negate(self) -> Self {
                self.wrapping_neg()
            }
        }
    )*};
}

impl_integer!(i32, i64);

#[inline]
fn digit_value(code_point: u32) -> Option<u8> {
    if !Unicode.is_digit(code_point) {
        return None;
    }
    u8::try_from(code_point - u32::from(b'0')).ok()
}

/// Consumes a `+` or `-` if present. Returns `true` for `-`.
fn take_sign<C: TextCursor>(text: &mut C) -> bool {
    match text.peek() {
        0x2D => {
            text.advance();
            true
        }
        0x2B => {
            text.advance();
            false
        }
        _ => false,
    }
}

/// Parses an optionally signed decimal integer after leading whitespace.
///
/// Overflow wraps. Text that does not start with digits yields 0.
pub fn parse_int<T: Integer, C: TextCursor>(text: C) -> T {
    let mut text = find_end_of_whitespace(text, &Unicode);
    let negative = take_sign(&mut text);

    let mut value = T::default();
    while let Some(digit) = digit_value(text.peek()) {
        value = value.mul_add_digit(digit);
        text.advance();
    }

    if negative { value.wrapping_negate() } else { value }
}

/// Parses `[sign] digits [. digits] [(e|E) [sign] digits]` after leading
/// whitespace.
///
/// Text with no mantissa digits yields 0.0. An exponent marker that is not
/// followed by digits is ignored.
#[must_use]
pub fn parse_double<C: TextCursor>(text: C) -> f64 {
    let mut text = find_end_of_whitespace(text, &Unicode);
    let mut lexeme = Lexeme::default();
    if take_sign(&mut text) {
        lexeme.push(b'-');
    }

    let mut mantissa = Mantissa::default();
    while let Some(digit) = digit_value(text.peek()) {
        mantissa.integer_digit(&mut lexeme, digit);
        text.advance();
    }
    if text.peek() == u32::from(b'.') {
        text.advance();
        while let Some(digit) = digit_value(text.peek()) {
            mantissa.fraction_digit(&mut lexeme, digit);
            text.advance();
        }
    }

    if !mantissa.seen_digit {
        return 0.0;
    }
    if mantissa.kept == 0 {
        lexeme.push(b'0');
    }

    let exponent = parse_exponent(text).saturating_add(mantissa.exponent_shift);
    let exponent = exponent.clamp(-MAX_EXPONENT, MAX_EXPONENT);
    if write!(lexeme, "e{exponent}").is_err() {
        return 0.0;
    }

    lexeme.as_str().and_then(|s| s.parse().ok()).unwrap_or(0.0)
}

/// Reads an exponent suffix, returning 0 when there is none.
fn parse_exponent<C: TextCursor>(mut text: C) -> i64 {
    if !matches!(text.peek(), 0x45 | 0x65) {
        return 0;
    }
    text.advance();
    let negative = take_sign(&mut text);

    let mut exponent: i64 = 0;
    while let Some(digit) = digit_value(text.peek()) {
        exponent = exponent.saturating_mul(10).saturating_add(i64::from(digit));
        text.advance();
    }

    if negative { -exponent } else { exponent }
}

/// Bookkeeping for the digits of the mantissa.
#[derive(Default)]
struct Mantissa {
    seen_digit: bool,
    kept: usize,
    exponent_shift: i64,
}

impl Mantissa {
    fn integer_digit(&mut self, lexeme: &mut Lexeme, digit: u8) {
        self.seen_digit = true;
        if self.kept == 0 && digit == 0 {
            return;
        }
        if self.kept < MAX_MANTISSA_DIGITS {
            lexeme.push(b'0' + digit);
            self.kept += 1;
        } else {
            self.exponent_shift = self.exponent_shift.saturating_add(1);
        }
    }

    fn fraction_digit(&mut self, lexeme: &mut Lexeme, digit: u8) {
        self.seen_digit = true;
        if self.kept == 0 && digit == 0 {
            self.exponent_shift = self.exponent_shift.saturating_sub(1);
            return;
        }
        if self.kept < MAX_MANTISSA_DIGITS {
            lexeme.push(b'0' + digit);
            self.kept += 1;
            self.exponent_shift = self.exponent_shift.saturating_sub(1);
        }
    }
}

/// Fixed-capacity ASCII buffer holding the normalized float lexeme.
struct Lexeme {
    bytes: [u8; 64],
    len: usize,
}

impl Default for Lexeme {
    fn default() -> Self {
        Self {
            bytes: [0; 64],
            len: 0,
        }
    }
}

impl Lexeme {
    fn push(&mut self, byte: u8) -> bool {
        let Some(slot) = self.bytes.get_mut(self.len) else {
            return false;
        };
        *slot = byte;
        self.len += 1;
        true
    }

    fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.bytes.get(..self.len)?).ok()
    }
}

impl fmt::Write for Lexeme {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &byte in s.as_bytes() {
            if !self.push(byte) {
                return Err(fmt::Error);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::String};

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::plain("42", 42)]
    #[case::whitespace("  \t-17xyz", -17)]
    #[case::plus("+8", 8)]
    #[case::empty("", 0)]
    #[case::no_digits("abc", 0)]
    #[case::sign_only("-", 0)]
    #[case::stops_at_point("3.9", 3)]
    #[case::min("-2147483648", i32::MIN)]
    #[case::wraps("2147483648", i32::MIN)]
    fn ints(#[case] text: &str, #[case] expected: i32) {
        assert_eq!(parse_int::<i32, _>(text.chars()), expected);
    }

    #[test]
    fn long_ints() {
        assert_eq!(parse_int::<i64, _>("9223372036854775807".chars()), i64::MAX);
        assert_eq!(parse_int::<i64, _>(" -12345678901".chars()), -12_345_678_901);
    }

    #[rstest]
    #[case::integer("12", 12.0)]
    #[case::fraction("  3.25 kg", 3.25)]
    #[case::negative("-0.5", -0.5)]
    #[case::leading_point(".5", 0.5)]
    #[case::trailing_point("7.", 7.0)]
    #[case::exponent("1.5e3", 1500.0)]
    #[case::negative_exponent("25E-2", 0.25)]
    #[case::dangling_exponent("4e", 4.0)]
    #[case::dangling_exponent_sign("4e+x", 4.0)]
    #[case::fraction_zeros("0.000125", 0.000_125)]
    #[case::zero("0.0", 0.0)]
    #[case::no_digits("-.e5", 0.0)]
    #[case::word("nan", 0.0)]
    fn doubles(#[case] text: &str, #[case] expected: f64) {
        let parsed = parse_double(text.chars());
        assert!((parsed - expected).abs() <= f64::EPSILON * expected.abs().max(1.0), "{text}: {parsed}");
    }

    #[test]
    fn long_mantissa_scales_exponent() {
        let digits: String = core::iter::repeat_n('9', 300).collect();
        let parsed = parse_double(digits.chars());
        assert!((parsed / 1e300 - 1.0).abs() < 1e-12, "{parsed}");

        let fraction = format!("0.{digits}");
        let parsed = parse_double(fraction.chars());
        assert!((parsed - 1.0).abs() < 1e-12, "{parsed}");
    }

    #[test]
    fn huge_exponents_saturate() {
        assert!(parse_double("1e999999999999999999999".chars()).is_infinite());
        assert_eq!(parse_double("1e-999999999999999999999".chars()), 0.0);
        assert!(parse_double("-0".chars()).is_sign_negative());
    }
}
