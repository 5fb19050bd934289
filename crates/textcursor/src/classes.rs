//! Character classification collaborators.
//!
//! Cursors never classify text themselves. Whitespace skipping,
//! case-insensitive comparison and the first-character predicates on
//! [`Cursor`](crate::Cursor) all go through a [`CharClass`] implementation,
//! which is a pure function table over one decoded code point.

/// Classification and case mapping of single code points.
///
/// Implementations must be pure: the same input always yields the same
/// answer and no state is kept between calls.
pub trait CharClass {
    /// Whitespace, as used by `find_end_of_whitespace` and numeric parsing.
    fn is_whitespace(&self, code_point: u32) -> bool;
    /// Decimal digit.
    fn is_digit(&self, code_point: u32) -> bool;
    /// Alphabetic character.
    fn is_letter(&self, code_point: u32) -> bool;
    /// Letter or decimal digit.
    fn is_letter_or_digit(&self, code_point: u32) -> bool {
        self.is_letter(code_point) || self.is_digit(code_point)
    }
    /// Upper-case letter.
    fn is_upper_case(&self, code_point: u32) -> bool;
    /// Lower-case letter.
    fn is_lower_case(&self, code_point: u32) -> bool;
    /// Upper-case mapping; code points without a single-character mapping
    /// map to themselves.
    fn to_upper_case(&self, code_point: u32) -> u32;
    /// Lower-case mapping; code points without a single-character mapping
    /// map to themselves.
    fn to_lower_case(&self, code_point: u32) -> u32;
}

/// Unicode classification backed by `core::char`.
///
/// Digits are the ASCII digits only, matching what the numeric parser
/// accepts. Values that are not Unicode scalar values (surrogates, values
/// above U+10FFFF) belong to no class and map to themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unicode;

/// ASCII-only classification; every code point at or above U+0080 belongs to
/// no class and maps to itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ascii;

#[inline]
fn scalar(code_point: u32) -> Option<char> {
    char::from_u32(code_point)
}

#[inline]
fn ascii(code_point: u32) -> Option<u8> {
    u8::try_from(code_point).ok().filter(u8::is_ascii)
}

/// Applies a `char` case mapping, keeping only one-to-one results.
fn map_single<I>(code_point: u32, map: fn(char) -> I) -> u32
where
    I: Iterator<Item = char>,
{
    let Some(ch) = scalar(code_point) else {
        return code_point;
    };
    let mut mapped = map(ch);
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => u32::from(single),
        _ => code_point,
    }
}

impl CharClass for Unicode {
    fn is_whitespace(&self, code_point: u32) -> bool {
        scalar(code_point).is_some_and(char::is_whitespace)
    }

    fn is_digit(&self, code_point: u32) -> bool {
        ascii(code_point).is_some_and(|b| b.is_ascii_digit())
    }

    fn is_letter(&self, code_point: u32) -> bool {
        scalar(code_point).is_some_and(char::is_alphabetic)
    }

    fn is_upper_case(&self, code_point: u32) -> bool {
        scalar(code_point).is_some_and(char::is_uppercase)
    }

    fn is_lower_case(&self, code_point: u32) -> bool {
        scalar(code_point).is_some_and(char::is_lowercase)
    }

    fn to_upper_case(&self, code_point: u32) -> u32 {
        map_single(code_point, char::to_uppercase)
    }

    fn to_lower_case(&self, code_point: u32) -> u32 {
        map_single(code_point, char::to_lowercase)
    }
}

impl CharClass for Ascii {
    fn is_whitespace(&self, code_point: u32) -> bool {
        code_point == 0x20 || (0x09..=0x0D).contains(&code_point)
    }

    fn is_digit(&self, code_point: u32) -> bool {
        ascii(code_point).is_some_and(|b| b.is_ascii_digit())
    }

    fn is_letter(&self, code_point: u32) -> bool {
        ascii(code_point).is_some_and(|b| b.is_ascii_alphabetic())
    }

    fn is_upper_case(&self, code_point: u32) -> bool {
        ascii(code_point).is_some_and(|b| b.is_ascii_uppercase())
    }

    fn is_lower_case(&self, code_point: u32) -> bool {
        ascii(code_point).is_some_and(|b| b.is_ascii_lowercase())
    }

    fn to_upper_case(&self, code_point: u32) -> u32 {
        ascii(code_point).map_or(code_point, |b| u32::from(b.to_ascii_uppercase()))
    }

    fn to_lower_case(&self, code_point: u32) -> u32 {
        ascii(code_point).map_or(code_point, |b| u32::from(b.to_ascii_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_case_mapping() {
        assert_eq!(Unicode.to_upper_case(u32::from('a')), u32::from('A'));
        assert_eq!(Unicode.to_lower_case(u32::from('Ä')), u32::from('ä'));
        assert_eq!(Unicode.to_upper_case(u32::from('ω')), u32::from('Ω'));
        // 'ß' upper-cases to "SS"; multi-character mappings are ignored.
        assert_eq!(Unicode.to_upper_case(u32::from('ß')), u32::from('ß'));
        // Lone surrogates are not scalar values.
        assert_eq!(Unicode.to_upper_case(0xD800), 0xD800);
        assert!(!Unicode.is_letter(0xD800));
    }

    #[test]
    fn unicode_classes() {
        assert!(Unicode.is_whitespace(0x3000));
        assert!(Unicode.is_whitespace(u32::from('\t')));
        assert!(!Unicode.is_whitespace(0));
        assert!(Unicode.is_letter(u32::from('é')));
        assert!(Unicode.is_letter_or_digit(u32::from('7')));
        assert!(!Unicode.is_digit(u32::from('٣')));
        assert!(Unicode.is_upper_case(u32::from('É')));
        assert!(Unicode.is_lower_case(u32::from('é')));
    }

    #[test]
    fn ascii_ignores_non_ascii() {
        assert!(Ascii.is_whitespace(0x0B));
        assert!(!Ascii.is_whitespace(0x3000));
        assert!(!Ascii.is_letter(u32::from('é')));
        assert_eq!(Ascii.to_upper_case(u32::from('é')), u32::from('é'));
        assert_eq!(Ascii.to_upper_case(u32::from('q')), u32::from('Q'));
        assert_eq!(Ascii.to_lower_case(u32::from('Q')), u32::from('q'));
    }

    #[quickcheck_macros::quickcheck]
    fn ascii_agrees_with_unicode_on_ascii_letters(byte: u8) -> bool {
        let code_point = u32::from(byte & 0x7F);
        Ascii.is_letter(code_point) == Unicode.is_letter(code_point)
            && Ascii.is_digit(code_point) == Unicode.is_digit(code_point)
            && Ascii.to_upper_case(code_point) == Unicode.to_upper_case(code_point)
            && Ascii.to_lower_case(code_point) == Unicode.to_lower_case(code_point)
    }
}
