//! Read cursors.
//!
//! A [`Cursor`] is a position inside a borrowed, null-terminated buffer of
//! code units. It is `Copy`: copying a cursor duplicates the position, never
//! the text. All navigation is forward-only and bounded by the slice, so the
//! end of the slice behaves like a terminator even when the caller forgot to
//! write one.

use core::{cmp::Ordering, fmt, fmt::Write as _, iter::FusedIterator, marker::PhantomData};

use crate::{
    algorithms,
    classes::{CharClass, Unicode},
    encoding::{self, CodeUnit, Encoding},
    numbers,
};

/// The read capability every generic algorithm is written against.
///
/// Implementors decode one code point at a time from their current position.
/// Reading at the end of the text yields `0`, and keeps yielding `0`.
pub trait TextCursor: Clone {
    /// The code point at the current position, without moving.
    fn peek(&self) -> u32;

    /// Returns the code point at the current position and moves past it.
    fn get_and_advance(&mut self) -> u32;

    /// Moves past the code point at the current position.
    fn advance(&mut self) {
        self.get_and_advance();
    }

    /// Whether the current unit is the terminator.
    fn is_at_end(&self) -> bool;
}

/// Forward-only cursor over a null-terminated buffer encoded with `E`.
pub struct Cursor<'a, E: Encoding> {
    units: &'a [E::Unit],
    position: usize,
    encoding: PhantomData<E>,
}

impl<E: Encoding> Clone for Cursor<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Encoding> Copy for Cursor<'_, E> {}

impl<'a, E: Encoding> Cursor<'a, E> {
    /// A cursor at the start of `units`.
    #[must_use]
    pub const fn new(units: &'a [E::Unit]) -> Self {
        Self {
            units,
            position: 0,
            encoding: PhantomData,
        }
    }

    /// A cursor at unit offset `position` of `units`, clamped to the slice.
    #[must_use]
    pub fn at_position(units: &'a [E::Unit], position: usize) -> Self {
        Self {
            units,
            position: position.min(units.len()),
            encoding: PhantomData,
        }
    }

    /// Unit offset of the cursor inside its buffer.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The whole buffer the cursor walks.
    #[must_use]
    pub const fn units(&self) -> &'a [E::Unit] {
        self.units
    }

    /// Units from the current position to the end of the buffer.
    #[must_use]
    pub fn remaining(&self) -> &'a [E::Unit] {
        self.units.get(self.position..).unwrap_or(&[])
    }

    /// Whether both cursors point at the same address. This never looks at
    /// the text.
    #[must_use]
    pub fn same_position(&self, other: &Self) -> bool {
        core::ptr::eq(self.remaining().as_ptr(), other.remaining().as_ptr())
    }

    /// The code point at the current position, without moving.
    #[must_use]
    pub fn peek(&self) -> u32 {
        E::decode(self.remaining()).0
    }

    /// Moves past one code point, using the kernel's width computation.
    pub fn advance(&mut self) {
        self.position += E::code_point_width(self.remaining());
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(self.position <= self.units.len(), "Internal error: cursor moved past its buffer");
    }

    /// Decodes the code point at the current position and moves past it.
    pub fn get_and_advance(&mut self) -> u32 {
        let (code_point, consumed) = E::decode(self.remaining());
        self.position += consumed;
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(self.position <= self.units.len(), "Internal error: cursor moved past its buffer");
        code_point
    }

    /// Moves past `count` code points.
    pub fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// A copy of this cursor moved past `count` code points.
    #[must_use]
    pub fn advanced(mut self, count: usize) -> Self {
        self.advance_by(count);
        self
    }

    /// The code point `index` code points after the current position.
    ///
    /// This walks the text: it costs O(`index`) for UTF-8 and UTF-16.
    #[must_use]
    pub fn code_point_at(&self, index: usize) -> u32 {
        self.advanced(index).peek()
    }

    /// Whether the current unit is the terminator (or the buffer ended).
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.remaining().first().is_none_or(|unit| unit.is_zero())
    }

    /// Number of code points before the terminator.
    ///
    /// For UTF-8, a `0xFF` lead byte ends the count as if it were the
    /// terminator.
    #[must_use]
    pub fn length(&self) -> usize {
        E::count_code_points(self.remaining())
    }

    /// Number of code points before the terminator, but at most `max_chars`.
    /// Always `min(self.length(), max_chars)`.
    #[must_use]
    pub fn length_up_to(&self, max_chars: usize) -> usize {
        E::count_code_points_up_to(self.remaining(), max_chars)
    }

    /// Units from the current position up to and including the terminator.
    /// This is a storage size, not a character count.
    ///
    /// A buffer without a terminator reports its remaining length.
    #[must_use]
    pub fn size_in_units(&self) -> usize {
        let rest = self.remaining();
        rest.iter()
            .position(|unit| unit.is_zero())
            .map_or(rest.len(), |index| index + 1)
    }

    /// A cursor positioned on the terminator.
    #[must_use]
    pub fn find_terminating_null(&self) -> Self {
        let rest = self.remaining();
        let offset = rest.iter().position(|unit| unit.is_zero()).unwrap_or(rest.len());
        Self::at_position(self.units, self.position + offset)
    }

    /// A cursor moved past any leading Unicode whitespace. `self` is left
    /// where it was.
    #[must_use]
    pub fn find_end_of_whitespace(&self) -> Self {
        algorithms::find_end_of_whitespace(*self, &Unicode)
    }

    /// A cursor moved past a leading byte-order mark, if there is one.
    #[must_use]
    pub fn skip_byte_order_mark(&self) -> Self {
        let mut text = *self;
        if text.peek() == encoding::BYTE_ORDER_MARK {
            text.advance();
        }
        text
    }

    /// Iterates the code points up to the terminator.
    #[must_use]
    pub fn code_points(&self) -> CodePoints<'a, E> {
        CodePoints { cursor: *self }
    }

    /// Three-way comparison with another text, which may use any encoding.
    #[must_use]
    pub fn compare<C: TextCursor>(&self, other: C) -> Ordering {
        algorithms::compare(*self, other)
    }

    /// Compares no more than `max_chars` code points.
    #[must_use]
    pub fn compare_up_to<C: TextCursor>(&self, other: C, max_chars: usize) -> Ordering {
        algorithms::compare_up_to(*self, other, max_chars)
    }

    /// Case-insensitive comparison using Unicode case mappings.
    #[must_use]
    pub fn compare_ignore_case<C: TextCursor>(&self, other: C) -> Ordering {
        algorithms::compare_ignore_case(*self, other, &Unicode)
    }

    /// Case-insensitive comparison of no more than `max_chars` code points.
    #[must_use]
    pub fn compare_ignore_case_up_to<C: TextCursor>(&self, other: C, max_chars: usize) -> Ordering {
        algorithms::compare_ignore_case_up_to(*self, other, max_chars, &Unicode)
    }

    /// Index of the first `code_point`, or `None`.
    #[must_use]
    pub fn index_of_char(&self, code_point: u32) -> Option<usize> {
        algorithms::index_of_char(*self, code_point)
    }

    /// Index of the first `code_point`, ignoring case.
    #[must_use]
    pub fn index_of_char_ignore_case(&self, code_point: u32) -> Option<usize> {
        algorithms::index_of_char_ignore_case(*self, code_point, &Unicode)
    }

    /// Code point index of the first occurrence of `needle`, or `None`.
    #[must_use]
    pub fn index_of<C: TextCursor>(&self, needle: C) -> Option<usize> {
        algorithms::index_of(*self, needle)
    }

    /// Parses a leading decimal integer; 0 when there is none.
    #[must_use]
    pub fn get_int_value32(&self) -> i32 {
        numbers::parse_int(*self)
    }

    /// Parses a leading decimal integer; 0 when there is none.
    #[must_use]
    pub fn get_int_value64(&self) -> i64 {
        numbers::parse_int(*self)
    }

    /// Parses a leading floating point number; 0.0 when there is none.
    #[must_use]
    pub fn get_double_value(&self) -> f64 {
        numbers::parse_double(*self)
    }

    /// Whether the first code point is whitespace.
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        Unicode.is_whitespace(self.peek())
    }

    /// Whether the first code point is an ASCII digit.
    #[must_use]
    pub fn is_digit(&self) -> bool {
        Unicode.is_digit(self.peek())
    }

    /// Whether the first code point is a letter.
    #[must_use]
    pub fn is_letter(&self) -> bool {
        Unicode.is_letter(self.peek())
    }

    /// Whether the first code point is a letter or a digit.
    #[must_use]
    pub fn is_letter_or_digit(&self) -> bool {
        Unicode.is_letter_or_digit(self.peek())
    }

    /// Whether the first code point is upper-case.
    #[must_use]
    pub fn is_upper_case(&self) -> bool {
        Unicode.is_upper_case(self.peek())
    }

    /// Whether the first code point is lower-case.
    #[must_use]
    pub fn is_lower_case(&self) -> bool {
        Unicode.is_lower_case(self.peek())
    }

    /// Upper-case form of the first code point.
    #[must_use]
    pub fn to_upper_case(&self) -> u32 {
        Unicode.to_upper_case(self.peek())
    }

    /// Lower-case form of the first code point.
    #[must_use]
    pub fn to_lower_case(&self) -> u32 {
        Unicode.to_lower_case(self.peek())
    }

    /// Units `E` needs to store `text`, terminator excluded.
    #[must_use]
    pub fn units_required_for_text<C: TextCursor>(text: C) -> usize {
        algorithms::units_required_for_text::<E, C>(text)
    }

    /// Whether `code_point` can be stored in `E`.
    #[must_use]
    pub fn can_represent(code_point: u32) -> bool {
        E::can_represent(code_point)
    }
}

impl<E: Encoding> TextCursor for Cursor<'_, E> {
    #[inline]
    fn peek(&self) -> u32 {
        Cursor::peek(self)
    }

    #[inline]
    fn get_and_advance(&mut self) -> u32 {
        Cursor::get_and_advance(self)
    }

    #[inline]
    fn advance(&mut self) {
        Cursor::advance(self);
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        Cursor::is_at_end(self)
    }
}

/// Lets plain Rust strings take part in comparisons and searches. A `str`
/// ends at its end or at an embedded NUL.
impl TextCursor for core::str::Chars<'_> {
    fn peek(&self) -> u32 {
        self.clone().next().map_or(0, u32::from)
    }

    fn get_and_advance(&mut self) -> u32 {
        self.next().map_or(0, u32::from)
    }

    fn is_at_end(&self) -> bool {
        self.as_str().chars().next().is_none_or(|ch| ch == '\0')
    }
}

/// Renders the text up to the terminator. Values that are not Unicode
/// scalar values render as U+FFFD.
impl<E: Encoding> fmt::Display for Cursor<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for code_point in self.code_points() {
            f.write_char(char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl<E: Encoding> fmt::Debug for Cursor<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Units<'u, E: Encoding>(&'u [E::Unit]);

        impl<E: Encoding> fmt::Debug for Units<'_, E> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                E::fmt_units(self.0, f)
            }
        }

        f.debug_struct("Cursor")
            .field("encoding", &E::KIND)
            .field("position", &self.position)
            .field("remaining", &Units::<E>(self.remaining()))
            .finish()
    }
}

/// Iterator over the code points of a [`Cursor`], stopping at the
/// terminator.
#[derive(Debug, Clone)]
pub struct CodePoints<'a, E: Encoding> {
    cursor: Cursor<'a, E>,
}

impl<'a, E: Encoding> CodePoints<'a, E> {
    /// Cursor positioned on the next code point to be yielded.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'a, E> {
        self.cursor
    }
}

impl<E: Encoding> Iterator for CodePoints<'_, E> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.cursor.is_at_end() {
            return None;
        }
        Some(self.cursor.get_and_advance())
    }
}

impl<E: Encoding> FusedIterator for CodePoints<'_, E> {}
