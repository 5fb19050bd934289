//! Encoding-agnostic text algorithms.
//!
//! Everything here is written once against the [`TextCursor`] and
//! [`TextSink`] capabilities, so the operands may use different encodings:
//! a UTF-16 cursor compares against a UTF-8 cursor, a UTF-32 source copies
//! into a UTF-8 writer, and so on.
//!
//! Cursors are taken by value where the algorithm only needs a private
//! scan, and by `&mut` where the caller observes how far the cursor moved.
//!
//! Text ends at the first code point that decodes to 0. That is usually the
//! terminator, but malformed input such as the overlong `C0 80` also decodes
//! to 0 and ends the text here, so copies never embed a terminator and
//! comparisons, searches and counts agree with each other.

use core::cmp::Ordering;

use crate::{
    classes::CharClass,
    cursor::TextCursor,
    encoding::Encoding,
    error::WriteError,
    writer::TextSink,
};

/// Three-way comparison of two terminated strings, code point by code point.
/// A proper prefix orders before the longer string.
pub fn compare<A: TextCursor, B: TextCursor>(mut a: A, mut b: B) -> Ordering {
    loop {
        let c1 = a.get_and_advance();
        let c2 = b.get_and_advance();
        match c1.cmp(&c2) {
            Ordering::Equal if c1 == 0 => return Ordering::Equal,
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
}

/// Like [`compare`], looking at no more than `max_chars` code points.
pub fn compare_up_to<A: TextCursor, B: TextCursor>(mut a: A, mut b: B, max_chars: usize) -> Ordering {
    for _ in 0..max_chars {
        let c1 = a.get_and_advance();
        let c2 = b.get_and_advance();
        match c1.cmp(&c2) {
            Ordering::Equal if c1 == 0 => break,
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

/// Case-insensitive [`compare`]: both sides are upper-cased through
/// `classes` before comparing.
pub fn compare_ignore_case<A, B, C>(mut a: A, mut b: B, classes: &C) -> Ordering
where
    A: TextCursor,
    B: TextCursor,
    C: CharClass + ?Sized,
{
    loop {
        let c1 = classes.to_upper_case(a.get_and_advance());
        let c2 = classes.to_upper_case(b.get_and_advance());
        match c1.cmp(&c2) {
            Ordering::Equal if c1 == 0 => return Ordering::Equal,
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
}

/// Case-insensitive [`compare_up_to`].
pub fn compare_ignore_case_up_to<A, B, C>(mut a: A, mut b: B, max_chars: usize, classes: &C) -> Ordering
where
    A: TextCursor,
    B: TextCursor,
    C: CharClass + ?Sized,
{
    for _ in 0..max_chars {
        let c1 = classes.to_upper_case(a.get_and_advance());
        let c2 = classes.to_upper_case(b.get_and_advance());
        match c1.cmp(&c2) {
            Ordering::Equal if c1 == 0 => break,
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

/// Code points before the terminator.
pub fn length<C: TextCursor>(text: C) -> usize {
    length_up_to(text, usize::MAX)
}

/// Code points before the terminator, counting no further than `max_chars`.
pub fn length_up_to<C: TextCursor>(mut text: C, max_chars: usize) -> usize {
    let mut count = 0;
    while count < max_chars && text.get_and_advance() != 0 {
        count += 1;
    }
    count
}

/// Index of the first occurrence of `code_point`, or `None`.
pub fn index_of_char<C: TextCursor>(mut text: C, code_point: u32) -> Option<usize> {
    let mut index = 0;
    loop {
        match text.get_and_advance() {
            0 => return None,
            found if found == code_point => return Some(index),
            _ => index += 1,
        }
    }
}

/// Case-insensitive [`index_of_char`].
pub fn index_of_char_ignore_case<C, K>(mut text: C, code_point: u32, classes: &K) -> Option<usize>
where
    C: TextCursor,
    K: CharClass + ?Sized,
{
    let wanted = classes.to_upper_case(code_point);
    let mut index = 0;
    loop {
        match text.get_and_advance() {
            0 => return None,
            found if classes.to_upper_case(found) == wanted => return Some(index),
            _ => index += 1,
        }
    }
}

/// Code point index of the first occurrence of `needle` in `haystack`, or
/// `None`. An empty needle matches at index 0.
pub fn index_of<H: TextCursor, N: TextCursor>(mut haystack: H, needle: N) -> Option<usize> {
    let needle_len = length(needle.clone());
    let mut index = 0;
    loop {
        if compare_up_to(haystack.clone(), needle.clone(), needle_len) == Ordering::Equal {
            return Some(index);
        }
        if haystack.get_and_advance() == 0 {
            return None;
        }
        index += 1;
    }
}

/// Returns `text` moved past any leading whitespace.
#[must_use]
pub fn find_end_of_whitespace<C, K>(mut text: C, classes: &K) -> C
where
    C: TextCursor,
    K: CharClass + ?Sized,
{
    while classes.is_whitespace(text.peek()) {
        text.advance();
    }
    text
}

/// Units that `E` needs to store the text of `text`, terminator excluded.
pub fn units_required_for_text<E: Encoding, C: TextCursor>(mut text: C) -> usize {
    let mut units = 0;
    loop {
        match text.get_and_advance() {
            0 => return units,
            code_point => units += E::units_required_for(code_point),
        }
    }
}

/// Copies `src` up to its terminator, then writes the terminator and moves
/// past it. Both cursors advance. Returns the number of code points copied.
///
/// # Errors
///
/// [`WriteError::Overflow`] when `dest` fills up. Whatever was copied before
/// the failing code point stays written.
pub fn copy_all<D, S>(dest: &mut D, src: &mut S) -> Result<usize, WriteError>
where
    D: TextSink + ?Sized,
    S: TextCursor,
{
    let mut copied = 0;
    loop {
        match src.get_and_advance() {
            0 => break,
            code_point => dest.write(code_point)?,
        }
        copied += 1;
    }
    dest.write(0)?;
    Ok(copied)
}

/// Copies as much of `src` as fits in `max_dest_units` units of `dest`,
/// terminator included, and always terminates `dest` when at least one unit
/// is available. Returns the units written, terminator excluded.
///
/// A code point that does not fit is left unread in `src`, so the copy can
/// be resumed elsewhere. `dest` is left positioned on its terminator.
pub fn copy_with_dest_unit_limit<D, S>(dest: &mut D, src: &mut S, max_dest_units: usize) -> usize
where
    D: TextSink + ?Sized,
    S: TextCursor,
{
    let budget = max_dest_units.min(dest.capacity_remaining());
    let Some(mut remaining) = budget.checked_sub(1) else {
        return 0;
    };

    let mut written = 0;
    loop {
        let code_point = src.peek();
        if code_point == 0 {
            break;
        }
        let needed = dest.units_required_for(code_point);
        if needed > remaining {
            log::debug!(
                "unit budget {max_dest_units} exhausted after {written} units; truncating copy"
            );
            break;
        }
        if dest.write(code_point).is_err() {
            break;
        }
        src.advance();
        remaining -= needed;
        written += needed;
    }

    let terminated = dest.write_terminator();
    debug_assert!(terminated.is_ok(), "terminator space was reserved");
    written
}

/// Copies at most `max_chars - 1` code points from `src` followed by a
/// terminator, so no more than `max_chars` code points (terminator
/// included) are written. `max_chars == 0` writes nothing. Returns the code
/// points copied, terminator excluded.
///
/// # Errors
///
/// [`WriteError::Overflow`] when `dest` fills up first.
pub fn copy_with_char_limit<D, S>(dest: &mut D, src: &mut S, max_chars: usize) -> Result<usize, WriteError>
where
    D: TextSink + ?Sized,
    S: TextCursor,
{
    if max_chars == 0 {
        return Ok(0);
    }
    let mut copied = 0;
    while copied + 1 < max_chars {
        match src.get_and_advance() {
            0 => break,
            code_point => dest.write(code_point)?,
        }
        copied += 1;
    }
    dest.write_terminator()?;
    Ok(copied)
}
