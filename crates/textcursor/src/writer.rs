//! Write cursors.
//!
//! [`CursorMut`] encodes code points into a caller-owned buffer and refuses
//! any write that would run past its end.

use core::{fmt, marker::PhantomData};

use crate::{
    algorithms,
    cursor::{Cursor, TextCursor},
    encoding::Encoding,
    error::WriteError,
};

/// The write capability the copy algorithms are written against.
pub trait TextSink {
    /// Encodes `code_point` at the current position and moves past it.
    ///
    /// # Errors
    ///
    /// [`WriteError::Overflow`] when the encoded form does not fit. Nothing
    /// is written in that case.
    fn write(&mut self, code_point: u32) -> Result<(), WriteError>;

    /// Writes the terminator at the current position without moving.
    ///
    /// # Errors
    ///
    /// [`WriteError::Overflow`] when the sink is full.
    fn write_terminator(&mut self) -> Result<(), WriteError>;

    /// Units this sink needs to store `code_point`.
    fn units_required_for(&self, code_point: u32) -> usize;

    /// Units left between the current position and the end of the sink.
    fn capacity_remaining(&self) -> usize;
}

/// Forward-only write cursor over a mutable buffer encoded with `E`.
///
/// The buffer is borrowed exclusively for the lifetime of the cursor. Writes
/// never reach past the end of the slice: a code point that does not fit is
/// refused whole.
pub struct CursorMut<'a, E: Encoding> {
    units: &'a mut [E::Unit],
    position: usize,
    encoding: PhantomData<E>,
}

impl<'a, E: Encoding> CursorMut<'a, E> {
    /// A write cursor at the start of `units`.
    #[must_use]
    pub fn new(units: &'a mut [E::Unit]) -> Self {
        Self {
            units,
            position: 0,
            encoding: PhantomData,
        }
    }

    /// A write cursor at unit offset `position`, clamped to the buffer.
    #[must_use]
    pub fn at_position(units: &'a mut [E::Unit], position: usize) -> Self {
        let position = position.min(units.len());
        Self {
            units,
            position,
            encoding: PhantomData,
        }
    }

    /// Unit offset of the cursor inside its buffer.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Units left between the cursor and the end of the buffer.
    #[must_use]
    pub fn capacity_remaining(&self) -> usize {
        self.units.len() - self.position
    }

    /// The units before the cursor.
    #[must_use]
    pub fn written(&self) -> &[E::Unit] {
        self.units.get(..self.position).unwrap_or(&[])
    }

    /// A read cursor over the same buffer, at the same position.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, E> {
        Cursor::at_position(&*self.units, self.position)
    }

    /// Gives up write access, keeping the position.
    #[must_use]
    pub fn into_cursor(self) -> Cursor<'a, E> {
        let Self { units, position, .. } = self;
        Cursor::at_position(units, position)
    }

    /// Encodes `code_point` at the current position and moves past it.
    ///
    /// # Errors
    ///
    /// [`WriteError::Overflow`] when the buffer lacks room. Nothing is
    /// written and the position does not move.
    pub fn write(&mut self, code_point: u32) -> Result<(), WriteError> {
        let available = self.capacity_remaining();
        let out = self.units.get_mut(self.position..).unwrap_or_default();
        match E::encode(code_point, out) {
            Some(written) => {
                self.position += written;
                Ok(())
            }
            None => Err(WriteError::Overflow {
                needed: E::units_required_for(code_point),
                available,
            }),
        }
    }

    /// Writes the terminator at the current position. The position does not
    /// move, so following writes overwrite it.
    ///
    /// # Errors
    ///
    /// [`WriteError::Overflow`] when the buffer is full.
    pub fn write_terminator(&mut self) -> Result<(), WriteError> {
        let slot = self.units.get_mut(self.position).ok_or(WriteError::Overflow {
            needed: 1,
            available: 0,
        })?;
        *slot = E::Unit::default();
        Ok(())
    }

    /// Copies `src` up to its terminator and terminates this buffer. Both
    /// cursors end up past their terminators. `src` may use any encoding.
    ///
    /// Returns the number of code points copied.
    ///
    /// # Errors
    ///
    /// [`WriteError::Overflow`] when the buffer fills up; the code points
    /// copied so far stay written.
    pub fn write_all<S: TextCursor>(&mut self, src: &mut S) -> Result<usize, WriteError> {
        algorithms::copy_all(self, src)
    }

    /// Copies from `src` using no more than `max_dest_units` units of this
    /// buffer, terminator included, and terminates. Returns the units
    /// written, terminator excluded. The cursor is left on the terminator.
    ///
    /// A limit of 0 writes nothing. A code point that would not fit next to
    /// the terminator is not copied and stays unread in `src`.
    pub fn write_with_dest_unit_limit<S: TextCursor>(&mut self, src: &mut S, max_dest_units: usize) -> usize {
        algorithms::copy_with_dest_unit_limit(self, src, max_dest_units)
    }

    /// Copies at most `max_chars - 1` code points from `src`, then the
    /// terminator. A limit of 0 writes nothing. Returns the code points
    /// copied, terminator excluded.
    ///
    /// # Errors
    ///
    /// [`WriteError::Overflow`] when the buffer fills up first.
    pub fn write_with_char_limit<S: TextCursor>(&mut self, src: &mut S, max_chars: usize) -> Result<usize, WriteError> {
        algorithms::copy_with_char_limit(self, src, max_chars)
    }
}

impl<E: Encoding> TextSink for CursorMut<'_, E> {
    #[inline]
    fn write(&mut self, code_point: u32) -> Result<(), WriteError> {
        CursorMut::write(self, code_point)
    }

    #[inline]
    fn write_terminator(&mut self) -> Result<(), WriteError> {
        CursorMut::write_terminator(self)
    }

    #[inline]
    fn units_required_for(&self, code_point: u32) -> usize {
        E::units_required_for(code_point)
    }

    #[inline]
    fn capacity_remaining(&self) -> usize {
        CursorMut::capacity_remaining(self)
    }
}

impl<E: Encoding> fmt::Debug for CursorMut<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("encoding", &E::KIND)
            .field("position", &self.position)
            .field("capacity_remaining", &self.capacity_remaining())
            .finish()
    }
}
