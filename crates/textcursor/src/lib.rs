//! Cursors over null-terminated Unicode text stored as UTF-8, UTF-16 or
//! UTF-32 code units.
//!
//! The crate is split in three layers:
//!
//! * [`encoding`]: per-encoding kernels that decode and encode one code point
//!   at a time and strictly validate buffers.
//! * [`Cursor`] and [`CursorMut`]: a borrowed buffer plus a position, giving
//!   forward-only reading and bounded writing.
//! * [`algorithms`]: comparison, search, measurement and copying written once
//!   against the [`TextCursor`] and [`TextSink`] traits, so operands may use
//!   different encodings.
//!
//! ```rust
//! use core::cmp::Ordering;
//! use textcursor::{Utf8Cursor, Utf16, Utf16CursorMut, to_terminated_units};
//!
//! let text = to_terminated_units::<textcursor::Utf8>("gr\u{fc}\u{df}e");
//! let mut src = Utf8Cursor::new(&text);
//! assert_eq!(src.length(), 5);
//! assert_eq!(src.compare("gr\u{fc}\u{df}e".chars()), Ordering::Equal);
//!
//! let mut buf = [0u16; 8];
//! let mut dest = Utf16CursorMut::new(&mut buf);
//! assert_eq!(dest.write_all(&mut src), Ok(5));
//! assert_eq!(&buf[..6], &to_terminated_units::<Utf16>("gr\u{fc}\u{df}e")[..]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod algorithms;
mod classes;
mod cursor;
pub mod encoding;
mod error;
pub mod numbers;
mod units;
mod writer;

#[cfg(test)]
mod tests;

pub use classes::{Ascii, CharClass, Unicode};
pub use cursor::{CodePoints, Cursor, TextCursor};
pub use encoding::{CodeUnit, Encoding, EncodingKind, Utf8, Utf16, Utf32};
pub use error::{SequenceError, SequenceErrorKind, WriteError};
pub use units::{terminated_len, to_terminated_units};
pub use writer::{CursorMut, TextSink};

/// Read cursor over UTF-8 bytes.
pub type Utf8Cursor<'a> = Cursor<'a, Utf8>;
/// Read cursor over UTF-16 units.
pub type Utf16Cursor<'a> = Cursor<'a, Utf16>;
/// Read cursor over UTF-32 units.
pub type Utf32Cursor<'a> = Cursor<'a, Utf32>;

/// Write cursor over UTF-8 bytes.
pub type Utf8CursorMut<'a> = CursorMut<'a, Utf8>;
/// Write cursor over UTF-16 units.
pub type Utf16CursorMut<'a> = CursorMut<'a, Utf16>;
/// Write cursor over UTF-32 units.
pub type Utf32CursorMut<'a> = CursorMut<'a, Utf32>;
