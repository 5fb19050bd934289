//! Per-encoding decode/encode kernels.
//!
//! Each kernel is a zero-sized type implementing [`Encoding`]. Kernels are
//! pure functions over unit slices: they never allocate, never panic on
//! arbitrary input, and treat the end of a slice exactly like a terminator.
//!
//! Decoding is tolerant. A malformed or truncated sequence decodes to
//! whatever was accumulated before the defect, and the defective unit is
//! left unconsumed. [`Encoding::validate`] is the strict counterpart and the
//! only operation that rejects input.

use core::fmt;

use crate::error::{SequenceError, SequenceErrorKind};

mod utf16;
mod utf32;
mod utf8;

pub use utf8::Utf8;
pub use utf16::Utf16;
pub use utf32::Utf32;

/// Largest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// Code point of the byte-order mark (ZERO WIDTH NO-BREAK SPACE).
pub const BYTE_ORDER_MARK: u32 = 0xFEFF;

/// Runtime tag naming one of the supported encodings.
///
/// Useful to owning containers that pick their storage encoding at runtime
/// and dispatch to the statically typed kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncodingKind {
    /// 8-bit units, 1 to 4 units per code point.
    Utf8,
    /// 16-bit units, surrogate pairs above the basic multilingual plane.
    Utf16,
    /// 32-bit units, one unit per code point.
    Utf32,
}

impl EncodingKind {
    /// Size of one storage unit in bytes.
    #[must_use]
    pub const fn unit_size(self) -> usize {
        match self {
            EncodingKind::Utf8 => 1,
            EncodingKind::Utf16 => 2,
            EncodingKind::Utf32 => 4,
        }
    }

    /// Conventional display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EncodingKind::Utf8 => "UTF-8",
            EncodingKind::Utf16 => "UTF-16",
            EncodingKind::Utf32 => "UTF-32",
        }
    }

    /// Units needed to store `code_point` in this encoding.
    #[must_use]
    pub fn units_required_for(self, code_point: u32) -> usize {
        match self {
            EncodingKind::Utf8 => Utf8::units_required_for(code_point),
            EncodingKind::Utf16 => Utf16::units_required_for(code_point),
            EncodingKind::Utf32 => Utf32::units_required_for(code_point),
        }
    }

    /// Whether `code_point` can be stored in this encoding.
    #[must_use]
    pub fn can_represent(self, code_point: u32) -> bool {
        match self {
            EncodingKind::Utf8 => Utf8::can_represent(code_point),
            EncodingKind::Utf16 => Utf16::can_represent(code_point),
            EncodingKind::Utf32 => Utf32::can_represent(code_point),
        }
    }
}

impl fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A storage unit: `u8`, `u16` or `u32`. The zero value is the terminator.
pub trait CodeUnit: Copy + Eq + Default + fmt::Debug + Send + Sync + Into<u32> + 'static {
    /// Whether this unit is the terminator.
    #[inline]
    fn is_zero(self) -> bool {
        self == Self::default()
    }
}

impl CodeUnit for u8 {}
impl CodeUnit for u16 {}
impl CodeUnit for u32 {}

/// Code point ↔ unit sequence arithmetic for one encoding.
pub trait Encoding: Copy + fmt::Debug + Send + Sync + 'static {
    /// The storage unit of this encoding.
    type Unit: CodeUnit;

    /// Runtime tag for this encoding.
    const KIND: EncodingKind;

    /// Longest unit sequence `encode` can produce.
    const MAX_UNITS_PER_CODE_POINT: usize;

    /// Decodes the code point at the start of `units`, returning it with the
    /// number of units consumed.
    ///
    /// An empty slice decodes as `(0, 0)`. A terminator decodes as `(0, 1)`.
    /// Every other input consumes at least one unit and never more than the
    /// slice holds.
    fn decode(units: &[Self::Unit]) -> (u32, usize);

    /// Width in units of the code point at the start of `units`, as `decode`
    /// would consume it.
    #[inline]
    fn code_point_width(units: &[Self::Unit]) -> usize {
        Self::decode(units).1
    }

    /// Encodes `code_point` into the front of `out`, returning the number of
    /// units written. Returns `None`, leaving `out` untouched, when `out` is
    /// shorter than [`units_required_for`](Self::units_required_for).
    fn encode(code_point: u32, out: &mut [Self::Unit]) -> Option<usize>;

    /// Number of units `encode` writes for `code_point`.
    fn units_required_for(code_point: u32) -> usize;

    /// Strictly checks the text in the first `max_units` units of `units`.
    ///
    /// The scan stops successfully at a terminator or at the end of the
    /// window. A sequence cut off by the window is reported as
    /// [`SequenceErrorKind::Truncated`].
    ///
    /// # Errors
    ///
    /// Returns the first malformed, truncated or unrepresentable sequence.
    fn validate(units: &[Self::Unit], max_units: usize) -> Result<(), SequenceError>;

    /// `true` when [`validate`](Self::validate) accepts the window.
    #[inline]
    fn is_valid_sequence(units: &[Self::Unit], max_units: usize) -> bool {
        Self::validate(units, max_units).is_ok()
    }

    /// Whether `code_point` can be stored in this encoding.
    #[inline]
    fn can_represent(code_point: u32) -> bool {
        code_point <= MAX_CODE_POINT
    }

    /// Number of code points before the terminator (or the end of `units`).
    #[inline]
    fn count_code_points(units: &[Self::Unit]) -> usize {
        Self::count_code_points_up_to(units, usize::MAX)
    }

    /// Like [`count_code_points`](Self::count_code_points), counting no
    /// further than `max_chars`.
    fn count_code_points_up_to(units: &[Self::Unit], max_chars: usize) -> usize {
        let mut rest = units;
        let mut count = 0;
        while count < max_chars && rest.first().is_some_and(|unit| !unit.is_zero()) {
            let width = Self::code_point_width(rest);
            rest = rest.get(width..).unwrap_or(&[]);
            count += 1;
        }
        count
    }

    /// Renders a unit slice for `Debug` output.
    fn fmt_units(units: &[Self::Unit], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(units).finish()
    }
}

/// Builds the validation error for `E`, tracing the rejection.
pub(crate) fn reject<E: Encoding>(kind: SequenceErrorKind, offset: usize) -> Result<(), SequenceError> {
    log::trace!("rejecting {} text: {kind} at unit {offset}", E::KIND);
    Err(SequenceError {
        encoding: E::KIND,
        kind,
        offset,
    })
}

/// The first `max_units` units of `units`.
#[inline]
pub(crate) fn window<U>(units: &[U], max_units: usize) -> &[U] {
    &units[..max_units.min(units.len())]
}
