use thiserror::Error;

use crate::encoding::EncodingKind;

/// Returned by write cursors when the destination buffer cannot hold the
/// encoded form of a code point (or the terminator).
///
/// Nothing is written when this error is returned; the cursor position is
/// unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WriteError {
    /// The buffer ran out of room.
    #[error("destination full: {needed} units needed, {available} available")]
    Overflow {
        /// Units the write required.
        needed: usize,
        /// Units left between the cursor and the end of the buffer.
        available: usize,
    },
}

/// The first defect found by a strict validation scan.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind} in {encoding} text at unit {offset}")]
pub struct SequenceError {
    /// Encoding of the buffer that was scanned.
    pub encoding: EncodingKind,
    /// What was wrong.
    pub kind: SequenceErrorKind,
    /// Unit offset (from the start of the scanned slice) of the offending
    /// unit.
    pub offset: usize,
}

/// Classification of a [`SequenceError`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequenceErrorKind {
    /// A continuation unit appeared where a lead unit was expected.
    #[error("unexpected continuation unit")]
    UnexpectedContinuation,
    /// A lead unit announced a sequence longer than the encoding allows.
    #[error("invalid lead unit")]
    InvalidLead,
    /// A unit inside a multi-unit sequence lacked the continuation marker.
    #[error("missing continuation unit")]
    MissingContinuation,
    /// The scan window ended in the middle of a multi-unit sequence.
    #[error("truncated sequence")]
    Truncated,
    /// A UTF-16 surrogate without its partner.
    #[error("unpaired surrogate")]
    UnpairedSurrogate,
    /// A value outside the representable code point range.
    #[error("unrepresentable code point")]
    Unrepresentable,
}
