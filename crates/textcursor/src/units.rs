use alloc::vec::Vec;

use crate::encoding::{CodeUnit, Encoding};

/// Encodes `text` with `E` into a new buffer ending in the terminator.
///
/// Embedded NULs are copied as-is, so a cursor over the result stops at the
/// first of them.
#[must_use]
pub fn to_terminated_units<E: Encoding>(text: &str) -> Vec<E::Unit> {
    let mut units = Vec::with_capacity(text.len() + 1);
    let mut scratch = [E::Unit::default(); 4];
    for ch in text.chars() {
        let written = E::encode(u32::from(ch), &mut scratch).unwrap_or(0);
        units.extend_from_slice(scratch.get(..written).unwrap_or(&[]));
    }
    units.push(E::Unit::default());
    units
}

/// Counts the units before the first terminator of a raw buffer.
#[must_use]
pub fn terminated_len<U: CodeUnit>(units: &[U]) -> usize {
    units.iter().position(|unit| unit.is_zero()).unwrap_or(units.len())
}
