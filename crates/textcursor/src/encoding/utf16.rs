use super::{Encoding, EncodingKind, reject, window};
use crate::error::{SequenceError, SequenceErrorKind};

/// UTF-16 kernel over native-endian `u16` units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Utf16;

impl Utf16 {
    /// Byte-order mark of a big-endian UTF-16 stream.
    pub const BYTE_ORDER_MARK_BE: [u8; 2] = [0xFE, 0xFF];
    /// Byte-order mark of a little-endian UTF-16 stream.
    pub const BYTE_ORDER_MARK_LE: [u8; 2] = [0xFF, 0xFE];
}

#[inline]
const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

#[inline]
const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

impl Encoding for Utf16 {
    type Unit = u16;

    const KIND: EncodingKind = EncodingKind::Utf16;
    const MAX_UNITS_PER_CODE_POINT: usize = 2;

    fn decode(units: &[u16]) -> (u32, usize) {
        match *units {
            [] => (0, 0),
            [high, low, ..] if is_high_surrogate(high) && is_low_surrogate(low) => {
                let code_point =
                    0x1_0000 + ((u32::from(high - 0xD800) << 10) | u32::from(low - 0xDC00));
                (code_point, 2)
            }
            // Unpaired surrogates decode as their raw value.
            [unit, ..] => (u32::from(unit), 1),
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    fn encode(code_point: u32, out: &mut [u16]) -> Option<usize> {
        if code_point < 0x1_0000 {
            *out.first_mut()? = code_point as u16;
            return Some(1);
        }

        let [high, low, ..] = out else {
            return None;
        };
        // Values above U+10FFFF wrap; `can_represent` rejects them.
        let offset = code_point - 0x1_0000;
        *high = 0xD800 | ((offset >> 10) & 0x3FF) as u16;
        *low = 0xDC00 | (offset & 0x3FF) as u16;
        Some(2)
    }

    #[inline]
    fn units_required_for(code_point: u32) -> usize {
        if code_point < 0x1_0000 { 1 } else { 2 }
    }

    fn validate(units: &[u16], max_units: usize) -> Result<(), SequenceError> {
        let units = window(units, max_units);
        let mut offset = 0;
        while let Some(&unit) = units.get(offset) {
            if unit == 0 {
                break;
            }
            if is_low_surrogate(unit) {
                return reject::<Self>(SequenceErrorKind::UnpairedSurrogate, offset);
            }
            if is_high_surrogate(unit) {
                match units.get(offset + 1) {
                    None => return reject::<Self>(SequenceErrorKind::Truncated, offset),
                    Some(&low) if !is_low_surrogate(low) => {
                        return reject::<Self>(SequenceErrorKind::UnpairedSurrogate, offset);
                    }
                    Some(_) => offset += 2,
                }
            } else {
                offset += 1;
            }
        }
        Ok(())
    }
}
