use super::{Encoding, EncodingKind, MAX_CODE_POINT, reject, window};
use crate::error::{SequenceError, SequenceErrorKind};

/// UTF-32 kernel over native-endian `u32` units. Decode and encode are the
/// identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Utf32;

impl Utf32 {
    /// Byte-order mark of a big-endian UTF-32 stream.
    pub const BYTE_ORDER_MARK_BE: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];
    /// Byte-order mark of a little-endian UTF-32 stream.
    pub const BYTE_ORDER_MARK_LE: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];
}

impl Encoding for Utf32 {
    type Unit = u32;

    const KIND: EncodingKind = EncodingKind::Utf32;
    const MAX_UNITS_PER_CODE_POINT: usize = 1;

    #[inline]
    fn decode(units: &[u32]) -> (u32, usize) {
        units.first().map_or((0, 0), |&unit| (unit, 1))
    }

    #[inline]
    fn code_point_width(units: &[u32]) -> usize {
        usize::from(!units.is_empty())
    }

    #[inline]
    fn encode(code_point: u32, out: &mut [u32]) -> Option<usize> {
        *out.first_mut()? = code_point;
        Some(1)
    }

    #[inline]
    fn units_required_for(_code_point: u32) -> usize {
        1
    }

    fn validate(units: &[u32], max_units: usize) -> Result<(), SequenceError> {
        for (offset, &unit) in window(units, max_units).iter().enumerate() {
            if unit == 0 {
                break;
            }
            if unit > MAX_CODE_POINT {
                return reject::<Self>(SequenceErrorKind::Unrepresentable, offset);
            }
        }
        Ok(())
    }

    #[inline]
    fn count_code_points_up_to(units: &[u32], max_chars: usize) -> usize {
        units.iter().position(|&unit| unit == 0).unwrap_or(units.len()).min(max_chars)
    }
}
