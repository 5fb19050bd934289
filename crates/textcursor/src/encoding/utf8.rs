use core::fmt;

use super::{Encoding, EncodingKind, reject, window};
use crate::error::{SequenceError, SequenceErrorKind};

/// UTF-8 kernel over `u8` units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Utf8;

impl Utf8 {
    /// Byte-order mark as it appears at the start of a UTF-8 stream.
    pub const BYTE_ORDER_MARK: [u8; 3] = [0xEF, 0xBB, 0xBF];
}

/// Number of continuation bytes announced by `lead` (at most 3) and the mask
/// selecting the payload bits of the lead byte.
#[inline]
const fn sequence_shape(lead: u8) -> (usize, u32) {
    let mut mask = 0x7F;
    let mut bit = 0x40;
    let mut extra = 0;
    while lead & bit != 0 && bit > 0x08 {
        mask >>= 1;
        extra += 1;
        bit >>= 1;
    }
    (extra, mask)
}

#[inline]
const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

impl Encoding for Utf8 {
    type Unit = u8;

    const KIND: EncodingKind = EncodingKind::Utf8;
    const MAX_UNITS_PER_CODE_POINT: usize = 4;

    fn decode(units: &[u8]) -> (u32, usize) {
        let Some(&lead) = units.first() else {
            return (0, 0);
        };
        if lead < 0x80 {
            return (u32::from(lead), 1);
        }

        let (extra, mask) = sequence_shape(lead);
        let mut code_point = u32::from(lead) & mask;
        let mut consumed = 1;
        for &next in units.iter().skip(1).take(extra) {
            if !is_continuation(next) {
                break;
            }
            code_point = (code_point << 6) | u32::from(next & 0x3F);
            consumed += 1;
        }
        (code_point, consumed)
    }

    fn code_point_width(units: &[u8]) -> usize {
        let Some(&lead) = units.first() else {
            return 0;
        };
        if lead < 0x80 {
            return 1;
        }
        let (extra, _) = sequence_shape(lead);
        1 + units
            .iter()
            .skip(1)
            .take(extra)
            .take_while(|&&next| is_continuation(next))
            .count()
    }

    #[expect(clippy::cast_possible_truncation)]
    fn encode(code_point: u32, out: &mut [u8]) -> Option<usize> {
        let required = Self::units_required_for(code_point);
        let (lead, continuation) = out.get_mut(..required)?.split_first_mut()?;
        if required == 1 {
            *lead = code_point as u8;
            return Some(1);
        }

        let extra = required - 1;
        *lead = ((0xFF_u32 << (7 - extra)) | (code_point >> (extra * 6))) as u8;
        for (slot, shift) in continuation.iter_mut().zip((0..extra).rev()) {
            *slot = (0x80 | (0x3F & (code_point >> (6 * shift)))) as u8;
        }
        Some(required)
    }

    #[inline]
    fn units_required_for(code_point: u32) -> usize {
        if code_point < 0x80 {
            1
        } else if code_point < 0x800 {
            2
        } else if code_point < 0x1_0000 {
            3
        } else {
            4
        }
    }

    fn validate(units: &[u8], max_units: usize) -> Result<(), SequenceError> {
        let units = window(units, max_units);
        let mut offset = 0;
        while let Some(&lead) = units.get(offset) {
            if lead == 0 {
                break;
            }
            if lead < 0x80 {
                offset += 1;
                continue;
            }
            if lead & 0x40 == 0 {
                return reject::<Self>(SequenceErrorKind::UnexpectedContinuation, offset);
            }

            let extra = lead.leading_ones() as usize - 1;
            if extra > 3 {
                return reject::<Self>(SequenceErrorKind::InvalidLead, offset);
            }
            for i in 1..=extra {
                match units.get(offset + i) {
                    None => return reject::<Self>(SequenceErrorKind::Truncated, offset),
                    Some(&next) if !is_continuation(next) => {
                        return reject::<Self>(SequenceErrorKind::MissingContinuation, offset + i);
                    }
                    Some(_) => {}
                }
            }
            offset += extra + 1;
        }
        Ok(())
    }

    /// Counts code points, stopping early at a lead byte whose
    /// continuation-bit scan runs out of mask bits (`0xFF`). Such a byte is
    /// treated as the end of valid data rather than as corruption.
    fn count_code_points_up_to(units: &[u8], max_chars: usize) -> usize {
        let mut rest = units;
        let mut count = 0;
        while let Some(&lead) = rest.first() {
            if count == max_chars || lead == 0 || lead == 0xFF {
                break;
            }
            let width = Self::code_point_width(rest);
            rest = rest.get(width..).unwrap_or(&[]);
            count += 1;
        }
        count
    }

    fn fmt_units(units: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(bstr::BStr::new(units), f)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::ascii(&[0x41, 0x00], 0x41, 1)]
    #[case::two_bytes(&[0xC3, 0xA9, 0x00], 0xE9, 2)]
    #[case::euro(&[0xE2, 0x82, 0xAC, 0x00], 0x20AC, 3)]
    #[case::emoji(&[0xF0, 0x9F, 0x98, 0x80, 0x00], 0x1_F600, 4)]
    #[case::terminator(&[0x00], 0, 1)]
    #[case::empty(&[], 0, 0)]
    fn decodes(#[case] units: &[u8], #[case] code_point: u32, #[case] consumed: usize) {
        assert_eq!(Utf8::decode(units), (code_point, consumed));
        assert_eq!(Utf8::code_point_width(units), consumed);
    }

    #[test]
    fn truncated_sequence_returns_partial_value() {
        // Lead announces three continuation bytes; only one is genuine.
        let units = [0xF0, 0x9F, 0x41, 0x42, 0x00];
        let (code_point, consumed) = Utf8::decode(&units);
        assert_eq!(code_point, 0x1F);
        assert_eq!(consumed, 2);
        assert_eq!(Utf8::code_point_width(&units), 2);
    }

    #[test]
    fn decode_never_reads_past_slice() {
        let (code_point, consumed) = Utf8::decode(&[0xE2, 0x82]);
        assert_eq!((code_point, consumed), (0x82, 2));
    }

    #[test]
    fn terminator_inside_sequence_is_not_consumed() {
        assert_eq!(Utf8::decode(&[0xE2, 0x00, 0x41]), (0x02, 1));
    }

    #[test]
    fn encodes_euro() {
        let mut out = [0u8; 4];
        assert_eq!(Utf8::encode(0x20AC, &mut out), Some(3));
        assert_eq!(out, [0xE2, 0x82, 0xAC, 0x00]);
    }

    #[test]
    fn encode_refuses_short_buffer() {
        let mut out = [0u8; 2];
        assert_eq!(Utf8::encode(0x20AC, &mut out), None);
        assert_eq!(out, [0, 0]);
    }

    #[test]
    fn byte_order_mark_matches_encoding() {
        let mut out = [0u8; 3];
        assert_eq!(Utf8::encode(crate::encoding::BYTE_ORDER_MARK, &mut out), Some(3));
        assert_eq!(out, Utf8::BYTE_ORDER_MARK);
    }

    #[rstest]
    #[case::threshold_1(0x7F, 1)]
    #[case::threshold_2(0x80, 2)]
    #[case::threshold_3(0x7FF, 2)]
    #[case::threshold_4(0x800, 3)]
    #[case::threshold_5(0xFFFF, 3)]
    #[case::threshold_6(0x1_0000, 4)]
    #[case::threshold_7(0x10_FFFF, 4)]
    fn thresholds(#[case] code_point: u32, #[case] units: usize) {
        let mut out = [0u8; 4];
        assert_eq!(Utf8::units_required_for(code_point), units);
        assert_eq!(Utf8::encode(code_point, &mut out), Some(units));
    }

    #[rstest]
    #[case::ascii(b"hello\0", usize::MAX, Ok(()))]
    #[case::multibyte("h\u{e9}\u{20ac}\u{1f600}\0".as_bytes(), usize::MAX, Ok(()))]
    #[case::stops_at_terminator(b"ok\0\xFF", usize::MAX, Ok(()))]
    #[case::stray_continuation(b"a\x80", usize::MAX, Err((SequenceErrorKind::UnexpectedContinuation, 1)))]
    #[case::five_byte_lead(b"\xF8\x80\x80\x80\x80", usize::MAX, Err((SequenceErrorKind::InvalidLead, 0)))]
    #[case::missing_continuation(b"\xE2\x82A", usize::MAX, Err((SequenceErrorKind::MissingContinuation, 2)))]
    #[case::terminator_mid_sequence(b"\xE2\0", usize::MAX, Err((SequenceErrorKind::MissingContinuation, 1)))]
    #[case::window_cuts_sequence(b"a\xE2\x82\xAC", 3, Err((SequenceErrorKind::Truncated, 1)))]
    #[case::window_excludes_defect(b"ab\xFF", 2, Ok(()))]
    fn validates(
        #[case] units: &[u8],
        #[case] max_units: usize,
        #[case] expected: Result<(), (SequenceErrorKind, usize)>,
    ) {
        let got = Utf8::validate(units, max_units).map_err(|err| (err.kind, err.offset));
        assert_eq!(got, expected);
        assert_eq!(Utf8::is_valid_sequence(units, max_units), expected.is_ok());
    }

    #[test]
    fn count_stops_at_exhausted_lead() {
        assert_eq!(Utf8::count_code_points(b"ab\xFFcd\0"), 2);
        assert_eq!(Utf8::count_code_points("a\u{20ac}b\0".as_bytes()), 3);
        assert_eq!(Utf8::count_code_points(b"abc"), 3);
    }

    #[test]
    fn debug_escapes_malformed_bytes() {
        struct Units<'a>(&'a [u8]);
        impl fmt::Debug for Units<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Utf8::fmt_units(self.0, f)
            }
        }
        let rendered = alloc::format!("{:?}", Units(b"hi\xFF"));
        assert!(rendered.starts_with("\"hi"));
        assert!(rendered.contains("xFF") || rendered.contains("xff"));
    }
}
