use alloc::{
    string::{String, ToString},
    vec,
};
use core::cmp::Ordering;

use quickcheck::QuickCheck;

use super::{quickcheck_tests, without_nul};
use crate::{Cursor, CursorMut, Utf8, Utf16, Utf32, encoding::Encoding, to_terminated_units};

const SENTINEL: u8 = 0xAA;

/// Copies `text` from UTF-32 into an `E` buffer with a unit budget and checks
/// the budget, the terminator, untouched trailing units and that the copy is
/// a prefix of the source.
fn budget_holds<E: Encoding>(text: &str, capacity: usize, max_dest_units: usize) -> bool
where
    E::Unit: From<u8>,
{
    let src = to_terminated_units::<Utf32>(text);
    let mut src = Cursor::<Utf32>::new(&src);
    let mut buf = vec![E::Unit::from(SENTINEL); capacity];
    let mut dest = CursorMut::<E>::new(&mut buf);

    let written = dest.write_with_dest_unit_limit(&mut src, max_dest_units);
    let budget = max_dest_units.min(capacity);
    if dest.position() != written || written + 1 > budget {
        return false;
    }
    if buf[written] != E::Unit::default() {
        return false;
    }
    if buf[written + 1..].iter().any(|&unit| unit != E::Unit::from(SENTINEL)) {
        return false;
    }

    let copied = Cursor::<E>::new(&buf).to_string();
    text.starts_with(&copied) && src.compare(text[copied.len()..].chars()) == Ordering::Equal
}

/// Property: a budgeted write never writes more than `max_dest_units` units,
/// terminator included, for any budget of at least one unit.
#[test]
fn dest_unit_budget_is_respected() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, capacity: u8, max_dest_units: u8) -> bool {
        let text = without_nul(&text);
        let capacity = usize::from(capacity % 48) + 1;
        let max_dest_units = usize::from(max_dest_units % 64) + 1;
        budget_holds::<Utf8>(&text, capacity, max_dest_units)
            && budget_holds::<Utf16>(&text, capacity, max_dest_units)
            && budget_holds::<Utf32>(&text, capacity, max_dest_units)
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(String, u8, u8) -> bool);
}

#[test]
fn zero_budget_writes_nothing() {
    let mut src = "abc".chars();
    let mut buf = [SENTINEL; 4];
    let mut dest = CursorMut::<Utf8>::new(&mut buf);
    assert_eq!(dest.write_with_dest_unit_limit(&mut src, 0), 0);
    assert_eq!(buf, [SENTINEL; 4]);
    assert_eq!(src.as_str(), "abc");
}
