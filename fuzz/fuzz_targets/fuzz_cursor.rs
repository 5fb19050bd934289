#![no_main]
use std::cell::RefCell;

use arbitrary::Unstructured;
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, RngCore, SeedableRng};
use textcursor::{
    Cursor, CursorMut, Encoding, TextCursor, Utf8, Utf16, Utf32, algorithms, terminated_len,
};

const HEADER: usize = 2; // 1 flag + 1 budget

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

/// Byte sequences that sit on the edges of the UTF-8 and UTF-16 decoders.
static EDGE_TABLE: &[&[u8]] = &[
    b"\x00",
    b"\xFF",
    b"\x80",
    b"\xBF",
    b"\xC0",
    b"\xE2\x82",
    b"\xF0\x9F",
    b"\xF0\x9F\x98",
    b"\xF8\x80\x80\x80\x80",
    b"\xD8\x3D",
    b"\xDE\x00",
    b"\x00\xD8",
    b"\x00\xDC",
    b"\x00\x00\x11\x00",
    "\u{20ac}".as_bytes(),
    "\u{1f600}".as_bytes(),
    "\u{feff}".as_bytes(),
    "\u{3000}".as_bytes(),
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || max_size < HEADER || seed % 4 != 0 {
        return fuzzer_mutate(data, size, max_size);
    }

    let mut len = size;
    data[0] = with_rng(|rng| rng.next_u32() as u8);
    data[1] = with_rng(|rng| rng.next_u32() as u8);

    let splices = with_rng(|rng| rng.random_range(1..=4));
    for _ in 0..splices {
        let edge = with_rng(|rng| EDGE_TABLE[rng.random_range(0..EDGE_TABLE.len())]);
        if len + edge.len() > max_size {
            break;
        }
        let at = with_rng(|rng| rng.random_range(HEADER..=len));
        data.copy_within(at..len, at + edge.len());
        data[at..at + edge.len()].copy_from_slice(edge);
        len += edge.len();
    }
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

fn stepped_length<C: TextCursor>(mut text: C) -> usize {
    let mut count = 0;
    while !text.is_at_end() {
        text.advance();
        count += 1;
    }
    count
}

/// Nothing panics, scans stay inside the slice and budgets hold.
fn check<E: Encoding>(units: &[E::Unit], budget: usize, stop_at_ff: bool) {
    let cursor = Cursor::<E>::new(units);
    let stepped = stepped_length(cursor);
    if !stop_at_ff {
        assert_eq!(cursor.length(), stepped);
    }
    assert!(cursor.length() <= stepped);
    assert!(algorithms::length(cursor) <= stepped);
    assert_eq!(cursor.length_up_to(budget), cursor.length().min(budget));
    assert_eq!(cursor.find_terminating_null().position(), terminated_len(units));

    let _ = E::validate(units, budget);
    let _ = cursor.get_int_value64();
    let _ = cursor.get_double_value();
    let _ = cursor.index_of(cursor.advanced(budget % 4));

    let mut src = cursor;
    let mut buf = vec![0u16; budget];
    let mut dest = CursorMut::<Utf16>::new(&mut buf);
    let written = dest.write_with_dest_unit_limit(&mut src, budget);
    assert!((budget == 0 && written == 0) || written < budget);
    assert!(src.position() <= units.len());
}

fn cursor(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }
    let flags = data[0];
    let budget = usize::from(data[1]);
    let body = &data[HEADER..];

    match flags % 3 {
        0 => {
            let stop_at_ff = body[..terminated_len(body)].contains(&0xFF);
            check::<Utf8>(body, budget, stop_at_ff);

            // Well-formed text must agree with the standard library.
            let text = &body[..terminated_len(body)];
            if let Ok(text) = std::str::from_utf8(text) {
                let cursor = Cursor::<Utf8>::new(body);
                assert!(Utf8::is_valid_sequence(body, usize::MAX));
                assert_eq!(cursor.length(), text.chars().count());
                assert!(cursor.compare(text.chars()).is_eq());
            }
        }
        1 => {
            let units: Vec<u16> = Unstructured::new(body).arbitrary().unwrap_or_default();
            check::<Utf16>(&units, budget, false);
        }
        _ => {
            let units: Vec<u32> = Unstructured::new(body).arbitrary().unwrap_or_default();
            check::<Utf32>(&units, budget, false);
        }
    }
}

fuzz_target!(|data: &[u8]| cursor(data));
