#![expect(missing_docs)]

use core::fmt::Write;

use textcursor::{Cursor, Encoding, Utf8, Utf16, Utf32, to_terminated_units};

fn render_units<E: Encoding>(text: &str) -> String {
    let width = E::KIND.unit_size() * 2;
    let mut out = format!("{}:", E::KIND);
    for unit in to_terminated_units::<E>(text) {
        let unit: u32 = unit.into();
        write!(out, " {unit:0width$X}").unwrap();
    }
    out
}

fn render_validation<E: Encoding>(units: &[E::Unit], max_units: usize) -> String {
    match E::validate(units, max_units) {
        Ok(()) => "ok".to_owned(),
        Err(err) => err.to_string(),
    }
}

#[test]
fn snapshot_unit_tables() {
    let table = [
        render_units::<Utf8>("A\u{20ac}\u{1f600}"),
        render_units::<Utf16>("A\u{20ac}\u{1f600}"),
        render_units::<Utf32>("A\u{20ac}\u{1f600}"),
    ]
    .join("\n");

    insta::assert_snapshot!(table, @r"
    UTF-8: 41 E2 82 AC F0 9F 98 80 00
    UTF-16: 0041 20AC D83D DE00 0000
    UTF-32: 00000041 000020AC 0001F600 00000000
    ");
}

#[test]
fn snapshot_validation_errors() {
    let report = [
        render_validation::<Utf8>(b"h\xC3\xA9\0", usize::MAX),
        render_validation::<Utf8>(b"a\x80", usize::MAX),
        render_validation::<Utf8>(b"\xF8\x80\x80\x80\x80", usize::MAX),
        render_validation::<Utf8>(b"\xE2\x82A", usize::MAX),
        render_validation::<Utf8>(b"a\xE2\x82\xAC", 3),
        render_validation::<Utf16>(&[0x41, 0xDE00], usize::MAX),
        render_validation::<Utf32>(&[0x11_0000], usize::MAX),
    ]
    .join("\n");

    insta::assert_snapshot!(report, @r"
    ok
    unexpected continuation unit in UTF-8 text at unit 1
    invalid lead unit in UTF-8 text at unit 0
    missing continuation unit in UTF-8 text at unit 2
    truncated sequence in UTF-8 text at unit 1
    unpaired surrogate in UTF-16 text at unit 1
    unrepresentable code point in UTF-32 text at unit 0
    ");
}

#[test]
fn snapshot_cursor_rendering() {
    let units = to_terminated_units::<Utf16>("na\u{ef}ve \u{1f600}");
    let cursor = Cursor::<Utf16>::new(&units).advanced(2);

    insta::assert_snapshot!(cursor, @"ïve 😀");
    insta::assert_snapshot!(format!("{cursor:?}"), @"Cursor { encoding: Utf16, position: 2, remaining: [239, 118, 101, 32, 55357, 56832, 0] }");
}
