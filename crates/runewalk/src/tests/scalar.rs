use alloc::string::ToString;

use rstest::rstest;

use crate::{Scalar, ScalarError, leading_width};

#[rstest]
#[case::ascii('A', "U+0041")]
#[case::nul('\0', "U+0000")]
#[case::cjk('世', "U+4E16")]
#[case::emoji('😊', "U+1F60A")]
#[case::max('\u{10FFFF}', "U+10FFFF")]
fn unicode_notation(#[case] ch: char, #[case] expected: &str) {
    assert_eq!(Scalar::new(ch).unicode().to_string(), expected);
}

#[test]
fn display_writes_the_character() {
    assert_eq!(Scalar::new('界').to_string(), "界");
    assert_eq!(Scalar::REPLACEMENT.to_string(), "\u{FFFD}");
}

#[rstest]
#[case::ascii(0x41, Ok(Scalar::new('A')))]
#[case::last_before_surrogates(0xD7FF, Ok(Scalar::new('\u{D7FF}')))]
#[case::first_surrogate(0xD800, Err(ScalarError::Surrogate(0xD800)))]
#[case::last_surrogate(0xDFFF, Err(ScalarError::Surrogate(0xDFFF)))]
#[case::max(0x10_FFFF, Ok(Scalar::new('\u{10FFFF}')))]
#[case::above_max(0x11_0000, Err(ScalarError::OutOfRange(0x11_0000)))]
#[case::u32_max(u32::MAX, Err(ScalarError::OutOfRange(u32::MAX)))]
fn try_from_u32(#[case] value: u32, #[case] expected: Result<Scalar, ScalarError>) {
    assert_eq!(Scalar::try_from(value), expected);
}

#[rstest]
#[case::single("世", Ok(Scalar::new('世')))]
#[case::empty("", Err(ScalarError::NotSingleScalar { count: 0 }))]
#[case::pair("世界", Err(ScalarError::NotSingleScalar { count: 2 }))]
#[case::combining("e\u{301}", Err(ScalarError::NotSingleScalar { count: 2 }))]
fn from_literal(#[case] literal: &str, #[case] expected: Result<Scalar, ScalarError>) {
    assert_eq!(Scalar::from_literal(literal), expected);
}

#[test]
fn error_messages() {
    assert_eq!(
        ScalarError::Surrogate(0xD800).to_string(),
        "code point U+D800 is a surrogate"
    );
    assert_eq!(
        ScalarError::OutOfRange(0x11_0000).to_string(),
        "code point 0x110000 is above U+10FFFF"
    );
    assert_eq!(
        ScalarError::NotSingleScalar { count: 3 }.to_string(),
        "expected exactly one scalar value, found 3"
    );
}

#[test]
fn encode_utf8_matches_encoded_len() {
    let mut buf = [0u8; 4];
    for ch in ['A', 'é', '世', '😊'] {
        let scalar = Scalar::new(ch);
        let bytes = scalar.encode_utf8(&mut buf);
        assert_eq!(bytes.len(), scalar.encoded_len());
        assert_eq!(leading_width(bytes[0]), Some(scalar.encoded_len()));
    }
}

#[rstest]
#[case(0x00, Some(1))]
#[case(0x7F, Some(1))]
#[case(0x80, None)]
#[case(0xBF, None)]
#[case(0xC0, None)]
#[case(0xC1, None)]
#[case(0xC2, Some(2))]
#[case(0xDF, Some(2))]
#[case(0xE0, Some(3))]
#[case(0xEF, Some(3))]
#[case(0xF0, Some(4))]
#[case(0xF4, Some(4))]
#[case(0xF5, None)]
#[case(0xFF, None)]
fn leading_width_table(#[case] lead: u8, #[case] expected: Option<usize>) {
    assert_eq!(leading_width(lead), expected);
}

#[test]
fn conversions() {
    let scalar = Scalar::from('界');
    assert_eq!(char::from(scalar), '界');
    assert_eq!(u32::from(scalar), 0x754C);
    assert_eq!(scalar, '界');
    assert!(Scalar::REPLACEMENT.is_replacement());
    assert!(!scalar.is_replacement());
}
