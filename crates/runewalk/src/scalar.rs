use core::fmt;

use crate::error::ScalarError;

/// One Unicode scalar value: any code point in `0..=0x10FFFF` except the
/// surrogates.
///
/// A `Scalar` occupies one logical slot regardless of how many UTF-8 units it
/// needs once placed in a buffer; see [`Scalar::encoded_len`].
///
/// `Display` writes the character itself, while [`Scalar::unicode`] writes
/// the `U+XXXX` notation.
///
/// ```rust
/// use runewalk::Scalar;
///
/// let globe = Scalar::new('世');
/// assert_eq!(globe.code_point(), 0x4E16);
/// assert_eq!(globe.encoded_len(), 3);
/// assert_eq!(format!("{globe} {}", globe.unicode()), "世 U+4E16");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scalar(char);

impl Scalar {
    /// U+FFFD, substituted for undecodable input.
    pub const REPLACEMENT: Scalar = Scalar(char::REPLACEMENT_CHARACTER);

    /// Wraps a `char`, which is always a valid scalar value.
    #[must_use]
    pub const fn new(ch: char) -> Self {
        Scalar(ch)
    }

    /// Parses a literal that must contain exactly one scalar value.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::NotSingleScalar`] when `literal` is empty or
    /// holds more than one scalar value.
    pub fn from_literal(literal: &str) -> Result<Self, ScalarError> {
        let mut chars = literal.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(Scalar(ch)),
            (None, _) => Err(ScalarError::NotSingleScalar { count: 0 }),
            (Some(_), Some(_)) => Err(ScalarError::NotSingleScalar {
                count: literal.chars().count(),
            }),
        }
    }

    /// The wrapped `char`.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// The numeric code point.
    #[must_use]
    pub const fn code_point(self) -> u32 {
        self.0 as u32
    }

    /// Number of UTF-8 units (1-4) this scalar occupies when encoded.
    #[must_use]
    pub const fn encoded_len(self) -> usize {
        self.0.len_utf8()
    }

    /// Encodes into `buf` and returns the written prefix.
    pub fn encode_utf8(self, buf: &mut [u8; 4]) -> &[u8] {
        self.0.encode_utf8(buf).as_bytes()
    }

    /// Whether this is U+FFFD.
    #[must_use]
    pub const fn is_replacement(self) -> bool {
        self.0 == char::REPLACEMENT_CHARACTER
    }

    /// Returns a `Display` adapter writing `U+` and at least four uppercase
    /// hex digits.
    #[must_use]
    pub const fn unicode(self) -> Unicode {
        Unicode(self)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<char> for Scalar {
    fn from(ch: char) -> Self {
        Scalar(ch)
    }
}

impl From<Scalar> for char {
    fn from(scalar: Scalar) -> Self {
        scalar.0
    }
}

impl From<Scalar> for u32 {
    fn from(scalar: Scalar) -> Self {
        scalar.code_point()
    }
}

impl TryFrom<u32> for Scalar {
    type Error = ScalarError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0xD800..=0xDFFF => Err(ScalarError::Surrogate(value)),
            0x11_0000.. => Err(ScalarError::OutOfRange(value)),
            _ => char::from_u32(value)
                .map(Scalar)
                .ok_or(ScalarError::OutOfRange(value)),
        }
    }
}

impl PartialEq<char> for Scalar {
    fn eq(&self, other: &char) -> bool {
        self.0 == *other
    }
}

/// `U+XXXX` rendering of a [`Scalar`], produced by [`Scalar::unicode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unicode(Scalar);

impl fmt::Display for Unicode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0.code_point())
    }
}

/// Total length of the UTF-8 sequence introduced by `lead`.
///
/// Returns `None` for continuation units (`0x80..=0xBF`) and for units that
/// can never start a well-formed sequence (`0xC0`, `0xC1`, `0xF5..=0xFF`).
#[must_use]
pub const fn leading_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}
