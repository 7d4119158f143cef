//! The fixed console transcript printed by the `runes` binary.
//!
//! Three standalone scalar literals come first, each shown as its character
//! and its `U+XXXX` notation. After a blank line and a header, the walk over
//! [`RANGE_TEXT`] prints one line per scalar value with its byte offset.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::{scalar::Scalar, walker::walk};

/// The standalone literals, in print order.
pub const LITERALS: [(&str, Scalar); 3] = [
    ("myRune1", Scalar::new('A')),
    ("myRune2", Scalar::new('世')),
    ("myRune3", Scalar::new('😊')),
];

/// Text walked in the second half of the transcript.
pub const RANGE_TEXT: &str = "Hello 😊 世界";

/// Line introducing the walk.
pub const RANGE_HEADER: &str = "Looping through a string with range:";

/// Writes `name: c (Unicode: U+XXXX)`.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn write_literal_line<W: Write + ?Sized>(
    out: &mut W,
    name: &str,
    scalar: Scalar,
) -> fmt::Result {
    writeln!(out, "{name}: {scalar} (Unicode: {})", scalar.unicode())
}

/// Writes `At byte index N (Unicode: U+XXXX, found rune: c)`.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn write_range_line<W: Write + ?Sized>(
    out: &mut W,
    offset: usize,
    scalar: Scalar,
) -> fmt::Result {
    writeln!(
        out,
        "At byte index {offset} (Unicode: {}, found rune: {scalar})",
        scalar.unicode()
    )
}

/// Writes the whole transcript, one line per print.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn write_transcript<W: Write + ?Sized>(out: &mut W) -> fmt::Result {
    for (name, scalar) in LITERALS {
        write_literal_line(out, name, scalar)?;
    }
    out.write_char('\n')?;
    writeln!(out, "{RANGE_HEADER}")?;
    for (offset, scalar) in walk(RANGE_TEXT) {
        write_range_line(out, offset, scalar)?;
    }
    Ok(())
}

/// Renders the transcript into a `String`.
#[must_use]
pub fn render_transcript() -> String {
    let mut out = String::new();
    // Writing into a `String` never fails.
    let _ = write_transcript(&mut out);
    out
}
