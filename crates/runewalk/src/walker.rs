//! CodePointWalker: lazy `(offset, scalar)` iteration over UTF-8 bytes.
//!
//! The walker holds a borrowed buffer and a single cursor. Each step inspects
//! the unit under the cursor, looks up how long the sequence it introduces
//! should be, decodes that many units, and advances past them.
//!
//! Malformed input
//! - An invalid leading unit, a truncated sequence, an overlong form, an
//!   encoded surrogate or a value above U+10FFFF all produce
//!   [`Scalar::REPLACEMENT`] and advance the cursor by exactly one unit.
//! - The walk is therefore total: it always ends with the cursor at
//!   `buffer.len()`, and the units consumed by successive steps tile the
//!   buffer with no gaps or overlaps.
//!
//! Invariants
//! - Offsets start at 0 and strictly increase.
//! - `offset + len` of one step is the `offset` of the next.
//! - Cloning a walker snapshots its cursor; the clone and the original walk
//!   independently.

use core::iter::FusedIterator;

use crate::scalar::{Scalar, leading_width};

/// Decodes the first scalar value of `bytes`.
///
/// Returns the scalar and the number of units it consumed, or `None` when
/// `bytes` is empty. Malformed input yields `(Scalar::REPLACEMENT, 1)`.
///
/// ```rust
/// use runewalk::{Scalar, decode_step};
///
/// assert_eq!(decode_step("😊!".as_bytes()), Some((Scalar::new('😊'), 4)));
/// assert_eq!(decode_step(b"\xF0\x9F"), Some((Scalar::REPLACEMENT, 1)));
/// assert_eq!(decode_step(b""), None);
/// ```
#[must_use]
pub fn decode_step(bytes: &[u8]) -> Option<(Scalar, usize)> {
    let &lead = bytes.first()?;
    let Some(width) = leading_width(lead) else {
        return Some((Scalar::REPLACEMENT, 1));
    };
    if width == 1 {
        return Some((Scalar::new(char::from(lead)), 1));
    }
    let Some(sequence) = bytes.get(..width) else {
        // truncated
        return Some((Scalar::REPLACEMENT, 1));
    };
    match bstr::decode_utf8(sequence) {
        (Some(ch), len) if len == width => Some((Scalar::new(ch), width)),
        _ => Some((Scalar::REPLACEMENT, 1)),
    }
}

/// Walks `bytes` as UTF-8, yielding `(byte offset, scalar)` pairs.
///
/// ```rust
/// use runewalk::walk;
///
/// let offsets: Vec<usize> = walk("Hello 😊 世界").map(|(offset, _)| offset).collect();
/// assert_eq!(offsets, [0, 1, 2, 3, 4, 5, 6, 10, 11, 14]);
/// ```
pub fn walk<B: AsRef<[u8]> + ?Sized>(bytes: &B) -> CodePointWalker<'_> {
    CodePointWalker::new(bytes.as_ref())
}

/// Iterator over the scalar values of a UTF-8 buffer and their byte offsets.
///
/// Malformed units follow the same policy as [`decode_step`].
#[derive(Debug, Clone)]
pub struct CodePointWalker<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> CodePointWalker<'a> {
    /// Starts a walk at offset 0.
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// The cursor: offset of the next scalar, or the buffer length once the
    /// walk is done.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.pos
    }

    /// Units not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    /// Switches to yielding full [`Step`] records, including the number of
    /// units each scalar consumed.
    #[must_use]
    pub fn steps(self) -> Steps<'a> {
        Steps { walker: self }
    }

    fn next_step(&mut self) -> Option<Step> {
        let offset = self.pos;
        let (scalar, len) = decode_step(self.remaining())?;
        let malformed = len == 1 && scalar.is_replacement();
        if malformed {
            tracing::trace!(
                offset,
                unit = self.bytes[offset],
                "malformed UTF-8, substituting U+FFFD"
            );
        }
        self.pos += len;
        Some(Step {
            offset,
            scalar,
            len,
            malformed,
        })
    }
}

impl Iterator for CodePointWalker<'_> {
    type Item = (usize, Scalar);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_step().map(|step| (step.offset, step.scalar))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.bytes.len() - self.pos;
        (left.div_ceil(4), Some(left))
    }
}

impl FusedIterator for CodePointWalker<'_> {}

/// One decoded scalar value together with the units it was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Offset of the first unit.
    pub offset: usize,
    /// Decoded value, or U+FFFD for a malformed unit.
    pub scalar: Scalar,
    /// Units consumed (1-4).
    pub len: usize,
    /// Whether `scalar` was substituted for a malformed unit.
    pub malformed: bool,
}

impl Step {
    /// Offset just past the consumed units.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    /// The consumed units, sliced out of the buffer this step came from.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than [`Step::end`].
    #[must_use]
    pub fn units<'b>(&self, bytes: &'b [u8]) -> &'b [u8] {
        &bytes[self.offset..self.end()]
    }
}

/// Iterator yielding [`Step`]s, created by [`CodePointWalker::steps`].
#[derive(Debug, Clone)]
pub struct Steps<'a> {
    walker: CodePointWalker<'a>,
}

impl Steps<'_> {
    /// Offset of the next step.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.walker.offset()
    }
}

impl Iterator for Steps<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        self.walker.next_step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.walker.size_hint()
    }
}

impl FusedIterator for Steps<'_> {}
