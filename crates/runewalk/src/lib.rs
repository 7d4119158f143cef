//! Walks UTF-8 text one Unicode scalar value at a time, reporting the byte
//! offset at which each scalar's encoding begins.
//!
//! ```rust
//! use runewalk::{Scalar, walk};
//!
//! let pairs: Vec<(usize, char)> = walk("a世😊")
//!     .map(|(offset, scalar)| (offset, scalar.as_char()))
//!     .collect();
//! assert_eq!(pairs, [(0, 'a'), (1, '世'), (4, '😊')]);
//!
//! // Malformed units are replaced one at a time, so the walk always finishes.
//! let lossy: Vec<(usize, Scalar)> = walk(b"\xE4\xB8!").collect();
//! assert_eq!(
//!     lossy,
//!     [
//!         (0, Scalar::REPLACEMENT),
//!         (1, Scalar::REPLACEMENT),
//!         (2, Scalar::new('!')),
//!     ]
//! );
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod scalar;
mod transcript;
mod walker;

#[cfg(test)]
mod tests;

pub use error::ScalarError;
pub use scalar::{Scalar, Unicode, leading_width};
pub use transcript::{
    LITERALS, RANGE_HEADER, RANGE_TEXT, render_transcript, write_literal_line, write_range_line,
    write_transcript,
};
pub use walker::{CodePointWalker, Step, Steps, decode_step, walk};
