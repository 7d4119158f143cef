use thiserror::Error;

/// Reasons a value cannot become a [`Scalar`](crate::Scalar).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScalarError {
    /// The value lies above U+10FFFF.
    #[error("code point 0x{0:X} is above U+10FFFF")]
    OutOfRange(u32),
    /// The value lies in the surrogate range U+D800..=U+DFFF.
    #[error("code point U+{0:04X} is a surrogate")]
    Surrogate(u32),
    /// A literal held zero or several scalar values instead of exactly one.
    #[error("expected exactly one scalar value, found {count}")]
    NotSingleScalar {
        /// Number of scalar values actually present.
        count: usize,
    },
}
