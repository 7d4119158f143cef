use alloc::vec::Vec;

use crate::{Scalar, walk};

/// Number of cases per quickcheck property.
pub(crate) fn property_tests() -> u64 {
    if cfg!(any(miri, feature = "test-fast")) {
        10
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}

/// Collects `(offset, code point)` pairs, which read better in assertions
/// than `Scalar`s.
pub(crate) fn code_points<B: AsRef<[u8]> + ?Sized>(bytes: &B) -> Vec<(usize, u32)> {
    walk(bytes)
        .map(|(offset, scalar)| (offset, scalar.code_point()))
        .collect()
}

pub(crate) const FFFD: u32 = Scalar::REPLACEMENT.code_point();
