#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use runewalk::{Scalar, Step, walk};

#[derive(Debug, Arbitrary)]
struct Input {
    bytes: Vec<u8>,
    /// Stop consuming after this many steps, then resume from a clone.
    pause_after: u8,
}

fuzz_target!(|input: Input| {
    let bytes = input.bytes.as_slice();

    let steps: Vec<Step> = walk(bytes).steps().collect();
    let mut next_offset = 0;
    let mut rebuilt = Vec::with_capacity(bytes.len());
    for step in &steps {
        assert_eq!(step.offset, next_offset, "gap or overlap before {step:?}");
        assert!((1..=4).contains(&step.len));
        if step.malformed {
            assert_eq!(step.scalar, Scalar::REPLACEMENT);
            assert_eq!(step.len, 1);
        }
        rebuilt.extend_from_slice(step.units(bytes));
        next_offset = step.end();
    }
    assert_eq!(next_offset, bytes.len());
    assert_eq!(rebuilt, bytes);

    // Pausing and resuming from a clone must not change the sequence.
    let mut walker = walk(bytes);
    let head: Vec<_> = walker.by_ref().take(usize::from(input.pause_after)).collect();
    let resumed: Vec<_> = head.into_iter().chain(walker.clone()).collect();
    let expected: Vec<_> = steps.iter().map(|s| (s.offset, s.scalar)).collect();
    assert_eq!(resumed, expected);

    if let Ok(text) = std::str::from_utf8(bytes) {
        let ours: Vec<(usize, char)> = walk(text).map(|(o, s)| (o, s.as_char())).collect();
        let std_pairs: Vec<(usize, char)> = text.char_indices().collect();
        assert_eq!(ours, std_pairs);
        assert!(steps.iter().all(|s| !s.malformed));
    }
});
