//! Rebuild an MT19937 generator from a run of its outputs.
//!
//! All front-ends require `Mt19937::N` consecutive outputs, starting at
//! any output boundary. The clone continues from right after the last
//! output captured. A window with a gap, a repeat or a corrupted output
//! cannot be detected here; the resulting clone will silently diverge
//! from its source.

use crate::error::{Error, Result};
use crate::{untemper, Mt19937};

use rand_core::RngCore;

/// Build a clone from exactly `Mt19937::N` consecutive outputs. The
/// clone's next output is the source's output following the last one
/// given.
pub fn clone_from_outputs(outputs: &[u32]) -> Result<Mt19937> {
    let generation: [u32; Mt19937::N] =
        outputs.try_into().map_err(|_| Error::OutputCount {
            expected: Mt19937::N,
            actual: outputs.len(),
        })?;
    Ok(clone_from_generation(generation))
}

/// Capture `Mt19937::N` outputs from `next_output` and clone its
/// generator.
pub fn clone_from_source<F>(mut next_output: F) -> Mt19937
where
    F: FnMut() -> u32,
{
    clone_from_generation(std::array::from_fn(|_| next_output()))
}

pub fn clone_from_rng<R: RngCore + ?Sized>(rng: &mut R) -> Mt19937 {
    clone_from_source(|| rng.next_u32())
}

fn clone_from_generation(outputs: [u32; Mt19937::N]) -> Mt19937 {
    let mut rng = Mt19937::from_state(outputs.map(untemper));
    rng.twist();
    rng
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compare_streams, StreamComparison};

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    const COMPARE_LIMIT: usize = 100_000;

    #[test]
    fn clone_from_outputs_reproduces_future_outputs() {
        let mut source = Mt19937::new(0);
        let outputs: Vec<u32> = (0..Mt19937::N).map(|_| source.temper()).collect();

        let mut clone = clone_from_outputs(&outputs).unwrap();

        assert_eq!(
            compare_streams(|| source.temper(), || clone.temper(), COMPARE_LIMIT),
            StreamComparison::Match(COMPARE_LIMIT)
        );
    }

    #[test]
    fn clone_from_outputs_leaves_clone_at_start_of_generation() {
        let mut source = Mt19937::new(0);
        let outputs: Vec<u32> = (0..Mt19937::N).map(|_| source.temper()).collect();

        let clone = clone_from_outputs(&outputs).unwrap();

        assert_eq!(clone.index(), 0);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(Mt19937::N - 1)]
    #[case(Mt19937::N + 1)]
    fn clone_from_outputs_rejects_wrong_output_count(#[case] count: usize) {
        let mut source = Mt19937::new(0);
        let outputs: Vec<u32> = (0..count).map(|_| source.temper()).collect();

        let result = clone_from_outputs(&outputs);

        assert_eq!(
            result.err(),
            Some(Error::OutputCount {
                expected: Mt19937::N,
                actual: count
            })
        );
    }

    #[test]
    fn clone_from_rng_copies_rng_state() {
        let mut base_rng = Mt19937::new(101);

        let mut new_rng = clone_from_rng(&mut base_rng);

        for _ in 0..(2 * Mt19937::N) {
            assert_eq!(new_rng.temper(), base_rng.temper());
        }
    }

    #[test]
    fn clone_from_source_copies_a_later_generation() {
        let mut source = Mt19937::new(19650218);
        for _ in 0..(3 * Mt19937::N) {
            source.temper();
        }

        let mut clone = clone_from_source(|| source.temper());

        assert_eq!(
            compare_streams(|| source.temper(), || clone.temper(), COMPARE_LIMIT),
            StreamComparison::Match(COMPARE_LIMIT)
        );
    }

    #[test]
    fn clone_from_source_copies_reference_mt19937() {
        let mut reference = rand_mt::Mt::new(0);

        let mut clone = clone_from_source(|| reference.next_u32());

        assert_eq!(
            compare_streams(|| reference.next_u32(), || clone.temper(), COMPARE_LIMIT),
            StreamComparison::Match(COMPARE_LIMIT)
        );
    }

    #[rstest]
    #[case(1)]
    #[case(100)]
    #[case(Mt19937::N - 1)]
    #[case(Mt19937::N + 1)]
    #[case(1000)]
    fn clone_from_source_copies_from_any_output_boundary(#[case] offset: usize) {
        let mut source = Mt19937::new(0);
        for _ in 0..offset {
            source.temper();
        }

        let mut clone = clone_from_source(|| source.temper());

        assert_eq!(
            compare_streams(|| source.temper(), || clone.temper(), COMPARE_LIMIT),
            StreamComparison::Match(COMPARE_LIMIT)
        );
    }

    #[rstest]
    #[case(1)]
    #[case(300)]
    #[case(Mt19937::N - 1)]
    fn clone_from_capture_with_skipped_output_diverges(#[case] skipped: usize) {
        let mut source = Mt19937::new(0);
        let mut calls = 0;

        let mut clone = clone_from_source(|| {
            if calls == skipped {
                source.temper();
            }
            calls += 1;
            source.temper()
        });

        assert!(matches!(
            compare_streams(|| source.temper(), || clone.temper(), COMPARE_LIMIT),
            StreamComparison::Diverged { .. }
        ));
    }

    #[test]
    fn clone_from_capture_with_corrupted_output_diverges() {
        let mut source = Mt19937::new(0);
        let mut outputs: Vec<u32> = (0..Mt19937::N).map(|_| source.temper()).collect();
        outputs[10] ^= 1;

        let mut clone = clone_from_outputs(&outputs).unwrap();

        assert!(matches!(
            compare_streams(|| source.temper(), || clone.temper(), COMPARE_LIMIT),
            StreamComparison::Diverged { .. }
        ));
    }

    #[test]
    fn clone_from_non_mersenne_rng_diverges() {
        let mut source = StdRng::seed_from_u64(0);

        let mut clone = clone_from_rng(&mut source);

        assert!(matches!(
            compare_streams(|| source.next_u32(), || clone.temper(), COMPARE_LIMIT),
            StreamComparison::Diverged { .. }
        ));
    }
}
