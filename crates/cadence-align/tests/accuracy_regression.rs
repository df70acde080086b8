//! Regression tests for cadence-align.
//!
//! Rotation is pure index arithmetic, so round trips must be exact.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use cadence_align::{AlignError, INVALID_INDEX, Rotation, rotate_to_max, unrotate};

fn random_series(rng: &mut ChaCha8Rng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen_range(-50.0..50.0)).collect()
}

#[test]
fn round_trip_is_exact_for_random_series() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for len in 1..=40 {
        let vals = random_series(&mut rng, len);
        let (peak, rotated) = rotate_to_max(&vals);
        assert!(peak < len, "len {len}: peak {peak}");
        assert_eq!(unrotate(peak, &rotated).unwrap(), vals, "len {len}");
    }
}

#[test]
fn round_trip_is_exact_with_repeated_maxima() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for _ in 0..50 {
        let vals: Vec<f64> = (0..12).map(|_| f64::from(rng.gen_range(0..3))).collect();
        let (peak, rotated) = rotate_to_max(&vals);
        let first_max = vals.iter().position(|&v| v == 2.0).unwrap_or(0);
        if vals.contains(&2.0) {
            assert_eq!(peak, first_max);
        }
        assert_eq!(unrotate(peak, &rotated).unwrap(), vals);
    }
}

#[test]
fn rotated_series_starts_with_maximum() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let vals = random_series(&mut rng, 25);
    let max = vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let rotation = Rotation::to_max(&vals).unwrap();
    assert_eq!(rotation.values()[0], max);
    assert_eq!(rotation.unrotate(), vals);
}

#[test]
fn reference_series() {
    let vals = [4.0, 3.0, 5.0, 10.0];
    let (peak, rotated) = rotate_to_max(&vals);
    assert_eq!(peak, 3);
    assert_eq!(rotated, vec![10.0, 4.0, 3.0, 5.0]);
    assert_eq!(unrotate(peak, &rotated).unwrap(), vals.to_vec());
}

#[test]
fn sentinel_and_out_of_range_fail() {
    let (peak, rotated) = rotate_to_max(&[]);
    assert_eq!(peak, INVALID_INDEX);
    assert!(rotated.is_empty());
    assert_eq!(unrotate(INVALID_INDEX, &[1.0, 2.0, 3.0]), Err(AlignError::InvalidIndex));
    assert_eq!(
        unrotate(3, &[1.0, 2.0, 3.0]),
        Err(AlignError::IndexOutOfRange { index: 3, len: 3 })
    );
}

#[test]
fn output_is_independent_of_input_storage() {
    let mut vals = vec![1.0, 5.0, 2.0];
    let (peak, rotated) = rotate_to_max(&vals);
    vals[1] = -1.0;
    assert_eq!(rotated, vec![5.0, 2.0, 1.0]);
    assert_eq!(unrotate(peak, &rotated).unwrap(), vec![1.0, 5.0, 2.0]);
}
