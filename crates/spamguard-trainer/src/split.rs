//! Seeded train/test partitioning.

use anyhow::{bail, Result};

/// Number of rows that go to the test partition.
///
/// `ceil(n * test_ratio)`, capped so at least one row is left for training.
pub fn test_size(n: usize, test_ratio: f64) -> usize {
    let wanted = (n as f64 * test_ratio).ceil() as usize;
    wanted.min(n.saturating_sub(1))
}

/// Shuffles `items` with a PCG32 stream seeded by `seed` and splits off the
/// test partition. The same seed always yields the same split.
pub fn train_test_split<T: Clone>(
    items: &[T],
    test_ratio: f64,
    seed: u64,
) -> Result<(Vec<T>, Vec<T>)> {
    if !(0.0..1.0).contains(&test_ratio) {
        bail!("test ratio must be in [0, 1), got {test_ratio}");
    }
    if items.is_empty() {
        bail!("cannot split an empty dataset");
    }

    let mut rng = oorandom::Rand32::new(seed);
    let mut indices: Vec<usize> = (0..items.len()).collect();
    for i in (1..indices.len()).rev() {
        let j = rng.rand_range(0..(i as u32 + 1)) as usize;
        indices.swap(i, j);
    }

    let n_test = test_size(items.len(), test_ratio);
    let (test_idx, train_idx) = indices.split_at(n_test);
    let pick = |idx: &[usize]| idx.iter().map(|&i| items[i].clone()).collect::<Vec<_>>();

    Ok((pick(train_idx), pick(test_idx)))
}
