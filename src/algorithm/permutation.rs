//! Orderings over tile indices
//!
//! An ordering lists, for each output position, the source tile placed there.
//! Only permutations of `0..len` describe a rearrangement that keeps every tile.

use bitvec::prelude::*;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Test that `ordering` uses every index in `0..ordering.len()` exactly once
pub fn is_permutation(ordering: &[usize]) -> bool {
    let mut seen = bitvec![0; ordering.len()];

    for &index in ordering {
        let already_seen = seen.get(index).as_deref().copied();
        match already_seen {
            Some(false) => seen.set(index, true),
            // Repeated, or outside the grid
            Some(true) | None => return false,
        }
    }

    true
}

/// The ordering that leaves every tile in place
pub fn identity(tile_count: usize) -> Vec<usize> {
    (0..tile_count).collect()
}

/// The ordering that undoes `ordering`
///
/// Rearranging by `ordering` and then by its inverse restores the original
/// image. Returns `None` if `ordering` is not a permutation.
pub fn inverse(ordering: &[usize]) -> Option<Vec<usize>> {
    if !is_permutation(ordering) {
        return None;
    }

    let mut inverted = vec![0; ordering.len()];
    for (position, &index) in ordering.iter().enumerate() {
        if let Some(slot) = inverted.get_mut(index) {
            *slot = position;
        }
    }

    Some(inverted)
}

/// A random permutation of `tile_count` indices, reproducible from `seed`
pub fn shuffled(tile_count: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ordering = identity(tile_count);
    ordering.shuffle(&mut rng);
    ordering
}
