// Phonebook - core/sample.rs
//
// Uniform random selection of record indices without replacement.
// The record slice itself is never reordered.

use rand::Rng;

/// Pick `min(amount, len)` distinct indices in `0..len`, uniformly at random.
///
/// Generic over the RNG so tests can pass a seeded generator.
pub fn sample_indices<R: Rng + ?Sized>(rng: &mut R, len: usize, amount: usize) -> Vec<usize> {
    let amount = amount.min(len);
    if amount == 0 {
        return Vec::new();
    }
    rand::seq::index::sample(rng, len, amount).into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_sample_is_capped_by_len() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = sample_indices(&mut rng, 3, 5);
        assert_eq!(picked.len(), 3);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_sample_has_no_repeats() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let picked = sample_indices(&mut rng, 20, 5);
            assert_eq!(picked.len(), 5);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), 5);
            assert!(picked.iter().all(|&i| i < 20));
        }
    }

    #[test]
    fn test_sample_empty_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_indices(&mut rng, 0, 5).is_empty());
        assert!(sample_indices(&mut rng, 10, 0).is_empty());
    }

    #[test]
    fn test_sample_reaches_every_index() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.extend(sample_indices(&mut rng, 10, 2));
        }
        assert_eq!(seen.len(), 10);
    }
}
