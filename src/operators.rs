//! Bit-string crossover and mutation operators.
//!
//! Both operators are pure: parents are borrowed and new individuals are
//! returned, so offspring never alias their parents or each other.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - De Jong (1975), "An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems"

use crate::individual::Individual;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover with a random cut point in `[1, len - 1]`.
///
/// The cut never falls at either end, so every crossover is a real split.
///
/// # Panics
/// Panics if parents have different lengths or fewer than two bits.
pub fn single_point_crossover<R: Rng>(
    parent1: &Individual,
    parent2: &Individual,
    rng: &mut R,
) -> (Individual, Individual) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n >= 2, "parents need at least two bits for a crossover point");

    let point = rng.random_range(1..n);
    crossover_at(parent1, parent2, point)
}

/// Single-point crossover at a fixed cut point.
///
/// `child1 = parent1[..point] ++ parent2[point..]` and
/// `child2 = parent2[..point] ++ parent1[point..]`.
///
/// # Examples
///
/// ```
/// use u_knapsack::{crossover_at, Individual};
///
/// let a: Individual = "1111".parse().unwrap();
/// let b: Individual = "0000".parse().unwrap();
/// let (c1, c2) = crossover_at(&a, &b, 1);
/// assert_eq!(c1.to_string(), "[1, 0, 0, 0]");
/// assert_eq!(c2.to_string(), "[0, 1, 1, 1]");
/// ```
///
/// # Panics
/// Panics if parents have different lengths or `point > len`.
pub fn crossover_at(
    parent1: &Individual,
    parent2: &Individual,
    point: usize,
) -> (Individual, Individual) {
    let (a, b) = (parent1.bits(), parent2.bits());
    assert_eq!(a.len(), b.len(), "parents must have equal length");

    let child1 = a[..point].iter().chain(&b[point..]).copied().collect();
    let child2 = b[..point].iter().chain(&a[point..]).copied().collect();
    (child1, child2)
}

// ============================================================================
// Mutation
// ============================================================================

/// Bit-flip mutation: each bit flips independently with probability `rate`.
///
/// Returns a new individual; `individual` is left untouched. A rate of 0
/// returns an identical copy and a rate of 1 flips every bit.
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
pub fn bit_flip_mutation<R: Rng>(individual: &Individual, rate: f64, rng: &mut R) -> Individual {
    mutate_owned(individual.clone(), rate, rng)
}

/// Consuming variant of [`bit_flip_mutation`] for freshly made offspring.
pub(crate) fn mutate_owned<R: Rng>(individual: Individual, rate: f64, rng: &mut R) -> Individual {
    let mut bits = individual.into_bits();
    for bit in &mut bits {
        if rng.random_bool(rate) {
            *bit = !*bit;
        }
    }
    Individual::new(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn ind(s: &str) -> Individual {
        s.parse().unwrap()
    }

    // ---- Crossover ----

    #[test]
    fn test_crossover_at_segments() {
        let p1 = ind("1100110");
        let p2 = ind("0011001");
        let (c1, c2) = crossover_at(&p1, &p2, 3);
        assert_eq!(c1, ind("1101001"));
        assert_eq!(c2, ind("0010110"));
    }

    #[test]
    fn test_crossover_leaves_parents_untouched() {
        let p1 = ind("1111111");
        let p2 = ind("0000000");
        let mut rng = create_rng(42);
        let _ = single_point_crossover(&p1, &p2, &mut rng);
        assert_eq!(p1, ind("1111111"));
        assert_eq!(p2, ind("0000000"));
    }

    #[test]
    fn test_crossover_point_is_interior() {
        // with complementary parents every interior cut yields mixed children
        let p1 = ind("1111111");
        let p2 = ind("0000000");
        let mut rng = create_rng(42);
        let mut cuts = std::collections::HashSet::new();
        for _ in 0..1000 {
            let (c1, c2) = single_point_crossover(&p1, &p2, &mut rng);
            let cut = c1.count_selected();
            assert!((1..=6).contains(&cut), "cut {cut} must be in [1, 6]");
            assert_eq!(c2.count_selected(), 7 - cut);
            cuts.insert(cut);
        }
        assert_eq!(cuts.len(), 6, "every interior point should occur");
    }

    #[test]
    fn test_self_crossover_is_identity() {
        let p = ind("1010011");
        let mut rng = create_rng(42);
        let (c1, c2) = single_point_crossover(&p, &p, &mut rng);
        assert_eq!(c1, p);
        assert_eq!(c2, p);
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_crossover_length_mismatch_panics() {
        let mut rng = create_rng(42);
        single_point_crossover(&ind("101"), &ind("10"), &mut rng);
    }

    #[test]
    #[should_panic(expected = "at least two bits")]
    fn test_crossover_single_bit_panics() {
        let mut rng = create_rng(42);
        single_point_crossover(&ind("1"), &ind("0"), &mut rng);
    }

    // ---- Mutation ----

    #[test]
    fn test_mutation_rate_zero_is_identity() {
        let p = ind("1010011");
        let mut rng = create_rng(42);
        for _ in 0..100 {
            assert_eq!(bit_flip_mutation(&p, 0.0, &mut rng), p);
        }
    }

    #[test]
    fn test_mutation_rate_one_flips_all() {
        let p = ind("1010011");
        let mut rng = create_rng(42);
        assert_eq!(bit_flip_mutation(&p, 1.0, &mut rng), ind("0101100"));
        assert_eq!(mutate_owned(p.clone(), 1.0, &mut rng), ind("0101100"));
    }

    #[test]
    fn test_mutation_variants_agree() {
        let p = Individual::new((0..64).map(|i| i % 3 == 0).collect());
        for seed in 0..20 {
            let borrowed = bit_flip_mutation(&p, 0.3, &mut create_rng(seed));
            let owned = mutate_owned(p.clone(), 0.3, &mut create_rng(seed));
            assert_eq!(borrowed, owned, "seed {seed}");
        }
    }

    #[test]
    fn test_mutation_does_not_touch_input() {
        let p = ind("1010011");
        let mut rng = create_rng(42);
        let _ = bit_flip_mutation(&p, 0.5, &mut rng);
        assert_eq!(p, ind("1010011"));
    }

    #[test]
    fn test_mutation_flip_frequency() {
        let p = Individual::new(vec![false; 1000]);
        let mut rng = create_rng(42);
        let flipped = bit_flip_mutation(&p, 0.2, &mut rng).count_selected();
        assert!(
            (150..=250).contains(&flipped),
            "expected ~200 flips at rate 0.2, got {flipped}"
        );
    }

    proptest! {
        #[test]
        fn prop_crossover_prefix_suffix(
            (p1, p2, point) in (2usize..32).prop_flat_map(|n| (
                prop::collection::vec(any::<bool>(), n),
                prop::collection::vec(any::<bool>(), n),
                1..n,
            ))
        ) {
            let a = Individual::new(p1.clone());
            let b = Individual::new(p2.clone());
            let (c1, c2) = crossover_at(&a, &b, point);

            prop_assert_eq!(c1.len(), p1.len());
            prop_assert_eq!(c2.len(), p1.len());
            prop_assert_eq!(&c1.bits()[..point], &p1[..point]);
            prop_assert_eq!(&c1.bits()[point..], &p2[point..]);
            prop_assert_eq!(&c2.bits()[..point], &p2[..point]);
            prop_assert_eq!(&c2.bits()[point..], &p1[point..]);
        }

        #[test]
        fn prop_mutation_preserves_length(
            bits in prop::collection::vec(any::<bool>(), 0..64),
            rate in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let p = Individual::new(bits);
            let mut rng = create_rng(seed);
            prop_assert_eq!(bit_flip_mutation(&p, rate, &mut rng).len(), p.len());
        }
    }
}
