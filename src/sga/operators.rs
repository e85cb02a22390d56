//! Bit-string variation operators.
//!
//! # Crossover
//!
//! - [`crossover`]: one-point crossover, optionally replaced by
//!   [`random_chromosome`] pairs (see [`AlternateCrossover`])
//!
//! # Mutation
//!
//! - [`mutate`]: independent per-bit flips
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 3

use super::config::AlternateCrossover;
use crate::problem::Chromosome;
use crate::random::RandomSource;

/// Creates a chromosome of `length` fair-coin bits.
pub fn random_chromosome<R: RandomSource + ?Sized>(length: usize, rng: &mut R) -> Chromosome {
    Chromosome::new((0..length).map(|_| rng.flip(0.5)).collect())
}

/// One-point crossover.
///
/// A site is drawn uniformly in `0..L`. Positions `0..=site` are copied
/// straight (parent1 → child1, parent2 → child2); positions after the site
/// are swapped. Site `0` is treated as "no split": both children are exact
/// copies of their parents.
///
/// When `alternate.enabled` is set, one extra coin with probability
/// `alternate.probability` is tossed after the site draw; on success both
/// children are replaced by fresh random chromosomes.
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn crossover<R: RandomSource + ?Sized>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    alternate: &AlternateCrossover,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let site = rng.below(n);
    if alternate.enabled && rng.flip(alternate.probability) {
        return (random_chromosome(n, rng), random_chromosome(n, rng));
    }
    one_point(parent1, parent2, site)
}

/// Deterministic one-point recombination at `site`.
pub fn one_point(
    parent1: &Chromosome,
    parent2: &Chromosome,
    site: usize,
) -> (Chromosome, Chromosome) {
    let (p1, p2) = (parent1.bits(), parent2.bits());
    let mut c1 = Vec::with_capacity(p1.len());
    let mut c2 = Vec::with_capacity(p1.len());
    for i in 0..p1.len() {
        if i <= site || site == 0 {
            c1.push(p1[i]);
            c2.push(p2[i]);
        } else {
            c1.push(p2[i]);
            c2.push(p1[i]);
        }
    }
    (Chromosome::new(c1), Chromosome::new(c2))
}

/// Flips each bit independently with probability `rate`.
///
/// Consumes exactly one draw per bit.
pub fn mutate<R: RandomSource + ?Sized>(chromosome: &mut Chromosome, rate: f64, rng: &mut R) {
    for bit in chromosome.bits_mut() {
        if rng.flip(rate) {
            *bit = !*bit;
        }
    }
}
