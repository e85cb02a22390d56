//! Tournament-of-three parent selection.
//!
//! For every mating pair, three individuals are drawn uniformly with
//! replacement. The worst of the three is discarded; the winner and the
//! runner-up become the pair's two parents, winner first.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 3
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"

use super::types::Individual;
use crate::problem::Mode;
use crate::random::RandomSource;

/// Builds a selection record of `population.len()` parent indices.
///
/// Positions `2k` and `2k + 1` hold the parents for pair `k`. Each pair
/// consumes exactly three index draws, in the order `r`, `s`, `t`.
///
/// Ties rank by draw order (`r` before `s` before `t`), so equal fitness
/// never leaves a slot unassigned.
///
/// # Panics
/// Panics if the population is empty or has odd length.
pub fn tournament_of_three<R: RandomSource + ?Sized>(
    population: &[Individual],
    mode: Mode,
    rng: &mut R,
) -> Vec<usize> {
    let n = population.len();
    assert!(n > 0, "cannot select from empty population");
    assert!(n % 2 == 0, "population size must be even for pairing");

    let mut selected = Vec::with_capacity(n);
    for _ in 0..n / 2 {
        let draws = [rng.below(n), rng.below(n), rng.below(n)];
        let (winner, runner_up) = top_two(population, mode, draws);
        selected.push(winner);
        selected.push(runner_up);
    }
    selected
}

/// Winner and runner-up among three drawn indices.
fn top_two(population: &[Individual], mode: Mode, draws: [usize; 3]) -> (usize, usize) {
    let mut ranked = draws;
    // stable: equal fitness keeps draw order
    ranked.sort_by(|&a, &b| mode.compare(population[b].fitness(), population[a].fitness()));
    (ranked[0], ranked[1])
}
