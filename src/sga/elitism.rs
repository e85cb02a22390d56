//! Slot-zero elitism.
//!
//! The previous generation's best individual overwrites slot 0 of the new
//! population whenever it is strictly fitter than slot 0's occupant. Slot 0
//! is sacrificed regardless of where the new population's worst sits.

use super::types::{Individual, Population};
use crate::problem::Mode;

/// Restores `previous_best` into slot 0 if it beats the current occupant.
///
/// Returns `true` if slot 0 was replaced.
pub fn apply_elitism(population: &mut Population, previous_best: &Individual, mode: Mode) -> bool {
    if mode.is_better(previous_best.fitness(), population[0].fitness()) {
        population.replace(0, previous_best.clone());
        log::trace!(
            "elitism restored fitness {:.4} into slot 0",
            previous_best.fitness()
        );
        true
    } else {
        false
    }
}
