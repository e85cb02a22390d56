//! Individuals and populations.

use crate::problem::{BinaryCodec, Chromosome, Mode, Objective, RangeMapper};

/// A decoded, evaluated chromosome.
///
/// Genes, coordinates and fitness are derived from `chromosome`.
/// [`Individual::evaluate`] computes them together and
/// [`Individual::sentinel`] decodes the same way, so an `Individual` is
/// never observed with stale genes or coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    chromosome: Chromosome,
    gene_x: u64,
    gene_y: u64,
    x: f64,
    y: f64,
    fitness: f64,
}

impl Individual {
    /// Decodes `chromosome` and evaluates its fitness.
    pub fn evaluate<O, M>(
        chromosome: Chromosome,
        codec: &BinaryCodec,
        mapper: &M,
        objective: &O,
    ) -> Self
    where
        O: Objective + ?Sized,
        M: RangeMapper + ?Sized,
    {
        let (gene_x, gene_y) = codec.decode(&chromosome);
        let bits = codec.gene_bits();
        let x = mapper.map(gene_x, bits);
        let y = mapper.map(gene_y, bits);
        Self {
            chromosome,
            gene_x,
            gene_y,
            x,
            y,
            fitness: objective.evaluate(x, y),
        }
    }

    /// Placeholder with an all-zero chromosome and the mode's worst fitness.
    ///
    /// Genes and coordinates are decoded from the all-zero chromosome like
    /// any other individual; only the fitness is replaced, so the sentinel
    /// loses every comparison against a real individual.
    pub fn sentinel<M>(codec: &BinaryCodec, mapper: &M, mode: Mode) -> Self
    where
        M: RangeMapper + ?Sized,
    {
        let chromosome = Chromosome::zeros(codec.length());
        let (gene_x, gene_y) = codec.decode(&chromosome);
        let bits = codec.gene_bits();
        Self {
            chromosome,
            gene_x,
            gene_y,
            x: mapper.map(gene_x, bits),
            y: mapper.map(gene_y, bits),
            fitness: mode.worst(),
        }
    }

    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    /// Decoded integer genes `(gene_x, gene_y)`.
    pub fn genes(&self) -> (u64, u64) {
        (self.gene_x, self.gene_y)
    }

    /// Range-mapped coordinates `(x, y)`.
    pub fn point(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }
}

/// One generation's individuals, in slot order.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// # Panics
    /// Panics if `individuals` is empty.
    pub fn new(individuals: Vec<Individual>) -> Self {
        assert!(!individuals.is_empty(), "population must not be empty");
        Self { individuals }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Always `false`; populations are never empty.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn as_slice(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Replaces the individual in `slot`.
    pub(crate) fn replace(&mut self, slot: usize, individual: Individual) {
        self.individuals[slot] = individual;
    }

    /// Fittest individual; the lowest slot wins ties.
    pub fn best(&self, mode: Mode) -> &Individual {
        self.best_index(mode)
            .map_or(&self.individuals[0], |i| &self.individuals[i])
    }

    /// Slot of the fittest individual, or `None` if no fitness beats the
    /// mode's sentinel (all NaN).
    pub fn best_index(&self, mode: Mode) -> Option<usize> {
        let mut best: Option<usize> = None;
        let mut best_fitness = mode.worst();
        for (i, ind) in self.individuals.iter().enumerate() {
            if mode.is_better(ind.fitness, best_fitness) {
                best = Some(i);
                best_fitness = ind.fitness;
            }
        }
        best
    }

    /// Mean fitness over all individuals.
    pub fn mean_fitness(&self) -> f64 {
        self.individuals.iter().map(|i| i.fitness).sum::<f64>() / self.len() as f64
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Individual {
        &self.individuals[index]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Individual with explicit fitness and a chromosome tagging its origin.
    pub fn with_fitness(fitness: f64, tag: u64) -> Individual {
        let codec = BinaryCodec::new(8);
        let chromosome = codec.encode(tag & 0xF, 0);
        Individual {
            chromosome,
            gene_x: tag & 0xF,
            gene_y: 0,
            x: 0.0,
            y: 0.0,
            fitness,
        }
    }

    pub fn population(fitnesses: &[f64]) -> Population {
        Population::new(
            fitnesses
                .iter()
                .enumerate()
                .map(|(i, &f)| with_fitness(f, i as u64))
                .collect(),
        )
    }
}
