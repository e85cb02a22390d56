//! SGA generational loop.
//!
//! [`Sga`] drives one generation at a time over an explicit [`RunState`]:
//!
//! ```text
//! initialize → ( best → select → recombine → mutate → evaluate → elite → [report] ) × G → final report
//! ```
//!
//! [`SgaRunner`] wraps the common case: build from an [`SgaConfig`], run to
//! completion, return an [`SgaResult`].

use super::config::SgaConfig;
use super::elitism::apply_elitism;
use super::operators::{crossover, mutate, random_chromosome};
use super::selection::tournament_of_three;
use super::types::{Individual, Population};
use crate::error::ConfigError;
use crate::problem::{BinaryCodec, Chromosome, LinearRange, Objective, RangeMapper};
use crate::random::{create_rng, RandomSource};
use crate::report::{FinalReport, GenerationSnapshot, LogReporter, Reporter};
use rand::rngs::StdRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of an SGA run.
#[derive(Debug, Clone)]
pub struct SgaResult {
    /// The best individual seen during the entire run.
    pub best: Individual,

    /// Same as `best.fitness()`.
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best-ever fitness after each generation, followed by the value
    /// after the final population is folded in (`generations + 1` entries).
    pub fitness_history: Vec<f64>,
}

/// Mutable state of a run, owned by the controller between generations.
#[derive(Debug, Clone)]
pub struct RunState {
    /// Generations completed; `0` right after initialization.
    pub generation: usize,

    /// The current generation.
    pub population: Population,

    /// Parent indices chosen in the last generation (empty before the first).
    pub selected: Vec<usize>,

    /// Best of the population the last generation started from.
    pub generation_best: Option<Individual>,

    /// Best individual seen so far; a sentinel until the first generation.
    pub very_best: Individual,

    scratch: Vec<Chromosome>,
}

impl RunState {
    fn new(population: Population, sentinel: Individual) -> Self {
        let n = population.len();
        Self {
            generation: 0,
            population,
            selected: Vec::with_capacity(n),
            generation_best: None,
            very_best: sentinel,
            scratch: Vec::with_capacity(n),
        }
    }
}

/// The evolutionary engine.
///
/// Generic over the objective, the gene-to-real mapper and the random
/// source so each can be substituted without touching the loop.
///
/// # Usage
///
/// ```
/// use u_sga::problem::SinBowl;
/// use u_sga::report::NullReporter;
/// use u_sga::sga::{Sga, SgaConfig};
///
/// let config = SgaConfig::default().with_max_generations(20).with_seed(42);
/// let mut sga = Sga::from_config(SinBowl, config).unwrap();
/// let result = sga.run(&mut NullReporter);
/// assert_eq!(result.generations, 20);
/// ```
pub struct Sga<O, M = LinearRange, R = StdRng> {
    config: SgaConfig,
    codec: BinaryCodec,
    objective: O,
    mapper: M,
    rng: R,
}

impl<O: Objective> Sga<O, LinearRange, StdRng> {
    /// Builds an engine using the configured range and seed.
    ///
    /// A missing seed is drawn at random and logged.
    pub fn from_config(objective: O, config: SgaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        log::info!("seeding random source with {seed}");
        let mapper = config.range();
        Self::new(config, objective, mapper, create_rng(seed))
    }
}

impl<O, M, R> Sga<O, M, R>
where
    O: Objective,
    M: RangeMapper,
    R: RandomSource,
{
    /// Builds an engine from explicit capabilities.
    ///
    /// `mapper` takes the place of the configured range.
    pub fn new(config: SgaConfig, objective: O, mapper: M, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let codec = BinaryCodec::new(config.chromosome_length);
        Ok(Self {
            config,
            codec,
            objective,
            mapper,
            rng,
        })
    }

    pub fn config(&self) -> &SgaConfig {
        &self.config
    }

    pub fn codec(&self) -> &BinaryCodec {
        &self.codec
    }

    /// Decodes and evaluates one chromosome.
    pub fn evaluate(&self, chromosome: Chromosome) -> Individual {
        Individual::evaluate(chromosome, &self.codec, &self.mapper, &self.objective)
    }

    /// Creates and evaluates a random initial population.
    pub fn initialize(&mut self) -> RunState {
        let length = self.config.chromosome_length;
        let chromosomes: Vec<Chromosome> = (0..self.config.population_size)
            .map(|_| random_chromosome(length, &mut self.rng))
            .collect();
        let population = self.evaluate_all(chromosomes);
        self.state_from(population)
    }

    /// Starts a run from an already evaluated population.
    ///
    /// # Panics
    /// Panics if the population size or any chromosome length differs from
    /// the configuration.
    pub fn state_from(&self, population: Population) -> RunState {
        assert_eq!(
            population.len(),
            self.config.population_size,
            "population size does not match configuration"
        );
        assert!(
            population
                .iter()
                .all(|ind| ind.chromosome().len() == self.config.chromosome_length),
            "chromosome length does not match configuration"
        );
        let sentinel = Individual::sentinel(&self.codec, &self.mapper, self.config.mode);
        RunState::new(population, sentinel)
    }

    /// Runs one full generation.
    ///
    /// `state` must come from [`initialize`](Self::initialize) or
    /// [`state_from`](Self::state_from) on this engine.
    pub fn step(&mut self, state: &mut RunState) {
        state.generation += 1;
        self.update_best(state);
        self.select(state);
        self.recombine(state);
        self.mutate(state);
        self.decode_evaluate(state);
        if self.config.elitism {
            self.elite(state);
        }
        log::debug!(
            "generation {}: population best {:.4}, best ever {:.4}",
            state.generation,
            state.population.best(self.config.mode).fitness(),
            state.very_best.fitness()
        );
    }

    /// Folds the final population into the best-ever record.
    pub fn finish(&self, state: &mut RunState) {
        let mode = self.config.mode;
        let best = state.population.best(mode);
        if mode.is_better(best.fitness(), state.very_best.fitness()) {
            state.very_best = best.clone();
        }
    }

    /// Runs all generations, reporting along the way.
    pub fn run<Rep: Reporter + ?Sized>(&mut self, reporter: &mut Rep) -> SgaResult {
        log::info!(
            "running SGA: population {}, {} bits, mutation {}, {} generations, {:?}, elitism {}",
            self.config.population_size,
            self.config.chromosome_length,
            self.config.mutation_rate,
            self.config.max_generations,
            self.config.mode,
            self.config.elitism
        );

        let mut state = self.initialize();
        self.report(&state, reporter);

        let mut fitness_history = Vec::with_capacity(self.config.max_generations + 1);
        while state.generation < self.config.max_generations {
            self.step(&mut state);
            fitness_history.push(state.very_best.fitness());
            if state.generation % self.config.report_interval == 0 {
                self.report(&state, reporter);
            }
        }

        self.finish(&mut state);
        fitness_history.push(state.very_best.fitness());

        reporter.on_finish(&FinalReport {
            generations: state.generation,
            best: &state.very_best,
        });
        log::info!(
            "finished after {} generations: best fitness {:.4}",
            state.generation,
            state.very_best.fitness()
        );

        SgaResult {
            best_fitness: state.very_best.fitness(),
            best: state.very_best,
            generations: state.generation,
            fitness_history,
        }
    }

    fn report<Rep: Reporter + ?Sized>(&self, state: &RunState, reporter: &mut Rep) {
        reporter.on_generation(&GenerationSnapshot {
            generation: state.generation,
            best: state.population.best(self.config.mode),
            selected: &state.selected,
            population: &state.population,
        });
    }

    /// Records the incoming population's best and updates the best-ever.
    fn update_best(&self, state: &mut RunState) {
        let mode = self.config.mode;
        let best = state.population.best(mode).clone();
        if mode.is_better(best.fitness(), state.very_best.fitness()) {
            state.very_best = best.clone();
        }
        state.generation_best = Some(best);
    }

    fn select(&mut self, state: &mut RunState) {
        state.selected =
            tournament_of_three(state.population.as_slice(), self.config.mode, &mut self.rng);
    }

    /// Crosses each selected pair into the scratch buffer.
    fn recombine(&mut self, state: &mut RunState) {
        state.scratch.clear();
        for pair in state.selected.chunks_exact(2) {
            let (c1, c2) = crossover(
                state.population[pair[0]].chromosome(),
                state.population[pair[1]].chromosome(),
                &self.config.alternate_crossover,
                &mut self.rng,
            );
            state.scratch.push(c1);
            state.scratch.push(c2);
        }
    }

    fn mutate(&mut self, state: &mut RunState) {
        for chromosome in &mut state.scratch {
            mutate(chromosome, self.config.mutation_rate, &mut self.rng);
        }
    }

    /// Replaces the population with the evaluated scratch buffer.
    fn decode_evaluate(&self, state: &mut RunState) {
        let chromosomes = std::mem::take(&mut state.scratch);
        state.population = self.evaluate_all(chromosomes);
    }

    fn elite(&self, state: &mut RunState) -> bool {
        match &state.generation_best {
            Some(best) => apply_elitism(&mut state.population, best, self.config.mode),
            None => false,
        }
    }

    fn evaluate_all(&self, chromosomes: Vec<Chromosome>) -> Population {
        Population::new(evaluate_chromosomes(
            chromosomes,
            &self.codec,
            &self.mapper,
            &self.objective,
            self.config.parallel,
        ))
    }
}

/// Evaluate all chromosomes, in order.
#[cfg(feature = "parallel")]
fn evaluate_chromosomes<O: Objective, M: RangeMapper>(
    chromosomes: Vec<Chromosome>,
    codec: &BinaryCodec,
    mapper: &M,
    objective: &O,
    parallel: bool,
) -> Vec<Individual> {
    if parallel {
        chromosomes
            .into_par_iter()
            .map(|c| Individual::evaluate(c, codec, mapper, objective))
            .collect()
    } else {
        chromosomes
            .into_iter()
            .map(|c| Individual::evaluate(c, codec, mapper, objective))
            .collect()
    }
}

/// Evaluate all chromosomes, in order.
#[cfg(not(feature = "parallel"))]
fn evaluate_chromosomes<O: Objective, M: RangeMapper>(
    chromosomes: Vec<Chromosome>,
    codec: &BinaryCodec,
    mapper: &M,
    objective: &O,
    _parallel: bool,
) -> Vec<Individual> {
    chromosomes
        .into_iter()
        .map(|c| Individual::evaluate(c, codec, mapper, objective))
        .collect()
}

/// One-call entry points.
///
/// # Usage
///
/// ```
/// use u_sga::problem::SinBowl;
/// use u_sga::sga::{SgaConfig, SgaRunner};
///
/// let config = SgaConfig::default().with_seed(42);
/// let result = SgaRunner::run(SinBowl, &config).unwrap();
/// println!("Best fitness: {:.4}", result.best_fitness);
/// ```
pub struct SgaRunner;

impl SgaRunner {
    /// Runs the SGA, reporting through the `log` facade.
    pub fn run<O: Objective>(objective: O, config: &SgaConfig) -> Result<SgaResult, ConfigError> {
        Self::run_with_reporter(objective, config, &mut LogReporter)
    }

    /// Runs the SGA with a custom reporter.
    pub fn run_with_reporter<O, Rep>(
        objective: O,
        config: &SgaConfig,
        reporter: &mut Rep,
    ) -> Result<SgaResult, ConfigError>
    where
        O: Objective,
        Rep: Reporter + ?Sized,
    {
        let mut sga = Sga::from_config(objective, config.clone())?;
        Ok(sga.run(reporter))
    }
}

// ============================================================================
// Tests
// ============================================================================
