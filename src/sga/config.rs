//! SGA configuration.
//!
//! [`SgaConfig`] holds every run parameter of the evolutionary loop.

use crate::error::ConfigError;
use crate::problem::{LinearRange, Mode, MAX_CHROMOSOME_LENGTH};

/// Optional replacement for one-point crossover.
///
/// When enabled, each mating pair is discarded with probability
/// `probability` and replaced by two fully random children. This injects
/// fresh genetic material in bursts instead of through mutation alone.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlternateCrossover {
    pub enabled: bool,
    pub probability: f64,
}

impl Default for AlternateCrossover {
    fn default() -> Self {
        Self {
            enabled: false,
            probability: 0.09,
        }
    }
}

/// Configuration for the Simple Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_sga::sga::SgaConfig;
/// use u_sga::problem::Mode;
///
/// let config = SgaConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.chromosome_length, 32);
/// assert_eq!(config.max_generations, 100);
/// assert_eq!(config.mode, Mode::Minimize);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_sga::sga::SgaConfig;
/// use u_sga::problem::Mode;
///
/// let config = SgaConfig::default()
///     .with_population_size(40)
///     .with_mutation_rate(0.02)
///     .with_mode(Mode::Maximize)
///     .with_alternate_crossover(0.05)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SgaConfig {
    /// Number of individuals per generation. Must be even.
    pub population_size: usize,

    /// Bits per chromosome. Must be even; each half encodes one gene.
    pub chromosome_length: usize,

    /// Per-bit flip probability applied to every offspring bit.
    pub mutation_rate: f64,

    /// Number of generations to run. There is no convergence test.
    pub max_generations: usize,

    /// A snapshot is reported every `report_interval` generations.
    pub report_interval: usize,

    /// Whether lower or higher fitness wins.
    pub mode: Mode,

    /// Whether the previous generation's best may overwrite slot 0.
    pub elitism: bool,

    /// Random-children replacement for crossover (off by default).
    pub alternate_crossover: AlternateCrossover,

    /// Lower bound of the phenotype interval.
    pub range_lo: f64,

    /// Upper bound of the phenotype interval.
    pub range_hi: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to evaluate offspring in parallel using rayon.
    ///
    /// Only effective with the `parallel` feature. Evaluation draws no
    /// randomness, so results are identical either way.
    pub parallel: bool,
}

impl Default for SgaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            chromosome_length: 32,
            mutation_rate: 0.08,
            max_generations: 100,
            report_interval: 10,
            mode: Mode::Minimize,
            elitism: true,
            alternate_crossover: AlternateCrossover::default(),
            range_lo: -13.0,
            range_hi: 17.0,
            seed: None,
            parallel: false,
        }
    }
}

impl SgaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the chromosome length in bits.
    pub fn with_chromosome_length(mut self, bits: usize) -> Self {
        self.chromosome_length = bits;
        self
    }

    /// Sets the per-bit mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the reporting interval.
    pub fn with_report_interval(mut self, n: usize) -> Self {
        self.report_interval = n;
        self
    }

    /// Sets the optimization direction.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Enables the alternate crossover with the given trigger probability.
    pub fn with_alternate_crossover(mut self, probability: f64) -> Self {
        self.alternate_crossover = AlternateCrossover {
            enabled: true,
            probability,
        };
        self
    }

    /// Sets the phenotype interval.
    pub fn with_range(mut self, lo: f64, hi: f64) -> Self {
        self.range_lo = lo;
        self.range_hi = hi;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The phenotype interval as a [`LinearRange`].
    pub fn range(&self) -> LinearRange {
        LinearRange::new(self.range_lo, self.range_hi)
    }

    /// The classic sin-bowl minimization setup: 20 strings of 32 bits,
    /// 8% per-bit mutation, 100 generations, report every 10.
    ///
    /// Identical to [`Default`]; named for readability at call sites.
    pub fn sin_bowl() -> Self {
        Self::default()
    }

    /// Sin-bowl setup with the alternate crossover enabled at 9%.
    ///
    /// Trades steady convergence for occasional bursts of fresh material.
    pub fn exploratory() -> Self {
        Self::default().with_alternate_crossover(0.09)
    }

    /// Validates the configuration.
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 || self.population_size % 2 != 0 {
            return Err(ConfigError::InvalidPopulationSize(self.population_size));
        }
        if self.chromosome_length < 2
            || self.chromosome_length % 2 != 0
            || self.chromosome_length > MAX_CHROMOSOME_LENGTH
        {
            return Err(ConfigError::InvalidChromosomeLength {
                length: self.chromosome_length,
                max: MAX_CHROMOSOME_LENGTH,
            });
        }
        check_probability("mutation_rate", self.mutation_rate)?;
        check_probability(
            "alternate_crossover.probability",
            self.alternate_crossover.probability,
        )?;
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.report_interval == 0 {
            return Err(ConfigError::ZeroReportInterval);
        }
        if !self.range_lo.is_finite()
            || !self.range_hi.is_finite()
            || self.range_lo >= self.range_hi
        {
            return Err(ConfigError::InvalidRange {
                lo: self.range_lo,
                hi: self.range_hi,
            });
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SgaConfig::default();
        assert_eq!(config.population_size, 20);
        assert_eq!(config.chromosome_length, 32);
        assert!((config.mutation_rate - 0.08).abs() < 1e-10);
        assert_eq!(config.max_generations, 100);
        assert_eq!(config.report_interval, 10);
        assert_eq!(config.mode, Mode::Minimize);
        assert!(config.elitism);
        assert!(!config.alternate_crossover.enabled);
        assert!((config.alternate_crossover.probability - 0.09).abs() < 1e-10);
        assert_eq!(config.range(), LinearRange::new(-13.0, 17.0));
        assert!(config.seed.is_none());
        assert!(!config.parallel);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SgaConfig::default()
            .with_population_size(50)
            .with_chromosome_length(20)
            .with_mutation_rate(0.01)
            .with_max_generations(300)
            .with_report_interval(25)
            .with_mode(Mode::Maximize)
            .with_elitism(false)
            .with_alternate_crossover(0.2)
            .with_range(-1.0, 1.0)
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.population_size, 50);
        assert_eq!(config.chromosome_length, 20);
        assert!((config.mutation_rate - 0.01).abs() < 1e-10);
        assert_eq!(config.max_generations, 300);
        assert_eq!(config.report_interval, 25);
        assert_eq!(config.mode, Mode::Maximize);
        assert!(!config.elitism);
        assert!(config.alternate_crossover.enabled);
        assert!((config.alternate_crossover.probability - 0.2).abs() < 1e-10);
        assert_eq!(config.range(), LinearRange::new(-1.0, 1.0));
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(SgaConfig::default()
            .validate()
            .is_ok());
        assert!(SgaConfig::exploratory().validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(SgaConfig::sin_bowl(), SgaConfig::default());
        let config = SgaConfig::exploratory();
        assert!(config.alternate_crossover.enabled);
        assert_eq!(config.population_size, 20);
    }

    #[test]
    fn test_validate_population() {
        for n in [0, 1, 3, 21] {
            let config = SgaConfig::default().with_population_size(n);
            assert_eq!(
                config.validate(),
                Err(ConfigError::InvalidPopulationSize(n))
            );
        }
        assert!(SgaConfig::default()
            .with_population_size(2)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_chromosome_length() {
        for bits in [0, 1, 33, 130] {
            let config = SgaConfig::default().with_chromosome_length(bits);
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::InvalidChromosomeLength { length, .. }) if length == bits
                ),
                "length {bits} should be rejected"
            );
        }
        assert!(SgaConfig::default()
            .with_chromosome_length(2)
            .validate()
            .is_ok());
        assert!(SgaConfig::default()
            .with_chromosome_length(128)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_probabilities_not_clamped() {
        let config = SgaConfig::default().with_mutation_rate(1.5);
        assert_eq!(config.mutation_rate, 1.5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ProbabilityOutOfRange {
                name: "mutation_rate",
                ..
            })
        ));

        let config = SgaConfig::default().with_mutation_rate(f64::NAN);
        assert!(config.validate().is_err());

        let config = SgaConfig::default().with_alternate_crossover(-0.1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ProbabilityOutOfRange {
                name: "alternate_crossover.probability",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_probability_edges() {
        assert!(SgaConfig::default()
            .with_mutation_rate(0.0)
            .validate()
            .is_ok());
        assert!(SgaConfig::default()
            .with_mutation_rate(1.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_disabled_alternate_probability_still_checked() {
        let mut config = SgaConfig::default();
        config.alternate_crossover.probability = 2.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = SgaConfig::default().with_max_generations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroGenerations));
    }

    #[test]
    fn test_validate_zero_report_interval() {
        let config = SgaConfig::default().with_report_interval(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroReportInterval));
    }

    #[test]
    fn test_validate_range() {
        assert!(SgaConfig::default()
            .with_range(1.0, 1.0)
            .validate()
            .is_err());
        assert!(SgaConfig::default()
            .with_range(2.0, 1.0)
            .validate()
            .is_err());
        assert!(SgaConfig::default()
            .with_range(f64::NEG_INFINITY, 1.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let err = SgaConfig::default()
            .with_population_size(7)
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "population_size must be even and at least 2, got 7"
        );
        let err = SgaConfig::default()
            .with_mutation_rate(2.0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().starts_with("mutation_rate"));
    }
}
