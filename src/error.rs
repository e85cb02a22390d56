//! Configuration errors.
//!
//! The evolutionary loop itself cannot fail; the only reportable
//! conditions are invalid run parameters, rejected before any run starts.

/// A violated run-parameter rule.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be even and at least 2, got {0}")]
    InvalidPopulationSize(usize),
    #[error("chromosome_length must be even and within 2..={max}, got {length}")]
    InvalidChromosomeLength { length: usize, max: usize },
    #[error("{name} must be a probability in [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
    #[error("max_generations must be at least 1")]
    ZeroGenerations,
    #[error("report_interval must be at least 1")]
    ZeroReportInterval,
    #[error("range bounds must be finite with lo < hi, got [{lo}, {hi}]")]
    InvalidRange { lo: f64, hi: f64 },
}
