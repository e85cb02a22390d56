//! Simple Genetic Algorithm over binary-encoded two-variable functions.
//!
//! Candidate solutions are fixed-length bit strings. Each half decodes to
//! an unsigned integer gene, each gene maps linearly onto a real interval,
//! and an objective over the resulting `(x, y)` point gives the fitness.
//!
//! - [`problem`]: Codec, range mapping, objective functions, optimization mode
//! - [`sga`]: Population, tournament selection, crossover, mutation,
//!   elitism, and the generational controller
//! - [`report`]: Observational snapshots for logging or console output
//! - [`random`]: The random-source capability shared by all operators
//!
//! # Example
//!
//! ```
//! use u_sga::problem::SinBowl;
//! use u_sga::report::NullReporter;
//! use u_sga::sga::{SgaConfig, SgaRunner};
//!
//! let config = SgaConfig::default().with_seed(42);
//! let result = SgaRunner::run_with_reporter(SinBowl, &config, &mut NullReporter).unwrap();
//! let (x, y) = result.best.point();
//! assert!((-13.0..=17.0).contains(&x) && (-13.0..=17.0).contains(&y));
//! ```

pub mod error;
pub mod problem;
pub mod random;
pub mod report;
pub mod sga;

pub use error::ConfigError;
