//! Simple Genetic Algorithm (SGA).
//!
//! A generational GA over fixed-length bit strings, after Goldberg's SGA:
//! a fixed-size population is fully replaced each generation by offspring
//! of tournament-selected pairs, with the previous best restored into slot
//! 0 when the offspring all fall short.
//!
//! # Key Types
//!
//! - [`SgaConfig`]: Run parameters (population, chromosome length, rates, mode)
//! - [`Sga`]: The engine; exposes [`Sga::initialize`] and [`Sga::step`] for
//!   driving generations by hand over a [`RunState`]
//! - [`SgaRunner`]: One-call entry points
//! - [`SgaResult`]: Best-ever individual and fitness history
//!
//! # Submodules
//!
//! - [`selection`]: Tournament-of-three parent selection
//! - [`operators`]: One-point crossover, bitwise mutation, random chromosomes
//! - [`elitism`]: Slot-zero elitism
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod elitism;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::{AlternateCrossover, SgaConfig};
pub use runner::{RunState, Sga, SgaResult, SgaRunner};
pub use types::{Individual, Population};
