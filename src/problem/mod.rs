//! Problem definition: genotype encoding, phenotype mapping and objective.
//!
//! The evolutionary engine in [`crate::sga`] only sees these three
//! capabilities:
//!
//! - [`BinaryCodec`]: bit string → two unsigned integer genes
//! - [`RangeMapper`]: integer gene → real coordinate ([`LinearRange`])
//! - [`Objective`]: `(x, y)` → fitness ([`SinBowl`], or any closure)
//!
//! plus the [`Mode`] that decides whether lower or higher fitness wins.

mod codec;
mod objective;
mod range;

pub use codec::{BinaryCodec, Chromosome, MAX_CHROMOSOME_LENGTH};
pub use objective::{Mode, Objective, SinBowl};
pub use range::{map_to_range, LinearRange, RangeMapper};
