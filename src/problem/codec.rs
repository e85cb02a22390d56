//! Binary genotype encoding.
//!
//! A [`Chromosome`] is a fixed-length bit string. [`BinaryCodec`] splits it
//! into two equal halves and reads each half as an unsigned integer,
//! most-significant bit at the lower index:
//!
//! ```text
//! index:  0 ........ L/2-1 | L/2 ........ L-1
//!         gene X (MSB..LSB)| gene Y (MSB..LSB)
//! ```
//!
//! The last bit of the string is therefore the least-significant bit of
//! gene Y.

use std::fmt;

/// Largest supported chromosome length: each gene must fit in a `u64`.
pub const MAX_CHROMOSOME_LENGTH: usize = 128;

/// A fixed-length bit string.
///
/// Bits are stored as `bool`, so every position is exactly 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Wraps a bit vector.
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// All-zero chromosome of the given length.
    pub fn zeros(length: usize) -> Self {
        Self {
            bits: vec![false; length],
        }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the chromosome has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit slice view.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Mutable bit slice view. The length cannot change.
    pub fn bits_mut(&mut self) -> &mut [bool] {
        &mut self.bits
    }

    /// Bitwise complement.
    pub fn complement(&self) -> Self {
        Self {
            bits: self.bits.iter().map(|&b| !b).collect(),
        }
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(bits: Vec<bool>) -> Self {
        Self::new(bits)
    }
}

/// Renders as a `0`/`1` string, lowest index first.
impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Splits chromosomes of a fixed length into two integer genes.
///
/// # Examples
///
/// ```
/// use u_sga::problem::{BinaryCodec, Chromosome};
///
/// let codec = BinaryCodec::new(8);
/// let chromosome = Chromosome::new(vec![
///     false, false, true, true, // X = 0b0011
///     true, false, false, false, // Y = 0b1000
/// ]);
/// assert_eq!(codec.decode(&chromosome), (3, 8));
/// assert_eq!(codec.encode(3, 8), chromosome);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryCodec {
    length: usize,
}

impl BinaryCodec {
    /// Creates a codec for chromosomes of `length` bits.
    ///
    /// # Panics
    /// Panics if `length` is odd, zero, or above [`MAX_CHROMOSOME_LENGTH`].
    /// [`SgaConfig::validate`](crate::sga::SgaConfig::validate) rejects
    /// these lengths before an engine builds its codec.
    pub fn new(length: usize) -> Self {
        assert!(
            length >= 2 && length % 2 == 0 && length <= MAX_CHROMOSOME_LENGTH,
            "chromosome length must be even and within 2..={MAX_CHROMOSOME_LENGTH}, got {length}"
        );
        Self { length }
    }

    /// Chromosome length in bits.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Bits per gene (`length / 2`).
    pub fn gene_bits(&self) -> u32 {
        (self.length / 2) as u32
    }

    /// Largest decodable gene value, `2^(length/2) - 1`.
    pub fn max_gene(&self) -> u64 {
        max_unsigned(self.gene_bits())
    }

    /// Decodes `(gene_x, gene_y)`.
    ///
    /// # Panics
    /// Panics if the chromosome length differs from the codec's.
    pub fn decode(&self, chromosome: &Chromosome) -> (u64, u64) {
        assert_eq!(
            chromosome.len(),
            self.length,
            "chromosome length does not match codec"
        );
        let (x_bits, y_bits) = chromosome.bits().split_at(self.length / 2);
        (read_unsigned(x_bits), read_unsigned(y_bits))
    }

    /// Builds the chromosome that decodes to `(gene_x, gene_y)`.
    ///
    /// Values above [`max_gene`](Self::max_gene) are truncated to their
    /// low `gene_bits` bits.
    pub fn encode(&self, gene_x: u64, gene_y: u64) -> Chromosome {
        let half = self.length / 2;
        let mut bits = vec![false; self.length];
        write_unsigned(&mut bits[..half], gene_x);
        write_unsigned(&mut bits[half..], gene_y);
        Chromosome::new(bits)
    }
}

/// `2^bits - 1`, saturating at `u64::MAX`.
pub(crate) fn max_unsigned(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Reads bits MSB-first.
fn read_unsigned(bits: &[bool]) -> u64 {
    bits.iter().fold(0u64, |acc, &b| (acc << 1) | u64::from(b))
}

/// Writes `value` MSB-first into `bits`, dropping high bits that do not fit.
fn write_unsigned(bits: &mut [bool], value: u64) {
    let n = bits.len();
    for (i, bit) in bits.iter_mut().enumerate() {
        let shift = n - 1 - i;
        *bit = shift < 64 && (value >> shift) & 1 == 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn chrom(s: &str) -> Chromosome {
        Chromosome::new(s.chars().map(|c| c == '1').collect())
    }

    #[test]
    fn test_decode_msb_first_per_half() {
        let codec = BinaryCodec::new(8);
        assert_eq!(codec.decode(&chrom("00000000")), (0, 0));
        assert_eq!(codec.decode(&chrom("00010000")), (1, 0));
        assert_eq!(codec.decode(&chrom("00000001")), (0, 1));
        assert_eq!(codec.decode(&chrom("10000000")), (8, 0));
        assert_eq!(codec.decode(&chrom("00001000")), (0, 8));
        assert_eq!(codec.decode(&chrom("11111111")), (15, 15));
    }

    #[test]
    fn test_last_bit_is_lsb_of_gene_y() {
        let codec = BinaryCodec::new(32);
        let mut bits = vec![false; 32];
        bits[31] = true;
        assert_eq!(codec.decode(&Chromosome::new(bits.clone())), (0, 1));

        bits[31] = false;
        bits[16] = true;
        assert_eq!(codec.decode(&Chromosome::new(bits)), (0, 1 << 15));
    }

    #[test]
    fn test_degenerate_two_bit_codec() {
        let codec = BinaryCodec::new(2);
        assert_eq!(codec.gene_bits(), 1);
        assert_eq!(codec.max_gene(), 1);
        assert_eq!(codec.decode(&chrom("10")), (1, 0));
        assert_eq!(codec.decode(&chrom("01")), (0, 1));
    }

    #[test]
    fn test_max_gene() {
        assert_eq!(BinaryCodec::new(32).max_gene(), 65_535);
        assert_eq!(BinaryCodec::new(128).max_gene(), u64::MAX);
    }

    #[test]
    fn test_wide_genes_roundtrip() {
        let codec = BinaryCodec::new(128);
        let c = codec.encode(u64::MAX, 1 << 63);
        assert_eq!(codec.decode(&c), (u64::MAX, 1 << 63));
    }

    #[test]
    fn test_display() {
        assert_eq!(chrom("0110").to_string(), "0110");
    }

    #[test]
    fn test_complement() {
        assert_eq!(chrom("0110").complement(), chrom("1001"));
    }

    #[test]
    #[should_panic(expected = "chromosome length must be even")]
    fn test_odd_length_panics() {
        BinaryCodec::new(7);
    }

    #[test]
    #[should_panic(expected = "chromosome length does not match codec")]
    fn test_decode_wrong_length_panics() {
        BinaryCodec::new(4).decode(&chrom("01"));
    }

    proptest! {
        #[test]
        fn prop_gene_roundtrip(half in 1usize..=32, x in any::<u64>(), y in any::<u64>()) {
            let codec = BinaryCodec::new(half * 2);
            let x = x & codec.max_gene();
            let y = y & codec.max_gene();
            prop_assert_eq!(codec.decode(&codec.encode(x, y)), (x, y));
        }

        #[test]
        fn prop_decode_within_bounds(bits in proptest::collection::vec(any::<bool>(), 16)) {
            let codec = BinaryCodec::new(16);
            let (x, y) = codec.decode(&Chromosome::new(bits));
            prop_assert!(x <= codec.max_gene());
            prop_assert!(y <= codec.max_gene());
        }
    }
}
