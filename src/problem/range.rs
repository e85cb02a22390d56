//! Gene-to-real mapping.

use super::codec::max_unsigned;

/// Maps a decoded integer gene to a real coordinate.
pub trait RangeMapper: Send + Sync {
    /// Maps `raw`, an unsigned value of `bits` bits, to a real value.
    fn map(&self, raw: u64, bits: u32) -> f64;
}

/// Linear map from `[0, 2^bits - 1]` onto `[lo, hi]`.
///
/// `0` maps exactly to `lo` and `2^bits - 1` exactly to `hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRange {
    pub lo: f64,
    pub hi: f64,
}

impl LinearRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Interval width, `hi - lo`.
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }
}

impl Default for LinearRange {
    fn default() -> Self {
        Self::new(-13.0, 17.0)
    }
}

impl RangeMapper for LinearRange {
    fn map(&self, raw: u64, bits: u32) -> f64 {
        map_to_range(raw, bits, self.lo, self.hi)
    }
}

/// `lo + raw / (2^bits - 1) * (hi - lo)`, with the endpoints exact.
///
/// # Panics
/// Panics if `bits == 0`.
pub fn map_to_range(raw: u64, bits: u32, lo: f64, hi: f64) -> f64 {
    assert!(bits >= 1, "gene must have at least one bit");
    let max = max_unsigned(bits);
    if raw >= max {
        return hi;
    }
    lo + (raw as f64 / max as f64) * (hi - lo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_interval() {
        let r = LinearRange::default();
        assert_eq!(r.lo, -13.0);
        assert_eq!(r.hi, 17.0);
        assert!((r.width() - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_endpoints_sixteen_bits() {
        let r = LinearRange::default();
        assert_eq!(r.map(0, 16), -13.0);
        assert_eq!(r.map(65_535, 16), 17.0);
    }

    #[test]
    fn test_interior_points() {
        let r = LinearRange::new(0.0, 7.0);
        assert!((r.map(3, 3) - 3.0).abs() < 1e-12);
        // 2 of 3 steps across [-1, 1]
        assert!((LinearRange::new(-1.0, 1.0).map(2, 2) - (1.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_single_bit_gene() {
        let r = LinearRange::default();
        assert_eq!(r.map(0, 1), -13.0);
        assert_eq!(r.map(1, 1), 17.0);
    }

    #[test]
    fn test_sixty_four_bit_gene() {
        let r = LinearRange::new(-1.0, 1.0);
        assert_eq!(r.map(0, 64), -1.0);
        assert_eq!(r.map(u64::MAX, 64), 1.0);
    }

    #[test]
    #[should_panic(expected = "gene must have at least one bit")]
    fn test_zero_bits_panics() {
        map_to_range(0, 0, 0.0, 1.0);
    }

    proptest! {
        #[test]
        fn prop_boundaries_exact(bits in 1u32..=64, lo in -1e6f64..1e6, width in 1e-3f64..1e6) {
            let hi = lo + width;
            let r = LinearRange::new(lo, hi);
            prop_assert_eq!(r.map(0, bits), lo);
            prop_assert_eq!(r.map(max_unsigned(bits), bits), hi);
        }

        #[test]
        fn prop_monotone_and_bounded(a in 0u64..65_536, b in 0u64..65_536) {
            let r = LinearRange::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let (vlo, vhi) = (r.map(lo, 16), r.map(hi, 16));
            prop_assert!(vlo <= vhi);
            prop_assert!(vlo >= r.lo && vhi <= r.hi);
        }
    }
}
