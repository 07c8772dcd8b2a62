//! Just-tempered tuning: exact rational multiples of a base frequency

use std::collections::BTreeSet;

use num::rational::Ratio;

/// Exact frequency ratio, kept in lowest terms
pub type FreqRatio = Ratio<u64>;

/// Frequency at `ratio` times `base`
///
/// The ratio stays exact until this final multiplication.
///
/// ```
/// use semitone::scales::{frequency_from_fraction_of_primary, FreqRatio};
/// let fifth = frequency_from_fraction_of_primary(200.0, FreqRatio::new(3, 2));
/// assert_eq!(fifth, 300.0);
/// ```
pub fn frequency_from_fraction_of_primary(base: f64, ratio: FreqRatio) -> f64 {
    base * *ratio.numer() as f64 / *ratio.denom() as f64
}

/// Harmonic multiples 1, 2, ..., `max_multiplier`
pub fn harmonic_ratios(max_multiplier: u32) -> Vec<FreqRatio> {
    (1..=max_multiplier as u64).map(FreqRatio::from_integer).collect()
}

/// Fold harmonic `n` into the octave [1, 2) by repeated halving
pub fn reduced_ratio(n: u64) -> FreqRatio {
    let two = FreqRatio::from_integer(2);
    let mut ratio = FreqRatio::from_integer(n);
    while ratio >= two {
        ratio /= two;
    }
    ratio
}

/// Distinct octave-reduced harmonics 1..=`max_multiplier`, ascending
///
/// Harmonics 2, 4, 8, ... all reduce to 1/1, 3 and 6 both reduce to 3/2,
/// and so on; each ratio appears once.
pub fn unique_reduced_ratios(max_multiplier: u32) -> Vec<FreqRatio> {
    (1..=max_multiplier as u64)
        .map(reduced_ratio)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_ratio() {
        assert_eq!(reduced_ratio(1), FreqRatio::from_integer(1));
        assert_eq!(reduced_ratio(2), FreqRatio::from_integer(1));
        assert_eq!(reduced_ratio(8), FreqRatio::from_integer(1));
        assert_eq!(reduced_ratio(3), FreqRatio::new(3, 2));
        assert_eq!(reduced_ratio(6), FreqRatio::new(3, 2));
        assert_eq!(reduced_ratio(5), FreqRatio::new(5, 4));
        assert_eq!(reduced_ratio(7), FreqRatio::new(7, 4));
        assert_eq!(reduced_ratio(9), FreqRatio::new(9, 8));
        assert_eq!(reduced_ratio(11), FreqRatio::new(11, 8));
    }

    #[test]
    fn test_unique_reduced_ratios() {
        let ratios = unique_reduced_ratios(12);
        let expected = vec![
            FreqRatio::new(1, 1),
            FreqRatio::new(9, 8),
            FreqRatio::new(5, 4),
            FreqRatio::new(11, 8),
            FreqRatio::new(3, 2),
            FreqRatio::new(7, 4),
        ];
        assert_eq!(ratios, expected);
    }

    #[test]
    fn test_harmonic_ratios() {
        let ratios = harmonic_ratios(4);
        assert_eq!(ratios.len(), 4);
        assert_eq!(ratios[3], FreqRatio::from_integer(4));
        assert!(harmonic_ratios(0).is_empty());
    }

    #[test]
    fn test_frequency_from_fraction() {
        let base = 261.6255653005986;
        let third = frequency_from_fraction_of_primary(base, FreqRatio::new(5, 4));
        assert!((third - base * 1.25).abs() < 1e-12);
        assert_eq!(frequency_from_fraction_of_primary(base, FreqRatio::from_integer(1)), base);
    }
}
