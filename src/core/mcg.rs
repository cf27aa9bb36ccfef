//! Multiplicative congruential generator.
//!
//! `r[0] = seed`, `r[i] = (a · r[i-1]) mod m`.  The product is formed in
//! 128 bits and reduced with Euclidean remainder, so every generated term
//! lies in `[0, m)` for any `i64` multiplier or seed.
//!
//! Not cryptographically secure.

use std::ops::Deref;

use tracing::debug;

use crate::core::{config::GeneratorConfig, error::SampleError};

/// Endless stream of the terms *after* the seed.
#[derive(Debug, Clone)]
pub struct Mcg {
    modulus: i64,
    multiplier: i64,
    state: i64,
}

impl Mcg {
    #[must_use]
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            modulus: config.modulus(),
            multiplier: config.multiplier(),
            state: config.seed(),
        }
    }

    /// Advance one step and return the new term.
    #[inline]
    pub fn next_term(&mut self) -> i64 {
        let product = i128::from(self.multiplier) * i128::from(self.state);
        let reduced = product.rem_euclid(i128::from(self.modulus));
        // reduced < modulus <= i64::MAX
        self.state = i64::try_from(reduced).unwrap_or_default();
        self.state
    }
}

impl Iterator for Mcg {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        Some(self.next_term())
    }
}

/// Seed-inclusive raw output of one generator run.
///
/// Immutable, so a single sequence may be shared read-only by any number of
/// transforms (see [`crate::core::distribution`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSequence {
    modulus: i64,
    values: Vec<i64>,
}

impl RawSequence {
    pub(crate) fn from_parts(modulus: i64, values: Vec<i64>) -> Self {
        Self { modulus, values }
    }

    #[inline]
    #[must_use]
    pub const fn modulus(&self) -> i64 {
        self.modulus
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<i64> {
        self.values
    }
}

impl Deref for RawSequence {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        &self.values
    }
}

/// Run the recurrence `num_samples` times from `seed`.
///
/// The result has `num_samples + 1` elements; element 0 is the seed exactly
/// as supplied.
pub fn generate(
    modulus: i64,
    multiplier: i64,
    seed: i64,
    num_samples: i64,
) -> Result<RawSequence, SampleError> {
    let config = GeneratorConfig::new(modulus, multiplier, seed)?;
    generate_with(&config, num_samples)
}

/// Terms reserved up front; longer sequences grow as they are generated.
const RESERVE_LIMIT: usize = 1 << 20;

/// Initial capacity for a sequence of `count` steps plus the seed.
#[inline]
fn reserve_hint(count: usize) -> usize {
    count.min(RESERVE_LIMIT) + 1
}

/// [`generate`] for an already validated configuration.
pub fn generate_with(
    config: &GeneratorConfig,
    num_samples: i64,
) -> Result<RawSequence, SampleError> {
    let count =
        usize::try_from(num_samples).map_err(|_| SampleError::InvalidSampleCount(num_samples))?;

    let mut values = Vec::with_capacity(reserve_hint(count));
    values.push(config.seed());
    values.extend(Mcg::new(config).take(count));

    debug!(
        modulus = config.modulus(),
        multiplier = config.multiplier(),
        seed = config.seed(),
        len = values.len(),
        "generated raw sequence"
    );
    Ok(RawSequence::from_parts(config.modulus(), values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn huge_counts_reserve_a_bounded_prefix() {
        assert_eq!(reserve_hint(5), 6);
        assert_eq!(reserve_hint(usize::MAX), RESERVE_LIMIT + 1);
        let max = usize::try_from(i64::MAX).unwrap();
        // must not overflow `Vec::with_capacity`
        let v: Vec<i64> = Vec::with_capacity(reserve_hint(max));
        assert!(v.capacity() > RESERVE_LIMIT);
    }

    #[test]
    fn example_sequence() {
        let raw = generate(151, 7, 1, 5).unwrap();
        assert_eq!(raw.as_slice(), &[1, 7, 49, 41, 136, 46]);
        assert_eq!(raw.modulus(), 151);
    }

    #[test]
    fn zero_samples_yields_only_the_seed() {
        let raw = generate(151, 7, 99, 0).unwrap();
        assert_eq!(raw.into_vec(), vec![99]);
    }

    #[test]
    fn invalid_modulus() {
        assert_eq!(generate(1, 7, 1, 5), Err(SampleError::InvalidModulus(1)));
        assert_eq!(generate(0, 7, 1, 5), Err(SampleError::InvalidModulus(0)));
        assert_eq!(generate(-151, 7, 1, 5), Err(SampleError::InvalidModulus(-151)));
    }

    #[test]
    fn negative_sample_count() {
        assert_eq!(
            generate(151, 7, 1, -1),
            Err(SampleError::InvalidSampleCount(-1))
        );
    }

    #[test]
    fn modulus_is_checked_before_sample_count() {
        assert_eq!(generate(1, 7, 1, -1), Err(SampleError::InvalidModulus(1)));
    }

    #[test]
    fn negative_operands_reduce_into_range() {
        // (-3 * 5) mod 7 = 6, then (-3 * 6) mod 7 = 3
        let raw = generate(7, -3, 5, 2).unwrap();
        assert_eq!(raw.as_slice(), &[5, 6, 3]);

        let raw = generate(7, 3, -5, 1).unwrap();
        assert_eq!(raw.as_slice(), &[-5, 6]);
    }

    #[test]
    fn wide_products_do_not_overflow() {
        let m = i64::MAX; // 2^63 - 1
        let raw = generate(m, i64::MAX - 1, i64::MAX - 2, 3).unwrap();
        assert!(raw[1..].iter().all(|&r| (0..m).contains(&r)));
        // (m-1)(m-2) ≡ (-1)(-2) = 2 (mod m)
        assert_eq!(raw[1], 2);
    }

    #[test]
    fn composite_modulus_is_accepted() {
        // period collapses once the state hits zero
        let raw = generate(8, 2, 1, 5).unwrap();
        assert_eq!(raw.as_slice(), &[1, 2, 4, 0, 0, 0]);
    }

    #[test]
    fn iterator_continues_the_sequence() {
        let cfg = GeneratorConfig::default();
        let mut mcg = Mcg::new(&cfg);
        let first: Vec<i64> = mcg.by_ref().take(3).collect();
        assert_eq!(first, vec![7, 49, 41]);
        assert_eq!(mcg.next(), Some(136));
    }

    #[test]
    fn full_period_for_primitive_root() {
        // 7 is a primitive root mod 151 (period 150)
        let raw = generate(151, 7, 1, 150).unwrap();
        assert_eq!(raw[150], 1);
        assert!(raw[1..150].iter().all(|&r| r != 1));
    }
}
