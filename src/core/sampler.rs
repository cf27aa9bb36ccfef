//! Distribution samplers driven by the generator.
//!
//! The free functions reproduce the seed-inclusive, drop-on-overflow
//! behaviour exactly.  [`Sampler`] carries a configuration plus the opt-in
//! corrections ([`SeedPolicy::Exclusive`], [`BoundaryPolicy::ClampFinal`]).

use tracing::debug;

use crate::core::{
    config::GeneratorConfig,
    distribution::{BoundaryPolicy, Categorical},
    error::SampleError,
    mcg::{RawSequence, generate_with},
};

/// Ordered sampler output.
pub type SampleSet<T> = Vec<T>;

/// Whether the seed-derived first value is part of the output.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SeedPolicy {
    /// `n` requested samples produce `n + 1` values.
    #[default]
    Inclusive,
    /// The seed-derived value is skipped; `n` requested samples produce `n`.
    Exclusive,
}

/// `(x / modulus) · c` over a seed-inclusive run of `num_samples`.
pub fn uniform_continuous(
    c: f64,
    num_samples: i64,
    config: &GeneratorConfig,
) -> Result<SampleSet<f64>, SampleError> {
    Sampler::new(*config).uniform_continuous(c, num_samples)
}

/// `x mod c` over a seed-inclusive run of `num_samples`.
pub fn uniform_discrete(
    c: i64,
    num_samples: i64,
    config: &GeneratorConfig,
) -> Result<SampleSet<i64>, SampleError> {
    Sampler::new(*config).uniform_discrete(c, num_samples)
}

/// Category indices over a seed-inclusive run of `num_samples`.
///
/// Values above the last cumulative boundary are dropped, so the result can
/// hold fewer than `num_samples + 1` entries.
pub fn arbitrary_discrete(
    weights: &[f64],
    num_samples: i64,
    config: &GeneratorConfig,
) -> Result<SampleSet<usize>, SampleError> {
    Sampler::new(*config).arbitrary_discrete(weights, num_samples)
}

/// Configured sampler.  Cheap to copy; holds no generator state between
/// calls, so every call replays the sequence from the seed.
#[derive(Clone, Copy, Debug)]
pub struct Sampler {
    config: GeneratorConfig,
    seed_policy: SeedPolicy,
    boundary_policy: BoundaryPolicy,
}

impl Sampler {
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            seed_policy: SeedPolicy::default(),
            boundary_policy: BoundaryPolicy::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn seed_policy(mut self, p: SeedPolicy) -> Self {
        self.seed_policy = p;
        self
    }
    #[inline]
    #[must_use]
    pub fn boundary_policy(mut self, p: BoundaryPolicy) -> Self {
        self.boundary_policy = p;
        self
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The seed-inclusive raw sequence; the seed policy does not apply here.
    pub fn raw(&self, num_samples: i64) -> Result<RawSequence, SampleError> {
        generate_with(&self.config, num_samples)
    }

    pub fn uniform_continuous(
        &self,
        c: f64,
        num_samples: i64,
    ) -> Result<SampleSet<f64>, SampleError> {
        let raw = self.raw(num_samples)?;
        let out = raw.uniform_continuous(c)?;
        debug!(c, len = out.len(), "uniform continuous samples");
        Ok(self.apply_seed_policy(out))
    }

    pub fn uniform_discrete(
        &self,
        c: i64,
        num_samples: i64,
    ) -> Result<SampleSet<i64>, SampleError> {
        let raw = self.raw(num_samples)?;
        let out = raw.uniform_discrete(c)?;
        debug!(c, len = out.len(), "uniform discrete samples");
        Ok(self.apply_seed_policy(out))
    }

    pub fn arbitrary_discrete(
        &self,
        weights: &[f64],
        num_samples: i64,
    ) -> Result<SampleSet<usize>, SampleError> {
        // validate the weights before running the generator
        let dist = Categorical::new(weights, self.boundary_policy)?;
        let mut raw = self.raw(num_samples)?.into_vec();
        if self.seed_policy == SeedPolicy::Exclusive {
            raw.remove(0);
        }
        let raw = RawSequence::from_parts(self.config.modulus(), raw);
        Ok(raw.categorical(&dist))
    }

    fn apply_seed_policy<T>(&self, mut out: SampleSet<T>) -> SampleSet<T> {
        if self.seed_policy == SeedPolicy::Exclusive && !out.is_empty() {
            out.remove(0);
        }
        out
    }
}
