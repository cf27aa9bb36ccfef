//! Public-facing crate root – re-exports + one-shot helper.
//!
//! Deterministic sampling from a multiplicative congruential generator:
//!
//! ```
//! use mcg_sampler::{GeneratorConfig, generate, uniform_discrete};
//!
//! let raw = generate(151, 7, 1, 5).unwrap();
//! assert_eq!(raw.as_slice(), &[1, 7, 49, 41, 136, 46]);
//!
//! let dice = uniform_discrete(6, 5, &GeneratorConfig::default()).unwrap();
//! assert_eq!(dice, vec![1, 1, 1, 5, 4, 4]);
//! ```
//!
//! The generator is **not** cryptographically secure.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    config::{GeneratorConfig, GeneratorConfigBuilder, PlotConfig, PlotConfigBuilder},
    constants::{DEFAULT_MODULUS, DEFAULT_MULTIPLIER, DEFAULT_SEED, DEFAULT_WEIGHTS},
    distribution::{BoundaryPolicy, Categorical},
    error::{ConfigError, GraphError, RangeBound, SampleError},
    mcg::{Mcg, RawSequence, generate, generate_with},
    sampler::{
        SampleSet, Sampler, SeedPolicy, arbitrary_discrete, uniform_continuous, uniform_discrete,
    },
    weights::{WeightParseError, parse_weights},
};

pub use render::{Histogram, Renderer, SampleValue, bin};

use std::io::{self, IsTerminal};

/// Convenience function: histogram of `samples` sized to the current
/// terminal, written to stdout.
pub fn plot_histogram<T: SampleValue>(
    samples: &[T],
    title: &str,
    bins: usize,
) -> Result<(), GraphError> {
    let stdout = io::stdout();
    let renderer = Renderer::for_output(stdout.is_terminal());
    render::plot(&mut stdout.lock(), samples, title, bins, &renderer)
}
