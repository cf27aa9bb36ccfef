//! Aggregates the generator, the samplers and their supporting types.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod distribution;
pub mod error;
pub mod mcg;
pub mod sampler;
pub mod weights;

// re-export frequently-used items for convenience
pub use config::{GeneratorConfig, GeneratorConfigBuilder, PlotConfig, PlotConfigBuilder};
pub use constants::{
    DEFAULT_MODULUS, DEFAULT_MULTIPLIER, DEFAULT_SEED, DEFAULT_WEIGHTS, MIN_GRAPH_HEIGHT,
    MIN_GRAPH_WIDTH,
};
pub use distribution::{BoundaryPolicy, Categorical};
pub use error::{ConfigError, GraphError, RangeBound, SampleError};
pub use mcg::{Mcg, RawSequence, generate, generate_with};
pub use sampler::{
    SampleSet, Sampler, SeedPolicy, arbitrary_discrete, uniform_continuous, uniform_discrete,
};
pub use weights::{WeightParseError, parse_weights};
