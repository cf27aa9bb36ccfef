use clap::{Args, Parser, Subcommand};

use crate::core::constants::{DEFAULT_MODULUS, DEFAULT_MULTIPLIER, DEFAULT_SEED};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "mcg-sampler",
    version,
    about = "Deterministic MCG sampling with braille histograms (not cryptographically secure)"
)]
pub struct Cli {
    /// Debug-level logging on stderr (`RUST_LOG` takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the raw generator sequence (seed first)
    Raw(GeneratorArgs),
    /// Uniform continuous samples in [0, c)
    Continuous(ContinuousArgs),
    /// Uniform discrete samples in [0, c)
    Discrete(DiscreteArgs),
    /// Categorical samples from a probability vector
    Categorical(CategoricalArgs),
    /// Histograms of all three distributions with the example parameters
    Demo(DemoArgs),
    /// Print example invocations
    Examples,
}

/// Generator parameters shared by every sampling subcommand.
#[derive(Args, Debug, Clone)]
pub struct GeneratorArgs {
    /// Modulus (≥ 2, ideally prime)
    #[arg(long, default_value_t = DEFAULT_MODULUS, allow_negative_numbers = true)]
    pub modulus: i64,
    /// Multiplier
    #[arg(long, default_value_t = DEFAULT_MULTIPLIER, allow_negative_numbers = true)]
    pub multiplier: i64,
    /// Seed; emitted as the first raw value
    #[arg(long, default_value_t = DEFAULT_SEED, allow_negative_numbers = true)]
    pub seed: i64,
    /// Number of recurrence steps
    #[arg(short = 'n', long = "samples", default_value_t = 10, allow_negative_numbers = true)]
    pub num_samples: i64,
}

/// Output options shared by the sampler subcommands.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Drop the seed-derived first value (yields exactly `n` samples)
    #[arg(long)]
    pub seed_exclusive: bool,
    /// Draw a histogram instead of printing the values
    #[arg(long)]
    pub plot: bool,
    /// Histogram bin count (defaults per distribution)
    #[arg(long)]
    pub bins: Option<usize>,
    /// Histogram title
    #[arg(short, long)]
    pub title: Option<String>,
}

/// `mcg-sampler continuous …`
#[derive(Args, Debug)]
pub struct ContinuousArgs {
    /// Upper bound c
    #[arg(short, default_value_t = 1.0, allow_negative_numbers = true)]
    pub c: f64,
    #[command(flatten)]
    pub generator: GeneratorArgs,
    #[command(flatten)]
    pub output: OutputArgs,
}

/// `mcg-sampler discrete …`
#[derive(Args, Debug)]
pub struct DiscreteArgs {
    /// Range size c
    #[arg(short, default_value_t = 6, allow_negative_numbers = true)]
    pub c: i64,
    #[command(flatten)]
    pub generator: GeneratorArgs,
    #[command(flatten)]
    pub output: OutputArgs,
}

/// `mcg-sampler categorical …`
#[derive(Args, Debug)]
pub struct CategoricalArgs {
    /// Comma-separated probability vector
    #[arg(short, long, default_value = "0.1,0.3,0.2,0.4", allow_hyphen_values = true)]
    pub weights: String,
    /// Force the last cumulative boundary to 1.0 so no value is dropped
    #[arg(long)]
    pub clamp_final_boundary: bool,
    #[command(flatten)]
    pub generator: GeneratorArgs,
    #[command(flatten)]
    pub output: OutputArgs,
}

/// `mcg-sampler demo …`
#[derive(Args, Debug)]
pub struct DemoArgs {
    #[arg(short = 'n', long = "samples", default_value_t = 10_000)]
    pub num_samples: i64,
    /// Print only the bin counts instead of drawing
    #[arg(long)]
    pub summary: bool,
}
