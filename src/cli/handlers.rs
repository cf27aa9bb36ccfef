use std::{
    fmt::Display,
    io::{self, Write},
    time::Instant,
};

use tracing::{debug, info};

use crate::{
    core::{
        config::{GeneratorConfig, PlotConfig},
        constants::DEFAULT_WEIGHTS,
        distribution::BoundaryPolicy,
        error::GraphError,
        sampler::{Sampler, SeedPolicy},
        weights::parse_weights,
    },
    render::{Renderer, SampleValue, bin, plot},
};

use super::parse::{
    CategoricalArgs, ContinuousArgs, DemoArgs, DiscreteArgs, GeneratorArgs, OutputArgs,
};

/// Bin count of the continuous histogram.
const CONTINUOUS_BINS: usize = 150;

fn sampler(g: &GeneratorArgs, out: &OutputArgs) -> Result<Sampler, GraphError> {
    let cfg = GeneratorConfig::builder()
        .modulus(g.modulus)
        .multiplier(g.multiplier)
        .seed(g.seed)
        .build()?;
    let policy = if out.seed_exclusive {
        SeedPolicy::Exclusive
    } else {
        SeedPolicy::Inclusive
    };
    Ok(Sampler::new(cfg).seed_policy(policy))
}

fn print_values<W: Write, T: Display>(out: &mut W, values: &[T]) -> Result<(), GraphError> {
    for v in values {
        writeln!(out, "{v}")?;
    }
    out.flush()?;
    Ok(())
}

/// Output destination and frame style of one command.
pub struct Sink<'a, W> {
    pub out: &'a mut W,
    pub renderer: Renderer,
}

impl<W: Write> Sink<'_, W> {
    fn emit<T: SampleValue + Display>(
        &mut self,
        values: &[T],
        opts: &OutputArgs,
        default_title: String,
        default_bins: usize,
    ) -> Result<(), GraphError> {
        if opts.plot {
            let title = opts.title.clone().unwrap_or(default_title);
            let bins = opts.bins.unwrap_or(default_bins);
            plot(self.out, values, &title, bins, &self.renderer)
        } else {
            print_values(self.out, values)
        }
    }
}

pub fn raw<W: Write>(g: &GeneratorArgs, out: &mut W) -> Result<(), GraphError> {
    let cfg = GeneratorConfig::new(g.modulus, g.multiplier, g.seed)?;
    let seq = Sampler::new(cfg).raw(g.num_samples)?;
    print_values(out, seq.as_slice())
}

pub fn continuous<W: Write>(
    a: &ContinuousArgs,
    sink: &mut Sink<'_, W>,
) -> Result<(), GraphError> {
    let values =
        sampler(&a.generator, &a.output)?.uniform_continuous(a.c, a.generator.num_samples)?;
    let title = format!("Uniform Continuous Samples Between 0 and {}", a.c);
    sink.emit(&values, &a.output, title, CONTINUOUS_BINS)
}

pub fn discrete<W: Write>(
    a: &DiscreteArgs,
    sink: &mut Sink<'_, W>,
) -> Result<(), GraphError> {
    let values =
        sampler(&a.generator, &a.output)?.uniform_discrete(a.c, a.generator.num_samples)?;
    let title = format!("Uniform Discrete Samples Between 0 and {}", a.c - 1);
    let bins = usize::try_from(a.c).unwrap_or(1);
    sink.emit(&values, &a.output, title, bins)
}

pub fn categorical<W: Write>(
    a: &CategoricalArgs,
    sink: &mut Sink<'_, W>,
) -> Result<(), GraphError> {
    let weights = parse_weights(&a.weights)?;
    let policy = if a.clamp_final_boundary {
        BoundaryPolicy::ClampFinal
    } else {
        BoundaryPolicy::Legacy
    };
    debug!(?weights, ?policy, "categorical weights");
    let values = sampler(&a.generator, &a.output)?
        .boundary_policy(policy)
        .arbitrary_discrete(&weights, a.generator.num_samples)?;
    sink.emit(
        &values,
        &a.output,
        "Arbitrary Discrete Samples".to_owned(),
        weights.len(),
    )
}

/// The three example histograms, one after another.
pub fn demo<W: Write>(a: &DemoArgs, out: &mut W) -> Result<(), GraphError> {
    let n = a.num_samples;
    let cfg = GeneratorConfig::default();
    let sampler = Sampler::new(cfg);

    let t0 = Instant::now();
    let discrete = sampler.uniform_discrete(6, n)?;
    let continuous = sampler.uniform_continuous(2.0, n)?;
    let categorical = sampler.arbitrary_discrete(&DEFAULT_WEIGHTS, n)?;
    info!(
        elapsed_us = t0.elapsed().as_micros(),
        samples = n,
        "demo sampling complete"
    );

    if a.summary {
        for (name, counts) in [
            ("discrete", summary(&discrete, 6)?),
            ("continuous", summary(&continuous, CONTINUOUS_BINS)?),
            ("categorical", summary(&categorical, DEFAULT_WEIGHTS.len())?),
        ] {
            writeln!(out, "{name}: {counts:?}")?;
        }
        out.flush()?;
        return Ok(());
    }

    let renderer = Renderer::plain();
    plot(
        out,
        &discrete,
        &format!("{n} Uniform Discrete Samples Between 0 and 5"),
        6,
        &renderer,
    )?;
    plot(
        out,
        &continuous,
        &format!("{n} Uniform Continuous Samples Between 0 and 2"),
        CONTINUOUS_BINS,
        &renderer,
    )?;
    plot(
        out,
        &categorical,
        &format!("{n} Arbitrary Discrete Samples"),
        DEFAULT_WEIGHTS.len(),
        &renderer,
    )
}

fn summary<T: SampleValue>(values: &[T], bins: usize) -> Result<Vec<usize>, GraphError> {
    let cfg = PlotConfig::builder(0, 0).bins(bins).build()?;
    Ok(bin(values, &cfg).counts)
}

/// Print handy invocations for new users.
pub fn examples<W: Write>(out: &mut W) -> io::Result<()> {
    let exe = "mcg-sampler";
    writeln!(
        out,
        "
Example invocations
-------------------
• Raw sequence        : {exe} raw -n 5
• Dice rolls          : {exe} discrete -c 6 -n 20
• Continuous, plotted : {exe} continuous -c 2 -n 10000 --plot
• Categorical         : {exe} categorical --weights 0.1,0.3,0.2,0.4 -n 1000 --plot
• Exactly n samples   : {exe} discrete -c 6 -n 5 --seed-exclusive
• No dropped values   : {exe} categorical --weights 0.1,0.1,0.1,0.1,0.1,0.1,0.1,0.1,0.1,0.1 --clamp-final-boundary
• Custom generator    : {exe} raw --modulus 2147483647 --multiplier 16807 --seed 42 -n 5
• All three histograms: {exe} demo
• Debug logging       : {exe} -v categorical --weights 0.5,0.5 -n 3
"
    )
}
