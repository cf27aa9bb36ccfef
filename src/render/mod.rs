//! Optional histogram display for sample sets.  Nothing in `core` depends on
//! this module.

pub mod binner;
pub mod braille;
pub mod frame;

pub use binner::{Histogram, SampleValue, bin};
pub use braille::{BraillePlot, encode_rows, preprocess_to_braille};
pub use frame::Renderer;

use std::io::Write;

use crate::core::{
    bounds::{graph_dims, terminal_geometry},
    config::PlotConfig,
    error::GraphError,
};

/// Histogram of `samples` sized to the current terminal, written to `out`.
pub fn plot<W: Write, T: SampleValue>(
    out: &mut W,
    samples: &[T],
    title: &str,
    bins: usize,
    renderer: &Renderer,
) -> Result<(), GraphError> {
    if samples.is_empty() {
        return Err(GraphError::EmptyData);
    }

    // bin first: the y label width depends on the peak count
    let binning = PlotConfig::builder(0, 0).bins(bins).build()?;
    let hist = bin(samples, &binning);
    let label_width = hist.peak().to_string().len();
    let (x_chars, y_chars) = graph_dims(terminal_geometry(), label_width);

    let cfg = PlotConfig::builder(x_chars, y_chars)
        .title(title)
        .subtitle(format!("{} samples, {bins} bins", samples.len()))
        .bins(bins)
        .build()?;
    renderer.render(out, &cfg, &hist)
}
