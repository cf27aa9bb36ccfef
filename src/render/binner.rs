//! Equal-width histogram binning.
//!
//! Bin `i` covers `[lo + i·w, lo + (i+1)·w)`; the last bin is closed so a
//! value equal to `hi` is counted.  Values outside `[lo, hi]` and non-finite
//! values are ignored.

use crate::core::{bounds::value_bounds, config::PlotConfig};

/// Counts per bin plus the value range they cover.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub counts: Vec<usize>,
    pub low: f64,
    pub high: f64,
}

impl Histogram {
    /// Largest bin count (0 for an all-empty histogram).
    #[inline]
    #[must_use]
    pub fn peak(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Number of samples that landed in some bin.
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Sample values the binner can place on the real line.
pub trait SampleValue: Copy {
    fn to_f64(self) -> f64;
}

impl SampleValue for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

#[allow(clippy::cast_precision_loss)]
impl SampleValue for i64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

#[allow(clippy::cast_precision_loss)]
impl SampleValue for usize {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// Bin `samples` according to `config.bins` and `config.range`.
///
/// Without an explicit range the data extrema are used.
#[must_use]
pub fn bin<T: SampleValue>(samples: &[T], config: &PlotConfig) -> Histogram {
    let values: Vec<f64> = samples.iter().map(|&s| s.to_f64()).collect();
    bin_values(&values, config)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn bin_values(samples: &[f64], config: &PlotConfig) -> Histogram {
    let (low, high) = config.range.unwrap_or_else(|| value_bounds(samples));
    let bins = config.bins.max(1);
    let width = (high - low) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in samples {
        if !v.is_finite() || v < low || v > high {
            continue;
        }
        // float error can push an in-range value one past the end
        let index = (((v - low) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }
    Histogram { counts, low, high }
}
