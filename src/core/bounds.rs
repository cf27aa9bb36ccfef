//! Geometry helpers: value ranges + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::constants::{BORDER_WIDTH, LABEL_GUTTER, MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH};

/// Inclusive value range of a sample set without any padding.
///
/// * Empty or all-non-finite input falls back to `(0.0, 1.0)`.
/// * If every finite value is identical the range is widened by ±0.5 so the
///   bins still have non-zero width.
#[must_use]
pub fn value_bounds(samples: &[f64]) -> (f64, f64) {
    let (low, high) = samples
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if !low.is_finite() || !high.is_finite() {
        return (0.0, 1.0);
    }
    if (high - low).abs() < f64::EPSILON {
        return (low - 0.5, high + 0.5);
    }
    (low, high)
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Convert terminal dimensions to a graph char grid, leaving room for the
/// borders, the y labels, the title rows and the x-axis label row.
#[inline]
#[must_use]
pub fn graph_dims((w, h): (Width, Height), label_width: usize) -> (usize, usize) {
    let x_chars = usize::from(w.0)
        .saturating_sub(BORDER_WIDTH + LABEL_GUTTER + label_width)
        .max(MIN_GRAPH_WIDTH);
    let y_chars = usize::from(h.0).saturating_sub(6).max(MIN_GRAPH_HEIGHT);
    (x_chars, y_chars)
}

/// Width of the wider of the two y labels.
#[inline]
#[must_use]
pub fn y_label_width(y_range: (f64, f64), decimals: usize) -> usize {
    let (low, high) = y_range;
    let lo = format!("{low:.decimals$}").len();
    let hi = format!("{high:.decimals$}").len();
    lo.max(hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_mixed_values() {
        assert_eq!(value_bounds(&[0.5, -1.0, 2.0, f64::NAN]), (-1.0, 2.0));
    }

    #[test]
    fn empty_or_non_finite_falls_back() {
        assert_eq!(value_bounds(&[]), (0.0, 1.0));
        assert_eq!(value_bounds(&[f64::NAN, f64::INFINITY]), (0.0, 1.0));
    }

    #[test]
    fn flat_series_is_widened() {
        assert_eq!(value_bounds(&[3.0, 3.0]), (2.5, 3.5));
    }

    #[test]
    fn dims_respect_minimums() {
        assert_eq!(
            graph_dims((Width(10), Height(5)), 4),
            (MIN_GRAPH_WIDTH, MIN_GRAPH_HEIGHT)
        );
        assert_eq!(graph_dims((Width(80), Height(30)), 5), (72, 24));
    }

    #[test]
    fn label_width_uses_wider_bound() {
        assert_eq!(y_label_width((0.0, 10_000.0), 0), 5);
        assert_eq!(y_label_width((-1.0, 2.0), 2), 5);
    }
}
