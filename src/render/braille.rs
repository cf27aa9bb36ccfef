//! Histogram to UTF-8 braille grid.
//!
//! ### Workflow
//! 1. `preprocess_to_braille` resamples the bins onto the pixel columns (two
//!    per character) and turns each count into the pixel row where its bar
//!    starts.  With more bins than pixel columns, each column shows the
//!    tallest of the bins it covers, so every non-empty bin stays visible and
//!    the plot peak is still `Histogram::peak`.
//! 2. `encode_rows` walks the grid one 2×4 cell at a time.  A bar always
//!    runs down to the bottom edge, so inside a cell it is fully described
//!    by how many dots are lit from the bottom; the dot masks for the left
//!    and right half-columns are looked up from small tables.

use crate::{
    core::{
        config::PlotConfig,
        constants::{BRAILLE_HORIZONTAL_RESOLUTION as HR, BRAILLE_VERTICAL_RESOLUTION},
        error::GraphError,
    },
    render::binner::Histogram,
};

/// First lit pixel row (0 = top) for every half-column; `None` = no bar.
pub struct BraillePlot {
    pub columns: Vec<Option<usize>>,
}

// --- Pre-Computed Masks ---

/// Left half-column lit from the bottom: 0..=4 dots (⠀ ⡀ ⡄ ⡆ ⡇).
const LEFT_FILL: [u8; 5] = [0x00, 0x40, 0x44, 0x46, 0x47];
/// Right half-column lit from the bottom: 0..=4 dots (⠀ ⢀ ⢠ ⢰ ⢸).
const RIGHT_FILL: [u8; 5] = [0x00, 0x80, 0xA0, 0xB0, 0xB8];

/// Bins drawn by pixel column `col` of `px_cols`: never empty, and the
/// columns together cover all `bins`.
#[inline]
fn column_bins(col: usize, bins: usize, px_cols: usize) -> std::ops::Range<usize> {
    let start = col * bins / px_cols;
    let end = ((col + 1) * bins / px_cols).max(start + 1);
    start..end
}

/// Resample `hist` onto two pixel columns per character.
///
/// Bar heights are scaled so the tallest bin fills the plot; any non-zero
/// bin is at least one pixel tall.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn preprocess_to_braille(
    hist: &Histogram,
    config: &PlotConfig,
) -> Result<BraillePlot, GraphError> {
    if hist.counts.is_empty() {
        return Err(GraphError::EmptyData);
    }

    let vert_px = config.y_chars * BRAILLE_VERTICAL_RESOLUTION;
    let px_cols = config.x_chars * HR;
    let bins = hist.counts.len();
    let peak = hist.peak();

    let columns = (0..px_cols)
        .map(|col| {
            let count = hist.counts[column_bins(col, bins, px_cols)]
                .iter()
                .copied()
                .max()
                .unwrap_or(0);
            if count == 0 || peak == 0 {
                return None;
            }
            let height = ((count as f64 / peak as f64) * vert_px as f64).round() as usize;
            Some(vert_px - height.clamp(1, vert_px))
        })
        .collect();

    Ok(BraillePlot { columns })
}

/// Dots lit inside the cell starting at pixel row `row_top`.
#[inline]
fn lit_dots(top: Option<usize>, row_top: usize) -> usize {
    let row_bottom = row_top + BRAILLE_VERTICAL_RESOLUTION - 1;
    match top {
        Some(t) if t <= row_bottom => row_bottom + 1 - t.max(row_top),
        _ => 0,
    }
}

/// Encode `plot` into `y_chars` strings of `x_chars` braille glyphs each.
#[must_use]
pub fn encode_rows(plot: &BraillePlot, x_chars: usize, y_chars: usize) -> Vec<String> {
    (0..y_chars)
        .map(|row| {
            let row_top = row * BRAILLE_VERTICAL_RESOLUTION;
            (0..x_chars)
                .map(|col| {
                    let left = lit_dots(plot.columns.get(col * HR).copied().flatten(), row_top);
                    let right =
                        lit_dots(plot.columns.get(col * HR + 1).copied().flatten(), row_top);
                    // https://en.wikipedia.org/wiki/Braille_Patterns
                    let mask = LEFT_FILL[left] | RIGHT_FILL[right];
                    char::from_u32(0x2800 + u32::from(mask)).unwrap_or(' ')
                })
                .collect::<String>()
        })
        .collect()
}
