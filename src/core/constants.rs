//! A collection of constants.

/// Example modulus; prime, so the full period is `DEFAULT_MODULUS - 1`.
pub const DEFAULT_MODULUS: i64 = 151;
/// Example multiplier.
pub const DEFAULT_MULTIPLIER: i64 = 7;
/// Example seed.
pub const DEFAULT_SEED: i64 = 1;
/// Example categorical weights.
pub const DEFAULT_WEIGHTS: [f64; 4] = [0.1, 0.3, 0.2, 0.4];

/// Weight sums further than this from 1.0 are reported.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// The left and right border characters
pub const BORDER_WIDTH: usize = 2;
/// One character of space between y axis labels and the plotted bars
pub const LABEL_GUTTER: usize = 1;

/// Graph must be at least 7 characters tall
pub const MIN_GRAPH_HEIGHT: usize = 7;
/// Graph must be at least 14 characters wide
pub const MIN_GRAPH_WIDTH: usize = 14;

/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_HORIZONTAL_RESOLUTION: usize = 2;
/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_VERTICAL_RESOLUTION: usize = 4;

/// Axis labels are rounded to this many decimals.
///
/// 1.9867 becomes 1.99
pub const DECIMAL_PRECISION: usize = 2;
