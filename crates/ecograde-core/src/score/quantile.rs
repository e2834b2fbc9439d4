//! Published eco-index quantile tables.
//!
//! Each table has 21 entries describing the distribution of a raw metric
//! over the reference corpus of audited pages. A metric value maps to a
//! position in `[0, 20]`: the index of the step it falls in, plus a linear
//! interpolation inside that step. Values past the last entry saturate at
//! the last index.

/// DOM element count distribution.
pub const DOM_QUANTILES: [f64; 21] = [
    0.0, 47.0, 75.0, 159.0, 233.0, 298.0, 358.0, 417.0, 476.0, 537.0, 603.0, 674.0, 753.0, 843.0,
    949.0, 1076.0, 1237.0, 1459.0, 1801.0, 2479.0, 594_601.0,
];

/// HTTP request count distribution.
pub const REQUEST_QUANTILES: [f64; 21] = [
    0.0, 2.0, 15.0, 25.0, 34.0, 42.0, 49.0, 56.0, 63.0, 70.0, 78.0, 86.0, 95.0, 105.0, 117.0,
    130.0, 147.0, 170.0, 205.0, 281.0, 3920.0,
];

/// Transferred size distribution, in KiB.
pub const SIZE_QUANTILES: [f64; 21] = [
    0.0, 1.37, 144.7, 319.53, 479.46, 631.97, 783.38, 937.91, 1098.62, 1265.47, 1448.32, 1648.27,
    1876.08, 2142.06, 2465.37, 2866.31, 3401.59, 4155.73, 5400.08, 8037.54, 223_212.26,
];

/// Position of the median step in each table.
pub const MEDIAN_STEP: f64 = 10.0;

/// Maps a raw metric value to its interpolated position in a table.
pub fn compute_quantile(quantiles: &[f64], value: f64) -> f64 {
    for i in 1..quantiles.len() {
        if value < quantiles[i] {
            return (i - 1) as f64 + (value - quantiles[i - 1]) / (quantiles[i] - quantiles[i - 1]);
        }
    }
    (quantiles.len() - 1) as f64
}
