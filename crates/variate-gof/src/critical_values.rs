//! 99% critical values of the chi-square distribution
//!
//! Two literal tables: one entry per degree of freedom up to 250, and a coarse
//! table in steps of 50 beyond that.

use crate::config::{CriticalValueMethod, GofConfig};
use tracing::warn;
use variate_core::algorithms::{bracket, brent, RootSettings};
use variate_core::special::gamma_lower_regularized;
use variate_core::{Error, Result, Support};

/// Largest degrees of freedom covered by [`CHI_SQUARE_99_LOW`].
pub const LOW_TABLE_MAX_DF: usize = 250;

/// 99% quantiles for 1..=250 degrees of freedom, indexed by `df` (entry 0 is unused).
pub const CHI_SQUARE_99_LOW: [f64; LOW_TABLE_MAX_DF + 1] = [
    0.0, 6.635, 9.210, 11.345, 13.277, 15.086, 16.812, 18.475, 20.090, 21.666,
    23.209, 24.725, 26.217, 27.688, 29.141, 30.578, 32.000, 33.409, 34.805, 36.191,
    37.566, 38.932, 40.289, 41.638, 42.980, 44.314, 45.642, 46.963, 48.278, 49.588,
    50.892, 52.191, 53.486, 54.776, 56.061, 57.342, 58.619, 59.893, 61.162, 62.428,
    63.691, 64.950, 66.206, 67.459, 68.710, 69.957, 71.201, 72.443, 73.683, 74.919,
    76.154, 77.386, 78.616, 79.843, 81.069, 82.292, 83.513, 84.733, 85.950, 87.166,
    88.379, 89.591, 90.802, 92.010, 93.217, 94.422, 95.626, 96.828, 98.028, 99.228,
    100.425, 101.621, 102.816, 104.010, 105.202, 106.393, 107.583, 108.771, 109.958, 111.144,
    112.329, 113.512, 114.695, 115.876, 117.057, 118.236, 119.414, 120.591, 121.767, 122.942,
    124.116, 125.289, 126.462, 127.633, 128.803, 129.973, 131.141, 132.309, 133.476, 134.642,
    135.807, 136.971, 138.134, 139.297, 140.459, 141.620, 142.780, 143.940, 145.099, 146.257,
    147.414, 148.571, 149.727, 150.882, 152.037, 153.191, 154.344, 155.496, 156.648, 157.800,
    158.950, 160.100, 161.250, 162.398, 163.546, 164.694, 165.841, 166.987, 168.133, 169.278,
    170.423, 171.567, 172.711, 173.854, 174.996, 176.138, 177.280, 178.421, 179.561, 180.701,
    181.840, 182.979, 184.118, 185.256, 186.393, 187.530, 188.666, 189.802, 190.938, 192.073,
    193.208, 194.342, 195.476, 196.609, 197.742, 198.874, 200.006, 201.138, 202.269, 203.400,
    204.530, 205.660, 206.790, 207.919, 209.047, 210.176, 211.304, 212.431, 213.558, 214.685,
    215.812, 216.938, 218.063, 219.189, 220.314, 221.438, 222.563, 223.687, 224.810, 225.933,
    227.056, 228.179, 229.301, 230.423, 231.544, 232.665, 233.786, 234.907, 236.027, 237.147,
    238.266, 239.386, 240.505, 241.623, 242.742, 243.860, 244.977, 246.095, 247.212, 248.329,
    249.445, 250.561, 251.677, 252.793, 253.908, 255.023, 256.138, 257.253, 258.367, 259.481,
    260.595, 261.708, 262.821, 263.934, 265.047, 266.159, 267.271, 268.383, 269.495, 270.606,
    271.717, 272.828, 273.939, 275.049, 276.159, 277.269, 278.379, 279.488, 280.597, 281.706,
    282.814, 283.923, 285.031, 286.139, 287.247, 288.354, 289.461, 290.568, 291.675, 292.782,
    293.888, 294.994, 296.100, 297.206, 298.311, 299.417, 300.522, 301.626, 302.731, 303.835,
    304.940,
];

/// 99% quantiles for 300, 350, ..., 1000 degrees of freedom.
pub const CHI_SQUARE_99_HIGH: [f64; 15] = [
    359.906, 414.474, 468.724, 522.717, 576.493, 630.084, 683.516, 736.807,
    789.974, 843.029, 895.984, 948.848, 1001.630, 1054.334, 1106.969,
];

/// Table lookup: `LOW[df]` up to 250 degrees of freedom, `HIGH[floor(df / 50)]`
/// above. Returns `None` when the index runs past the high table.
///
/// The high table is indexed by `floor(df / 50)` rather than by the row that
/// holds `df`, which makes the threshold lenient between 251 and 749 degrees
/// of freedom. The lookup is kept as is so results stay comparable with the
/// published table; use [`CriticalValueMethod::Exact`] for exact thresholds.
///
/// # Example
///
/// ```
/// use variate_gof::critical_values::tabulated_critical_value;
///
/// assert_eq!(tabulated_critical_value(1), Some(6.635));
/// assert_eq!(tabulated_critical_value(250), Some(304.940));
/// assert_eq!(tabulated_critical_value(300), Some(683.516));
/// assert_eq!(tabulated_critical_value(750), None);
/// ```
pub fn tabulated_critical_value(df: usize) -> Option<f64> {
    if df == 0 {
        None
    } else if df <= LOW_TABLE_MAX_DF {
        Some(CHI_SQUARE_99_LOW[df])
    } else {
        CHI_SQUARE_99_HIGH.get(df / 50).copied()
    }
}

/// Exact chi-square quantile at the given confidence level, solving
/// `P(df/2, x/2) = confidence` for `x`.
pub fn exact_critical_value(df: usize, confidence: f64) -> Result<f64> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(Error::parameter(
            "0 < confidence < 1",
            &[("confidence", confidence)],
        ));
    }
    if df == 0 {
        return Err(Error::parameter("df >= 1", &[("df", 0.0)]));
    }

    let k = df as f64;
    let excess = |x: f64| gamma_lower_regularized(k / 2.0, x / 2.0) - confidence;
    let upper = k + 10.0 * (2.0 * k).sqrt() + 10.0;
    let settings = RootSettings::default();
    let (a, b) = bracket(excess, k / 2.0, upper, &Support::positive(true), &settings)?;
    brent(excess, a, b, &settings)
}

/// Critical value for `df` degrees of freedom under `config`.
///
/// With [`CriticalValueMethod::Table`], degrees of freedom beyond the high
/// table fall back to the exact quantile at 99%.
pub fn critical_value(df: usize, config: &GofConfig) -> Result<f64> {
    match config.critical_values {
        CriticalValueMethod::Table => match tabulated_critical_value(df) {
            Some(value) => Ok(value),
            None => {
                warn!(df, "degrees of freedom beyond the critical value table, using exact quantile");
                exact_critical_value(df, 0.99)
            }
        },
        CriticalValueMethod::Exact => exact_critical_value(df, config.confidence),
    }
}
