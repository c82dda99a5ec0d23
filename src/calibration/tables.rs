//! Zhu et al. (2023) aperture correction tables
//!
//! Rows are g-i color bins from red to blue, columns are r-band absolute
//! magnitude bins from faint to bright.

use super::{Cell, Grid};

const NA: Cell = None;

// 0 < n <= 2
pub const DISK_ALPHA: Grid = [
    [NA, NA, Some(0.044), Some(0.026), Some(0.005), NA],
    [Some(0.110), Some(0.106), Some(0.069), Some(0.037), Some(0.004), NA],
    [Some(0.113), Some(0.118), Some(0.084), Some(0.041), Some(-0.001), NA],
    [Some(0.152), Some(0.144), Some(0.114), Some(0.051), Some(-0.025), NA],
    [Some(0.180), Some(0.175), Some(0.135), Some(0.069), NA, NA],
    [Some(0.221), Some(0.187), Some(0.145), NA, NA, NA],
];
pub const DISK_ALPHA_ERR: Grid = [
    [NA, NA, Some(0.013), Some(0.019), Some(0.021), NA],
    [Some(0.014), Some(0.008), Some(0.004), Some(0.008), Some(0.013), NA],
    [Some(0.009), Some(0.004), Some(0.005), Some(0.0005), Some(0.009), NA],
    [Some(0.008), Some(0.006), Some(0.005), Some(0.007), Some(0.019), NA],
    [Some(0.009), Some(0.005), Some(0.008), Some(0.012), NA, NA],
    [Some(0.019), Some(0.012), Some(0.012), NA, NA, NA],
];
// 2 < n <= 4
pub const INTERMEDIATE_ALPHA: Grid = [
    [NA, NA, Some(0.002), Some(-0.024), Some(-0.025), Some(-0.011)],
    [Some(0.063), Some(0.001), Some(-0.010), Some(-0.022), Some(-0.033), Some(-0.004)],
    [Some(0.059), Some(0.026), Some(0.001), Some(-0.017), Some(-0.045), NA],
    [Some(0.077), Some(0.067), Some(0.043), Some(0.000), NA, NA],
    [Some(0.090), Some(0.091), NA, NA, NA, NA],
    [NA, NA, NA, NA, NA, NA],
];
pub const INTERMEDIATE_ALPHA_ERR: Grid = [
    [NA, NA, Some(0.009), Some(0.005), Some(0.004), Some(0.009)],
    [Some(0.021), Some(0.006), Some(0.003), Some(0.003), Some(0.004), Some(0.011)],
    [Some(0.007), Some(0.005), Some(0.005), Some(0.004), Some(0.006), NA],
    [Some(0.019), Some(0.012), Some(0.014), Some(0.009), NA, NA],
    [Some(0.026), Some(0.020), NA, NA, NA, NA],
    [NA, NA, NA, NA, NA, NA],
];
// 4 < n <= 8
pub const SPHEROID_ALPHA: Grid = [
    [NA, NA, Some(-0.059), Some(-0.046), Some(-0.043), Some(-0.025)],
    [NA, Some(-0.019), Some(-0.047), Some(-0.045), Some(-0.040), Some(-0.025)],
    [NA, Some(-0.004), Some(-0.043), Some(-0.050), Some(-0.039), Some(-0.015)],
    [NA, Some(-0.013), Some(-0.029), Some(-0.050), Some(-0.047), NA],
    [NA, NA, NA, NA, NA, NA],
    [NA, NA, NA, NA, NA, NA],
];
pub const SPHEROID_ALPHA_ERR: Grid = [
    [NA, NA, Some(0.010), Some(0.004), Some(0.002), Some(0.003)],
    [NA, Some(0.011), Some(0.003), Some(0.002), Some(0.001), Some(0.002)],
    [NA, Some(0.009), Some(0.004), Some(0.003), Some(0.003), Some(0.007)],
    [NA, Some(0.014), Some(0.013), Some(0.007), Some(0.010), NA],
    [NA, NA, NA, NA, NA, NA],
    [NA, NA, NA, NA, NA, NA],
];
