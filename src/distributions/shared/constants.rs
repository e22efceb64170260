// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Mathematical constants shared by the distribution kernels.

/// √2
pub(crate) const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// ln √(2π)
pub(crate) const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_8;

/// ln π
pub(crate) const LN_PI: f64 = 1.144_729_885_849_400_2;

/// Euler–Mascheroni constant γ.
pub(crate) const EULER_MASCHERONI: f64 = 0.577_215_664_901_532_9;

/// 5-point Gauss–Legendre nodes on `[-1, 1]`.
pub(crate) const GL5_NODES: [f64; 5] = [
    -0.906_179_845_938_664,
    -0.538_469_310_105_683_1,
    0.0,
    0.538_469_310_105_683_1,
    0.906_179_845_938_664,
];

/// 5-point Gauss–Legendre weights matching [`GL5_NODES`]; they sum to 2.
pub(crate) const GL5_WEIGHTS: [f64; 5] = [
    0.236_926_885_056_189_1,
    0.478_628_670_499_366_5,
    0.568_888_888_888_888_9,
    0.478_628_670_499_366_5,
    0.236_926_885_056_189_1,
];
