// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Composite Gauss–Legendre quadrature, used for characteristic functions that have no
//! closed form and by the normalisation tests.

use num_complex::Complex64;

use crate::distributions::shared::constants::{GL5_NODES, GL5_WEIGHTS};

/// ∫ₐᵇ f(x) dx with `panels` equal 5-point Gauss–Legendre panels.
pub fn integrate<F>(mut f: F, a: f64, b: f64, panels: usize) -> f64
where
    F: FnMut(f64) -> f64,
{
    let panels = panels.max(1);
    let h = (b - a) / panels as f64;
    let half = 0.5 * h;
    let mut total = 0.0;
    for k in 0..panels {
        let mid = a + (k as f64 + 0.5) * h;
        let mut panel = 0.0;
        for (node, weight) in GL5_NODES.iter().zip(GL5_WEIGHTS.iter()) {
            panel += weight * f(mid + half * node);
        }
        total += panel * half;
    }
    total
}

/// `E[exp(itX)] = ∫₀¹ exp(i t Q(u)) du` for a distribution with quantile function `Q`.
///
/// Nodes never touch `u = 0` or `u = 1`, so unbounded supports are fine. The weights are
/// positive and sum to one, hence `|cf| <= 1` holds for any `t`.
pub fn cf_by_quantile<Q>(quantile: Q, t: f64, panels: usize) -> Complex64
where
    Q: Fn(f64) -> f64,
{
    let re = integrate(|u| (t * quantile(u)).cos(), 0.0, 1.0, panels);
    let im = integrate(|u| (t * quantile(u)).sin(), 0.0, 1.0, panels);
    Complex64::new(re, im)
}
