// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Gamma Quantiles** - *Asymptotic Start and Guarded Newton Refinement*
//!
//! Quantiles are solved for the unit-rate variable `y = βx` and rescaled at the end.
//!
//! The lower tail solves `ln P(α, y) = ln p`, and the upper tail solves `ln Q(α, y) = ln q`.
//! Working on the log scale keeps relative precision for levels far into either tail, and
//! it flattens the power-law shape of `P` near zero into something Newton handles well.
//! The derivative in both cases is the density divided by the tail probability.
//!
//! Starting points:
//! - **large α**: Wilson–Hilferty cube-root normal transform;
//! - **small y**: inversion of `P ≈ y^α / Γ(α + 1)` with a first-order correction, used at
//!   any level where the inverted `y` stays below `0.3 (α + 1)`;
//! - **small q**: inversion of `Q ≈ y^{α-1} e^{-y} / Γ(α)`;
//! - otherwise Wilson–Hilferty, falling back to the mean.
//!
//! When that small-`y` inversion lands below `f64::MIN_POSITIVE` the quantile is not
//! representable to working precision, and the inversion itself is returned (subnormal or
//! zero).

use crate::distributions::shared::scalar::{
    ln_reg_lower_gamma, ln_reg_upper_gamma, normal_quantile,
};
use crate::distributions::shared::solver::{SolverOptions, newton_bisect};
use crate::distributions::univariate::gamma::GammaRand;
use crate::errors::Result;

/// Shapes at or above this start from Wilson–Hilferty unconditionally.
const LARGE_SHAPE: f64 = 10.0;

impl GammaRand {
    /// Initial unit-rate guess for `P(α, y) = p`, with `q = 1 - p` supplied separately so the
    /// upper tail never loses digits.
    pub(crate) fn standard_quantile_guess(&self, p: f64, q: f64) -> f64 {
        let shape = self.shape();
        let wilson_hilferty = || {
            let z = if p <= 0.5 {
                normal_quantile(p)
            } else {
                -normal_quantile(q)
            };
            let k = 1.0 / (9.0 * shape);
            let c = 1.0 - k + z * k.sqrt();
            shape * c * c * c
        };

        if shape >= LARGE_SHAPE {
            let y = wilson_hilferty();
            if y > 0.0 {
                return y;
            }
        }
        let r = self.small_quantile_root(p, q).exp();
        if r < 0.3 * (shape + 1.0) {
            return r * (1.0 + r / (shape + 1.0));
        }
        if p > 0.5 {
            let y0 = -q.ln() - self.ln_gamma_shape();
            if y0 > 1.0 {
                let y = y0 + (shape - 1.0) * y0.ln();
                if y > 0.0 {
                    return y;
                }
            }
        }
        let y = wilson_hilferty();
        if y > 0.0 { y } else { shape }
    }

    /// `ln r` with `r = (p Γ(α + 1))^{1/α}`, the leading-order solution of `P(α, y) = p`.
    #[inline]
    fn small_quantile_root(&self, p: f64, q: f64) -> f64 {
        let ln_p = if p <= 0.5 { p.ln() } else { (-q).ln_1p() };
        (ln_p + self.ln_gamma_shape() + self.log_shape()) / self.shape()
    }

    /// The small-`y` inversion when it underflows the normal range, else `None`.
    #[inline]
    fn underflowed_quantile(&self, p: f64, q: f64) -> Option<f64> {
        let ln_r = self.small_quantile_root(p, q);
        (ln_r < f64::MIN_POSITIVE.ln()).then(|| ln_r.exp())
    }

    /// Unit-rate `y` with `P(α, y) = p`, for `p` in `(0, 1)`.
    pub(crate) fn standard_quantile_lower(&self, p: f64) -> Result<f64> {
        if let Some(y) = self.underflowed_quantile(p, 1.0 - p) {
            return Ok(y);
        }
        let shape = self.shape();
        let lg = self.ln_gamma_shape();
        let ln_p = p.ln();
        let x0 = self.standard_quantile_guess(p, 1.0 - p);
        newton_bisect(
            |y| {
                let ln_cdf = ln_reg_lower_gamma(shape, y, lg);
                let slope = (self.ln_standard_pdf(y) - ln_cdf).exp();
                (ln_cdf - ln_p, slope)
            },
            x0,
            0.0,
            f64::INFINITY,
            &SolverOptions::default(),
        )
    }

    /// Unit-rate `y` with `Q(α, y) = q`, for `q` in `(0, 1)`.
    pub(crate) fn standard_quantile_upper(&self, q: f64) -> Result<f64> {
        if let Some(y) = self.underflowed_quantile(1.0 - q, q) {
            return Ok(y);
        }
        let shape = self.shape();
        let lg = self.ln_gamma_shape();
        let ln_q = q.ln();
        let x0 = self.standard_quantile_guess(1.0 - q, q);
        newton_bisect(
            |y| {
                let ln_sf = ln_reg_upper_gamma(shape, y, lg);
                let slope = (self.ln_standard_pdf(y) - ln_sf).exp();
                (ln_q - ln_sf, slope)
            },
            x0,
            0.0,
            f64::INFINITY,
            &SolverOptions::default(),
        )
    }
}
