// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Guarded Newton Solver** - *Bracketed Root Finding with Bisection Fallback*
//!
//! Root finder shared by quantile inversion and shape estimation. The caller supplies a
//! residual that is increasing in `x` together with its derivative, an initial guess and
//! a bracket `[lo, hi]` that may be unbounded on either side.
//!
//! Every evaluated point tightens the bracket by the sign of its residual. A Newton step
//! is taken when it lands strictly inside the bracket and does not increase `|residual|`;
//! otherwise the solver bisects. Bisection is geometric when a one-signed bracket spans more
//! than a factor of four, including a bracket that ends at zero, so a root near
//! `f64::MIN_POSITIVE` is reached in about sixty halvings. It doubles outward from the
//! finite end when one side is unbounded.
//!
//! The loop is capped; exhausting it is a `WrongReturn` error, never a best guess.

use log::{debug, warn};

use crate::config::{SOLVER_ABS_TOL, SOLVER_MAX_ITER, SOLVER_REL_TOL};
use crate::errors::{DistributionError, Result};

/// Convergence controls for [`newton_bisect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    pub max_iter: usize,
    pub abs_tol: f64,
    pub rel_tol: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            max_iter: SOLVER_MAX_ITER,
            abs_tol: SOLVER_ABS_TOL,
            rel_tol: SOLVER_REL_TOL,
        }
    }
}

impl SolverOptions {
    #[inline]
    fn tolerance(&self, x: f64) -> f64 {
        self.abs_tol.max(self.rel_tol * x.abs())
    }
}

/// Log-scale midpoint of `0 <= lo < hi`; a zero end is taken as `f64::MIN_POSITIVE`.
#[inline]
fn geometric_mid(lo: f64, hi: f64) -> f64 {
    let lo = lo.max(f64::MIN_POSITIVE);
    (0.5 * (lo.ln() + hi.ln())).exp()
}

#[inline]
fn bisect(lo: f64, hi: f64) -> f64 {
    match (lo.is_finite(), hi.is_finite()) {
        (true, true) => {
            if lo >= 0.0 && hi > 4.0 * lo && hi > f64::MIN_POSITIVE {
                geometric_mid(lo, hi)
            } else if hi <= 0.0 && lo < 4.0 * hi && -lo > f64::MIN_POSITIVE {
                -geometric_mid(-hi, -lo)
            } else {
                0.5 * (lo + hi)
            }
        }
        (true, false) => lo + lo.abs().max(1.0),
        (false, true) => hi - hi.abs().max(1.0),
        (false, false) => 0.0,
    }
}

/// Finds `x` in `[lo, hi]` with `residual(x) = 0`.
///
/// `eval(x)` returns `(residual, derivative)`; the residual must be increasing in `x`.
/// An initial guess outside the open bracket, or non-finite, is replaced by a bisection
/// point.
pub fn newton_bisect<F>(
    mut eval: F,
    x0: f64,
    lo: f64,
    hi: f64,
    opts: &SolverOptions,
) -> Result<f64>
where
    F: FnMut(f64) -> (f64, f64),
{
    let (mut lo, mut hi) = (lo, hi);
    let mut x = if x0.is_finite() && x0 > lo && x0 < hi {
        x0
    } else {
        bisect(lo, hi)
    };
    let (mut r, mut d) = eval(x);

    for iter in 0..opts.max_iter {
        if r == 0.0 {
            return Ok(x);
        }
        if r.is_nan() {
            return Err(DistributionError::WrongReturn(format!(
                "newton_bisect => residual is NaN at x = {}",
                x
            )));
        }
        if r > 0.0 {
            hi = x;
        } else {
            lo = x;
        }

        let newton = x - r / d;
        let newton_inside = d > 0.0 && newton.is_finite() && newton > lo && newton < hi;
        let (next, rn, dn) = if newton_inside {
            let (rn, dn) = eval(newton);
            if rn.abs() <= r.abs() {
                (newton, rn, dn)
            } else {
                // Keep the sign information from the rejected step.
                if rn > 0.0 {
                    hi = hi.min(newton);
                } else if rn < 0.0 {
                    lo = lo.max(newton);
                }
                debug!("newton_bisect: iteration {} fell back to bisection", iter);
                let mid = bisect(lo, hi);
                let (rm, dm) = eval(mid);
                (mid, rm, dm)
            }
        } else {
            let mid = bisect(lo, hi);
            let (rm, dm) = eval(mid);
            (mid, rm, dm)
        };

        let step = (next - x).abs();
        x = next;
        r = rn;
        d = dn;
        let tol = opts.tolerance(x);
        if step <= tol || (hi - lo) <= tol {
            return Ok(x);
        }
    }

    warn!(
        "newton_bisect: no convergence after {} iterations, last x = {}, residual = {}",
        opts.max_iter, x, r
    );
    Err(DistributionError::WrongReturn(format!(
        "newton_bisect => no convergence within {} iterations (x = {}, residual = {})",
        opts.max_iter, x, r
    )))
}
