// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Numerical Behaviour Parameters*
//!
//! Compile-time constants controlling iteration budgets, convergence tolerances and
//! the shape thresholds that partition the gamma generator regimes.

/// Iteration cap for the guarded Newton solver used by quantiles and shape fits.
pub const SOLVER_MAX_ITER: usize = 200;

/// Absolute step tolerance of the guarded Newton solver.
///
/// Zero makes the test purely relative, so roots down to `f64::MIN_POSITIVE` keep full
/// precision.
pub const SOLVER_ABS_TOL: f64 = 0.0;

/// Relative step tolerance of the guarded Newton solver.
///
/// Converged iterates satisfy `|dx| <= max(SOLVER_ABS_TOL, SOLVER_REL_TOL * |x|)`.
pub const SOLVER_REL_TOL: f64 = 1e-14;

/// Base term cap for the incomplete gamma series and continued fraction.
pub const SERIES_MAX_ITER: usize = 5_000;

/// Near `x = a` both expansions need about `10 sqrt(a)` terms, so the cap for shape `a`
/// is `SERIES_MAX_ITER + SERIES_SQRT_SCALE * sqrt(a)`. An exhausted cap yields NaN.
pub const SERIES_SQRT_SCALE: f64 = 32.0;

/// Shapes at or above this evaluate the incomplete gamma prefactor in Stirling form,
/// avoiding the cancellation between `a ln x` and `lnΓ(a)`.
pub const STIRLING_SHAPE: f64 = 20.0;

/// Relative truncation tolerance for series and continued fractions.
pub const SERIES_EPS: f64 = 1e-16;

/// Floor used by the modified Lentz algorithm to avoid division by zero.
pub const LENTZ_TINY: f64 = 1e-300;

/// Shapes strictly below this use the small-shape rejection generators.
pub const SMALL_SHAPE_THRESHOLD: f64 = 0.34;

/// Upper bound (exclusive) of the Fishman regime, whose lower bound is 1.
pub const FISHMAN_UPPER: f64 = 1.2;

/// Largest integer shape sampled as a plain sum of exponentials.
pub const MAX_INTEGER_SHAPE: f64 = 3.0;

/// Panels of the composite Gauss-Legendre rule used for characteristic functions
/// without a closed form.
pub const CF_QUADRATURE_PANELS: usize = 2_000;

/// Step of the trapezoid rule used for `ln K_v(z)`.
pub const BESSEL_K_STEP: f64 = 0.01;

/// Cap on rejection rounds per variate.
///
/// Every rejection generator here accepts with probability above 0.7 per round, so the
/// cap is only reached when the uniform source is degenerate.
pub const MAX_REJECTION_ROUNDS: usize = 100_000;
