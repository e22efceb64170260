// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Distributions Module** - *Continuous Distribution Engines*
//!
//! Continuous probability distributions with densities, tails, quantiles, moments,
//! characteristic functions, regime-selected random variate generation and parameter
//! estimation.
//!
//! ## Core Statistical Functions
//! Each distribution implements [`ContinuousDistribution`](crate::traits::distribution::ContinuousDistribution):
//! - **Densities**: `pdf` and `log_pdf`, with log forms evaluated directly
//! - **Tails**: `cdf`, `sf` and their logs, each tail computed where it is small
//! - **Quantiles**: closed forms where they exist, otherwise an asymptotic start refined by
//!   a bracketed Newton solver
//! - **Random variates**: drawn from an explicitly passed
//!   [`UniformSource`](crate::traits::uniform_source::UniformSource)
//! - **Estimation**: MLE, method of moments and conjugate Bayesian updates as inherent methods
//!
//! ## Usage Examples
//! ```rust,ignore
//! use dist_kernels::distributions::univariate::gamma::GammaRand;
//! use dist_kernels::traits::distribution::ContinuousDistribution;
//! use dist_kernels::traits::uniform_source::RandSource;
//!
//! let mut g = GammaRand::new(2.0, 3.0)?;
//! let mut src = RandSource::seed_from_u64(7);
//! let mut draws = vec![0.0; 1_000];
//! g.sample_to(&mut src, &mut draws);
//!
//! let p99 = g.quantile(0.99)?;
//! g.fit(&draws)?;
//! ```
//!
//! ## Numerical Precision and Stability
//! See `./tests` for tolerance requirements, where results are measured against 50-digit
//! reference values on the SciPy test inputs.
//! Whilst these pass on the development machine, platform specific differences may impact
//! your test results.
//!
//! ## Disclaimer
//! This implementation is provided on a best-effort basis and is intended for
//! general scientific and engineering use. While every attempt has been made to
//! match the accuracy and behaviour of established libraries such as SciPy, we
//! make no guarantees as to correctness, fitness for any particular purpose, or
//! suitability for uses such as in life-critical, safety-critical, or financial applications.

/// # **Shared Distribution Utilities** - *Common Infrastructure for Distribution Computing*
///
/// ## Modules
/// - **`constants`**: Mathematical constants and quadrature nodes
/// - **`quadrature`**: Composite Gauss–Legendre integration
/// - **`sampler`**: Exponential and normal draws, bounded rejection driver
/// - **`scalar`**: Special functions and mathematical utilities
/// - **`solver`**: Bracketed Newton root finding
pub mod shared {
    pub mod constants;
    pub mod quadrature;
    pub mod sampler;
    pub mod scalar;
    pub mod solver;
}

/// # **Univariate Distributions** - *Single-Variable Continuous Families*
///
/// - **Gamma family**: gamma, chi-squared, Erlang
/// - **Heavy-tailed and location-scale**: Laplace, Lévy, Pareto, Student-t, log-normal
pub mod univariate {
    pub mod gamma;
    #[cfg(feature = "probability_distributions")]
    pub mod laplace;
    #[cfg(feature = "probability_distributions")]
    pub mod levy;
    #[cfg(feature = "probability_distributions")]
    pub mod lognormal;
    #[cfg(feature = "probability_distributions")]
    pub mod pareto;
    #[cfg(feature = "probability_distributions")]
    pub mod student_t;
}
