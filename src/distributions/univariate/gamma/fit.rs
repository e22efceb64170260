// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Gamma Estimation** - *Rate, Shape, Joint and Conjugate Fits*
//!
//! Every estimator validates the whole sample before it accumulates anything. An empty
//! sample is `TooFewElements`, and a non-positive or non-finite value is `WrongSample`.
//! Results are written through the validated setters, so a failed fit leaves the
//! distribution unchanged.

use log::debug;
use statrs::function::gamma::digamma;

use crate::distributions::shared::scalar::trigamma;
use crate::distributions::shared::solver::{SolverOptions, newton_bisect};
use crate::distributions::univariate::gamma::GammaRand;
use crate::errors::{DistributionError, Result};
use crate::utils::{
    check_positive_sample, sample_mean, sample_mean_ln, sample_sum, sample_variance,
};

impl GammaRand {
    /// Rate MLE with the shape held fixed: `β = α / x̄`.
    ///
    /// With `unbiased` the estimate is scaled by `(nα - 1)/(nα)`, which gives the
    /// minimum-variance unbiased estimator of the rate.
    pub fn fit_rate(&mut self, sample: &[f64], unbiased: bool) -> Result<()> {
        check_positive_sample("GammaRand::fit_rate", sample, 1)?;
        let n = sample.len() as f64;
        let mut rate = self.shape() / sample_mean(sample);
        if unbiased {
            let n_shape = n * self.shape();
            rate *= (n_shape - 1.0) / n_shape;
        }
        if !(rate > 0.0 && rate.is_finite()) {
            return Err(DistributionError::WrongReturn(format!(
                "GammaRand::fit_rate => estimated rate {} is not positive",
                rate
            )));
        }
        self.set_rate(rate)
    }

    /// Bayesian rate update under a conjugate `Γ(α₀, β₀)` prior, shape held fixed.
    ///
    /// The posterior is `Γ(α₀ + nα, β₀ + Σx)`. The rate is set to the posterior mean, or to
    /// the posterior mode when `map` is true (which requires a posterior shape above 1).
    /// Returns the posterior as an independent distribution.
    pub fn fit_rate_bayes(
        &mut self,
        sample: &[f64],
        prior: &GammaRand,
        map: bool,
    ) -> Result<GammaRand> {
        check_positive_sample("GammaRand::fit_rate_bayes", sample, 1)?;
        let n = sample.len() as f64;
        let posterior = GammaRand::new(
            prior.shape() + n * self.shape(),
            prior.rate() + sample_sum(sample),
        )?;
        let rate = if map {
            if posterior.shape() <= 1.0 {
                return Err(DistributionError::NotApplicable(format!(
                    "GammaRand::fit_rate_bayes => posterior shape {} has no interior mode",
                    posterior.shape()
                )));
            }
            (posterior.shape() - 1.0) / posterior.rate()
        } else {
            posterior.shape() / posterior.rate()
        };
        self.set_rate(rate)?;
        debug!(
            "gamma rate posterior: shape {}, rate {}; rate set to {}",
            posterior.shape(),
            posterior.rate(),
            rate
        );
        Ok(posterior)
    }

    /// Shape MLE with the rate held fixed: solves `ψ(α) = mean(ln x) + ln β`.
    ///
    /// Newton on the digamma equation (derivative ψ′), started at the moment estimate
    /// `x̄β`, inside the shared bracketed solver.
    pub fn fit_shape(&mut self, sample: &[f64]) -> Result<()> {
        check_positive_sample("GammaRand::fit_shape", sample, 1)?;
        let target = sample_mean_ln(sample) + self.log_rate();
        let x0 = sample_mean(sample) * self.rate();
        let shape = newton_bisect(
            |a| (digamma(a) - target, trigamma(a)),
            x0,
            0.0,
            f64::INFINITY,
            &SolverOptions::default(),
        )?;
        self.set_shape(shape)
    }

    /// Joint MLE of shape and rate.
    ///
    /// The fixed point of alternating [`GammaRand::fit_shape`] and [`GammaRand::fit_rate`]
    /// satisfies the profile equation `ln α - ψ(α) = ln x̄ - mean(ln x)`, which is solved
    /// directly from Minka's starting point; then `β = α / x̄`.
    pub fn fit(&mut self, sample: &[f64]) -> Result<()> {
        check_positive_sample("GammaRand::fit", sample, 1)?;
        let mean = sample_mean(sample);
        let s = mean.ln() - sample_mean_ln(sample);
        if !(s > 0.0) {
            return Err(DistributionError::NotApplicable(
                "GammaRand::fit => sample has no dispersion".into(),
            ));
        }
        let x0 = (3.0 - s + ((s - 3.0) * (s - 3.0) + 24.0 * s).sqrt()) / (12.0 * s);
        let shape = newton_bisect(
            |a| (s - a.ln() + digamma(a), trigamma(a) - 1.0 / a),
            x0,
            0.0,
            f64::INFINITY,
            &SolverOptions::default(),
        )?;
        debug!("gamma joint fit: s = {}, start {}, shape {}", s, x0, shape);
        self.set_parameters(shape, shape / mean)
    }

    /// Method of moments: `α = x̄²/s²`, `β = x̄/s²`. Needs two or more values.
    pub fn fit_mm(&mut self, sample: &[f64]) -> Result<()> {
        check_positive_sample("GammaRand::fit_mm", sample, 2)?;
        let mean = sample_mean(sample);
        let var = sample_variance(sample, mean);
        if !(var > 0.0) {
            return Err(DistributionError::NotApplicable(
                "GammaRand::fit_mm => sample variance is zero".into(),
            ));
        }
        self.set_parameters(mean * mean / var, mean / var)
    }
}
