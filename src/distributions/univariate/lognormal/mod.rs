// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Log-Normal Distribution** - *Exponential of a Gaussian*
//!
//! `ln X ~ N(μ, σ²)` with location `μ` and scale `σ > 0`, supported on `(0, ∞)`.
//! Both tails use the complementary error function of the log-standardised value, so
//! neither tail loses digits to cancellation.

use num_complex::Complex64;

use crate::config::CF_QUADRATURE_PANELS;
use crate::distributions::shared::constants::LN_SQRT_2PI;
use crate::distributions::shared::quadrature::cf_by_quantile;
use crate::distributions::shared::sampler::standard_normal;
use crate::distributions::shared::scalar::{normal_cdf, normal_quantile, normal_sf};
use crate::errors::{DistributionError, Result, check_finite, check_positive};
use crate::traits::distribution::ContinuousDistribution;
use crate::traits::uniform_source::UniformSource;
use crate::utils::{check_positive_sample, sample_mean, sample_mean_ln};

/// Log-normal distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct LogNormalRand {
    location: f64,
    scale: f64,
    log_scale: f64,
}

impl LogNormalRand {
    pub fn new(location: f64, scale: f64) -> Result<Self> {
        check_finite("LogNormalRand::new", "location", location)?;
        check_positive("LogNormalRand::new", "scale", scale)?;
        Ok(LogNormalRand {
            location,
            scale,
            log_scale: scale.ln(),
        })
    }

    #[inline]
    pub fn location(&self) -> f64 {
        self.location
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_parameters(&mut self, location: f64, scale: f64) -> Result<()> {
        *self = Self::new(location, scale)?;
        Ok(())
    }

    pub fn set_location(&mut self, location: f64) -> Result<()> {
        check_finite("LogNormalRand::set_location", "location", location)?;
        self.location = location;
        Ok(())
    }

    pub fn set_scale(&mut self, scale: f64) -> Result<()> {
        self.set_parameters(self.location, scale)
    }

    /// `μ + 1/2 + ln(σ sqrt(2π))`
    pub fn entropy(&self) -> f64 {
        self.location + 0.5 + self.log_scale + LN_SQRT_2PI
    }

    /// Location by moments with the scale fixed: `μ = ln x̄ - σ²/2`.
    pub fn fit_location_mm(&mut self, sample: &[f64]) -> Result<()> {
        check_positive_sample("LogNormalRand::fit_location_mm", sample, 1)?;
        self.set_location(sample_mean(sample).ln() - 0.5 * self.scale * self.scale)
    }

    /// Scale by moments with the location fixed: `σ² = 2(ln x̄ - μ)`.
    pub fn fit_scale_mm(&mut self, sample: &[f64]) -> Result<()> {
        check_positive_sample("LogNormalRand::fit_scale_mm", sample, 1)?;
        let var = 2.0 * (sample_mean(sample).ln() - self.location);
        if !(var > 0.0) {
            return Err(DistributionError::WrongReturn(format!(
                "LogNormalRand::fit_scale_mm => sample mean {} is not above exp(location)",
                sample_mean(sample)
            )));
        }
        self.set_scale(var.sqrt())
    }

    /// Location MLE with the scale fixed: the mean of `ln x`.
    pub fn fit_location_mle(&mut self, sample: &[f64]) -> Result<()> {
        check_positive_sample("LogNormalRand::fit_location_mle", sample, 1)?;
        self.set_location(sample_mean_ln(sample))
    }

    /// Scale MLE with the location fixed: the root mean square of `ln x - μ`.
    pub fn fit_scale_mle(&mut self, sample: &[f64]) -> Result<()> {
        check_positive_sample("LogNormalRand::fit_scale_mle", sample, 1)?;
        let scale = Self::log_rms(sample, self.location);
        self.accept_scale("LogNormalRand::fit_scale_mle", scale)
    }

    /// Joint location and scale MLE.
    pub fn fit_mle(&mut self, sample: &[f64]) -> Result<()> {
        check_positive_sample("LogNormalRand::fit_mle", sample, 1)?;
        let location = sample_mean_ln(sample);
        let scale = Self::log_rms(sample, location);
        if !(scale > 0.0) {
            return Err(DistributionError::WrongReturn(
                "LogNormalRand::fit_mle => sample has no spread".into(),
            ));
        }
        self.set_parameters(location, scale)
    }

    fn log_rms(sample: &[f64], location: f64) -> f64 {
        let ss: f64 = sample
            .iter()
            .map(|&x| {
                let d = x.ln() - location;
                d * d
            })
            .sum();
        (ss / sample.len() as f64).sqrt()
    }

    fn accept_scale(&mut self, fname: &str, scale: f64) -> Result<()> {
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(DistributionError::WrongReturn(format!(
                "{} => estimated scale {} is not positive",
                fname, scale
            )));
        }
        self.set_scale(scale)
    }

    #[inline]
    fn standardise(&self, x: f64) -> f64 {
        (x.ln() - self.location) / self.scale
    }
}

impl Default for LogNormalRand {
    fn default() -> Self {
        LogNormalRand {
            location: 0.0,
            scale: 1.0,
            log_scale: 0.0,
        }
    }
}

impl ContinuousDistribution for LogNormalRand {
    fn min_value(&self) -> f64 {
        0.0
    }

    fn max_value(&self) -> f64 {
        f64::INFINITY
    }

    fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        self.log_pdf(x).exp()
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return f64::NEG_INFINITY;
        }
        let z = self.standardise(x);
        -0.5 * z * z - x.ln() - self.log_scale - LN_SQRT_2PI
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        normal_cdf(self.standardise(x))
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 1.0;
        }
        normal_sf(self.standardise(x))
    }

    fn quantile_interior(&self, p: f64) -> Result<f64> {
        Ok((self.location + self.scale * normal_quantile(p)).exp())
    }

    fn quantile_1m_interior(&self, q: f64) -> Result<f64> {
        Ok((self.location - self.scale * normal_quantile(q)).exp())
    }

    fn variate(&self, src: &mut dyn UniformSource) -> f64 {
        (self.location + self.scale * standard_normal(src)).exp()
    }

    fn mean(&self) -> f64 {
        (self.location + 0.5 * self.scale * self.scale).exp()
    }

    fn variance(&self) -> f64 {
        let s2 = self.scale * self.scale;
        s2.exp_m1() * (2.0 * self.location + s2).exp()
    }

    fn mode(&self) -> f64 {
        (self.location - self.scale * self.scale).exp()
    }

    fn skewness(&self) -> f64 {
        let s2 = self.scale * self.scale;
        (s2.exp() + 2.0) * s2.exp_m1().sqrt()
    }

    fn excess_kurtosis(&self) -> f64 {
        let s2 = self.scale * self.scale;
        (4.0 * s2).exp() + 2.0 * (3.0 * s2).exp() + 3.0 * (2.0 * s2).exp() - 6.0
    }

    fn cf(&self, t: f64) -> Complex64 {
        if t == 0.0 {
            return Complex64::new(1.0, 0.0);
        }
        let (mu, sigma) = (self.location, self.scale);
        cf_by_quantile(
            |u| (mu + sigma * normal_quantile(u)).exp(),
            t,
            CF_QUADRATURE_PANELS,
        )
    }
}
