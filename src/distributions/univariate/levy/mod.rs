// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Lévy Distribution** - *One-Sided Stable Law with Index 1/2*
//!
//! Location `μ` and scale `σ > 0`, supported on `(μ, ∞)`:
//!
//! `f(x) = sqrt(σ / 2π) · exp(-σ / 2(x - μ)) / (x - μ)^{3/2}`
//!
//! `F(x) = erfc(sqrt(σ / 2(x - μ)))`. Mean and variance are infinite; skewness and
//! kurtosis are undefined and reported as NaN.

use num_complex::Complex64;
use statrs::function::erf::{erf, erf_inv, erfc, erfc_inv};

use crate::distributions::shared::constants::{EULER_MASCHERONI, LN_PI};
use crate::distributions::shared::sampler::standard_normal;
use crate::errors::{DistributionError, Result, check_finite, check_positive};
use crate::traits::distribution::ContinuousDistribution;
use crate::traits::uniform_source::UniformSource;
use crate::utils::check_sample_above;

/// Lévy distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct LevyRand {
    location: f64,
    scale: f64,
    /// `0.5 ln(σ / 2π)`
    pdf_coef: f64,
}

impl LevyRand {
    pub fn new(location: f64, scale: f64) -> Result<Self> {
        check_finite("LevyRand::new", "location", location)?;
        check_positive("LevyRand::new", "scale", scale)?;
        Ok(LevyRand {
            location,
            scale,
            pdf_coef: 0.5 * (scale.ln() - std::f64::consts::LN_2 - LN_PI),
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

    pub fn set_location(&mut self, location: f64) -> Result<()> {
        *self = Self::new(location, self.scale)?;
        Ok(())
    }

    pub fn set_scale(&mut self, scale: f64) -> Result<()> {
        *self = Self::new(self.location, scale)?;
        Ok(())
    }

    /// `(1 + 3γ + ln(16πσ²)) / 2`
    pub fn entropy(&self) -> f64 {
        let ln_16pi_s2 = 16f64.ln() + LN_PI + 2.0 * self.scale.ln();
        0.5 * (1.0 + 3.0 * EULER_MASCHERONI + ln_16pi_s2)
    }

    /// Scale MLE with the location fixed: `σ = n / Σ 1/(x - μ)`.
    ///
    /// Every value must lie strictly above the location.
    pub fn fit_scale_mle(&mut self, sample: &[f64]) -> Result<()> {
        check_sample_above("LevyRand::fit_scale_mle", sample, 1, self.location)?;
        let inv_sum: f64 = sample.iter().map(|&x| 1.0 / (x - self.location)).sum();
        let scale = sample.len() as f64 / inv_sum;
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(DistributionError::WrongReturn(format!(
                "LevyRand::fit_scale_mle => estimated scale {} is not positive",
                scale
            )));
        }
        self.set_scale(scale)
    }

    /// `sqrt(σ / 2(x - μ))` for `x > μ`.
    #[inline]
    fn erf_arg(&self, x: f64) -> f64 {
        (0.5 * self.scale / (x - self.location)).sqrt()
    }
}

impl Default for LevyRand {
    fn default() -> Self {
        LevyRand {
            location: 0.0,
            scale: 1.0,
            pdf_coef: -0.5 * (std::f64::consts::LN_2 + LN_PI),
        }
    }
}

impl ContinuousDistribution for LevyRand {
    fn min_value(&self) -> f64 {
        self.location
    }

    fn max_value(&self) -> f64 {
        f64::INFINITY
    }

    fn pdf(&self, x: f64) -> f64 {
        if x <= self.location {
            return 0.0;
        }
        self.log_pdf(x).exp()
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x <= self.location {
            return f64::NEG_INFINITY;
        }
        let y = x - self.location;
        self.pdf_coef - 0.5 * self.scale / y - 1.5 * y.ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.location {
            return 0.0;
        }
        erfc(self.erf_arg(x))
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= self.location {
            return 1.0;
        }
        erf(self.erf_arg(x))
    }

    fn quantile_interior(&self, p: f64) -> Result<f64> {
        let z = erfc_inv(p);
        Ok(self.location + 0.5 * self.scale / (z * z))
    }

    fn quantile_1m_interior(&self, q: f64) -> Result<f64> {
        let z = erf_inv(q);
        Ok(self.location + 0.5 * self.scale / (z * z))
    }

    fn variate(&self, src: &mut dyn UniformSource) -> f64 {
        let z = standard_normal(src);
        self.location + self.scale / (z * z)
    }

    fn mean(&self) -> f64 {
        f64::INFINITY
    }

    fn variance(&self) -> f64 {
        f64::INFINITY
    }

    fn mode(&self) -> f64 {
        self.location + self.scale / 3.0
    }

    fn skewness(&self) -> f64 {
        f64::NAN
    }

    fn excess_kurtosis(&self) -> f64 {
        f64::NAN
    }

    /// `exp(iμt - sqrt(-2iσt))`
    fn cf(&self, t: f64) -> Complex64 {
        if t == 0.0 {
            return Complex64::new(1.0, 0.0);
        }
        let root = Complex64::new(0.0, -2.0 * self.scale * t).sqrt();
        (Complex64::new(0.0, self.location * t) - root).exp()
    }
}
