// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Laplace Distribution** - *Asymmetric Double-Exponential Family*
//!
//! Shift `m`, scale `σ > 0` and asymmetry `κ > 0`:
//!
//! - `f(x) = 1/(σ(κ + 1/κ)) · exp(-κ(x - m)/σ)` for `x >= m`
//! - `f(x) = 1/(σ(κ + 1/κ)) · exp((x - m)/(σκ))` for `x < m`
//!
//! `κ = 1` is the classical symmetric Laplace with `f(x) = exp(-|x - m|/σ) / 2σ`.
//! A fraction `κ²/(1 + κ²)` of the mass lies left of the shift.

use num_complex::Complex64;

use crate::distributions::shared::sampler::standard_exponential;
use crate::errors::{DistributionError, Result, check_finite, check_positive};
use crate::traits::distribution::ContinuousDistribution;
use crate::traits::uniform_source::UniformSource;
use crate::utils::{
    check_finite_sample, sample_mean, sample_variance, sorted_copy, sorted_quantile,
};

#[derive(Debug, Clone, Copy, PartialEq)]
struct LaplaceCache {
    /// `κ²/(1 + κ²)`, the probability mass left of the shift.
    left_mass: f64,
    /// `ln(σ(κ + 1/κ))`
    log_norm: f64,
}

impl LaplaceCache {
    fn new(scale: f64, asymmetry: f64) -> Self {
        let k2 = asymmetry * asymmetry;
        LaplaceCache {
            left_mass: k2 / (1.0 + k2),
            log_norm: (scale * (asymmetry + 1.0 / asymmetry)).ln(),
        }
    }
}

/// Asymmetric Laplace distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct LaplaceRand {
    shift: f64,
    scale: f64,
    asymmetry: f64,
    cache: LaplaceCache,
}

impl LaplaceRand {
    /// Symmetric Laplace with location `shift` and scale `scale`.
    pub fn new(shift: f64, scale: f64) -> Result<Self> {
        Self::asymmetric(shift, scale, 1.0)
    }

    pub fn asymmetric(shift: f64, scale: f64, asymmetry: f64) -> Result<Self> {
        check_finite("LaplaceRand::new", "shift", shift)?;
        check_positive("LaplaceRand::new", "scale", scale)?;
        check_positive("LaplaceRand::new", "asymmetry", asymmetry)?;
        Ok(LaplaceRand {
            shift,
            scale,
            asymmetry,
            cache: LaplaceCache::new(scale, asymmetry),
        })
    }

    #[inline]
    pub fn shift(&self) -> f64 {
        self.shift
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn asymmetry(&self) -> f64 {
        self.asymmetry
    }

    pub fn set_parameters(&mut self, shift: f64, scale: f64, asymmetry: f64) -> Result<()> {
        *self = Self::asymmetric(shift, scale, asymmetry)?;
        Ok(())
    }

    pub fn set_shift(&mut self, shift: f64) -> Result<()> {
        check_finite("LaplaceRand::set_shift", "shift", shift)?;
        self.shift = shift;
        Ok(())
    }

    pub fn set_scale(&mut self, scale: f64) -> Result<()> {
        self.set_parameters(self.shift, scale, self.asymmetry)
    }

    pub fn set_asymmetry(&mut self, asymmetry: f64) -> Result<()> {
        self.set_parameters(self.shift, self.scale, asymmetry)
    }

    /// Differential entropy `1 + ln(σ(1 + κ²)/κ)`.
    pub fn entropy(&self) -> f64 {
        1.0 + self.cache.log_norm
    }

    /// Shift MLE with scale and asymmetry fixed: the sample quantile of level `κ²/(1 + κ²)`.
    pub fn fit_location_mle(&mut self, sample: &[f64]) -> Result<()> {
        check_finite_sample("LaplaceRand::fit_location_mle", sample, 1)?;
        let sorted = sorted_copy(sample);
        self.set_shift(sorted_quantile(&sorted, self.cache.left_mass))
    }

    /// Scale MLE with shift and asymmetry fixed:
    /// `σ = (κ Σ(x - m)⁺ + Σ(m - x)⁺ / κ) / n`.
    pub fn fit_scale_mle(&mut self, sample: &[f64]) -> Result<()> {
        check_finite_sample("LaplaceRand::fit_scale_mle", sample, 1)?;
        let scale = self.scale_mle(sample, self.shift);
        self.accept_scale("LaplaceRand::fit_scale_mle", scale)
    }

    /// Joint shift and scale MLE with the asymmetry fixed.
    pub fn fit_location_and_scale_mle(&mut self, sample: &[f64]) -> Result<()> {
        check_finite_sample("LaplaceRand::fit_location_and_scale_mle", sample, 1)?;
        let sorted = sorted_copy(sample);
        let shift = sorted_quantile(&sorted, self.cache.left_mass);
        let scale = self.scale_mle(sample, shift);
        if !(scale > 0.0) {
            return Err(DistributionError::WrongReturn(
                "LaplaceRand::fit_location_and_scale_mle => sample has no spread".into(),
            ));
        }
        self.set_parameters(shift, scale, self.asymmetry)
    }

    /// Shift by moments with scale and asymmetry fixed: `m = x̄ - σ(1/κ - κ)`.
    pub fn fit_location_mm(&mut self, sample: &[f64]) -> Result<()> {
        check_finite_sample("LaplaceRand::fit_location_mm", sample, 1)?;
        let k = self.asymmetry;
        self.set_shift(sample_mean(sample) - self.scale * (1.0 / k - k))
    }

    /// Scale by moments with the asymmetry fixed: `σ² = s² / (1/κ² + κ²)`.
    pub fn fit_scale_mm(&mut self, sample: &[f64]) -> Result<()> {
        check_finite_sample("LaplaceRand::fit_scale_mm", sample, 2)?;
        let k2 = self.asymmetry * self.asymmetry;
        let var = sample_variance(sample, sample_mean(sample));
        let scale = (var / (1.0 / k2 + k2)).sqrt();
        self.accept_scale("LaplaceRand::fit_scale_mm", scale)
    }

    fn scale_mle(&self, sample: &[f64], shift: f64) -> f64 {
        let k = self.asymmetry;
        let (mut right, mut left) = (0.0, 0.0);
        for &x in sample {
            if x > shift {
                right += x - shift;
            } else {
                left += shift - x;
            }
        }
        (k * right + left / k) / sample.len() as f64
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
}

impl Default for LaplaceRand {
    fn default() -> Self {
        LaplaceRand {
            shift: 0.0,
            scale: 1.0,
            asymmetry: 1.0,
            cache: LaplaceCache::new(1.0, 1.0),
        }
    }
}

impl ContinuousDistribution for LaplaceRand {
    fn min_value(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn max_value(&self) -> f64 {
        f64::INFINITY
    }

    fn pdf(&self, x: f64) -> f64 {
        self.log_pdf(x).exp()
    }

    fn log_pdf(&self, x: f64) -> f64 {
        let y = (x - self.shift) / self.scale;
        let k = self.asymmetry;
        let e = if y >= 0.0 { -k * y } else { y / k };
        e - self.cache.log_norm
    }

    fn cdf(&self, x: f64) -> f64 {
        let y = (x - self.shift) / self.scale;
        let k = self.asymmetry;
        if y < 0.0 {
            self.cache.left_mass * (y / k).exp()
        } else {
            1.0 - (1.0 - self.cache.left_mass) * (-k * y).exp()
        }
    }

    fn sf(&self, x: f64) -> f64 {
        let y = (x - self.shift) / self.scale;
        let k = self.asymmetry;
        if y < 0.0 {
            1.0 - self.cache.left_mass * (y / k).exp()
        } else {
            (1.0 - self.cache.left_mass) * (-k * y).exp()
        }
    }

    fn log_cdf(&self, x: f64) -> f64 {
        let y = (x - self.shift) / self.scale;
        if y < 0.0 {
            self.cache.left_mass.ln() + y / self.asymmetry
        } else {
            self.cdf(x).ln()
        }
    }

    fn log_sf(&self, x: f64) -> f64 {
        let y = (x - self.shift) / self.scale;
        if y >= 0.0 {
            (1.0 - self.cache.left_mass).ln() - self.asymmetry * y
        } else {
            self.sf(x).ln()
        }
    }

    fn quantile_interior(&self, p: f64) -> Result<f64> {
        let k = self.asymmetry;
        let left = self.cache.left_mass;
        let y = if p < left {
            k * (p / left).ln()
        } else {
            -((1.0 - p) / (1.0 - left)).ln() / k
        };
        Ok(self.shift + self.scale * y)
    }

    fn quantile_1m_interior(&self, q: f64) -> Result<f64> {
        let k = self.asymmetry;
        let left = self.cache.left_mass;
        let y = if q <= 1.0 - left {
            -(q / (1.0 - left)).ln() / k
        } else {
            k * ((1.0 - q) / left).ln()
        };
        Ok(self.shift + self.scale * y)
    }

    fn variate(&self, src: &mut dyn UniformSource) -> f64 {
        let k = self.asymmetry;
        let e1 = standard_exponential(src);
        let e2 = standard_exponential(src);
        self.shift + self.scale * (e1 / k - k * e2)
    }

    fn mean(&self) -> f64 {
        let k = self.asymmetry;
        self.shift + self.scale * (1.0 / k - k)
    }

    fn variance(&self) -> f64 {
        let k2 = self.asymmetry * self.asymmetry;
        self.scale * self.scale * (1.0 / k2 + k2)
    }

    fn mode(&self) -> f64 {
        self.shift
    }

    fn skewness(&self) -> f64 {
        let k2 = self.asymmetry * self.asymmetry;
        let k4 = k2 * k2;
        2.0 * (1.0 - k4 * k2) / (k4 + 1.0).powf(1.5)
    }

    fn excess_kurtosis(&self) -> f64 {
        let k4 = self.asymmetry.powi(4);
        6.0 * (1.0 + k4 * k4) / ((1.0 + k4) * (1.0 + k4))
    }

    /// `e^{imt} / (1 + σ²t² - iσt(1/κ - κ))`
    fn cf(&self, t: f64) -> Complex64 {
        if t == 0.0 {
            return Complex64::new(1.0, 0.0);
        }
        let k = self.asymmetry;
        let st = self.scale * t;
        let denom = Complex64::new(1.0 + st * st, -st * (1.0 / k - k));
        Complex64::from_polar(1.0, self.shift * t) / denom
    }
}
