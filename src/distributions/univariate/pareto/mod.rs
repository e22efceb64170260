// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Pareto Distribution** - *Power-Law Tail Above a Minimum*
//!
//! Shape `α > 0` and minimum `x_m > 0`, supported on `[x_m, ∞)`:
//!
//! `f(x) = α x_m^α / x^{α+1}`, `S(x) = (x_m / x)^α`.
//!
//! Moments of order `k` exist only for `α > k` and are reported as `+∞` otherwise.

use num_complex::Complex64;

use crate::config::CF_QUADRATURE_PANELS;
use crate::distributions::shared::quadrature::cf_by_quantile;
use crate::distributions::shared::sampler::standard_exponential;
use crate::errors::{DistributionError, Result, check_positive};
use crate::traits::distribution::ContinuousDistribution;
use crate::traits::uniform_source::UniformSource;
use crate::utils::check_positive_sample;

/// Pareto (type I) distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct ParetoRand {
    shape: f64,
    minimum: f64,
    log_minimum: f64,
}

impl ParetoRand {
    pub fn new(shape: f64, minimum: f64) -> Result<Self> {
        check_positive("ParetoRand::new", "shape", shape)?;
        check_positive("ParetoRand::new", "minimum", minimum)?;
        Ok(ParetoRand {
            shape,
            minimum,
            log_minimum: minimum.ln(),
        })
    }

    #[inline]
    pub fn shape(&self) -> f64 {
        self.shape
    }

    #[inline]
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn set_parameters(&mut self, shape: f64, minimum: f64) -> Result<()> {
        *self = Self::new(shape, minimum)?;
        Ok(())
    }

    pub fn set_shape(&mut self, shape: f64) -> Result<()> {
        check_positive("ParetoRand::set_shape", "shape", shape)?;
        self.shape = shape;
        Ok(())
    }

    pub fn set_minimum(&mut self, minimum: f64) -> Result<()> {
        self.set_parameters(self.shape, minimum)
    }

    /// `ln(x_m / α) + 1/α + 1`
    pub fn entropy(&self) -> f64 {
        self.log_minimum - self.shape.ln() + 1.0 / self.shape + 1.0
    }

    /// Joint MLE: `x_m = min x`, `α = n / Σ ln(x / x_m)`.
    pub fn fit_mle(&mut self, sample: &[f64]) -> Result<()> {
        check_positive_sample("ParetoRand::fit_mle", sample, 1)?;
        let minimum = sample.iter().copied().fold(f64::INFINITY, f64::min);
        let shape = Self::shape_mle("ParetoRand::fit_mle", sample, minimum)?;
        self.set_parameters(shape, minimum)
    }

    /// Shape MLE with the minimum held fixed. Every value must be at least `x_m`.
    pub fn fit_shape_mle(&mut self, sample: &[f64]) -> Result<()> {
        check_positive_sample("ParetoRand::fit_shape_mle", sample, 1)?;
        if let Some(&bad) = sample.iter().find(|&&x| x < self.minimum) {
            return Err(DistributionError::WrongSample(format!(
                "ParetoRand::fit_shape_mle => sample value {} is below the minimum {}",
                bad, self.minimum
            )));
        }
        let shape = Self::shape_mle("ParetoRand::fit_shape_mle", sample, self.minimum)?;
        self.set_shape(shape)
    }

    fn shape_mle(fname: &str, sample: &[f64], minimum: f64) -> Result<f64> {
        let log_min = minimum.ln();
        let spread: f64 = sample.iter().map(|&x| x.ln() - log_min).sum();
        if !(spread > 0.0) {
            return Err(DistributionError::NotApplicable(format!(
                "{} => every value equals the minimum, shape is unbounded",
                fname
            )));
        }
        Ok(sample.len() as f64 / spread)
    }
}

impl Default for ParetoRand {
    fn default() -> Self {
        ParetoRand {
            shape: 1.0,
            minimum: 1.0,
            log_minimum: 0.0,
        }
    }
}

impl ContinuousDistribution for ParetoRand {
    fn min_value(&self) -> f64 {
        self.minimum
    }

    fn max_value(&self) -> f64 {
        f64::INFINITY
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < self.minimum {
            return 0.0;
        }
        self.log_pdf(x).exp()
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x < self.minimum {
            return f64::NEG_INFINITY;
        }
        let a = self.shape;
        a.ln() + a * self.log_minimum - (a + 1.0) * x.ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.minimum {
            return 0.0;
        }
        -(self.shape * (self.log_minimum - x.ln())).exp_m1()
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= self.minimum {
            return 1.0;
        }
        (self.shape * (self.log_minimum - x.ln())).exp()
    }

    fn log_sf(&self, x: f64) -> f64 {
        if x <= self.minimum {
            return 0.0;
        }
        self.shape * (self.log_minimum - x.ln())
    }

    fn quantile_interior(&self, p: f64) -> Result<f64> {
        Ok(self.minimum * (-(-p).ln_1p() / self.shape).exp())
    }

    fn quantile_1m_interior(&self, q: f64) -> Result<f64> {
        Ok(self.minimum * (-q.ln() / self.shape).exp())
    }

    fn variate(&self, src: &mut dyn UniformSource) -> f64 {
        if self.shape == 1.0 {
            self.minimum / src.standard_uniform()
        } else if self.shape == 2.0 {
            self.minimum / src.standard_uniform().sqrt()
        } else {
            self.minimum * (standard_exponential(src) / self.shape).exp()
        }
    }

    fn mean(&self) -> f64 {
        let a = self.shape;
        if a > 1.0 {
            a * self.minimum / (a - 1.0)
        } else {
            f64::INFINITY
        }
    }

    fn variance(&self) -> f64 {
        let a = self.shape;
        if a > 2.0 {
            let am1 = a - 1.0;
            self.minimum * self.minimum * a / (am1 * am1 * (a - 2.0))
        } else {
            f64::INFINITY
        }
    }

    fn mode(&self) -> f64 {
        self.minimum
    }

    fn skewness(&self) -> f64 {
        let a = self.shape;
        if a > 3.0 {
            2.0 * (1.0 + a) / (a - 3.0) * ((a - 2.0) / a).sqrt()
        } else {
            f64::INFINITY
        }
    }

    fn excess_kurtosis(&self) -> f64 {
        let a = self.shape;
        if a > 4.0 {
            6.0 * (a * a * a + a * a - 6.0 * a - 2.0) / (a * (a - 3.0) * (a - 4.0))
        } else {
            f64::INFINITY
        }
    }

    /// Quadrature over the upper-tail level `q`, where `Q(1 - q) = x_m q^{-1/α}`.
    fn cf(&self, t: f64) -> Complex64 {
        if t == 0.0 {
            return Complex64::new(1.0, 0.0);
        }
        let inv_shape = 1.0 / self.shape;
        let xm = self.minimum;
        cf_by_quantile(|q| xm * q.powf(-inv_shape), t, CF_QUADRATURE_PANELS)
    }
}
