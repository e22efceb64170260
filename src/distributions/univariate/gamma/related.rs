// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Named gamma special cases. Both wrap a [`GammaRand`] and only expose setters that keep
//! the special-case constraint, so they deref to the gamma read-only.

use std::ops::Deref;

use num_complex::Complex64;

use crate::distributions::univariate::gamma::GammaRand;
use crate::errors::{DistributionError, Result, check_positive};
use crate::traits::distribution::ContinuousDistribution;
use crate::traits::uniform_source::UniformSource;

/// Forwards [`ContinuousDistribution`] to the wrapped gamma.
macro_rules! delegate_to_gamma {
    ($ty:ty) => {
        impl Deref for $ty {
            type Target = GammaRand;
            fn deref(&self) -> &GammaRand {
                &self.gamma
            }
        }

        impl ContinuousDistribution for $ty {
            fn min_value(&self) -> f64 {
                self.gamma.min_value()
            }
            fn max_value(&self) -> f64 {
                self.gamma.max_value()
            }
            fn pdf(&self, x: f64) -> f64 {
                self.gamma.pdf(x)
            }
            fn log_pdf(&self, x: f64) -> f64 {
                self.gamma.log_pdf(x)
            }
            fn cdf(&self, x: f64) -> f64 {
                self.gamma.cdf(x)
            }
            fn sf(&self, x: f64) -> f64 {
                self.gamma.sf(x)
            }
            fn log_cdf(&self, x: f64) -> f64 {
                self.gamma.log_cdf(x)
            }
            fn log_sf(&self, x: f64) -> f64 {
                self.gamma.log_sf(x)
            }
            fn quantile_interior(&self, p: f64) -> Result<f64> {
                self.gamma.quantile_interior(p)
            }
            fn quantile_1m_interior(&self, q: f64) -> Result<f64> {
                self.gamma.quantile_1m_interior(q)
            }
            fn variate(&self, src: &mut dyn UniformSource) -> f64 {
                self.gamma.variate(src)
            }
            fn mean(&self) -> f64 {
                self.gamma.mean()
            }
            fn variance(&self) -> f64 {
                self.gamma.variance()
            }
            fn mode(&self) -> f64 {
                self.gamma.mode()
            }
            fn skewness(&self) -> f64 {
                self.gamma.skewness()
            }
            fn excess_kurtosis(&self) -> f64 {
                self.gamma.excess_kurtosis()
            }
            fn cf(&self, t: f64) -> Complex64 {
                self.gamma.cf(t)
            }
        }
    };
}

/// Chi-squared with `k` degrees of freedom, `Γ(k/2, 1/2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquaredRand {
    gamma: GammaRand,
}

impl ChiSquaredRand {
    pub fn new(degree: f64) -> Result<Self> {
        check_positive("ChiSquaredRand::new", "degree", degree)?;
        Ok(ChiSquaredRand {
            gamma: GammaRand::new(0.5 * degree, 0.5)?,
        })
    }

    #[inline]
    pub fn degree(&self) -> f64 {
        2.0 * self.gamma.shape()
    }

    pub fn set_degree(&mut self, degree: f64) -> Result<()> {
        check_positive("ChiSquaredRand::set_degree", "degree", degree)?;
        self.gamma.set_shape(0.5 * degree)
    }
}

delegate_to_gamma!(ChiSquaredRand);

/// Erlang: gamma with a positive integer shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ErlangRand {
    gamma: GammaRand,
}

fn check_erlang_shape(fname: &str, shape: u32) -> Result<()> {
    if shape == 0 {
        return Err(DistributionError::InvalidParameter(format!(
            "{} => shape must be a positive integer, got 0",
            fname
        )));
    }
    Ok(())
}

impl ErlangRand {
    pub fn new(shape: u32, rate: f64) -> Result<Self> {
        check_erlang_shape("ErlangRand::new", shape)?;
        Ok(ErlangRand {
            gamma: GammaRand::new(shape as f64, rate)?,
        })
    }

    #[inline]
    pub fn shape(&self) -> u32 {
        self.gamma.shape() as u32
    }

    pub fn set_shape(&mut self, shape: u32) -> Result<()> {
        check_erlang_shape("ErlangRand::set_shape", shape)?;
        self.gamma.set_shape(shape as f64)
    }

    pub fn set_rate(&mut self, rate: f64) -> Result<()> {
        self.gamma.set_rate(rate)
    }

    /// Rate MLE with the integer shape held fixed.
    pub fn fit_rate(&mut self, sample: &[f64], unbiased: bool) -> Result<()> {
        self.gamma.fit_rate(sample, unbiased)
    }
}

delegate_to_gamma!(ErlangRand);
