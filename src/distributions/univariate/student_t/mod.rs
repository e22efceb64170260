// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Student-t Distribution** - *Location-Scale t with Real Degrees of Freedom*
//!
//! Degrees `ν > 0`, location `μ` and scale `σ > 0`:
//!
//! `f(x) = Γ((ν+1)/2) / (σ sqrt(νπ) Γ(ν/2)) · (1 + z²/ν)^{-(ν+1)/2}`, `z = (x - μ)/σ`.
//!
//! Tails go through the regularised incomplete beta function,
//! `S(z) = I_{ν/(ν+z²)}(ν/2, 1/2) / 2` for `z >= 0`, with closed forms for `ν = 1`
//! (Cauchy) and `ν = 2`. Quantiles are closed form for `ν ∈ {1, 2, 4}` and otherwise solved
//! on the log of the tail probability.

use log::trace;
use num_complex::Complex64;
use statrs::function::beta::beta_reg;
use statrs::function::gamma::{digamma, ln_gamma};

use crate::distributions::shared::constants::LN_PI;
use crate::distributions::shared::sampler::standard_normal;
use crate::distributions::shared::scalar::{ln_bessel_k, normal_quantile};
use crate::distributions::shared::solver::{SolverOptions, newton_bisect};
use crate::distributions::univariate::gamma::generator::GeneratorRegime;
use crate::errors::{Result, check_finite, check_positive};
use crate::traits::distribution::ContinuousDistribution;
use crate::traits::uniform_source::UniformSource;

#[derive(Debug, Clone, Copy, PartialEq)]
struct StudentTCache {
    /// `ln Γ((ν+1)/2) - ln Γ(ν/2) - ln(νπ)/2`, the log density of the standard t at 0.
    ln_norm: f64,
    log_scale: f64,
    /// Sampler for `χ²_ν / 2 ~ Γ(ν/2, 1)`.
    chi_regime: GeneratorRegime,
}

impl StudentTCache {
    fn new(degrees: f64, scale: f64) -> Self {
        let half = 0.5 * degrees;
        StudentTCache {
            ln_norm: ln_gamma(half + 0.5) - ln_gamma(half) - 0.5 * (degrees.ln() + LN_PI),
            log_scale: scale.ln(),
            chi_regime: GeneratorRegime::select(half),
        }
    }
}

/// Student-t distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentTRand {
    degrees: f64,
    location: f64,
    scale: f64,
    cache: StudentTCache,
}

impl StudentTRand {
    pub fn new(degrees: f64, location: f64, scale: f64) -> Result<Self> {
        check_positive("StudentTRand::new", "degrees", degrees)?;
        check_finite("StudentTRand::new", "location", location)?;
        check_positive("StudentTRand::new", "scale", scale)?;
        Ok(StudentTRand {
            degrees,
            location,
            scale,
            cache: StudentTCache::new(degrees, scale),
        })
    }

    /// Standard t with `ν` degrees of freedom.
    pub fn standard(degrees: f64) -> Result<Self> {
        Self::new(degrees, 0.0, 1.0)
    }

    #[inline]
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    #[inline]
    pub fn location(&self) -> f64 {
        self.location
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_parameters(&mut self, degrees: f64, location: f64, scale: f64) -> Result<()> {
        *self = Self::new(degrees, location, scale)?;
        Ok(())
    }

    pub fn set_degrees(&mut self, degrees: f64) -> Result<()> {
        self.set_parameters(degrees, self.location, self.scale)
    }

    pub fn set_location(&mut self, location: f64) -> Result<()> {
        check_finite("StudentTRand::set_location", "location", location)?;
        self.location = location;
        Ok(())
    }

    pub fn set_scale(&mut self, scale: f64) -> Result<()> {
        self.set_parameters(self.degrees, self.location, scale)
    }

    /// `(ν+1)/2 [ψ((ν+1)/2) - ψ(ν/2)] + ln(sqrt(ν) B(ν/2, 1/2)) + ln σ`
    pub fn entropy(&self) -> f64 {
        let half = 0.5 * self.degrees;
        // ln(sqrt(ν) B(ν/2, 1/2)) is exactly -ln_norm
        (half + 0.5) * (digamma(half + 0.5) - digamma(half)) - self.cache.ln_norm
            + self.cache.log_scale
    }

    #[inline]
    fn standardise(&self, x: f64) -> f64 {
        (x - self.location) / self.scale
    }

    #[inline]
    fn ln_standard_pdf(&self, z: f64) -> f64 {
        self.cache.ln_norm - 0.5 * (self.degrees + 1.0) * (z * z / self.degrees).ln_1p()
    }

    /// `P(T > z)` for the standard t and `z >= 0`.
    fn upper_tail(&self, z: f64) -> f64 {
        if z.is_nan() {
            return f64::NAN;
        }
        let nu = self.degrees;
        if nu == 1.0 {
            return 1.0_f64.atan2(z) / std::f64::consts::PI;
        }
        if nu == 2.0 {
            let r = (2.0 + z * z).sqrt();
            return 1.0 / (r * (r + z));
        }
        let z2 = z * z;
        if z2 < nu {
            // P(|T| < z) = I_{z²/(ν+z²)}(1/2, ν/2); 1/(1+z²/ν) would round to 1 near z = 0
            return 0.5 - 0.5 * beta_reg(0.5, 0.5 * nu, z2 / (nu + z2));
        }
        0.5 * beta_reg(0.5 * nu, 0.5, nu / (nu + z2))
    }

    /// Standard `z` with `P(T > z) = q`, for `q` in `(0, 1)`.
    fn standard_quantile_upper(&self, q: f64) -> Result<f64> {
        let nu = self.degrees;
        if nu == 1.0 {
            // 1 - q is exact for q >= 1/2
            return Ok(if q > 0.5 {
                -1.0 / (std::f64::consts::PI * (1.0 - q)).tan()
            } else {
                1.0 / (std::f64::consts::PI * q).tan()
            });
        }
        if nu == 2.0 {
            return Ok((1.0 - 2.0 * q) / (2.0 * q * (1.0 - q)).sqrt());
        }
        if nu == 4.0 {
            let a = 4.0 * q * (1.0 - q);
            let root_a = a.sqrt();
            let c = (root_a.acos() / 3.0).cos() / root_a;
            let z = 2.0 * (c - 1.0).max(0.0).sqrt();
            return Ok(if q < 0.5 { z } else { -z });
        }
        if q == 0.5 {
            return Ok(0.0);
        }
        if q > 0.5 {
            return Ok(-self.standard_quantile_upper(1.0 - q)?);
        }

        let x0 = self.upper_quantile_guess(q);
        let ln_q = q.ln();
        trace!("student-t quantile: nu {}, q {}, start {}", nu, q, x0);
        newton_bisect(
            |z| {
                let ln_sf = self.upper_tail(z).ln();
                let slope = (self.ln_standard_pdf(z) - ln_sf).exp();
                (ln_q - ln_sf, slope)
            },
            x0,
            0.0,
            f64::INFINITY,
            &SolverOptions::default(),
        )
    }

    /// Start for `q < 1/2`: Cornish–Fisher from the normal quantile, or the power-law tail
    /// `S(z) ≈ K ν^{(ν-1)/2} z^{-ν}` for heavy tails far out.
    fn upper_quantile_guess(&self, q: f64) -> f64 {
        let nu = self.degrees;
        if nu < 5.0 && q < 0.05 {
            let ln_z = (self.cache.ln_norm + 0.5 * (nu - 1.0) * nu.ln() - q.ln()) / nu;
            return ln_z.exp();
        }
        let z = -normal_quantile(q);
        let z3 = z * z * z;
        z + (z3 + z) / (4.0 * nu) + (5.0 * z3 * z * z + 16.0 * z3 + 3.0 * z) / (96.0 * nu * nu)
    }
}

impl Default for StudentTRand {
    fn default() -> Self {
        StudentTRand {
            degrees: 1.0,
            location: 0.0,
            scale: 1.0,
            cache: StudentTCache::new(1.0, 1.0),
        }
    }
}

impl ContinuousDistribution for StudentTRand {
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
        self.ln_standard_pdf(self.standardise(x)) - self.cache.log_scale
    }

    fn cdf(&self, x: f64) -> f64 {
        let z = self.standardise(x);
        if z < 0.0 {
            self.upper_tail(-z)
        } else {
            1.0 - self.upper_tail(z)
        }
    }

    fn sf(&self, x: f64) -> f64 {
        let z = self.standardise(x);
        if z > 0.0 {
            self.upper_tail(z)
        } else {
            1.0 - self.upper_tail(-z)
        }
    }

    fn log_cdf(&self, x: f64) -> f64 {
        let z = self.standardise(x);
        if z < 0.0 {
            self.upper_tail(-z).ln()
        } else {
            (-self.upper_tail(z)).ln_1p()
        }
    }

    fn log_sf(&self, x: f64) -> f64 {
        let z = self.standardise(x);
        if z > 0.0 {
            self.upper_tail(z).ln()
        } else {
            (-self.upper_tail(-z)).ln_1p()
        }
    }

    fn quantile_interior(&self, p: f64) -> Result<f64> {
        Ok(self.location - self.scale * self.standard_quantile_upper(p)?)
    }

    fn quantile_1m_interior(&self, q: f64) -> Result<f64> {
        Ok(self.location + self.scale * self.standard_quantile_upper(q)?)
    }

    fn variate(&self, src: &mut dyn UniformSource) -> f64 {
        let t = if self.degrees == 1.0 {
            (std::f64::consts::PI * (src.standard_uniform() - 0.5)).tan()
        } else {
            let z = standard_normal(src);
            let half_chi = self.cache.chi_regime.draw(src);
            z / (2.0 * half_chi / self.degrees).sqrt()
        };
        self.location + self.scale * t
    }

    fn mean(&self) -> f64 {
        if self.degrees > 1.0 {
            self.location
        } else {
            f64::NAN
        }
    }

    fn variance(&self) -> f64 {
        let nu = self.degrees;
        if nu > 2.0 {
            self.scale * self.scale * nu / (nu - 2.0)
        } else if nu > 1.0 {
            f64::INFINITY
        } else {
            f64::NAN
        }
    }

    fn mode(&self) -> f64 {
        self.location
    }

    fn skewness(&self) -> f64 {
        if self.degrees > 3.0 { 0.0 } else { f64::NAN }
    }

    fn excess_kurtosis(&self) -> f64 {
        let nu = self.degrees;
        if nu > 4.0 {
            6.0 / (nu - 4.0)
        } else if nu > 2.0 {
            f64::INFINITY
        } else {
            f64::NAN
        }
    }

    /// `K_{ν/2}(s) s^{ν/2} / (Γ(ν/2) 2^{ν/2-1}) · e^{iμt}` with `s = sqrt(ν) σ|t|`.
    fn cf(&self, t: f64) -> Complex64 {
        if t == 0.0 {
            return Complex64::new(1.0, 0.0);
        }
        let half = 0.5 * self.degrees;
        let s = self.degrees.sqrt() * self.scale * t.abs();
        let ln_mod = ln_bessel_k(half, s) + half * s.ln()
            - ln_gamma(half)
            - (half - 1.0) * std::f64::consts::LN_2;
        Complex64::from_polar(ln_mod.exp(), self.location * t)
    }
}
