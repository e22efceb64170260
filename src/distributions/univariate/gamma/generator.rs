// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Gamma Variate Generators** - *Regime-Selected Rejection and Transform Samplers*
//!
//! No single gamma sampler is best across the whole shape axis, so the shape line is cut
//! into an ordered, non-overlapping partition and each piece gets its own algorithm.
//! Selection is a pure function of the shape, evaluated once per parameter change and
//! cached as a [`GeneratorRegime`] carrying every constant the sampler needs.
//!
//! | shape α                      | algorithm                         | expected rounds per variate |
//! |------------------------------|-----------------------------------|-----------------------------|
//! | α < 0.34                     | Best RGS                          | ≤ 1.4                       |
//! | α ∈ {1, 2, 3}                | sum of α exponentials             | exact, α draws              |
//! | α = 1.5                      | Exp(1) + N(0,1)² / 2              | exact                       |
//! | 1 < α < 1.2                  | Fishman                           | ≤ 1.1                       |
//! | everything else              | Marsaglia–Tsang (α < 1: boosted)  | ≤ 1.05                      |
//!
//! The unit-rate static entry point uses Ahrens–Dieter GS for small shapes, since it has no
//! cache to hold Best's constants (≤ 1.39 expected rounds).

use std::f64::consts::E;

use crate::config::{FISHMAN_UPPER, MAX_INTEGER_SHAPE, SMALL_SHAPE_THRESHOLD};
use crate::distributions::shared::sampler::{accept_reject, standard_exponential, standard_normal};
use crate::distributions::univariate::gamma::GammaRand;
use crate::errors::{Result, check_positive};
use crate::traits::uniform_source::UniformSource;

/// Which algorithm a [`GeneratorRegime`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    IntegerShape,
    ShapeOneAndHalf,
    SmallShape,
    Fishman,
    MarsagliaTsang,
}

/// Cached sampler selection for one shape value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneratorRegime {
    /// Sum of `n` standard exponentials.
    IntegerShape { n: u32 },
    /// Exponential plus half a squared standard normal.
    ShapeOneAndHalf,
    /// Best's RGS with breakpoint `t` and mixing constant `b`.
    SmallShape { t: f64, b: f64, inv_shape: f64 },
    /// Fishman's exponential envelope.
    Fishman { shape_m1: f64 },
    /// Marsaglia–Tsang; `boost` holds `1/α` when α < 1 and the draw is run at α + 1.
    MarsagliaTsang { d: f64, c: f64, boost: Option<f64> },
}

impl GeneratorRegime {
    /// Maps a valid shape to its regime. First match wins.
    pub fn select(shape: f64) -> Self {
        if shape < SMALL_SHAPE_THRESHOLD {
            let t = 0.07 + 0.75 * (1.0 - shape).sqrt();
            let b = 1.0 + (-t).exp() * shape / t;
            GeneratorRegime::SmallShape { t, b, inv_shape: 1.0 / shape }
        } else if shape <= MAX_INTEGER_SHAPE && shape.fract() == 0.0 {
            GeneratorRegime::IntegerShape { n: shape as u32 }
        } else if shape == 1.5 {
            GeneratorRegime::ShapeOneAndHalf
        } else if shape > 1.0 && shape < FISHMAN_UPPER {
            GeneratorRegime::Fishman { shape_m1: shape - 1.0 }
        } else {
            let boosted = shape < 1.0;
            let a = if boosted { shape + 1.0 } else { shape };
            let d = a - 1.0 / 3.0;
            let c = 1.0 / (9.0 * d).sqrt();
            GeneratorRegime::MarsagliaTsang {
                d,
                c,
                boost: boosted.then(|| 1.0 / shape),
            }
        }
    }

    pub fn kind(&self) -> GeneratorKind {
        match self {
            GeneratorRegime::IntegerShape { .. } => GeneratorKind::IntegerShape,
            GeneratorRegime::ShapeOneAndHalf => GeneratorKind::ShapeOneAndHalf,
            GeneratorRegime::SmallShape { .. } => GeneratorKind::SmallShape,
            GeneratorRegime::Fishman { .. } => GeneratorKind::Fishman,
            GeneratorRegime::MarsagliaTsang { .. } => GeneratorKind::MarsagliaTsang,
        }
    }

    /// One unit-rate gamma variate.
    pub fn draw(&self, src: &mut dyn UniformSource) -> f64 {
        match *self {
            GeneratorRegime::IntegerShape { n } => {
                (0..n).map(|_| standard_exponential(src)).sum()
            }
            GeneratorRegime::ShapeOneAndHalf => {
                let e = standard_exponential(src);
                let z = standard_normal(src);
                e + 0.5 * z * z
            }
            GeneratorRegime::SmallShape { t, b, inv_shape } => best_rgs(src, t, b, inv_shape),
            GeneratorRegime::Fishman { shape_m1 } => fishman(src, shape_m1),
            GeneratorRegime::MarsagliaTsang { d, c, boost } => {
                let x = marsaglia_tsang(src, d, c);
                match boost {
                    Some(inv_shape) => x * src.standard_uniform().powf(inv_shape),
                    None => x,
                }
            }
        }
    }
}

/// Best (1983) RGS for α < 1.
///
/// Envelope is `x^{α-1}` on `(0, t]` and `e^{-x}` beyond, mixed in proportion `1 : b - 1`.
fn best_rgs(src: &mut dyn UniformSource, t: f64, b: f64, inv_shape: f64) -> f64 {
    let shape = 1.0 / inv_shape;
    accept_reject(src, |s| {
        let v = b * s.standard_uniform();
        let w = s.standard_uniform();
        if v <= 1.0 {
            let x = t * v.powf(inv_shape);
            if w <= (2.0 - x) / (2.0 + x) || w <= (-x).exp() {
                return Some(x);
            }
        } else {
            let x = -(t * (b - v) / shape).ln();
            let y = x / t;
            if w * (shape + y - shape * y) <= 1.0 || w <= y.powf(shape - 1.0) {
                return Some(x);
            }
        }
        None
    })
}

/// Ahrens–Dieter GS for α < 1.
fn ahrens_dieter(src: &mut dyn UniformSource, shape: f64) -> f64 {
    let b = (E + shape) / E;
    let inv_shape = 1.0 / shape;
    accept_reject(src, |s| {
        let p = b * s.standard_uniform();
        let e = standard_exponential(s);
        if p <= 1.0 {
            let x = p.powf(inv_shape);
            (e >= x).then_some(x)
        } else {
            let x = -((b - p) / shape).ln();
            (e >= (1.0 - shape) * x.ln()).then_some(x)
        }
    })
}

/// Fishman's algorithm for α slightly above 1: accept `α E₁` when
/// `E₂ >= (α - 1)(E₁ - ln E₁ - 1)`.
fn fishman(src: &mut dyn UniformSource, shape_m1: f64) -> f64 {
    accept_reject(src, |s| {
        let e1 = standard_exponential(s);
        let e2 = standard_exponential(s);
        (e2 >= shape_m1 * (e1 - e1.ln() - 1.0)).then_some((shape_m1 + 1.0) * e1)
    })
}

/// Marsaglia–Tsang with squeeze, for `d = α - 1/3` and `c = 1/√(9d)`.
fn marsaglia_tsang(src: &mut dyn UniformSource, d: f64, c: f64) -> f64 {
    accept_reject(src, |s| {
        let x = standard_normal(s);
        let one_plus_cx = 1.0 + c * x;
        if one_plus_cx <= 0.0 {
            return None;
        }
        let v = one_plus_cx * one_plus_cx * one_plus_cx;
        let u = s.standard_uniform();
        let x2 = x * x;
        // Squeeze step
        if u < 1.0 - 0.0331 * x2 * x2 {
            return Some(d * v);
        }
        // Log acceptance step
        (u.ln() < 0.5 * x2 + d * (1.0 - v + v.ln())).then_some(d * v)
    })
}

impl GammaRand {
    /// One Γ(shape, 1) variate without constructing a distribution.
    pub fn standard_variate(shape: f64, src: &mut dyn UniformSource) -> Result<f64> {
        check_positive("GammaRand::standard_variate", "shape", shape)?;
        if shape < SMALL_SHAPE_THRESHOLD {
            return Ok(ahrens_dieter(src, shape));
        }
        Ok(GeneratorRegime::select(shape).draw(src))
    }

    /// One Γ(shape, rate) variate without constructing a distribution.
    pub fn variate_with(shape: f64, rate: f64, src: &mut dyn UniformSource) -> Result<f64> {
        check_positive("GammaRand::variate_with", "rate", rate)?;
        Ok(Self::standard_variate(shape, src)? / rate)
    }
}
