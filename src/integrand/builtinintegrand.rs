use std::f64::consts::PI;

use serde::Deserialize;

use crate::integrand::integrand::Integrand;

// ─────────────────────────────────────────────────────────────────────────────
// Normal densities
// ─────────────────────────────────────────────────────────────────────────────

pub struct StdNormalPdf;

impl StdNormalPdf {
    pub fn new() -> StdNormalPdf {
        StdNormalPdf
    }
}

impl Integrand for StdNormalPdf {
    fn value(&self, z: f64) -> f64 {
        (-0.5 * z * z).exp() / (2.0 * PI).sqrt()
    }
}

pub struct NormalPdf {
    mean: f64,
    std: f64
}

impl NormalPdf {
    /// `None` unless `std` is strictly positive and finite.
    pub fn new(mean: f64, std: f64) -> Option<NormalPdf> {
        if std > 0.0 && std.is_finite() {
            Some(NormalPdf { mean, std })
        } else {
            None
        }
    }

    /// Maps `x` to its standard score.
    pub fn z_score(&self, x: f64) -> f64 {
        (x - self.mean) / self.std
    }
}

impl Integrand for NormalPdf {
    fn value(&self, x: f64) -> f64 {
        StdNormalPdf.value(self.z_score(x)) / self.std
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Polynomial
// ─────────────────────────────────────────────────────────────────────────────

/// Coefficients are stored highest degree first, `[a_n, ..., a_1, a_0]`.
#[derive(Deserialize)]
pub struct Polynomial {
    coefficients: Vec<f64>
}

impl Polynomial {
    pub fn new(coefficients: Vec<f64>) -> Polynomial {
        Polynomial { coefficients }
    }

    pub fn monomial(degree: usize) -> Polynomial {
        let mut coefficients = vec![0.0; degree + 1];
        coefficients[0] = 1.0;
        Polynomial::new(coefficients)
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

impl Integrand for Polynomial {
    fn value(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .fold(0.0, |acc, &beta| f64::mul_add(acc, x, beta))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Elementary functions
// ─────────────────────────────────────────────────────────────────────────────

pub struct Sine;

impl Integrand for Sine {
    fn value(&self, x: f64) -> f64 {
        x.sin()
    }
}

pub struct Exponential;

impl Integrand for Exponential {
    fn value(&self, x: f64) -> f64 {
        x.exp()
    }
}
