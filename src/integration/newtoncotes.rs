use std::fmt;
use std::str::FromStr;

use log::{
    debug,
    trace
};

use crate::integration::integrationerror::IntegrationError;
use crate::integration::samples::SampleSeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewtonCotesRule {
    Trapezoid,
    Simpson
}

impl NewtonCotesRule {
    pub fn token(&self) -> &'static str {
        match self {
            NewtonCotesRule::Trapezoid => "trap",
            NewtonCotesRule::Simpson => "simp"
        }
    }

    pub fn integrate(&self, samples: &SampleSeries) -> f64 {
        match self {
            NewtonCotesRule::Trapezoid => composite_trapezoid(samples.x(), samples.f()),
            NewtonCotesRule::Simpson => composite_simpson(samples.x(), samples.f())
        }
    }
}

/// Tokens are matched case-insensitively after trimming whitespace.
impl FromStr for NewtonCotesRule {
    type Err = IntegrationError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_lowercase().as_str() {
            "trap" => Ok(NewtonCotesRule::Trapezoid),
            "simp" => Ok(NewtonCotesRule::Simpson),
            _ => Err(IntegrationError::InvalidRule(token.to_owned()))
        }
    }
}

impl fmt::Display for NewtonCotesRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sub-interval rules
// ─────────────────────────────────────────────────────────────────────────────

fn trapezoid_step(x: &[f64], f: &[f64], i: usize) -> f64 {
    0.5 * (f[i] + f[i + 1]) * (x[i + 1] - x[i])
}

fn simpson_one_third_step(x: &[f64], f: &[f64], i: usize) -> f64 {
    (x[i + 2] - x[i]) * (f[i] + 4.0 * f[i + 1] + f[i + 2]) / 6.0
}

fn simpson_three_eighths_step(x: &[f64], f: &[f64], i: usize) -> f64 {
    let h = (x[i + 3] - x[i]) / 3.0;
    3.0 * h * (f[i] + 3.0 * f[i + 1] + 3.0 * f[i + 2] + f[i + 3]) / 8.0
}

fn composite_trapezoid(x: &[f64], f: &[f64]) -> f64 {
    (0..(x.len() - 1))
        .map(|i| trapezoid_step(x, f, i))
        .sum()
}

/// Greedy grouping from the left. Branch order matters: an even remainder is
/// always consumed in pairs, a remainder of 3 takes the 3/8 rule, and any
/// other odd remainder gives up one trapezoid step first.
fn composite_simpson(x: &[f64], f: &[f64]) -> f64 {
    let n = x.len() - 1;
    let mut integral = 0.0;
    let mut i = 0;
    while i < n {
        let remaining = n - i;
        if remaining >= 2 && remaining % 2 == 0 {
            trace!("simpson 1/3 over [{}, {}]", i, i + 2);
            integral += simpson_one_third_step(x, f, i);
            i += 2;
        } else if remaining == 1 {
            trace!("trapezoid close-out over [{}, {}]", i, i + 1);
            integral += trapezoid_step(x, f, i);
            i += 1;
        } else if remaining == 3 {
            trace!("simpson 3/8 over [{}, {}]", i, i + 3);
            integral += simpson_three_eighths_step(x, f, i);
            i += 3;
        } else {
            trace!("trapezoid step over [{}, {}]", i, i + 1);
            integral += trapezoid_step(x, f, i);
            i += 1;
        }
    }
    integral
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry point
// ─────────────────────────────────────────────────────────────────────────────

/// Integrates tabulated `(x, f)` samples with a composite Newton-Cotes rule.
///
/// `rule` is `"trap"` or `"simp"`, case-insensitive, surrounding whitespace
/// ignored. Samples need not be sorted.
///
/// # Errors
/// * `IntegrationError::Shape` when `x` and `f` differ in length or hold fewer
///   than two samples.
/// * `IntegrationError::InvalidRule` for any other rule token.
pub fn integrate_newton(x: &[f64], f: &[f64], rule: &str) -> Result<f64, IntegrationError> {
    let samples = SampleSeries::new(x, f)?;
    let rule: NewtonCotesRule = rule.parse()?;
    debug!("integrating {} sub-intervals with the {} rule", samples.interval_count(), rule);
    Ok(rule.integrate(&samples))
}
