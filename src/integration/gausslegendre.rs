use log::debug;

use crate::integration::bounds::{
    IntegrationInterval,
    RealBound
};
use crate::integration::integrationerror::IntegrationError;

/// Nodes and weights of an n-point Gauss-Legendre rule on `[-1, 1]`.
///
/// An n-point rule integrates polynomials up to degree `2n - 1` exactly.
#[derive(Debug, PartialEq)]
pub struct GaussLegendreRule {
    nodes: &'static [f64],
    weights: &'static [f64]
}

pub const MIN_ORDER: usize = 1;
pub const MAX_ORDER: usize = 5;

// Entry k holds the (k + 1)-point rule.
static GAUSS_LEGENDRE_TABLE: [GaussLegendreRule; MAX_ORDER] = [
    GaussLegendreRule {
        nodes: &[0.0],
        weights: &[2.0]
    },
    GaussLegendreRule {
        // ±1/sqrt(3)
        nodes: &[-0.5773502691896257, 0.5773502691896257],
        weights: &[1.0, 1.0]
    },
    GaussLegendreRule {
        // ±sqrt(3/5)
        nodes: &[-0.7745966692414834, 0.0, 0.7745966692414834],
        weights: &[0.5555555555555556, 0.8888888888888888, 0.5555555555555556]
    },
    GaussLegendreRule {
        nodes: &[
            -0.8611363115940526,
            -0.3399810435848563,
            0.3399810435848563,
            0.8611363115940526
        ],
        weights: &[
            0.3478548451374538,
            0.6521451548625461,
            0.6521451548625461,
            0.3478548451374538
        ]
    },
    GaussLegendreRule {
        nodes: &[
            -0.906179845938664,
            -0.5384693101056831,
            0.0,
            0.5384693101056831,
            0.906179845938664
        ],
        weights: &[
            0.2369268850561891,
            0.4786286704993665,
            0.5688888888888889,
            0.4786286704993665,
            0.2369268850561891
        ]
    }
];

impl GaussLegendreRule {
    /// Looks up the tabulated rule with `npts` points.
    pub fn with_order(npts: usize) -> Result<&'static GaussLegendreRule, IntegrationError> {
        if !(MIN_ORDER..=MAX_ORDER).contains(&npts) {
            return Err(IntegrationError::UnsupportedOrder(npts.to_string()));
        }
        Ok(&GAUSS_LEGENDRE_TABLE[npts - 1])
    }

    /// Same lookup for an `npts` read from JSON. Integral floats such as
    /// `3.0` are accepted; negative, fractional and non-numeric values are
    /// unsupported orders.
    pub fn with_json_order(npts: &serde_json::Value) -> Result<&'static GaussLegendreRule, IntegrationError> {
        let unsupported = || IntegrationError::UnsupportedOrder(npts.to_string());
        let order = npts.as_f64().ok_or_else(unsupported)?;
        if order.fract() != 0.0 || order < MIN_ORDER as f64 || order > MAX_ORDER as f64 {
            return Err(unsupported());
        }
        GaussLegendreRule::with_order(order as usize)
    }

    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &'static [f64] {
        self.nodes
    }

    pub fn weights(&self) -> &'static [f64] {
        self.weights
    }

    pub fn exactness_degree(&self) -> usize {
        2 * self.order() - 1
    }

    pub fn integrate<F>(&self, f: F, interval: &IntegrationInterval) -> f64 where
        F: Fn(f64) -> f64 {
        let half_range = interval.half_range();
        self.nodes
            .iter()
            .zip(self.weights)
            .map(|(&x_std, &w_std)| {
                let xk = interval.map_from_reference(x_std);
                let wk = half_range * w_std;
                wk * f(xk)
            })
            .sum()
    }
}

/// Integrates `f` over `lims = [a, b]` with `npts`-point Gauss-Legendre
/// quadrature.
///
/// # Errors
/// * `IntegrationError::Bounds` when `lims` does not hold exactly two values
///   convertible to real numbers.
/// * `IntegrationError::UnsupportedOrder` when `npts` is outside `1..=5`.
///
/// # Example
/// ```
/// use numint::integration::gausslegendre::integrate_gauss;
///
/// let result = integrate_gauss(|x| x * x, &[0.0, 1.0], 2).unwrap();
/// assert!((result - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn integrate_gauss<F, B>(f: F, lims: &[B], npts: usize) -> Result<f64, IntegrationError> where
    F: Fn(f64) -> f64,
    B: RealBound {
    let interval = IntegrationInterval::from_lims(lims)?;
    let rule = GaussLegendreRule::with_order(npts)?;
    debug!("{}-point gauss-legendre over [{}, {}]", npts, interval.a(), interval.b());
    Ok(rule.integrate(f, &interval))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::integrationerror::BoundsError;
    use approx::{
        assert_abs_diff_eq,
        assert_relative_eq
    };
    use nalgebra::{
        DMatrix,
        SymmetricEigen
    };
    use serde_json::json;
    use std::f64::consts::PI;

    #[test]
    fn test_table_invariants() {
        for npts in MIN_ORDER..=MAX_ORDER {
            let rule = GaussLegendreRule::with_order(npts).unwrap();
            assert_eq!(rule.order(), npts);
            assert_eq!(rule.weights().len(), npts);
            assert_relative_eq!(rule.weights().iter().sum::<f64>(), 2.0, epsilon = 1e-14);
            for i in 0..npts {
                assert_eq!(rule.nodes()[i], -rule.nodes()[npts - 1 - i]);
                assert_eq!(rule.weights()[i], rule.weights()[npts - 1 - i]);
            }
        }
    }

    #[test]
    fn test_table_matches_golub_welsch() {
        // Nodes are eigenvalues of the Jacobi matrix of the Legendre
        // recurrence, weights are 2 * (first eigenvector component)^2.
        for npts in MIN_ORDER..=MAX_ORDER {
            let jacobi = DMatrix::<f64>::from_fn(npts, npts, |i, j| {
                if i + 1 == j || j + 1 == i {
                    let k = i.max(j) as f64;
                    k / (4.0 * k * k - 1.0).sqrt()
                } else {
                    0.0
                }
            });
            let eigen = SymmetricEigen::new(jacobi);
            let mut pairs: Vec<(f64, f64)> = (0..npts)
                .map(|k| (eigen.eigenvalues[k], 2.0 * eigen.eigenvectors[(0, k)].powi(2)))
                .collect();
            pairs.sort_by(|lhs, rhs| lhs.0.total_cmp(&rhs.0));

            let rule = GaussLegendreRule::with_order(npts).unwrap();
            for (k, (node, weight)) in pairs.into_iter().enumerate() {
                assert_abs_diff_eq!(rule.nodes()[k], node, epsilon = 1e-12);
                assert_abs_diff_eq!(rule.weights()[k], weight, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_square_for_every_order_above_one() {
        for npts in 2..=MAX_ORDER {
            let result = integrate_gauss(|x| x * x, &[0.0, 1.0], npts).unwrap();
            assert_relative_eq!(result, 1.0 / 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_single_point_is_midpoint_rule() {
        let result = integrate_gauss(|x| x * x, &[0.0, 1.0], 1).unwrap();
        assert_relative_eq!(result, 0.25, epsilon = 1e-15);
    }

    #[test]
    fn test_monomials_within_exactness_degree() {
        for n in 0..10 {
            for npts in MIN_ORDER..=MAX_ORDER {
                if GaussLegendreRule::with_order(npts).unwrap().exactness_degree() < n {
                    continue;
                }
                let result = integrate_gauss(|x: f64| x.powi(n as i32), &[0.0, 1.0], npts).unwrap();
                assert_relative_eq!(result, 1.0 / (n as f64 + 1.0), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_sine_over_half_period() {
        let result = integrate_gauss(f64::sin, &[0.0, PI], 5).unwrap();
        assert_abs_diff_eq!(result, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_reversed_interval_flips_sign() {
        let forward = integrate_gauss(f64::exp, &[0.0, 1.0], 4).unwrap();
        let backward = integrate_gauss(f64::exp, &[1.0, 0.0], 4).unwrap();
        assert_relative_eq!(backward, -forward, epsilon = 1e-14);
    }

    #[test]
    fn test_unsupported_order() {
        for npts in [0, 6, 10] {
            assert_eq!(
                integrate_gauss(|x| x, &[0.0, 1.0], npts),
                Err(IntegrationError::UnsupportedOrder(npts.to_string()))
            );
        }
    }

    #[test]
    fn test_json_order() {
        assert_eq!(GaussLegendreRule::with_json_order(&json!(3)).unwrap().order(), 3);
        assert_eq!(GaussLegendreRule::with_json_order(&json!(5.0)).unwrap().order(), 5);
        for npts in [json!(-1), json!(2.5), json!(0), json!(6), json!("3"), json!(null)] {
            assert_eq!(
                GaussLegendreRule::with_json_order(&npts).err(),
                Some(IntegrationError::UnsupportedOrder(npts.to_string()))
            );
        }
    }

    #[test]
    fn test_bad_bounds() {
        assert_eq!(
            integrate_gauss(|x| x, &[0.0], 3),
            Err(IntegrationError::Bounds(BoundsError::WrongLength(1)))
        );
        assert_eq!(
            integrate_gauss(|x| x, &[0.0, 1.0, 2.0], 3),
            Err(IntegrationError::Bounds(BoundsError::WrongLength(3)))
        );
        assert_eq!(
            integrate_gauss(|x| x, &["0", "one"], 3),
            Err(IntegrationError::Bounds(BoundsError::NotReal("one".to_string())))
        );
    }

    #[test]
    fn test_bounds_checked_before_order() {
        let result = integrate_gauss(|x| x, &[0.0], 9);
        assert!(matches!(result, Err(IntegrationError::Bounds(_))));
    }
}
