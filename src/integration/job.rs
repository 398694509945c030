use serde::Deserialize;

use crate::integrand::integrandmanager::IntegrandManager;
use crate::integration::bounds::IntegrationInterval;
use crate::integration::gausslegendre::GaussLegendreRule;
use crate::integration::integrationerror::IntegrationError;
use crate::integration::newtoncotes::integrate_newton;
use crate::integration::samples::real_vector_from_json;
use crate::manager::manager::IManager;

/// A declarative integration request read from JSON.
///
/// `NewtonCotes` carries tabulated samples, `GaussLegendre` names an
/// integrand held by an [`IntegrandManager`]. Argument fields stay raw JSON
/// so that a malformed value fails the job when it runs, with the same error
/// kind a direct call would give, rather than failing the whole load.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "method")]
pub enum IntegrationJob {
    NewtonCotes {
        name: String,
        x: serde_json::Value,
        f: serde_json::Value,
        rule: String
    },
    GaussLegendre {
        name: String,
        integrand: String,
        lims: serde_json::Value,
        npts: serde_json::Value
    }
}

impl IntegrationJob {
    pub fn name(&self) -> &str {
        match self {
            IntegrationJob::NewtonCotes { name, .. } => name,
            IntegrationJob::GaussLegendre { name, .. } => name
        }
    }

    pub fn run(&self, integrands: &IntegrandManager) -> Result<f64, IntegrationError> {
        match self {
            IntegrationJob::NewtonCotes { x, f, rule, .. } => {
                let x = real_vector_from_json("x", x)?;
                let f = real_vector_from_json("f", f)?;
                integrate_newton(&x, &f, rule)
            },
            IntegrationJob::GaussLegendre { integrand, lims, npts, .. } => {
                let function = integrands
                    .get(integrand)
                    .map_err(|_| IntegrationError::NotCallable(integrand.to_owned()))?;
                let interval = IntegrationInterval::from_json(lims)?;
                let rule = GaussLegendreRule::with_json_order(npts)?;
                Ok(rule.integrate(|x| function.value(x), &interval))
            }
        }
    }
}
