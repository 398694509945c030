use std::sync::Arc;

use serde::Deserialize;

use crate::integrand::builtinintegrand::{
    Exponential,
    NormalPdf,
    Polynomial,
    Sine,
    StdNormalPdf
};
use crate::integrand::integrand::Integrand;
use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;

pub type IntegrandManager = Manager<Arc<dyn Integrand>>;

#[derive(Deserialize)]
pub enum IntegrandType {
    StdNormalPdf,
    NormalPdf,
    Polynomial,
    Sine,
    Exponential
}

#[derive(Deserialize)]
struct IntegrandTypedObject {
    integrand_type: IntegrandType
}

#[derive(Deserialize)]
struct NormalPdfJsonProp {
    mean: f64,
    std: f64
}

fn get_integrand_from_json(json_value: serde_json::Value) -> Result<Arc<dyn Integrand>, ManagerError> {
    let typed_object: IntegrandTypedObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
    let integrand: Arc<dyn Integrand> = match typed_object.integrand_type {
        IntegrandType::StdNormalPdf => Arc::new(StdNormalPdf::new()),
        IntegrandType::NormalPdf => {
            let json_prop: NormalPdfJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
            let pdf = NormalPdf::new(json_prop.mean, json_prop.std)
                .ok_or_else(|| ManagerError::invalid_parameter("std", "must be positive and finite"))?;
            Arc::new(pdf)
        },
        IntegrandType::Polynomial => {
            let polynomial: Polynomial = ManagerError::from_json_or_json_parse_error(json_value)?;
            Arc::new(polynomial)
        },
        IntegrandType::Sine => Arc::new(Sine),
        IntegrandType::Exponential => Arc::new(Exponential)
    };
    Ok(integrand)
}

pub struct IntegrandManagerGenerator;

impl IntegrandManagerGenerator {
    pub fn new() -> IntegrandManager {
        Manager::new(get_integrand_from_json)
    }
}
