use serde::Deserialize;
use thiserror::Error;

use crate::integration::integrationerror::IntegrationError;

#[derive(Error, Debug)]
pub enum ManagerError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFoundError(String),
    #[error("invalid parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },
    #[error(transparent)]
    Integration(#[from] IntegrationError)
}

impl ManagerError {
    pub fn from_json_or_json_parse_error<T>(json_value: serde_json::Value) -> Result<T, Self> where
        T: for<'a> Deserialize<'a> {
        serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
    }

    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }

    pub fn invalid_parameter(parameter: &str, message: &str) -> ManagerError {
        ManagerError::InvalidParameter {
            parameter: parameter.to_owned(),
            message: message.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Sample {
        value: f64
    }

    #[test]
    fn test_from_json_or_json_parse_error() {
        let sample: Sample = ManagerError::from_json_or_json_parse_error(json!({"value": 1.5})).unwrap();
        assert_eq!(sample.value, 1.5);

        let result: Result<Sample, ManagerError> = ManagerError::from_json_or_json_parse_error(json!({"other": 1}));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(ManagerError::map_elem_not_found("gauss").to_string(), "key 'gauss' not found");
        let err = ManagerError::invalid_parameter("std", "must be positive");
        assert_eq!(err.to_string(), "invalid parameter 'std': must be positive");
    }
}
