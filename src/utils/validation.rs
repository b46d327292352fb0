//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use serde::{de, Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use crate::utils::errors::AppResult;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que el año de modelo tenga cuatro dígitos
pub fn validate_year(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.len() != 4 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        let mut error = ValidationError::new("year");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY".to_string());
        return Err(error);
    }
    Ok(())
}

/// Ejecutar las validaciones derivadas de un request
pub fn validate_request<T: Validate>(request: &T) -> AppResult<()> {
    request.validate()?;
    Ok(())
}

/// Aceptar `2020` o `"2020"` indistintamente en el body JSON
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string or a number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct YearHolder {
        #[serde(deserialize_with = "string_or_number")]
        year: String,
    }

    #[test]
    fn test_string_or_number() {
        let from_number: YearHolder = serde_json::from_str(r#"{"year": 2020}"#).unwrap();
        assert_eq!(from_number.year, "2020");

        let from_string: YearHolder = serde_json::from_str(r#"{"year": "2019"}"#).unwrap();
        assert_eq!(from_string.year, "2019");

        assert!(serde_json::from_str::<YearHolder>(r#"{"year": true}"#).is_err());
    }

    #[test]
    fn test_validate_year() {
        assert!(validate_year("2020").is_ok());
        assert!(validate_year("20x0").is_err());
        assert!(validate_year("202").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Toyota").is_ok());
        assert!(validate_not_empty("   ").is_err());
    }
}
