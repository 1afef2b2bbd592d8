//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use validator::ValidationError;

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar y convertir string a datetime
pub fn validate_datetime(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            let mut error = ValidationError::new("datetime");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"RFC3339".to_string());
            error
        })
}

/// Interpretar un parámetro de fecha de query string.
/// Acepta RFC3339 completo o YYYY-MM-DD (medianoche UTC).
pub fn parse_query_datetime(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    if let Ok(datetime) = validate_datetime(value) {
        return Ok(datetime);
    }

    let date = validate_date(value)?;
    let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
        let mut error = ValidationError::new("datetime");
        error.add_param("value".into(), &value.to_string());
        error
    })?;

    Ok(Utc.from_utc_datetime(&midnight))
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de identificación fiscal (11 dígitos exactos)
pub fn validate_tax_id(value: &str) -> Result<(), ValidationError> {
    if value.len() != 11 || !value.chars().all(|c| c.is_ascii_digit()) {
        let mut error = ValidationError::new("tax_id");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"11 digits".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de matrícula de vehículo
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    let clean_plate = value.trim();
    if clean_plate.is_empty() || clean_plate.len() > 10 {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T>(value: &T) -> Result<(), ValidationError>
where
    T: PartialOrd + std::fmt::Display + num_traits::Zero + serde::Serialize,
{
    if *value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_validate_date() {
        let valid_date = "2025-01-15";
        assert!(validate_date(valid_date).is_ok());

        let invalid_date = "2025/01/15";
        assert!(validate_date(invalid_date).is_err());
    }

    #[test]
    fn test_validate_datetime() {
        assert!(validate_datetime("2025-01-15T10:30:00Z").is_ok());
        assert!(validate_datetime("2025-01-15").is_err());
    }

    #[test]
    fn test_parse_query_datetime() {
        let from_date = parse_query_datetime("2025-01-15").unwrap();
        assert_eq!(from_date.to_rfc3339(), "2025-01-15T00:00:00+00:00");

        let from_datetime = parse_query_datetime("2025-01-15T08:00:00Z").unwrap();
        assert_eq!(from_datetime.to_rfc3339(), "2025-01-15T08:00:00+00:00");

        assert!(parse_query_datetime("15/01/2025").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Toyota").is_ok());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_tax_id() {
        assert!(validate_tax_id("12345678901").is_ok());
        assert!(validate_tax_id("1234567890").is_err());
        assert!(validate_tax_id("123456789012").is_err());
        assert!(validate_tax_id("1234567890a").is_err());
    }

    #[test]
    fn test_validate_license_plate() {
        assert!(validate_license_plate("ABC1D23").is_ok());
        assert!(validate_license_plate("").is_err());
        assert!(validate_license_plate("ABCDEFGHIJK").is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(&Decimal::new(10000, 2)).is_ok());
        assert!(validate_non_negative(&Decimal::ZERO).is_ok());
        assert!(validate_non_negative(&Decimal::new(-1, 2)).is_err());
    }
}
