//! Modelo de Customer
//!
//! Clientes de la locadora. Mapea exactamente a la tabla customers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Cliente - mapea a la tabla customers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Customer {
    pub id: i32,
    pub full_name: String,
    pub tax_id: String,
    pub email: String,
    pub phone: Option<String>,
    pub birth_date: DateTime<Utc>,
}

/// Request para crear un nuevo cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(
        length(min = 1, max = 200),
        custom = "crate::utils::validation::validate_not_empty"
    )]
    pub full_name: String,

    #[validate(custom = "crate::utils::validation::validate_tax_id")]
    pub tax_id: String,

    #[validate(email, length(max = 150))]
    pub email: String,

    #[validate(length(max = 15))]
    pub phone: Option<String>,

    pub birth_date: DateTime<Utc>,
}

/// Request para reemplazar un cliente existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    pub id: i32,

    #[validate(
        length(min = 1, max = 200),
        custom = "crate::utils::validation::validate_not_empty"
    )]
    pub full_name: String,

    #[validate(custom = "crate::utils::validation::validate_tax_id")]
    pub tax_id: String,

    #[validate(email, length(max = 150))]
    pub email: String,

    #[validate(length(max = 15))]
    pub phone: Option<String>,

    pub birth_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request_base() -> CreateCustomerRequest {
        CreateCustomerRequest {
            full_name: "María Fernanda Souza".to_string(),
            tax_id: "12345678901".to_string(),
            email: "maria@example.com".to_string(),
            phone: Some("11987654321".to_string()),
            birth_date: Utc.with_ymd_and_hms(1990, 5, 20, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_create_request_valido() {
        assert!(request_base().validate().is_ok());
    }

    #[test]
    fn test_create_request_cpf_corto() {
        let mut request = request_base();
        request.tax_id = "1234567890".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_email_invalido() {
        let mut request = request_base();
        request.email = "maria-example.com".to_string();
        assert!(request.validate().is_err());
    }
}
