//! Modelo de Manufacturer
//!
//! Este módulo contiene el struct Manufacturer y sus requests para CRUD
//! operations. Mapea exactamente a la tabla manufacturers.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Fabricante de vehículos - mapea a la tabla manufacturers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Manufacturer {
    pub id: i32,
    pub name: String,
    pub country_of_origin: Option<String>,
}

/// Request para crear un nuevo fabricante
#[derive(Debug, Deserialize, Validate)]
pub struct CreateManufacturerRequest {
    #[validate(
        length(min = 1, max = 100),
        custom = "crate::utils::validation::validate_not_empty"
    )]
    pub name: String,

    #[validate(length(max = 100))]
    pub country_of_origin: Option<String>,
}

/// Request para reemplazar un fabricante existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateManufacturerRequest {
    pub id: i32,

    #[validate(
        length(min = 1, max = 100),
        custom = "crate::utils::validation::validate_not_empty"
    )]
    pub name: String,

    #[validate(length(max = 100))]
    pub country_of_origin: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_valido() {
        let request = CreateManufacturerRequest {
            name: "Toyota".to_string(),
            country_of_origin: Some("Japón".to_string()),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_nombre_vacio() {
        let request = CreateManufacturerRequest {
            name: "   ".to_string(),
            country_of_origin: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_nombre_demasiado_largo() {
        let request = CreateManufacturerRequest {
            name: "A".repeat(101),
            country_of_origin: None,
        };
        assert!(request.validate().is_err());
    }
}
