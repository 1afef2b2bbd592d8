//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus requests para CRUD
//! operations. Mapea exactamente a la tabla vehicles, con claves
//! foráneas a manufacturers y vehicle_categories.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Vehículo - mapea a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub model: String,
    pub manufacture_year: i32,
    pub current_mileage: i32,
    pub license_plate: String,
    pub color: Option<String>,
    pub available: bool,
    pub manufacturer_id: i32,
    pub category_id: i32,
}

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(
        length(min = 1, max = 100),
        custom = "crate::utils::validation::validate_not_empty"
    )]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub manufacture_year: i32,

    pub current_mileage: i32,

    #[validate(custom = "crate::utils::validation::validate_license_plate")]
    pub license_plate: String,

    #[validate(length(max = 50))]
    pub color: Option<String>,

    /// Disponible por defecto al crear
    pub available: Option<bool>,

    pub manufacturer_id: i32,
    pub category_id: i32,
}

/// Request para reemplazar un vehículo existente (registro completo)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    pub id: i32,

    #[validate(
        length(min = 1, max = 100),
        custom = "crate::utils::validation::validate_not_empty"
    )]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub manufacture_year: i32,

    pub current_mileage: i32,

    #[validate(custom = "crate::utils::validation::validate_license_plate")]
    pub license_plate: String,

    #[validate(length(max = 50))]
    pub color: Option<String>,

    pub available: bool,

    pub manufacturer_id: i32,
    pub category_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_base() -> CreateVehicleRequest {
        CreateVehicleRequest {
            model: "Corolla".to_string(),
            manufacture_year: 2023,
            current_mileage: 15000,
            license_plate: "ABC1D23".to_string(),
            color: Some("Plata".to_string()),
            available: None,
            manufacturer_id: 1,
            category_id: 1,
        }
    }

    #[test]
    fn test_create_request_valido() {
        assert!(request_base().validate().is_ok());
    }

    #[test]
    fn test_create_request_matricula_larga() {
        let mut request = request_base();
        request.license_plate = "ABCDEFGHIJK".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_anio_fuera_de_rango() {
        let mut request = request_base();
        request.manufacture_year = 1850;
        assert!(request.validate().is_err());
    }
}
