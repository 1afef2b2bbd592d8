//! Modelo de VehicleCategory
//!
//! Categorías de vehículo con su tarifa diaria base. Mapea exactamente
//! a la tabla vehicle_categories.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Categoría de vehículo - mapea a la tabla vehicle_categories
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct VehicleCategory {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub base_daily_rate: Decimal,
}

/// Request para crear una nueva categoría
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleCategoryRequest {
    #[validate(
        length(min = 1, max = 100),
        custom = "crate::utils::validation::validate_not_empty"
    )]
    pub name: String,

    #[validate(length(max = 255))]
    pub description: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_non_negative")]
    pub base_daily_rate: Decimal,
}

/// Request para reemplazar una categoría existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleCategoryRequest {
    pub id: i32,

    #[validate(
        length(min = 1, max = 100),
        custom = "crate::utils::validation::validate_not_empty"
    )]
    pub name: String,

    #[validate(length(max = 255))]
    pub description: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_non_negative")]
    pub base_daily_rate: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_valido() {
        let request = CreateVehicleCategoryRequest {
            name: "SUV".to_string(),
            description: Some("Utilitario deportivo".to_string()),
            base_daily_rate: Decimal::new(25000, 2),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_tarifa_negativa() {
        let request = CreateVehicleCategoryRequest {
            name: "SUV".to_string(),
            description: None,
            base_daily_rate: Decimal::new(-100, 2),
        };
        assert!(request.validate().is_err());
    }
}
