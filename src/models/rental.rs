//! Modelo de Rental
//!
//! Alquileres con la tarifa diaria copiada al momento de la creación
//! (nunca re-derivada de la categoría). Mapea exactamente a la tabla
//! rentals, con claves foráneas a customers y vehicles.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Alquiler - mapea a la tabla rentals
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Rental {
    pub id: i32,
    pub pickup_date: DateTime<Utc>,
    pub expected_return_date: DateTime<Utc>,
    /// Null mientras el vehículo siga fuera
    pub actual_return_date: Option<DateTime<Utc>>,
    pub starting_mileage: i32,
    pub ending_mileage: Option<i32>,
    pub daily_rate: Decimal,
    pub total_charge: Option<Decimal>,
    /// Texto libre, por convención Active/Finished/Cancelled
    pub status: Option<String>,
    pub customer_id: i32,
    pub vehicle_id: i32,
}

/// Request para crear un nuevo alquiler
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRentalRequest {
    pub pickup_date: DateTime<Utc>,
    pub expected_return_date: DateTime<Utc>,
    pub actual_return_date: Option<DateTime<Utc>>,

    pub starting_mileage: i32,
    pub ending_mileage: Option<i32>,

    #[validate(custom = "crate::utils::validation::validate_non_negative")]
    pub daily_rate: Decimal,

    /// Si el cliente no lo envía, el servidor lo calcula con la regla
    /// de días facturables.
    pub total_charge: Option<Decimal>,

    #[validate(length(max = 50))]
    pub status: Option<String>,

    pub customer_id: i32,
    pub vehicle_id: i32,
}

/// Request para reemplazar un alquiler existente (registro completo)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRentalRequest {
    pub id: i32,

    pub pickup_date: DateTime<Utc>,
    pub expected_return_date: DateTime<Utc>,
    pub actual_return_date: Option<DateTime<Utc>>,

    pub starting_mileage: i32,
    pub ending_mileage: Option<i32>,

    #[validate(custom = "crate::utils::validation::validate_non_negative")]
    pub daily_rate: Decimal,

    pub total_charge: Option<Decimal>,

    #[validate(length(max = 50))]
    pub status: Option<String>,

    pub customer_id: i32,
    pub vehicle_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_create_request_tarifa_negativa() {
        let request = CreateRentalRequest {
            pickup_date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            expected_return_date: Utc.with_ymd_and_hms(2025, 1, 4, 0, 0, 0).unwrap(),
            actual_return_date: None,
            starting_mileage: 10000,
            ending_mileage: None,
            daily_rate: Decimal::new(-10000, 2),
            total_charge: None,
            status: Some("Active".to_string()),
            customer_id: 1,
            vehicle_id: 1,
        };
        assert!(request.validate().is_err());
    }
}
