use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

// Proyección de alquiler con datos del cliente y del vehículo
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct RentalDto {
    pub id: i32,
    pub pickup_date: DateTime<Utc>,
    pub expected_return_date: DateTime<Utc>,
    pub actual_return_date: Option<DateTime<Utc>>,
    pub starting_mileage: i32,
    pub ending_mileage: Option<i32>,
    pub daily_rate: Decimal,
    pub total_charge: Option<Decimal>,
    pub status: Option<String>,
    pub customer_id: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub vehicle_id: i32,
    pub vehicle_model: String,
    pub vehicle_plate: String,
    pub vehicle_manufacturer: String,
}
