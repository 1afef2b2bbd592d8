use serde::Serialize;
use sqlx::FromRow;

// Proyección de vehículo con los nombres de fabricante y categoría
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct VehicleDto {
    pub id: i32,
    pub model: String,
    pub manufacture_year: i32,
    pub current_mileage: i32,
    pub license_plate: String,
    pub color: Option<String>,
    pub available: bool,
    pub manufacturer_name: String,
    pub category_name: String,
}
