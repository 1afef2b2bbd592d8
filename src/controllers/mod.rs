//! Controllers del sistema
//!
//! Cada controller envuelve sus repositorios y aplica la validación de
//! payload, la verificación de referencias y el mapeo a DTOs.

pub mod customer_controller;
pub mod manufacturer_controller;
pub mod rental_controller;
pub mod vehicle_category_controller;
pub mod vehicle_controller;
