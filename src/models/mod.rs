//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL, junto con sus requests de creación y reemplazo.

pub mod customer;
pub mod manufacturer;
pub mod rental;
pub mod vehicle;
pub mod vehicle_category;
