//! Repositorios de acceso a datos
//!
//! Todo el SQL del sistema vive aquí. Los borrados en cascada son
//! transacciones explícitas que reportan cuántas filas dependientes
//! se eliminaron.

pub mod customer_repository;
pub mod manufacturer_repository;
pub mod rental_repository;
pub mod vehicle_category_repository;
pub mod vehicle_repository;

/// Resumen de un borrado en cascada que alcanza vehículos y alquileres
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeSummary {
    pub vehicles_deleted: u64,
    pub rentals_deleted: u64,
}
