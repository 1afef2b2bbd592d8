//! DTOs de lectura
//!
//! Proyecciones desnormalizadas que combinan una entidad con los nombres
//! de sus entidades relacionadas, producidas por JOIN en el momento de
//! la consulta.

pub mod rental_dto;
pub mod vehicle_dto;
