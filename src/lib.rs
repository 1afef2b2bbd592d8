//! Locadora - Backend de alquiler de vehículos
//!
//! API REST sobre PostgreSQL para gestionar fabricantes, categorías,
//! vehículos, clientes y alquileres.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
