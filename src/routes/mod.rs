use axum::Router;

use crate::state::AppState;

pub mod customer_routes;
pub mod manufacturer_routes;
pub mod rental_routes;
pub mod vehicle_category_routes;
pub mod vehicle_routes;

/// Router completo de la API, una colección por entidad
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest(
            "/api/manufacturers",
            manufacturer_routes::create_manufacturer_router(),
        )
        .nest(
            "/api/vehicle-categories",
            vehicle_category_routes::create_vehicle_category_router(),
        )
        .nest("/api/customers", customer_routes::create_customer_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/rentals", rental_routes::create_rental_router())
}
