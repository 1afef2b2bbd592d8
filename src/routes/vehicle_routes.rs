use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::VehicleDto;
use crate::models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
        .route("/:id", put(update_vehicle))
        .route("/:id", delete(delete_vehicle))
        .route(
            "/available/category/:category_id",
            get(list_available_by_category),
        )
        .route(
            "/rented/manufacturer/:manufacturer_id",
            get(list_rented_by_manufacturer),
        )
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicle = controller.create(request).await?;
    let location = format!("/api/vehicles/{}", vehicle.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(vehicle),
    ))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VehicleDto>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_vehicles(State(state): State<AppState>) -> Result<Json<Vec<VehicleDto>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn list_available_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<Json<Vec<VehicleDto>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list_available_by_category(category_id).await?;
    Ok(Json(response))
}

async fn list_rented_by_manufacturer(
    State(state): State<AppState>,
    Path(manufacturer_id): Path<i32>,
) -> Result<Json<Vec<VehicleDto>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller
        .list_rented_by_manufacturer(manufacturer_id)
        .await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<StatusCode, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.update(id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
