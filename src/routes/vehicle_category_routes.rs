use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::vehicle_category_controller::VehicleCategoryController;
use crate::models::vehicle_category::{
    CreateVehicleCategoryRequest, UpdateVehicleCategoryRequest, VehicleCategory,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_category_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_category))
        .route("/", get(list_categories))
        .route("/:id", get(get_category))
        .route("/:id", put(update_category))
        .route("/:id", delete(delete_category))
}

async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = VehicleCategoryController::new(state.pool.clone());
    let category = controller.create(request).await?;
    let location = format!("/api/vehicle-categories/{}", category.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(category),
    ))
}

async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VehicleCategory>, AppError> {
    let controller = VehicleCategoryController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleCategory>>, AppError> {
    let controller = VehicleCategoryController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateVehicleCategoryRequest>,
) -> Result<StatusCode, AppError> {
    let controller = VehicleCategoryController::new(state.pool.clone());
    controller.update(id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let controller = VehicleCategoryController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
