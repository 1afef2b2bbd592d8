use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::manufacturer_controller::ManufacturerController;
use crate::models::manufacturer::{
    CreateManufacturerRequest, Manufacturer, UpdateManufacturerRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_manufacturer_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_manufacturer))
        .route("/", get(list_manufacturers))
        .route("/:id", get(get_manufacturer))
        .route("/:id", put(update_manufacturer))
        .route("/:id", delete(delete_manufacturer))
}

async fn create_manufacturer(
    State(state): State<AppState>,
    Json(request): Json<CreateManufacturerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = ManufacturerController::new(state.pool.clone());
    let manufacturer = controller.create(request).await?;
    let location = format!("/api/manufacturers/{}", manufacturer.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(manufacturer),
    ))
}

async fn get_manufacturer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Manufacturer>, AppError> {
    let controller = ManufacturerController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_manufacturers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Manufacturer>>, AppError> {
    let controller = ManufacturerController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_manufacturer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateManufacturerRequest>,
) -> Result<StatusCode, AppError> {
    let controller = ManufacturerController::new(state.pool.clone());
    controller.update(id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_manufacturer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let controller = ManufacturerController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
