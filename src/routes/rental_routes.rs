use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;

use crate::controllers::rental_controller::RentalController;
use crate::dto::rental_dto::RentalDto;
use crate::models::rental::{CreateRentalRequest, UpdateRentalRequest};
use crate::state::AppState;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::parse_query_datetime;

pub fn create_rental_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_rental))
        .route("/", get(list_rentals))
        .route("/:id", get(get_rental))
        .route("/:id", put(update_rental))
        .route("/:id", delete(delete_rental))
        .route("/active/customer/:customer_id", get(list_active_by_customer))
        .route("/period", get(list_rentals_by_period))
}

/// Rango inclusivo [start, end] sobre la fecha de retirada
#[derive(Debug, Deserialize)]
struct PeriodParams {
    start: String,
    end: String,
}

async fn create_rental(
    State(state): State<AppState>,
    Json(request): Json<CreateRentalRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let rental = controller.create(request).await?;
    let location = format!("/api/rentals/{}", rental.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(rental),
    ))
}

async fn get_rental(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RentalDto>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_rentals(State(state): State<AppState>) -> Result<Json<Vec<RentalDto>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn list_active_by_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> Result<Json<Vec<RentalDto>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.list_active_by_customer(customer_id).await?;
    Ok(Json(response))
}

async fn list_rentals_by_period(
    State(state): State<AppState>,
    Query(params): Query<PeriodParams>,
) -> Result<Json<Vec<RentalDto>>, AppError> {
    let start = parse_query_datetime(&params.start)
        .map_err(|_| validation_error("start", "formato de fecha inválido (RFC3339 o YYYY-MM-DD)"))?;
    let end = parse_query_datetime(&params.end)
        .map_err(|_| validation_error("end", "formato de fecha inválido (RFC3339 o YYYY-MM-DD)"))?;

    let controller = RentalController::new(state.pool.clone());
    let response = controller.list_by_pickup_period(start, end).await?;
    Ok(Json(response))
}

async fn update_rental(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateRentalRequest>,
) -> Result<StatusCode, AppError> {
    let controller = RentalController::new(state.pool.clone());
    controller.update(id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_rental(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let controller = RentalController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
