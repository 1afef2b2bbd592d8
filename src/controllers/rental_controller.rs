use crate::dto::rental_dto::RentalDto;
use crate::models::rental::{CreateRentalRequest, UpdateRentalRequest};
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::rental_repository::RentalRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::pricing::calculate_total_charge;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use validator::Validate;

pub struct RentalController {
    repository: RentalRepository,
    customers: CustomerRepository,
    vehicles: VehicleRepository,
}

impl RentalController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RentalRepository::new(pool.clone()),
            customers: CustomerRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateRentalRequest) -> Result<RentalDto, AppError> {
        request.validate()?;

        if !self.customers.exists(request.customer_id).await? {
            return Err(AppError::BadRequest("Cliente no encontrado.".to_string()));
        }

        if !self.vehicles.exists(request.vehicle_id).await? {
            return Err(AppError::BadRequest("Vehículo no encontrado.".to_string()));
        }

        // Si el cliente no envía el total, se deriva de la tarifa diaria
        let total_charge = request.total_charge.or_else(|| {
            Some(calculate_total_charge(
                request.pickup_date,
                request.expected_return_date,
                request.daily_rate,
            ))
        });

        let rental = self
            .repository
            .create(
                request.pickup_date,
                request.expected_return_date,
                request.actual_return_date,
                request.starting_mileage,
                request.ending_mileage,
                request.daily_rate,
                total_charge,
                request.status,
                request.customer_id,
                request.vehicle_id,
            )
            .await?;

        self.repository
            .find_dto_by_id(rental.id)
            .await?
            .ok_or_else(|| {
                AppError::Internal("El alquiler recién creado no se pudo proyectar.".to_string())
            })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<RentalDto, AppError> {
        self.repository
            .find_dto_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Alquiler no encontrado.".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<RentalDto>, AppError> {
        self.repository.find_all_dto().await
    }

    pub async fn list_active_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<RentalDto>, AppError> {
        let rentals = self.repository.find_active_by_customer(customer_id).await?;

        if rentals.is_empty() {
            return Err(AppError::NotFound(
                "Ningún alquiler activo encontrado para el cliente especificado.".to_string(),
            ));
        }

        Ok(rentals)
    }

    pub async fn list_by_pickup_period(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<RentalDto>, AppError> {
        let rentals = self.repository.find_by_pickup_period(start, end).await?;

        if rentals.is_empty() {
            return Err(AppError::NotFound(
                "Ningún alquiler encontrado en el período especificado.".to_string(),
            ));
        }

        Ok(rentals)
    }

    pub async fn update(&self, id: i32, request: UpdateRentalRequest) -> Result<(), AppError> {
        if id != request.id {
            return Err(AppError::BadRequest(
                "El ID del alquiler no corresponde.".to_string(),
            ));
        }
        request.validate()?;

        let rows = self.repository.update(&request).await?;
        if rows == 0 {
            if self.repository.exists(id).await? {
                return Err(AppError::Conflict(
                    "Conflicto de escritura al actualizar el alquiler.".to_string(),
                ));
            }
            return Err(AppError::NotFound("Alquiler no encontrado.".to_string()));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let rows = self.repository.delete(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound("Alquiler no encontrado.".to_string()));
        }

        Ok(())
    }
}
