use crate::models::vehicle_category::{
    CreateVehicleCategoryRequest, UpdateVehicleCategoryRequest, VehicleCategory,
};
use crate::repositories::vehicle_category_repository::VehicleCategoryRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use validator::Validate;

pub struct VehicleCategoryController {
    repository: VehicleCategoryRepository,
}

impl VehicleCategoryController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleCategoryRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleCategoryRequest,
    ) -> Result<VehicleCategory, AppError> {
        request.validate()?;
        self.repository.create(&request).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<VehicleCategory, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Categoría no encontrada.".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<VehicleCategory>, AppError> {
        self.repository.find_all().await
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateVehicleCategoryRequest,
    ) -> Result<(), AppError> {
        if id != request.id {
            return Err(AppError::BadRequest(
                "El ID de la categoría no corresponde.".to_string(),
            ));
        }
        request.validate()?;

        let rows = self.repository.update(&request).await?;
        if rows == 0 {
            if self.repository.exists(id).await? {
                return Err(AppError::Conflict(
                    "Conflicto de escritura al actualizar la categoría.".to_string(),
                ));
            }
            return Err(AppError::NotFound("Categoría no encontrada.".to_string()));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !self.repository.exists(id).await? {
            return Err(AppError::NotFound("Categoría no encontrada.".to_string()));
        }

        let cascade = self.repository.delete(id).await?;
        tracing::info!(
            "Categoría {} eliminada en cascada: {} vehículos, {} alquileres",
            id,
            cascade.vehicles_deleted,
            cascade.rentals_deleted
        );

        Ok(())
    }
}
