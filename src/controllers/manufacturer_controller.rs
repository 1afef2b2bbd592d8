use crate::models::manufacturer::{
    CreateManufacturerRequest, Manufacturer, UpdateManufacturerRequest,
};
use crate::repositories::manufacturer_repository::ManufacturerRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use validator::Validate;

pub struct ManufacturerController {
    repository: ManufacturerRepository,
}

impl ManufacturerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ManufacturerRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateManufacturerRequest,
    ) -> Result<Manufacturer, AppError> {
        request.validate()?;
        self.repository.create(&request).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Manufacturer, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Fabricante no encontrado.".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Manufacturer>, AppError> {
        self.repository.find_all().await
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateManufacturerRequest,
    ) -> Result<(), AppError> {
        if id != request.id {
            return Err(AppError::BadRequest(
                "El ID del fabricante no corresponde.".to_string(),
            ));
        }
        request.validate()?;

        let rows = self.repository.update(&request).await?;
        if rows == 0 {
            if self.repository.exists(id).await? {
                return Err(AppError::Conflict(
                    "Conflicto de escritura al actualizar el fabricante.".to_string(),
                ));
            }
            return Err(AppError::NotFound("Fabricante no encontrado.".to_string()));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !self.repository.exists(id).await? {
            return Err(AppError::NotFound("Fabricante no encontrado.".to_string()));
        }

        let cascade = self.repository.delete(id).await?;
        tracing::info!(
            "Fabricante {} eliminado en cascada: {} vehículos, {} alquileres",
            id,
            cascade.vehicles_deleted,
            cascade.rentals_deleted
        );

        Ok(())
    }
}
