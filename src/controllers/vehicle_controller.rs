use crate::dto::vehicle_dto::VehicleDto;
use crate::models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle};
use crate::repositories::manufacturer_repository::ManufacturerRepository;
use crate::repositories::vehicle_category_repository::VehicleCategoryRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
    manufacturers: ManufacturerRepository,
    categories: VehicleCategoryRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            manufacturers: ManufacturerRepository::new(pool.clone()),
            categories: VehicleCategoryRepository::new(pool),
        }
    }

    /// Verificar que las referencias a fabricante y categoría resuelvan.
    /// Se aplica igual en creación y reemplazo.
    async fn check_references(
        &self,
        manufacturer_id: i32,
        category_id: i32,
    ) -> Result<(), AppError> {
        if !self.categories.exists(category_id).await? {
            return Err(AppError::BadRequest(
                "Categoría especificada no encontrada.".to_string(),
            ));
        }

        if !self.manufacturers.exists(manufacturer_id).await? {
            return Err(AppError::BadRequest(
                "Fabricante especificado no encontrado.".to_string(),
            ));
        }

        Ok(())
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<Vehicle, AppError> {
        request.validate()?;
        self.check_references(request.manufacturer_id, request.category_id)
            .await?;

        if self
            .repository
            .license_plate_exists(&request.license_plate, None)
            .await?
        {
            return Err(AppError::Conflict(
                "La matrícula ya está registrada.".to_string(),
            ));
        }

        let available = request.available.unwrap_or(true);
        self.repository.create(&request, available).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<VehicleDto, AppError> {
        self.repository
            .find_dto_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado.".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<VehicleDto>, AppError> {
        self.repository.find_all_dto().await
    }

    pub async fn list_available_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<VehicleDto>, AppError> {
        let vehicles = self
            .repository
            .find_available_by_category(category_id)
            .await?;

        if vehicles.is_empty() {
            return Err(AppError::NotFound(
                "Ningún vehículo disponible para la categoría especificada.".to_string(),
            ));
        }

        Ok(vehicles)
    }

    pub async fn list_rented_by_manufacturer(
        &self,
        manufacturer_id: i32,
    ) -> Result<Vec<VehicleDto>, AppError> {
        let vehicles = self
            .repository
            .find_rented_by_manufacturer(manufacturer_id)
            .await?;

        if vehicles.is_empty() {
            return Err(AppError::NotFound(
                "Ningún vehículo alquilado encontrado para el fabricante especificado.".to_string(),
            ));
        }

        Ok(vehicles)
    }

    pub async fn update(&self, id: i32, request: UpdateVehicleRequest) -> Result<(), AppError> {
        if id != request.id {
            return Err(AppError::BadRequest(
                "El ID del vehículo no corresponde.".to_string(),
            ));
        }
        request.validate()?;

        if !self.repository.exists(id).await? {
            return Err(AppError::NotFound("Vehículo no encontrado.".to_string()));
        }

        self.check_references(request.manufacturer_id, request.category_id)
            .await?;

        if self
            .repository
            .license_plate_exists(&request.license_plate, Some(id))
            .await?
        {
            return Err(AppError::Conflict(
                "La matrícula ya está registrada.".to_string(),
            ));
        }

        let rows = self.repository.update(&request).await?;
        if rows == 0 {
            if self.repository.exists(id).await? {
                return Err(AppError::Conflict(
                    "Conflicto de escritura al actualizar el vehículo.".to_string(),
                ));
            }
            return Err(AppError::NotFound("Vehículo no encontrado.".to_string()));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !self.repository.exists(id).await? {
            return Err(AppError::NotFound("Vehículo no encontrado.".to_string()));
        }

        let rentals = self.repository.delete(id).await?;
        tracing::info!("Vehículo {} eliminado en cascada: {} alquileres", id, rentals);

        Ok(())
    }
}
