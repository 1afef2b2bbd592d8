use crate::models::customer::{CreateCustomerRequest, Customer, UpdateCustomerRequest};
use crate::repositories::customer_repository::CustomerRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use validator::Validate;

pub struct CustomerController {
    repository: CustomerRepository,
}

impl CustomerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateCustomerRequest) -> Result<Customer, AppError> {
        request.validate()?;

        if self.repository.tax_id_exists(&request.tax_id, None).await? {
            return Err(AppError::Conflict(
                "La identificación fiscal ya está registrada.".to_string(),
            ));
        }

        self.repository.create(&request).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Customer, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado.".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Customer>, AppError> {
        self.repository.find_all().await
    }

    pub async fn update(&self, id: i32, request: UpdateCustomerRequest) -> Result<(), AppError> {
        if id != request.id {
            return Err(AppError::BadRequest(
                "El ID del cliente no corresponde.".to_string(),
            ));
        }
        request.validate()?;

        if self
            .repository
            .tax_id_exists(&request.tax_id, Some(id))
            .await?
        {
            return Err(AppError::Conflict(
                "La identificación fiscal ya está registrada.".to_string(),
            ));
        }

        let rows = self.repository.update(&request).await?;
        if rows == 0 {
            if self.repository.exists(id).await? {
                return Err(AppError::Conflict(
                    "Conflicto de escritura al actualizar el cliente.".to_string(),
                ));
            }
            return Err(AppError::NotFound("Cliente no encontrado.".to_string()));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !self.repository.exists(id).await? {
            return Err(AppError::NotFound("Cliente no encontrado.".to_string()));
        }

        let rentals = self.repository.delete(id).await?;
        tracing::info!("Cliente {} eliminado en cascada: {} alquileres", id, rentals);

        Ok(())
    }
}
