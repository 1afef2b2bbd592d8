use crate::models::vehicle_category::{
    CreateVehicleCategoryRequest, UpdateVehicleCategoryRequest, VehicleCategory,
};
use crate::repositories::CascadeSummary;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct VehicleCategoryRepository {
    pool: PgPool,
}

impl VehicleCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        request: &CreateVehicleCategoryRequest,
    ) -> Result<VehicleCategory, AppError> {
        let category = sqlx::query_as::<_, VehicleCategory>(
            r#"
            INSERT INTO vehicle_categories (name, description, base_daily_rate)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, base_daily_rate
            "#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(request.base_daily_rate)
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<VehicleCategory>, AppError> {
        let category = sqlx::query_as::<_, VehicleCategory>(
            "SELECT id, name, description, base_daily_rate FROM vehicle_categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    pub async fn find_all(&self) -> Result<Vec<VehicleCategory>, AppError> {
        let categories = sqlx::query_as::<_, VehicleCategory>(
            "SELECT id, name, description, base_daily_rate FROM vehicle_categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicle_categories WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn update(&self, request: &UpdateVehicleCategoryRequest) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE vehicle_categories
            SET name = $2, description = $3, base_daily_rate = $4
            WHERE id = $1
            "#,
        )
        .bind(request.id)
        .bind(&request.name)
        .bind(&request.description)
        .bind(request.base_daily_rate)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Borrado en cascada: alquileres de los vehículos de la categoría,
    /// luego los vehículos, luego la categoría.
    pub async fn delete(&self, id: i32) -> Result<CascadeSummary, AppError> {
        let mut tx = self.pool.begin().await?;

        let rentals = sqlx::query(
            r#"
            DELETE FROM rentals
            WHERE vehicle_id IN (SELECT id FROM vehicles WHERE category_id = $1)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let vehicles = sqlx::query("DELETE FROM vehicles WHERE category_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM vehicle_categories WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(CascadeSummary {
            vehicles_deleted: vehicles,
            rentals_deleted: rentals,
        })
    }
}
