use crate::models::manufacturer::{
    CreateManufacturerRequest, Manufacturer, UpdateManufacturerRequest,
};
use crate::repositories::CascadeSummary;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct ManufacturerRepository {
    pool: PgPool,
}

impl ManufacturerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        request: &CreateManufacturerRequest,
    ) -> Result<Manufacturer, AppError> {
        let manufacturer = sqlx::query_as::<_, Manufacturer>(
            r#"
            INSERT INTO manufacturers (name, country_of_origin)
            VALUES ($1, $2)
            RETURNING id, name, country_of_origin
            "#,
        )
        .bind(&request.name)
        .bind(&request.country_of_origin)
        .fetch_one(&self.pool)
        .await?;

        Ok(manufacturer)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Manufacturer>, AppError> {
        let manufacturer = sqlx::query_as::<_, Manufacturer>(
            "SELECT id, name, country_of_origin FROM manufacturers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(manufacturer)
    }

    pub async fn find_all(&self) -> Result<Vec<Manufacturer>, AppError> {
        let manufacturers = sqlx::query_as::<_, Manufacturer>(
            "SELECT id, name, country_of_origin FROM manufacturers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(manufacturers)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM manufacturers WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Reemplazo de registro completo. Devuelve las filas afectadas para
    /// que el controller distinga fila inexistente de conflicto.
    pub async fn update(&self, request: &UpdateManufacturerRequest) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE manufacturers SET name = $2, country_of_origin = $3 WHERE id = $1",
        )
        .bind(request.id)
        .bind(&request.name)
        .bind(&request.country_of_origin)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Borrado en cascada: alquileres de los vehículos del fabricante,
    /// luego los vehículos, luego el fabricante. Todo en una transacción.
    pub async fn delete(&self, id: i32) -> Result<CascadeSummary, AppError> {
        let mut tx = self.pool.begin().await?;

        let rentals = sqlx::query(
            r#"
            DELETE FROM rentals
            WHERE vehicle_id IN (SELECT id FROM vehicles WHERE manufacturer_id = $1)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let vehicles = sqlx::query("DELETE FROM vehicles WHERE manufacturer_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM manufacturers WHERE id = $1")
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
