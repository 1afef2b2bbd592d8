use crate::dto::vehicle_dto::VehicleDto;
use crate::models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle};
use crate::utils::errors::AppError;
use sqlx::PgPool;

// Proyección con JOIN a fabricante y categoría, única fuente de verdad
// para las lecturas desnormalizadas.
const VEHICLE_DTO_SELECT: &str = r#"
    SELECT v.id, v.model, v.manufacture_year, v.current_mileage,
           v.license_plate, v.color, v.available,
           m.name AS manufacturer_name, c.name AS category_name
    FROM vehicles v
    JOIN manufacturers m ON m.id = v.manufacturer_id
    JOIN vehicle_categories c ON c.id = v.category_id
"#;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        request: &CreateVehicleRequest,
        available: bool,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles
                (model, manufacture_year, current_mileage, license_plate,
                 color, available, manufacturer_id, category_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, model, manufacture_year, current_mileage,
                      license_plate, color, available, manufacturer_id, category_id
            "#,
        )
        .bind(&request.model)
        .bind(request.manufacture_year)
        .bind(request.current_mileage)
        .bind(&request.license_plate)
        .bind(&request.color)
        .bind(available)
        .bind(request.manufacturer_id)
        .bind(request.category_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_dto_by_id(&self, id: i32) -> Result<Option<VehicleDto>, AppError> {
        let query = format!("{} WHERE v.id = $1", VEHICLE_DTO_SELECT);
        let vehicle = sqlx::query_as::<_, VehicleDto>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_all_dto(&self) -> Result<Vec<VehicleDto>, AppError> {
        let query = format!("{} ORDER BY v.id", VEHICLE_DTO_SELECT);
        let vehicles = sqlx::query_as::<_, VehicleDto>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    /// Vehículos con el flag de disponibilidad activo dentro de una categoría
    pub async fn find_available_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<VehicleDto>, AppError> {
        let query = format!(
            "{} WHERE v.available AND v.category_id = $1 ORDER BY v.id",
            VEHICLE_DTO_SELECT
        );
        let vehicles = sqlx::query_as::<_, VehicleDto>(&query)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    /// Vehículos de un fabricante que aparecen en al menos un alquiler,
    /// deduplicados por identidad del vehículo
    pub async fn find_rented_by_manufacturer(
        &self,
        manufacturer_id: i32,
    ) -> Result<Vec<VehicleDto>, AppError> {
        let vehicles = sqlx::query_as::<_, VehicleDto>(
            r#"
            SELECT DISTINCT v.id, v.model, v.manufacture_year, v.current_mileage,
                   v.license_plate, v.color, v.available,
                   m.name AS manufacturer_name, c.name AS category_name
            FROM rentals r
            JOIN vehicles v ON v.id = r.vehicle_id
            JOIN manufacturers m ON m.id = v.manufacturer_id
            JOIN vehicle_categories c ON c.id = v.category_id
            WHERE v.manufacturer_id = $1
            ORDER BY v.id
            "#,
        )
        .bind(manufacturer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    /// Verificar si la matrícula ya está registrada, opcionalmente
    /// excluyendo un vehículo (para el reemplazo).
    pub async fn license_plate_exists(
        &self,
        license_plate: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM vehicles
                WHERE license_plate = $1 AND ($2::int IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(license_plate)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Reemplazo explícito de los ocho campos del vehículo
    pub async fn update(&self, request: &UpdateVehicleRequest) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE vehicles
            SET model = $2, manufacture_year = $3, current_mileage = $4,
                license_plate = $5, color = $6, available = $7,
                manufacturer_id = $8, category_id = $9
            WHERE id = $1
            "#,
        )
        .bind(request.id)
        .bind(&request.model)
        .bind(request.manufacture_year)
        .bind(request.current_mileage)
        .bind(&request.license_plate)
        .bind(&request.color)
        .bind(request.available)
        .bind(request.manufacturer_id)
        .bind(request.category_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Borrado en cascada: primero los alquileres del vehículo, luego el
    /// vehículo. Devuelve cuántos alquileres se eliminaron.
    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        let rentals = sqlx::query("DELETE FROM rentals WHERE vehicle_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(rentals)
    }
}
