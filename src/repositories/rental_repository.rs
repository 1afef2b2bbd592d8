use crate::dto::rental_dto::RentalDto;
use crate::models::rental::{Rental, UpdateRentalRequest};
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

// Proyección con JOIN a cliente, vehículo y fabricante del vehículo.
const RENTAL_DTO_SELECT: &str = r#"
    SELECT r.id, r.pickup_date, r.expected_return_date, r.actual_return_date,
           r.starting_mileage, r.ending_mileage, r.daily_rate, r.total_charge,
           r.status, r.customer_id, c.full_name AS customer_name,
           c.email AS customer_email, r.vehicle_id, v.model AS vehicle_model,
           v.license_plate AS vehicle_plate, m.name AS vehicle_manufacturer
    FROM rentals r
    JOIN customers c ON c.id = r.customer_id
    JOIN vehicles v ON v.id = r.vehicle_id
    JOIN manufacturers m ON m.id = v.manufacturer_id
"#;

pub struct RentalRepository {
    pool: PgPool,
}

impl RentalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        pickup_date: DateTime<Utc>,
        expected_return_date: DateTime<Utc>,
        actual_return_date: Option<DateTime<Utc>>,
        starting_mileage: i32,
        ending_mileage: Option<i32>,
        daily_rate: Decimal,
        total_charge: Option<Decimal>,
        status: Option<String>,
        customer_id: i32,
        vehicle_id: i32,
    ) -> Result<Rental, AppError> {
        let rental = sqlx::query_as::<_, Rental>(
            r#"
            INSERT INTO rentals
                (pickup_date, expected_return_date, actual_return_date,
                 starting_mileage, ending_mileage, daily_rate, total_charge,
                 status, customer_id, vehicle_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, pickup_date, expected_return_date, actual_return_date,
                      starting_mileage, ending_mileage, daily_rate, total_charge,
                      status, customer_id, vehicle_id
            "#,
        )
        .bind(pickup_date)
        .bind(expected_return_date)
        .bind(actual_return_date)
        .bind(starting_mileage)
        .bind(ending_mileage)
        .bind(daily_rate)
        .bind(total_charge)
        .bind(status)
        .bind(customer_id)
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(rental)
    }

    pub async fn find_dto_by_id(&self, id: i32) -> Result<Option<RentalDto>, AppError> {
        let query = format!("{} WHERE r.id = $1", RENTAL_DTO_SELECT);
        let rental = sqlx::query_as::<_, RentalDto>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(rental)
    }

    pub async fn find_all_dto(&self) -> Result<Vec<RentalDto>, AppError> {
        let query = format!("{} ORDER BY r.id", RENTAL_DTO_SELECT);
        let rentals = sqlx::query_as::<_, RentalDto>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rentals)
    }

    /// Alquileres aún abiertos (sin fecha de devolución real) de un cliente
    pub async fn find_active_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<RentalDto>, AppError> {
        let query = format!(
            "{} WHERE r.customer_id = $1 AND r.actual_return_date IS NULL ORDER BY r.id",
            RENTAL_DTO_SELECT
        );
        let rentals = sqlx::query_as::<_, RentalDto>(&query)
            .bind(customer_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rentals)
    }

    /// Alquileres cuya fecha de retirada cae en el rango inclusivo [start, end]
    pub async fn find_by_pickup_period(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<RentalDto>, AppError> {
        let query = format!(
            "{} WHERE r.pickup_date >= $1 AND r.pickup_date <= $2 ORDER BY r.id",
            RENTAL_DTO_SELECT
        );
        let rentals = sqlx::query_as::<_, RentalDto>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?;

        Ok(rentals)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM rentals WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    /// Reemplazo directo del registro completo. No re-valida las
    /// referencias a cliente y vehículo; una referencia rota la rechaza
    /// la clave foránea de la base.
    pub async fn update(&self, request: &UpdateRentalRequest) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE rentals
            SET pickup_date = $2, expected_return_date = $3, actual_return_date = $4,
                starting_mileage = $5, ending_mileage = $6, daily_rate = $7,
                total_charge = $8, status = $9, customer_id = $10, vehicle_id = $11
            WHERE id = $1
            "#,
        )
        .bind(request.id)
        .bind(request.pickup_date)
        .bind(request.expected_return_date)
        .bind(request.actual_return_date)
        .bind(request.starting_mileage)
        .bind(request.ending_mileage)
        .bind(request.daily_rate)
        .bind(request.total_charge)
        .bind(&request.status)
        .bind(request.customer_id)
        .bind(request.vehicle_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM rentals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
