use crate::models::customer::{CreateCustomerRequest, Customer, UpdateCustomerRequest};
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &CreateCustomerRequest) -> Result<Customer, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (full_name, tax_id, email, phone, birth_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, full_name, tax_id, email, phone, birth_date
            "#,
        )
        .bind(&request.full_name)
        .bind(&request.tax_id)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(request.birth_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT id, full_name, tax_id, email, phone, birth_date FROM customers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT id, full_name, tax_id, email, phone, birth_date FROM customers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Verificar si la identificación fiscal ya está registrada,
    /// opcionalmente excluyendo un cliente (para el reemplazo).
    pub async fn tax_id_exists(
        &self,
        tax_id: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM customers
                WHERE tax_id = $1 AND ($2::int IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(tax_id)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(&self, request: &UpdateCustomerRequest) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE customers
            SET full_name = $2, tax_id = $3, email = $4, phone = $5, birth_date = $6
            WHERE id = $1
            "#,
        )
        .bind(request.id)
        .bind(&request.full_name)
        .bind(&request.tax_id)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(request.birth_date)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Borrado en cascada: primero los alquileres del cliente, luego el
    /// cliente. Devuelve cuántos alquileres se eliminaron.
    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        let rentals = sqlx::query("DELETE FROM rentals WHERE customer_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(rentals)
    }
}
