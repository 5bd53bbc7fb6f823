//! Customer repository for database operations.
//!
//! Rows are fetched into [`CustomerRow`] and converted to the domain
//! [`Customer`] explicitly, revalidating every text column on the way out.

use chrono::NaiveDate;
use sqlx::PgPool;

use notaria_core::{CustomerId, Email, PersonName, Phone};

use super::RepositoryError;
use crate::models::{Customer, NewCustomer};

/// One row of the `clientes` table.
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    cliente_id: i32,
    nombre: String,
    apellido: String,
    email: String,
    telefono: Option<String>,
    fecha_registro: NaiveDate,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = RepositoryError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let corrupt = |field: &str, e: &dyn std::fmt::Display| {
            RepositoryError::DataCorruption(format!(
                "invalid {field} for cliente {}: {e}",
                row.cliente_id
            ))
        };

        let first_name = PersonName::parse(&row.nombre).map_err(|e| corrupt("nombre", &e))?;
        let last_name = PersonName::parse(&row.apellido).map_err(|e| corrupt("apellido", &e))?;
        let email = Email::parse(&row.email).map_err(|e| corrupt("email", &e))?;
        let phone = row
            .telefono
            .as_deref()
            .map(Phone::parse)
            .transpose()
            .map_err(|e| corrupt("telefono", &e))?;

        Ok(Self {
            id: CustomerId::new(row.cliente_id),
            first_name,
            last_name,
            email,
            phone,
            registration_date: row.fecha_registro,
        })
    }
}

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every customer in the database's natural order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored row is invalid.
    pub async fn list_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let rows: Vec<CustomerRow> = sqlx::query_as(
            r"
            SELECT cliente_id, nombre, apellido, email, telefono, fecha_registro
            FROM clientes
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Customer::try_from).collect()
    }

    /// Get a customer by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored row is invalid.
    pub async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let row: Option<CustomerRow> = sqlx::query_as(
            r"
            SELECT cliente_id, nombre, apellido, email, telefono, fecha_registro
            FROM clientes
            WHERE cliente_id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(Customer::try_from).transpose()
    }

    /// Insert a new customer and return it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, customer: &NewCustomer) -> Result<Customer, RepositoryError> {
        let row: CustomerRow = sqlx::query_as(
            r"
            INSERT INTO clientes (nombre, apellido, email, telefono, fecha_registro)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING cliente_id, nombre, apellido, email, telefono, fecha_registro
            ",
        )
        .bind(customer.first_name.as_str())
        .bind(customer.last_name.as_str())
        .bind(customer.email.as_str())
        .bind(customer.phone.as_ref().map(Phone::as_str))
        .bind(customer.registration_date)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Customer::try_from(row)
    }

    /// Permanently delete a customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no customer has this ID.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: CustomerId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM clientes WHERE cliente_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn new_customer(email: &str) -> NewCustomer {
        NewCustomer {
            first_name: PersonName::parse("Ana").unwrap(),
            last_name: PersonName::parse("Lopez").unwrap(),
            email: Email::parse(email).unwrap(),
            phone: None,
            registration_date: Utc::now().date_naive(),
        }
    }

    fn row(email: &str) -> CustomerRow {
        CustomerRow {
            cliente_id: 1,
            nombre: "Ana".to_string(),
            apellido: "Lopez".to_string(),
            email: email.to_string(),
            telefono: Some("555-1234".to_string()),
            fecha_registro: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        }
    }

    #[test]
    fn test_row_maps_to_customer() {
        let customer = Customer::try_from(row("ana@example.com")).unwrap();
        assert_eq!(customer.id, CustomerId::new(1));
        assert_eq!(customer.first_name.as_str(), "Ana");
        assert_eq!(customer.last_name.as_str(), "Lopez");
        assert_eq!(customer.email.as_str(), "ana@example.com");
        assert_eq!(customer.phone.unwrap().as_str(), "555-1234");
        assert_eq!(
            customer.registration_date,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_row_with_oversized_email_is_corruption() {
        let err = Customer::try_from(row(&"a".repeat(101))).unwrap_err();
        assert!(matches!(err, RepositoryError::DataCorruption(msg) if msg.contains("email")));
    }

    #[sqlx::test]
    #[ignore = "Requires PostgreSQL (DATABASE_URL)"]
    async fn test_list_all_empty(pool: PgPool) {
        let customers = CustomerRepository::new(&pool).list_all().await.unwrap();
        assert!(customers.is_empty());
    }

    #[sqlx::test]
    #[ignore = "Requires PostgreSQL (DATABASE_URL)"]
    async fn test_create_then_get(pool: PgPool) {
        let repo = CustomerRepository::new(&pool);
        let created = repo.create(&new_customer("ana@example.com")).await.unwrap();

        assert!(created.id.as_i32() >= 1);
        assert!(created.phone.is_none());

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[sqlx::test]
    #[ignore = "Requires PostgreSQL (DATABASE_URL)"]
    async fn test_get_unknown_id(pool: PgPool) {
        let fetched = CustomerRepository::new(&pool)
            .get_by_id(CustomerId::new(9999))
            .await
            .unwrap();
        assert!(fetched.is_none());
    }

    #[sqlx::test]
    #[ignore = "Requires PostgreSQL (DATABASE_URL)"]
    async fn test_duplicate_email_conflicts(pool: PgPool) {
        let repo = CustomerRepository::new(&pool);
        repo.create(&new_customer("dup@example.com")).await.unwrap();

        let err = repo
            .create(&new_customer("dup@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));

        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[sqlx::test]
    #[ignore = "Requires PostgreSQL (DATABASE_URL)"]
    async fn test_delete_is_visible_immediately(pool: PgPool) {
        let repo = CustomerRepository::new(&pool);
        let created = repo.create(&new_customer("gone@example.com")).await.unwrap();

        repo.delete(created.id).await.unwrap();

        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(created.id).await,
            Err(RepositoryError::NotFound)
        ));
    }

    #[sqlx::test]
    #[ignore = "Requires PostgreSQL (DATABASE_URL)"]
    async fn test_list_all_returns_every_customer(pool: PgPool) {
        let repo = CustomerRepository::new(&pool);
        let first = repo.create(&new_customer("one@example.com")).await.unwrap();
        let second = repo.create(&new_customer("two@example.com")).await.unwrap();

        let customers = repo.list_all().await.unwrap();
        assert_eq!(customers.len(), 2);
        assert!(customers.contains(&first));
        assert!(customers.contains(&second));
    }
}
