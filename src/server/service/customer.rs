use sea_orm::DatabaseConnection;

use crate::server::{
    data::{customer::CustomerRepository, reservation::ReservationRepository},
    error::AppError,
    model::{
        customer::{CreateCustomerParams, Customer, RankedCustomer, UpdateCustomerParams},
        reservation::Reservation,
    },
};

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every customer ordered by name
    pub async fn get_all(&self) -> Result<Vec<Customer>, AppError> {
        let repo = CustomerRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a customer by id, failing with `NotFound` when it does not exist
    pub async fn get(&self, id: i32) -> Result<Customer, AppError> {
        let repo = CustomerRepository::new(self.db);

        repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Searches customers by first and last name
    pub async fn search(&self, name: &str) -> Result<Vec<Customer>, AppError> {
        let repo = CustomerRepository::new(self.db);

        Ok(repo.search(name).await?)
    }

    /// Gets up to `limit` customers ranked by reservation count
    pub async fn get_best(&self, limit: u64) -> Result<Vec<RankedCustomer>, AppError> {
        let repo = CustomerRepository::new(self.db);

        Ok(repo.get_best(limit).await?)
    }

    /// Creates a new customer
    pub async fn create(&self, params: CreateCustomerParams) -> Result<Customer, AppError> {
        let repo = CustomerRepository::new(self.db);

        let customer = repo.create(params).await?;

        tracing::info!("Created customer {}", customer.id);

        Ok(customer)
    }

    /// Overwrites a customer's name, phone and notes
    ///
    /// Fails with `NotFound` when the customer does not exist.
    pub async fn update(&self, params: UpdateCustomerParams) -> Result<Customer, AppError> {
        let repo = CustomerRepository::new(self.db);
        let id = params.id;

        repo.update(params).await?.ok_or_else(|| not_found(id))
    }

    /// Gets a customer's reservations, most recent first
    pub async fn get_reservations(&self, customer_id: i32) -> Result<Vec<Reservation>, AppError> {
        let repo = ReservationRepository::new(self.db);

        Ok(repo.get_by_customer_id(customer_id).await?)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Customer {} not found", id))
}
