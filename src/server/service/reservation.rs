use sea_orm::DatabaseConnection;

use crate::server::{
    data::{customer::CustomerRepository, reservation::ReservationRepository},
    error::AppError,
    model::reservation::{CreateReservationParams, Reservation},
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a reservation for an existing customer
    ///
    /// # Returns
    /// - `Ok(Reservation)`: The created reservation
    /// - `Err(AppError::NotFound)`: The customer does not exist
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, AppError> {
        let customer_repo = CustomerRepository::new(self.db);

        if !customer_repo.exists(params.customer_id).await? {
            return Err(AppError::NotFound(format!(
                "Customer {} not found",
                params.customer_id
            )));
        }

        let repo = ReservationRepository::new(self.db);
        let reservation = repo.create(params).await?;

        tracing::info!(
            "Created reservation {} for customer {}",
            reservation.id,
            reservation.customer_id
        );

        Ok(reservation)
    }
}
