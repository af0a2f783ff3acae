//! Reservation data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::reservation::{CreateReservationParams, Reservation};

pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new reservation
    ///
    /// Does not check that the customer exists; `ReservationService::create` does.
    ///
    /// # Returns
    /// - `Ok(Reservation)`: The created reservation
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, DbErr> {
        let entity = entity::reservation::ActiveModel {
            customer_id: ActiveValue::Set(params.customer_id),
            start_at: ActiveValue::Set(params.start_at),
            num_guests: ActiveValue::Set(params.num_guests),
            notes: ActiveValue::Set(params.notes),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(entity))
    }

    /// Gets a customer's reservations, most recent start time first
    pub async fn get_by_customer_id(&self, customer_id: i32) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::CustomerId.eq(customer_id))
            .order_by_desc(entity::reservation::Column::StartAt)
            .order_by_desc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }
}
