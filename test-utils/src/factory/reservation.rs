//! Reservation factory for creating test reservation entities.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default start time used by the factory: 2024-01-01 18:00.
fn default_start_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(18, 0, 0))
        .unwrap_or_default()
}

/// Factory for creating test reservations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::new(&db, customer.id)
///     .num_guests(6)
///     .notes("Anniversary")
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: i32,
    start_at: NaiveDateTime,
    num_guests: i32,
    notes: String,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - start_at: 2024-01-01 18:00
    /// - num_guests: `2`
    /// - notes: empty
    pub fn new(db: &'a DatabaseConnection, customer_id: i32) -> Self {
        Self {
            db,
            customer_id,
            start_at: default_start_at(),
            num_guests: 2,
            notes: String::new(),
        }
    }

    pub fn start_at(mut self, start_at: NaiveDateTime) -> Self {
        self.start_at = start_at;
        self
    }

    pub fn num_guests(mut self, num_guests: i32) -> Self {
        self.num_guests = num_guests;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            customer_id: ActiveValue::Set(self.customer_id),
            start_at: ActiveValue::Set(self.start_at),
            num_guests: ActiveValue::Set(self.num_guests),
            notes: ActiveValue::Set(self.notes),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with default values for the given customer.
pub async fn create_reservation(
    db: &DatabaseConnection,
    customer_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, customer_id).build().await
}

/// Creates `count` reservations for the given customer on consecutive days.
pub async fn create_reservations(
    db: &DatabaseConnection,
    customer_id: i32,
    count: usize,
) -> Result<Vec<entity::reservation::Model>, DbErr> {
    let mut reservations = Vec::with_capacity(count);

    for day in 0..count {
        let reservation = ReservationFactory::new(db, customer_id)
            .start_at(default_start_at() + Duration::days(day as i64))
            .build()
            .await?;
        reservations.push(reservation);
    }

    Ok(reservations)
}
