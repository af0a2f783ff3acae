//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a customer together with `count` reservations.
///
/// Reservations are created with the factory defaults, each starting one day after
/// the previous one.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of reservations to create for the customer
///
/// # Returns
/// - `Ok((customer, reservations))` - The created customer and its reservations
/// - `Err(DbErr)` - Database error during creation
pub async fn create_customer_with_reservations(
    db: &DatabaseConnection,
    count: usize,
) -> Result<
    (
        entity::customer::Model,
        Vec<entity::reservation::Model>,
    ),
    DbErr,
> {
    let customer = crate::factory::customer::create_customer(db).await?;
    let reservations = crate::factory::reservation::create_reservations(db, customer.id, count).await?;

    Ok((customer, reservations))
}
