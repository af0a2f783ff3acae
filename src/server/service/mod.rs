//! Business logic layer between controllers and repositories.
//!
//! Services take validated params from controllers, call one or more repositories
//! and turn missing records into `AppError::NotFound`.

pub mod customer;
pub mod reservation;
