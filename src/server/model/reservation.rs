//! Reservation domain models and parameters.

use chrono::{Datelike, NaiveDateTime};

use crate::{
    model::reservation::{ReservationDto, ReservationFormDto},
    server::{
        error::AppError,
        util::parse::{parse_num_guests, parse_start_at},
    },
};

/// A reservation made by a customer.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    /// Customer that owns the reservation.
    pub customer_id: i32,
    pub start_at: NaiveDateTime,
    /// Number of guests, always at least 1.
    pub num_guests: i32,
    pub notes: String,
}

impl Reservation {
    /// Converts an entity model to a reservation domain model at the repository boundary.
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            start_at: entity.start_at,
            num_guests: entity.num_guests,
            notes: entity.notes,
        }
    }

    /// Start time formatted for display, e.g. "January 1st 2024, 6:00 pm".
    pub fn formatted_start_at(&self) -> String {
        format_start_at(&self.start_at)
    }

    /// Converts the reservation to a DTO for the customer detail page.
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            start_at: self.formatted_start_at(),
            id: self.id,
            customer_id: self.customer_id,
            num_guests: self.num_guests,
            notes: self.notes,
        }
    }
}

/// Parameters for creating a reservation for a customer.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub customer_id: i32,
    pub start_at: NaiveDateTime,
    pub num_guests: i32,
    pub notes: String,
}

impl CreateReservationParams {
    /// Validates a submitted add-reservation form for customer `customer_id`.
    ///
    /// # Returns
    /// - `Ok(CreateReservationParams)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - `startAt` is not a date-time or `numGuests`
    ///   is not an integer of at least 1
    pub fn from_dto(customer_id: i32, dto: ReservationFormDto) -> Result<Self, AppError> {
        Ok(Self {
            customer_id,
            start_at: parse_start_at(&dto.start_at)?,
            num_guests: parse_num_guests(&dto.num_guests)?,
            notes: dto.notes,
        })
    }
}

fn format_start_at(start_at: &NaiveDateTime) -> String {
    let day = start_at.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };

    format!(
        "{} {}{} {}",
        start_at.format("%B"),
        day,
        suffix,
        start_at.format("%Y, %-I:%M %P")
    )
}
