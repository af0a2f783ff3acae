//! Customer domain models and parameters.

use crate::{
    model::customer::{CustomerDto, CustomerFormDto, CustomerListItemDto},
    server::error::AppError,
};

/// A restaurant customer.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// Unique identifier assigned by the database.
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    /// Free-text notes about the customer.
    pub notes: String,
}

impl Customer {
    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Converts an entity model to a customer domain model at the repository boundary.
    pub fn from_entity(entity: entity::customer::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            phone: entity.phone,
            notes: entity.notes,
        }
    }

    /// Converts the customer to a DTO for the detail and edit pages.
    pub fn into_dto(self) -> CustomerDto {
        CustomerDto {
            full_name: self.full_name(),
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            notes: self.notes,
        }
    }

    /// Converts the customer to a list row without a reservation count.
    pub fn into_list_item(self) -> CustomerListItemDto {
        CustomerListItemDto {
            full_name: self.full_name(),
            id: self.id,
            phone: self.phone,
            reservation_count: None,
        }
    }
}

/// Customer paired with the number of reservations they have made.
///
/// Produced by the best customers ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCustomer {
    pub customer: Customer,
    pub reservation_count: u64,
}

impl RankedCustomer {
    /// Converts the ranked customer to a list row showing its reservation count.
    pub fn into_list_item(self) -> CustomerListItemDto {
        let reservation_count = self.reservation_count;

        CustomerListItemDto {
            reservation_count: Some(reservation_count),
            ..self.customer.into_list_item()
        }
    }
}

/// Parameters for creating a new customer.
#[derive(Debug, Clone)]
pub struct CreateCustomerParams {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub notes: String,
}

impl CreateCustomerParams {
    /// Validates a submitted customer form.
    ///
    /// Names are trimmed and must not be blank; phone is trimmed; notes are kept as typed.
    ///
    /// # Returns
    /// - `Ok(CreateCustomerParams)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - First or last name is blank
    pub fn from_dto(dto: CustomerFormDto) -> Result<Self, AppError> {
        let first_name = required_field("First name", &dto.first_name)?;
        let last_name = required_field("Last name", &dto.last_name)?;

        Ok(Self {
            first_name,
            last_name,
            phone: dto.phone.trim().to_string(),
            notes: dto.notes,
        })
    }
}

/// Parameters for overwriting the mutable fields of an existing customer.
///
/// All four fields are replaced; there is no partial update.
#[derive(Debug, Clone)]
pub struct UpdateCustomerParams {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub notes: String,
}

impl UpdateCustomerParams {
    /// Validates a submitted edit form for customer `id`.
    ///
    /// Applies the same rules as `CreateCustomerParams::from_dto`.
    pub fn from_dto(id: i32, dto: CustomerFormDto) -> Result<Self, AppError> {
        let CreateCustomerParams {
            first_name,
            last_name,
            phone,
            notes,
        } = CreateCustomerParams::from_dto(dto)?;

        Ok(Self {
            id,
            first_name,
            last_name,
            phone,
            notes,
        })
    }
}

fn required_field(label: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", label)));
    }

    Ok(value.to_string())
}
