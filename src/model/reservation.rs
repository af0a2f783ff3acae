use serde::Deserialize;

/// Form body submitted by the add-reservation form on the customer detail page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationFormDto {
    #[serde(default)]
    pub start_at: String,
    #[serde(default)]
    pub num_guests: String,
    #[serde(default)]
    pub notes: String,
}

/// Reservation as listed on the customer detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDto {
    pub id: i32,
    pub customer_id: i32,
    /// Human readable start time, e.g. "January 1st 2024, 6:00 pm".
    pub start_at: String,
    pub num_guests: i32,
    pub notes: String,
}
