use axum::{extract::State, response::IntoResponse};

use crate::{
    model::reservation::ReservationFormDto,
    server::{
        controller::redirect_to_customer, error::AppError,
        model::reservation::CreateReservationParams, service::reservation::ReservationService,
        state::AppState,
        util::extract::{Form, Path},
    },
};

/// POST /{id}/add-reservation/ - Add a reservation for a customer
///
/// # Returns
/// - `302 Found`: Redirect to the customer's detail page
/// - `400 Bad Request`: Unparseable `startAt` or `numGuests` below 1
/// - `404 Not Found`: No customer with that id
/// - `500 Internal Server Error`: Database error
pub async fn create_reservation(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
    Form(payload): Form<ReservationFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReservationService::new(&state.db);

    let params = CreateReservationParams::from_dto(customer_id, payload)?;

    service.create(params).await?;

    Ok(redirect_to_customer(customer_id))
}
