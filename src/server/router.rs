use axum::{routing::get, routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::server::{
    controller::{
        customer::{
            best_customers, create_customer, edit_customer_form, get_customer, list_customers,
            new_customer_form, search_customers, update_customer,
        },
        reservation::create_reservation,
    },
    error::AppError,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers))
        .route("/add/", get(new_customer_form).post(create_customer))
        .route("/search/", get(search_customers))
        .route("/best-customers/", get(best_customers))
        .route("/{id}/", get(get_customer))
        .route("/{id}/edit/", get(edit_customer_form).post(update_customer))
        .route("/{id}/add-reservation/", post(create_reservation))
        .fallback(not_found)
}

/// Builds the complete application with request tracing and shared state attached.
pub fn app(state: AppState) -> Router {
    router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}
