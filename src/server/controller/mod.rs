//! HTTP request handlers.
//!
//! Controllers extract path, query and form input, convert DTOs to params, call a
//! service and either render a page or redirect to the canonical customer URL.

pub mod customer;
pub mod reservation;

#[cfg(test)]
mod test;

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};

/// 302 Found redirect to a customer's detail page.
pub(crate) fn redirect_to_customer(id: i32) -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, format!("/{}/", id))])
}
