//! Request payloads and view DTOs.
//!
//! Form and query payloads are deserialized from HTTP requests at the controller
//! boundary; view DTOs are what the page components render.

pub mod customer;
pub mod reservation;
