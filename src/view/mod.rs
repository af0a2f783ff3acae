//! Server-rendered HTML pages.
//!
//! Pages are Dioxus components rendered to a string with `dioxus-ssr`. Controllers
//! build a page with `rsx!` and hand it to [`render`], which returns an Axum `Html`
//! response body.

pub mod customer;
pub mod error;
pub mod layout;

use axum::response::Html;
use dioxus::prelude::*;

/// Site name shown in the header and page titles.
pub const SITE_NAME: &str = "Lunchly";

/// Renders a page element into a complete HTML document.
pub fn render(page: Element) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render_element(page)
    ))
}
