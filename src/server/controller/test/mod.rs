use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
};
use sea_orm::{DatabaseConnection, EntityTrait};
use tower::ServiceExt;

use crate::server::{router, state::AppState};
use test_utils::{builder::TestBuilder, factory};


async fn send(db: &DatabaseConnection, request: Request<Body>) -> Response<Body> {
    router::app(AppState::new(db.clone()))
        .oneshot(request)
        .await
        .unwrap()
}

async fn get(db: &DatabaseConnection, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    send(db, request).await
}

async fn post_form(db: &DatabaseConnection, uri: &str, form: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();

    send(db, request).await
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}
