//! Web service tests against an in-memory catalogue

mod common;

use axum::{
    http::{Method, StatusCode},
    Router,
};
use cata::{bulletin::Bulletin, repository::Repository};
use common::{repository, router, seed_booking, seed_entry, send};
use serde_json::json;

async fn app() -> (Router, Repository) {
    let repository = repository().await;
    (router(&repository, Bulletin::with_message("welcome")), repository)
}

#[tokio::test]
async fn test_health_and_readiness() {
    let (app, _repository) = app().await;

    let (status, body) = send(&app, Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/api/v1/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["counts"], json!({ "entries": 0, "bookings": 0, "requests": 0 }));
}

#[tokio::test]
async fn test_ready_counts_committed_records() {
    let (app, repository) = app().await;
    seed_entry(&repository, "Tripod", 2).await;
    seed_entry(&repository, "Camera", 1).await;
    seed_booking(&repository, "Tripod", "Kya").await;

    let (_, body) = send(&app, Method::GET, "/api/v1/ready", None).await;
    assert_eq!(body["counts"], json!({ "entries": 2, "bookings": 1, "requests": 0 }));
}

#[tokio::test]
async fn test_message() {
    let (app, _repository) = app().await;
    let (status, body) = send(&app, Method::GET, "/api/v1/message", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "welcome");

    let silent = router(&repository().await, Bulletin::default());
    let (status, body) = send(&silent, Method::GET, "/api/v1/message", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchRecord");
}

#[tokio::test]
async fn test_booking_updates_entry_counts() {
    let (app, repository) = app().await;
    seed_entry(&repository, "Tripod", 2).await;

    let booking = json!({ "bookedMaterial": "Tripod", "bookedBy": "Kya" });
    let (status, body) = send(&app, Method::POST, "/api/v1/bookings", Some(booking)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["bookedBy"], "Kya");
    assert_eq!(body["bookInfo"], "");

    let (status, body) = send(&app, Method::GET, "/api/v1/entries", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Tripod");
    assert_eq!(body[0]["booked"], 1);

    let (_, body) = send(&app, Method::GET, "/api/v1/bookings", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_booking_rejections() {
    let (app, repository) = app().await;
    seed_entry(&repository, "Tripod", 1).await;
    seed_booking(&repository, "Tripod", "Kya").await;

    let unknown = json!({ "bookedMaterial": "Camera", "bookedBy": "Sam" });
    let (status, body) = send(&app, Method::POST, "/api/v1/bookings", Some(unknown)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchRecord");

    let full = json!({ "bookedMaterial": "Tripod", "bookedBy": "Sam" });
    let (status, body) = send(&app, Method::POST, "/api/v1/bookings", Some(full)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "NotAvailable");

    let (_, body) = send(&app, Method::GET, "/api/v1/bookings", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_duplicate_request_conflicts() {
    let (app, _repository) = app().await;

    let request = json!({ "material": "Lens", "requestBy": "Kya", "info": "wide angle" });
    let (status, body) = send(&app, Method::POST, "/api/v1/requests", Some(request.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["material"], "Lens");

    let (status, body) = send(&app, Method::POST, "/api/v1/requests", Some(request)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Duplicate");

    let (_, body) = send(&app, Method::GET, "/api/v1/requests", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}
