#![allow(dead_code)]

use std::{path::Path, sync::Arc};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use cata::{
    api,
    bulletin::Bulletin,
    config::{CatalogueConfig, ConsoleConfig, DatabaseConfig},
    console::{Console, Terminal},
    models::{CreateBooking, CreateEntry, Entry},
    repository::Repository,
    services::Services,
    AppConfig, AppState,
};
use serde_json::Value;
use tower::ServiceExt;

/// Migrated in-memory database
pub async fn repository() -> Repository {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    let repository = Repository::connect(&config).await.expect("open in-memory database");
    repository.migrate().await.expect("run migrations");
    repository
}

/// Migrated database file inside `dir`, with several connections in WAL mode
pub async fn file_repository(dir: &Path) -> Repository {
    let config = DatabaseConfig {
        url: format!("sqlite://{}", dir.join("cata.db").display()),
        max_connections: 4,
    };
    let repository = Repository::connect(&config).await.expect("open database file");
    repository.migrate().await.expect("run migrations");
    repository
}

pub fn services() -> Services {
    Services::new(CatalogueConfig::default())
}

/// Console reading `script` line by line
pub fn console<'a>(repository: &Repository, script: &'a str) -> Console<&'a [u8], Vec<u8>> {
    console_with(repository, script, ConsoleConfig::default(), CatalogueConfig::default())
}

pub fn console_with<'a>(
    repository: &Repository,
    script: &'a str,
    config: ConsoleConfig,
    catalogue: CatalogueConfig,
) -> Console<&'a [u8], Vec<u8>> {
    Console::new(
        Terminal::new(script.as_bytes(), Vec::new()),
        repository.session(),
        Services::new(catalogue),
        config,
    )
}

pub fn output(console: &Console<&[u8], Vec<u8>>) -> String {
    String::from_utf8(console.terminal().output().clone()).expect("utf-8 output")
}

/// Commit an entry with `available` units
pub async fn seed_entry(repository: &Repository, name: &str, available: i64) -> Entry {
    let mut session = repository.session();
    let entry = services()
        .entries
        .create(
            &mut session,
            &CreateEntry {
                name: name.to_string(),
                location_text: format!("{name} shelf"),
                location_img: format!("{name}.png"),
                available,
            },
        )
        .await
        .expect("create entry");
    session.commit().await.expect("commit entry");
    entry
}

/// Commit one booking of `material`
pub async fn seed_booking(repository: &Repository, material: &str, by: &str) {
    let mut session = repository.session();
    services()
        .bookings
        .create(
            &mut session,
            &CreateBooking {
                booked_material: material.to_string(),
                booked_by: by.to_string(),
                book_info: String::new(),
            },
        )
        .await
        .expect("create booking");
    session.commit().await.expect("commit booking");
}

/// Web router over `repository`, reading greetings from `bulletin`
pub fn router(repository: &Repository, bulletin: Bulletin) -> Router {
    api::create_router(AppState {
        config: Arc::new(AppConfig::default()),
        repository: repository.clone(),
        services: Arc::new(services()),
        bulletin,
    })
}

/// Send one request and decode the JSON reply (`Null` for an empty body)
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
