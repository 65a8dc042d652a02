//! In-process stand-in for the hosted backend, shared by the client and app
//! tests. It keeps the `categories` table in memory and records what it was
//! sent.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    body::Bytes,
    extract::{RawQuery, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};

use super::Client;

pub const ANON_KEY: &str = "anon-key";
pub const USER_TOKEN: &str = "user-token";
pub const USER_ID: &str = "0b8e2f44-6d3c-4f7b-8d0a-6a5b4c3d2e1f";
pub const USER_EMAIL: &str = "me@example.com";

/// What the fake backend saw, plus the state it serves.
#[derive(Debug, Default)]
pub struct Seen {
    /// Query strings of transaction reads and of every delete.
    pub queries: Vec<String>,
    pub bodies: Vec<Value>,
    pub prefer: Option<String>,
    pub category_lists: usize,
    pub category_inserts: Vec<Value>,
    pub categories: Vec<Value>,
    pub logouts: usize,
    /// When set, `auth/v1/user` answers 401 as for an expired token.
    pub expired: bool,
}

pub type Shared = Arc<Mutex<Seen>>;

fn authorized(headers: &HeaderMap) -> bool {
    let apikey = headers.get("apikey").and_then(|v| v.to_str().ok());
    let bearer = headers.get("authorization").and_then(|v| v.to_str().ok());
    apikey == Some(ANON_KEY) && bearer == Some(&format!("Bearer {USER_TOKEN}"))
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": "JWT expired" })))
}

async fn token(RawQuery(query): RawQuery, Json(body): Json<Value>) -> impl IntoResponse {
    if query.as_deref() != Some("grant_type=password") {
        return (StatusCode::BAD_REQUEST, Json(json!({ "msg": "bad grant" })));
    }
    if body["password"] != "hunter2" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid login credentials"
            })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "access_token": USER_TOKEN,
            "token_type": "bearer",
            "user": { "id": USER_ID, "email": body["email"] }
        })),
    )
}

async fn user(State(seen): State<Shared>, headers: HeaderMap) -> impl IntoResponse {
    let expired = seen.lock().map(|seen| seen.expired).unwrap_or(true);
    if expired || !authorized(&headers) {
        return unauthorized();
    }
    (StatusCode::OK, Json(json!({ "id": USER_ID, "email": USER_EMAIL })))
}

async fn logout(State(seen): State<Shared>, headers: HeaderMap) -> StatusCode {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    if let Ok(mut seen) = seen.lock() {
        seen.logouts += 1;
    }
    StatusCode::NO_CONTENT
}

async fn list_transactions(
    State(seen): State<Shared>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return unauthorized();
    }
    if let Ok(mut seen) = seen.lock() {
        seen.queries.push(query.unwrap_or_default());
    }
    (
        StatusCode::OK,
        Json(json!([{
            "id": "3f1c1a2e-8d6b-4c0e-9a53-1c2b3d4e5f60",
            "title": "Lunch",
            "amount": 12.5,
            "category": "Food",
            "date": "2026-10-12",
            "type": "expense",
            "user_id": USER_ID
        }])),
    )
}

async fn insert_transaction(
    State(seen): State<Shared>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let Ok(rows) = serde_json::from_slice::<Vec<Value>>(&body) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "expected an array" })),
        );
    };
    let mut stored = rows.clone();
    for row in &mut stored {
        row["id"] = json!("9d1c1a2e-8d6b-4c0e-9a53-1c2b3d4e5f61");
    }
    if let Ok(mut seen) = seen.lock() {
        seen.prefer = headers
            .get("prefer")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        seen.bodies.extend(rows);
    }
    (StatusCode::CREATED, Json(Value::Array(stored)))
}

async fn delete_rows(State(seen): State<Shared>, RawQuery(query): RawQuery) -> StatusCode {
    if let Ok(mut seen) = seen.lock() {
        seen.queries.push(query.unwrap_or_default());
    }
    StatusCode::NO_CONTENT
}

async fn list_categories(
    State(seen): State<Shared>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return unauthorized();
    }
    assert_eq!(query.as_deref(), Some("select=*&order=name.asc"));
    let Ok(mut seen) = seen.lock() else {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({})));
    };
    seen.category_lists += 1;
    let mut rows = seen.categories.clone();
    rows.sort_by(|a, b| a["name"].as_str().cmp(&b["name"].as_str()));
    (StatusCode::OK, Json(Value::Array(rows)))
}

async fn insert_categories(
    State(seen): State<Shared>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    let Ok(rows) = serde_json::from_slice::<Vec<Value>>(&body) else {
        return StatusCode::BAD_REQUEST;
    };
    if let Ok(mut seen) = seen.lock() {
        for (index, row) in rows.iter().enumerate() {
            let mut stored = row.clone();
            stored["id"] = json!(format!("00000000-0000-4000-8000-{index:012}"));
            seen.categories.push(stored);
        }
        seen.category_inserts.extend(rows);
    }
    StatusCode::CREATED
}

async fn rename_category() -> impl IntoResponse {
    (
        StatusCode::CONFLICT,
        Json(json!({ "message": "duplicate key value", "code": "23505" })),
    )
}

pub async fn spawn_backend() -> (String, Shared) {
    let seen: Shared = Arc::default();
    let router = Router::new()
        .route("/auth/v1/token", post(token))
        .route("/auth/v1/user", get(user))
        .route("/auth/v1/logout", post(logout))
        .route(
            "/rest/v1/transactions",
            get(list_transactions)
                .post(insert_transaction)
                .delete(delete_rows),
        )
        .route(
            "/rest/v1/categories",
            get(list_categories)
                .post(insert_categories)
                .patch(rename_category)
                .delete(delete_rows),
        )
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{addr}"), seen)
}

pub async fn signed_in_client() -> (Client, Shared) {
    let (base_url, seen) = spawn_backend().await;
    let mut client = Client::new(&base_url, ANON_KEY).unwrap();
    client.set_access_token(Some(USER_TOKEN.to_string()));
    (client, seen)
}
