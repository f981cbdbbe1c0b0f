//! Mock CMS Backend
//!
//! An in-memory stand-in for the CMS `blogs` collection, speaking the same
//! JSON as the real backend so `RestContentStore` and the admin console can be
//! exercised without it:
//!
//! | Route | Behavior |
//! |-------|----------|
//! | `GET /cms/blogs?role=admin` | every record; without `role=admin` only published ones |
//! | `GET /cms/blogs/:id` | one record |
//! | `POST /cms/blogs` | create, assigns `_id` and `createdAt` |
//! | `PUT /cms/blogs/:id` | replace, keeps `_id` and `createdAt` |
//! | `DELETE /cms/blogs/:id` | remove |
//!
//! Successful bodies are wrapped as `{ "success": true, "data": ... }`.
//! Failures carry a JSON error whose `message` is what the console shows:
//! ```json
//! { "message": "Title is required", "code": "VALIDATION_ERROR", "details": "Title is required" }
//! ```
//! An outage switch makes every route answer 503 with no JSON body.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

/// Collection path served by the mock
pub const BLOGS_PATH: &str = "/cms/blogs";

const STATUSES: [&str; 2] = ["draft", "published"];

/// Structured error body
///
/// ```json
/// {
///   "message": "User-facing error message",
///   "code": "MACHINE_READABLE_CODE",
///   "details": "Optional debugging information"
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiError {
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(code: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            details: Some(message.clone()),
            message,
            code: code.to_string(),
        }
    }

    fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    fn respond(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

fn not_found(id: &str) -> Response {
    tracing::debug!("Blog {} not found", id);
    ApiError::new("RESOURCE_NOT_FOUND", "Blog not found")
        .with_details(format!("No blog with _id {}", id))
        .respond(StatusCode::NOT_FOUND)
}

fn validation_error(message: &str) -> Response {
    ApiError::new("VALIDATION_ERROR", message).respond(StatusCode::BAD_REQUEST)
}

type ApiResult<T> = Result<T, Response>;

#[derive(Debug, Default)]
struct CmsState {
    records: Vec<Map<String, Value>>,
    outage: bool,
}

impl CmsState {
    fn check_outage(&self) -> ApiResult<()> {
        if self.outage {
            return Err((StatusCode::SERVICE_UNAVAILABLE, "upstream unavailable").into_response());
        }
        Ok(())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.get("_id").and_then(Value::as_str) == Some(id))
    }
}

/// Handle to a mock CMS; clones share the same records
#[derive(Debug, Clone, Default)]
pub struct MockCms {
    state: Arc<RwLock<CmsState>>,
}

impl MockCms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes for the blogs collection, with permissive CORS for browser use
    pub fn router(&self) -> Router {
        Router::new()
            .route(BLOGS_PATH, get(list_blogs).post(create_blog))
            .route(
                &format!("{}/:id", BLOGS_PATH),
                get(get_blog).put(update_blog).delete(delete_blog),
            )
            .with_state(self.clone())
            .layer(CorsLayer::permissive())
    }

    /// Make every route fail with 503 and a non-JSON body
    pub async fn set_outage(&self, outage: bool) {
        self.state.write().await.outage = outage;
    }

    pub async fn record_count(&self) -> usize {
        self.state.read().await.records.len()
    }

    /// Store a record as-is, bypassing validation; returns its `_id`
    pub async fn seed_record(&self, mut record: Map<String, Value>) -> String {
        let id = match record.get("_id").and_then(Value::as_str) {
            Some(id) => id.to_string(),
            None => {
                let id = new_record_id();
                record.insert("_id".to_string(), json!(id));
                id
            }
        };
        self.state.write().await.records.push(record);
        id
    }
}

/// Serve the mock on an already bound listener until the task is dropped
pub async fn serve(listener: TcpListener, cms: MockCms) -> std::io::Result<()> {
    axum::serve(listener, cms.router()).await
}

fn new_record_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn timestamp() -> Value {
    json!(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Check a create or update body the way the backend schema does
fn validate_body(body: Value) -> ApiResult<Map<String, Value>> {
    let Value::Object(mut record) = body else {
        return Err(validation_error("Request body must be an object"));
    };

    let has_title = record
        .get("title")
        .and_then(Value::as_str)
        .is_some_and(|title| !title.trim().is_empty());
    if !has_title {
        return Err(validation_error("Title is required"));
    }

    if let Some(status) = record.get("status") {
        let known = status
            .as_str()
            .is_some_and(|status| STATUSES.contains(&status));
        if !known {
            return Err(validation_error("Invalid status"));
        }
    }

    if record
        .get("bodySections")
        .is_some_and(|sections| !sections.is_array())
    {
        return Err(validation_error("bodySections must be an array"));
    }

    for server_field in ["_id", "createdAt", "updatedAt", "__v"] {
        record.remove(server_field);
    }
    Ok(record)
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    role: Option<String>,
}

async fn list_blogs(
    State(cms): State<MockCms>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Value>> {
    let state = cms.state.read().await;
    state.check_outage()?;

    let admin = query.role.as_deref() == Some("admin");
    let data: Vec<Value> = state
        .records
        .iter()
        .filter(|record| admin || record.get("status").and_then(Value::as_str) == Some("published"))
        .cloned()
        .map(Value::Object)
        .collect();

    tracing::debug!("Listing {} blogs (admin: {})", data.len(), admin);
    Ok(Json(json!({ "success": true, "count": data.len(), "data": data })))
}

async fn get_blog(State(cms): State<MockCms>, Path(id): Path<String>) -> ApiResult<Json<Value>> {
    let state = cms.state.read().await;
    state.check_outage()?;

    let position = state.position(&id).ok_or_else(|| not_found(&id))?;
    Ok(Json(json!({ "success": true, "data": state.records[position] })))
}

async fn create_blog(
    State(cms): State<MockCms>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let mut state = cms.state.write().await;
    state.check_outage()?;

    let mut record = validate_body(body)?;
    let id = new_record_id();
    let now = timestamp();
    record.insert("_id".to_string(), json!(id));
    record.insert("createdAt".to_string(), now.clone());
    record.insert("updatedAt".to_string(), now);
    record.insert("__v".to_string(), json!(0));
    state.records.push(record.clone());

    tracing::info!("Created blog {}", id);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": record })),
    ))
}

async fn update_blog(
    State(cms): State<MockCms>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let mut state = cms.state.write().await;
    state.check_outage()?;

    let position = state.position(&id).ok_or_else(|| not_found(&id))?;
    let mut record = validate_body(body)?;

    let existing = &state.records[position];
    for kept in ["_id", "createdAt", "__v"] {
        if let Some(value) = existing.get(kept) {
            record.insert(kept.to_string(), value.clone());
        }
    }
    record.insert("updatedAt".to_string(), timestamp());
    state.records[position] = record.clone();

    tracing::info!("Updated blog {}", id);
    Ok(Json(json!({ "success": true, "data": record })))
}

async fn delete_blog(State(cms): State<MockCms>, Path(id): Path<String>) -> ApiResult<Json<Value>> {
    let mut state = cms.state.write().await;
    state.check_outage()?;

    let position = state.position(&id).ok_or_else(|| not_found(&id))?;
    state.records.remove(position);

    tracing::info!("Deleted blog {}", id);
    Ok(Json(json!({ "success": true, "message": "Blog deleted" })))
}
