//! # od-api Handlers
//!
//! This module coordinates the flow between HTTP requests and the
//! `StorageProvider` port. Every handler picks its backend per request
//! from the `storage` query parameter (defaulting to SQLite), invokes
//! exactly one provider operation, and serializes the result as JSON.

use actix_web::{web, HttpResponse};
use od_core::models::{
    CategoryKind, CategoryPatch, DepartmentPatch, NewCategory, NewDepartment, NewLink, NewPc,
    NewTodo, PcPatch, TodoPatch,
};
use od_core::traits::StorageProvider;
use od_core::AppError;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiError;

/// State shared across all Actix-web workers: one instance of each
/// backend, constructed once at startup.
pub struct AppState {
    pub sqlite: Arc<dyn StorageProvider>,
    pub json: Arc<dyn StorageProvider>,
}

impl AppState {
    fn provider(&self, selector: StorageSelector) -> &dyn StorageProvider {
        match selector {
            StorageSelector::Sqlite => self.sqlite.as_ref(),
            StorageSelector::Json => self.json.as_ref(),
        }
    }
}

/// Per-request backend selection (`?storage=sqlite|json`).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageSelector {
    #[default]
    Sqlite,
    Json,
}

#[derive(Deserialize)]
pub struct StorageQuery {
    #[serde(default)]
    pub storage: StorageSelector,
}

#[derive(Deserialize)]
pub struct DeleteQuery {
    pub id: Option<Uuid>,
    #[serde(default)]
    pub storage: StorageSelector,
}

impl DeleteQuery {
    fn id(&self) -> Result<Uuid, ApiError> {
        self.id
            .ok_or_else(|| AppError::Validation("id query parameter is required".to_string()).into())
    }
}

#[derive(Deserialize)]
pub struct CategoriesQuery {
    #[serde(rename = "type")]
    pub kind: Option<CategoryKind>,
    #[serde(default)]
    pub storage: StorageSelector,
}

/// Update bodies carry the target id alongside the changed fields;
/// `_id` is accepted as a legacy alias.
#[derive(Deserialize)]
pub struct UpdateBody<P> {
    #[serde(alias = "_id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub patch: P,
}

fn deleted() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "success": true }))
}

// ── Links ──────────────────────────────────────────────────────────────

pub async fn list_links(
    data: web::Data<AppState>,
    query: web::Query<StorageQuery>,
) -> Result<HttpResponse, ApiError> {
    let links = data.provider(query.storage).list_links().await?;
    Ok(HttpResponse::Ok().json(links))
}

pub async fn create_link(
    data: web::Data<AppState>,
    query: web::Query<StorageQuery>,
    body: web::Json<NewLink>,
) -> Result<HttpResponse, ApiError> {
    let link = data
        .provider(query.storage)
        .create_link(body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(link))
}

pub async fn delete_link(
    data: web::Data<AppState>,
    query: web::Query<DeleteQuery>,
) -> Result<HttpResponse, ApiError> {
    data.provider(query.storage).delete_link(query.id()?).await?;
    Ok(deleted())
}

// ── PCs ────────────────────────────────────────────────────────────────

pub async fn list_pcs(
    data: web::Data<AppState>,
    query: web::Query<StorageQuery>,
) -> Result<HttpResponse, ApiError> {
    let pcs = data.provider(query.storage).list_pcs().await?;
    Ok(HttpResponse::Ok().json(pcs))
}

pub async fn create_pc(
    data: web::Data<AppState>,
    query: web::Query<StorageQuery>,
    body: web::Json<NewPc>,
) -> Result<HttpResponse, ApiError> {
    let pc = data
        .provider(query.storage)
        .create_pc(body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(pc))
}

pub async fn update_pc(
    data: web::Data<AppState>,
    query: web::Query<StorageQuery>,
    body: web::Json<UpdateBody<PcPatch>>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let pc = data
        .provider(query.storage)
        .update_pc(body.id, body.patch)
        .await?;
    Ok(HttpResponse::Ok().json(pc))
}

pub async fn delete_pc(
    data: web::Data<AppState>,
    query: web::Query<DeleteQuery>,
) -> Result<HttpResponse, ApiError> {
    data.provider(query.storage).delete_pc(query.id()?).await?;
    Ok(deleted())
}

// ── Todos ──────────────────────────────────────────────────────────────

pub async fn list_todos(
    data: web::Data<AppState>,
    query: web::Query<StorageQuery>,
) -> Result<HttpResponse, ApiError> {
    let todos = data.provider(query.storage).list_todos().await?;
    Ok(HttpResponse::Ok().json(todos))
}

pub async fn create_todo(
    data: web::Data<AppState>,
    query: web::Query<StorageQuery>,
    body: web::Json<NewTodo>,
) -> Result<HttpResponse, ApiError> {
    let todo = data
        .provider(query.storage)
        .create_todo(body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(todo))
}

pub async fn update_todo(
    data: web::Data<AppState>,
    query: web::Query<StorageQuery>,
    body: web::Json<UpdateBody<TodoPatch>>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let todo = data
        .provider(query.storage)
        .update_todo(body.id, body.patch)
        .await?;
    Ok(HttpResponse::Ok().json(todo))
}

pub async fn delete_todo(
    data: web::Data<AppState>,
    query: web::Query<DeleteQuery>,
) -> Result<HttpResponse, ApiError> {
    data.provider(query.storage).delete_todo(query.id()?).await?;
    Ok(deleted())
}

// ── Categories ─────────────────────────────────────────────────────────

pub async fn list_categories(
    data: web::Data<AppState>,
    query: web::Query<CategoriesQuery>,
) -> Result<HttpResponse, ApiError> {
    let categories = data
        .provider(query.storage)
        .list_categories(query.kind)
        .await?;
    Ok(HttpResponse::Ok().json(categories))
}

pub async fn create_category(
    data: web::Data<AppState>,
    query: web::Query<StorageQuery>,
    body: web::Json<NewCategory>,
) -> Result<HttpResponse, ApiError> {
    let category = data
        .provider(query.storage)
        .create_category(body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(category))
}

pub async fn update_category(
    data: web::Data<AppState>,
    query: web::Query<StorageQuery>,
    body: web::Json<UpdateBody<CategoryPatch>>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let category = data
        .provider(query.storage)
        .update_category(body.id, body.patch)
        .await?;
    Ok(HttpResponse::Ok().json(category))
}

/// Deleting a category also removes every link filed under it.
pub async fn delete_category(
    data: web::Data<AppState>,
    query: web::Query<DeleteQuery>,
) -> Result<HttpResponse, ApiError> {
    data.provider(query.storage)
        .delete_category(query.id()?)
        .await?;
    Ok(deleted())
}

// ── Departments ────────────────────────────────────────────────────────

pub async fn list_departments(
    data: web::Data<AppState>,
    query: web::Query<StorageQuery>,
) -> Result<HttpResponse, ApiError> {
    let departments = data.provider(query.storage).list_departments().await?;
    Ok(HttpResponse::Ok().json(departments))
}

pub async fn create_department(
    data: web::Data<AppState>,
    query: web::Query<StorageQuery>,
    body: web::Json<NewDepartment>,
) -> Result<HttpResponse, ApiError> {
    let department = data
        .provider(query.storage)
        .create_department(body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(department))
}

pub async fn update_department(
    data: web::Data<AppState>,
    query: web::Query<StorageQuery>,
    body: web::Json<UpdateBody<DepartmentPatch>>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let department = data
        .provider(query.storage)
        .update_department(body.id, body.patch)
        .await?;
    Ok(HttpResponse::Ok().json(department))
}

/// Deleting a department also removes every PC assigned to it.
pub async fn delete_department(
    data: web::Data<AppState>,
    query: web::Query<DeleteQuery>,
) -> Result<HttpResponse, ApiError> {
    data.provider(query.storage)
        .delete_department(query.id()?)
        .await?;
    Ok(deleted())
}

/// Catch-all for paths outside the API surface.
pub async fn invalid_endpoint() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "Invalid endpoint" }))
}
