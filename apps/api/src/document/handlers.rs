//! Editor endpoints shared by every document type.
//!
//! The service keeps no documents: each request carries the current snapshot
//! and the response is the next one.

use axum::Json;
use serde::Deserialize;
use tracing::debug;

use super::Document;
use crate::models::EntryId;

#[derive(Deserialize)]
#[serde(bound(deserialize = "D: Document"))]
pub struct UpdateRequest<D: Document> {
    pub document: D,
    /// Dotted field path, e.g. `contact.email` or `experience.0.bullets.2`.
    pub field: D::Field,
    pub value: String,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "D: Document"))]
pub struct EditRequest<D: Document> {
    pub document: D,
    pub edit: D::Edit,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "D: Document"))]
pub struct ReorderRequest<D: Document> {
    pub document: D,
    pub list: D::List,
    pub active: EntryId,
    pub over: EntryId,
}

/// GET /api/v1/{resume,cover-letter}/sample
pub async fn handle_sample<D: Document>() -> Json<D> {
    Json(D::sample())
}

/// POST /api/v1/{resume,cover-letter}/normalize
pub async fn handle_normalize<D: Document>(Json(document): Json<D>) -> Json<D> {
    Json(document.backfill_identifiers())
}

/// POST /api/v1/{resume,cover-letter}/update
pub async fn handle_update<D: Document>(Json(req): Json<UpdateRequest<D>>) -> Json<D> {
    Json(req.document.apply_field_update(&req.field, &req.value))
}

/// POST /api/v1/{resume,cover-letter}/edit
pub async fn handle_edit<D: Document>(Json(req): Json<EditRequest<D>>) -> Json<D> {
    Json(req.document.apply_edit(&req.edit))
}

/// POST /api/v1/{resume,cover-letter}/reorder
pub async fn handle_reorder<D: Document>(Json(req): Json<ReorderRequest<D>>) -> Json<D> {
    debug!("Reorder {} over {}", req.active, req.over);
    Json(req.document.reorder(&req.list, &req.active, &req.over))
}
