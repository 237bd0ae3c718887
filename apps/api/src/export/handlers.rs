use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use super::raster::{export_preview_to_pdf, Bitmap};
use super::structured::{export_docx, StructuredExport};
use super::ExportedFile;
use crate::document::{collapse_whitespace, is_preview_element};
use crate::errors::AppError;
use crate::state::AppState;

const DEFAULT_PDF_NAME: &str = "Resume.pdf";

#[derive(Debug, Deserialize)]
pub struct PreviewSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct PdfRequest {
    #[serde(default = "default_pdf_name")]
    pub filename: String,
}

fn default_pdf_name() -> String {
    DEFAULT_PDF_NAME.to_string()
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "D: StructuredExport + serde::de::DeserializeOwned"))]
pub struct DocxRequest<D: StructuredExport> {
    pub document: D,
    pub template: D::Template,
}

/// PUT /api/v1/previews/:element_id?width=&height=
///
/// Body is raw RGBA8, row-major, `width * height * 4` bytes. Only the
/// editors' own preview ids (`preview-<template>`) can be mounted.
pub async fn handle_mount_preview(
    State(state): State<AppState>,
    Path(element_id): Path<String>,
    Query(size): Query<PreviewSize>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    if !is_preview_element(&element_id) {
        return Err(AppError::NotFound(format!("No preview named {element_id}")));
    }
    if body.len() > state.config.max_preview_bytes {
        return Err(AppError::Validation(format!(
            "Preview is {} bytes; the limit is {}",
            body.len(),
            state.config.max_preview_bytes
        )));
    }
    let bitmap = Bitmap::from_rgba(size.width, size.height, body.to_vec())
        .map_err(|e| AppError::Validation(e.to_string()))?;

    state.previews.mount(&element_id, bitmap).await;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/previews/:element_id
pub async fn handle_unmount_preview(
    State(state): State<AppState>,
    Path(element_id): Path<String>,
) -> StatusCode {
    if state.previews.unmount(&element_id).await {
        info!("Unmounted preview {element_id}");
    }
    StatusCode::NO_CONTENT
}

/// POST /api/v1/previews/:element_id/pdf
///
/// Answers 204 with no body when the preview is not mounted or cannot be rendered.
/// Whitespace runs in the download name collapse to single spaces.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Path(element_id): Path<String>,
    Json(req): Json<PdfRequest>,
) -> Response {
    let filename = match collapse_whitespace(&req.filename) {
        name if name.is_empty() => default_pdf_name(),
        name => name,
    };
    match export_preview_to_pdf(&state.previews, &element_id, &filename).await {
        Some(file) => file.into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// POST /api/v1/{resume,cover-letter}/export/docx
pub async fn handle_export_docx<D>(
    Json(req): Json<DocxRequest<D>>,
) -> Result<ExportedFile, AppError>
where
    D: StructuredExport + serde::de::DeserializeOwned + Send,
{
    Ok(export_docx(&req.document, req.template)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ResumeTemplate;
    use crate::export::{DOCX_CONTENT_TYPE, PDF_CONTENT_TYPE};
    use crate::models::Resume;
    use crate::state::test_state;

    #[tokio::test]
    async fn test_mount_then_export_pdf() {
        let state = test_state(None);
        let status = handle_mount_preview(
            State(state.clone()),
            Path("preview-classic".to_string()),
            Query(PreviewSize {
                width: 2,
                height: 3,
            }),
            Bytes::from(vec![0u8; 2 * 3 * 4]),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let response = handle_export_pdf(
            State(state),
            Path("preview-classic".to_string()),
            Json(PdfRequest {
                filename: "Ada - Classic.pdf".to_string(),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            PDF_CONTENT_TYPE
        );
    }

    #[tokio::test]
    async fn test_pdf_filename_whitespace_is_collapsed() {
        let state = test_state(None);
        handle_mount_preview(
            State(state.clone()),
            Path("preview-classic".to_string()),
            Query(PreviewSize {
                width: 1,
                height: 1,
            }),
            Bytes::from(vec![0u8; 4]),
        )
        .await
        .unwrap();

        let response = handle_export_pdf(
            State(state.clone()),
            Path("preview-classic".to_string()),
            Json(PdfRequest {
                filename: "Ada   Lovelace\t - Classic.pdf".to_string(),
            }),
        )
        .await;
        assert_eq!(
            response.headers()["content-disposition"],
            "attachment; filename=\"Ada Lovelace - Classic.pdf\""
        );

        let response = handle_export_pdf(
            State(state),
            Path("preview-classic".to_string()),
            Json(PdfRequest {
                filename: " \n ".to_string(),
            }),
        )
        .await;
        assert_eq!(
            response.headers()["content-disposition"],
            "attachment; filename=\"Resume.pdf\""
        );
    }

    #[tokio::test]
    async fn test_mount_rejects_unknown_element() {
        let result = handle_mount_preview(
            State(test_state(None)),
            Path("sidebar".to_string()),
            Query(PreviewSize {
                width: 1,
                height: 1,
            }),
            Bytes::from(vec![0u8; 4]),
        )
        .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_mount_rejects_wrong_size() {
        let result = handle_mount_preview(
            State(test_state(None)),
            Path("preview-t1".to_string()),
            Query(PreviewSize {
                width: 10,
                height: 10,
            }),
            Bytes::from_static(b"short"),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_mount_rejects_oversized_body() {
        let state = test_state(None);
        let limit = state.config.max_preview_bytes;
        let result = handle_mount_preview(
            State(state),
            Path("preview-t1".to_string()),
            Query(PreviewSize {
                width: 1,
                height: 1,
            }),
            Bytes::from(vec![0u8; limit + 4]),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_pdf_without_preview_is_no_content() {
        let response = handle_export_pdf(
            State(test_state(None)),
            Path("preview-modern".to_string()),
            Json(PdfRequest {
                filename: default_pdf_name(),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_unmount_is_idempotent() {
        let state = test_state(None);
        let status =
            handle_unmount_preview(State(state), Path("preview-minimal".to_string())).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_docx_download() {
        let req: DocxRequest<Resume> = serde_json::from_value(serde_json::json!({
            "document": { "name": "Ada" },
            "template": "minimal",
        }))
        .unwrap();
        assert_eq!(req.template, ResumeTemplate::Minimal);

        let file = handle_export_docx(Json(req)).await.unwrap();
        assert_eq!(file.filename, "Ada - Minimal.docx");
        assert_eq!(file.content_type, DOCX_CONTENT_TYPE);
    }
}
