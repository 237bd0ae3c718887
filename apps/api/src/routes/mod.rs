pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::document::handlers::{
    handle_edit, handle_normalize, handle_reorder, handle_sample, handle_update,
};
use crate::export::handlers::{
    handle_export_docx, handle_export_pdf, handle_mount_preview, handle_unmount_preview,
};
use crate::loader::handlers::handle_loader_script;
use crate::models::{CoverLetter, Resume};
use crate::rewrite::handlers::handle_improve;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Raw RGBA previews are far larger than axum's default body limit.
    // Headroom covers the bytes beyond the limit the handler itself reports on.
    let preview_limit = state.config.max_preview_bytes.saturating_add(1);

    Router::new()
        .route("/health", get(health::health_handler))
        // Résumé editor
        .route("/api/v1/resume/sample", get(handle_sample::<Resume>))
        .route("/api/v1/resume/normalize", post(handle_normalize::<Resume>))
        .route("/api/v1/resume/update", post(handle_update::<Resume>))
        .route("/api/v1/resume/edit", post(handle_edit::<Resume>))
        .route("/api/v1/resume/reorder", post(handle_reorder::<Resume>))
        .route("/api/v1/resume/improve", post(handle_improve::<Resume>))
        .route(
            "/api/v1/resume/export/docx",
            post(handle_export_docx::<Resume>),
        )
        // Cover-letter editor
        .route(
            "/api/v1/cover-letter/sample",
            get(handle_sample::<CoverLetter>),
        )
        .route(
            "/api/v1/cover-letter/normalize",
            post(handle_normalize::<CoverLetter>),
        )
        .route(
            "/api/v1/cover-letter/update",
            post(handle_update::<CoverLetter>),
        )
        .route(
            "/api/v1/cover-letter/edit",
            post(handle_edit::<CoverLetter>),
        )
        .route(
            "/api/v1/cover-letter/reorder",
            post(handle_reorder::<CoverLetter>),
        )
        .route(
            "/api/v1/cover-letter/improve",
            post(handle_improve::<CoverLetter>),
        )
        .route(
            "/api/v1/cover-letter/export/docx",
            post(handle_export_docx::<CoverLetter>),
        )
        // Rendered previews and the visual export
        .route(
            "/api/v1/previews/:element_id",
            put(handle_mount_preview)
                .delete(handle_unmount_preview)
                .layer(DefaultBodyLimit::max(preview_limit)),
        )
        .route(
            "/api/v1/previews/:element_id/pdf",
            post(handle_export_pdf),
        )
        // Loading screen
        .route("/api/v1/loader/script", get(handle_loader_script))
        .with_state(state)
}
