// Export pipelines.
// Raster: rendered preview pixels → paginated PDF (reads the preview, never the model).
// Structured: document model → DOCX tree (reads the model, never the preview).
// The two paths share no intermediate representation.

pub mod handlers;
pub mod raster;
pub mod structured;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Captured preview '{element_id}' is empty")]
    EmptyCapture { element_id: String },

    #[error("Bitmap is {width}x{height} but carries {actual} bytes (expected {expected})")]
    BitmapSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Image of {width}x{height} pixels is too large to embed")]
    ImageTooLarge { width: u32, height: u32 },

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Task(String),
}

/// A finished export, ready to be handed to the browser as a download.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFile {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl IntoResponse for ExportedFile {
    fn into_response(self) -> Response {
        let disposition = format!(
            "attachment; filename=\"{}\"",
            self.filename.replace(['"', '\\'], "_")
        );
        (
            [
                (header::CONTENT_TYPE, self.content_type.to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.bytes,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_headers() {
        let file = ExportedFile {
            filename: "Ada \"AL\" - Classic.pdf".to_string(),
            content_type: PDF_CONTENT_TYPE,
            bytes: b"%PDF".to_vec(),
        };
        let response = file.into_response();
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            PDF_CONTENT_TYPE
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Ada _AL_ - Classic.pdf\""
        );
    }
}
