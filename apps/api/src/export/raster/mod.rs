// Visual export: capture the rendered preview at 2x on white, fit it to A4
// width and slice it across as many pages as the height needs.

pub mod bitmap;
pub mod capture;
pub mod pagination;
pub mod pdf;

use tracing::{error, info, warn};

pub use bitmap::Bitmap;
pub use capture::{CaptureSurface, PreviewRegistry};

use bitmap::Raster;
use capture::CaptureOptions;
use pagination::A4;

use super::{ExportError, ExportedFile, PDF_CONTENT_TYPE};

/// Rasterizes the preview mounted under `element_id` into a paginated PDF.
///
/// A missing preview is not an error: it is logged and `None` is returned so
/// the caller can treat the request as a no-op.
pub async fn export_preview_to_pdf<S>(
    surface: &S,
    element_id: &str,
    filename: &str,
) -> Option<ExportedFile>
where
    S: CaptureSurface + ?Sized,
{
    let Some(raster) = surface.capture(element_id, CaptureOptions::default()).await else {
        warn!("Preview element not found: {element_id}");
        return None;
    };

    match render_pdf(element_id, raster).await {
        Ok(bytes) => {
            info!(
                "Exported {element_id} to {filename} ({} bytes)",
                bytes.len()
            );
            Some(ExportedFile {
                filename: filename.to_string(),
                content_type: PDF_CONTENT_TYPE,
                bytes,
            })
        }
        Err(e) => {
            error!("PDF export of {element_id} failed: {e}");
            None
        }
    }
}

async fn render_pdf(element_id: &str, raster: Raster) -> Result<Vec<u8>, ExportError> {
    if raster.width == 0 || raster.height == 0 {
        return Err(ExportError::EmptyCapture {
            element_id: element_id.to_string(),
        });
    }

    tokio::task::spawn_blocking(move || {
        let plan = pagination::plan_for_bitmap(raster.width, raster.height, A4);
        pdf::write_pdf(&plan, &raster)
    })
    .await
    .map_err(|e| ExportError::Task(e.to_string()))?
}
