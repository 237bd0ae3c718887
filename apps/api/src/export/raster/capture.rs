use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, error};

use super::bitmap::{Bitmap, Raster, WHITE};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureOptions {
    pub scale: u32,
    pub background: [u8; 3],
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            scale: 2,
            background: WHITE,
        }
    }
}

/// Something that can rasterize a rendered preview by element id.
///
/// Returns `None` when no element with that id is currently rendered.
#[async_trait]
pub trait CaptureSurface: Send + Sync {
    async fn capture(&self, element_id: &str, options: CaptureOptions) -> Option<Raster>;
}

/// Previews the browser has rendered and uploaded, keyed by element id.
#[derive(Clone, Default)]
pub struct PreviewRegistry {
    previews: Arc<RwLock<HashMap<String, Arc<Bitmap>>>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the rendered preview for `element_id`.
    pub async fn mount(&self, element_id: &str, bitmap: Bitmap) {
        debug!(
            "Mounting preview {element_id} ({}x{})",
            bitmap.width(),
            bitmap.height()
        );
        self.previews
            .write()
            .await
            .insert(element_id.to_string(), Arc::new(bitmap));
    }

    /// Returns whether a preview was mounted under `element_id`.
    pub async fn unmount(&self, element_id: &str) -> bool {
        self.previews.write().await.remove(element_id).is_some()
    }

    #[cfg(test)]
    pub async fn is_mounted(&self, element_id: &str) -> bool {
        self.previews.read().await.contains_key(element_id)
    }
}

#[async_trait]
impl CaptureSurface for PreviewRegistry {
    async fn capture(&self, element_id: &str, options: CaptureOptions) -> Option<Raster> {
        let bitmap = self.previews.read().await.get(element_id).cloned()?;

        // Upscaling a full page is CPU-bound; keep it off the async workers.
        let task = tokio::task::spawn_blocking(move || {
            bitmap.upscale(options.scale).flatten(options.background)
        });
        match task.await {
            Ok(raster) => Some(raster),
            Err(e) => {
                error!("Capture of {element_id} failed: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(width: u32, height: u32) -> Bitmap {
        Bitmap::from_rgba(width, height, vec![0; (width * height * 4) as usize]).unwrap()
    }

    #[tokio::test]
    async fn test_capture_unknown_element_is_none() {
        let registry = PreviewRegistry::new();
        assert!(registry
            .capture("preview-classic", CaptureOptions::default())
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_capture_scales_and_flattens() {
        let registry = PreviewRegistry::new();
        registry.mount("preview-classic", pixel(3, 2)).await;

        let raster = registry
            .capture("preview-classic", CaptureOptions::default())
            .await
            .unwrap();
        assert_eq!((raster.width, raster.height), (6, 4));
        // Fully transparent input lands on white.
        assert!(raster.rgb.iter().all(|&c| c == 0xff));
    }

    #[tokio::test]
    async fn test_unmount() {
        let registry = PreviewRegistry::new();
        registry.mount("preview-t1", pixel(1, 1)).await;
        assert!(registry.is_mounted("preview-t1").await);

        assert!(registry.unmount("preview-t1").await);
        assert!(!registry.unmount("preview-t1").await);
        assert!(registry
            .capture("preview-t1", CaptureOptions::default())
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_remount_replaces() {
        let registry = PreviewRegistry::new();
        registry.mount("preview-modern", pixel(1, 1)).await;
        registry.mount("preview-modern", pixel(5, 1)).await;

        let raster = registry
            .capture("preview-modern", CaptureOptions { scale: 1, background: WHITE })
            .await
            .unwrap();
        assert_eq!(raster.width, 5);
    }
}
