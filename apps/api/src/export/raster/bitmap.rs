use crate::export::ExportError;

pub const WHITE: [u8; 3] = [0xff, 0xff, 0xff];

/// Straight-alpha RGBA8 pixels of a rendered preview, row-major, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Opaque RGB8 pixels ready to be embedded in a PDF.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl Bitmap {
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ExportError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .unwrap_or(usize::MAX);
        if pixels.len() != expected {
            return Err(ExportError::BitmapSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Bitmap {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Nearest-neighbour upscale by an integer factor.
    ///
    /// Dimensions saturate at `u32::MAX`; only an empty bitmap can get there,
    /// since a non-empty one is bounded by its pixel buffer.
    pub fn upscale(&self, factor: u32) -> Bitmap {
        if factor <= 1 {
            return self.clone();
        }
        if self.is_empty() {
            return Bitmap {
                width: self.width.saturating_mul(factor),
                height: self.height.saturating_mul(factor),
                pixels: Vec::new(),
            };
        }
        let (w, h, f) = (self.width as usize, self.height as usize, factor as usize);
        let row_bytes = w * f * 4;
        let mut pixels = Vec::with_capacity(row_bytes * h * f);

        for src_row in self.pixels.chunks_exact(w * 4) {
            let mut row = Vec::with_capacity(row_bytes);
            for px in src_row.chunks_exact(4) {
                for _ in 0..f {
                    row.extend_from_slice(px);
                }
            }
            for _ in 0..f {
                pixels.extend_from_slice(&row);
            }
        }

        Bitmap {
            width: self.width.saturating_mul(factor),
            height: self.height.saturating_mul(factor),
            pixels,
        }
    }

    /// Composites every pixel over an opaque background and drops alpha.
    pub fn flatten(&self, background: [u8; 3]) -> Raster {
        let rgb = self
            .pixels
            .chunks_exact(4)
            .flat_map(|px| {
                let alpha = px[3] as u32;
                let blend = move |c: u8, bg: u8| {
                    ((c as u32 * alpha + bg as u32 * (255 - alpha) + 127) / 255) as u8
                };
                [
                    blend(px[0], background[0]),
                    blend(px[1], background[1]),
                    blend(px[2], background[2]),
                ]
            })
            .collect();

        Raster {
            width: self.width,
            height: self.height,
            rgb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_checks_length() {
        assert!(Bitmap::from_rgba(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            Bitmap::from_rgba(2, 2, vec![0; 15]),
            Err(ExportError::BitmapSize { expected: 16, .. })
        ));
    }

    #[test]
    fn test_upscale_doubles_dimensions_and_repeats_pixels() {
        let red = [255, 0, 0, 255];
        let blue = [0, 0, 255, 255];
        let bitmap = Bitmap::from_rgba(2, 1, [red, blue].concat()).unwrap();

        let scaled = bitmap.upscale(2);
        assert_eq!((scaled.width(), scaled.height()), (4, 2));
        let row = [red, red, blue, blue].concat();
        assert_eq!(scaled.pixels, [row.clone(), row].concat());
    }

    #[test]
    fn test_flatten_forces_white_background() {
        let transparent = [10, 20, 30, 0];
        let opaque = [10, 20, 30, 255];
        let bitmap = Bitmap::from_rgba(2, 1, [transparent, opaque].concat()).unwrap();

        let raster = bitmap.flatten(WHITE);
        assert_eq!(raster.rgb, vec![255, 255, 255, 10, 20, 30]);
    }

    #[test]
    fn test_flatten_half_alpha_blends() {
        let bitmap = Bitmap::from_rgba(1, 1, vec![0, 0, 0, 128]).unwrap();
        let raster = bitmap.flatten(WHITE);
        assert_eq!(raster.rgb, vec![127, 127, 127]);
    }

    #[test]
    fn test_empty_bitmap() {
        assert!(Bitmap::from_rgba(0, 5, vec![]).unwrap().is_empty());
    }

    #[test]
    fn test_upscale_empty_bitmap_saturates() {
        let bitmap = Bitmap::from_rgba(u32::MAX, 0, vec![]).unwrap();
        let scaled = bitmap.upscale(2);
        assert_eq!((scaled.width(), scaled.height()), (u32::MAX, 0));
        assert!(scaled.is_empty());
    }
}
