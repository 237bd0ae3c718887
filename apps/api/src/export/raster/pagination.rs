// Page slicing for the raster export.
// The whole captured image is scaled to page width and drawn once per page,
// shifted up by one page height each time so every page shows the next slice.

/// Tolerance for page-boundary comparisons on scaled floating-point heights.
pub const EPSILON: f64 = 1e-6;

/// Page dimensions in PDF points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

/// ISO A4 portrait.
pub const A4: PageSize = PageSize {
    width: 595.28,
    height: 841.89,
};

/// Where the image is drawn on one page. `y` is measured from the top edge of
/// the page downward; negative values push the image above the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan {
    pub page: PageSize,
    pub placements: Vec<Placement>,
}

impl PagePlan {
    pub fn page_count(&self) -> usize {
        self.placements.len()
    }
}

/// Height of an image after scaling it to the page width, aspect preserved.
pub fn scaled_height(pixel_width: u32, pixel_height: u32, page: PageSize) -> f64 {
    if pixel_width == 0 {
        return 0.0;
    }
    pixel_height as f64 * page.width / pixel_width as f64
}

/// Lays out an image of `image_height` points (already at page width).
///
/// An image shorter than a page is centred vertically on a single page.
/// Otherwise pages are added while content remains beyond the previous page;
/// an image of exactly N page heights produces N pages.
pub fn plan_pages(image_height: f64, page: PageSize) -> PagePlan {
    let fits_on_one_page = image_height < page.height - EPSILON;
    let mut position = if fits_on_one_page {
        (page.height - image_height) / 2.0
    } else {
        0.0
    };
    let mut remaining = image_height;
    let mut placements = Vec::new();

    loop {
        placements.push(Placement {
            x: 0.0,
            y: position,
            width: page.width,
            height: image_height,
        });
        remaining -= page.height;
        if remaining <= EPSILON {
            break;
        }
        position -= page.height;
    }

    PagePlan { page, placements }
}

/// Convenience for a pixel bitmap: scale to page width, then [`plan_pages`].
pub fn plan_for_bitmap(pixel_width: u32, pixel_height: u32, page: PageSize) -> PagePlan {
    plan_pages(scaled_height(pixel_width, pixel_height, page), page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_short_image_is_centred_on_one_page() {
        let plan = plan_pages(400.0, A4);
        assert_eq!(plan.page_count(), 1);
        assert!(approx(plan.placements[0].y, (A4.height - 400.0) / 2.0));
        assert!(approx(plan.placements[0].width, A4.width));
    }

    #[test]
    fn test_exactly_one_page() {
        let plan = plan_pages(A4.height, A4);
        assert_eq!(plan.page_count(), 1);
        assert!(approx(plan.placements[0].y, 0.0));
    }

    #[test]
    fn test_exactly_two_pages() {
        let plan = plan_pages(A4.height * 2.0, A4);
        assert_eq!(plan.page_count(), 2);
        assert!(approx(plan.placements[0].y, 0.0));
        assert!(approx(plan.placements[1].y, -A4.height));
    }

    #[test]
    fn test_fractional_overflow_adds_a_page() {
        let plan = plan_pages(A4.height * 2.3, A4);
        assert_eq!(plan.page_count(), 3);
        assert!(approx(plan.placements[2].y, -2.0 * A4.height));
    }

    #[test]
    fn test_every_page_shows_new_content() {
        for factor in [1.0, 1.01, 1.5, 2.0, 2.3, 3.0, 4.75] {
            let height = A4.height * factor;
            let plan = plan_pages(height, A4);
            let last_offset = (plan.page_count() - 1) as f64 * A4.height;
            assert!(last_offset < height, "factor {factor}");
            assert!(
                last_offset + A4.height >= height - EPSILON,
                "factor {factor} leaves content unprinted"
            );
        }
    }

    #[test]
    fn test_bitmap_scaling_preserves_aspect() {
        // 1:2 aspect at A4 width is ~1.41 page heights.
        let plan = plan_for_bitmap(1000, 2000, A4);
        assert!(approx(plan.placements[0].height, 2.0 * A4.width));
        assert_eq!(plan.page_count(), 2);
    }

    #[test]
    fn test_zero_width_bitmap() {
        assert_eq!(scaled_height(0, 100, A4), 0.0);
    }
}
