//! Image-only PDF documents built with `pdf-writer`.
//!
//! The raster is stored once as a Flate-compressed image XObject and every page
//! draws it through its own content stream, offset by the page's placement.
//! Output is byte-for-byte deterministic for a given plan and raster.

use std::io::Write;

use flate2::{write::ZlibEncoder, Compression};
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref};

use super::{bitmap::Raster, pagination::PagePlan};
use crate::export::ExportError;

const IMAGE_NAME: Name<'static> = Name(b"Im0");

// Object layout: catalog, page tree, image, then a (page, content) pair per page.
const CATALOG_ID: i32 = 1;
const PAGE_TREE_ID: i32 = 2;
const IMAGE_ID: i32 = 3;
const FIRST_PAGE_ID: i32 = 4;

fn compress(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// `cm` matrix placing the image on one page. PDF user space grows upward from
/// the bottom edge, so a top-relative `y` becomes `page_height - y - image_height`.
fn image_transform(plan: &PagePlan, index: usize) -> [f32; 6] {
    let p = plan.placements[index];
    let y = plan.page.height - p.y - p.height;
    [
        p.width as f32,
        0.0,
        0.0,
        p.height as f32,
        p.x as f32,
        y as f32,
    ]
}

pub fn write_pdf(plan: &PagePlan, raster: &Raster) -> Result<Vec<u8>, ExportError> {
    let too_large = || ExportError::ImageTooLarge {
        width: raster.width,
        height: raster.height,
    };
    let width = i32::try_from(raster.width).map_err(|_| too_large())?;
    let height = i32::try_from(raster.height).map_err(|_| too_large())?;
    let page_count = i32::try_from(plan.page_count()).map_err(|_| too_large())?;

    let page_tree_id = Ref::new(PAGE_TREE_ID);
    let image_id = Ref::new(IMAGE_ID);
    let pages: Vec<(Ref, Ref)> = (0..page_count)
        .map(|i| {
            let id = FIRST_PAGE_ID + 2 * i;
            (Ref::new(id), Ref::new(id + 1))
        })
        .collect();

    let mut pdf = Pdf::new();
    pdf.set_version(1, 4);
    pdf.catalog(Ref::new(CATALOG_ID)).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(pages.iter().map(|&(page, _)| page))
        .count(page_count);

    let data = compress(&raster.rgb)?;
    let mut image = pdf.image_xobject(image_id, &data);
    image.filter(Filter::FlateDecode);
    image.width(width);
    image.height(height);
    image.color_space().device_rgb();
    image.bits_per_component(8);
    image.finish();

    let media_box = Rect::new(0.0, 0.0, plan.page.width as f32, plan.page.height as f32);
    for (index, &(page_id, content_id)) in pages.iter().enumerate() {
        let mut page = pdf.page(page_id);
        page.media_box(media_box);
        page.parent(page_tree_id);
        page.contents(content_id);
        page.resources().x_objects().pair(IMAGE_NAME, image_id);
        page.finish();

        let mut content = Content::new();
        content.save_state();
        content.transform(image_transform(plan, index));
        content.x_object(IMAGE_NAME);
        content.restore_state();
        pdf.stream(content_id, &content.finish());
    }

    Ok(pdf.finish())
}
