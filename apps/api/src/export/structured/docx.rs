//! WordprocessingML packaging for a [`DocTree`] via `docx-rs`.
//!
//! Headings use the `Title` and `Heading2` paragraph styles registered here;
//! paragraphs carry their runs' bold/italic flags. Pages are A4 portrait with
//! one-inch margins.

use std::io::Cursor;

use docx_rs::{Docx, PageMargin, Paragraph, Run, Style, StyleType};

use super::tree::{Block, DocTree, HeadingLevel, TextRun};
use crate::export::ExportError;

// A4 portrait and margins, in twentieths of a point.
const PAGE_WIDTH: u32 = 11906;
const PAGE_HEIGHT: u32 = 16838;
const MARGIN: i32 = 1440;

/// Control characters other than tab and newline are not legal XML 1.0.
fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|&c| !c.is_control() || c == '\t' || c == '\n')
        .collect()
}

fn styles() -> [Style; 2] {
    [
        Style::new(HeadingLevel::Title.style_id(), StyleType::Paragraph)
            .name("Title")
            .size(48)
            .bold(),
        Style::new(HeadingLevel::Heading2.style_id(), StyleType::Paragraph)
            .name("heading 2")
            .size(28)
            .bold(),
    ]
}

fn run(text_run: &TextRun) -> Run {
    let mut run = Run::new().add_text(clean_text(&text_run.text));
    if text_run.bold {
        run = run.bold();
    }
    if text_run.italic {
        run = run.italic();
    }
    run
}

fn paragraph(block: &Block) -> Paragraph {
    match block {
        Block::Heading { level, text } => Paragraph::new()
            .add_run(Run::new().add_text(clean_text(text)))
            .style(level.style_id()),
        Block::Paragraph { runs } => runs
            .iter()
            .fold(Paragraph::new(), |p, r| p.add_run(run(r))),
    }
}

/// Maps the tree onto a `docx-rs` document.
pub fn build_docx(tree: &DocTree) -> Docx {
    let docx = styles().into_iter().fold(Docx::new(), Docx::add_style);
    tree.blocks
        .iter()
        .fold(docx, |docx, block| docx.add_paragraph(paragraph(block)))
        .page_size(PAGE_WIDTH, PAGE_HEIGHT)
        .page_margin(
            PageMargin::new()
                .top(MARGIN)
                .bottom(MARGIN)
                .left(MARGIN)
                .right(MARGIN),
        )
}

/// Packs the tree into a `.docx` archive.
pub fn write_docx(tree: &DocTree) -> Result<Vec<u8>, ExportError> {
    let mut out = Cursor::new(Vec::new());
    build_docx(tree)
        .build()
        .pack(&mut out)
        .map_err(|e| ExportError::Archive(e.to_string()))?;
    Ok(out.into_inner())
}
