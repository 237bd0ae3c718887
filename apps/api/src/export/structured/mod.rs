// Structured export: document model → document tree → DOCX package.

pub mod docx;
pub mod tree;

use serde::de::DeserializeOwned;
use tracing::info;

use tree::{cover_letter_tree, resume_tree, DocTree};

use super::{ExportError, ExportedFile, DOCX_CONTENT_TYPE};
use crate::document::{CoverTemplate, ResumeTemplate};
use crate::models::{CoverLetter, Resume};

/// Documents that can be exported as a word-processor file.
pub trait StructuredExport {
    /// Preview template the download is named after.
    type Template: Copy + DeserializeOwned + Send;

    fn doc_tree(&self) -> DocTree;

    /// Download name without extension, e.g. `Ada Lovelace - Classic`.
    fn file_base(&self, template: Self::Template) -> String;
}

impl StructuredExport for Resume {
    type Template = ResumeTemplate;

    fn doc_tree(&self) -> DocTree {
        resume_tree(self)
    }

    fn file_base(&self, template: ResumeTemplate) -> String {
        template.file_base(self)
    }
}

impl StructuredExport for CoverLetter {
    type Template = CoverTemplate;

    fn doc_tree(&self) -> DocTree {
        cover_letter_tree(self)
    }

    fn file_base(&self, template: CoverTemplate) -> String {
        template.file_base(self)
    }
}

pub fn export_docx<D: StructuredExport>(
    document: &D,
    template: D::Template,
) -> Result<ExportedFile, ExportError> {
    let bytes = docx::write_docx(&document.doc_tree())?;
    let filename = format!("{}.docx", document.file_base(template));
    info!("Exported {filename} ({} bytes)", bytes.len());

    Ok(ExportedFile {
        filename,
        content_type: DOCX_CONTENT_TYPE,
        bytes,
    })
}
