pub mod json_blocks;
pub mod pdftotext;

use crate::error::SortimentError;

#[derive(Debug, Clone, PartialEq)]
pub struct BBox {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

/// One positioned text block as laid out on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub bbox: BBox,
    /// Raw block text; may carry surrounding whitespace and inner newlines.
    pub text: String,
}

/// Blocks extracted from a single page of a PDF, in traversal order.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// 1-based page index.
    pub page_number: usize,
    pub blocks: Vec<TextBlock>,
}

/// Trait for positioned-text extraction backends.
pub trait FragmentSource: Send + Sync {
    /// Extract text blocks from document bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, SortimentError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
