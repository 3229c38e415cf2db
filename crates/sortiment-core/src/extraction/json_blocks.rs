use serde::Deserialize;

use crate::error::SortimentError;
use crate::extraction::{BBox, FragmentSource, PageContent, TextBlock};

/// Fragment source reading pre-extracted block dumps.
///
/// Expected shape:
///
/// ```json
/// [{ "page": 1, "blocks": [{ "x0": 40.0, "y0": 120.0, "x1": 80.0, "y1": 132.0, "text": "00123" }] }]
/// ```
///
/// Fields beyond the bounding box and text (e.g. `block_no`) are ignored.
pub struct JsonBlocksSource;

impl JsonBlocksSource {
    pub fn new() -> Self {
        JsonBlocksSource
    }
}

impl Default for JsonBlocksSource {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct PageDump {
    page: usize,
    #[serde(default)]
    blocks: Vec<BlockDump>,
}

#[derive(Debug, Deserialize)]
struct BlockDump {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    text: String,
}

impl FragmentSource for JsonBlocksSource {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, SortimentError> {
        let dump: Vec<PageDump> = serde_json::from_slice(pdf_bytes)
            .map_err(|e| SortimentError::Extraction(format!("invalid block dump: {}", e)))?;

        let mut pages = Vec::with_capacity(dump.len());
        for page in dump {
            if page.page == 0 {
                return Err(SortimentError::Extraction(
                    "block dump page numbers are 1-based".into(),
                ));
            }
            pages.push(PageContent {
                page_number: page.page,
                blocks: page
                    .blocks
                    .into_iter()
                    .map(|b| TextBlock {
                        bbox: BBox {
                            x_min: b.x0,
                            y_min: b.y0,
                            x_max: b.x1,
                            y_max: b.y1,
                        },
                        text: b.text,
                    })
                    .collect(),
            });
        }

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "json-blocks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_fields_ignored() {
        let json = br#"[
            { "page": 1, "width": 595, "blocks": [
                { "x0": 40.0, "y0": 120.0, "x1": 80.0, "y1": 132.0, "text": "00123\n", "block_no": 3, "block_type": 0 }
            ] },
            { "page": 2 }
        ]"#;
        let pages = JsonBlocksSource::new().extract_pages(json).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].blocks[0].text, "00123\n");
        assert_eq!(pages[0].blocks[0].bbox.y_min, 120.0);
        assert!(pages[1].blocks.is_empty());
    }

    #[test]
    fn test_malformed_dump_is_extraction_error() {
        let err = JsonBlocksSource::new().extract_pages(b"%PDF-1.7").unwrap_err();
        assert!(matches!(err, SortimentError::Extraction(_)));
    }

    #[test]
    fn test_zero_page_rejected() {
        let json = br#"[{ "page": 0, "blocks": [] }]"#;
        assert!(JsonBlocksSource::new().extract_pages(json).is_err());
    }
}
