use crate::error::SortimentError;
use crate::extraction::{BBox, FragmentSource, PageContent, TextBlock};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::Write;
use std::process::Command;

/// Fragment source backed by pdftotext (from poppler-utils).
///
/// Uses `pdftotext -bbox-layout`, which groups words into lines and lines
/// into layout blocks. Each block becomes one `TextBlock`.
pub struct PdftotextSource;

impl PdftotextSource {
    pub fn new() -> Self {
        PdftotextSource
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentSource for PdftotextSource {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, SortimentError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| SortimentError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| SortimentError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-bbox-layout")
            .arg(tmpfile.path())
            .arg("-")
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SortimentError::PdftotextNotFound
                } else {
                    SortimentError::Extraction(format!("pdftotext -bbox-layout failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(SortimentError::PdftotextFailed { code, stderr });
        }

        let xml = String::from_utf8_lossy(&output.stdout);
        let pages = parse_bbox_xml(&xml)?;
        log::debug!(
            "pdftotext returned {} page(s), {} block(s)",
            pages.len(),
            pages.iter().map(|p| p.blocks.len()).sum::<usize>()
        );
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

struct OpenBlock {
    bbox: BBox,
    lines: Vec<String>,
}

/// Parse `pdftotext -bbox-layout` XHTML into pages of text blocks.
///
/// Pages are numbered by order of appearance. Words of a line are joined
/// with a space, lines of a block with `\n`.
fn parse_bbox_xml(xml: &str) -> Result<Vec<PageContent>, SortimentError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut pages: Vec<PageContent> = Vec::new();
    let mut current_page: Option<PageContent> = None;
    let mut current_block: Option<OpenBlock> = None;
    let mut line_words: Vec<String> = Vec::new();
    let mut word = String::new();
    let mut in_word = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"page" => {
                    current_page = Some(PageContent {
                        page_number: pages.len() + 1,
                        blocks: Vec::new(),
                    });
                }
                b"block" => {
                    current_block = Some(OpenBlock {
                        bbox: parse_bbox(&e)?,
                        lines: Vec::new(),
                    });
                }
                b"line" => line_words.clear(),
                b"word" => {
                    in_word = true;
                    word.clear();
                }
                _ => {}
            },
            Ok(Event::Empty(e)) if e.name().as_ref() == b"page" => {
                pages.push(PageContent {
                    page_number: pages.len() + 1,
                    blocks: Vec::new(),
                });
            }
            Ok(Event::Text(t)) if in_word => {
                let text = t
                    .unescape()
                    .map_err(|e| SortimentError::BboxParse(e.to_string()))?;
                word.push_str(&text);
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"word" => {
                    in_word = false;
                    let w = word.trim();
                    if !w.is_empty() {
                        line_words.push(w.to_string());
                    }
                }
                b"line" => {
                    if let Some(block) = current_block.as_mut() {
                        if !line_words.is_empty() {
                            block.lines.push(line_words.join(" "));
                        }
                    }
                    line_words.clear();
                }
                b"block" => {
                    if let (Some(block), Some(page)) = (current_block.take(), current_page.as_mut())
                    {
                        if !block.lines.is_empty() {
                            page.blocks.push(TextBlock {
                                bbox: block.bbox,
                                text: block.lines.join("\n"),
                            });
                        }
                    }
                }
                b"page" => {
                    if let Some(page) = current_page.take() {
                        pages.push(page);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(SortimentError::BboxParse(format!(
                    "at byte {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
    }

    Ok(pages)
}

fn parse_bbox(tag: &BytesStart) -> Result<BBox, SortimentError> {
    let mut coords: [Option<f32>; 4] = [None; 4];

    for attr in tag.attributes() {
        let attr = attr.map_err(|e| SortimentError::BboxParse(e.to_string()))?;
        let slot = match attr.key.as_ref() {
            b"xMin" => 0,
            b"yMin" => 1,
            b"xMax" => 2,
            b"yMax" => 3,
            _ => continue,
        };
        let value = attr
            .unescape_value()
            .map_err(|e| SortimentError::BboxParse(e.to_string()))?;
        coords[slot] = value.trim().parse().ok();
    }

    match coords {
        [Some(x_min), Some(y_min), Some(x_max), Some(y_max)] => Ok(BBox {
            x_min,
            y_min,
            x_max,
            y_max,
        }),
        _ => Err(SortimentError::BboxParse(
            "block without a complete bounding box".into(),
        )),
    }
}
