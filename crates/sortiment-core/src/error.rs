use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SortimentError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to read pdftotext bbox output: {0}")]
    BboxParse(String),

    #[error("failed to extract chunk on page {page}: {reason}")]
    ChunkExtraction { page: usize, reason: String },

    #[error("failed to load rules from {path}: {reason}")]
    RulesLoad { path: PathBuf, reason: String },

    #[error("invalid rules: {0}")]
    RulesInvalid(String),

    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
