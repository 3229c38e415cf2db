pub mod chunks;
pub mod extract;
pub mod rules;

use sortiment_core::error::SortimentError;
use sortiment_core::extraction::json_blocks::JsonBlocksSource;
use sortiment_core::extraction::pdftotext::PdftotextSource;
use sortiment_core::extraction::FragmentSource;
use sortiment_core::rules::{builtin, load_rules, CatalogRules};
use std::path::Path;

/// Compile the rule file if one was given, else the built-in rules.
pub fn catalog_rules(path: Option<&Path>) -> Result<CatalogRules, SortimentError> {
    match path {
        Some(path) => CatalogRules::compile(&load_rules(path)?),
        None => builtin::default_rules(),
    }
}

/// Pick the fragment source for a document: a JSON block dump, or
/// pdftotext when it is installed.
pub fn fragment_source(blocks: bool) -> Result<Box<dyn FragmentSource>, SortimentError> {
    if blocks {
        return Ok(Box::new(JsonBlocksSource::new()));
    }
    if !PdftotextSource::is_available() {
        return Err(SortimentError::PdftotextNotFound);
    }
    Ok(Box::new(PdftotextSource::new()))
}
