use std::collections::HashMap;

use crate::extraction::PageContent;
use crate::rules::CatalogRules;

/// Detect the brand printed in a page header.
///
/// The brand is the top-most block inside the header band whose text is
/// entirely upper-case. Returns None if no block qualifies.
pub fn detect_page_brand(page: &PageContent, rules: &CatalogRules) -> Option<String> {
    page.blocks
        .iter()
        .filter(|b| b.bbox.y_min < rules.header_band())
        .filter_map(|b| {
            let text = b.text.trim();
            (!text.is_empty() && is_upper_case(text)).then_some((b.bbox.y_min, text))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, text)| text.to_string())
}

/// Brand per page number, for pages where one was detected.
pub fn page_brands(pages: &[PageContent], rules: &CatalogRules) -> HashMap<usize, String> {
    pages
        .iter()
        .filter_map(|p| detect_page_brand(p, rules).map(|brand| (p.page_number, brand)))
        .collect()
}

/// True if the text has at least one cased letter and no lower-case ones.
pub fn is_upper_case(text: &str) -> bool {
    text.chars().any(|c| c.is_uppercase()) && !text.chars().any(|c| c.is_lowercase())
}
