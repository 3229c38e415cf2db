use crate::extraction::PageContent;
use crate::model::Fragment;
use crate::rules::CatalogRules;

/// True if a trimmed fragment text is page boilerplate (order instructions,
/// portal references and similar phrases from the rule set).
pub fn is_noise(text: &str, rules: &CatalogRules) -> bool {
    rules.is_noise(text)
}

/// Flatten extracted pages into fragments, dropping empty and noise blocks.
///
/// Fragment text is trimmed; position is the block's top-left corner.
/// Traversal order is preserved.
pub fn collect_fragments(pages: &[PageContent], rules: &CatalogRules) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut noise = 0usize;

    for page in pages {
        for block in &page.blocks {
            let text = block.text.trim();
            if text.is_empty() {
                continue;
            }
            if is_noise(text, rules) {
                noise += 1;
                continue;
            }
            fragments.push(Fragment {
                page: page.page_number,
                x: block.bbox.x_min,
                y: block.bbox.y_min,
                text: text.to_string(),
            });
        }
    }

    log::debug!(
        "collected {} fragment(s), dropped {} boilerplate block(s)",
        fragments.len(),
        noise
    );
    fragments
}
