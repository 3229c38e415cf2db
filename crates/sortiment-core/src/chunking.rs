use std::collections::HashMap;

use crate::model::{Chunk, Fragment};
use crate::rules::CatalogRules;

/// Sort fragments into reading order: by page, then top to bottom.
///
/// The sort is stable, so fragments sharing a (page, y) keep their
/// traversal order.
pub fn sort_reading_order(fragments: &mut [Fragment]) {
    fragments.sort_by(|a, b| a.page.cmp(&b.page).then(a.y.total_cmp(&b.y)));
}

/// Split the sorted fragment stream into per-product groups.
///
/// A fragment matching the new-product pattern closes the open group and
/// starts the next one. Fragments before the first match form a leading
/// group of their own. Every fragment lands in exactly one group.
pub fn group_fragments(mut fragments: Vec<Fragment>, rules: &CatalogRules) -> Vec<Vec<Fragment>> {
    sort_reading_order(&mut fragments);

    let mut groups = Vec::new();
    let mut current: Vec<Fragment> = Vec::new();

    for fragment in fragments {
        if rules.is_new_product(&fragment.text) && !current.is_empty() {
            groups.push(std::mem::take(&mut current));
        }
        current.push(fragment);
    }

    if !current.is_empty() {
        groups.push(current);
    }

    groups
}

/// Build a chunk from a fragment group, anchored at its first fragment.
pub fn build_chunk(group: &[Fragment]) -> Option<Chunk> {
    let anchor = group.first()?;
    Some(Chunk {
        page: anchor.page,
        x: anchor.x,
        y: anchor.y,
        text: group
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
        brand: None,
        supplier: None,
    })
}

/// Group fragments into product chunks, in reading order.
pub fn chunk_fragments(fragments: Vec<Fragment>, rules: &CatalogRules) -> Vec<Chunk> {
    let chunks: Vec<Chunk> = group_fragments(fragments, rules)
        .iter()
        .filter_map(|g| build_chunk(g))
        .collect();
    log::debug!("built {} chunk(s)", chunks.len());
    chunks
}

/// Attach the anchor page's brand and the supplier name to each chunk.
pub fn tag_chunks(chunks: &mut [Chunk], brands: &HashMap<usize, String>, supplier: Option<&str>) {
    for chunk in chunks {
        chunk.brand = brands.get(&chunk.page).cloned();
        chunk.supplier = supplier.map(str::to_string);
    }
}
