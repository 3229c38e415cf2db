pub mod brand;
pub mod chunking;
pub mod error;
pub mod extract;
pub mod extraction;
pub mod filter;
pub mod model;
pub mod rules;

use error::SortimentError;
use extract::outcome::{ChunkOutcome, ExtractionResult};
use extraction::FragmentSource;
use model::Chunk;
use rules::CatalogRules;

/// Options for turning a catalog document into chunks.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Supplier name recorded on every chunk.
    pub supplier: Option<String>,
}

/// Extract, filter and segment a catalog document into product chunks.
///
/// Fails only if the source cannot read the document. A document without
/// text yields no chunks.
pub fn parse_pdf(
    pdf_bytes: &[u8],
    source: &dyn FragmentSource,
    rules: &CatalogRules,
    options: &ParseOptions,
) -> Result<Vec<Chunk>, SortimentError> {
    let pages = source.extract_pages(pdf_bytes)?;
    log::debug!(
        "{} backend returned {} page(s)",
        source.backend_name(),
        pages.len()
    );

    let brands = brand::page_brands(&pages, rules);
    let fragments = filter::collect_fragments(&pages, rules);
    let mut chunks = chunking::chunk_fragments(fragments, rules);
    chunking::tag_chunks(&mut chunks, &brands, options.supplier.as_deref());

    Ok(chunks)
}

/// Main API entry point: extract variant records from a catalog document.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    source: &dyn FragmentSource,
    rules: &CatalogRules,
    options: &ParseOptions,
) -> Result<ExtractionResult, SortimentError> {
    let chunks = parse_pdf(pdf_bytes, source, rules, options)?;
    Ok(extract_chunks(&chunks, rules))
}

/// Extract variant records from already-built chunks.
///
/// Each chunk is handled independently. A chunk whose extraction fails is
/// logged with its page and skipped; records without a SKU are dropped.
pub fn extract_chunks(chunks: &[Chunk], rules: &CatalogRules) -> ExtractionResult {
    let outcomes = chunks.iter().map(|chunk| {
        let outcome = extract::process_chunk(chunk, rules);
        match &outcome {
            ChunkOutcome::Failed(failure) => {
                log::error!("Failed to parse chunk on page {}: {}", failure.page, failure.reason);
            }
            ChunkOutcome::Incomplete { page } => {
                log::debug!("dropping chunk on page {} without a SKU", page);
            }
            ChunkOutcome::Extracted(_) => {}
        }
        outcome
    });

    let result = ExtractionResult::from_outcomes(outcomes);
    log::debug!(
        "extracted {} variant(s) from {} chunk(s): {} without SKU, {} failed",
        result.variants.len(),
        chunks.len(),
        result.incomplete,
        result.failures.len()
    );
    result
}
