pub mod outcome;
pub mod prices;

use crate::brand::is_upper_case;
use crate::error::SortimentError;
use crate::model::{Chunk, VariantRecord};
use crate::rules::schema::ClassifierKind;
use crate::rules::CatalogRules;
use outcome::{ChunkFailure, ChunkOutcome};
use prices::parse_prices;

/// Extract a variant record from chunk text.
///
/// Lines break on `\n` or `\r`. Each trimmed, non-empty line is offered
/// to the classifiers in rule-set order; the first one that claims it
/// consumes the line. Unclaimed lines end up in `notes`. Fails only if a
/// price token cannot be represented.
pub fn extract_text(text: &str, rules: &CatalogRules) -> Result<VariantRecord, rust_decimal::Error> {
    let mut record = VariantRecord::default();

    for line in text.split(['\n', '\r']).map(str::trim).filter(|l| !l.is_empty()) {
        let mut claimed = false;
        for kind in rules.classifier_order() {
            if classify_line(*kind, line, &mut record, rules)? {
                claimed = true;
                break;
            }
        }
        if !claimed {
            record.notes.push(line.to_string());
        }
    }

    Ok(record)
}

/// Extract a variant record from one chunk, tagging failures with its page.
pub fn extract_variant(chunk: &Chunk, rules: &CatalogRules) -> Result<VariantRecord, SortimentError> {
    extract_text(&chunk.text, rules).map_err(|e| SortimentError::ChunkExtraction {
        page: chunk.page,
        reason: e.to_string(),
    })
}

/// Run extraction on one chunk and sort the result into an outcome.
pub fn process_chunk(chunk: &Chunk, rules: &CatalogRules) -> ChunkOutcome {
    match extract_variant(chunk, rules) {
        Ok(record) if record.is_valid() => ChunkOutcome::Extracted(record),
        Ok(_) => ChunkOutcome::Incomplete { page: chunk.page },
        Err(SortimentError::ChunkExtraction { page, reason }) => {
            ChunkOutcome::Failed(ChunkFailure { page, reason })
        }
        Err(e) => ChunkOutcome::Failed(ChunkFailure {
            page: chunk.page,
            reason: e.to_string(),
        }),
    }
}

/// Offer one line to one classifier. Returns true if the line was consumed.
fn classify_line(
    kind: ClassifierKind,
    line: &str,
    record: &mut VariantRecord,
    rules: &CatalogRules,
) -> Result<bool, rust_decimal::Error> {
    let claimed = match kind {
        ClassifierKind::Sku => {
            if record.sku.is_some() {
                return Ok(false);
            }
            match rules.find_sku(line) {
                Some(sku) => {
                    record.sku = Some(sku.to_string());
                    true
                }
                None => false,
            }
        }
        ClassifierKind::Barcode => {
            if record.barcode.is_some() {
                return Ok(false);
            }
            match rules.find_barcode(line) {
                Some(raw) => {
                    record.barcode = Some(raw.split_whitespace().collect());
                    true
                }
                None => false,
            }
        }
        // Later price lines overwrite earlier ones.
        ClassifierKind::Prices => match parse_prices(line, rules)? {
            Some(triple) => {
                record.bulk_price = Some(triple.bulk);
                record.srp = Some(triple.srp);
                record.rrp = Some(triple.rrp);
                true
            }
            None => false,
        },
        ClassifierKind::Packaging => {
            if line.to_lowercase().starts_with("packaging") {
                record.packaging = Some(line.replace("Packaging", "").trim().to_string());
                true
            } else {
                false
            }
        }
        ClassifierKind::StockNote => {
            if line.to_lowercase().starts_with("in/out") {
                record.notes.push(line.to_string());
                true
            } else {
                false
            }
        }
        ClassifierKind::Dimensions => {
            if record.dimensions.is_none() && rules.is_dimensions(line) {
                record.dimensions = Some(line.to_string());
                true
            } else {
                false
            }
        }
        ClassifierKind::Colour => {
            if record.colour.is_none() && rules.is_known_colour(line) {
                record.colour = Some(line.to_string());
                true
            } else {
                false
            }
        }
        ClassifierKind::Title => {
            if record.title.is_none() && !rules.has_sku(line) && !is_upper_case(line) {
                record.title = Some(line.to_string());
                true
            } else {
                false
            }
        }
    };

    Ok(claimed)
}
