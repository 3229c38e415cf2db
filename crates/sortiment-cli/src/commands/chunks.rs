use sortiment_core::error::SortimentError;
use sortiment_core::ParseOptions;
use std::path::PathBuf;

use crate::output::{self, ChunkFormat};

pub fn run(
    input_file: PathBuf,
    format: ChunkFormat,
    output_file: Option<PathBuf>,
    blocks: bool,
    rules_file: Option<PathBuf>,
    supplier: Option<String>,
) -> Result<(), SortimentError> {
    let rules = super::catalog_rules(rules_file.as_deref())?;
    let input_bytes = std::fs::read(&input_file)?;
    let source = super::fragment_source(blocks)?;
    let chunks = sortiment_core::parse_pdf(
        &input_bytes,
        source.as_ref(),
        &rules,
        &ParseOptions { supplier },
    )?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            std::fs::write(&path, output::json::render(&chunks)?)?;
            eprintln!("Parsed {} chunk(s), written to {}", chunks.len(), path.display());
        }
        None => {
            let output_str = match format {
                ChunkFormat::Json => output::json::render(&chunks)?,
                ChunkFormat::Table => output::table::format_chunks(&chunks),
            };
            println!("{output_str}");
        }
    }

    Ok(())
}
