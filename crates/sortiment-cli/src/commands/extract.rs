use sortiment_core::error::SortimentError;
use sortiment_core::model::Chunk;
use sortiment_core::ParseOptions;
use std::path::PathBuf;

use crate::output::{self, VariantFormat};

pub struct ExtractArgs {
    pub input_file: PathBuf,
    pub output_file: Option<PathBuf>,
    pub format: VariantFormat,
    pub table: String,
    /// Input is a JSON text-block dump rather than a PDF.
    pub blocks: bool,
    pub rules_file: Option<PathBuf>,
    pub supplier: Option<String>,
}

pub fn run(args: ExtractArgs) -> Result<(), SortimentError> {
    let rules = super::catalog_rules(args.rules_file.as_deref())?;
    let input_bytes = std::fs::read(&args.input_file)?;

    // A .json input is a chunks dump unless --blocks says otherwise
    let is_chunks = !args.blocks
        && args
            .input_file
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

    let result = if is_chunks {
        let chunks: Vec<Chunk> = serde_json::from_slice(&input_bytes)?;
        sortiment_core::extract_chunks(&chunks, &rules)
    } else {
        let source = super::fragment_source(args.blocks)?;
        let options = ParseOptions {
            supplier: args.supplier,
        };
        sortiment_core::extract_pdf(&input_bytes, source.as_ref(), &rules, &options)?
    };

    let rendered = match args.format {
        VariantFormat::Json => output::json::render(&result.variants)?,
        VariantFormat::Sql => output::sql::render(&result.variants, &args.table)?,
        VariantFormat::Table => output::table::format_variants(&result.variants),
    };

    match args.output_file {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            eprintln!(
                "Extracted {} variant(s), written to {}",
                result.variants.len(),
                path.display()
            );
        }
        None => {
            println!("{rendered}");
        }
    }

    if result.incomplete > 0 {
        eprintln!("  {} chunk(s) without a SKU skipped", result.incomplete);
    }
    for failure in &result.failures {
        eprintln!("  warning: page {}: {}", failure.page, failure.reason);
    }

    Ok(())
}
