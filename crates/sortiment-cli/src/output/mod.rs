pub mod json;
pub mod sql;
pub mod table;

use clap::ValueEnum;

/// Rendering for extracted variant records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantFormat {
    Json,
    Sql,
    Table,
}

/// Rendering for segmented chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChunkFormat {
    Json,
    Table,
}
