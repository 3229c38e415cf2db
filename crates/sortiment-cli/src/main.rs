mod commands;
mod output;

use clap::{Parser, Subcommand};
use output::{ChunkFormat, VariantFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sortiment",
    version,
    about = "Extract product variants from PDF supplier catalogs"
)]
struct Cli {
    /// Log pipeline progress (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract variant records from a PDF catalog or a chunks JSON dump
    Extract {
        /// Path to PDF or chunks JSON file
        input_file: PathBuf,

        /// Write output to a file instead of stdout
        #[arg(short, long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = VariantFormat::Json)]
        format: VariantFormat,

        /// Table name for SQL output
        #[arg(long, default_value = "products", value_parser = output::sql::parse_table_name)]
        table: String,

        /// Read the input as a JSON text-block dump instead of a PDF
        #[arg(long)]
        blocks: bool,

        /// Custom JSON rule file (default: built-in rules)
        #[arg(short, long = "rules", value_name = "FILE")]
        rules: Option<PathBuf>,

        /// Supplier name recorded on chunks
        #[arg(short, long)]
        supplier: Option<String>,
    },
    /// Segment a PDF catalog into product chunks (without extracting fields)
    Chunks {
        /// Path to PDF file
        input_file: PathBuf,

        /// Write chunks as JSON to a file
        #[arg(short, long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Output format for stdout
        #[arg(short, long, value_enum, default_value_t = ChunkFormat::Json)]
        format: ChunkFormat,

        /// Read the input as a JSON text-block dump instead of a PDF
        #[arg(long)]
        blocks: bool,

        /// Custom JSON rule file (default: built-in rules)
        #[arg(short, long = "rules", value_name = "FILE")]
        rules: Option<PathBuf>,

        /// Supplier name recorded on chunks
        #[arg(short, long)]
        supplier: Option<String>,
    },
    /// Inspect and validate catalog rules
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// Show the active rule set
    Show {
        /// Custom JSON rule file (default: built-in rules)
        #[arg(short, long = "rules", value_name = "FILE")]
        rules: Option<PathBuf>,
    },
    /// Print the JSON schema with field descriptions
    Schema,
    /// Validate a custom rule file
    Validate {
        /// Path to JSON rule file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            out,
            format,
            table,
            blocks,
            rules,
            supplier,
        } => commands::extract::run(commands::extract::ExtractArgs {
            input_file,
            output_file: out,
            format,
            table,
            blocks,
            rules_file: rules,
            supplier,
        }),
        Commands::Chunks {
            input_file,
            out,
            format,
            blocks,
            rules,
            supplier,
        } => commands::chunks::run(input_file, format, out, blocks, rules, supplier),
        Commands::Rules { action } => match action {
            RulesAction::Show { rules } => commands::rules::show(rules.as_deref()),
            RulesAction::Schema => commands::rules::schema(),
            RulesAction::Validate { file } => commands::rules::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
