use sortiment_core::rules::builtin;
use sortiment_core::rules::schema::RulesDef;
use std::path::Path;

pub fn show(path: Option<&Path>) -> Result<(), sortiment_core::error::SortimentError> {
    let def = match path {
        Some(path) => sortiment_core::rules::load_rules(path)?,
        None => builtin::default_rules_def()?,
    };
    print_rules(&def);
    Ok(())
}

fn print_rules(def: &RulesDef) {
    println!("{} (version {})\n", def.name, def.version);

    if let Some(ref desc) = def.description {
        println!("{}\n", desc);
    }

    println!("Boilerplate phrases (fragments containing these are dropped):");
    for phrase in &def.boilerplate {
        println!("  {}", phrase);
    }
    println!();

    println!("Known colours:");
    println!("  {}\n", def.colours.join(", "));

    println!("Patterns:");
    let patterns = [
        ("new_product", &def.patterns.new_product),
        ("sku", &def.patterns.sku),
        ("barcode", &def.patterns.barcode),
        ("price", &def.patterns.price),
        ("dimensions", &def.patterns.dimensions),
    ];
    for (name, source) in patterns {
        println!("  {:<12} {}", name, source);
    }
    println!();

    println!("Line classifiers (first match wins):");
    for (i, kind) in def.classifier_order.iter().enumerate() {
        println!("  {}. {}", i + 1, kind);
    }
    println!();

    println!("Brand header band: y < {}", def.header_band);
}

pub fn schema() -> Result<(), sortiment_core::error::SortimentError> {
    print!(
        r#"JSON Rule Schema
================

A rule file tunes how `sortiment` segments and reads a catalog. Only
"name" and "version" are required; every other field falls back to the
built-in value shown by `sortiment rules show`.

Top-level fields:
  name              (string, required)  Human-readable name of the rule set
  description       (string, optional)  What catalog this rule set is for
  version           (string, required)  Version identifier (e.g., "2024.1")
  boilerplate       (array, optional)   Phrases marking page headers/footers.
                                        Blocks containing any of them
                                        (case-insensitive) are dropped.
  colours           (array, optional)   Known colour words. A line equal to
                                        one of them (case-insensitive) sets
                                        the colour field.
  patterns          (object, optional)  Regex sources (see below)
  classifier_order  (array, optional)   Line classifiers, highest priority
                                        first. Names: sku, barcode, prices,
                                        packaging, stock_note, dimensions,
                                        colour, title. Omitted classifiers
                                        are disabled.
  header_band       (number, optional)  Upper-case blocks above this y
                                        offset are brand header candidates.

Fields of "patterns":
  new_product   A fragment matching this (after trimming) starts a new chunk
  sku           First match in a chunk becomes the SKU
  barcode       First match in a chunk, whitespace stripped
  price         Price token; capture group 1 holds the amount
  dimensions    A line matching this is stored verbatim as dimensions

Example:
{{
  "name": "Garden supplier 2024",
  "version": "1.0",
  "boilerplate": ["TO PLACE AN ORDER", "WHOLESALE ONLY"],
  "colours": ["black", "green", "terracotta"],
  "patterns": {{ "sku": "\\bGS\\d{{4}}\\b", "new_product": "^GS\\d{{4}}$" }}
}}
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), sortiment_core::error::SortimentError> {
    let def = sortiment_core::rules::load_rules(file)?;

    println!("Rule set '{}' (v{}) is valid.", def.name, def.version);
    println!("  Boilerplate phrases: {}", def.boilerplate.len());
    println!("  Colours: {}", def.colours.len());
    println!(
        "  Classifiers: {}",
        def.classifier_order
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    // Check for potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    for kind in sortiment_core::rules::schema::ClassifierKind::ALL {
        if !def.classifier_order.contains(&kind) {
            warnings.push(format!("classifier '{}' is disabled", kind));
        }
    }
    if def.boilerplate.is_empty() {
        warnings.push("no boilerplate phrases; page footers will reach the chunker".into());
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
