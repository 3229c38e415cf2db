pub mod builtin;
pub mod schema;

use crate::error::SortimentError;
use regex::Regex;
use schema::{ClassifierKind, RulesDef};
use std::collections::HashSet;
use std::path::Path;

/// Load a rule set from a JSON file.
pub fn load_rules(path: &Path) -> Result<RulesDef, SortimentError> {
    let content = std::fs::read_to_string(path).map_err(|e| SortimentError::RulesLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_rules(&content, path)
}

/// Parse a rule set from a JSON string.
pub fn parse_rules(json: &str, source: &Path) -> Result<RulesDef, SortimentError> {
    let rules: RulesDef = serde_json::from_str(json).map_err(|e| SortimentError::RulesLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_rules(&rules)?;
    Ok(rules)
}

/// Parse a rule set from a JSON string (no file path context).
pub fn parse_rules_str(json: &str) -> Result<RulesDef, SortimentError> {
    let rules: RulesDef = serde_json::from_str(json).map_err(SortimentError::Json)?;
    validate_rules(&rules)?;
    Ok(rules)
}

/// Validate that a rule set is well-formed.
pub fn validate_rules(rules: &RulesDef) -> Result<(), SortimentError> {
    if rules.boilerplate.iter().any(|p| p.trim().is_empty()) {
        return Err(SortimentError::RulesInvalid(
            "boilerplate phrases must not be empty".into(),
        ));
    }

    if rules.colours.iter().any(|c| c.trim().is_empty()) {
        return Err(SortimentError::RulesInvalid(
            "colour names must not be empty".into(),
        ));
    }

    let patterns = [
        ("new_product", &rules.patterns.new_product),
        ("sku", &rules.patterns.sku),
        ("barcode", &rules.patterns.barcode),
        ("price", &rules.patterns.price),
        ("dimensions", &rules.patterns.dimensions),
    ];
    for (name, source) in patterns {
        if let Err(e) = Regex::new(source) {
            return Err(SortimentError::RulesInvalid(format!(
                "pattern '{}' does not compile: {}",
                name, e
            )));
        }
    }

    let price = Regex::new(&rules.patterns.price)?;
    if price.captures_len() < 2 {
        return Err(SortimentError::RulesInvalid(
            "price pattern needs a capture group around the amount".into(),
        ));
    }

    let mut seen = HashSet::new();
    for kind in &rules.classifier_order {
        if !seen.insert(*kind) {
            return Err(SortimentError::RulesInvalid(format!(
                "classifier '{}' listed more than once",
                kind
            )));
        }
    }

    if !rules.header_band.is_finite() || rules.header_band < 0.0 {
        return Err(SortimentError::RulesInvalid(format!(
            "header_band must be a non-negative number, got {}",
            rules.header_band
        )));
    }

    Ok(())
}

/// Compiled, immutable rule set shared by the filter, chunker and extractor.
#[derive(Debug, Clone)]
pub struct CatalogRules {
    name: String,
    boilerplate: Vec<String>,
    colours: HashSet<String>,
    new_product: Regex,
    sku: Regex,
    barcode: Regex,
    price: Regex,
    dimensions: Regex,
    classifier_order: Vec<ClassifierKind>,
    header_band: f32,
}

impl CatalogRules {
    pub fn compile(def: &RulesDef) -> Result<Self, SortimentError> {
        validate_rules(def)?;

        Ok(Self {
            name: def.name.clone(),
            boilerplate: def.boilerplate.iter().map(|p| p.to_lowercase()).collect(),
            colours: def.colours.iter().map(|c| c.trim().to_lowercase()).collect(),
            new_product: Regex::new(&def.patterns.new_product)?,
            sku: Regex::new(&def.patterns.sku)?,
            barcode: Regex::new(&def.patterns.barcode)?,
            price: Regex::new(&def.patterns.price)?,
            dimensions: Regex::new(&def.patterns.dimensions)?,
            classifier_order: def.classifier_order.clone(),
            header_band: def.header_band,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classifier_order(&self) -> &[ClassifierKind] {
        &self.classifier_order
    }

    pub fn header_band(&self) -> f32 {
        self.header_band
    }

    /// True if the text contains a boilerplate phrase (case-insensitive).
    pub fn is_noise(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.boilerplate.iter().any(|p| lower.contains(p.as_str()))
    }

    /// True if the trimmed text opens a new product entry.
    pub fn is_new_product(&self, text: &str) -> bool {
        self.new_product.is_match(text.trim())
    }

    pub fn find_sku<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.sku.find(line).map(|m| m.as_str())
    }

    pub fn has_sku(&self, line: &str) -> bool {
        self.sku.is_match(line)
    }

    pub fn find_barcode<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.barcode.find(line).map(|m| m.as_str())
    }

    /// All price amounts on the line, in order of appearance.
    pub fn price_tokens<'a>(&self, line: &'a str) -> Vec<&'a str> {
        self.price
            .captures_iter(line)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect()
    }

    pub fn is_dimensions(&self, line: &str) -> bool {
        self.dimensions.is_match(line)
    }

    pub fn is_known_colour(&self, line: &str) -> bool {
        self.colours.contains(&line.trim().to_lowercase())
    }
}
