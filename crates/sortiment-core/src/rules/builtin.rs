use crate::error::SortimentError;
use crate::rules::schema::RulesDef;
use crate::rules::{validate_rules, CatalogRules};

const DEFAULT_RULES_JSON: &str = include_str!("../../../../rules/default.json");

/// Load the built-in rule set definition.
pub fn default_rules_def() -> Result<RulesDef, SortimentError> {
    let rules: RulesDef = serde_json::from_str(DEFAULT_RULES_JSON)?;
    validate_rules(&rules)?;
    Ok(rules)
}

/// Compile the built-in rule set.
pub fn default_rules() -> Result<CatalogRules, SortimentError> {
    CatalogRules::compile(&default_rules_def()?)
}
