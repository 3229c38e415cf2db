use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog rule set: boilerplate phrases, colour vocabulary and the
/// patterns used to segment and classify catalog text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Phrases marking page headers/footers. Matched case-insensitively.
    #[serde(default = "default_boilerplate")]
    pub boilerplate: Vec<String>,
    /// Known colour words. Matched case-insensitively against whole lines.
    #[serde(default = "default_colours")]
    pub colours: Vec<String>,
    #[serde(default)]
    pub patterns: PatternDefs,
    /// Line classifiers, highest priority first.
    #[serde(default = "default_classifier_order")]
    pub classifier_order: Vec<ClassifierKind>,
    /// Blocks above this y offset are brand header candidates.
    #[serde(default = "default_header_band")]
    pub header_band: f32,
}

/// Regex sources for the structural patterns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternDefs {
    /// Whole-fragment test that opens a new product chunk.
    #[serde(default = "default_new_product")]
    pub new_product: String,
    #[serde(default = "default_sku")]
    pub sku: String,
    #[serde(default = "default_barcode")]
    pub barcode: String,
    /// Must contain a capture group holding the numeric amount.
    #[serde(default = "default_price")]
    pub price: String,
    #[serde(default = "default_dimensions")]
    pub dimensions: String,
}

impl Default for PatternDefs {
    fn default() -> Self {
        Self {
            new_product: default_new_product(),
            sku: default_sku(),
            barcode: default_barcode(),
            price: default_price(),
            dimensions: default_dimensions(),
        }
    }
}

/// The line classifiers of the field extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierKind {
    Sku,
    Barcode,
    Prices,
    Packaging,
    StockNote,
    Dimensions,
    Colour,
    Title,
}

impl ClassifierKind {
    pub const ALL: [ClassifierKind; 8] = [
        ClassifierKind::Sku,
        ClassifierKind::Barcode,
        ClassifierKind::Prices,
        ClassifierKind::Packaging,
        ClassifierKind::StockNote,
        ClassifierKind::Dimensions,
        ClassifierKind::Colour,
        ClassifierKind::Title,
    ];
}

impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassifierKind::Sku => "sku",
            ClassifierKind::Barcode => "barcode",
            ClassifierKind::Prices => "prices",
            ClassifierKind::Packaging => "packaging",
            ClassifierKind::StockNote => "stock_note",
            ClassifierKind::Dimensions => "dimensions",
            ClassifierKind::Colour => "colour",
            ClassifierKind::Title => "title",
        };
        write!(f, "{name}")
    }
}

fn default_boilerplate() -> Vec<String> {
    vec!["TO PLACE AN ORDER".into(), "CUSTOMER PORTAL".into()]
}

fn default_colours() -> Vec<String> {
    [
        "black", "white", "red", "blue", "green", "grey", "gray", "silver", "gold", "yellow",
        "orange", "pink", "purple", "brown", "clear",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_classifier_order() -> Vec<ClassifierKind> {
    ClassifierKind::ALL.to_vec()
}

fn default_header_band() -> f32 {
    100.0
}

fn default_new_product() -> String {
    r"^\d{5}$".into()
}

fn default_sku() -> String {
    r"\b\d{5}\b".into()
}

fn default_barcode() -> String {
    r"(\d\s*){8,14}".into()
}

fn default_price() -> String {
    r"\$(\d+\.\d{2})".into()
}

fn default_dimensions() -> String {
    r"\d+\s*(?:x|X|/|\\)\s*\d+.*(cm|mm|in)".into()
}
