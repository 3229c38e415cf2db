use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One positioned, trimmed piece of text from a catalog page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// 1-based page index.
    pub page: usize,
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// A contiguous run of fragments believed to describe one product entry.
///
/// `page`, `x` and `y` come from the first member fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub page: usize,
    pub x: f32,
    pub y: f32,
    /// Member fragment texts joined with `\n`, in group order.
    pub text: String,
    /// Brand detected in the anchor page's header band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
}

/// Structured fields extracted from one chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRecord {
    pub sku: Option<String>,
    pub title: Option<String>,
    pub barcode: Option<String>,
    pub bulk_price: Option<Decimal>,
    pub srp: Option<Decimal>,
    pub rrp: Option<Decimal>,
    pub packaging: Option<String>,
    pub dimensions: Option<String>,
    pub colour: Option<String>,
    #[serde(default)]
    pub notes: Vec<String>,
}

impl VariantRecord {
    /// Only records with a SKU are promoted to the output.
    pub fn is_valid(&self) -> bool {
        self.sku.is_some()
    }
}

impl fmt::Display for VariantRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sku = self.sku.as_deref().unwrap_or("-");
        match &self.title {
            Some(title) => write!(f, "{sku} {title}"),
            None => write!(f, "{sku}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_record_json_keeps_nulls() {
        let record = VariantRecord {
            sku: Some("00123".into()),
            srp: Some(dec!(2.00)),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["title"].is_null());
        assert!(json["bulk_price"].is_null());
        assert_eq!(json["srp"], "2.00");
        assert_eq!(json["notes"], serde_json::json!([]));

        let back: VariantRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_chunk_without_tags_deserializes() {
        let json = r#"{"page": 2, "x": 10.5, "y": 40.0, "text": "00123\nWidget"}"#;
        let chunk: Chunk = serde_json::from_str(json).unwrap();
        assert_eq!(chunk.page, 2);
        assert!(chunk.brand.is_none());
        assert!(chunk.supplier.is_none());

        let out = serde_json::to_string(&chunk).unwrap();
        assert!(!out.contains("brand"));
    }

    #[test]
    fn test_record_display() {
        let record = VariantRecord {
            sku: Some("00456".into()),
            title: Some("Gadget".into()),
            ..Default::default()
        };
        assert_eq!(record.to_string(), "00456 Gadget");
        assert!(record.is_valid());
        assert!(!VariantRecord::default().is_valid());
    }
}
