use rust_decimal::Decimal;
use sortiment_core::error::SortimentError;
use sortiment_core::model::VariantRecord;

const COLUMNS: &str =
    "sku, title, barcode, bulk_price, srp, rrp, packaging, dimensions, colour, notes";

/// Parse a `--table` value: a plain identifier, optionally schema-qualified.
pub fn parse_table_name(value: &str) -> Result<String, String> {
    let valid = value.split('.').count() <= 2
        && value.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        });
    if valid {
        Ok(value.to_string())
    } else {
        Err(format!(
            "'{value}' is not a table name (letters, digits and '_', optionally schema.table)"
        ))
    }
}

/// Render records as one `INSERT` statement per line.
///
/// Strings are single-quoted with embedded quotes doubled, absent values are
/// `NULL`, and notes are stored as a JSON array string.
pub fn render(variants: &[VariantRecord], table: &str) -> Result<String, SortimentError> {
    let mut out = String::new();

    for v in variants {
        let notes = serde_json::to_string(&v.notes)?;
        let values = [
            text(v.sku.as_deref()),
            text(v.title.as_deref()),
            text(v.barcode.as_deref()),
            number(v.bulk_price),
            number(v.srp),
            number(v.rrp),
            text(v.packaging.as_deref()),
            text(v.dimensions.as_deref()),
            text(v.colour.as_deref()),
            text(Some(notes.as_str())),
        ];
        out.push_str(&format!(
            "INSERT INTO {} ({}) VALUES ({});\n",
            table,
            COLUMNS,
            values.join(", ")
        ));
    }

    Ok(out)
}

fn text(value: Option<&str>) -> String {
    match value {
        Some(s) => format!("'{}'", s.replace('\'', "''")),
        None => "NULL".to_string(),
    }
}

fn number(value: Option<Decimal>) -> String {
    match value {
        Some(d) => d.to_string(),
        None => "NULL".to_string(),
    }
}
