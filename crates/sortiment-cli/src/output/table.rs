use sortiment_core::model::{Chunk, VariantRecord};

/// Format extracted variants as an aligned text table.
pub fn format_variants(variants: &[VariantRecord]) -> String {
    if variants.is_empty() {
        return "No variants extracted.".to_string();
    }

    let headers = ["SKU", "Title", "Barcode", "Bulk", "SRP", "RRP", "Colour"];
    let rows: Vec<[String; 7]> = variants
        .iter()
        .map(|v| {
            [
                cell(v.sku.as_deref()),
                cell(v.title.as_deref()),
                cell(v.barcode.as_deref()),
                price(v.bulk_price),
                price(v.srp),
                price(v.rrp),
                cell(v.colour.as_deref()),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.len());
    for row in &rows {
        for (w, value) in widths.iter_mut().zip(row) {
            *w = (*w).max(value.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(&headers.map(str::to_string), &widths));
    out.push('\n');
    out.push_str(&format!(
        "  {}\n",
        "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1))
    ));
    for row in &rows {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }
    out.push_str(&format!("\n{} variant(s)", variants.len()));
    out
}

/// Format chunks as a page/position listing with their first line.
pub fn format_chunks(chunks: &[Chunk]) -> String {
    let mut out = String::new();
    for (i, chunk) in chunks.iter().enumerate() {
        let first_line = chunk.text.lines().next().unwrap_or("");
        let extra = chunk.text.lines().count().saturating_sub(1);
        out.push_str(&format!(
            "  #{:<4} p{:<3} y={:<7.1} {}",
            i + 1,
            chunk.page,
            chunk.y,
            first_line
        ));
        if extra > 0 {
            out.push_str(&format!("  (+{} line(s))", extra));
        }
        if let Some(ref brand) = chunk.brand {
            out.push_str(&format!("  [{}]", brand));
        }
        out.push('\n');
    }
    out.push_str(&format!("\n{} chunk(s)", chunks.len()));
    out
}

fn format_row(row: &[String; 7], widths: &[usize; 7]) -> String {
    let cells: Vec<String> = row
        .iter()
        .zip(widths)
        .map(|(value, w)| format!("{:<width$}", value, width = w))
        .collect();
    format!("  {}", cells.join("  ").trim_end())
}

fn cell(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

fn price(value: Option<rust_decimal::Decimal>) -> String {
    value.map(|d| d.to_string()).unwrap_or_else(|| "-".into())
}
