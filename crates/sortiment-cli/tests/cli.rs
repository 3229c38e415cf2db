use std::path::PathBuf;
use std::process::{Command, Output};

const CHUNKS: &str = r#"[
  { "page": 1, "x": 36.0, "y": 10.0, "text": "00123\nWidget Deluxe\n$1.00 $2.00 $3.00" },
  { "page": 1, "x": 36.0, "y": 40.0, "text": "00456\nGadget", "supplier": "Acme" },
  { "page": 2, "x": 36.0, "y": 5.0, "text": "Index of brands" }
]"#;

fn sortiment(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sortiment"))
        .args(args)
        .output()
        .expect("run CLI")
}

fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn missing_input_prints_usage_and_fails() {
    let output = sortiment(&["extract"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn extract_from_chunks_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir, "chunks.json", CHUNKS);

    let output = sortiment(&["extract", input.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "cli exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["sku"], "00123");
    assert_eq!(records[0]["title"], "Widget Deluxe");
    assert_eq!(records[0]["bulk_price"], "1.00");
    assert_eq!(records[1]["sku"], "00456");
    assert!(records[1]["barcode"].is_null());
}

#[test]
fn zero_records_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir, "empty.json", "[]");

    let output = sortiment(&["extract", input.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[]");
}

#[test]
fn sql_output_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir, "chunks.json", CHUNKS);
    let out = dir.path().join("catalog.sql");

    let output = sortiment(&[
        "extract",
        input.to_str().unwrap(),
        "--format",
        "sql",
        "--table",
        "variants",
        "--out",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let sql = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = sql.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("INSERT INTO variants (sku, title"));
    assert!(lines[0].contains("'Widget Deluxe'"));
    assert!(lines[1].contains("'00456', 'Gadget', NULL"));
}

#[test]
fn short_out_flag_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir, "chunks.json", CHUNKS);
    let out = dir.path().join("result.json");

    let output = sortiment(&["extract", input.to_str().unwrap(), "-o", out.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let records: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 2);
}

#[test]
fn unknown_format_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir, "chunks.json", CHUNKS);

    let output = sortiment(&["extract", input.to_str().unwrap(), "--format", "xml"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("xml"));

    let output = sortiment(&["chunks", input.to_str().unwrap(), "-f", "sql"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn table_name_must_be_identifier() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir, "chunks.json", CHUNKS);

    let output = sortiment(&[
        "extract",
        input.to_str().unwrap(),
        "-f",
        "sql",
        "--table",
        "x; DROP TABLE y",
    ]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let output = sortiment(&[
        "extract",
        input.to_str().unwrap(),
        "-f",
        "sql",
        "--table",
        "shop.variants",
    ]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("INSERT INTO shop.variants ("));
}

#[test]
fn extract_from_block_dump() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(
        &dir,
        "blocks.json",
        r#"[
          { "page": 1, "blocks": [
            { "x0": 40, "y0": 150, "x1": 90, "y1": 162, "text": "Bird Feeder" },
            { "x0": 40, "y0": 120, "x1": 90, "y1": 132, "text": "00555" }
          ] }
        ]"#,
    );

    let output = sortiment(&["extract", input.to_str().unwrap(), "--blocks", "-s", "Acme"]);
    assert!(
        output.status.success(),
        "cli exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[0]["sku"], "00555");
    assert_eq!(records[0]["title"], "Bird Feeder");

    let output = sortiment(&["chunks", input.to_str().unwrap(), "--blocks", "-s", "Acme"]);
    assert!(output.status.success());
    let chunks: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(chunks[0]["text"], "00555\nBird Feeder");
    assert_eq!(chunks[0]["supplier"], "Acme");
}

#[test]
fn missing_pdftotext_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir, "catalog.pdf", "%PDF-1.4");
    let empty_path = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_sortiment"))
        .args(["extract", input.to_str().unwrap()])
        .env("PATH", empty_path.path())
        .output()
        .expect("run CLI");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: pdftotext not found"));
}

#[test]
fn unreadable_input_is_fatal() {
    let output = sortiment(&["extract", "/nonexistent/catalog.pdf"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error:"));
}

#[test]
fn rules_validate_rejects_bad_pattern() {
    let dir = tempfile::tempdir().unwrap();
    let rules = write_fixture(
        &dir,
        "rules.json",
        r#"{ "name": "Bad", "version": "1", "patterns": { "price": "\\$\\d+" } }"#,
    );

    let output = sortiment(&["rules", "validate", rules.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn rules_show_default() {
    let output = sortiment(&["rules", "show"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Default supplier catalog"));
    assert!(stdout.contains("1. sku"));
}
