use super::{decode_bytes, parse_line, parse_transactions, read_sales_data, ParseError, TextEncoding, DEFAULT_ENCODINGS};

use std::io::Write;
use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

#[test]
fn test_parse_line_cleans_names_and_numeric_separators() -> Result<()> {
    let transaction = parse_line("T001|2024-12-01|P101|Widget,Deluxe|2|1,500.50|C001|North")?;

    assert_eq!(transaction.transaction_id, "T001");
    assert_eq!(transaction.date, "2024-12-01");
    assert_eq!(transaction.product_id, "P101");
    assert_eq!(transaction.product_name, "Widget Deluxe");
    assert_eq!(transaction.quantity, 2);
    assert_eq!(transaction.unit_price, Decimal::from_str("1500.50")?);
    assert_eq!(transaction.customer_id, "C001");
    assert_eq!(transaction.region, "North");

    Ok(())
}

#[test]
fn test_parse_line_trims_every_field() -> Result<()> {
    let transaction = parse_line(" T002 | 2024-12-02 | P102 |  Mouse  | 1,000 | 25 | C002 | South ")?;

    assert_eq!(transaction.transaction_id, "T002");
    assert_eq!(transaction.product_name, "Mouse");
    assert_eq!(transaction.quantity, 1000);
    assert_eq!(transaction.unit_price, Decimal::from(25));
    assert_eq!(transaction.region, "South");

    Ok(())
}

#[test]
fn test_parse_line_keeps_prefix_violations_for_the_validator() -> Result<()> {
    let transaction = parse_line("X001|2024-12-01|Q101|Laptop|-1|0|D001|")?;

    assert_eq!(transaction.transaction_id, "X001");
    assert_eq!(transaction.quantity, -1);
    assert!(transaction.unit_price.is_zero());
    assert_eq!(transaction.region, "");

    Ok(())
}

#[test]
fn test_parse_line_rejects_wrong_field_count() {
    let too_few = parse_line("T001|2024-12-01|P101|Laptop|2|45000|C001");
    let too_many = parse_line("T001|2024-12-01|P101|Laptop|2|45000|C001|North|extra");

    assert!(matches!(too_few, Err(ParseError::FieldCount { expected: 8, found: 7 })));
    assert!(matches!(too_many, Err(ParseError::FieldCount { expected: 8, found: 9 })));
}

#[test]
fn test_parse_line_rejects_non_numeric_values() {
    let bad_quantity = parse_line("T001|2024-12-01|P101|Laptop|two|45000|C001|North");
    let bad_price = parse_line("T001|2024-12-01|P101|Laptop|2|free|C001|North");
    let fractional_quantity = parse_line("T001|2024-12-01|P101|Laptop|2.5|45000|C001|North");

    assert!(matches!(bad_quantity, Err(ParseError::InvalidQuantity(_))));
    assert!(matches!(bad_price, Err(ParseError::InvalidUnitPrice(_))));
    assert!(matches!(fractional_quantity, Err(ParseError::InvalidQuantity(_))));
}

#[test]
fn test_parse_transactions_counts_unparsed_lines() {
    let lines = vec![
        "T001|2024-12-01|P101|Laptop|2|45000|C001|North",
        "garbage",
        "T002|2024-12-01|P102|Mouse|x|500|C002|South",
        "T003|2024-12-02|P103|Keyboard|1|1,200|C003|East",
    ];

    let outcome = parse_transactions(&lines);

    assert_eq!(outcome.transactions.len(), 2);
    assert_eq!(outcome.unparsed, 2);
    assert_eq!(outcome.transactions[1].transaction_id, "T003");
}

#[test]
fn test_encodings_accept_or_reject_whole_buffers() {
    let euro_in_windows_1252 = [b'P', 0x80, b'1'];
    let undefined_in_windows_1252 = [b'P', 0x81, b'1'];

    assert_eq!(TextEncoding::Utf8.decode(&euro_in_windows_1252), None);
    assert_eq!(TextEncoding::Windows1252.decode(&euro_in_windows_1252), Some("P\u{20AC}1".to_string()));
    assert_eq!(TextEncoding::Windows1252.decode(&undefined_in_windows_1252), None);
    assert_eq!(TextEncoding::Latin1.decode(&undefined_in_windows_1252), Some("P\u{81}1".to_string()));
}

#[test]
fn test_decode_bytes_uses_first_successful_encoding() {
    let utf8 = "Café".as_bytes();
    let windows_1252 = [b'C', b'a', b'f', 0xE9];

    assert_eq!(decode_bytes(utf8, &DEFAULT_ENCODINGS), "Café");
    assert_eq!(decode_bytes(&windows_1252, &DEFAULT_ENCODINGS), "Café");
}

#[test]
fn test_decode_bytes_falls_back_to_lossy_decoding() {
    let bytes = [b'o', b'k', 0x81];

    assert_eq!(decode_bytes(&bytes, &[TextEncoding::Utf8, TextEncoding::Windows1252]), "ok\u{FFFD}");
    assert_eq!(decode_bytes(&bytes, &[]), "ok\u{FFFD}");
}

#[test]
fn test_read_sales_data_skips_header_and_blank_lines() -> Result<()> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, "TransactionID|Date|ProductID|ProductName|Quantity|UnitPrice|CustomerID|Region")?;
    writeln!(file, "T001|2024-12-01|P101|Laptop|2|45000|C001|North   ")?;
    writeln!(file)?;
    writeln!(file, "   ")?;
    write!(file, "T002|2024-12-01|P102|Mouse|1|500|C002|South\r\n")?;

    let lines = read_sales_data(file.path());

    assert_eq!(lines, vec![
        "T001|2024-12-01|P101|Laptop|2|45000|C001|North".to_string(),
        "T002|2024-12-01|P102|Mouse|1|500|C002|South".to_string()
    ]);

    Ok(())
}

#[test]
fn test_read_sales_data_decodes_legacy_encodings() -> Result<()> {
    let mut file = NamedTempFile::new()?;

    file.write_all(b"header\nT001|2024-12-01|P101|Caf\xE9 Table|1|100|C001|North\n")?;

    let lines = read_sales_data(file.path());

    assert_eq!(lines, vec!["T001|2024-12-01|P101|Café Table|1|100|C001|North".to_string()]);

    Ok(())
}

#[test]
fn test_read_sales_data_returns_nothing_for_missing_file() {
    assert!(read_sales_data("does/not/exist/sales_data.txt").is_empty());
}
