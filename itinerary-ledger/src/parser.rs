//! Flat ledger parser.
//!
//! Format: one header line, then data lines, fields split on a bare comma.
//! There is no quoting or escaping, so a comma inside a description splits
//! the field. Rows are zipped positionally against the header and field
//! count mismatches are not reported. A blank line between data lines is a
//! row holding a single empty field under the first column.

use anyhow::{Context, Result};
use std::path::Path;

use crate::types::LedgerRow;

fn reader_builder() -> csv::ReaderBuilder {
    let mut b = csv::ReaderBuilder::new();
    b.has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All);
    b
}

/// Split one line into trimmed fields. The csv reader yields nothing for an
/// empty line, which still counts as one empty field here.
fn split_line(line: &str) -> Result<csv::StringRecord> {
    let mut rdr = reader_builder().from_reader(line.as_bytes());
    match rdr.records().next() {
        Some(record) => Ok(record?),
        None => Ok(csv::StringRecord::from(vec![""])),
    }
}

/// Parse ledger text. Blank input gives no rows.
pub fn parse_ledger(text: &str) -> Result<Vec<LedgerRow>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut lines = text.lines();
    let header = match lines.next() {
        Some(line) => split_line(line).context("reading ledger header")?,
        None => return Ok(Vec::new()),
    };
    let columns: Vec<String> = header.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for (i, line) in lines.enumerate() {
        let record = split_line(line).with_context(|| format!("reading ledger line {}", i + 2))?;
        let row: LedgerRow = columns
            .iter()
            .zip(record.iter())
            .map(|(col, value)| (col.as_str(), value))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

/// Read and parse a ledger file.
pub fn parse_ledger_file(path: impl AsRef<Path>) -> Result<Vec<LedgerRow>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("opening {}", path.display()))?;
    parse_ledger(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(parse_ledger("").unwrap().is_empty());
        assert!(parse_ledger("   \n\n ").unwrap().is_empty());
    }

    #[test]
    fn test_header_only() {
        assert!(parse_ledger("date,category,description,amount,currency\n").unwrap().is_empty());
    }

    #[test]
    fn test_single_row() {
        let rows = parse_ledger(
            "date,category,description,amount,currency\n2024-01-01,food,coffee,150,INR",
        )
        .unwrap();
        assert_eq!(rows.len(), 1);
        let expected: LedgerRow = [
            ("date", "2024-01-01"),
            ("category", "food"),
            ("description", "coffee"),
            ("amount", "150"),
            ("currency", "INR"),
        ]
        .into_iter()
        .collect();
        assert_eq!(rows[0], expected);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let rows = parse_ledger(" date , amount \r\n 2024-02-03 ,  99.5  \r\n").unwrap();
        assert_eq!(rows[0].get("date"), Some("2024-02-03"));
        assert_eq!(rows[0].get("amount"), Some("99.5"));
    }

    #[test]
    fn test_positional_zip_on_count_mismatch() {
        let text = "date,category,description,amount,currency\n\
                    2024-01-01,food\n\
                    2024-01-02,taxi,airport,700,INR,extra";
        let rows = parse_ledger(text).unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0].get("amount"), None);

        assert_eq!(rows[1].len(), 5);
        assert_eq!(rows[1].get("currency"), Some("INR"));
    }

    #[test]
    fn test_blank_interior_line_is_a_row() {
        let rows = parse_ledger("date,amount,currency\n2024-01-01,10,INR\n\n2024-01-02,5,INR").unwrap();
        assert_eq!(rows.len(), 3);
        let blank: LedgerRow = [("date", "")].into_iter().collect();
        assert_eq!(rows[1], blank);
        assert_eq!(rows[2].get("amount"), Some("5"));

        let crlf = parse_ledger("date,amount\r\n1,2\r\n\r\n   \r\n3,4\r\n\r\n").unwrap();
        assert_eq!(crlf.len(), 4);
        assert_eq!(crlf[1], blank);
        assert_eq!(crlf[2], blank);
    }

    #[test]
    fn test_quotes_are_not_special() {
        let rows = parse_ledger("description,amount\n\"tea, biscuits\",40").unwrap();
        assert_eq!(rows[0].get("description"), Some("\"tea"));
        assert_eq!(rows[0].get("amount"), Some("biscuits\""));
    }
}
