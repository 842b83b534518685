use itinerary_ledger::{parse_ledger_file, BudgetTotals, DEFAULT_CURRENCY};
use std::path::PathBuf;

fn budget_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("budget.csv")
}

#[test]
fn test_parse_fixture_rows() {
    let rows = parse_ledger_file(budget_path()).expect("should parse budget.csv");
    assert_eq!(rows.len(), 6);

    // CRLF line endings and padded fields are trimmed
    assert_eq!(rows[1].get("category"), Some("food"));
    assert_eq!(rows[1].get("description"), Some("Thali"));
    assert_eq!(rows[1].get("amount"), Some("650"));

    // short row has no currency column at all
    assert_eq!(rows[4].get("currency"), None);
}

#[test]
fn test_embedded_comma_shifts_fields() {
    let rows = parse_ledger_file(budget_path()).unwrap();
    let gifts = &rows[5];
    assert_eq!(gifts.get("description"), Some("Block prints"));
    assert_eq!(gifts.get("amount"), Some("market haggle"));
    assert_eq!(gifts.get("currency"), Some("1800"));
}

#[test]
fn test_fixture_totals() {
    let rows = parse_ledger_file(budget_path()).unwrap();
    let totals = BudgetTotals::from_rows(&rows, DEFAULT_CURRENCY);

    let currencies: Vec<&str> = totals.groups.iter().map(|g| g.currency.as_str()).collect();
    assert_eq!(currencies, vec!["INR", "USD", "1800"]);
    assert_eq!(totals.get("INR").unwrap().total, 17150.0);
    assert_eq!(totals.get("INR").unwrap().count, 4);
    assert_eq!(totals.get("1800").unwrap().total, 0.0);
    assert_eq!(totals.line(), "INR 17,150  •  USD 42.5  •  1800 0");
}

#[test]
fn test_missing_file_is_an_error() {
    let err = parse_ledger_file("no/such/budget.csv").unwrap_err();
    assert!(format!("{err:#}").contains("no/such/budget.csv"));
}
