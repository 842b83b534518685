use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Column names the budget views read, in table order.
pub const COLUMNS: [&str; 5] = ["date", "category", "description", "amount", "currency"];

/// One ledger line: header name -> trimmed raw field text.
///
/// Nothing is coerced here. A row shorter than the header simply lacks the
/// trailing columns; fields past the header width are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    fields: BTreeMap<String, String>,
}

impl LedgerRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Field text, or `""` when the column is missing.
    pub fn field(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Currency code, falling back to `default` when missing or blank.
    pub fn currency_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.get("currency") {
            Some(c) if !c.is_empty() => c,
            _ => default,
        }
    }

    /// Amount as a number; missing or malformed amounts count as zero.
    pub fn amount(&self) -> f64 {
        crate::totals::parse_amount(self.field("amount"))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LedgerRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = LedgerRow::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}
