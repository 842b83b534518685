//! Per-currency totals and Indian-locale number formatting.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::LedgerRow;

/// Currency assumed for rows that do not name one.
pub const DEFAULT_CURRENCY: &str = "INR";

/// Separator between currency groups on the totals line.
pub const TOTALS_SEPARATOR: &str = "  •  ";

static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("static pattern")
});

/// Lenient amount parsing: the leading numeric prefix is used
/// (`"150abc"` is 150) and anything without one is zero.
pub fn parse_amount(raw: &str) -> f64 {
    NUMERIC_PREFIX
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| !v.is_nan())
        .unwrap_or(0.0)
}

/// Format with `en-IN` grouping (`12,34,567.5`), at most three decimals.
///
/// Rounds half away from zero on the shortest decimal form of `value`, so
/// `1.0625` gives `1.063`. Infinities render as `∞`.
pub fn format_en_in(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}∞");
    }

    let (int_part, frac_part) = round_decimal(&value.abs().to_string(), MAX_FRACTION_DIGITS);
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_indian(&int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

const MAX_FRACTION_DIGITS: usize = 3;

/// Round a plain decimal string (`"1.0625"`) to `places` fraction digits,
/// half away from zero. Returns the integer and fraction digits.
fn round_decimal(plain: &str, places: usize) -> (String, String) {
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain, ""));
    if frac_part.len() <= places {
        return (int_part.to_string(), frac_part.to_string());
    }

    let round_up = frac_part.as_bytes()[places] >= b'5';
    let mut digits: Vec<u8> = int_part.bytes().chain(frac_part[..places].bytes()).collect();
    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - places;
    let int_digits = String::from_utf8_lossy(&digits[..split]).into_owned();
    let frac_digits = String::from_utf8_lossy(&digits[split..]).into_owned();
    (int_digits, frac_digits)
}

/// Last three digits, then groups of two: `1234567` -> `12,34,567`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyTotal {
    pub currency: String,
    pub total: f64,
    /// Rows in this currency, malformed amounts included
    pub count: usize,
}

impl CurrencyTotal {
    /// `"INR 1,50,000"`
    pub fn label(&self) -> String {
        format!("{} {}", self.currency, format_en_in(self.total))
    }
}

/// Ledger sums grouped by currency, in first-seen currency order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetTotals {
    pub groups: Vec<CurrencyTotal>,
}

impl BudgetTotals {
    pub fn from_rows(rows: &[LedgerRow], default_currency: &str) -> Self {
        let mut groups: Vec<CurrencyTotal> = Vec::new();
        for row in rows {
            let currency = row.currency_or(default_currency);
            let amount = row.amount();
            match groups.iter_mut().find(|g| g.currency == currency) {
                Some(g) => {
                    g.total += amount;
                    g.count += 1;
                }
                None => groups.push(CurrencyTotal {
                    currency: currency.to_string(),
                    total: amount,
                    count: 1,
                }),
            }
        }
        Self { groups }
    }

    pub fn get(&self, currency: &str) -> Option<&CurrencyTotal> {
        self.groups.iter().find(|g| g.currency == currency)
    }

    /// Every group's label joined by [`TOTALS_SEPARATOR`].
    pub fn line(&self) -> String {
        self.groups
            .iter()
            .map(CurrencyTotal::label)
            .collect::<Vec<_>>()
            .join(TOTALS_SEPARATOR)
    }
}
