//! itinerary-ledger: trip expense ledger parsing and per-currency totals

pub mod parser;
pub mod totals;
pub mod types;

pub use parser::{parse_ledger, parse_ledger_file};
pub use totals::{format_en_in, parse_amount, BudgetTotals, CurrencyTotal, DEFAULT_CURRENCY, TOTALS_SEPARATOR};
pub use types::{LedgerRow, COLUMNS};
