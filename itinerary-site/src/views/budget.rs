//! Budget: totals by currency and the full ledger table.

use itinerary_ledger::{BudgetTotals, LedgerRow, COLUMNS};

use crate::html::{Element, Node};
use crate::panel::{Mount, Panel};

const HEADINGS: [&str; 5] = ["Date", "Category", "Description", "Amount", "Cur"];

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetView {
    pub rows: Vec<LedgerRow>,
    pub totals: BudgetTotals,
}

impl BudgetView {
    pub fn new(rows: &[LedgerRow], default_currency: &str) -> Self {
        Self {
            rows: rows.to_vec(),
            totals: BudgetTotals::from_rows(rows, default_currency),
        }
    }

    /// Totals line; the combined itinerary page prefixes it with `Total: `.
    pub fn totals_panel(&self, with_prefix: bool) -> Panel {
        let line = self.totals.line();
        let text = if with_prefix { format!("Total: {line}") } else { line };
        Panel::text(Mount::BudgetTotals, text)
    }

    /// One table row per ledger row, fields verbatim, missing ones blank.
    pub fn table_panel(&self) -> Panel {
        let header_row = HEADINGS.iter().fold(Element::new("tr"), |tr, h| {
            let th = Element::new("th").text(*h);
            tr.child(if *h == "Amount" { th.class("amt") } else { th })
        });
        let thead = Element::new("thead").child(header_row);

        let tbody = self.rows.iter().fold(Element::new("tbody"), |tbody, row| {
            let tr = COLUMNS.iter().fold(Element::new("tr"), |tr, col| {
                let td = Element::new("td").text(row.field(col));
                tr.child(if *col == "amount" { td.class("amt") } else { td })
            });
            tbody.child(tr)
        });

        Panel::new(Mount::BudgetTable, vec![Node::from(thead), Node::from(tbody)])
    }

    pub fn panels(&self, with_prefix: bool) -> Vec<Panel> {
        vec![self.totals_panel(with_prefix), self.table_panel()]
    }
}

/// Shown on the standalone budget page when the ledger cannot be loaded.
pub fn budget_failure_panel(label: &str) -> Panel {
    Panel::text(Mount::BudgetTotals, format!("Failed to load {label}"))
}
