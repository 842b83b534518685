//! Writes the generated pages to an output directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use itinerary_core::SolarTimes;
use itinerary_ledger::LedgerRow;

use crate::context::SiteContext;
use crate::page::{budget_page_html, RenderedPage, LOAD_ERROR_TEXT};
use crate::panel::Panels;
use crate::settings::SiteSettings;
use crate::views::{budget_failure_panel, stay_href, BudgetView};

pub const INDEX_PAGE: &str = "index.html";
pub const BUDGET_PAGE: &str = "budget.html";

fn write_page(out_dir: &Path, name: &str, html: &str) -> Result<PathBuf> {
    let path = out_dir.join(name);
    fs::write(&path, html).with_context(|| format!("write {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = html.len(), "page written");
    Ok(path)
}

/// Standalone budget page; the ledger is required here.
pub fn budget_panels(ledger: Option<&[LedgerRow]>, settings: &SiteSettings) -> Panels {
    let mut panels = Panels::new();
    match ledger {
        Some(rows) => panels.extend(BudgetView::new(rows, &settings.default_currency).panels(false)),
        None => panels.set(budget_failure_panel(&settings.budget_label)),
    }
    panels
}

/// Write one page per stay, the budget page, and `index.html` (first stay).
pub fn write_site<S: SolarTimes>(ctx: &mut SiteContext<S>, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir.display()))?;
    let mut written = Vec::new();

    for i in 0..ctx.trip().stays.len() {
        let page = ctx.render(i)?;
        let html = page.to_html(ctx.settings())?;
        written.push(write_page(out_dir, &stay_href(i), &html)?);
    }

    let budget = budget_panels(ctx.ledger(), ctx.settings());
    written.push(write_page(out_dir, BUDGET_PAGE, &budget_page_html(&budget, ctx.settings()))?);

    let index = ctx.render(0)?;
    written.push(write_page(out_dir, INDEX_PAGE, &index.to_html(ctx.settings())?)?);

    tracing::info!(pages = written.len(), out = %out_dir.display(), "site written");
    Ok(written)
}

/// `stay-<n>.html` or the budget page: files a previous build wrote.
fn is_generated_page(name: &str) -> bool {
    let stay_number = name
        .strip_prefix("stay-")
        .and_then(|rest| rest.strip_suffix(".html"));
    match stay_number {
        Some(n) => !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()),
        None => name == BUDGET_PAGE,
    }
}

/// Replace `index.html` with the load-failure page and remove the stay and
/// budget pages of any earlier build. Other files are left alone.
pub fn write_failure_page(out_dir: &Path, settings: &SiteSettings) -> Result<PathBuf> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir.display()))?;

    let entries = fs::read_dir(out_dir).with_context(|| format!("list {}", out_dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("list {}", out_dir.display()))?;
        if !entry.file_name().to_str().is_some_and(is_generated_page) {
            continue;
        }
        let path = entry.path();
        fs::remove_file(&path).with_context(|| format!("remove stale {}", path.display()))?;
        tracing::debug!(path = %path.display(), "stale page removed");
    }

    let html = RenderedPage::failed(LOAD_ERROR_TEXT).to_html(settings)?;
    write_page(out_dir, INDEX_PAGE, &html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::Mount;

    #[test]
    fn test_budget_panels_without_ledger() {
        let settings = SiteSettings::default();
        let panels = budget_panels(None, &settings);
        assert_eq!(panels.text(Mount::BudgetTotals), "Failed to load data/budget.csv");
        assert!(panels.get(Mount::BudgetTable).is_none());
    }

    #[test]
    fn test_failure_page_removes_stale_pages() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["index.html", "stay-1.html", "stay-12.html", "budget.html", "stay-x.html", "notes.txt"] {
            fs::write(tmp.path().join(name), "old").unwrap();
        }

        write_failure_page(tmp.path(), &SiteSettings::default()).unwrap();

        for gone in ["stay-1.html", "stay-12.html", "budget.html"] {
            assert!(!tmp.path().join(gone).exists(), "{gone} should be removed");
        }
        for kept in ["stay-x.html", "notes.txt"] {
            assert!(tmp.path().join(kept).exists(), "{kept} should be kept");
        }
        let index = fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert!(index.contains(LOAD_ERROR_TEXT));
    }

    #[test]
    fn test_failure_page_written() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_failure_page(tmp.path(), &SiteSettings::default()).unwrap();
        let html = fs::read_to_string(path).unwrap();
        assert!(html.contains(LOAD_ERROR_TEXT));
    }
}
