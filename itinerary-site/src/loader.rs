//! Concurrent, fetch-once loading of the trip data files.
//!
//! Stays, POIs and images are required: the first failure fails the whole
//! load. The ledger is optional for the itinerary pages; its failure is
//! logged and recorded as `None`.

use std::collections::HashMap;

use itinerary_core::{Poi, Stay, StayImage, TripData};
use itinerary_ledger::{parse_ledger, LedgerRow};
use serde::de::DeserializeOwned;

use crate::error::LoadError;
use crate::source::{DataFiles, DataSource};

/// Result of one load. Immutable from here on.
#[derive(Debug, Clone, Default)]
pub struct LoadedSite {
    pub trip: TripData,
    /// `None` when the ledger could not be loaded
    pub budget: Option<Vec<LedgerRow>>,
}

impl LoadedSite {
    /// Ledger rows, empty when the ledger is unavailable.
    pub fn budget_rows(&self) -> &[LedgerRow] {
        self.budget.as_deref().unwrap_or(&[])
    }
}

async fn fetch_json<T: DeserializeOwned>(source: &DataSource, name: &str) -> Result<T, LoadError> {
    let text = source.fetch_text(name).await?;
    serde_json::from_str(&text).map_err(|source_err| LoadError::Json {
        path: source.locate(name),
        source: source_err,
    })
}

/// Fetch and parse the ledger. Required on the standalone budget page.
pub async fn load_budget(source: &DataSource, files: &DataFiles) -> Result<Vec<LedgerRow>, LoadError> {
    let text = source.fetch_text(&files.budget).await?;
    parse_ledger(&text).map_err(|e| LoadError::Ledger {
        path: source.locate(&files.budget),
        message: format!("{e:#}"),
    })
}

async fn load_optional_budget(source: &DataSource, files: &DataFiles) -> Option<Vec<LedgerRow>> {
    match load_budget(source, files).await {
        Ok(rows) => Some(rows),
        Err(e) => {
            tracing::warn!(error = %e, "ledger unavailable, continuing without budget rows");
            None
        }
    }
}

/// Load every data file concurrently and join the results.
pub async fn load_site(source: &DataSource, files: &DataFiles) -> Result<LoadedSite, LoadError> {
    let (stays, pois, images, budget) = tokio::try_join!(
        fetch_json::<Vec<Stay>>(source, &files.stays),
        fetch_json::<HashMap<String, Vec<Poi>>>(source, &files.pois),
        fetch_json::<HashMap<String, Vec<StayImage>>>(source, &files.images),
        async { Ok::<_, LoadError>(load_optional_budget(source, files).await) },
    )?;

    tracing::info!(
        stays = stays.len(),
        poi_groups = pois.len(),
        image_groups = images.len(),
        ledger_rows = budget.as_ref().map(Vec::len),
        "trip data loaded"
    );

    Ok(LoadedSite {
        trip: TripData::new(stays, pois, images),
        budget,
    })
}
