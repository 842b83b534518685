//! Application context: loaded data, settings, and the current selection.

use anyhow::{bail, Result};
use itinerary_core::{SolarTimes, SunCalc, TripData};
use itinerary_ledger::LedgerRow;

use crate::loader::LoadedSite;
use crate::map::{MapPlan, MapView};
use crate::page::RenderedPage;
use crate::panel::{Mount, Panels};
use crate::settings::SiteSettings;
use crate::views::{stay_list_panel, BudgetView, ItineraryView, StayDetail};

/// Owns everything the views read. Only [`SiteContext::select`] mutates it.
pub struct SiteContext<S: SolarTimes = SunCalc> {
    site: LoadedSite,
    settings: SiteSettings,
    solar: S,
    selected: usize,
}

impl SiteContext<SunCalc> {
    pub fn new(site: LoadedSite, settings: SiteSettings) -> Result<Self> {
        Self::with_solar(site, settings, SunCalc)
    }
}

impl<S: SolarTimes> SiteContext<S> {
    pub fn with_solar(site: LoadedSite, settings: SiteSettings, solar: S) -> Result<Self> {
        if site.trip.stays.is_empty() {
            bail!("stays data contains no stays");
        }
        Ok(Self {
            site,
            settings,
            solar,
            selected: 0,
        })
    }

    pub fn trip(&self) -> &TripData {
        &self.site.trip
    }

    pub fn budget_rows(&self) -> &[LedgerRow] {
        self.site.budget_rows()
    }

    /// The ledger as loaded; `None` when it could not be loaded.
    pub fn ledger(&self) -> Option<&[LedgerRow]> {
        self.site.budget.as_deref()
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select a stay and refresh its detail. The selection is left alone
    /// when `index` is out of range.
    pub fn select(
        &mut self,
        index: usize,
        main: &mut impl MapView,
        area: &mut impl MapView,
    ) -> Result<StayDetail> {
        let detail = StayDetail::build(&self.site.trip, &self.settings, &self.solar, index)?;
        self.selected = index;
        detail.focus_maps(main, area, &self.settings);
        tracing::debug!(index, stay = %detail.name, "stay selected");
        Ok(detail)
    }

    /// Everything the combined itinerary page shows with `index` selected.
    pub fn render(&mut self, index: usize) -> Result<RenderedPage> {
        let mut main = MapPlan::new(Mount::Map.id());
        let itinerary = ItineraryView::init(&self.site.trip, &self.settings.map, &mut main, index);

        let mut panels = Panels::new();
        panels.set(itinerary.route_chain_panel());
        let budget = BudgetView::new(self.site.budget_rows(), &self.settings.default_currency);
        panels.extend(budget.panels(true));

        let mut area = MapPlan::new(Mount::AreaMap.id());
        let detail = self.select(index, &mut main, &mut area)?;

        panels.set(stay_list_panel(
            &self.site.trip.stays,
            &itinerary.distances,
            self.selected,
        ));
        panels.extend(detail.panels());

        Ok(RenderedPage {
            panels,
            main_map: Some(main),
            area_map: Some(area),
            route_layer: itinerary.route_layer,
            selected: Some(self.selected),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itinerary_core::Stay;

    fn site() -> LoadedSite {
        let stays = ["A", "B", "C"]
            .iter()
            .enumerate()
            .map(|(i, name)| Stay {
                key: name.to_lowercase(),
                name: name.to_string(),
                lat: 25.0 + i as f64,
                lng: 75.0 + i as f64,
                check_in: format!("2024-01-0{}", i + 1),
                check_out: format!("2024-01-0{}", i + 2),
            })
            .collect();
        LoadedSite {
            trip: TripData::new(stays, Default::default(), Default::default()),
            budget: None,
        }
    }

    #[test]
    fn test_starts_on_first_stay() {
        let ctx = SiteContext::new(site(), SiteSettings::default()).unwrap();
        assert_eq!(ctx.selected(), 0);
    }

    #[test]
    fn test_no_stays_is_an_error() {
        assert!(SiteContext::new(LoadedSite::default(), SiteSettings::default()).is_err());
    }

    #[test]
    fn test_select_twice_is_idempotent() {
        let mut ctx = SiteContext::new(site(), SiteSettings::default()).unwrap();
        let first = ctx.render(1).unwrap();
        let second = ctx.render(1).unwrap();
        assert_eq!(ctx.selected(), 1);
        assert_eq!(first.panels, second.panels);
    }

    #[test]
    fn test_bad_selection_keeps_state() {
        let mut ctx = SiteContext::new(site(), SiteSettings::default()).unwrap();
        ctx.render(2).unwrap();
        let mut main = MapPlan::new("map");
        let mut area = MapPlan::new("areaMap");
        assert!(ctx.select(9, &mut main, &mut area).is_err());
        assert_eq!(ctx.selected(), 2);
        assert!(main.commands.is_empty());
    }

    #[test]
    fn test_render_fills_every_panel() {
        let mut ctx = SiteContext::new(site(), SiteSettings::default()).unwrap();
        let page = ctx.render(0).unwrap();
        assert!(page.panels.text(Mount::RouteChain).starts_with("1.A → 2.B: "));
        assert_eq!(page.panels.text(Mount::ExploreTitle), "Explore — A");
        assert_eq!(page.panels.text(Mount::BudgetTotals), "Total: ");
        assert!(page.panels.text(Mount::LightBox).starts_with("Sunrise: "));
        assert!(page.panels.html(Mount::StayList).contains("stay-link active"));
    }
}
