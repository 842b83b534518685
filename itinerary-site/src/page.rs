//! Page assembly: panels and map plans into a complete HTML document.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::html::escape;
use crate::map::{LayerId, MapPlan};
use crate::panel::{Mount, Panel, Panels};
use crate::settings::SiteSettings;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const SITE_CSS: &str = include_str!("../assets/site.css");
const MAP_JS: &str = include_str!("../assets/map.js");

/// Shown in place of the route chain when the trip data cannot be loaded.
pub const LOAD_ERROR_TEXT: &str = "Error loading site data. See the generator log for details.";

/// Content of one itinerary page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub panels: Panels,
    pub main_map: Option<MapPlan>,
    pub area_map: Option<MapPlan>,
    pub route_layer: Option<LayerId>,
    pub selected: Option<usize>,
}

#[derive(Serialize)]
struct MapBundle<'a> {
    main: Option<&'a MapPlan>,
    area: Option<&'a MapPlan>,
    route_layer: Option<LayerId>,
}

impl RenderedPage {
    /// Page with nothing but a load error in the route-chain slot.
    pub fn failed(message: &str) -> Self {
        let mut panels = Panels::new();
        panels.set(Panel::text(Mount::RouteChain, message));
        Self {
            panels,
            main_map: None,
            area_map: None,
            route_layer: None,
            selected: None,
        }
    }

    fn map_script(&self) -> Result<String> {
        if self.main_map.is_none() && self.area_map.is_none() {
            return Ok(String::new());
        }
        let bundle = MapBundle {
            main: self.main_map.as_ref(),
            area: self.area_map.as_ref(),
            route_layer: self.route_layer,
        };
        let json = serde_json::to_string(&bundle).context("serialize map plans")?;
        Ok(format!(
            "<script src=\"{LEAFLET_JS}\"></script>\n\
             <script type=\"application/json\" id=\"mapPlans\">{}</script>\n\
             <script>{MAP_JS}</script>\n",
            json.replace("</", "<\\/")
        ))
    }

    pub fn to_html(&self, settings: &SiteSettings) -> Result<String> {
        let p = &self.panels;
        let toggle = if self.route_layer.is_some() {
            format!(
                "<label class=\"route-toggle\"><input type=\"checkbox\" id=\"{}\" checked> Show route</label>\n",
                Mount::RouteToggle.id()
            )
        } else {
            String::new()
        };

        let body = format!(
            "<header>\n<h1>{title}</h1>\n<p id=\"{chain_id}\" class=\"route-chain\">{chain}</p>\n{toggle}</header>\n\
             <main>\n\
             <section class=\"itinerary\">\n<div id=\"{map_id}\"></div>\n<nav id=\"{list_id}\" class=\"stay-list\">{list}</nav>\n</section>\n\
             <section class=\"explore\">\n<h2 id=\"{title_id}\">{explore}</h2>\n<p id=\"{meta_id}\">{meta}</p>\n\
             <div id=\"{area_id}\"></div>\n<ul id=\"{poi_id}\">{pois}</ul>\n\
             <div id=\"{light_id}\" class=\"light-box\">{light}</div>\n<div id=\"{gallery_id}\" class=\"gallery\">{gallery}</div>\n</section>\n\
             {budget}\
             </main>\n{script}",
            title = escape(&settings.title),
            chain_id = Mount::RouteChain.id(),
            chain = p.html(Mount::RouteChain),
            toggle = toggle,
            map_id = Mount::Map.id(),
            list_id = Mount::StayList.id(),
            list = p.html(Mount::StayList),
            title_id = Mount::ExploreTitle.id(),
            explore = p.html(Mount::ExploreTitle),
            meta_id = Mount::AreaMeta.id(),
            meta = p.html(Mount::AreaMeta),
            area_id = Mount::AreaMap.id(),
            poi_id = Mount::PoiList.id(),
            pois = p.html(Mount::PoiList),
            light_id = Mount::LightBox.id(),
            light = p.html(Mount::LightBox),
            gallery_id = Mount::Gallery.id(),
            gallery = p.html(Mount::Gallery),
            budget = budget_section(p),
            script = self.map_script()?,
        );
        Ok(document(settings, &settings.title, &body))
    }
}

fn budget_section(panels: &Panels) -> String {
    format!(
        "<section class=\"budget\">\n<h2>Budget</h2>\n<p id=\"{}\">{}</p>\n<table id=\"{}\">{}</table>\n</section>\n",
        Mount::BudgetTotals.id(),
        panels.html(Mount::BudgetTotals),
        Mount::BudgetTable.id(),
        panels.html(Mount::BudgetTable),
    )
}

/// The standalone budget page.
pub fn budget_page_html(panels: &Panels, settings: &SiteSettings) -> String {
    let title = format!("{} · Budget", settings.title);
    let body = format!(
        "<header>\n<h1>{}</h1>\n<p><a href=\"index.html\">Itinerary</a></p>\n</header>\n<main>\n{}</main>\n",
        escape(&title),
        budget_section(panels)
    );
    document(settings, &title, &body)
}

fn document(settings: &SiteSettings, title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <meta name=\"generator\" content=\"{generator}\">\n<title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"{LEAFLET_CSS}\">\n<style>\n{SITE_CSS}</style>\n</head>\n\
         <body>\n{body}</body>\n</html>\n",
        generator = escape(&settings.generator),
        title = escape(title),
    )
}
