//! Rendering settings. The CLI builds these from its TOML config.

use chrono_tz::Tz;
use itinerary_core::LatLng;

use crate::map::{LineStyle, TileLayer};

#[derive(Debug, Clone, PartialEq)]
pub struct MapStyle {
    pub tile_layers: Vec<TileLayer>,
    pub route: LineStyle,
    /// Route drawn on first paint; the toggle can still show it later
    pub show_route: bool,
    pub fit_padding: u32,
    pub area_zoom: u8,
    pub label_size: [u32; 2],
    pub label_anchor: [u32; 2],
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            tile_layers: default_tile_layers(),
            route: LineStyle::default(),
            show_route: true,
            fit_padding: 20,
            area_zoom: 11,
            label_size: [24, 24],
            label_anchor: [12, 30],
        }
    }
}

pub fn default_tile_layers() -> Vec<TileLayer> {
    vec![
        TileLayer {
            name: "Terrain".to_string(),
            url: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png".to_string(),
            max_zoom: 17,
            attribution: "&copy; OpenTopoMap, OSM".to_string(),
        },
        TileLayer {
            name: "Satellite".to_string(),
            url: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}".to_string(),
            max_zoom: 19,
            attribution: "&copy; Esri".to_string(),
        },
        TileLayer {
            name: "Light".to_string(),
            url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            max_zoom: 19,
            attribution: "&copy; OSM".to_string(),
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteSettings {
    pub title: String,
    /// Zone every clock time is shown in, wherever the page is viewed
    pub display_tz: Tz,
    /// Offset used to place check-in noon on the right calendar day
    pub checkin_offset_minutes: i32,
    pub default_currency: String,
    /// Live-weather link with `{lat}` and `{lng}` placeholders; `None` hides it
    pub weather_url: Option<String>,
    /// How the ledger is named in the budget failure message
    pub budget_label: String,
    /// Written into each page's generator meta tag
    pub generator: String,
    pub map: MapStyle,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "Trip".to_string(),
            display_tz: chrono_tz::Asia::Kolkata,
            checkin_offset_minutes: 330,
            default_currency: itinerary_ledger::DEFAULT_CURRENCY.to_string(),
            weather_url: Some("https://www.windy.com/?{lat},{lng},11".to_string()),
            budget_label: "data/budget.csv".to_string(),
            generator: format!("itinerary-site {}", env!("CARGO_PKG_VERSION")),
            map: MapStyle::default(),
        }
    }
}

impl SiteSettings {
    pub fn weather_link(&self, at: LatLng) -> Option<String> {
        self.weather_url.as_ref().map(|tpl| {
            tpl.replace("{lat}", &at.lat.to_string())
                .replace("{lng}", &at.lng.to_string())
        })
    }
}
