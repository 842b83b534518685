//! Stay detail: everything that refreshes when a stay is selected.
//!
//! Each refresh is computed from the loaded data alone, so selecting the
//! same stay twice gives identical panels.

use anyhow::{Context, Result};
use itinerary_core::{
    format_clock, parse_stay_date, solar_noon_utc, LatLng, Poi, SolarTimes, Stay, StayImage, TripData,
};

use crate::html::{Element, Node};
use crate::map::{MapView, Marker};
use crate::panel::{Mount, Panel};
use crate::settings::SiteSettings;

const UNAVAILABLE: &str = "n/a";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightTiming {
    pub lines: Vec<String>,
    pub weather_url: Option<String>,
}

impl LightTiming {
    pub fn compute(stay: &Stay, settings: &SiteSettings, solar: &(impl SolarTimes + ?Sized)) -> Self {
        let noon = parse_stay_date(&stay.check_in)
            .and_then(|date| solar_noon_utc(date, settings.checkin_offset_minutes));

        let lines = match noon {
            Ok(noon) => {
                let t = solar.times(noon, stay.lat, stay.lng);
                let clock = |at: Option<chrono::DateTime<chrono::Utc>>| {
                    at.map(|dt| format_clock(dt, settings.display_tz))
                        .unwrap_or_else(|| UNAVAILABLE.to_string())
                };
                vec![
                    format!(
                        "Sunrise: {} · Golden (AM) ends: {}",
                        clock(t.sunrise),
                        clock(t.golden_hour_end)
                    ),
                    format!(
                        "Sunset: {} · Golden (PM) starts: {}",
                        clock(t.sunset),
                        clock(t.golden_hour_start)
                    ),
                ]
            }
            Err(e) => {
                tracing::warn!(stay = %stay.key, error = %e, "no light timing for stay");
                vec![format!("Light timing unavailable for {}", stay.check_in)]
            }
        };

        Self {
            lines,
            weather_url: settings.weather_link(stay.position()),
        }
    }

    pub fn panel(&self) -> Panel {
        let mut nodes = Vec::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                nodes.push(Node::br());
            }
            nodes.push(Node::text(line.clone()));
        }
        if let Some(url) = &self.weather_url {
            nodes.push(Node::br());
            nodes.push(Node::from(
                Element::external_link(url.clone())
                    .class("weather-link")
                    .text("Live weather"),
            ));
        }
        Panel::new(Mount::LightBox, nodes)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StayDetail {
    pub index: usize,
    pub name: String,
    pub position: LatLng,
    pub title: String,
    pub meta: String,
    pub pois: Vec<Poi>,
    pub light: LightTiming,
    pub gallery: Vec<StayImage>,
}

impl StayDetail {
    pub fn build(
        data: &TripData,
        settings: &SiteSettings,
        solar: &(impl SolarTimes + ?Sized),
        index: usize,
    ) -> Result<Self> {
        let stay = data
            .stays
            .get(index)
            .with_context(|| format!("no stay at index {index} ({} stays)", data.stays.len()))?;

        Ok(Self {
            index,
            name: stay.name.clone(),
            position: stay.position(),
            title: format!("Explore — {}", stay.name),
            meta: stay.date_range(),
            pois: data.pois_for(&stay.key).to_vec(),
            light: LightTiming::compute(stay, settings, solar),
            gallery: data.images_for(&stay.key).to_vec(),
        })
    }

    /// Recentre the main map and point the area map at this stay.
    pub fn focus_maps(&self, main: &mut impl MapView, area: &mut impl MapView, settings: &SiteSettings) {
        main.pan_to(self.position);

        area.add_tile_layers(&settings.map.tile_layers);
        area.set_view(self.position, settings.map.area_zoom);
        let popup: Node = Node::text(self.name.clone());
        area.add_marker(Marker::Pin {
            at: self.position,
            popup: Some(popup.to_html()),
            open_popup: true,
            href: None,
        });
    }

    pub fn poi_panel(&self) -> Panel {
        let items = self
            .pois
            .iter()
            .map(|p| {
                Node::from(
                    Element::new("li")
                        .child(Element::external_link(p.map_link.clone()).text(p.name.clone())),
                )
            })
            .collect();
        Panel::new(Mount::PoiList, items)
    }

    pub fn gallery_panel(&self) -> Panel {
        let thumbs = self
            .gallery
            .iter()
            .map(|img| {
                Node::from(
                    Element::external_link(img.link_target())
                        .attr("title", img.tooltip())
                        .child(
                            Element::new("img")
                                .attr("loading", "lazy")
                                .attr("src", img.src.clone())
                                .attr("alt", img.alt_text()),
                        ),
                )
            })
            .collect();
        Panel::new(Mount::Gallery, thumbs)
    }

    /// Header, POIs, light timing and gallery, in refresh order.
    pub fn panels(&self) -> Vec<Panel> {
        vec![
            Panel::text(Mount::ExploreTitle, self.title.clone()),
            Panel::text(Mount::AreaMeta, self.meta.clone()),
            self.poi_panel(),
            self.light.panel(),
            self.gallery_panel(),
        ]
    }
}
