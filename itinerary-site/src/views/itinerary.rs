//! Main map: markers, ordinal labels, the route, framing, and the route chain.

use itinerary_core::{distances_from_previous, route_chain, route_legs, RouteLeg, TripData};

use crate::html::{Element, Node};
use crate::map::{LayerId, MapView, Marker};
use crate::panel::{Mount, Panel};
use crate::settings::MapStyle;
use crate::views::stay_list::stay_href;

/// State derived once when the main map is initialized.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryView {
    pub legs: Vec<RouteLeg>,
    pub chain: String,
    /// Per-stay distance from the previous stay; `None` for the first
    pub distances: Vec<Option<f64>>,
    /// The drawn route, present with two or more stays
    pub route_layer: Option<LayerId>,
}

fn marker_popup(ordinal: usize, name: &str, dates: &str) -> String {
    let popup: Node = Element::new("span")
        .child(Element::new("b").text(format!("{ordinal}. {name}")))
        .child(Node::br())
        .text(dates)
        .into();
    popup.to_html()
}

impl ItineraryView {
    /// Draw the main map. The pin of the `selected` stay opens its summary.
    pub fn init(data: &TripData, style: &MapStyle, map: &mut impl MapView, selected: usize) -> Self {
        map.add_tile_layers(&style.tile_layers);

        for (i, stay) in data.stays.iter().enumerate() {
            map.add_marker(Marker::Pin {
                at: stay.position(),
                popup: Some(marker_popup(i + 1, &stay.name, &stay.date_range())),
                open_popup: i == selected,
                href: Some(stay_href(i)),
            });
            map.add_marker(Marker::Label {
                at: stay.position(),
                text: (i + 1).to_string(),
                size: style.label_size,
                anchor: style.label_anchor,
            });
        }

        let points = data.positions();
        let route_layer = if points.len() > 1 {
            let id = map.add_polyline(&points, &style.route);
            if !style.show_route {
                map.toggle_layer(id, false);
            }
            Some(id)
        } else {
            None
        };
        map.fit_bounds(&points, style.fit_padding);

        let legs = route_legs(&data.stays);
        let chain = route_chain(&data.stays, &legs);
        tracing::debug!(legs = legs.len(), %chain, "route derived");

        Self {
            legs,
            chain,
            distances: distances_from_previous(&data.stays),
            route_layer,
        }
    }

    /// Show or hide the already-drawn route.
    pub fn set_route_visible(&self, map: &mut impl MapView, visible: bool) {
        if let Some(id) = self.route_layer {
            map.toggle_layer(id, visible);
        }
    }

    pub fn route_chain_panel(&self) -> Panel {
        Panel::text(Mount::RouteChain, self.chain.clone())
    }
}
