//! Map capability and the recorded plan the page replays with Leaflet.
//!
//! Views only talk to [`MapView`]. [`MapPlan`] records every call as a
//! [`MapCommand`]; the page embeds the list as JSON and a small script
//! applies it to a Leaflet map in the same order.

use itinerary_core::LatLng;
use serde::{Deserialize, Serialize};

/// Handle to something drawn on a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerId(pub u32);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    pub name: String,
    pub url: String,
    pub max_zoom: u8,
    pub attribution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: "#6bb6ff".to_string(),
            weight: 3,
            opacity: 0.9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Marker {
    /// Interactive pin. `popup` is HTML; `href` is followed on click.
    Pin {
        at: LatLng,
        popup: Option<String>,
        open_popup: bool,
        href: Option<String>,
    },
    /// Non-interactive text badge offset from the point.
    Label {
        at: LatLng,
        text: String,
        size: [u32; 2],
        anchor: [u32; 2],
    },
}

pub trait MapView {
    /// Register switchable base layers; the first one is shown.
    fn add_tile_layers(&mut self, layers: &[TileLayer]);
    fn add_marker(&mut self, marker: Marker) -> LayerId;
    fn add_polyline(&mut self, points: &[LatLng], style: &LineStyle) -> LayerId;
    fn fit_bounds(&mut self, points: &[LatLng], padding: u32);
    /// Recentre without changing zoom.
    fn pan_to(&mut self, at: LatLng);
    fn set_view(&mut self, at: LatLng, zoom: u8);
    /// Show or hide an existing layer.
    fn toggle_layer(&mut self, layer: LayerId, visible: bool);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum MapCommand {
    TileLayers { layers: Vec<TileLayer> },
    Marker { id: LayerId, marker: Marker },
    Polyline { id: LayerId, points: Vec<LatLng>, style: LineStyle },
    FitBounds { points: Vec<LatLng>, padding: u32 },
    PanTo { at: LatLng },
    SetView { at: LatLng, zoom: u8 },
    Toggle { id: LayerId, visible: bool },
}

/// A map recorded as a command list, bound to a container element id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPlan {
    pub container: String,
    pub commands: Vec<MapCommand>,
    #[serde(skip)]
    next_id: u32,
}

impl MapPlan {
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            commands: Vec::new(),
            next_id: 0,
        }
    }

    fn allocate(&mut self) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.commands.iter().filter_map(|c| match c {
            MapCommand::Marker { marker, .. } => Some(marker),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = (LayerId, &[LatLng])> {
        self.commands.iter().filter_map(|c| match c {
            MapCommand::Polyline { id, points, .. } => Some((*id, points.as_slice())),
            _ => None,
        })
    }
}

impl MapView for MapPlan {
    fn add_tile_layers(&mut self, layers: &[TileLayer]) {
        if layers.is_empty() {
            return;
        }
        self.commands.push(MapCommand::TileLayers {
            layers: layers.to_vec(),
        });
    }

    fn add_marker(&mut self, marker: Marker) -> LayerId {
        let id = self.allocate();
        self.commands.push(MapCommand::Marker { id, marker });
        id
    }

    fn add_polyline(&mut self, points: &[LatLng], style: &LineStyle) -> LayerId {
        let id = self.allocate();
        self.commands.push(MapCommand::Polyline {
            id,
            points: points.to_vec(),
            style: style.clone(),
        });
        id
    }

    fn fit_bounds(&mut self, points: &[LatLng], padding: u32) {
        if points.is_empty() {
            return;
        }
        self.commands.push(MapCommand::FitBounds {
            points: points.to_vec(),
            padding,
        });
    }

    fn pan_to(&mut self, at: LatLng) {
        self.commands.push(MapCommand::PanTo { at });
    }

    fn set_view(&mut self, at: LatLng, zoom: u8) {
        self.commands.push(MapCommand::SetView { at, zoom });
    }

    fn toggle_layer(&mut self, layer: LayerId, visible: bool) {
        self.commands.push(MapCommand::Toggle { id: layer, visible });
    }
}
