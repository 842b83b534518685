//! Trip data as it arrives from the static data files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::geo::LatLng;

/// One overnight stop. Itinerary order is file order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stay {
    /// Stable identifier used to look up POIs and images
    pub key: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Check-in date as written in the data file (YYYY-MM-DD)
    pub check_in: String,
    /// Check-out date as written in the data file (YYYY-MM-DD)
    pub check_out: String,
}

impl Stay {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// `"<check_in> → <check_out>"`, verbatim from the data file.
    pub fn date_range(&self) -> String {
        format!("{} → {}", self.check_in, self.check_out)
    }
}

/// A point of interest near a stay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Poi {
    pub name: String,
    /// External map link; opaque to us.
    #[serde(rename = "gmaps")]
    pub map_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StayImage {
    pub src: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub credit: Option<String>,
    /// Page the image was taken from, preferred over `src` as the link target
    #[serde(default)]
    pub page: Option<String>,
}

impl StayImage {
    pub fn link_target(&self) -> &str {
        non_empty(&self.page).unwrap_or(&self.src)
    }

    pub fn alt_text(&self) -> &str {
        non_empty(&self.title).unwrap_or("")
    }

    /// Tooltip: `"<title> · <credit>"`, either part dropped when absent.
    pub fn tooltip(&self) -> String {
        let mut s = String::new();
        if let Some(title) = non_empty(&self.title) {
            s.push_str(title);
            s.push_str(" · ");
        }
        if let Some(credit) = non_empty(&self.credit) {
            s.push_str(credit);
        }
        s
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|v| !v.is_empty())
}

/// Everything loaded for one site build. Read-only after load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TripData {
    pub stays: Vec<Stay>,
    pub pois: HashMap<String, Vec<Poi>>,
    pub images: HashMap<String, Vec<StayImage>>,
}

impl TripData {
    pub fn new(
        stays: Vec<Stay>,
        pois: HashMap<String, Vec<Poi>>,
        images: HashMap<String, Vec<StayImage>>,
    ) -> Self {
        Self { stays, pois, images }
    }

    /// POIs for a stay key; unknown keys give an empty slice.
    pub fn pois_for(&self, key: &str) -> &[Poi] {
        self.pois.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Images for a stay key; unknown keys give an empty slice.
    pub fn images_for(&self, key: &str) -> &[StayImage] {
        self.images.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn positions(&self) -> Vec<LatLng> {
        self.stays.iter().map(Stay::position).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stay_from_json() {
        let json = r#"{"key":"goa","name":"Goa (Beach)","lat":15.5,"lng":73.8,
                       "check_in":"2024-01-05","check_out":"2024-01-08"}"#;
        let stay: Stay = serde_json::from_str(json).unwrap();
        assert_eq!(stay.key, "goa");
        assert_eq!(stay.date_range(), "2024-01-05 → 2024-01-08");
        assert_eq!(stay.position(), LatLng::new(15.5, 73.8));
    }

    #[test]
    fn test_poi_uses_gmaps_field() {
        let poi: Poi =
            serde_json::from_str(r#"{"name":"Fort","gmaps":"https://maps.example/fort"}"#).unwrap();
        assert_eq!(poi.map_link, "https://maps.example/fort");
    }

    #[test]
    fn test_image_link_and_tooltip() {
        let full: StayImage = serde_json::from_str(
            r#"{"src":"a.jpg","title":"Dunes","credit":"Jane","page":"https://p/1"}"#,
        )
        .unwrap();
        assert_eq!(full.link_target(), "https://p/1");
        assert_eq!(full.alt_text(), "Dunes");
        assert_eq!(full.tooltip(), "Dunes · Jane");

        let bare: StayImage = serde_json::from_str(r#"{"src":"b.jpg"}"#).unwrap();
        assert_eq!(bare.link_target(), "b.jpg");
        assert_eq!(bare.alt_text(), "");
        assert_eq!(bare.tooltip(), "");

        let credit_only: StayImage =
            serde_json::from_str(r#"{"src":"c.jpg","credit":"Wiki"}"#).unwrap();
        assert_eq!(credit_only.tooltip(), "Wiki");
    }

    #[test]
    fn test_missing_key_is_empty() {
        let data = TripData::default();
        assert!(data.pois_for("nowhere").is_empty());
        assert!(data.images_for("nowhere").is_empty());
    }
}
