use itinerary_core::{format_km, short_date_label, Stay};

use crate::html::{Element, Node};
use crate::panel::{Mount, Panel};

/// Page that shows stay `index` selected.
pub fn stay_href(index: usize) -> String {
    format!("stay-{}.html", index + 1)
}

/// `"2. Agra (07 Jan → 09 Jan) (221.6 km)"`; the first stay has no distance.
pub fn stay_label(index: usize, stay: &Stay, from_previous: Option<f64>) -> String {
    let mut label = format!(
        "{}. {} ({} → {})",
        index + 1,
        stay.name,
        short_date_label(&stay.check_in),
        short_date_label(&stay.check_out)
    );
    if let Some(km) = from_previous {
        label.push_str(&format!(" ({} km)", format_km(km)));
    }
    label
}

/// One link per stay, the selected one marked active.
pub fn stay_list_panel(stays: &[Stay], distances: &[Option<f64>], selected: usize) -> Panel {
    let links = stays
        .iter()
        .enumerate()
        .map(|(i, stay)| {
            let class = if i == selected { "stay-link active" } else { "stay-link" };
            let from_previous = distances.get(i).copied().flatten();
            Node::from(
                Element::new("a")
                    .attr("href", stay_href(i))
                    .class(class)
                    .text(stay_label(i, stay, from_previous)),
            )
        })
        .collect();
    Panel::new(Mount::StayList, links)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stay(name: &str, check_in: &str, check_out: &str) -> Stay {
        Stay {
            key: name.to_lowercase(),
            name: name.to_string(),
            lat: 0.0,
            lng: 0.0,
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
        }
    }

    #[test]
    fn test_labels() {
        let a = stay("Jaipur (Pink City)", "2024-01-05", "2024-01-07");
        assert_eq!(stay_label(0, &a, None), "1. Jaipur (Pink City) (05 Jan → 07 Jan)");
        assert_eq!(
            stay_label(1, &a, Some(221.57)),
            "2. Jaipur (Pink City) (05 Jan → 07 Jan) (221.6 km)"
        );
    }

    #[test]
    fn test_active_entry() {
        let stays = vec![
            stay("A", "2024-01-01", "2024-01-02"),
            stay("B", "2024-01-02", "2024-01-03"),
        ];
        let panel = stay_list_panel(&stays, &[None, Some(10.0)], 1);
        assert_eq!(panel.nodes.len(), 2);

        let first = panel.nodes[0].as_element().unwrap();
        let second = panel.nodes[1].as_element().unwrap();
        assert_eq!(first.get_attr("class"), Some("stay-link"));
        assert_eq!(second.get_attr("class"), Some("stay-link active"));
        assert_eq!(second.get_attr("href"), Some("stay-2.html"));
        assert!(panel.nodes[1].text_content().ends_with("(10.0 km)"));
    }
}
