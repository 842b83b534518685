//! Route legs between consecutive stays and the human-readable route chain.
//!
//! The chain reads like `1.Jaipur → 2.Agra: 221.6 km → 3.Delhi: 178.9 km`.
//! Names are shortened (parenthetical suffixes dropped) and distances are
//! shown with one decimal.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::Stay;

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.*?\)\s*").expect("static pattern"));

/// Drop every parenthetical from a display name: `"Goa (Beach)"` -> `"Goa"`.
pub fn short_name(name: &str) -> String {
    PARENTHETICAL.replace_all(name, "").trim().to_string()
}

/// Kilometres with one decimal, no unit.
pub fn format_km(km: f64) -> String {
    format!("{km:.1}")
}

/// Distance from stay `from` to the next stay `to` (always `from + 1`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteLeg {
    pub from: usize,
    pub to: usize,
    pub km: f64,
}

/// One leg per consecutive pair of stays, in itinerary order.
pub fn route_legs(stays: &[Stay]) -> Vec<RouteLeg> {
    stays
        .windows(2)
        .enumerate()
        .map(|(i, pair)| RouteLeg {
            from: i,
            to: i + 1,
            km: pair[0].position().distance_km(&pair[1].position()),
        })
        .collect()
}

/// Distance from the preceding stay, for every stay. The first is `None`.
pub fn distances_from_previous(stays: &[Stay]) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(stays.len());
    if !stays.is_empty() {
        out.push(None);
    }
    out.extend(route_legs(stays).into_iter().map(|leg| Some(leg.km)));
    out
}

/// Join the legs into the route chain. Fewer than two stays gives `""`.
pub fn route_chain(stays: &[Stay], legs: &[RouteLeg]) -> String {
    let mut parts = Vec::with_capacity(legs.len());
    for leg in legs {
        let (Some(a), Some(b)) = (stays.get(leg.from), stays.get(leg.to)) else {
            continue;
        };
        let hop = format!("{}.{}: {} km", leg.to + 1, short_name(&b.name), format_km(leg.km));
        if leg.from == 0 {
            parts.push(format!("{}.{} → {}", leg.from + 1, short_name(&a.name), hop));
        } else {
            parts.push(format!("→ {hop}"));
        }
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::haversine_km;

    fn stay(key: &str, name: &str, lat: f64, lng: f64) -> Stay {
        Stay {
            key: key.to_string(),
            name: name.to_string(),
            lat,
            lng,
            check_in: "2024-01-01".to_string(),
            check_out: "2024-01-02".to_string(),
        }
    }

    #[test]
    fn test_short_name() {
        assert_eq!(short_name("Jaipur (Pink City)"), "Jaipur");
        assert_eq!(short_name("Goa (Beach)"), "Goa");
        assert_eq!(short_name("Udaipur"), "Udaipur");
        assert_eq!(short_name("  Agra  "), "Agra");
    }

    #[test]
    fn test_short_name_drops_every_parenthetical() {
        assert_eq!(short_name("Munnar (Hills) (Tea)"), "Munnar");
    }

    #[test]
    fn test_three_stay_chain() {
        let stays = vec![
            stay("a", "A", 26.9124, 75.7873),
            stay("b", "B (Old Town)", 27.1767, 78.0081),
            stay("c", "C", 28.6139, 77.2090),
        ];
        let legs = route_legs(&stays);
        assert_eq!(legs.len(), 2);

        let d_ab = haversine_km(26.9124, 75.7873, 27.1767, 78.0081);
        let d_bc = haversine_km(27.1767, 78.0081, 28.6139, 77.2090);
        let expected = format!("1.A → 2.B: {d_ab:.1} km → 3.C: {d_bc:.1} km");
        assert_eq!(route_chain(&stays, &legs), expected);
    }

    #[test]
    fn test_single_stay_has_no_chain() {
        let stays = vec![stay("a", "A", 1.0, 1.0)];
        let legs = route_legs(&stays);
        assert!(legs.is_empty());
        assert_eq!(route_chain(&stays, &legs), "");
        assert_eq!(distances_from_previous(&stays), vec![None]);
    }

    #[test]
    fn test_distances_from_previous() {
        let stays = vec![
            stay("a", "A", 0.0, 0.0),
            stay("b", "B", 0.0, 1.0),
            stay("c", "C", 0.0, 1.0),
        ];
        let d = distances_from_previous(&stays);
        assert_eq!(d.len(), 3);
        assert_eq!(d[0], None);
        assert_eq!(format_km(d[1].unwrap()), "111.2");
        assert_eq!(d[2], Some(0.0));
        assert!(distances_from_previous(&[]).is_empty());
    }
}
