//! Views turn loaded state into panels and map calls.

pub mod budget;
pub mod detail;
pub mod itinerary;
pub mod stay_list;

pub use budget::{budget_failure_panel, BudgetView};
pub use detail::{LightTiming, StayDetail};
pub use itinerary::ItineraryView;
pub use stay_list::{stay_href, stay_list_panel};
