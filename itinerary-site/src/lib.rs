//! itinerary-site: loads trip data and renders the static itinerary and budget pages

pub mod context;
pub mod error;
pub mod html;
pub mod loader;
pub mod map;
pub mod page;
pub mod panel;
pub mod settings;
pub mod source;
pub mod views;
pub mod writer;

pub use context::SiteContext;
pub use error::LoadError;
pub use loader::{load_budget, load_site, LoadedSite};
pub use map::{LayerId, LineStyle, MapCommand, MapPlan, MapView, Marker, TileLayer};
pub use page::{RenderedPage, LOAD_ERROR_TEXT};
pub use panel::{Mount, Panel, Panels};
pub use settings::{MapStyle, SiteSettings};
pub use source::{DataFiles, DataSource};
pub use writer::{budget_panels, write_failure_page, write_site, BUDGET_PAGE, INDEX_PAGE};
