//! itinerary-core: trip data model and the pure computations behind the itinerary views

pub mod geo;
pub mod model;
pub mod route;
pub mod solar;
pub mod time;

pub use geo::{haversine_km, LatLng, EARTH_RADIUS_KM};
pub use model::{Poi, Stay, StayImage, TripData};
pub use route::{distances_from_previous, format_km, route_chain, route_legs, short_name, RouteLeg};
pub use solar::{SolarTimes, SunCalc, SunTimes};
pub use time::{
    format_clock, format_short_date, parse_stay_date, parse_timezone, short_date_label,
    solar_noon_utc,
};
