//! Sunrise, sunset and golden-hour boundaries.
//!
//! [`SolarTimes`] is the seam the detail view depends on. [`SunCalc`] answers
//! it with the `sun` crate, a port of the suncalc solar model.

use chrono::{DateTime, TimeZone, Utc};
use sun::SunPhase;

/// Solar events for one day. `None` when the sun never crosses the altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SunTimes {
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
    /// End of the morning golden hour
    pub golden_hour_end: Option<DateTime<Utc>>,
    /// Start of the evening golden hour
    pub golden_hour_start: Option<DateTime<Utc>>,
}

/// Computes solar events for the day containing `at`, at a location.
pub trait SolarTimes {
    fn times(&self, at: DateTime<Utc>, lat: f64, lng: f64) -> SunTimes;
}

/// Solar calculator for an observer at sea level.
#[derive(Debug, Clone, Copy, Default)]
pub struct SunCalc;

/// Events are always within a day of the requested instant. Anything else
/// is what the model returns when the sun never reaches the altitude.
const MAX_EVENT_OFFSET_HOURS: i64 = 24;

fn event(at: DateTime<Utc>, phase: SunPhase, lat: f64, lng: f64) -> Option<DateTime<Utc>> {
    let ms = sun::time_at_phase(at.timestamp_millis(), phase, lat, lng, 0.0);
    let t = Utc.timestamp_millis_opt(ms).single()?;
    ((t - at).num_hours().abs() <= MAX_EVENT_OFFSET_HOURS).then_some(t)
}

impl SolarTimes for SunCalc {
    fn times(&self, at: DateTime<Utc>, lat: f64, lng: f64) -> SunTimes {
        SunTimes {
            sunrise: event(at, SunPhase::Sunrise, lat, lng),
            sunset: event(at, SunPhase::Sunset, lat, lng),
            golden_hour_end: event(at, SunPhase::GoldenHourEnd, lat, lng),
            golden_hour_start: event(at, SunPhase::GoldenHour, lat, lng),
        }
    }
}
