//! Time utilities: stay dates, the check-in instant used for solar timing,
//! and display formatting in a fixed IANA zone.

use anyhow::Result;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// Parse an IANA zone name like "Asia/Kolkata".
pub fn parse_timezone(tz: &str) -> Result<Tz> {
    tz.parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))
}

/// Parse a stay date like "2024-01-05".
pub fn parse_stay_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("invalid stay date '{s}': {e}"))
}

/// Noon on `date` at a fixed UTC offset (in minutes), returned as UTC.
///
/// Check-in dates are interpreted at +05:30 by default, so the solar times
/// land on the intended calendar day regardless of where the build runs.
pub fn solar_noon_utc(date: NaiveDate, offset_minutes: i32) -> Result<DateTime<Utc>> {
    let offset = FixedOffset::east_opt(offset_minutes * 60)
        .ok_or_else(|| anyhow::anyhow!("invalid utc offset: {offset_minutes} minutes"))?;
    let noon = date
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| anyhow::anyhow!("invalid noon for {date}"))?;
    let local = offset
        .from_local_datetime(&noon)
        .single()
        .ok_or_else(|| anyhow::anyhow!("ambiguous local noon for {date}"))?;
    Ok(local.with_timezone(&Utc))
}

/// 24-hour `HH:MM` in the given zone.
pub fn format_clock(dt: DateTime<Utc>, tz: Tz) -> String {
    dt.with_timezone(&tz).format("%H:%M").to_string()
}

/// Day-before-month short label: `"05 Jan"`.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%d %b").to_string()
}

/// Short label for a raw stay date; unparseable input is shown as written.
pub fn short_date_label(raw: &str) -> String {
    match parse_stay_date(raw) {
        Ok(d) => format_short_date(d),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solar_noon_in_india() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let utc = solar_noon_utc(date, 330).unwrap();
        assert_eq!(utc.to_rfc3339(), "2024-01-05T06:30:00+00:00");
    }

    #[test]
    fn test_format_clock_in_kolkata() {
        let tz = parse_timezone("Asia/Kolkata").unwrap();
        let dt = Utc.with_ymd_and_hms(2024, 1, 5, 1, 15, 0).unwrap();
        assert_eq!(format_clock(dt, tz), "06:45");
    }

    #[test]
    fn test_short_dates() {
        assert_eq!(short_date_label("2024-01-05"), "05 Jan");
        assert_eq!(short_date_label("2024-12-31"), "31 Dec");
        assert_eq!(short_date_label("sometime"), "sometime");
    }

    #[test]
    fn test_invalid_timezone() {
        assert!(parse_timezone("Mars/Olympus").is_err());
    }
}
