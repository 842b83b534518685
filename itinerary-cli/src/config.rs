use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use itinerary_core::parse_timezone;
use itinerary_site::{DataFiles, DataSource, LineStyle, MapStyle, SiteSettings, TileLayer};

pub const DEFAULT_CONFIG_FILE: &str = "itinerary.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataSection,
    pub site: SiteSection,
    pub map: MapSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSection {
    /// Directory or http(s) base URL holding the data files
    pub source: String,
    pub stays: String,
    pub pois: String,
    pub images: String,
    pub budget: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub title: String,
    pub output_dir: PathBuf,
    /// IANA zone all clock times are shown in
    pub timezone: String,
    /// Offset used to read check-in dates, like "+05:30"
    pub checkin_utc_offset: String,
    pub default_currency: String,
    /// `{lat}`/`{lng}` template; empty disables the weather link
    pub weather_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSection {
    pub show_route: bool,
    pub route_color: String,
    pub route_weight: u32,
    pub route_opacity: f64,
    pub fit_padding: u32,
    pub area_zoom: u8,
    pub tile_layers: Vec<TileLayer>,
}

impl Default for DataSection {
    fn default() -> Self {
        let files = DataFiles::default();
        Self {
            source: "data".to_string(),
            stays: files.stays,
            pois: files.pois,
            images: files.images,
            budget: files.budget,
        }
    }
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Trip".to_string(),
            output_dir: PathBuf::from("site"),
            timezone: "Asia/Kolkata".to_string(),
            checkin_utc_offset: "+05:30".to_string(),
            default_currency: "INR".to_string(),
            weather_url: "https://www.windy.com/?{lat},{lng},11".to_string(),
        }
    }
}

impl Default for MapSection {
    fn default() -> Self {
        let style = MapStyle::default();
        Self {
            show_route: style.show_route,
            route_color: style.route.color,
            route_weight: style.route.weight,
            route_opacity: style.route.opacity,
            fit_padding: style.fit_padding,
            area_zoom: style.area_zoom,
            tile_layers: style.tile_layers,
        }
    }
}

impl Config {
    pub fn data_files(&self) -> DataFiles {
        DataFiles {
            stays: self.data.stays.clone(),
            pois: self.data.pois.clone(),
            images: self.data.images.clone(),
            budget: self.data.budget.clone(),
        }
    }

    pub fn site_settings(&self, source: &DataSource, generator: &str) -> Result<SiteSettings> {
        let weather_url = Some(self.site.weather_url.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(SiteSettings {
            title: self.site.title.clone(),
            display_tz: parse_timezone(&self.site.timezone)?,
            checkin_offset_minutes: parse_utc_offset(&self.site.checkin_utc_offset)?,
            default_currency: self.site.default_currency.clone(),
            weather_url,
            budget_label: source.locate(&self.data.budget),
            generator: generator.to_string(),
            map: MapStyle {
                tile_layers: self.map.tile_layers.clone(),
                route: LineStyle {
                    color: self.map.route_color.clone(),
                    weight: self.map.route_weight,
                    opacity: self.map.route_opacity,
                },
                show_route: self.map.show_route,
                fit_padding: self.map.fit_padding,
                area_zoom: self.map.area_zoom,
                ..MapStyle::default()
            },
        })
    }
}

/// Parse "+05:30" / "-03:00" / "Z" into minutes east of UTC.
pub fn parse_utc_offset(s: &str) -> Result<i32> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") {
        return Ok(0);
    }
    let (sign, rest) = match s.split_at_checked(1) {
        Some(("+", rest)) => (1, rest),
        Some(("-", rest)) => (-1, rest),
        _ => bail!("invalid utc offset '{s}' (expected like +05:30)"),
    };
    let (h, m) = rest
        .split_once(':')
        .with_context(|| format!("invalid utc offset '{s}' (expected like +05:30)"))?;
    let h: i32 = h.parse().with_context(|| format!("invalid offset hours in '{s}'"))?;
    let m: i32 = m.parse().with_context(|| format!("invalid offset minutes in '{s}'"))?;
    if !(0..=14).contains(&h) || !(0..60).contains(&m) {
        bail!("utc offset out of range: {s}");
    }
    Ok(sign * (h * 60 + m))
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

pub fn save_config(path: &Path, cfg: &Config) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Config already exists: {}", path.display());
        return Ok(());
    }
    save_config(path, &Config::default())?;
    println!("Wrote {}", path.display());
    Ok(())
}
