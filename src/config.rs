//! Page wiring configuration.
//!
//! DESIGN
//! ======
//! Every selector, id, timing, and endpoint the behaviours depend on lives
//! here so the markup contract is readable in one place. The page may embed
//! a partial JSON override; anything it leaves out keeps the default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_WEATHER_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_LATITUDE: f64 = 43.70;
pub const DEFAULT_LONGITUDE: f64 = 7.27;

/// Id of the optional `<script type="application/json">` override block.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Errors produced while reading a configuration override.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The override block is not valid JSON for [`SiteConfig`].
    #[error("config parse failed: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub toggle_selector: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { storage_key: DEFAULT_STORAGE_KEY.to_owned(), toggle_selector: "[data-theme-toggle]".to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selectors: Vec<String>,
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: vec![".card".to_owned(), ".message".to_owned(), ".media".to_owned()],
            threshold: crate::reveal::REVEAL_THRESHOLD,
        }
    }
}

/// Expandable panel markup and transition timings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub selector: String,
    pub inner_selector: String,
    /// Element id that doubles as the deep-link fragment.
    pub anchor_id: String,
    pub height_ms: u32,
    pub opacity_ms: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            selector: "details.footer-contact".to_owned(),
            inner_selector: ".footer-contact-panel".to_owned(),
            anchor_id: "footer-contact".to_owned(),
            height_ms: 320,
            opacity_ms: 220,
        }
    }
}

impl PanelConfig {
    /// CSS `transition` value applied when an animation starts.
    #[must_use]
    pub fn transition(&self) -> String {
        format!("height {}ms ease, opacity {}ms ease", self.height_ms, self.opacity_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub selector: String,
    pub wrapper_selector: String,
    pub item_selector: String,
    pub prev_selector: String,
    pub next_selector: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            selector: ".carousel".to_owned(),
            wrapper_selector: ".carousel-wrapper".to_owned(),
            item_selector: ".carousel-item".to_owned(),
            prev_selector: ".carousel-btn.prev".to_owned(),
            next_selector: ".carousel-btn.next".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub element_id: String,
    pub delay_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self { element_id: "typewriter-h1".to_owned(), delay_ms: crate::typewriter::DEFAULT_DELAY_MS }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub container_id: String,
    pub endpoint: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            container_id: "custom-weather-widget".to_owned(),
            endpoint: DEFAULT_WEATHER_ENDPOINT.to_owned(),
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
        }
    }
}

impl WeatherConfig {
    #[must_use]
    pub fn url(&self) -> String {
        crate::weather::forecast_url(&self.endpoint, self.latitude, self.longitude)
    }
}

/// Complete page configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub reveal: RevealConfig,
    pub panel: PanelConfig,
    pub carousel: CarouselConfig,
    pub typewriter: TypewriterConfig,
    pub weather: WeatherConfig,
    pub underline_selector: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            reveal: RevealConfig::default(),
            panel: PanelConfig::default(),
            carousel: CarouselConfig::default(),
            typewriter: TypewriterConfig::default(),
            weather: WeatherConfig::default(),
            underline_selector: crate::headings::UNDERLINE_SELECTOR.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `raw` is not a JSON object matching
    /// the config shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
