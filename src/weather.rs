//! Current-weather widget: fetch, parse, and format.
//!
//! The HTTP call goes through the [`HttpClient`] trait so the success and
//! failure paths can be exercised with test doubles. In the browser the
//! client is `dom::weather::GlooClient`.
//!
//! ERROR HANDLING
//! ==============
//! Any failure (transport, non-2xx status, missing or non-numeric fields)
//! collapses to [`FALLBACK_TEXT`] for the user and a `log::error!` entry for
//! the console. There is no retry and no caching.

#[cfg(test)]
#[path = "weather_test.rs"]
mod weather_test;

use std::fmt;

use serde::Deserialize;

/// Text shown when the reading cannot be fetched.
pub const FALLBACK_TEXT: &str = "N/A";

/// Errors produced while fetching the current reading.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// The request could not be sent or the body could not be read.
    #[error("weather request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("weather response error: status {0}")]
    Status(u16),

    /// The body is not the expected `current_weather` shape.
    #[error("weather response parse failed: {0}")]
    Parse(String),
}

/// Raw HTTP response handed back by an [`HttpClient`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal GET-only HTTP capability. Enables mocking in tests.
///
/// Futures are `?Send` because browser fetches run on the single UI thread.
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    /// Issue a GET request for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Request`] if the request cannot be completed.
    async fn get(&self, url: &str) -> Result<HttpResponse, WeatherError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherIcon {
    Clear,
    PartlyCloudy,
    Fog,
    Drizzle,
    Rain,
    Showers,
    Thunderstorm,
    Unknown,
}

impl WeatherIcon {
    /// Map a WMO weather code. Non-integral codes are unknown.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_code(code: f64) -> Self {
        if !code.is_finite() || code.fract() != 0.0 {
            return Self::Unknown;
        }
        match code as i64 {
            0 => Self::Clear,
            1..=3 => Self::PartlyCloudy,
            45 | 48 => Self::Fog,
            51..=55 => Self::Drizzle,
            61..=65 => Self::Rain,
            80..=82 => Self::Showers,
            95..=99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Clear => "\u{2600}\u{fe0f}",
            Self::PartlyCloudy => "\u{1f324}\u{fe0f}",
            Self::Fog => "\u{1f32b}\u{fe0f}",
            Self::Drizzle => "\u{1f326}\u{fe0f}",
            Self::Rain => "\u{1f327}\u{fe0f}",
            Self::Showers => "\u{26c8}\u{fe0f}",
            Self::Thunderstorm => "\u{1f329}\u{fe0f}",
            Self::Unknown => "\u{1f937}",
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    weathercode: f64,
}

/// A rendered-ready reading: icon plus whole-degree temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeatherReading {
    pub icon: WeatherIcon,
    pub temperature: i64,
}

impl fmt::Display for WeatherReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}°C", self.icon.glyph(), self.temperature)
    }
}

/// Build the current-conditions request URL for a coordinate pair.
#[must_use]
pub fn forecast_url(endpoint: &str, latitude: f64, longitude: f64) -> String {
    format!("{endpoint}?latitude={latitude:.2}&longitude={longitude:.2}&current_weather=true")
}

/// Round half-up (toward positive infinity), as the browser's `Math.round` does.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_temperature(celsius: f64) -> i64 {
    (celsius + 0.5).floor() as i64
}

/// Parse a forecast body into a reading.
///
/// # Errors
///
/// Returns [`WeatherError::Parse`] if `current_weather.temperature` or
/// `current_weather.weathercode` is missing or not numeric.
pub fn parse_reading(body: &str) -> Result<WeatherReading, WeatherError> {
    let parsed: ForecastResponse = serde_json::from_str(body).map_err(|e| WeatherError::Parse(e.to_string()))?;
    let current = parsed.current_weather;
    if !current.temperature.is_finite() {
        return Err(WeatherError::Parse(format!("non-finite temperature: {}", current.temperature)));
    }
    Ok(WeatherReading {
        icon: WeatherIcon::from_code(current.weathercode),
        temperature: round_temperature(current.temperature),
    })
}

/// Fetch and parse the current reading from `url`.
///
/// # Errors
///
/// Returns a [`WeatherError`] on transport failure, non-2xx status, or an
/// unexpected body.
pub async fn fetch_reading(client: &impl HttpClient, url: &str) -> Result<WeatherReading, WeatherError> {
    let resp = client.get(url).await?;
    if !resp.is_success() {
        return Err(WeatherError::Status(resp.status));
    }
    parse_reading(&resp.body)
}

/// Plain text for the widget; failures are logged and collapse to [`FALLBACK_TEXT`].
#[must_use]
pub fn display_text(result: &Result<WeatherReading, WeatherError>) -> String {
    match result {
        Ok(reading) => reading.to_string(),
        Err(e) => fallback(e),
    }
}

/// Widget markup with an enlarged icon; failures render [`FALLBACK_TEXT`].
#[must_use]
pub fn display_html(result: &Result<WeatherReading, WeatherError>) -> String {
    match result {
        Ok(reading) => format!(
            "<span style=\"font-size: 2rem;\">{}</span> {}°C",
            reading.icon.glyph(),
            reading.temperature
        ),
        Err(e) => fallback(e),
    }
}

fn fallback(e: &WeatherError) -> String {
    log::error!("Error fetching weather: {e}");
    FALLBACK_TEXT.to_owned()
}
