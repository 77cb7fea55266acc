//! Open-Meteo current weather.
//!
//! [Open-Meteo](https://open-meteo.com) serves forecasts keyed by coordinate
//! pair with no API key. Only the `current_weather` block is requested.

use tracing::{info, instrument};
use url::form_urlencoded;

use crate::fetch::{self, FetchError};
use crate::models::WeatherReport;

/// Open-Meteo API base URL.
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Build the forecast URL for a coordinate pair.
///
/// The query asks for the `current_weather` block only. The base is not
/// validated here; a bad base surfaces from the transport when fetched.
pub fn forecast_url(base: &str, latitude: f64, longitude: f64) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("latitude", &latitude.to_string())
        .append_pair("longitude", &longitude.to_string())
        .append_pair("current_weather", "true")
        .finish();
    format!("{}/forecast?{}", base.trim_end_matches('/'), query)
}

/// Fetch current conditions for a coordinate pair.
///
/// # Arguments
///
/// * `base` - API base URL, usually [`OPEN_METEO_API_BASE`]
/// * `latitude` / `longitude` - position in decimal degrees
///
/// # Returns
///
/// The decoded report, or a [`FetchError`] if the transport failed or the
/// body was not the expected shape.
#[instrument(level = "info", skip(base))]
pub async fn current(base: &str, latitude: f64, longitude: f64) -> Result<WeatherReport, FetchError> {
    let url = forecast_url(base, latitude, longitude);
    let report: WeatherReport = fetch::decode(fetch::fetch_json(&url).await?)?;
    info!(
        temperature = report.current_weather.temperature,
        windspeed = report.current_weather.windspeed,
        "fetched current weather"
    );
    Ok(report)
}
