//! Data models for the weather and news API responses and the assembled
//! briefing.
//!
//! - [`WeatherReport`] / [`CurrentWeather`]: the Open-Meteo forecast shape
//! - [`PostFeed`] / [`Post`]: the DummyJSON posts shape
//! - [`Headline`]: a post reduced to what the console shows
//! - [`Briefing`]: one edition of output, produced per composition mode
//!
//! Wire-format field names that are not snake_case (`userId`) are mapped
//! with serde attributes; fields the display never uses are optional so a
//! leaner upstream payload still deserializes.

use serde::{Deserialize, Serialize};

/// Top-level Open-Meteo forecast response.
///
/// Only the `current_weather` block is requested and only that block is
/// kept; the API returns more (elevation, timezone, generation time) that
/// this application ignores.
#[derive(Debug, Deserialize, Serialize)]
pub struct WeatherReport {
    /// Conditions at the requested coordinates right now.
    pub current_weather: CurrentWeather,
}

/// Current conditions as reported by Open-Meteo.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurrentWeather {
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
    /// Wind speed in km/h.
    pub windspeed: f64,
    /// Wind direction in degrees, when reported.
    #[serde(default)]
    pub winddirection: Option<f64>,
    /// WMO weather interpretation code, when reported.
    #[serde(default)]
    pub weathercode: Option<i64>,
    /// 1 during daylight at the location, 0 otherwise.
    #[serde(default)]
    pub is_day: Option<u8>,
    /// Observation timestamp in the API's local time format.
    #[serde(default)]
    pub time: Option<String>,
}

/// A page of posts from the news API.
#[derive(Debug, Deserialize, Serialize)]
pub struct PostFeed {
    pub posts: Vec<Post>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

/// A single news post.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "userId", default)]
    pub user_id: Option<u64>,
}

/// A post reduced for console display.
///
/// The snippet stays empty unless a detail fetch filled it in (only the
/// chained mode does).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Headline {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl From<&Post> for Headline {
    fn from(post: &Post) -> Self {
        Headline {
            id: post.id,
            title: post.title.clone(),
            snippet: None,
        }
    }
}

/// One edition of console output.
///
/// Each composition mode produces a `Briefing` from whatever its requests
/// delivered. Missing sections mean the corresponding request failed (or,
/// for the race mode, lost); failures never abort the run.
///
/// # Edition Naming
///
/// The `time_of_day` field categorizes editions as:
/// - `"morning"`: 00:00 - 08:00
/// - `"afternoon"`: 08:00 - 16:00
/// - `"evening"`: 16:00 - 24:00
#[derive(Debug, Deserialize, Serialize)]
pub struct Briefing {
    /// The date of assembly in `YYYY-MM-DD` format.
    pub local_date: String,
    /// The time of day category: "morning", "afternoon", or "evening".
    pub time_of_day: String,
    /// The exact local time of assembly.
    pub local_time: String,
    /// Which composition mode produced this edition.
    pub mode: String,
    /// Current conditions, when the weather request succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<CurrentWeather>,
    /// Headlines, when the news request succeeded.
    pub headlines: Vec<Headline>,
}
