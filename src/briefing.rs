//! Briefing assembly, one driver per composition mode.
//!
//! All four drivers issue the same requests through [`crate::fetch`] and
//! differ only in how they compose them:
//!
//! - [`sequential`]: one request at a time, each step independent
//! - [`chained`]: each request gated on the previous one succeeding
//! - [`concurrent`]: both requests at once, wait for both, fixed order
//! - [`race`]: both requests at once, keep whichever settles first
//!
//! Failures follow one policy everywhere: log and keep going. A failed
//! request leaves its section of the [`Briefing`] empty and never affects
//! other in-flight or subsequent requests, let alone the process.

use chrono::Local;
use tracing::{info, instrument, warn};

use crate::fetch;
use crate::models::{Briefing, Headline, PostFeed, WeatherReport};
use crate::sources::{news, weather, Endpoints};
use crate::utils::time_of_day;

/// How much of a post body the chained mode keeps as a snippet.
const SNIPPET_CHARS: usize = 80;

/// A fresh briefing stamped with the assembly time and producing mode.
fn edition(mode: &str) -> Briefing {
    let now = Local::now();
    Briefing {
        local_date: now.date_naive().to_string(),
        time_of_day: time_of_day(),
        local_time: now.time().to_string(),
        mode: mode.to_string(),
        weather: None,
        headlines: Vec::new(),
    }
}

fn snippet_of(body: &str) -> String {
    body.chars().take(SNIPPET_CHARS).collect()
}

/// Assemble a briefing one request at a time.
///
/// Awaits the weather, then the headlines. The steps are independent: a
/// weather failure is logged and the news request is still issued.
#[instrument(level = "info", skip_all)]
pub async fn sequential(
    endpoints: &Endpoints,
    latitude: f64,
    longitude: f64,
    limit: usize,
) -> Briefing {
    let mut briefing = edition("sequential");

    match weather::current(&endpoints.weather_base, latitude, longitude).await {
        Ok(report) => briefing.weather = Some(report.current_weather),
        Err(e) => warn!(kind = e.kind(), error = %e, "weather fetch failed; briefing has no weather"),
    }

    match news::latest(&endpoints.news_base, limit).await {
        Ok(feed) => briefing.headlines = feed.posts.iter().map(Headline::from).collect(),
        Err(e) => warn!(kind = e.kind(), error = %e, "news fetch failed; briefing has no headlines"),
    }

    briefing
}

/// Assemble a briefing as a dependent chain.
///
/// Weather, then headlines, then the detail of the first headline, where
/// each later request is issued only if the one before it succeeded. The
/// detail request's URL is derived from the first post's id, and its body
/// becomes that headline's snippet.
#[instrument(level = "info", skip_all)]
pub async fn chained(
    endpoints: &Endpoints,
    latitude: f64,
    longitude: f64,
    limit: usize,
) -> Briefing {
    let mut briefing = edition("chained");

    let report = match weather::current(&endpoints.weather_base, latitude, longitude).await {
        Ok(report) => report,
        Err(e) => {
            warn!(kind = e.kind(), error = %e, "weather fetch failed; stopping the chain");
            return briefing;
        }
    };
    briefing.weather = Some(report.current_weather);

    let feed = match news::latest(&endpoints.news_base, limit).await {
        Ok(feed) => feed,
        Err(e) => {
            warn!(kind = e.kind(), error = %e, "news fetch failed; stopping the chain");
            return briefing;
        }
    };
    briefing.headlines = feed.posts.iter().map(Headline::from).collect();

    if let Some(first) = feed.posts.first() {
        match news::detail(&endpoints.news_base, first.id).await {
            Ok(post) => {
                if let Some(headline) = briefing.headlines.first_mut() {
                    headline.snippet = Some(snippet_of(&post.body));
                }
            }
            Err(e) => warn!(id = first.id, kind = e.kind(), error = %e, "post detail fetch failed; headline keeps no snippet"),
        }
    }

    briefing
}

/// Assemble a briefing from both requests issued concurrently.
///
/// Waits for both to settle. The outcome collection preserves request
/// order, so the weather slot is always first no matter which backend
/// responded first.
#[instrument(level = "info", skip_all)]
pub async fn concurrent(
    endpoints: &Endpoints,
    latitude: f64,
    longitude: f64,
    limit: usize,
) -> Briefing {
    let mut briefing = edition("concurrent");

    let urls = vec![
        weather::forecast_url(&endpoints.weather_base, latitude, longitude),
        news::posts_url(&endpoints.news_base, limit),
    ];
    let mut outcomes = fetch::join(&urls).await;
    let news_outcome = outcomes.pop().expect("one outcome per request");
    let weather_outcome = outcomes.pop().expect("one outcome per request");

    match weather_outcome.and_then(fetch::decode::<WeatherReport>) {
        Ok(report) => briefing.weather = Some(report.current_weather),
        Err(e) => warn!(kind = e.kind(), error = %e, "weather fetch failed; briefing has no weather"),
    }
    match news_outcome.and_then(fetch::decode::<PostFeed>) {
        Ok(feed) => briefing.headlines = feed.posts.iter().map(Headline::from).collect(),
        Err(e) => warn!(kind = e.kind(), error = %e, "news fetch failed; briefing has no headlines"),
    }

    briefing
}

/// Assemble a briefing from whichever request settles first.
///
/// First-to-settle means exactly that: a fast failure wins the race over a
/// slow success and leaves the briefing empty. The settled response is
/// identified by shape, since either backend may come in first. The losing
/// request is discarded.
#[instrument(level = "info", skip_all)]
pub async fn race(
    endpoints: &Endpoints,
    latitude: f64,
    longitude: f64,
    limit: usize,
) -> Briefing {
    let mut briefing = edition("race");

    let urls = vec![
        weather::forecast_url(&endpoints.weather_base, latitude, longitude),
        news::posts_url(&endpoints.news_base, limit),
    ];
    let (index, outcome) = fetch::race(&urls).await;

    match outcome {
        Ok(value) if value.get("current_weather").is_some() => {
            match fetch::decode::<WeatherReport>(value) {
                Ok(report) => {
                    info!(index, "weather settled first");
                    briefing.weather = Some(report.current_weather);
                }
                Err(e) => warn!(index, error = %e, "first response looked like weather but did not decode"),
            }
        }
        Ok(value) if value.get("posts").is_some() => match fetch::decode::<PostFeed>(value) {
            Ok(feed) => {
                info!(index, count = feed.posts.len(), "news settled first");
                briefing.headlines = feed.posts.iter().map(Headline::from).collect();
            }
            Err(e) => warn!(index, error = %e, "first response looked like news but did not decode"),
        },
        Ok(value) => {
            let keys = value
                .as_object()
                .map(|map| map.keys().take(5).cloned().collect::<Vec<_>>())
                .unwrap_or_default();
            info!(index, ?keys, "first response had an unrecognized shape");
        }
        Err(e) => {
            warn!(index, kind = e.kind(), error = %e, "first request to settle failed; the race reports it as-is");
        }
    }

    briefing
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn weather_body() -> serde_json::Value {
        json!({"current_weather": {"temperature": 18.3, "windspeed": 11.9}})
    }

    fn posts_body() -> serde_json::Value {
        json!({
            "posts": [
                {"id": 7, "title": "First", "body": "short"},
                {"id": 8, "title": "Second", "body": "short too"}
            ],
            "total": 2, "skip": 0, "limit": 2
        })
    }

    fn endpoints_at(server: &MockServer) -> Endpoints {
        Endpoints {
            weather_base: server.uri(),
            news_base: server.uri(),
        }
    }

    /// A base URL on a port nothing is listening on.
    fn refused_base() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{port}")
    }

    #[tokio::test]
    async fn test_sequential_steps_are_independent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(posts_body()))
            .mount(&server)
            .await;

        let endpoints = Endpoints {
            weather_base: refused_base(),
            news_base: server.uri(),
        };
        let briefing = sequential(&endpoints, -26.2041, 28.0473, 2).await;

        // The weather failure must not suppress the news fetch.
        assert!(briefing.weather.is_none());
        assert_eq!(briefing.headlines.len(), 2);
        assert_eq!(briefing.headlines[0].title, "First");
        assert_eq!(briefing.mode, "sequential");
    }

    #[tokio::test]
    async fn test_chained_fetches_detail_after_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(weather_body()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(posts_body()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/posts/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 7, "title": "First",
                "body": "A much longer body that the briefing keeps only the beginning of."
            })))
            .expect(1)
            .mount(&server)
            .await;

        let briefing = chained(&endpoints_at(&server), -26.2041, 28.0473, 2).await;

        assert!(briefing.weather.is_some());
        assert_eq!(briefing.headlines.len(), 2);
        let snippet = briefing.headlines[0].snippet.as_deref().unwrap();
        assert!(snippet.starts_with("A much longer body"));
        assert!(snippet.chars().count() <= 80);
        assert!(briefing.headlines[1].snippet.is_none());
    }

    #[tokio::test]
    async fn test_chained_skips_detail_when_news_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(weather_body()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/posts/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let briefing = chained(&endpoints_at(&server), -26.2041, 28.0473, 2).await;

        assert!(briefing.weather.is_some());
        assert!(briefing.headlines.is_empty());
    }

    #[tokio::test]
    async fn test_chained_stops_at_failed_weather() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(posts_body()))
            .expect(0)
            .mount(&server)
            .await;

        let briefing = chained(&endpoints_at(&server), -26.2041, 28.0473, 2).await;

        assert!(briefing.weather.is_none());
        assert!(briefing.headlines.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_fills_both_sections() {
        let server = MockServer::start().await;
        // Weather is the slower backend; the briefing must not care.
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(weather_body())
                    .set_delay(Duration::from_millis(150)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(posts_body()))
            .mount(&server)
            .await;

        let briefing = concurrent(&endpoints_at(&server), -26.2041, 28.0473, 2).await;

        assert_eq!(briefing.weather.as_ref().unwrap().temperature, 18.3);
        assert_eq!(briefing.headlines.len(), 2);
    }

    #[tokio::test]
    async fn test_race_keeps_fastest_section_only() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(weather_body())
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(posts_body()))
            .mount(&server)
            .await;

        let briefing = race(&endpoints_at(&server), -26.2041, 28.0473, 2).await;

        assert!(briefing.weather.is_none());
        assert_eq!(briefing.headlines.len(), 2);
    }

    #[tokio::test]
    async fn test_race_reports_fast_failure_over_slow_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(weather_body())
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let briefing = race(&endpoints_at(&server), -26.2041, 28.0473, 2).await;

        // The fast failure settled first, so neither section is filled.
        assert!(briefing.weather.is_none());
        assert!(briefing.headlines.is_empty());
    }

    #[test]
    fn test_snippet_of_bounds_length() {
        let long = "x".repeat(500);
        assert_eq!(snippet_of(&long).chars().count(), SNIPPET_CHARS);
        assert_eq!(snippet_of("short"), "short");
    }
}
