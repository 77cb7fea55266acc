//! Human-readable console rendering of a briefing.
//!
//! The format is for people, not machines: a header naming the edition and
//! the mode that produced it, a weather line, numbered headlines, and a
//! one-line recap of the titles. Sections whose request failed render as
//! "unavailable" / "none" so a partial briefing still reads coherently.

use itertools::Itertools;
use std::fmt::Write;

use crate::models::Briefing;
use crate::utils::upcase;

/// Render a briefing as a console block.
pub fn render(briefing: &Briefing) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "[{}] {} briefing for {} {}",
        briefing.mode,
        upcase(&briefing.time_of_day),
        briefing.local_date,
        briefing.local_time
    )
    .unwrap();

    match &briefing.weather {
        Some(weather) => writeln!(
            out,
            "Weather: {}°C, wind {} km/h",
            weather.temperature, weather.windspeed
        )
        .unwrap(),
        None => writeln!(out, "Weather: unavailable").unwrap(),
    }

    if briefing.headlines.is_empty() {
        writeln!(out, "Headlines: none").unwrap();
    } else {
        writeln!(out, "Headlines:").unwrap();
        for (i, headline) in briefing.headlines.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, headline.title).unwrap();
            if let Some(snippet) = &headline.snippet {
                writeln!(out, "     {snippet}").unwrap();
            }
        }
        let titles = briefing.headlines.iter().map(|h| h.title.as_str()).join(" | ");
        writeln!(out, "In short: {titles}").unwrap();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurrentWeather, Headline};

    fn headline(id: u64, title: &str, snippet: Option<&str>) -> Headline {
        Headline {
            id,
            title: title.to_string(),
            snippet: snippet.map(str::to_string),
        }
    }

    fn briefing_with(weather: Option<CurrentWeather>, headlines: Vec<Headline>) -> Briefing {
        Briefing {
            local_date: "2025-05-06".to_string(),
            time_of_day: "morning".to_string(),
            local_time: "07:45:12".to_string(),
            mode: "sequential".to_string(),
            weather,
            headlines,
        }
    }

    #[test]
    fn test_render_full_briefing() {
        let weather = CurrentWeather {
            temperature: 18.3,
            windspeed: 11.9,
            winddirection: None,
            weathercode: None,
            is_day: None,
            time: None,
        };
        let rendered = render(&briefing_with(
            Some(weather),
            vec![
                headline(1, "First story", Some("It begins like this")),
                headline(2, "Second story", None),
            ],
        ));

        assert!(rendered.starts_with("[sequential] Morning briefing for 2025-05-06"));
        assert!(rendered.contains("Weather: 18.3°C, wind 11.9 km/h"));
        assert!(rendered.contains("  1. First story"));
        assert!(rendered.contains("     It begins like this"));
        assert!(rendered.contains("  2. Second story"));
        assert!(rendered.contains("In short: First story | Second story"));
    }

    #[test]
    fn test_render_empty_sections() {
        let rendered = render(&briefing_with(None, vec![]));

        assert!(rendered.contains("Weather: unavailable"));
        assert!(rendered.contains("Headlines: none"));
        assert!(!rendered.contains("In short"));
    }
}
