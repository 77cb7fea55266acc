//! Small helpers shared across the briefing pipeline: edition naming for
//! the console header, and string shaping for headers and log lines.

use chrono::{Local, Timelike};
use tracing::instrument;

/// Classify an hour of day into the edition it belongs to.
///
/// - **Morning**: 00:00 - 08:00
/// - **Afternoon**: 08:00 - 16:00
/// - **Evening**: 16:00 - 24:00
fn edition_for(hour: u32) -> &'static str {
    match hour {
        0..=7 => "morning",
        8..=15 => "afternoon",
        _ => "evening",
    }
}

/// Name the edition the current wall-clock time falls in.
///
/// Returns `"morning"`, `"afternoon"`, or `"evening"` for the briefing
/// header.
#[instrument]
pub fn time_of_day() -> String {
    let hour = Local::now().hour();
    let which = edition_for(hour);
    tracing::debug!(hour, which, "classified edition");
    which.to_string()
}

/// Bound a string to `max` characters for logging.
///
/// Anything past `max` is replaced with an ellipsis and a count of the
/// bytes dropped. The cut always lands on a character boundary, so a
/// multibyte body (an HTML error page, say) never panics the logging path.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

/// Capitalize the first character of an edition name ("morning" ->
/// "Morning").
pub fn upcase(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
