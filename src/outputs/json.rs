//! JSON rendering of a briefing.
//!
//! Used by the `--json` flag for consumption by other tools. The shape
//! mirrors [`Briefing`]'s serde representation; absent sections are omitted
//! rather than emitted as null.

use crate::models::Briefing;

/// Render a briefing as pretty-printed JSON.
pub fn render(briefing: &Briefing) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(briefing)
}
