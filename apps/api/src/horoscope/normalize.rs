//! Response normalization — parses raw provider text into the [`Reading`]
//! contract.
//!
//! Well-formed payloads pass through with no lossy transformation; clamping
//! and defaulting are the consuming layer's job (`horoscope::view`). Anything
//! that is not a JSON object is `AppError::MalformedOutput` — there is no
//! re-prompting or repair of unparseable text.

use crate::errors::AppError;
use crate::models::reading::Reading;

/// Parses the provider's text as a [`Reading`].
pub fn normalize(raw: &str) -> Result<Reading, AppError> {
    let text = strip_json_fences(raw);
    serde_json::from_str(text).map_err(|e| AppError::MalformedOutput(e.to_string()))
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
/// `json_object` mode should prevent fences, but models drift.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
