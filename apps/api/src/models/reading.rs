//! Wire types for a daily reading.
//!
//! The provider's payload has no schema guarantee, so every field is
//! independently optional and scores are kept as raw JSON values. A
//! well-formed payload passes through serialization unchanged; the
//! defaulting and clamping live in `horoscope::view`, not here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The normalized reading contract returned by `GET /reading`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reading {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub micro_insight: Option<MicroInsight>,

    /// Optional bold behavioral nudge. Absent means the client hides the block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_edge: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career: Option<Section>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub love: Option<Section>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub luck: Option<Section>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affirmation: Option<String>,
}

/// Short auxiliary fields accompanying the main reading.
/// `luck_signals` is asked for as "<Color> • <Number 1-99>".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MicroInsight {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_focus: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caution: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub luck_signals: Option<String>,
}

/// One scored life-domain block (career, love, luck).
///
/// `score` stays a raw JSON value: the provider sometimes returns strings or
/// out-of-range numbers, and those pass through untouched for the consuming
/// layer to clamp. Sentence counts in `message`/`advice` are a prompt-time
/// request, not re-validated here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advice: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_reading_deserializes() {
        let json = r#"{
            "theme": "Quiet Momentum",
            "micro_insight": {
                "daily_focus": "finish one lingering task",
                "caution": "avoid midday overcommitment",
                "luck_signals": "Silver • 43"
            },
            "personal_edge": "say no before noon",
            "career": {"score": 87, "message": "Two sentences. Really two.", "advice": "Send the draft tonight."},
            "love": {"score": 64, "message": "Two more. Still two.", "advice": "Ask one real question."},
            "luck": {"score": 72, "message": "Last pair. Of sentences.", "advice": "Walk a new route."},
            "affirmation": "I move before doubt does."
        }"#;

        let reading: Reading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.theme.as_deref(), Some("Quiet Momentum"));
        assert_eq!(
            reading.career.as_ref().unwrap().score,
            Some(Value::from(87))
        );
        assert_eq!(
            reading.micro_insight.as_ref().unwrap().luck_signals.as_deref(),
            Some("Silver • 43")
        );
    }

    #[test]
    fn test_empty_object_deserializes_to_all_absent() {
        let reading: Reading = serde_json::from_str("{}").unwrap();
        assert!(reading.theme.is_none());
        assert!(reading.career.is_none());
        assert!(reading.affirmation.is_none());
    }

    #[test]
    fn test_string_score_passes_through() {
        let json = r#"{"career": {"score": "high", "message": "m", "advice": "a"}}"#;
        let reading: Reading = serde_json::from_str(json).unwrap();
        assert_eq!(
            reading.career.as_ref().unwrap().score,
            Some(Value::from("high"))
        );
    }

    #[test]
    fn test_absent_fields_not_serialized() {
        let reading = Reading {
            theme: Some("Edge of Clarity".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&reading).unwrap();
        assert_eq!(value, serde_json::json!({"theme": "Edge of Clarity"}));
    }
}
