//! The rendering-side view model.
//!
//! This is the consuming boundary of the reading contract: every field is
//! defaulted independently, scores are clamped to [0,100] integers, and
//! placeholder tokens from the model are never shown verbatim. Building a
//! view never fails — a partially populated reading degrades to placeholder
//! content.

use serde_json::Value;

use crate::models::reading::{Reading, Section};

/// Shown when a section is absent from the payload.
pub const NO_READING_MESSAGE: &str = "No reading yet.";
/// Shown for absent micro-insight fields and affirmations.
pub const EMPTY_FIELD: &str = "—";

/// A fully-defaulted reading, safe to render as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingView {
    /// Hidden when `None`.
    pub theme: Option<String>,
    pub daily_focus: String,
    pub caution: String,
    pub luck_signals: String,
    /// Hidden when `None`.
    pub personal_edge: Option<String>,
    pub career: SectionView,
    pub love: SectionView,
    pub luck: SectionView,
    pub affirmation: String,
}

/// One life-domain card with a clamped score.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub score: u8,
    pub message: String,
    pub advice: String,
}

/// Whether a model-supplied string carries actual content.
///
/// Empty strings and the sentinel tokens `—`, `-`, `null`, `undefined`
/// (after trimming, case-insensitive) mean "no data".
pub fn is_meaningful(value: &str) -> bool {
    let v = value.trim();
    if v.is_empty() || v == "—" || v == "-" {
        return false;
    }
    !v.eq_ignore_ascii_case("null") && !v.eq_ignore_ascii_case("undefined")
}

/// Clamps a raw score value to an integer in [0,100].
/// Non-numeric, absent, or non-finite values become 0.
pub fn clamp_score(raw: Option<&Value>) -> u8 {
    match raw.and_then(Value::as_f64) {
        Some(score) if score.is_finite() => score.clamp(0.0, 100.0).round() as u8,
        _ => 0,
    }
}

fn text_or(raw: Option<&str>, default: &str) -> String {
    match raw {
        Some(v) if is_meaningful(v) => v.trim().to_string(),
        _ => default.to_string(),
    }
}

fn meaningful(raw: Option<&str>) -> Option<String> {
    raw.filter(|v| is_meaningful(v)).map(|v| v.trim().to_string())
}

fn section_view(section: Option<&Section>) -> SectionView {
    match section {
        Some(s) => SectionView {
            score: clamp_score(s.score.as_ref()),
            message: text_or(s.message.as_deref(), NO_READING_MESSAGE),
            advice: text_or(s.advice.as_deref(), ""),
        },
        None => SectionView {
            score: 0,
            message: NO_READING_MESSAGE.to_string(),
            advice: String::new(),
        },
    }
}

impl ReadingView {
    pub fn from_reading(reading: &Reading) -> Self {
        let micro = reading.micro_insight.as_ref();

        ReadingView {
            theme: meaningful(reading.theme.as_deref()),
            daily_focus: text_or(micro.and_then(|m| m.daily_focus.as_deref()), EMPTY_FIELD),
            caution: text_or(micro.and_then(|m| m.caution.as_deref()), EMPTY_FIELD),
            luck_signals: text_or(micro.and_then(|m| m.luck_signals.as_deref()), EMPTY_FIELD),
            personal_edge: meaningful(reading.personal_edge.as_deref()),
            career: section_view(reading.career.as_ref()),
            love: section_view(reading.love.as_ref()),
            luck: section_view(reading.luck.as_ref()),
            affirmation: text_or(reading.affirmation.as_deref(), EMPTY_FIELD),
        }
    }
}
