//! Axum route handlers for the reading pipeline.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::horoscope::generator::generate_reading;
use crate::horoscope::normalize::normalize;
use crate::horoscope::render;
use crate::horoscope::view::ReadingView;
use crate::models::sign::Sign;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReadingQuery {
    pub sign: Option<String>,
}

/// GET /reading?sign=<sign>
///
/// Generates a fresh reading for a validated sign. Responses are explicitly
/// non-cacheable: every request hits the provider, and the same sign on the
/// same day yields varied content.
pub async fn handle_get_reading(
    State(state): State<AppState>,
    Query(query): Query<ReadingQuery>,
) -> Result<impl IntoResponse, AppError> {
    let sign = validate_sign(query.sign.as_deref())?;

    let raw = generate_reading(state.llm.as_ref(), sign).await?;
    let reading = normalize(&raw)?;

    Ok(([(header::CACHE_CONTROL, "no-store")], Json(reading)))
}

/// GET /zodiac/:sign
///
/// Server-rendered reading page. Never fails the response: pipeline errors
/// degrade to an error banner and a missing field degrades to placeholders.
pub async fn handle_zodiac_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Html<String> {
    let sign = match slug.parse::<Sign>() {
        Ok(sign) => sign,
        Err(_) => {
            return Html(render::error_page(slug.trim(), "Invalid sign").into_string());
        }
    };

    let result = match generate_reading(state.llm.as_ref(), sign).await {
        Ok(raw) => normalize(&raw),
        Err(e) => Err(e),
    };

    let markup = match result {
        Ok(reading) => render::reading_page(sign, &ReadingView::from_reading(&reading)),
        Err(err) => {
            warn!("Reading page degraded for {sign}: {err}");
            render::error_page(sign.title(), err.public_message())
        }
    };

    Html(markup.into_string())
}

/// Validates the query parameter before any outbound call is made.
/// Absent or blank → `MissingSign`; outside the 12-sign set → `InvalidSign`.
fn validate_sign(raw: Option<&str>) -> Result<Sign, AppError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    match raw {
        None => Err(AppError::MissingSign),
        Some(s) => s.parse::<Sign>().map_err(|_| AppError::InvalidSign),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::llm_client::{LlmError, TextGenerator};
    use crate::routes::build_router;

    struct CannedProvider(&'static str);

    #[async_trait]
    impl TextGenerator for CannedProvider {
        async fn generate(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl TextGenerator for FailingProvider {
        async fn generate(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "upstream unavailable".to_string(),
            })
        }
    }

    const WELL_FORMED: &str = r#"{
        "theme": "Quiet Momentum",
        "micro_insight": {"daily_focus": "one task", "caution": "slow down", "luck_signals": "Silver • 43"},
        "personal_edge": "say no before noon",
        "career": {"score": 87, "message": "First. Second.", "advice": "Send it."},
        "love": {"score": 64, "message": "First. Second.", "advice": "Ask."},
        "luck": {"score": 72, "message": "First. Second.", "advice": "Walk."},
        "affirmation": "I move before doubt does."
    }"#;

    fn test_app(provider: impl TextGenerator + 'static) -> axum::Router {
        build_router(AppState {
            llm: Arc::new(provider),
        })
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>, Option<String>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let cache_control = response
            .headers()
            .get(header::CACHE_CONTROL)
            .map(|v| v.to_str().unwrap().to_string());
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec(), cache_control)
    }

    #[tokio::test]
    async fn test_missing_sign_is_400() {
        let (status, body, _) = get(test_app(CannedProvider("{}")), "/reading").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "Missing sign");
    }

    #[tokio::test]
    async fn test_blank_sign_is_missing() {
        let (status, body, _) = get(test_app(CannedProvider("{}")), "/reading?sign=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "Missing sign");
    }

    #[tokio::test]
    async fn test_invalid_sign_is_400_without_provider_call() {
        struct PanicProvider;

        #[async_trait]
        impl TextGenerator for PanicProvider {
            async fn generate(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
                panic!("provider must not be called for an invalid sign");
            }
        }

        let (status, body, _) = get(test_app(PanicProvider), "/reading?sign=xyz").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "Invalid sign");
    }

    #[tokio::test]
    async fn test_provider_failure_is_500_ai_failed() {
        let (status, body, _) = get(test_app(FailingProvider), "/reading?sign=aries").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "AI failed");
    }

    #[tokio::test]
    async fn test_non_json_output_is_502_bad_json() {
        let app = test_app(CannedProvider("the stars are silent"));
        let (status, body, _) = get(app, "/reading?sign=aries").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "Bad JSON from model");
    }

    #[tokio::test]
    async fn test_well_formed_reading_passes_through_with_no_store() {
        let (status, body, cache) = get(test_app(CannedProvider(WELL_FORMED)), "/reading?sign=aries").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cache.as_deref(), Some("no-store"));

        let body: Value = serde_json::from_slice(&body).unwrap();
        let expected: Value = serde_json::from_str(WELL_FORMED).unwrap();
        assert_eq!(body, expected);
        assert_eq!(body["career"]["score"], 87);
    }

    #[tokio::test]
    async fn test_sign_casing_and_whitespace_accepted() {
        let (status, _, _) = get(test_app(CannedProvider("{}")), "/reading?sign=ARIES").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _, _) =
            get(test_app(CannedProvider("{}")), "/reading?sign=%20taurus%20").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_zodiac_page_renders_career_card() {
        let (status, body, _) = get(test_app(CannedProvider(WELL_FORMED)), "/zodiac/aries").await;
        assert_eq!(status, StatusCode::OK);
        let page = String::from_utf8(body).unwrap();
        assert!(page.contains("Aries"));
        assert!(page.contains("87%"));
        assert!(page.contains("say no before noon"));
    }

    #[tokio::test]
    async fn test_zodiac_page_degrades_on_provider_failure() {
        let (status, body, _) = get(test_app(FailingProvider), "/zodiac/leo").await;
        assert_eq!(status, StatusCode::OK);
        let page = String::from_utf8(body).unwrap();
        assert!(page.contains("AI failed"));
    }

    #[tokio::test]
    async fn test_zodiac_page_invalid_slug_shows_banner() {
        let (status, body, _) = get(test_app(CannedProvider("{}")), "/zodiac/ophiuchus").await;
        assert_eq!(status, StatusCode::OK);
        let page = String::from_utf8(body).unwrap();
        assert!(page.contains("Invalid sign"));
    }
}
