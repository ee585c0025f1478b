//! Reading generation — builds the prompt for a validated sign and today's
//! date, then submits it to the provider.
//!
//! Exactly one outbound call per invocation. No retries, no caching: a
//! transient provider failure surfaces immediately as `AppError::Provider`.

use chrono::Utc;
use tracing::info;

use crate::errors::AppError;
use crate::horoscope::prompts::{HOROSCOPE_PROMPT_TEMPLATE, HOROSCOPE_SYSTEM};
use crate::llm_client::TextGenerator;
use crate::models::sign::Sign;

/// Today's calendar day in ISO form (UTC).
pub fn today_iso() -> String {
    Utc::now().date_naive().to_string()
}

/// Interpolates the sign and date into the static prompt template.
pub fn build_prompt(sign: Sign, date: &str) -> String {
    HOROSCOPE_PROMPT_TEMPLATE
        .replace("{sign}", sign.as_str())
        .replace("{date}", date)
}

/// Generates the raw provider text for a sign. Validation happens before this
/// is called — an invalid sign never reaches the provider.
pub async fn generate_reading(
    llm: &dyn TextGenerator,
    sign: Sign,
) -> Result<String, AppError> {
    let date = today_iso();
    let prompt = build_prompt(sign, &date);

    info!("Generating reading: sign={sign} date={date}");

    llm.generate(HOROSCOPE_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Provider(e.to_string()))
}
