//! Gemini-backed advice generator.
//!
//! Posts a Turkish coaching prompt to the Generative Language API and asks
//! for a JSON object matching the [`Advice`] shape. Every failure path
//! returns [`Advice::fallback`]; the caller never sees an error.

use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use serde_json::json;

use super::{Advice, AdviceGenerator};
use crate::error::AdviceError;
use crate::settings::Settings;

/// Model the advice prompt is sent to.
pub const GEMINI_MODEL: &str = "gemini-3-flash-preview";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub struct GeminiAdviceGenerator {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GeminiAdviceGenerator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Build from the `GEMINI_API_KEY` environment variable. An absent key
    /// is not an error here; generation will fall back locally.
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_ENV).unwrap_or_default())
    }

    /// Point at a different endpoint (tests use a local mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn prompt(settings: &Settings, current_intake_ml: f64) -> String {
        let remaining = (settings.daily_goal_ml - current_intake_ml).max(0.0);
        let progress = current_intake_ml / settings.daily_goal_ml * 100.0;
        format!(
            "Kullanıcı Bilgileri:\n\
             İsim: {name}\n\
             Kilo: {weight}kg\n\
             Günlük Hedef: {goal}ml\n\
             Şu anki tüketim: {intake}ml\n\
             Kalan: {remaining}ml\n\
             İlerleme: %{progress:.0}\n\n\
             Bu bilgilere dayanarak, kullanıcıyı su içmeye teşvik edecek çok kısa, \
             samimi ve motive edici bir Türkçe mesaj oluştur. \
             Eğer hedef çok gerisindeyse biraz daha uyarıcı, hedefe yakınsa tebrik edici olsun. \
             Cevap sadece JSON formatında olsun.",
            name = settings.name,
            weight = settings.weight_kg,
            goal = settings.daily_goal_ml,
            intake = current_intake_ml,
        )
    }

    async fn try_generate(
        &self,
        settings: &Settings,
        current_intake_ml: f64,
    ) -> Result<Advice, AdviceError> {
        if self.api_key.is_empty() {
            return Err(AdviceError::MissingApiKey);
        }

        let url = format!(
            "{}/v1beta/models/{GEMINI_MODEL}:generateContent",
            self.base_url
        );
        let body = json!({
            "contents": [{
                "parts": [{ "text": Self::prompt(settings, current_intake_ml) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "message": { "type": "STRING" },
                        "category": {
                            "type": "STRING",
                            "enum": ["motivation", "health", "alert"]
                        }
                    },
                    "required": ["message", "category"]
                }
            }
        });

        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AdviceError::Status(status.as_u16()));
        }

        let payload: serde_json::Value = resp.json().await?;
        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| AdviceError::Malformed("missing candidate text".to_string()))?;

        serde_json::from_str(text.trim()).map_err(|e| AdviceError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl AdviceGenerator for GeminiAdviceGenerator {
    async fn generate(&self, settings: &Settings, current_intake_ml: f64) -> Advice {
        match self.try_generate(settings, current_intake_ml).await {
            Ok(advice) => advice,
            Err(e) => {
                warn!("advice generation failed, using fallback: {e}");
                Advice::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::AdviceCategory;

    const GENERATE_PATH: &str = "/v1beta/models/gemini-3-flash-preview:generateContent";

    fn candidate_body(text: &str) -> String {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }] }
            }]
        })
        .to_string()
    }

    #[tokio::test]
    async fn parses_generated_advice() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", GENERATE_PATH)
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(candidate_body(
                r#"{"message":"Harika gidiyorsun, devam et!","category":"motivation"}"#,
            ))
            .create_async()
            .await;

        let generator = GeminiAdviceGenerator::new("test-key").with_base_url(server.url());
        let advice = generator.generate(&Settings::default(), 500.0).await;

        assert_eq!(advice.message, "Harika gidiyorsun, devam et!");
        assert_eq!(advice.category, AdviceCategory::Motivation);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn server_error_yields_fallback() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", GENERATE_PATH)
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let generator = GeminiAdviceGenerator::new("test-key").with_base_url(server.url());
        let advice = generator.generate(&Settings::default(), 0.0).await;
        assert_eq!(advice, Advice::fallback());
    }

    #[tokio::test]
    async fn malformed_candidate_yields_fallback() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", GENERATE_PATH)
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(candidate_body("this is not json"))
            .create_async()
            .await;

        let generator = GeminiAdviceGenerator::new("test-key").with_base_url(server.url());
        let advice = generator.generate(&Settings::default(), 0.0).await;
        assert_eq!(advice, Advice::fallback());
    }

    #[tokio::test]
    async fn missing_api_key_yields_fallback_without_a_request() {
        let generator = GeminiAdviceGenerator::new("");
        let advice = generator.generate(&Settings::default(), 0.0).await;
        assert_eq!(advice, Advice::fallback());
    }

    #[test]
    fn prompt_embeds_progress_numbers() {
        let settings = Settings::default();
        let prompt = GeminiAdviceGenerator::prompt(&settings, 500.0);
        assert!(prompt.contains("Günlük Hedef: 2450ml"));
        assert!(prompt.contains("Şu anki tüketim: 500ml"));
        assert!(prompt.contains("Kalan: 1950ml"));
        assert!(prompt.contains("İlerleme: %20"));
    }
}
