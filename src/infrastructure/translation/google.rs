use async_trait::async_trait;
use tracing::debug;

use super::http_client::HttpClientTrait;
use crate::domain::language::LanguageCode;
use crate::domain::translation::Translator;
use crate::domain::DomainError;

const DEFAULT_GOOGLE_BASE_URL: &str = "https://translate.googleapis.com";
const PROVIDER: &str = "google";

/// Google Translate via the public `translate_a/single` endpoint
///
/// Source language is auto-detected. The response is a nested array whose
/// first element lists translated segments; segments are concatenated.
#[derive(Debug)]
pub struct GoogleTranslator<C: HttpClientTrait> {
    client: C,
    base_url: String,
}

impl<C: HttpClientTrait> GoogleTranslator<C> {
    pub fn new(client: C) -> Self {
        Self::with_base_url(client, DEFAULT_GOOGLE_BASE_URL)
    }

    pub fn with_base_url(client: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn translate_url(&self) -> String {
        format!("{}/translate_a/single", self.base_url)
    }
}

fn parse_translation(json: &serde_json::Value) -> Option<String> {
    let segments = json.get(0)?.as_array()?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|s| s.as_str()))
        .collect();

    if text.is_empty() { None } else { Some(text) }
}

#[async_trait]
impl<C: HttpClientTrait> Translator for GoogleTranslator<C> {
    async fn translate(&self, text: &str, target: LanguageCode) -> Result<String, DomainError> {
        debug!(target_language = %target, chars = text.chars().count(), "Requesting translation");

        let query = [
            ("client", "gtx"),
            ("sl", "auto"),
            ("tl", target.as_str()),
            ("dt", "t"),
            ("q", text),
        ];

        let json = self
            .client
            .get_json(&self.translate_url(), &query)
            .await
            .map_err(|e| DomainError::translation_failed(target, format!("{}: {}", PROVIDER, e)))?;

        parse_translation(&json).ok_or_else(|| {
            DomainError::translation_failed(target, format!("{}: no translated text in response", PROVIDER))
        })
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}
