//! FAQ request and response types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::faq::{FaqRecord, FaqTranslation};
use crate::domain::LanguageCode;
use crate::infrastructure::services::CreateFaqRequest;

/// Query string of `GET /api/faqs`
///
/// Built from raw pairs so a repeated `lang` resolves to its first value
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqQuery {
    pub lang: Option<String>,
}

impl FaqQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let lang = pairs
            .into_iter()
            .find(|(key, _)| key == "lang")
            .map(|(_, value)| value);

        Self { lang }
    }
}

/// Body of `POST /api/faqs`
///
/// Missing fields deserialize to empty strings and are rejected by the
/// write path's validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFaqBody {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

impl From<CreateFaqBody> for CreateFaqRequest {
    fn from(body: CreateFaqBody) -> Self {
        Self {
            question: body.question,
            answer: body.answer,
        }
    }
}

/// A created FAQ as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub question: String,
    pub answer: String,
    pub translations: BTreeMap<LanguageCode, FaqTranslation>,
}

impl From<FaqRecord> for FaqResponse {
    fn from(record: FaqRecord) -> Self {
        Self {
            id: record.id.to_string(),
            question: record.question,
            answer: record.answer,
            translations: record.translations,
        }
    }
}
