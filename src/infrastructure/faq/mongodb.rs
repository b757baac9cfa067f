//! MongoDB FAQ store

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::faq::{FaqId, FaqRecord, FaqRepository, FaqTranslation, NewFaq};
use crate::domain::language::LanguageCode;
use crate::domain::DomainError;

/// MongoDB store configuration
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string
    pub url: String,
    pub database: String,
    pub collection: String,
    /// Server selection / connect timeout
    pub connect_timeout: Duration,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: "faqdb".to_string(),
            collection: "faqs".to_string(),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl MongoConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

/// Stored shape of one translation
///
/// Fields default to empty so documents written with a partial translation
/// still load; the projection treats empty fields as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TranslationDocument {
    #[serde(default)]
    question: String,
    #[serde(default)]
    answer: String,
}

/// Stored shape of a FAQ
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FaqDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    question: String,
    answer: String,
    #[serde(default)]
    translations: BTreeMap<String, TranslationDocument>,
}

impl FaqDocument {
    fn from_new(faq: NewFaq) -> Self {
        let translations = faq
            .translations
            .into_iter()
            .map(|(language, t)| {
                (
                    language.as_str().to_string(),
                    TranslationDocument {
                        question: t.question,
                        answer: t.answer,
                    },
                )
            })
            .collect();

        Self {
            id: None,
            question: faq.question,
            answer: faq.answer,
            translations,
        }
    }

    fn into_record(self) -> Result<FaqRecord, DomainError> {
        let id = self
            .id
            .ok_or_else(|| DomainError::store_unavailable("Stored FAQ is missing its _id"))?;

        let mut translations = BTreeMap::new();

        for (code, t) in self.translations {
            match LanguageCode::parse(&code) {
                Some(language) if !language.is_canonical() => {
                    translations.insert(language, FaqTranslation::new(t.question, t.answer));
                }
                _ => warn!(faq_id = %id, language = %code, "Ignoring unsupported translation"),
            }
        }

        Ok(FaqRecord {
            id: FaqId::new(id.to_hex()),
            question: self.question,
            answer: self.answer,
            translations,
        })
    }
}

/// FAQ store backed by a single MongoDB collection
#[derive(Debug, Clone)]
pub struct MongoFaqRepository {
    client: Client,
    collection: Collection<FaqDocument>,
    database: String,
}

impl MongoFaqRepository {
    /// Creates the client; the driver connects lazily on first operation
    pub async fn connect(config: &MongoConfig) -> Result<Self, DomainError> {
        let mut options = ClientOptions::parse(&config.url).await.map_err(|e| {
            DomainError::configuration(format!("Invalid MongoDB connection string: {}", e))
        })?;
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);

        let client = Client::with_options(options).map_err(|e| {
            DomainError::store_unavailable(format!("Failed to create MongoDB client: {}", e))
        })?;

        let collection = client
            .database(&config.database)
            .collection::<FaqDocument>(&config.collection);

        Ok(Self {
            client,
            collection,
            database: config.database.clone(),
        })
    }
}

#[async_trait]
impl FaqRepository for MongoFaqRepository {
    async fn find_all(&self) -> Result<Vec<FaqRecord>, DomainError> {
        let cursor = self.collection.find(doc! {}).await.map_err(|e| {
            DomainError::store_unavailable(format!("Failed to query FAQs: {}", e))
        })?;

        let documents: Vec<FaqDocument> = cursor.try_collect().await.map_err(|e| {
            DomainError::store_unavailable(format!("Failed to read FAQ cursor: {}", e))
        })?;

        documents.into_iter().map(FaqDocument::into_record).collect()
    }

    async fn insert(&self, faq: NewFaq) -> Result<FaqRecord, DomainError> {
        let mut document = FaqDocument::from_new(faq);

        let result = self.collection.insert_one(&document).await.map_err(|e| {
            DomainError::store_unavailable(format!("Failed to insert FAQ: {}", e))
        })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            DomainError::store_unavailable("Insert did not return an ObjectId")
        })?;

        document.id = Some(id);
        document.into_record()
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| DomainError::store_unavailable(format!("MongoDB ping failed: {}", e)))?;

        Ok(())
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_round_trips_translations() {
        let faq = NewFaq::new("Hi?", "Hello.")
            .with_translation(LanguageCode::Hi, FaqTranslation::new("?", "नमस्ते"))
            .with_translation(LanguageCode::Bn, FaqTranslation::new("?", "হ্যালো"));

        let mut document = FaqDocument::from_new(faq);
        assert!(document.translations.contains_key("hi"));
        assert!(document.translations.contains_key("bn"));

        let id = ObjectId::new();
        document.id = Some(id);
        let record = document.into_record().unwrap();

        assert_eq!(record.id.as_str(), id.to_hex());
        assert_eq!(record.translations[&LanguageCode::Bn].answer, "হ্যালো");
    }

    #[test]
    fn test_document_without_id_is_rejected() {
        let document = FaqDocument::from_new(NewFaq::new("Q", "A"));
        assert!(matches!(
            document.into_record(),
            Err(DomainError::StoreUnavailable { .. })
        ));
    }

    #[test]
    fn test_legacy_document_shape_loads() {
        // Partial translation, version key and an unsupported language
        let raw = doc! {
            "_id": ObjectId::new(),
            "question": "Q",
            "answer": "A",
            "translations": {
                "hi": { "question": "hq" },
                "fr": { "question": "fq", "answer": "fa" },
            },
            "__v": 0,
        };

        let document: FaqDocument = bson::from_document(raw).unwrap();
        let record = document.into_record().unwrap();

        assert_eq!(record.translations.len(), 1);
        assert_eq!(record.translations[&LanguageCode::Hi].question, "hq");
        assert_eq!(record.project(LanguageCode::Hi).answer, "A");
    }

    #[tokio::test]
    #[ignore = "Requires running MongoDB instance"]
    async fn test_mongo_insert_and_find_all() {
        let config = MongoConfig::default().with_database("faqdb_test");
        let repo = MongoFaqRepository::connect(&config).await.unwrap();

        let saved = repo.insert(NewFaq::new("Q", "A")).await.unwrap();
        let all = repo.find_all().await.unwrap();

        assert!(all.iter().any(|r| r.id == saved.id));
        repo.shutdown().await;
    }
}
