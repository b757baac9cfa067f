//! In-memory FAQ store

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::faq::{FaqId, FaqRecord, FaqRepository, NewFaq};
use crate::domain::DomainError;

/// Thread-safe in-memory FAQ store
///
/// Keeps insertion order as the natural order. Useful for testing and
/// development; data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryFaqRepository {
    records: RwLock<Vec<FaqRecord>>,
}

impl InMemoryFaqRepository {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with records
    pub fn with_records(records: Vec<FaqRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Returns the number of stored records
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl FaqRepository for InMemoryFaqRepository {
    async fn find_all(&self) -> Result<Vec<FaqRecord>, DomainError> {
        let records = self.records.read().map_err(|e| {
            DomainError::store_unavailable(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(records.clone())
    }

    async fn insert(&self, faq: NewFaq) -> Result<FaqRecord, DomainError> {
        let record = faq.into_record(FaqId::new(uuid::Uuid::new_v4().to_string()));

        let mut records = self.records.write().map_err(|e| {
            DomainError::store_unavailable(format!("Failed to acquire write lock: {}", e))
        })?;

        records.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::faq::FaqTranslation;
    use crate::domain::language::LanguageCode;

    #[tokio::test]
    async fn test_insert_assigns_unique_ids() {
        let repo = InMemoryFaqRepository::new();

        let first = repo.insert(NewFaq::new("Q1", "A1")).await.unwrap();
        let second = repo.insert(NewFaq::new("Q1", "A1")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_find_all_preserves_insertion_order() {
        let repo = InMemoryFaqRepository::new();

        for i in 0..5 {
            repo.insert(NewFaq::new(format!("Q{}", i), "A")).await.unwrap();
        }

        let questions: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.question)
            .collect();

        assert_eq!(questions, vec!["Q0", "Q1", "Q2", "Q3", "Q4"]);
    }

    #[tokio::test]
    async fn test_insert_keeps_translations() {
        let repo = InMemoryFaqRepository::new();
        let faq = NewFaq::new("Q", "A")
            .with_translation(LanguageCode::Hi, FaqTranslation::new("hq", "ha"));

        let saved = repo.insert(faq).await.unwrap();
        let stored = repo.find_all().await.unwrap();

        assert_eq!(stored, vec![saved]);
        assert_eq!(stored[0].translations[&LanguageCode::Hi].answer, "ha");
    }

    #[tokio::test]
    async fn test_empty_store() {
        let repo = InMemoryFaqRepository::new();
        assert!(repo.is_empty());
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
