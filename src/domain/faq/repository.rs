//! FAQ store trait

use async_trait::async_trait;

use super::entity::{FaqRecord, NewFaq};
use crate::domain::error::DomainError;

#[cfg(test)]
use mockall::automock;

/// Durable collection of FAQ records
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FaqRepository: Send + Sync + std::fmt::Debug {
    /// Returns every record in the store's natural order
    async fn find_all(&self) -> Result<Vec<FaqRecord>, DomainError>;

    /// Persists a new record and returns it with its assigned id
    async fn insert(&self, faq: NewFaq) -> Result<FaqRecord, DomainError>;

    /// Checks connectivity without scanning the collection
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }

    /// Releases the underlying connection
    async fn shutdown(&self) {}
}
