//! FAQ domain - Records, projections and the store contract

mod entity;
mod repository;

pub use entity::{FaqId, FaqRecord, FaqTranslation, NewFaq, ProjectedFaq};
pub use repository::FaqRepository;

#[cfg(test)]
pub use repository::MockFaqRepository;
