//! Application services for the FAQ read and write paths

mod faq_read_service;
mod faq_write_service;

pub use faq_read_service::{FaqReadConfig, FaqReadService};
pub use faq_write_service::{CreateFaqRequest, FaqWriteConfig, FaqWriteService};
