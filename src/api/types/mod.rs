//! Request, response and error types for the HTTP surface

pub mod error;
pub mod faq;
pub mod json;

pub use error::{ApiError, ApiErrorResponse};
pub use faq::{CreateFaqBody, FaqQuery, FaqResponse};
pub use json::Json;
