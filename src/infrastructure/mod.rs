//! Infrastructure layer - External service implementations

pub mod cache;
pub mod faq;
pub mod logging;
pub mod services;
pub mod translation;
