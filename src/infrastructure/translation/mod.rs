//! Translation infrastructure - Translation provider adapters

mod google;
mod http_client;

pub use google::GoogleTranslator;
pub use http_client::{HttpClient, HttpClientError, HttpClientTrait};
