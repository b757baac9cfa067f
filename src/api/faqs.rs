//! FAQ endpoint handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use tracing::{debug, error};

use crate::api::state::AppState;
use crate::api::types::{ApiError, CreateFaqBody, FaqQuery, FaqResponse, Json};
use crate::domain::faq::ProjectedFaq;
use crate::domain::LanguageCode;

/// GET /api/faqs?lang=
pub async fn list_faqs(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<ProjectedFaq>>, ApiError> {
    let query = FaqQuery::from_pairs(pairs);
    let language = LanguageCode::from_param(query.lang.as_deref());
    debug!(requested = ?query.lang, language = %language, "Listing FAQs");

    let faqs = state.read_service.get_faqs(language).await.map_err(|e| {
        error!(error_kind = e.kind(), error = %e, language = %language, "Failed to list FAQs");
        ApiError::server_error()
    })?;

    Ok(Json(faqs))
}

/// POST /api/faqs
pub async fn create_faq(
    State(state): State<AppState>,
    Json(body): Json<CreateFaqBody>,
) -> Result<(StatusCode, Json<FaqResponse>), ApiError> {
    let record = state
        .write_service
        .create_faq(body.into())
        .await
        .map_err(|e| {
            error!(error_kind = e.kind(), error = %e, "Failed to create FAQ");
            ApiError::save_error()
        })?;

    Ok((StatusCode::CREATED, Json(FaqResponse::from(record))))
}
