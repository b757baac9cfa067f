//! Health check endpoints for Kubernetes probes

use std::future::Future;
use std::time::{Duration, Instant};

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tokio::time::timeout;

use crate::api::types::Json;
use crate::domain::DomainError;

use super::state::AppState;

/// Detailed health response with component status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check with dependency verification
///
/// The store is required; an unreachable cache only degrades the service
/// since reads fall through to the store.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();
    let timeouts = state.probe_timeouts;

    let store_start = Instant::now();
    let store_result = bounded(
        timeouts.store,
        state.repository.ping(),
        DomainError::store_unavailable,
    )
    .await;
    let store = component_check("store", HealthStatus::Unhealthy, store_result, store_start);

    let cache_start = Instant::now();
    let cache_result = bounded(
        timeouts.cache,
        state.cache.ping(),
        DomainError::cache_unavailable,
    )
    .await;
    let cache = component_check("cache", HealthStatus::Degraded, cache_result, cache_start);

    let overall_status = if store.status == HealthStatus::Unhealthy {
        HealthStatus::Unhealthy
    } else {
        cache.status
    };

    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(vec![store, cache]),
        latency_ms: Some(start.elapsed().as_millis() as u64),
    };

    let status_code = match overall_status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Degraded => StatusCode::OK, // Still accept requests
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness check - simple check to verify the service is running
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn bounded<F>(
    limit: Duration,
    ping: F,
    on_timeout: fn(String) -> DomainError,
) -> Result<(), DomainError>
where
    F: Future<Output = Result<(), DomainError>>,
{
    match timeout(limit, ping).await {
        Ok(result) => result,
        Err(_) => Err(on_timeout(format!("Ping timed out after {}ms", limit.as_millis()))),
    }
}

fn component_check(
    name: &str,
    failure_status: HealthStatus,
    result: Result<(), DomainError>,
    start: Instant,
) -> HealthCheck {
    let (status, message) = match result {
        Ok(()) => (HealthStatus::Healthy, None),
        Err(e) => (failure_status, Some(e.to_string())),
    };

    HealthCheck {
        name: name.to_string(),
        status,
        message,
        latency_ms: Some(start.elapsed().as_millis() as u64),
    }
}
