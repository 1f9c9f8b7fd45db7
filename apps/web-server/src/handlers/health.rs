//! Health check endpoint.

use actix_web::{HttpResponse, web};

use postboard_shared::dto::HealthResponse;

use crate::state::AppState;

/// Probe the post store and report its status.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    match state.posts.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse::healthy(chrono::Utc::now().to_rfc3339())),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            HttpResponse::InternalServerError().json(HealthResponse::unhealthy(e.to_string()))
        }
    }
}
