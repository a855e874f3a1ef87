use actix_web::{get, web, HttpResponse};
use chrono::Utc;

use crate::{app_state::AppState, models::dto::response::HealthResponse};

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().body("AI Study Buddy Backend Running")
}

#[get("/api/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        backend: "running",
        timestamp: Utc::now(),
        has_api_key: state.config.has_api_key(),
    })
}

/// Bare `OPTIONS` on any path. CORS preflights are answered earlier by the CORS layer.
pub async fn preflight() -> HttpResponse {
    HttpResponse::NoContent().finish()
}
