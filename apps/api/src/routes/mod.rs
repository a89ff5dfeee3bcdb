pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/analyze-resume",
            post(handlers::handle_analyze_resume),
        )
        .route(
            "/api/v1/analyze-job-description",
            post(handlers::handle_analyze_job_description),
        )
        .route(
            "/api/v1/analyze-job-description-pdf",
            post(handlers::handle_analyze_job_description_pdf),
        )
        .route(
            "/api/v1/match-resume-job",
            post(handlers::handle_match_resume_job),
        )
        .route(
            "/api/v1/match-resume-job-pdf",
            post(handlers::handle_match_resume_job_pdf),
        )
        .with_state(state)
}
