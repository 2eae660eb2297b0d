use axum::{extract::State, http::StatusCode, response::IntoResponse};
use sqlx::SqlitePool;

/// Liveness probe.
pub async fn health() -> &'static str {
    "OK"
}

/// Readiness probe: verifies the database answers.
pub async fn ready(State(pool): State<SqlitePool>) -> impl IntoResponse {
    match sqlx::query("SELECT 1").execute(&pool).await {
        Ok(_) => (StatusCode::OK, "READY"),
        Err(err) => {
            tracing::error!(error = %err, "readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "NOT READY")
        }
    }
}
