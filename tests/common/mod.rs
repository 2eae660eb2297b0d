use axum::Router;
use axum::body::Body;
use axum::http::Request;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use voltedge::config::{Config, DatabaseConfig, ObservabilityConfig, ServerConfig, SiteConfig};

/// Migrated in-memory database plus the full app router. The pool is capped
/// at one connection so every request sees the same `:memory:` database.
pub async fn setup_test_app() -> (SqlitePool, Router) {
    let opts = SqliteConnectOptions::new().in_memory(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(opts)
        .await
        .expect("connect in-memory sqlite");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");

    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        observability: ObservabilityConfig::default(),
        site: SiteConfig::default(),
    };

    (pool.clone(), voltedge::create_app(pool, config))
}

/// Build a urlencoded form POST request.
#[allow(dead_code)]
pub fn form_post(uri: &str, pairs: &[(&str, &str)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(pairs).expect("encode form body");
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("build request")
}
