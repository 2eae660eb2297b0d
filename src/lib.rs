pub mod config;
pub mod db;
pub mod error;
pub mod observability;
pub mod routes;
pub mod server;
pub mod template;

pub use config::Config;
pub use routes::AppState;

/// Create the app router
///
/// Builds the Axum router with all routes configured over an existing pool,
/// useful for integration testing without starting the full server.
pub fn create_app(pool: sqlx::SqlitePool, config: Config) -> axum::Router {
    use voltedge_contact::{Command, SqliteLeadStore};

    let state = AppState {
        command: Command::new(SqliteLeadStore::new(pool.clone())),
        config,
        pool,
    };

    routes::router(state)
}
