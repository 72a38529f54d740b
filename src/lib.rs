pub mod assets;
pub mod config;
pub mod observability;
pub mod routes;
pub mod template;

pub use routes::AppState;

/// Create the app router for the given configuration
///
/// Useful for integration testing without starting the full server.
pub fn create_app(config: config::Config) -> axum::Router {
    routes::router(AppState { config })
}
