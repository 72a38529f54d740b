use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};

use crate::template::{NotFoundTemplate, render};

mod contact;
mod health;
mod index;
mod planner;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
}

pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, render(NotFoundTemplate))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/planner", get(planner::page).post(planner::action))
        .route("/contact", get(contact::page).post(contact::action))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
