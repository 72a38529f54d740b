use axum::response::IntoResponse;

use crate::template::render;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

pub async fn page() -> impl IntoResponse {
    render(IndexTemplate)
}
