use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Render an askama template to an HTML response, falling back to a plain
/// 500 when rendering fails.
pub fn render<T: askama::Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(err = %err, "failed to render template");
            (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
        }
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;
