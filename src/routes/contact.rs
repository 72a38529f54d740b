use axum::extract::Form;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::template::render;

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub sent: bool,
    pub error: Option<String>,
}

pub async fn page() -> impl IntoResponse {
    render(ContactTemplate {
        sent: false,
        error: None,
    })
}

#[derive(Deserialize)]
pub struct ActionInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Acknowledgement-only flow: the submission is logged, never delivered.
pub async fn action(Form(input): Form<ActionInput>) -> impl IntoResponse {
    let name = input.name.trim();
    let email = input.email.trim();
    let message = input.message.trim();

    if name.is_empty() || message.is_empty() || !email.contains('@') {
        return render(ContactTemplate {
            sent: false,
            error: Some("Please fill in your name, email, and message.".to_string()),
        });
    }

    tracing::info!(name = %name, email = %email, "contact form submitted");

    render(ContactTemplate {
        sent: true,
        error: None,
    })
}
