use std::str::FromStr;
use std::time::Duration;

use axum::extract::{Form, State};
use axum::response::IntoResponse;
use fitplan_planner::{ActivityLevel, Gender, Goal, PlanResult, UserProfile, generate_plan};
use serde::Deserialize;

use crate::routes::AppState;
use crate::template::render;

#[derive(askama::Template)]
#[template(path = "planner.html")]
pub struct PlannerTemplate {
    pub results: Option<PlanResult>,
    pub error: Option<String>,
}

pub async fn page() -> impl IntoResponse {
    render(PlannerTemplate {
        results: None,
        error: None,
    })
}

#[derive(Deserialize)]
pub struct ActionInput {
    pub age: String,
    pub weight: String,
    pub height: String,
    pub gender: String,
    pub goal: String,
    pub activity: String,
}

pub async fn action(
    State(app): State<AppState>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let profile = match parse_profile(&input) {
        Ok(profile) => profile,
        Err(message) => {
            return render(PlannerTemplate {
                results: None,
                error: Some(message),
            });
        }
    };

    // Cosmetic only, mirrors the page's "thinking" animation window.
    let delay = app.config.planner.thinking_delay_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    match generate_plan(&profile) {
        Ok(plan) => {
            tracing::info!(
                goal = %profile.goal,
                activity = %profile.activity,
                daily_calories = plan.daily_calories,
                "plan generated"
            );

            render(PlannerTemplate {
                results: Some(plan),
                error: None,
            })
        }
        Err(err) => render(PlannerTemplate {
            results: None,
            error: Some(err.to_string()),
        }),
    }
}

const NUMERIC_PROMPT: &str = "Please enter valid age, weight, and height.";

fn parse_profile(input: &ActionInput) -> Result<UserProfile, String> {
    let age = input
        .age
        .trim()
        .parse::<u32>()
        .map_err(|_| NUMERIC_PROMPT.to_string())?;
    let weight_kg = input
        .weight
        .trim()
        .parse::<f64>()
        .map_err(|_| NUMERIC_PROMPT.to_string())?;
    let height_cm = input
        .height
        .trim()
        .parse::<f64>()
        .map_err(|_| NUMERIC_PROMPT.to_string())?;

    let gender = Gender::from_str(input.gender.trim())
        .map_err(|_| "Please select a valid gender.".to_string())?;
    let goal =
        Goal::from_str(input.goal.trim()).map_err(|_| "Please select a valid goal.".to_string())?;
    let activity = ActivityLevel::from_str(input.activity.trim())
        .map_err(|_| "Please select a valid activity level.".to_string())?;

    Ok(UserProfile {
        age,
        weight_kg,
        height_cm,
        gender,
        goal,
        activity,
    })
}
