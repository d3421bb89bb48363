use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::ApplicationError;
use crate::shared::core::email::Email;
use crate::shared::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignUpParams {
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct SignUpResponse {
    pub message: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignUpParams>,
) -> Response {
    let Some(raw_email) = params.email else {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, "Missing email");
    };
    let email = match Email::parse(raw_email) {
        Ok(email) => email,
        Err(e) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
    };

    let command = SignUpForActivity {
        activity_name,
        email,
    };

    match state.sign_up_handler.handle(command).await {
        Ok(confirmation) => (
            StatusCode::OK,
            Json(SignUpResponse {
                message: confirmation.message(),
            }),
        )
            .into_response(),
        Err(e @ ApplicationError::Domain(_)) => {
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e @ ApplicationError::ActivityNotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, e.to_string())
        }
        Err(e @ ApplicationError::Store(_)) => {
            error!(error = %e, "signup failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
