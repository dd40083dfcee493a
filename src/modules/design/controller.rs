use axum::{extract::State, http::StatusCode, Json};
use tracing::error;
use validator::Validate;

use crate::modules::design::schema::{
    HealthResponse, MessageResponse, ValidateDesignRequest, ValidateDesignResponse,
    MISSING_INPUT_MESSAGE,
};
use crate::services::design_validation::ValidationOutcome;
use crate::AppState;

pub async fn validate_design(
    State(state): State<AppState>,
    Json(payload): Json<ValidateDesignRequest>,
) -> Result<Json<ValidateDesignResponse>, (StatusCode, Json<MessageResponse>)> {
    if let Err(e) = payload.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(MessageResponse { message: e.to_string() }),
        ));
    }

    let outcome = state
        .validator
        .validate(payload.input.as_deref(), payload.record_id.as_deref())
        .await
        .map_err(|e| {
            error!(error = %e, "design validation failed");
            (
                e.status_code(),
                Json(MessageResponse { message: e.user_message().to_string() }),
            )
        })?;

    match outcome {
        ValidationOutcome::Validated(result) => Ok(Json(ValidateDesignResponse::Validated(result))),
        ValidationOutcome::MissingInput => Ok(Json(ValidateDesignResponse::Rejected {
            error: MISSING_INPUT_MESSAGE.to_string(),
        })),
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
