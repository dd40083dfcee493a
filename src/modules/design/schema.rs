use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::design::model::ValidationResult;

pub const MISSING_INPUT_MESSAGE: &str = "Input text or recordId required";

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ValidateDesignRequest {
    #[validate(length(max = 10000, message = "Input too long"))]
    pub input: Option<String>,
    pub record_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ValidateDesignResponse {
    Validated(ValidationResult),
    Rejected { error: String },
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
