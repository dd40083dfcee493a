use axum::http::StatusCode;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use crate::modules::design::crud::DesignRecords;
use crate::modules::design::model::{RawValidationResult, ValidationResult};
use crate::services::gemini::{GeminiError, TextGenerator};
use crate::services::prompt::design_validation_prompt;

/// Total calls made to the model for one request, counting the retry.
pub const MAX_ATTEMPTS: u32 = 2;
pub const OVERLOAD_RETRY_DELAY: Duration = Duration::from_millis(1500);

pub const OVERLOADED_MESSAGE: &str = "AI service is temporarily overloaded. Please try again.";
pub const GENERIC_FAILURE_MESSAGE: &str = "AI-based design validation failed";
pub const MALFORMED_RESPONSE_MESSAGE: &str = "AI service returned an incomplete validation result";

#[derive(Error, Debug)]
pub enum DesignValidationError {
    #[error("AI service overloaded: {0}")]
    Overloaded(#[source] GeminiError),
    #[error("AI request failed: {0}")]
    Upstream(#[source] GeminiError),
    #[error("Empty AI response")]
    EmptyResponse,
    #[error("AI response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("AI response does not match the validation schema: {0}")]
    MalformedResponse(String),
}

impl DesignValidationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DesignValidationError::Overloaded(_) => StatusCode::SERVICE_UNAVAILABLE,
            DesignValidationError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to callers. Error detail stays in the server log.
    pub fn user_message(&self) -> &'static str {
        match self {
            DesignValidationError::Overloaded(_) => OVERLOADED_MESSAGE,
            DesignValidationError::MalformedResponse(_) => MALFORMED_RESPONSE_MESSAGE,
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }
}

#[derive(Debug)]
pub enum ValidationOutcome {
    Validated(ValidationResult),
    MissingInput,
}

pub struct DesignValidator {
    generator: Arc<dyn TextGenerator>,
    records: Arc<dyn DesignRecords>,
}

impl DesignValidator {
    pub fn new(generator: Arc<dyn TextGenerator>, records: Arc<dyn DesignRecords>) -> Self {
        Self { generator, records }
    }

    /// A record id wins over inline text. Blank text counts as absent.
    pub async fn resolve_input(&self, input: Option<&str>, record_id: Option<&str>) -> Option<String> {
        let from_record = match record_id.filter(|id| !id.is_empty()) {
            Some(id) => self.records.find_design_text(id).await,
            None => None,
        };

        from_record
            .or_else(|| input.map(str::to_string))
            .filter(|text| !text.trim().is_empty())
    }

    pub async fn validate(
        &self,
        input: Option<&str>,
        record_id: Option<&str>,
    ) -> Result<ValidationOutcome, DesignValidationError> {
        let Some(cable_input) = self.resolve_input(input, record_id).await else {
            return Ok(ValidationOutcome::MissingInput);
        };

        let prompt = design_validation_prompt(&cable_input);

        let raw_text = self.generate_with_retry(&prompt).await.map_err(|e| {
            if e.is_overloaded() {
                DesignValidationError::Overloaded(e)
            } else {
                DesignValidationError::Upstream(e)
            }
        })?;

        let result = parse_model_output(&raw_text)?;

        info!(
            rows = result.validation.len(),
            confidence = result.confidence.overall,
            "design validated"
        );

        Ok(ValidationOutcome::Validated(result))
    }

    async fn generate_with_retry(&self, prompt: &str) -> Result<String, GeminiError> {
        let mut attempt = 1;

        loop {
            match self.generator.generate(prompt).await {
                Err(e) if e.is_overloaded() && attempt < MAX_ATTEMPTS => {
                    warn!(
                        attempt,
                        delay_ms = OVERLOAD_RETRY_DELAY.as_millis() as u64,
                        "AI service overloaded, retrying"
                    );
                    tokio::time::sleep(OVERLOAD_RETRY_DELAY).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}

/// Removes every markdown code-fence marker the model wrapped around its JSON.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

pub fn parse_model_output(raw_text: &str) -> Result<ValidationResult, DesignValidationError> {
    if raw_text.trim().is_empty() {
        return Err(DesignValidationError::EmptyResponse);
    }

    let cleaned = strip_code_fences(raw_text);

    let value: serde_json::Value =
        serde_json::from_str(&cleaned).map_err(DesignValidationError::InvalidJson)?;

    let raw: RawValidationResult = serde_json::from_value(value)
        .map_err(|e| DesignValidationError::MalformedResponse(e.to_string()))?;

    raw.normalize().map_err(DesignValidationError::MalformedResponse)
}
