#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::Router;
use axum_test::TestServer;
use cable_validator::modules::design::crud::CannedDesignRecords;
use cable_validator::services::design_validation::DesignValidator;
use cable_validator::services::gemini::{GeminiError, TextGenerator};
use cable_validator::{modules, AppState};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

/// Replays canned model replies in order and records every prompt it saw.
#[derive(Default)]
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, GeminiError>>>,
    prompts: Mutex<Vec<String>>,
    call_times: Mutex<Vec<Instant>>,
}

impl ScriptedGenerator {
    pub fn new(replies: Vec<Result<String, GeminiError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            ..Default::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.call_times.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.call_times.lock().unwrap().push(Instant::now());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GeminiError::InvalidResponse("no scripted reply".to_string())))
    }
}

pub fn overloaded() -> Result<String, GeminiError> {
    Err(GeminiError::ApiError {
        status: StatusCode::SERVICE_UNAVAILABLE,
        message: "The model is overloaded. Please try again later.".to_string(),
    })
}

pub fn api_error(status: StatusCode) -> Result<String, GeminiError> {
    Err(GeminiError::ApiError {
        status,
        message: "request rejected".to_string(),
    })
}

pub fn reply(body: Value) -> Result<String, GeminiError> {
    Ok(body.to_string())
}

pub fn model_answer(confidence: f64) -> Value {
    json!({
        "fields": {
            "standard": "IEC 60502-1",
            "voltage": "0.6/1 kV",
            "conductor_material": "Cu",
            "conductor_class": "Class 2",
            "csa": 16,
            "insulation_material": "PVC",
            "insulation_thickness": 0.9
        },
        "validation": [
            {
                "field": "csa",
                "provided": "16 sqmm",
                "expected": "Standard size per IEC 60228",
                "status": "PASS",
                "comment": "16 sqmm is a standard Class 2 size."
            },
            {
                "field": "insulation_thickness",
                "provided": "0.9 mm",
                "expected": "1.0 mm nominal for 16 sqmm PVC",
                "status": "WARN",
                "comment": "Slightly below the usual nominal thickness."
            }
        ],
        "reasoning": "The design is borderline and requires review.",
        "confidence": { "overall": confidence }
    })
}

pub fn validator(generator: Arc<ScriptedGenerator>) -> DesignValidator {
    DesignValidator::new(generator, Arc::new(CannedDesignRecords))
}

pub fn setup_test_server(generator: Arc<ScriptedGenerator>) -> TestServer {
    let state = AppState {
        validator: Arc::new(validator(generator)),
    };

    let app = Router::new()
        .merge(modules::design::routes::routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}
