//! Terminal counterpart of the design validator form: sends one request to
//! `POST /design/validate` and turns the answer into table rows.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::env;
use thiserror::Error;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

/// Shown in the Provided column when the model left the value out.
pub const MISSING_PROVIDED: &str = "—";

pub const FAILURE_ALERT: &str = "Validation failed. AI quota or backend issue.";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Please enter cable design details")]
    EmptyInput,
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Backend returned an error ({0})")]
    BackendStatus(StatusCode),
    #[error("Invalid response format")]
    InvalidFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub id: usize,
    pub field: String,
    pub provided: String,
    pub expected: String,
    pub status: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationView {
    pub rows: Vec<DisplayRow>,
    pub confidence: Option<f64>,
    pub reasoning: Option<String>,
}

impl ValidationView {
    pub fn confidence_percent(&self) -> Option<String> {
        self.confidence.map(|c| format!("{:.0}%", c * 100.0))
    }
}

fn cell(item: &Value, key: &str) -> Option<String> {
    match item.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// Maps a backend response body into rows. Anything without a `validation`
/// array is rejected as a whole.
pub fn map_response(body: &Value) -> Result<ValidationView, ClientError> {
    let entries = body
        .get("validation")
        .and_then(Value::as_array)
        .ok_or(ClientError::InvalidFormat)?;

    let rows = entries
        .iter()
        .enumerate()
        .map(|(id, item)| DisplayRow {
            id,
            field: cell(item, "field").unwrap_or_default(),
            provided: cell(item, "provided").unwrap_or_else(|| MISSING_PROVIDED.to_string()),
            expected: cell(item, "expected").unwrap_or_default(),
            status: cell(item, "status").unwrap_or_default(),
            comment: cell(item, "comment").unwrap_or_default(),
        })
        .collect();

    Ok(ValidationView {
        rows,
        confidence: body
            .get("confidence")
            .and_then(|c| c.get("overall"))
            .and_then(Value::as_f64),
        reasoning: body
            .get("reasoning")
            .and_then(Value::as_str)
            .filter(|r| !r.is_empty())
            .map(str::to_string),
    })
}

const HEADERS: [&str; 5] = ["Attribute", "Provided", "Expected", "Status", "Comment"];

pub fn render_table(rows: &[DisplayRow]) -> String {
    let cells: Vec<[&str; 5]> = rows
        .iter()
        .map(|r| {
            [
                r.field.as_str(),
                r.provided.as_str(),
                r.expected.as_str(),
                r.status.as_str(),
                r.comment.as_str(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, text) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(text.chars().count());
        }
    }

    let format_line = |columns: &[&str; 5]| {
        columns
            .iter()
            .zip(widths.iter())
            .map(|(text, width)| {
                let pad = width - text.chars().count();
                format!("{}{}", text, " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&format_line(&HEADERS));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in &cells {
        out.push_str(&format_line(row));
        out.push('\n');
    }
    out
}

pub struct DesignClient {
    client: Client,
    base_url: String,
}

impl DesignClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        let base_url =
            env::var("DESIGN_VALIDATOR_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        Self::new(base_url)
    }

    pub async fn validate(&self, input: &str) -> Result<ValidationView, ClientError> {
        if input.trim().is_empty() {
            return Err(ClientError::EmptyInput);
        }

        let response = self
            .client
            .post(format!("{}/design/validate", self.base_url))
            .json(&json!({ "input": input }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::BackendStatus(response.status()));
        }

        let body: Value = response.json().await?;
        map_response(&body)
    }
}
