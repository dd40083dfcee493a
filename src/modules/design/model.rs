use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Highest confidence ever reported back to callers.
pub const CONFIDENCE_CEILING: f64 = 0.95;

pub const FALLBACK_REASONING: &str = "The design was reviewed, but the overall engineering assessment could not be clearly determined from the provided information.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidationStatus {
    Pass,
    Warn,
    Fail,
}

/// Parameters the model extracted from the free-text design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignFields {
    pub standard: Option<String>,
    pub voltage: Option<String>,
    pub conductor_material: Option<String>,
    pub conductor_class: Option<String>,
    pub csa: Option<f64>,
    pub insulation_material: Option<String>,
    pub insulation_thickness: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationEntry {
    pub field: String,
    #[serde(default)]
    pub provided: Option<String>,
    pub expected: String,
    pub status: ValidationStatus,
    pub comment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Confidence {
    pub overall: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub fields: DesignFields,
    pub validation: Vec<ValidationEntry>,
    pub reasoning: String,
    pub confidence: Confidence,
}

/// The model's answer as parsed, before the reasoning and confidence policies apply.
#[derive(Debug, Deserialize)]
pub struct RawValidationResult {
    pub fields: DesignFields,
    pub validation: Vec<ValidationEntry>,
    #[serde(default)]
    pub reasoning: Option<Value>,
    pub confidence: Confidence,
}

impl RawValidationResult {
    pub fn normalize(self) -> Result<ValidationResult, String> {
        if !self.confidence.overall.is_finite() || self.confidence.overall < 0.0 {
            return Err(format!(
                "confidence.overall must be a non-negative number, got {}",
                self.confidence.overall
            ));
        }

        let reasoning = match self.reasoning {
            Some(Value::String(text)) if !text.is_empty() => text,
            _ => FALLBACK_REASONING.to_string(),
        };

        Ok(ValidationResult {
            fields: self.fields,
            validation: self.validation,
            reasoning,
            confidence: Confidence {
                overall: self.confidence.overall.min(CONFIDENCE_CEILING),
            },
        })
    }
}
