pub mod design_validation;
pub mod gemini;
pub mod prompt;
