pub mod gemini;
pub mod server;
