use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Gemini HTTP {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Response could not be decoded: {0}")]
    Decode(String),
    #[error("Response contained no text")]
    EmptyResponse,
    #[error("Prompt blocked: {0}")]
    Blocked(String),
}
