use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("no API key configured for the generative text service")]
    MissingApiKey,

    #[error("model invocation failed with status {status}: {message}")]
    Invocation { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("model returned no usable text")]
    EmptyResponse,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
