use thiserror::Error;

/// The only failure text an end user ever sees; details go to the log.
pub const USER_FACING_FAILURE: &str = "Blueprint generation failed. Please try again.";

#[derive(Error, Debug)]
pub enum BlueprintError {
    #[error("webhook transport error: {0}")] Transport(#[from] reqwest::Error),
    #[error("webhook request failed with status {0}")] HttpStatus(u16),
    #[error("webhook returned malformed JSON: {0}")] MalformedResponse(#[source] serde_json::Error),
    #[error("failed to encode intake record: {0}")] Encode(#[source] serde_json::Error),
    #[error("unknown intake field: {0}")] UnknownField(String),
    #[error("export failed: {0}")] Export(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BlueprintError>;
