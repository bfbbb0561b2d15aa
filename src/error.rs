use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeydashError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("workflow dispatch failed: HTTP {status}: {body}")]
    Dispatch { status: u16, body: String },

    #[error("fetch failed: HTTP {0}")]
    Fetch(u16),

    #[error("invalid JSON document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KeydashError>;
