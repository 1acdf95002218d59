use thiserror::Error;

/// Speech synthesis errors
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Speech synthesis is not supported")]
    Unsupported,

    #[error("Speech queue closed: {0}")]
    Queue(String),

    #[error("Synthesizer error: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Local storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage quota exceeded: {needed} of {quota} characters")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Page loading errors
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
