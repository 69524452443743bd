//! Error types for message extraction

use thiserror::Error;

/// Errors that can occur while turning a raw message into tokens
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Failed to parse the message structure
    #[error("Failed to parse message structure: {0}")]
    Structure(String),

    /// Failed to decode a declared body part
    #[error("Failed to decode message body: {0}")]
    Decode(String),

    /// Raw bytes could not be decoded as text
    #[error("Failed to decode bytes as text: {0}")]
    Encoding(String),

    /// Failed to read a message file
    #[error("Failed to read message file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
