use thiserror::Error;

/// Main error type for Codescribe operations
#[derive(Error, Debug)]
pub enum ScribeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to convert file: {0}")]
    Conversion(String),

    #[error("Failed to convert folder: {0}")]
    FolderConversion(String),

    #[error("File system error: {0}")]
    FileSystem(String),
}

pub type Result<T> = std::result::Result<T, ScribeError>;
