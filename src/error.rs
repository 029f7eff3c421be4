use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CjkScanError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Directory does not exist or is not a directory: {path}")]
    InvalidDirectory { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Permission denied: {path}")]
    Permission { path: String },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory walk failed: {message}")]
    Walk { message: String },
}

impl CjkScanError {
    /// Classify an I/O failure on `path` into the matching variant.
    pub fn from_io(path: &Path, error: std::io::Error) -> Self {
        let path = path.display().to_string();
        match error.kind() {
            std::io::ErrorKind::NotFound => CjkScanError::FileNotFound { path },
            std::io::ErrorKind::PermissionDenied => CjkScanError::Permission { path },
            _ => CjkScanError::Read {
                path,
                source: error,
            },
        }
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for CjkScanError {
    fn user_message(&self) -> String {
        match self {
            CjkScanError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            CjkScanError::InvalidDirectory { path } => {
                format!("Directory does not exist or is not a directory: {}", path)
            }
            CjkScanError::FileNotFound { path } => {
                format!("File not found: {}", path)
            }
            CjkScanError::Permission { path } => {
                format!("Permission denied, cannot read: {}", path)
            }
            CjkScanError::Read { path, source } => {
                format!("Unexpected error while reading {}: {}", path, source)
            }
            CjkScanError::Walk { message } => {
                format!("Could not read directory entry: {}", message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            CjkScanError::Config { .. } => Some(
                "Check your configuration file syntax and the values passed on the command line.".to_string()
            ),
            CjkScanError::InvalidDirectory { .. } => Some(
                "Pass the directories to scan as positional arguments, or set [scan].directories in cjkscan.toml.".to_string()
            ),
            CjkScanError::Permission { .. } => Some(
                "Ensure you have read permission for the files being scanned.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for CjkScanError {
    fn from(error: toml::de::Error) -> Self {
        CjkScanError::Config {
            message: error.to_string(),
        }
    }
}

impl From<walkdir::Error> for CjkScanError {
    fn from(error: walkdir::Error) -> Self {
        if let Some(path) = error.path() {
            if let Some(io) = error.io_error() {
                if io.kind() == std::io::ErrorKind::PermissionDenied {
                    return CjkScanError::Permission {
                        path: path.display().to_string(),
                    };
                }
            }
        }

        CjkScanError::Walk {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CjkScanError>;
