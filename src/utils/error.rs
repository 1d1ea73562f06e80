use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrganizeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Manifest parse error: {0}")]
    ManifestError(#[from] serde_json::Error),

    #[error("Cannot read manifest '{}': {source}", .path.display())]
    ManifestReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid timestamp '{value}': {reason}")]
    TimestampError { value: String, reason: String },

    #[error("Output directory '{}' already exists", .path.display())]
    OutputExistsError { path: PathBuf },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl OrganizeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OrganizeError::ManifestError(_)
            | OrganizeError::ManifestReadError { .. }
            | OrganizeError::TimestampError { .. } => ErrorCategory::Input,
            OrganizeError::OutputExistsError { .. } => ErrorCategory::Output,
            OrganizeError::ConfigError { .. } | OrganizeError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            OrganizeError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            OrganizeError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            OrganizeError::ManifestError(_) | OrganizeError::ManifestReadError { .. } => {
                "Check that the manifest is the memories.json file from the export"
            }
            OrganizeError::TimestampError { .. } => {
                "Dates must look like 2023-05-01T12:00:00.000Z; the manifest may be from an unsupported export version"
            }
            OrganizeError::OutputExistsError { .. } => {
                "Delete or move the existing output directory, or pass a different --output"
            }
            OrganizeError::ConfigError { .. } | OrganizeError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the TOML configuration file"
            }
            OrganizeError::IoError(_) => {
                "Check file permissions and free disk space, then run again with a fresh output directory"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            OrganizeError::OutputExistsError { path } => format!(
                "A folder named '{}' already exists. Please delete it before running.",
                path.display()
            ),
            OrganizeError::ManifestError(e) => format!("Could not parse the manifest: {}", e),
            OrganizeError::ManifestReadError { path, .. } => {
                format!("Could not open the manifest at '{}'", path.display())
            }
            OrganizeError::TimestampError { value, .. } => {
                format!("The manifest contains an unreadable date: {}", value)
            }
            other => other.to_string(),
        }
    }

    /// Process exit code for a run that ended with this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, OrganizeError>;
