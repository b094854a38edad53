use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Can't read the file {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't copy {} to {}: {source}", path.display(), destination.display())]
    CopyError {
        path: PathBuf,
        destination: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output directory {} is not usable: {source}", path.display())]
    OutputDirError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read the operator's answer: {source}")]
    PromptError {
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed at {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

/// 錯誤類別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    FileSystem,
    Interaction,
    Serialization,
}

/// 錯誤嚴重程度，決定程式退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl TriageError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TriageError::InvalidConfigValueError { .. }
            | TriageError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            TriageError::IoError(_)
            | TriageError::ReadError { .. }
            | TriageError::CopyError { .. }
            | TriageError::OutputDirError { .. } => ErrorCategory::FileSystem,
            TriageError::PromptError { .. } => ErrorCategory::Interaction,
            TriageError::SerializationError(_) => ErrorCategory::Serialization,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 單一檔案的錯誤不會中斷整批處理
            TriageError::ReadError { .. } | TriageError::CopyError { .. } => ErrorSeverity::Medium,
            TriageError::InvalidConfigValueError { .. }
            | TriageError::ConfigValidationError { .. }
            | TriageError::PromptError { .. }
            | TriageError::SerializationError(_) => ErrorSeverity::High,
            TriageError::IoError(_) | TriageError::OutputDirError { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TriageError::ReadError { .. } => {
                "Check the file permissions and that the file still exists"
            }
            TriageError::CopyError { .. } => {
                "Check free disk space and write permissions on the output directory"
            }
            TriageError::OutputDirError { .. } => {
                "Choose another --output directory or fix its permissions"
            }
            TriageError::PromptError { .. } => {
                "Run with --mode auto when standard input is not a terminal"
            }
            TriageError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the rules file"
            }
            TriageError::ConfigValidationError { .. } => {
                "Make sure the rules file exists and is valid TOML"
            }
            TriageError::SerializationError(_) => "Check the --report destination",
            TriageError::IoError(_) => "Check that stdout and the working directory are writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::FileSystem => format!("File system problem: {}", self),
            ErrorCategory::Interaction => format!("Interactive confirmation failed: {}", self),
            ErrorCategory::Serialization => format!("Could not write the report: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, TriageError>;
