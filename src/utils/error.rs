use thiserror::Error;

#[derive(Error, Debug)]
pub enum SgaeaError {
    #[error("Validation error on {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("{entity} not found: {key}")]
    NotFoundError { entity: String, key: String },

    #[error("Student {student} is already enrolled in {course}")]
    AlreadyEnrolledError { student: String, course: String },

    #[error("Student {student} is not enrolled in {course}")]
    NotEnrolledError { student: String, course: String },

    #[error("No data available: {message}")]
    NoDataError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Lookup,
    Enrollment,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SgaeaError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SgaeaError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, key: impl ToString) -> Self {
        SgaeaError::NotFoundError {
            entity: entity.into(),
            key: key.to_string(),
        }
    }

    pub fn no_data(message: impl Into<String>) -> Self {
        SgaeaError::NoDataError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SgaeaError::ValidationError { .. } => ErrorCategory::Input,
            SgaeaError::NotFoundError { .. } => ErrorCategory::Lookup,
            SgaeaError::AlreadyEnrolledError { .. } | SgaeaError::NotEnrolledError { .. } => {
                ErrorCategory::Enrollment
            }
            SgaeaError::NoDataError { .. } => ErrorCategory::Data,
            SgaeaError::IoError(_)
            | SgaeaError::SerializationError(_)
            | SgaeaError::ConfigError { .. } => ErrorCategory::System,
        }
    }

    /// Domain errors leave state untouched; system errors may not.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input
            | ErrorCategory::Lookup
            | ErrorCategory::Enrollment
            | ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::System => match self {
                SgaeaError::ConfigError { .. } => ErrorSeverity::High,
                _ => ErrorSeverity::Critical,
            },
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SgaeaError::ValidationError { field, .. } => {
                format!("Check the value supplied for '{}' and try again", field)
            }
            SgaeaError::NotFoundError { entity, .. } => {
                format!("List the existing {} records and use one of them", entity.to_lowercase())
            }
            SgaeaError::AlreadyEnrolledError { .. } => {
                "Nothing to do: the enrollment already exists".to_string()
            }
            SgaeaError::NotEnrolledError { course, .. } => {
                format!("Enroll the student in {} first", course)
            }
            SgaeaError::NoDataError { .. } => "Assign some grades before asking for averages".to_string(),
            SgaeaError::IoError(_) => "Check that the data directory exists and is writable".to_string(),
            SgaeaError::SerializationError(_) => {
                "The snapshot file is corrupt; restore it from a backup or remove it".to_string()
            }
            SgaeaError::ConfigError { .. } => "Review the configuration file and CLI flags".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::System => format!("System error: {}", self),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SgaeaError>;
