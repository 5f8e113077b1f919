use thiserror::Error;

/// Everything that can end a job early, as seen by the surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    #[error("No internet connection. Please check your connection and try again.")]
    Offline,

    #[error("Please enter a valid integer for the number of columns.")]
    InvalidColumnCount { input: String },

    #[error("Please enter a valid number of columns.")]
    NonPositiveColumnCount { value: i64 },

    #[error("Please enter at most {max} columns (got {value}).")]
    TooManyColumns { value: i64, max: usize },

    #[error("Unsupported image file: {path}")]
    UnsupportedImage { path: String },

    #[error("Text recognition failed: {reason}")]
    Recognition { reason: String },

    #[error("Failed to save {path}: {reason}")]
    Export { path: String, reason: String },

    #[error("Job cancelled")]
    Cancelled,

    #[error("Background job stopped unexpectedly: {reason}")]
    WorkerFailed { reason: String },
}

impl JobError {
    pub fn recognition(err: anyhow::Error) -> Self {
        Self::Recognition {
            reason: format!("{:#}", err),
        }
    }

    pub fn export(path: &std::path::Path, err: anyhow::Error) -> Self {
        Self::Export {
            path: path.display().to_string(),
            reason: format!("{:#}", err),
        }
    }

    /// Stable reason code, suitable for logs and exit reporting.
    pub fn code(&self) -> &'static str {
        match self {
            JobError::Offline => "offline",
            JobError::InvalidColumnCount { .. } => "invalid_column_count",
            JobError::NonPositiveColumnCount { .. } => "non_positive_column_count",
            JobError::TooManyColumns { .. } => "too_many_columns",
            JobError::UnsupportedImage { .. } => "unsupported_image",
            JobError::Recognition { .. } => "recognition_failed",
            JobError::Export { .. } => "export_failed",
            JobError::Cancelled => "cancelled",
            JobError::WorkerFailed { .. } => "worker_failed",
        }
    }

    /// Cancellation is the user's own doing and is not reported back to them.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, JobError::Cancelled)
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            JobError::InvalidColumnCount { .. }
                | JobError::NonPositiveColumnCount { .. }
                | JobError::TooManyColumns { .. }
        )
    }
}
