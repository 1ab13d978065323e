use thiserror::Error;

/// All possible errors in the course planner
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Course `{0}` is not registered")]
    UnknownItem(String),

    #[error("Invalid requisite `{0}`: expected BEFORE:AFTER")]
    InvalidRequisite(String),

    #[error("Course name cannot be empty")]
    EmptyCourseName,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlanError>;
