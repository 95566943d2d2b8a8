use thiserror::Error;

#[derive(Error, Debug)]
pub enum FsmlocError {
    #[error("scan path is empty")]
    EmptyScanPath,

    #[error("resolve absolute path: {0}")]
    ResolvePath(#[source] std::io::Error),

    #[error("stat path: {0}")]
    StatPath(#[source] std::io::Error),

    #[error("unsupported file extension: {0}")]
    UnsupportedExtension(String),

    #[error("workers must be greater than 0")]
    InvalidWorkerCount,

    #[error("walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("task queue closed before the walk finished")]
    TaskQueueClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FsmlocError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
