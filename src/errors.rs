use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Can not read email list {path}: {source}")]
    InputUnreadable {
        path: String,
        source: std::io::Error,
    },
    #[error("Can not write results to {path}: {source}")]
    OutputUnwritable {
        path: String,
        source: std::io::Error,
    },
    #[error("Unable to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("Unable to serialise results: {0}")]
    Serialization(#[from] serde_json::Error),
}
