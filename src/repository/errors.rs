use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    /// Structured 4xx payload from the catalog service; one entry per
    /// reported problem, kept in response order.
    #[error("{}", .0.join("; "))]
    Business(Vec<String>),

    #[error("The catalog service did not respond in time")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response from the catalog service: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RepositoryError::Timeout
        } else if err.is_decode() {
            RepositoryError::Unexpected(format!("Malformed response body: {err}"))
        } else {
            RepositoryError::Network(err.to_string())
        }
    }
}
