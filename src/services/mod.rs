use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod categories;
pub mod listing;
pub mod products;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The form's category select was still at its placeholder option.
    #[error("No category selected")]
    CategoryNotSelected,

    /// Client-side validation failed; one entry per invalid field. Never
    /// reaches the network layer.
    #[error("{}", .0.join("\n"))]
    Validation(Vec<String>),

    /// Business failure reported by the catalog service, verbatim and in
    /// response order.
    #[error("{}", .0.join("\n"))]
    Business(Vec<String>),

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Network(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Messages to surface to the operator, one per line, never summarised.
    pub fn lines(&self) -> Vec<String> {
        match self {
            ServiceError::Validation(lines) | ServiceError::Business(lines) => lines.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Business(lines) => ServiceError::Business(lines),
            RepositoryError::Timeout => {
                ServiceError::Network("The catalog service did not respond in time".to_string())
            }
            RepositoryError::Network(message) => ServiceError::Network(message),
            RepositoryError::Unexpected(message) => ServiceError::Internal(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_lines_keep_response_order() {
        let err = ServiceError::Business(vec![
            "Title required".to_string(),
            "Price must be positive".to_string(),
        ]);
        assert_eq!(
            err.lines(),
            vec![
                "Title required".to_string(),
                "Price must be positive".to_string()
            ]
        );
    }

    #[test]
    fn timeout_becomes_a_user_visible_network_error() {
        let err = ServiceError::from(RepositoryError::Timeout);
        assert!(matches!(err, ServiceError::Network(_)));
    }
}
