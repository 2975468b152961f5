use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum FeedServiceError {
    #[error("feed unavailable: {0}")]
    Unavailable(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("article not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for FeedServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => FeedServiceError::InvalidRequest(msg),
            AppError::NotFound(_) => FeedServiceError::NotFound,
            _ => FeedServiceError::Unavailable(err.to_string()),
        }
    }
}

impl From<FeedServiceError> for AppError {
    fn from(err: FeedServiceError) -> Self {
        match err {
            FeedServiceError::InvalidRequest(msg) => AppError::BadRequest(msg),
            FeedServiceError::NotFound => AppError::NotFound("Article not found".to_string()),
            FeedServiceError::Unavailable(msg) => AppError::FeedUnavailable(msg),
            FeedServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
