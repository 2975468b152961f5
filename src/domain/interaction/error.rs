use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum InteractionServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("article not found")]
    NotFound,
    #[error("bookmark not found")]
    BookmarkNotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for InteractionServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => InteractionServiceError::Invalid(msg),
            AppError::NotFound(_) => InteractionServiceError::NotFound,
            _ => InteractionServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<InteractionServiceError> for AppError {
    fn from(err: InteractionServiceError) -> Self {
        match err {
            InteractionServiceError::Invalid(msg) => AppError::BadRequest(msg),
            InteractionServiceError::NotFound => AppError::NotFound("Article not found".to_string()),
            InteractionServiceError::BookmarkNotFound => {
                AppError::NotFound("Bookmark not found".to_string())
            }
            InteractionServiceError::Dependency(msg) => AppError::Internal(msg),
            InteractionServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
