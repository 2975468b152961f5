use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::{
    domain::auth::JwtManager,
    error::{AppError, AppResult},
    infrastructure::repositories::UserRepository,
};
use uuid::Uuid;

/// User context injected into request extensions after authentication
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Optional identity for endpoints that also serve anonymous callers
#[derive(Debug, Clone, Copy, Default)]
pub struct Viewer(pub Option<Uuid>);

pub type AuthState = (Arc<UserRepository>, Arc<JwtManager>);

/// Authentication middleware
pub async fn auth_middleware(
    State((user_repo, jwt_manager)): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())?
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let auth_user = authenticate(&user_repo, &jwt_manager, token).await?;
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Resolves the viewer when a token is sent; anonymous otherwise.
///
/// A token that is present but invalid is still rejected.
pub async fn viewer_middleware(
    State((user_repo, jwt_manager)): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let viewer = match bearer_token(request.headers())? {
        Some(token) => {
            let auth_user = authenticate(&user_repo, &jwt_manager, token).await?;
            Viewer(Some(auth_user.user_id))
        }
        None => Viewer(None),
    };

    request.extensions_mut().insert(viewer);

    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> AppResult<Option<&str>> {
    let Some(auth_header) = headers.get("authorization") else {
        return Ok(None);
    };

    let auth_header = auth_header
        .to_str()
        .map_err(|_| AppError::Unauthorized("Invalid authorization header".to_string()))?;

    auth_header
        .strip_prefix("Bearer ")
        .map(Some)
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization format".to_string()))
}

async fn authenticate(
    user_repo: &UserRepository,
    jwt_manager: &JwtManager,
    token: &str,
) -> AppResult<AuthUser> {
    let user_id = jwt_manager.extract_user_id(token)?;

    // Verify user exists in database
    let user = user_repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    Ok(AuthUser {
        user_id: user.id,
        email: user.email,
    })
}
