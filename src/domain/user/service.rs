use super::{
    error::UserServiceError,
    model::{normalize_image_url, normalize_username},
    ProfileResponse, UpdateProfileRequest, User,
};
use crate::infrastructure::repositories::UserRepository;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
pub trait UserServiceApi: Send + Sync {
    /// Profile with followed technologies and activity stats
    async fn get_profile(&self, user_id: Uuid) -> Result<ProfileResponse, UserServiceError>;

    async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<ProfileResponse, UserServiceError>;

    /// Replace the followed technologies, returning the updated profile
    async fn update_technologies(
        &self,
        user_id: Uuid,
        technology_ids: Vec<Uuid>,
    ) -> Result<ProfileResponse, UserServiceError>;
}

#[async_trait]
impl UserServiceApi for UserService {
    async fn get_profile(&self, user_id: Uuid) -> Result<ProfileResponse, UserServiceError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(UserServiceError::NotFound)?;

        self.build_profile(user).await
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<ProfileResponse, UserServiceError> {
        if request.username.is_none() && request.image.is_none() {
            return Err(UserServiceError::Invalid("Nothing to update".to_string()));
        }

        let username = request
            .username
            .as_deref()
            .map(normalize_username)
            .transpose()
            .map_err(UserServiceError::Invalid)?;
        let image = request
            .image
            .as_deref()
            .map(normalize_image_url)
            .transpose()
            .map_err(UserServiceError::Invalid)?;

        let user = self
            .user_repo
            .update_profile(user_id, username.as_deref(), image.as_deref())
            .await?
            .ok_or(UserServiceError::NotFound)?;

        tracing::info!(%user_id, "Profile updated");
        self.build_profile(user).await
    }

    async fn update_technologies(
        &self,
        user_id: Uuid,
        technology_ids: Vec<Uuid>,
    ) -> Result<ProfileResponse, UserServiceError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(UserServiceError::NotFound)?;

        self.user_repo
            .replace_technologies(user_id, &technology_ids)
            .await?;

        tracing::info!(%user_id, count = technology_ids.len(), "Technologies replaced");
        self.build_profile(user).await
    }
}

impl UserService {
    async fn build_profile(&self, user: User) -> Result<ProfileResponse, UserServiceError> {
        let (technologies, stats) = tokio::try_join!(
            self.user_repo.find_technologies(user.id),
            self.user_repo.profile_stats(user.id),
        )?;

        Ok(ProfileResponse::new(user, technologies, stats))
    }
}
