use super::{ProfileStats, Technology, User};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response for GET /api/me
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub email: String,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub technologies: Vec<Technology>,
    pub stats: ProfileStats,
}

impl ProfileResponse {
    pub fn new(user: User, technologies: Vec<Technology>, stats: ProfileStats) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            display_name: user.display_name.or(user.name),
            image: user.image,
            bio: user.bio,
            technologies,
            stats,
        }
    }
}

/// Request body for PATCH /api/me
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub image: Option<String>,
}

/// Request body for PUT /api/me/technologies
#[derive(Debug, Deserialize)]
pub struct UpdateTechnologiesRequest {
    pub technology_ids: Vec<Uuid>,
}
