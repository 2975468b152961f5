pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{ProfileResponse, UpdateProfileRequest, UpdateTechnologiesRequest};
pub use error::UserServiceError;
pub use model::{ProfileStats, Technology, User};
pub use service::{UserService, UserServiceApi};
