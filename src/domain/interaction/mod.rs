pub mod error;
pub mod model;
pub mod service;
pub mod store;

pub use error::InteractionServiceError;
pub use model::{BookmarkToggleResponse, EngagementCounts, InteractionState, LikeToggleResponse};
pub use service::{InteractionService, InteractionServiceApi};
pub use store::{InteractionLookup, InteractionStateStore};
