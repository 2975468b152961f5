pub mod feed_item_repository;
pub mod interaction_repository;
pub mod user_repository;

pub use feed_item_repository::FeedItemRepository;
pub use interaction_repository::{FeedItemKind, InteractionRepository};
pub use user_repository::UserRepository;
